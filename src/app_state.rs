//! Application state shared across all handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::Config;
use crate::services::{EtherscanGasOracle, GasPriceResolver};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup
    pub config: Config,
    /// Gas price resolver backed by the configured upstream oracle
    pub gas_resolver: GasPriceResolver,
    /// Handle for rendering the Prometheus exposition at /metrics
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(config: Config, metrics_handle: PrometheusHandle) -> Self {
        let oracle = EtherscanGasOracle::new(&config.gas_oracle);
        let gas_resolver = GasPriceResolver::new(Arc::new(oracle));

        Self {
            config,
            gas_resolver,
            metrics_handle,
        }
    }
}
