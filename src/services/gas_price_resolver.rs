use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use tracing::{debug, warn};

use crate::models::gas::{GasSnapshot, GasSource};
use crate::services::gas_oracle::GasOracle;

/// Static floor served when no live upstream data is available
pub const FALLBACK_LOW: u64 = 20;
pub const FALLBACK_STANDARD: u64 = 25;
pub const FALLBACK_HIGH: u64 = 30;

/// Resolves gas price snapshots, hiding upstream unreliability from every
/// consumer.
///
/// `resolve` is total: all runtime upstream failures are absorbed here and
/// reported through tracing and the `gas_oracle_*` counters, never to the
/// caller. The only shared state is the oracle client built from read-only
/// startup configuration, so concurrent calls need no coordination.
#[derive(Clone)]
pub struct GasPriceResolver {
    oracle: Arc<dyn GasOracle>,
}

impl GasPriceResolver {
    pub fn new(oracle: Arc<dyn GasOracle>) -> Self {
        Self { oracle }
    }

    /// Produce a fresh snapshot.
    ///
    /// Tries the upstream oracle once, bounded by its configured timeout.
    /// A reachable upstream yields `source = Primary` with any individually
    /// missing or unparseable tier replaced by its static default; any
    /// transport or payload failure yields the full fallback snapshot.
    pub async fn resolve(&self) -> GasSnapshot {
        counter!("gas_oracle_requests_total").increment(1);

        match self.oracle.fetch().await {
            Ok(reading) => {
                debug!(?reading, "resolved gas prices from upstream oracle");
                GasSnapshot {
                    low: reading.safe.unwrap_or(FALLBACK_LOW),
                    standard: reading.standard.unwrap_or(FALLBACK_STANDARD),
                    high: reading.fast.unwrap_or(FALLBACK_HIGH),
                    retrieved_at: Utc::now(),
                    source: GasSource::Primary,
                }
            }
            Err(err) => {
                warn!(error = %err, "gas oracle request failed, serving fallback prices");
                counter!("gas_oracle_failures_total").increment(1);
                GasSnapshot {
                    low: FALLBACK_LOW,
                    standard: FALLBACK_STANDARD,
                    high: FALLBACK_HIGH,
                    retrieved_at: Utc::now(),
                    source: GasSource::Fallback,
                }
            }
        }
    }
}
