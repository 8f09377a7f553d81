// Business logic services
// Gas oracle client and the snapshot resolver built on top of it.

pub mod gas_oracle;
pub mod gas_price_resolver;

pub use gas_oracle::{EtherscanGasOracle, GasOracle, GasOracleError, GasReading};
pub use gas_price_resolver::{
    GasPriceResolver, FALLBACK_HIGH, FALLBACK_LOW, FALLBACK_STANDARD,
};
