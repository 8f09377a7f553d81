use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::config::{CredentialPlacement, GasOracleConfig};

/// Raw three-tier reading from an upstream oracle.
///
/// Fields stay optional on purpose: upstreams occasionally return partially
/// populated payloads, and the resolver substitutes per-field defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GasReading {
    pub safe: Option<u64>,
    pub standard: Option<u64>,
    pub fast: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum GasOracleError {
    #[error("GET request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid status code: {0}")]
    StatusCode(StatusCode),

    #[error("could not parse the oracle response: {0}")]
    ParseResponse(#[from] serde_json::Error),

    #[error("response is missing the result payload")]
    MissingResult,
}

/// A provider of current network gas price recommendations.
#[async_trait]
pub trait GasOracle: Send + Sync {
    async fn fetch(&self) -> Result<GasReading, GasOracleError>;
}

/// Client for Etherscan-compatible gas trackers
/// (`?module=gastracker&action=gasoracle`).
///
/// The request timeout is enforced at the reqwest client level, so a hung
/// upstream surfaces as `GasOracleError::Request` within the configured bound.
#[derive(Debug, Clone)]
pub struct EtherscanGasOracle {
    client: Client,
    base_url: String,
    api_key: String,
    credential: CredentialPlacement,
}

impl EtherscanGasOracle {
    pub fn new(config: &GasOracleConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            credential: config.credential.clone(),
        }
    }
}

#[async_trait]
impl GasOracle for EtherscanGasOracle {
    async fn fetch(&self) -> Result<GasReading, GasOracleError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("module", "gastracker"), ("action", "gasoracle")]);

        request = match &self.credential {
            CredentialPlacement::QueryParam { name } => {
                request.query(&[(name.as_str(), self.api_key.as_str())])
            }
            CredentialPlacement::Header { name } => {
                request.header(name.as_str(), self.api_key.as_str())
            }
        };

        let res = request.send().await?;
        if res.status() != StatusCode::OK {
            return Err(GasOracleError::StatusCode(res.status()));
        }

        let response: GasOracleResponse = serde_json::from_slice(&res.bytes().await?)?;
        let result = response.result.ok_or(GasOracleError::MissingResult)?;
        let reading = GasReading::from(result);
        trace!(?reading, "gas oracle reading");
        Ok(reading)
    }
}

/// Envelope returned by Etherscan-style oracles. On rate-limit errors the
/// `result` field degrades to a plain string, which fails the typed parse and
/// is reported as a malformed body.
#[derive(Debug, Deserialize)]
struct GasOracleResponse {
    #[serde(default)]
    result: Option<GasOracleResult>,
}

/// Field names are upstream-specific and mapped here, never assumed stable.
/// Etherscan emits `ProposeGasPrice` for the mid tier; some mirrors call it
/// `StandardGasPrice`.
#[derive(Debug, Deserialize)]
struct GasOracleResult {
    #[serde(rename = "SafeGasPrice")]
    safe_gas_price: Option<Value>,
    #[serde(rename = "ProposeGasPrice", alias = "StandardGasPrice")]
    propose_gas_price: Option<Value>,
    #[serde(rename = "FastGasPrice")]
    fast_gas_price: Option<Value>,
}

impl From<GasOracleResult> for GasReading {
    fn from(result: GasOracleResult) -> Self {
        GasReading {
            safe: result.safe_gas_price.as_ref().and_then(as_price),
            standard: result.propose_gas_price.as_ref().and_then(as_price),
            fast: result.fast_gas_price.as_ref().and_then(as_price),
        }
    }
}

/// Oracles quote prices as strings ("15") or bare numbers (15); anything else
/// counts as absent so the per-field fallback kicks in.
fn as_price(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn as_price_accepts_strings_and_numbers() {
        assert_eq!(as_price(&json!("15")), Some(15));
        assert_eq!(as_price(&json!(" 22 ")), Some(22));
        assert_eq!(as_price(&json!(40)), Some(40));
    }

    #[test]
    fn as_price_rejects_garbage() {
        assert_eq!(as_price(&json!("abc")), None);
        assert_eq!(as_price(&json!("-5")), None);
        assert_eq!(as_price(&json!(15.5)), None);
        assert_eq!(as_price(&json!(null)), None);
        assert_eq!(as_price(&json!({"nested": 1})), None);
    }

    #[test]
    fn result_maps_etherscan_field_names() {
        let response: GasOracleResponse = serde_json::from_value(json!({
            "status": "1",
            "message": "OK",
            "result": {
                "SafeGasPrice": "15",
                "ProposeGasPrice": "22",
                "FastGasPrice": "40"
            }
        }))
        .unwrap();

        let reading = GasReading::from(response.result.unwrap());
        assert_eq!(
            reading,
            GasReading {
                safe: Some(15),
                standard: Some(22),
                fast: Some(40),
            }
        );
    }

    #[test]
    fn standard_gas_price_alias_is_accepted() {
        let response: GasOracleResponse = serde_json::from_value(json!({
            "result": {
                "SafeGasPrice": "15",
                "StandardGasPrice": "22",
                "FastGasPrice": "40"
            }
        }))
        .unwrap();

        let reading = GasReading::from(response.result.unwrap());
        assert_eq!(reading.standard, Some(22));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let response: GasOracleResponse = serde_json::from_value(json!({
            "result": { "FastGasPrice": "40" }
        }))
        .unwrap();

        let reading = GasReading::from(response.result.unwrap());
        assert_eq!(reading.safe, None);
        assert_eq!(reading.standard, None);
        assert_eq!(reading.fast, Some(40));
    }

    #[test]
    fn string_result_payload_fails_the_typed_parse() {
        // Etherscan degrades `result` to a string on rate limiting
        let parsed: Result<GasOracleResponse, _> = serde_json::from_value(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Max rate limit reached"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn absent_result_is_reported() {
        let response: GasOracleResponse =
            serde_json::from_value(json!({ "status": "0", "message": "NOTOK" })).unwrap();
        assert!(response.result.is_none());
    }
}
