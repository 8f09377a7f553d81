//! End-to-end tests for the dashboard API surface, run in-process against
//! the assembled router.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gasguard_backend::app_state::AppState;
use gasguard_backend::config::{Config, CredentialPlacement, GasOracleConfig};
use gasguard_backend::router::build_router;

const WALLET: &str = "0xa0b86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2";
const SPENDER: &str = "0xe592427a0aece92de3edee1f18e0157c05861564";

fn test_config(oracle_url: String) -> Config {
    Config {
        environment: "test".to_string(),
        port: 0,
        request_timeout: 5,
        gas_oracle: GasOracleConfig {
            base_url: oracle_url,
            api_key: "test-key".to_string(),
            credential: CredentialPlacement::QueryParam {
                name: "apikey".to_string(),
            },
            timeout_secs: 1,
        },
    }
}

fn test_app(oracle_url: String) -> axum::Router {
    let metrics_handle = PrometheusBuilder::new().build_recorder().handle();
    build_router(AppState::new(test_config(oracle_url), metrics_handle))
}

/// App wired to an upstream that refuses connections
fn app_with_dead_oracle() -> axum::Router {
    test_app("http://127.0.0.1:9/api".to_string())
}

async fn mock_oracle() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("module", "gastracker"))
        .and(query_param("action", "gasoracle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": {
                "SafeGasPrice": "15",
                "ProposeGasPrice": "22",
                "FastGasPrice": "40"
            }
        })))
        .mount(&server)
        .await;
    server
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_banner_lists_endpoints() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "GasGuard Backend API is running!");
    assert!(
        json["endpoints"]
            .as_array()
            .unwrap()
            .contains(&json!("/api/okx/gas"))
    );
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["environment"], "test");
}

#[tokio::test]
async fn gas_endpoint_serves_live_upstream_data() {
    let oracle = mock_oracle().await;
    let app = test_app(format!("{}/api", oracle.uri()));

    let response = app.oneshot(get("/api/okx/gas")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["low"], 15);
    assert_eq!(json["standard"], 22);
    assert_eq!(json["high"], 40);
    assert_eq!(json["source"], "Primary");
    assert!(json["lastUpdated"].is_string());
}

#[tokio::test]
async fn gas_endpoint_degrades_to_fallback_with_200() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/okx/gas")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["low"], 20);
    assert_eq!(json["standard"], 25);
    assert_eq!(json["high"], 30);
    assert_eq!(json["source"], "fallback");
}

#[tokio::test]
async fn alerts_returns_the_static_feed() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/alerts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let alerts = json["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["type"], "warning");
    assert_eq!(alerts[1]["type"], "security");
    assert_eq!(alerts[1]["priority"], "high");
}

#[tokio::test]
async fn alert_dismiss_echoes_the_id() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(post_json("/api/alerts/2/dismiss", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Alert 2 dismissed");
}

#[tokio::test]
async fn alert_action_echoes_action_and_id() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(post_json(
            "/api/alerts/1/action",
            json!({ "action": "ignore" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Action ignore taken for alert 1");
}

#[tokio::test]
async fn alert_action_without_action_is_rejected() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(post_json("/api/alerts/1/action", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VAL_3002");
    assert_eq!(json["error"]["field"], "action");
}

#[tokio::test]
async fn approvals_requires_an_address() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/okx/approvals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VAL_3002");
    assert_eq!(json["error"]["field"], "address");
}

#[tokio::test]
async fn approvals_rejects_a_malformed_address() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(get("/api/okx/approvals?address=0x1234"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VAL_3004");
}

#[tokio::test]
async fn approvals_lists_the_wallet_approvals() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(get(&format!("/api/okx/approvals?address={}", WALLET)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalCount"], 1);
    assert_eq!(json["approvals"][0]["tokenSymbol"], "USDC");
    assert_eq!(json["approvals"][0]["spender"], "Uniswap V3");
}

#[tokio::test]
async fn revoke_prepares_a_transaction_passthrough() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(post_json(
            "/api/approvals/revoke",
            json!({
                "tokenAddress": WALLET,
                "spenderAddress": SPENDER,
                "userAddress": WALLET
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["transactionData"]["to"], WALLET);
    assert_eq!(json["transactionData"]["data"], "0x");
    assert_eq!(json["transactionData"]["gasLimit"], "21000");
}

#[tokio::test]
async fn revoke_rejects_missing_fields() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(post_json(
            "/api/approvals/revoke",
            json!({ "tokenAddress": WALLET }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VAL_3002");
    assert_eq!(json["error"]["field"], "spenderAddress");
}

#[tokio::test]
async fn security_scan_defaults_to_unknown_contract() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/okx/security")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["contractAddress"], "unknown");
    assert_eq!(json["securityScore"], 85);
    assert_eq!(json["checks"]["verified"], true);
    assert_eq!(json["checks"]["hasProxy"], false);
}

#[tokio::test]
async fn security_scan_echoes_the_contract_address() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(get(&format!(
            "/api/okx/security?contractAddress={}",
            SPENDER
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["contractAddress"], SPENDER);
    assert_eq!(json["riskLevel"], "Low");
}

#[tokio::test]
async fn security_scan_rejects_a_malformed_address() {
    let app = app_with_dead_oracle();

    let response = app
        .oneshot(get("/api/okx/security?contractAddress=nonsense"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn markets_returns_the_tracked_pairs() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/markets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let markets = json["data"].as_array().unwrap();
    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0]["id"], "ETH-USDT");
    assert_eq!(markets[1]["id"], "BTC-USDT");
    assert_eq!(markets[1]["change24h"], -1.23);
}

#[tokio::test]
async fn unknown_route_is_a_structured_404() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "RES_4001");
    assert_eq!(json["error"]["message"], "Endpoint not found");
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let app = app_with_dead_oracle();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}
