use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use netbanx_gateway::{BillingInfo, CardInfo, Config, Credentials, PurchaseRequest};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const ACCOUNT_NUMBER: &str = "1001234567";
pub const API_KEY: &str = "devcentre322:B-qa2-0-54b92ae0";

#[derive(Debug, Clone)]
pub struct CapturedAuth {
    pub account: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Stand-in for the Netbanx API serving canned bodies.
#[derive(Clone)]
pub struct FakeNetbanx {
    monitor_body: Arc<String>,
    auth_body: Arc<String>,
    pub monitor_calls: Arc<AtomicUsize>,
    pub auth_calls: Arc<AtomicUsize>,
    pub captured: Arc<Mutex<Option<CapturedAuth>>>,
}

impl FakeNetbanx {
    pub fn new(monitor_body: &str, auth_body: &str) -> Self {
        Self {
            monitor_body: Arc::new(monitor_body.to_string()),
            auth_body: Arc::new(auth_body.to_string()),
            monitor_calls: Arc::new(AtomicUsize::new(0)),
            auth_calls: Arc::new(AtomicUsize::new(0)),
            captured: Arc::new(Mutex::new(None)),
        }
    }

    pub fn monitor_calls(&self) -> usize {
        self.monitor_calls.load(Ordering::SeqCst)
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn captured(&self) -> CapturedAuth {
        self.captured
            .lock()
            .unwrap()
            .clone()
            .expect("no authorization request captured")
    }

    /// Serves on an ephemeral local port and returns its address.
    pub async fn spawn(&self) -> SocketAddr {
        let app = Router::new()
            .route("/cardpayments/monitor", get(monitor))
            .route("/cardpayments/v1/accounts/:account/auths", post(auths))
            .with_state(self.clone());
        serve(app).await
    }
}

async fn monitor(State(fake): State<FakeNetbanx>) -> String {
    fake.monitor_calls.fetch_add(1, Ordering::SeqCst);
    fake.monitor_body.to_string()
}

async fn auths(
    State(fake): State<FakeNetbanx>,
    Path(account): Path<String>,
    headers: HeaderMap,
    body: String,
) -> String {
    fake.auth_calls.fetch_add(1, Ordering::SeqCst);
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    *fake.captured.lock().unwrap() = Some(CapturedAuth {
        account,
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });
    fake.auth_body.to_string()
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn config_for(addr: SocketAddr) -> Config {
    Config {
        api_url: Some(format!("http://{addr}")),
        credentials: Credentials::new(ACCOUNT_NUMBER, API_KEY),
        request_timeout_ms: 2000,
        connect_timeout_ms: 1000,
        ..Config::default()
    }
}

pub fn purchase(price: Decimal) -> PurchaseRequest {
    PurchaseRequest {
        purchase_key: "c9a1f3e8b2d4".to_string(),
        price,
        currency: "USD".to_string(),
        customer_ip: "203.0.113.9".to_string(),
        card_info: CardInfo {
            name: "Jane Doe".to_string(),
            number: "4530910000012345".to_string(),
            exp_month: "11".to_string(),
            exp_year: "2030".to_string(),
            cvc: "321".to_string(),
        },
        billing_info: BillingInfo {
            street: Some("100 Queen St W".to_string()),
            city: Some("Toronto".to_string()),
            state: Some("ON".to_string()),
            zip: Some("M5H 2N2".to_string()),
            country: Some("CA".to_string()),
        },
        downloads: serde_json::json!([{ "id": 12, "options": { "price_id": 1 } }]),
        cart_details: serde_json::json!([]),
        user_info: serde_json::json!({ "email": "jane@example.com" }),
        user_email: "jane@example.com".to_string(),
        date: Utc::now(),
    }
}
