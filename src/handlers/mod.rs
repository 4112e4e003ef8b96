pub mod metrics;
pub mod orders;
pub mod payments;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::services::PaymentService;

pub fn router(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/checkout", post(payments::checkout))
        .route("/orders/:id", get(orders::get_order))
        .route("/metrics", get(metrics::get_metrics))
        .with_state(service)
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}
