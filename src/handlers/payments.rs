use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::models::PurchaseRequest;
use crate::services::{CheckoutResult, FailureKind, PaymentService};

fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        FailureKind::Declined => StatusCode::PAYMENT_REQUIRED,
        FailureKind::ProcessorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        FailureKind::Transport | FailureKind::Recording => StatusCode::BAD_GATEWAY,
    }
}

pub async fn checkout(
    State(service): State<Arc<PaymentService>>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let request: PurchaseRequest = match serde_json::from_value(payload) {
        Ok(req) => req,
        Err(e) => {
            error!("Invalid purchase request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "status": "failed",
                    "errors": [format!("Invalid purchase request: {e}")]
                })),
            );
        }
    };

    info!("Received checkout for purchase {}", request.purchase_key);

    match service.checkout(request).await {
        CheckoutResult::Complete {
            order_id,
            transaction_id,
        } => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "complete",
                "orderId": order_id,
                "transactionId": transaction_id
            })),
        ),
        CheckoutResult::SentBack { kind, errors } => (
            status_for(kind),
            Json(serde_json::json!({
                "status": "failed",
                "reason": kind,
                "errors": errors
            })),
        ),
    }
}
