use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::services::PaymentService;

pub async fn get_metrics(State(service): State<Arc<PaymentService>>) -> Json<serde_json::Value> {
    let gateway = service.gateway();

    Json(serde_json::json!({
        "gateway": {
            "id": gateway.id(),
            "label": gateway.admin_label(),
        },
        "checkouts": service.get_metrics(),
    }))
}
