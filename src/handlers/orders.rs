use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::error;

use crate::models::order::{Order, OrderId};
use crate::services::PaymentService;

pub async fn get_order(
    State(service): State<Arc<PaymentService>>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, StatusCode> {
    match service.get_order(id).await {
        Ok(Some(order)) => Ok(Json(order)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Failed to load order {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
