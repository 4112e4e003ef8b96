use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::OrderStoreError;
use crate::models::order::{NewOrder, Order, OrderId, OrderStatus};
use crate::models::{AuthorizationOutcome, PurchaseRequest};
use crate::services::atomic_metrics::{CheckoutMetrics, MetricsSnapshot};
use crate::services::gateway::PaymentGateway;
use crate::services::order_store::OrderStore;

pub const RECORDING_FAILED_MESSAGE: &str = "Your payment could not be recorded. Please try again.";

/// Why a checkout attempt sent the customer back to the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Declined,
    ProcessorUnavailable,
    Transport,
    Recording,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutResult {
    Complete {
        order_id: OrderId,
        transaction_id: String,
    },
    SentBack {
        kind: FailureKind,
        errors: Vec<String>,
    },
}

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    orders: Arc<dyn OrderStore>,
    metrics: CheckoutMetrics,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, orders: Arc<dyn OrderStore>) -> Self {
        Self {
            gateway,
            orders,
            metrics: CheckoutMetrics::new(),
        }
    }

    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.gateway.as_ref()
    }

    /// Authorizes the purchase and, when approved, records it as a
    /// completed order. Every other outcome is handed back untouched.
    pub async fn checkout(&self, request: PurchaseRequest) -> CheckoutResult {
        let outcome = self.gateway.authorize(&request).await;
        self.metrics.record(&outcome);

        let kind = match &outcome {
            AuthorizationOutcome::Approved { transaction_id } => {
                let transaction_id = transaction_id.clone();
                return match self.record_order(request, &transaction_id).await {
                    Ok(order_id) => {
                        info!("Order {} complete, transaction {}", order_id, transaction_id);
                        CheckoutResult::Complete {
                            order_id,
                            transaction_id,
                        }
                    }
                    Err(e) => {
                        error!(
                            "Transaction {} approved but order could not be recorded: {}",
                            transaction_id, e
                        );
                        self.metrics.increment_recording_failed();
                        CheckoutResult::SentBack {
                            kind: FailureKind::Recording,
                            errors: vec![RECORDING_FAILED_MESSAGE.to_string()],
                        }
                    }
                };
            }
            AuthorizationOutcome::Declined { .. } => FailureKind::Declined,
            AuthorizationOutcome::ValidationFailed { .. } => FailureKind::Validation,
            AuthorizationOutcome::ProcessorUnavailable => FailureKind::ProcessorUnavailable,
            AuthorizationOutcome::TransportError => FailureKind::Transport,
        };

        warn!("Checkout {} sent back: {:?}", request.purchase_key, kind);
        CheckoutResult::SentBack {
            kind,
            errors: outcome.user_messages(),
        }
    }

    async fn record_order(
        &self,
        request: PurchaseRequest,
        transaction_id: &str,
    ) -> Result<OrderId, OrderStoreError> {
        let order_id = self
            .orders
            .insert_pending(NewOrder {
                purchase_key: request.purchase_key,
                price: request.price,
                currency: request.currency,
                user_email: request.user_email,
                date: request.date,
                downloads: request.downloads,
                cart_details: request.cart_details,
                user_info: request.user_info,
            })
            .await?;

        self.orders
            .add_note(
                order_id,
                format!("Netbanx Gateway Transaction ID: {transaction_id}"),
            )
            .await?;
        self.orders
            .set_transaction_id(order_id, transaction_id.to_string())
            .await?;
        self.orders
            .update_status(order_id, OrderStatus::Complete)
            .await?;

        Ok(order_id)
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderStoreError> {
        self.orders.get(id).await
    }

    pub fn get_metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
