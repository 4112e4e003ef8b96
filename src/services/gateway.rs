use async_trait::async_trait;

use crate::models::{AuthorizationOutcome, PurchaseRequest};

/// A card processor the checkout can hand a purchase to.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Stable identifier, e.g. `netbanx`.
    fn id(&self) -> &'static str;

    /// Name shown to store administrators.
    fn admin_label(&self) -> &'static str;

    /// Name shown to customers on the payment form.
    fn checkout_label(&self) -> &'static str;

    async fn authorize(&self, request: &PurchaseRequest) -> AuthorizationOutcome;
}
