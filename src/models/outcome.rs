use serde::Serialize;

pub const API_UNAVAILABLE_MESSAGE: &str = "An error occurred with the Netbanx API. Please try again.";

/// Result of one authorization attempt. Exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuthorizationOutcome {
    Approved { transaction_id: String },
    Declined { reason: String },
    ValidationFailed { errors: Vec<String> },
    ProcessorUnavailable,
    TransportError,
}

impl AuthorizationOutcome {
    /// Messages to show the customer when they are sent back to checkout.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            AuthorizationOutcome::Approved { .. } => Vec::new(),
            AuthorizationOutcome::Declined { reason } => vec![reason.clone()],
            AuthorizationOutcome::ValidationFailed { errors } => errors.clone(),
            AuthorizationOutcome::ProcessorUnavailable | AuthorizationOutcome::TransportError => {
                vec![API_UNAVAILABLE_MESSAGE.to_string()]
            }
        }
    }
}
