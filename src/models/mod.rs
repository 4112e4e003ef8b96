pub mod netbanx;
pub mod order;
pub mod outcome;
pub mod purchase;

pub use outcome::AuthorizationOutcome;
pub use purchase::{BillingInfo, CardInfo, PurchaseRequest};
