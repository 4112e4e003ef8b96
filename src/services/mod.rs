pub mod atomic_metrics;
pub mod error_codes;
pub mod gateway;
pub mod netbanx_client;
pub mod order_store;
pub mod payment_service;
pub mod validation;

pub use gateway::PaymentGateway;
pub use netbanx_client::NetbanxClient;
pub use order_store::{InMemoryOrderStore, OrderStore};
pub use payment_service::{CheckoutResult, FailureKind, PaymentService};
