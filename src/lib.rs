//! Netbanx card payment gateway.
//!
//! [`NetbanxClient`](services::NetbanxClient) validates a checkout's card
//! details, checks that the Netbanx API is up, submits a card authorization
//! and reports a single [`AuthorizationOutcome`](models::AuthorizationOutcome).
//! [`PaymentService`](services::PaymentService) records approved purchases
//! as orders, and [`handlers::router`] exposes the flow over HTTP.

pub mod app;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use app::config::{Config, Credentials, Environment};
pub use error::{GatewayError, Result};
pub use models::{AuthorizationOutcome, BillingInfo, CardInfo, PurchaseRequest};
pub use services::{NetbanxClient, PaymentGateway, PaymentService};
