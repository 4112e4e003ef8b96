//! Wire types for the Netbanx card payments API.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::purchase::PurchaseRequest;

pub const MONITOR_READY: &str = "READY";

/// Body of `POST cardpayments/v1/accounts/{account}/auths`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationBody {
    pub merchant_ref_num: String,
    /// Minor currency units.
    pub amount: i64,
    pub settle_with_auth: bool,
    pub card: CardDetails,
    pub billing_details: BillingDetails,
    pub customer_ip: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_num: String,
    pub card_expiry: CardExpiry,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardExpiry {
    pub month: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BillingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl AuthorizationBody {
    pub fn from_purchase(request: &PurchaseRequest, amount: i64) -> Self {
        let card = &request.card_info;
        let billing = &request.billing_info;
        Self {
            merchant_ref_num: request.purchase_key.clone(),
            amount,
            settle_with_auth: true,
            card: CardDetails {
                card_num: card.number.clone(),
                card_expiry: CardExpiry {
                    month: card.exp_month.clone(),
                    year: card.exp_year.clone(),
                },
                cvv: card.cvc.clone(),
            },
            billing_details: BillingDetails {
                street: billing.street.clone(),
                city: billing.city.clone(),
                state: billing.state.clone(),
                zip: billing.zip.clone(),
                country: billing.country.clone(),
            },
            customer_ip: request.customer_ip.clone(),
            currency_code: request.currency.clone(),
        }
    }
}

/// Error code as sent by the processor; seen both quoted and bare.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Text(String),
    Number(i64),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Text(code) => f.write_str(code.trim()),
            ErrorCode::Number(code) => write!(f, "{code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<ErrorCode>,
    #[serde(default)]
    pub error_number: Option<ErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Numeric code, preferring `error_number` over `code`.
    pub fn number(&self) -> Option<String> {
        self.error_number
            .as_ref()
            .or(self.code.as_ref())
            .map(ToString::to_string)
    }
}

/// Response of the auths endpoint: either an `id` or an `error`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// True only for a JSON object whose `status` is exactly `READY`.
pub fn monitor_is_ready(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.as_object())
        .and_then(|object| object.get("status"))
        .and_then(|status| status.as_str())
        .map_or(false, |status| status == MONITOR_READY)
}
