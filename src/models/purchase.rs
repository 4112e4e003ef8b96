use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Card fields as submitted on the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardInfo {
    #[serde(rename = "card_name", default)]
    pub name: String,
    #[serde(rename = "card_number", default)]
    pub number: String,
    #[serde(rename = "card_exp_month", default)]
    pub exp_month: String,
    #[serde(rename = "card_exp_year", default)]
    pub exp_year: String,
    #[serde(rename = "card_cvc", default)]
    pub cvc: String,
}

/// Billing address, passed through to the processor untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingInfo {
    #[serde(rename = "card_address", default)]
    pub street: Option<String>,
    #[serde(rename = "card_city", default)]
    pub city: Option<String>,
    #[serde(rename = "card_state", default)]
    pub state: Option<String>,
    #[serde(rename = "card_zip", default)]
    pub zip: Option<String>,
    #[serde(rename = "card_country", default)]
    pub country: Option<String>,
}

/// One checkout attempt. Built by the caller and consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub purchase_key: String,
    /// Price in major units, e.g. `19.99`.
    pub price: Decimal,
    #[serde(default)]
    pub currency: String,
    pub customer_ip: String,
    #[serde(default)]
    pub card_info: CardInfo,
    #[serde(default)]
    pub billing_info: BillingInfo,
    #[serde(default)]
    pub downloads: serde_json::Value,
    #[serde(default)]
    pub cart_details: serde_json::Value,
    #[serde(default)]
    pub user_info: serde_json::Value,
    #[serde(default)]
    pub user_email: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserializes_checkout_form_names() {
        let raw = serde_json::json!({
            "purchase_key": "a1b2c3",
            "price": "19.99",
            "currency": "USD",
            "customer_ip": "203.0.113.7",
            "card_info": {
                "card_name": "Jane Doe",
                "card_number": "4111111111111111",
                "card_exp_month": "12",
                "card_exp_year": "2030",
                "card_cvc": "123"
            },
            "billing_info": {
                "card_address": "1 Main St",
                "card_zip": "90210"
            },
            "user_email": "jane@example.com",
            "date": "2026-10-19T12:00:00Z"
        });

        let request: PurchaseRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.price, dec!(19.99));
        assert_eq!(request.card_info.number, "4111111111111111");
        assert_eq!(request.billing_info.street.as_deref(), Some("1 Main St"));
        assert_eq!(request.billing_info.city, None);
        assert!(request.downloads.is_null());
    }

    #[test]
    fn test_missing_card_fields_default_to_empty() {
        let raw = serde_json::json!({
            "purchase_key": "k",
            "price": 5,
            "currency": "EUR",
            "customer_ip": "127.0.0.1",
            "card_info": { "card_name": "Jane Doe" },
            "date": "2026-10-19T12:00:00Z"
        });

        let request: PurchaseRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.price, dec!(5));
        assert!(request.card_info.number.is_empty());
        assert!(request.card_info.cvc.is_empty());
    }

    #[test]
    fn test_missing_card_info_and_currency_default() {
        let raw = serde_json::json!({
            "purchase_key": "k",
            "price": "1.00",
            "customer_ip": "127.0.0.1",
            "date": "2026-10-19T12:00:00Z"
        });

        let request: PurchaseRequest = serde_json::from_value(raw).unwrap();
        assert!(request.currency.is_empty());
        assert!(request.card_info.name.is_empty());
        assert!(request.card_info.number.is_empty());
    }
}
