use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Complete,
}

/// Order as handed to the store before it has an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub purchase_key: String,
    pub price: Decimal,
    pub currency: String,
    pub user_email: String,
    pub date: DateTime<Utc>,
    pub downloads: serde_json::Value,
    pub cart_details: serde_json::Value,
    pub user_info: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub purchase_key: String,
    pub price: Decimal,
    pub currency: String,
    pub user_email: String,
    pub date: DateTime<Utc>,
    pub downloads: serde_json::Value,
    pub cart_details: serde_json::Value,
    pub user_info: serde_json::Value,
    pub status: OrderStatus,
    pub transaction_id: Option<String>,
    pub notes: Vec<String>,
}

impl Order {
    pub fn pending(id: OrderId, new: NewOrder) -> Self {
        Self {
            id,
            purchase_key: new.purchase_key,
            price: new.price,
            currency: new.currency,
            user_email: new.user_email,
            date: new.date,
            downloads: new.downloads,
            cart_details: new.cart_details,
            user_info: new.user_info,
            status: OrderStatus::Pending,
            transaction_id: None,
            notes: Vec::new(),
        }
    }
}
