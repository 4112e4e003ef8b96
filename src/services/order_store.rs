use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::OrderStoreError;
use crate::models::order::{NewOrder, Order, OrderId, OrderStatus};

pub type StoreResult<T> = std::result::Result<T, OrderStoreError>;

/// Where completed checkouts are recorded.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_pending(&self, order: NewOrder) -> StoreResult<OrderId>;
    async fn add_note(&self, id: OrderId, note: String) -> StoreResult<()>;
    async fn set_transaction_id(&self, id: OrderId, transaction_id: String) -> StoreResult<()>;
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> StoreResult<()>;
    async fn get(&self, id: OrderId) -> StoreResult<Option<Order>>;
}

/// Process-local order store. Ids start at 1.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<DashMap<OrderId, Order>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn modify(&self, id: OrderId, f: impl FnOnce(&mut Order)) -> StoreResult<()> {
        let mut order = self.orders.get_mut(&id).ok_or(OrderStoreError::NotFound(id))?;
        f(order.value_mut());
        Ok(())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert_pending(&self, order: NewOrder) -> StoreResult<OrderId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.orders.insert(id, Order::pending(id, order));
        Ok(id)
    }

    async fn add_note(&self, id: OrderId, note: String) -> StoreResult<()> {
        self.modify(id, |order| order.notes.push(note))
    }

    async fn set_transaction_id(&self, id: OrderId, transaction_id: String) -> StoreResult<()> {
        self.modify(id, |order| order.transaction_id = Some(transaction_id))
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> StoreResult<()> {
        self.modify(id, |order| order.status = status)
    }

    async fn get(&self, id: OrderId) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|entry| entry.clone()))
    }
}
