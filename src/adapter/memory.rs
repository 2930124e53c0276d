//! In-memory store implementation for testing and demos.
//!
//! Insertion order is preserved, so `find_by_owner` enumerates a user's
//! trades in the order they were recorded.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::domain::{Trade, TradeId, User, UserId};
use crate::error::Result;
use crate::port::{TradeStore, UserStore};

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trades: RwLock<IndexMap<TradeId, Trade>>,
    users: RwLock<IndexMap<String, User>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeStore for MemoryStore {
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Trade>> {
        Ok(self
            .trades
            .read()
            .values()
            .filter(|t| &t.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>> {
        Ok(self.trades.read().get(id).cloned())
    }

    async fn insert(&self, trade: &Trade) -> Result<()> {
        self.trades
            .write()
            .insert(trade.id.clone(), trade.clone());
        Ok(())
    }

    async fn replace(&self, id: &TradeId, trade: &Trade) -> Result<Option<Trade>> {
        let mut trades = self.trades.write();
        if !trades.contains_key(id) {
            return Ok(None);
        }
        // IndexMap keeps the original position on re-insert.
        trades.insert(id.clone(), trade.clone());
        Ok(Some(trade.clone()))
    }

    async fn remove(&self, id: &TradeId) -> Result<bool> {
        Ok(self.trades.write().shift_remove(id).is_some())
    }
}

impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.read().get(email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<()> {
        self.users
            .write()
            .insert(user.email.clone(), user.clone());
        Ok(())
    }
}
