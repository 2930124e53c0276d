//! Persistence ports for trades and users.
//!
//! The journal treats these traits as its only persistence primitives and
//! never assumes transactional multi-record guarantees from an
//! implementation.

use std::future::Future;

use crate::domain::{Trade, TradeId, User, UserId};
use crate::error::Result;

/// Storage operations for journaled trades.
pub trait TradeStore: Send + Sync {
    /// List a user's trades in the store's enumeration order.
    fn find_by_owner(&self, owner: &UserId) -> impl Future<Output = Result<Vec<Trade>>> + Send;

    /// Get a trade by ID.
    fn find_by_id(&self, id: &TradeId) -> impl Future<Output = Result<Option<Trade>>> + Send;

    /// Insert a new trade.
    fn insert(&self, trade: &Trade) -> impl Future<Output = Result<()>> + Send;

    /// Replace a trade by ID. Returns the stored record, or `None` if the
    /// ID is no longer present.
    fn replace(&self, id: &TradeId, trade: &Trade)
        -> impl Future<Output = Result<Option<Trade>>> + Send;

    /// Delete a trade by ID. Returns whether a record was removed.
    fn remove(&self, id: &TradeId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for account owners.
pub trait UserStore: Send + Sync {
    /// Look up a user by email address.
    fn find_by_email(&self, email: &str) -> impl Future<Output = Result<Option<User>>> + Send;

    /// Insert a new user.
    fn insert(&self, user: &User) -> impl Future<Output = Result<()>> + Send;
}
