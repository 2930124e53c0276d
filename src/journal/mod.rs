//! Trade record management.
//!
//! [`Journal`] owns the lifecycle of a trade: it validates input, enforces
//! ownership, derives realized P/L on every write, and delegates persistence
//! to a [`TradeStore`] implementation.
//!
//! Two rules do most of the work here:
//!
//! - **Ownership conflation.** Updating or deleting a record that is missing
//!   or owned by someone else fails with the same `NotFound` error, so a
//!   caller can never probe for the existence of another user's trades. The
//!   ownership read happens before input validation, matching the order a
//!   transport layer would check authorization before payload shape.
//! - **Derived P/L.** `profit_loss` is recomputed from the merged view of a
//!   record whenever the merged status is `Closed` and an exit price is
//!   available; otherwise the stored value is carried forward. Caller-supplied
//!   P/L is never trusted.

use tracing::{debug, info};

use crate::domain::{
    aggregate, realized_pnl, Trade, TradeDraft, TradeId, TradePatch, TradeStats, TradeStatus,
    UserId,
};
use crate::error::{Error, Result};
use crate::port::TradeStore;

/// The trade record manager.
///
/// Generic over the backing store so the same rules apply to the in-memory
/// and SQLite adapters alike.
pub struct Journal<S> {
    store: S,
}

impl<S: TradeStore> Journal<S> {
    /// Create a journal over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate a draft, derive its P/L, and persist a new trade for `owner`.
    pub async fn create(&self, owner: &UserId, draft: TradeDraft) -> Result<Trade> {
        draft.validate()?;

        let profit_loss = match (draft.status, draft.exit_price) {
            (TradeStatus::Closed, Some(exit)) => Some(realized_pnl(
                draft.direction,
                draft.entry_price,
                exit,
                draft.quantity,
            )),
            _ => None,
        };

        let trade = Trade {
            id: TradeId::new(),
            owner_id: owner.clone(),
            coin: draft.coin,
            direction: draft.direction,
            entry_price: draft.entry_price,
            exit_price: draft.exit_price,
            quantity: draft.quantity,
            status: draft.status,
            notes: draft.notes,
            entry_date: draft.entry_date,
            exit_date: draft.exit_date,
            profit_loss,
        };

        self.store.insert(&trade).await?;
        info!(trade = %trade.id, coin = %trade.coin, status = %trade.status, "recorded trade");
        Ok(trade)
    }

    /// Merge a partial update onto an owned trade and persist the result.
    ///
    /// P/L is recomputed from the merged record, so changing an exit price on
    /// an already-closed trade re-derives it against the stored entry price,
    /// quantity, and direction. A concurrent delete between the ownership
    /// read and the write surfaces as `NotFound`.
    pub async fn update(&self, id: &TradeId, caller: &UserId, patch: TradePatch) -> Result<Trade> {
        let stored = self.owned(id, caller).await?;
        patch.validate()?;

        let mut merged = patch.apply_to(&stored);
        if merged.status.is_closed() {
            if let Some(exit) = merged.exit_price {
                merged.profit_loss = Some(realized_pnl(
                    merged.direction,
                    merged.entry_price,
                    exit,
                    merged.quantity,
                ));
            }
        }

        self.store
            .replace(id, &merged)
            .await?
            .ok_or_else(|| Error::not_found(id))?;
        info!(trade = %merged.id, status = %merged.status, "updated trade");
        Ok(merged)
    }

    /// Delete an owned trade.
    pub async fn delete(&self, id: &TradeId, caller: &UserId) -> Result<()> {
        self.owned(id, caller).await?;
        if !self.store.remove(id).await? {
            return Err(Error::not_found(id));
        }
        info!(trade = %id, "deleted trade");
        Ok(())
    }

    /// List `owner`'s trades, optionally filtered to coins containing
    /// `search` (case-insensitive substring match).
    pub async fn list(&self, owner: &UserId, search: Option<&str>) -> Result<Vec<Trade>> {
        let mut trades = self.store.find_by_owner(owner).await?;
        if let Some(term) = search {
            trades.retain(|t| t.coin_matches(term));
        }
        debug!(owner = %owner, count = trades.len(), "listed trades");
        Ok(trades)
    }

    /// Fetch a single owned trade.
    pub async fn get(&self, id: &TradeId, caller: &UserId) -> Result<Trade> {
        self.owned(id, caller).await
    }

    /// Aggregate statistics over `owner`'s full history.
    pub async fn stats(&self, owner: &UserId) -> Result<TradeStats> {
        let trades = self.store.find_by_owner(owner).await?;
        Ok(aggregate(&trades))
    }

    /// Ownership check: absent and not-owned collapse to the same error.
    async fn owned(&self, id: &TradeId, caller: &UserId) -> Result<Trade> {
        match self.store.find_by_id(id).await? {
            Some(trade) if &trade.owner_id == caller => Ok(trade),
            _ => Err(Error::not_found(id)),
        }
    }
}
