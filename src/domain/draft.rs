//! Trade input validation.
//!
//! [`TradeDraft`] is the full input for creating a trade; [`TradePatch`] is a
//! partial input for updating one, where absent fields retain their stored
//! values. Both run the same field-by-field constraint pass and report the
//! first offending field as a [`ValidationError`].
//!
//! Two permissive behaviors are deliberate: `exit_date` is not required to
//! follow `entry_date`, and a `Closed` draft without an `exit_price` is
//! accepted (it simply has no realized P/L yet).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::trade::{Direction, Trade, TradeStatus};

/// A trade input failed a field constraint.
///
/// `field` names the first offending field; `reason` is a client-facing
/// message. Always recoverable by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// The first field that failed validation.
    pub field: &'static str,
    /// Human-readable description of the violated constraint.
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Longest accepted coin symbol, in characters.
pub const MAX_COIN_LEN: usize = 10;

fn check_coin(coin: &str) -> Result<(), ValidationError> {
    if coin.is_empty() {
        return Err(ValidationError::new("coin", "coin is required"));
    }
    if coin.chars().count() > MAX_COIN_LEN {
        return Err(ValidationError::new("coin", "coin symbol too long"));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::new(
            field,
            format!("{} must be positive", field.replace('_', " ")),
        ));
    }
    Ok(())
}

/// Full input for creating a trade.
///
/// The caller never supplies `id`, `owner_id`, or `profit_loss`; those are
/// assigned and derived by the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    pub coin: String,
    pub direction: Direction,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub quantity: Decimal,
    pub status: TradeStatus,
    pub notes: Option<String>,
    pub entry_date: DateTime<Utc>,
    pub exit_date: Option<DateTime<Utc>>,
}

impl TradeDraft {
    /// Check every field constraint, reporting the first violation.
    ///
    /// Fields are checked in declaration order so the reported field is
    /// deterministic when several are invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_coin(&self.coin)?;
        check_positive("entry_price", self.entry_price)?;
        if let Some(exit) = self.exit_price {
            check_positive("exit_price", exit)?;
        }
        check_positive("quantity", self.quantity)?;
        Ok(())
    }
}

/// Partial input for updating a trade; `None` fields retain stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradePatch {
    pub coin: Option<String>,
    pub direction: Option<Direction>,
    pub entry_price: Option<Decimal>,
    pub exit_price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub status: Option<TradeStatus>,
    pub notes: Option<String>,
    pub entry_date: Option<DateTime<Utc>>,
    pub exit_date: Option<DateTime<Utc>>,
}

impl TradePatch {
    /// Validate only the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(coin) = &self.coin {
            check_coin(coin)?;
        }
        if let Some(entry) = self.entry_price {
            check_positive("entry_price", entry)?;
        }
        if let Some(exit) = self.exit_price {
            check_positive("exit_price", exit)?;
        }
        if let Some(quantity) = self.quantity {
            check_positive("quantity", quantity)?;
        }
        Ok(())
    }

    /// Merge this patch onto a stored trade, newer fields overriding.
    ///
    /// `id`, `owner_id`, and `profit_loss` are carried over untouched; the
    /// journal recomputes `profit_loss` from the merged view afterwards.
    #[must_use]
    pub fn apply_to(&self, stored: &Trade) -> Trade {
        Trade {
            id: stored.id.clone(),
            owner_id: stored.owner_id.clone(),
            coin: self.coin.clone().unwrap_or_else(|| stored.coin.clone()),
            direction: self.direction.unwrap_or(stored.direction),
            entry_price: self.entry_price.unwrap_or(stored.entry_price),
            exit_price: self.exit_price.or(stored.exit_price),
            quantity: self.quantity.unwrap_or(stored.quantity),
            status: self.status.unwrap_or(stored.status),
            notes: self.notes.clone().or_else(|| stored.notes.clone()),
            entry_date: self.entry_date.unwrap_or(stored.entry_date),
            exit_date: self.exit_date.or(stored.exit_date),
            profit_loss: stored.profit_loss,
        }
    }
}
