//! Trade entity and realized profit/loss computation.
//!
//! A [`Trade`] is one position taken by a user: a coin symbol, a direction,
//! an entry price and quantity, and optionally an exit once the position has
//! been closed. Realized P/L is always derived here — never accepted from
//! callers — so a client can never forge the outcome of a position.
//!
//! # Examples
//!
//! ```
//! use tradelog::domain::trade::{realized_pnl, Direction};
//! use rust_decimal_macros::dec;
//!
//! // Long: profits when price rises.
//! let pnl = realized_pnl(Direction::Long, dec!(42000), dec!(45000), dec!(0.5));
//! assert_eq!(pnl, dec!(1500));
//!
//! // Short: profits when price falls.
//! let pnl = realized_pnl(Direction::Short, dec!(95), dec!(90), dec!(10));
//! assert_eq!(pnl, dec!(50));
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{TradeId, UserId};

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Profits when the price rises.
    Long,
    /// Profits when the price falls.
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

/// Lifecycle status of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    /// Position is held; no realized P/L yet.
    Open,
    /// Position has been exited.
    Closed,
    /// Entry was voided; excluded from every statistic.
    Cancelled,
}

impl TradeStatus {
    /// Returns true if the trade is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if the trade is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if the trade is cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// One journaled position owned by a user.
///
/// `profit_loss` is a derived field: present exactly when the journal has
/// computed it from a closing transition, carried forward otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub owner_id: UserId,
    pub coin: String,
    pub direction: Direction,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub quantity: Decimal,
    pub status: TradeStatus,
    pub notes: Option<String>,
    pub entry_date: DateTime<Utc>,
    pub exit_date: Option<DateTime<Utc>>,
    pub profit_loss: Option<Decimal>,
}

impl Trade {
    /// Returns true if `coin` contains `term`, ignoring ASCII case.
    #[must_use]
    pub fn coin_matches(&self, term: &str) -> bool {
        self.coin.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Realized profit or loss for a closed position.
///
/// Direction determines the sign convention: a long position profits from a
/// rising price, a short position from a falling one. The result is exact
/// decimal arithmetic with no rounding.
#[must_use]
pub fn realized_pnl(
    direction: Direction,
    entry_price: Decimal,
    exit_price: Decimal,
    quantity: Decimal,
) -> Decimal {
    let price_diff = match direction {
        Direction::Long => exit_price - entry_price,
        Direction::Short => entry_price - exit_price,
    };
    price_diff * quantity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn long_pnl_positive_when_price_rises() {
        let pnl = realized_pnl(Direction::Long, dec!(42000), dec!(45000), dec!(0.5));
        assert_eq!(pnl, dec!(1500));
    }

    #[test]
    fn long_pnl_negative_when_price_falls() {
        let pnl = realized_pnl(Direction::Long, dec!(2200), dec!(2100), dec!(2));
        assert_eq!(pnl, dec!(-200));
    }

    #[test]
    fn short_pnl_positive_when_price_falls() {
        let pnl = realized_pnl(Direction::Short, dec!(95), dec!(90), dec!(10));
        assert_eq!(pnl, dec!(50));
    }

    #[test]
    fn short_pnl_negative_when_price_rises() {
        let pnl = realized_pnl(Direction::Short, dec!(95), dec!(100), dec!(10));
        assert_eq!(pnl, dec!(-50));
    }

    #[test]
    fn pnl_is_exact_for_fractional_quantities() {
        let pnl = realized_pnl(Direction::Long, dec!(43500), dec!(46200), dec!(0.3));
        assert_eq!(pnl, dec!(810.0));
    }

    #[test]
    fn zero_price_move_is_zero_pnl() {
        let pnl = realized_pnl(Direction::Long, dec!(100), dec!(100), dec!(5));
        assert_eq!(pnl, dec!(0));
    }

    #[test]
    fn status_predicates() {
        assert!(TradeStatus::Open.is_open());
        assert!(!TradeStatus::Open.is_closed());
        assert!(TradeStatus::Closed.is_closed());
        assert!(TradeStatus::Cancelled.is_cancelled());
        assert!(!TradeStatus::Cancelled.is_open());
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Long.to_string(), "Long");
        assert_eq!(Direction::Short.to_string(), "Short");
    }

    #[test]
    fn status_display() {
        assert_eq!(TradeStatus::Open.to_string(), "Open");
        assert_eq!(TradeStatus::Closed.to_string(), "Closed");
        assert_eq!(TradeStatus::Cancelled.to_string(), "Cancelled");
    }
}
