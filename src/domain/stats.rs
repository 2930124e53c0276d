//! Aggregate performance statistics.
//!
//! [`aggregate`] folds a user's full trade history into a [`TradeStats`]
//! summary. It is a pure function: no storage access, no side effects.
//!
//! Cancelled trades are invisible to every statistic — they count neither as
//! open nor closed and contribute nothing to net profit. A closed trade with
//! a realized P/L of exactly zero counts toward `total_trades` but is not a
//! win.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::trade::{Trade, TradeStatus};

/// Summary statistics over a user's trade history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TradeStats {
    /// Number of closed trades.
    pub total_trades: u64,
    /// Closed trades with a positive realized P/L.
    pub winning_trades: u64,
    /// Trades still open.
    pub open_trades: u64,
    /// Winning share of closed trades as a percentage, one decimal place.
    pub win_rate: Decimal,
    /// Sum of realized P/L over closed trades, two decimal places.
    pub net_profit: Decimal,
}

/// Fold a trade history into summary statistics.
///
/// Percentages and money round half away from zero, to one and two decimal
/// places respectively.
#[must_use]
pub fn aggregate<'a, I>(trades: I) -> TradeStats
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut total_trades = 0u64;
    let mut winning_trades = 0u64;
    let mut open_trades = 0u64;
    let mut net_profit = Decimal::ZERO;

    for trade in trades {
        match trade.status {
            TradeStatus::Closed => {
                total_trades += 1;
                let pnl = trade.profit_loss.unwrap_or(Decimal::ZERO);
                if pnl > Decimal::ZERO {
                    winning_trades += 1;
                }
                net_profit += pnl;
            }
            TradeStatus::Open => open_trades += 1,
            TradeStatus::Cancelled => {}
        }
    }

    let win_rate = if total_trades > 0 {
        (Decimal::from(winning_trades) / Decimal::from(total_trades) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    TradeStats {
        total_trades,
        winning_trades,
        open_trades,
        win_rate,
        net_profit: net_profit.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
    }
}
