//! Journal-agnostic domain types: trades, owners, validation, statistics.

pub mod draft;
pub mod id;
pub mod stats;
pub mod trade;
pub mod user;

pub use draft::{TradeDraft, TradePatch, ValidationError};
pub use id::{TradeId, UserId};
pub use stats::{aggregate, TradeStats};
pub use trade::{realized_pnl, Direction, Trade, TradeStatus};
pub use user::User;
