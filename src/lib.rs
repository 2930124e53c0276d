//! Tradelog - a crypto trading journal with realized P/L tracking.
//!
//! This crate records individual trades for a single account, derives
//! realized profit/loss whenever a position closes, and aggregates
//! performance statistics over the journal.
//!
//! # Architecture
//!
//! The crate keeps the journal rules independent of storage and transport:
//!
//! - **`domain`** - Trade and user entities, input validation, the P/L
//!   formula, and the pure statistics fold
//! - **`journal`** - The trade record manager: ownership checks, merge
//!   semantics for partial updates, derived P/L on every write
//! - **`port`** - Storage traits the journal depends on
//! - **`adapter`** - An insertion-ordered in-memory store and a SQLite
//!   store backed by Diesel
//! - **`app`** - Wiring from configuration to an opened journal
//! - **`cli`** - The `tradelog` command-line interface
//!
//! # Example
//!
//! ```
//! use tradelog::adapter::MemoryStore;
//! use tradelog::domain::{Direction, TradeDraft, TradeStatus, UserId};
//! use tradelog::journal::Journal;
//! use rust_decimal_macros::dec;
//!
//! # tokio_test::block_on(async {
//! let journal = Journal::new(MemoryStore::new());
//! let owner = UserId::new();
//!
//! let trade = journal
//!     .create(
//!         &owner,
//!         TradeDraft {
//!             coin: "BTC".into(),
//!             direction: Direction::Long,
//!             entry_price: dec!(42000),
//!             exit_price: Some(dec!(45000)),
//!             quantity: dec!(0.5),
//!             status: TradeStatus::Closed,
//!             notes: None,
//!             entry_date: "2024-01-15T00:00:00Z".parse().unwrap(),
//!             exit_date: None,
//!         },
//!     )
//!     .await
//!     .unwrap();
//!
//! assert_eq!(trade.profit_loss, Some(dec!(1500)));
//! # });
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod journal;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
