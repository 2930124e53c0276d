//! Trait boundaries between the journal core and its collaborators.

pub mod store;

pub use store::{TradeStore, UserStore};
