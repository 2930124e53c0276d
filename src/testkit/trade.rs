//! Builders for trades and drafts, plus demo fixtures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Direction, Trade, TradeDraft, TradeId, TradeStatus};

fn date(s: &str) -> DateTime<Utc> {
    format!("{s}T00:00:00Z").parse().expect("valid fixture date")
}

/// Builder for a fully-formed [`Trade`], for store and stats tests that
/// bypass the journal.
#[derive(Debug, Clone)]
pub struct TradeBuilder {
    trade: Trade,
}

impl TradeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            trade: Trade {
                id: TradeId::new(),
                owner_id: "user-1".into(),
                coin: "BTC".to_string(),
                direction: Direction::Long,
                entry_price: dec!(42000),
                exit_price: None,
                quantity: dec!(0.5),
                status: TradeStatus::Open,
                notes: None,
                entry_date: date("2024-01-15"),
                exit_date: None,
                profit_loss: None,
            },
        }
    }

    #[must_use]
    pub fn owner(mut self, owner: &str) -> Self {
        self.trade.owner_id = owner.into();
        self
    }

    #[must_use]
    pub fn coin(mut self, coin: &str) -> Self {
        self.trade.coin = coin.to_string();
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.trade.direction = direction;
        self
    }

    #[must_use]
    pub fn entry_price(mut self, price: Decimal) -> Self {
        self.trade.entry_price = price;
        self
    }

    #[must_use]
    pub fn exit_price(mut self, price: Decimal) -> Self {
        self.trade.exit_price = Some(price);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.trade.quantity = quantity;
        self
    }

    #[must_use]
    pub fn status(mut self, status: TradeStatus) -> Self {
        self.trade.status = status;
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: &str) -> Self {
        self.trade.notes = Some(notes.to_string());
        self
    }

    #[must_use]
    pub fn profit_loss(mut self, pnl: Decimal) -> Self {
        self.trade.profit_loss = Some(pnl);
        self
    }

    #[must_use]
    pub fn build(self) -> Trade {
        self.trade
    }
}

impl Default for TradeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`TradeDraft`], for exercising the journal's create path.
#[derive(Debug, Clone)]
pub struct DraftBuilder {
    draft: TradeDraft,
}

impl DraftBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: TradeDraft {
                coin: "BTC".to_string(),
                direction: Direction::Long,
                entry_price: dec!(42000),
                exit_price: None,
                quantity: dec!(0.5),
                status: TradeStatus::Open,
                notes: None,
                entry_date: date("2024-01-15"),
                exit_date: None,
            },
        }
    }

    #[must_use]
    pub fn coin(mut self, coin: &str) -> Self {
        self.draft.coin = coin.to_string();
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.draft.direction = direction;
        self
    }

    #[must_use]
    pub fn entry_price(mut self, price: Decimal) -> Self {
        self.draft.entry_price = price;
        self
    }

    #[must_use]
    pub fn exit_price(mut self, price: Decimal) -> Self {
        self.draft.exit_price = Some(price);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.draft.quantity = quantity;
        self
    }

    #[must_use]
    pub fn status(mut self, status: TradeStatus) -> Self {
        self.draft.status = status;
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: &str) -> Self {
        self.draft.notes = Some(notes.to_string());
        self
    }

    #[must_use]
    pub fn entry_date(mut self, day: &str) -> Self {
        self.draft.entry_date = date(day);
        self
    }

    #[must_use]
    pub fn exit_date(mut self, day: &str) -> Self {
        self.draft.exit_date = Some(date(day));
        self
    }

    #[must_use]
    pub fn build(self) -> TradeDraft {
        self.draft
    }
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical demo journal: two winners, one loser, one open short.
///
/// Created through the journal these yield realized P/Ls of +1500, −200,
/// (none), and +810 — a 66.7% win rate and 2110.00 net profit.
#[must_use]
pub fn demo_drafts() -> Vec<TradeDraft> {
    vec![
        DraftBuilder::new()
            .coin("BTC")
            .entry_price(dec!(42000))
            .exit_price(dec!(45000))
            .quantity(dec!(0.5))
            .status(TradeStatus::Closed)
            .entry_date("2024-01-15")
            .exit_date("2024-01-20")
            .notes("Strong uptrend breakout")
            .build(),
        DraftBuilder::new()
            .coin("ETH")
            .entry_price(dec!(2200))
            .exit_price(dec!(2100))
            .quantity(dec!(2))
            .status(TradeStatus::Closed)
            .entry_date("2024-01-18")
            .exit_date("2024-01-22")
            .notes("Stop loss triggered")
            .build(),
        DraftBuilder::new()
            .coin("SOL")
            .direction(Direction::Short)
            .entry_price(dec!(95))
            .quantity(dec!(10))
            .status(TradeStatus::Open)
            .entry_date("2024-01-25")
            .notes("Resistance level short")
            .build(),
        DraftBuilder::new()
            .coin("BTC")
            .entry_price(dec!(43500))
            .exit_price(dec!(46200))
            .quantity(dec!(0.3))
            .status(TradeStatus::Closed)
            .entry_date("2024-01-10")
            .exit_date("2024-01-15")
            .notes("Bullish momentum")
            .build(),
    ]
}
