//! Handlers for the trade lifecycle commands: add, list, edit, close, rm.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use super::{output, parse_date_arg, AddArgs, CloseArgs, EditArgs, ListArgs, RmArgs};
use crate::app::App;
use crate::domain::{Trade, TradeDraft, TradeId, TradePatch, TradeStatus, ValidationError};
use crate::error::{Error, Result};

/// Execute `tradelog add`.
pub async fn add(app: &App, args: AddArgs) -> Result<()> {
    let entry_date = match args.date.as_deref() {
        Some(d) => parse_date_arg("entry_date", d)?,
        None => Utc::now(),
    };
    let exit_date = args
        .exit_date
        .as_deref()
        .map(|d| parse_date_arg("exit_date", d))
        .transpose()?;

    let draft = TradeDraft {
        coin: args.coin,
        direction: args.direction.into(),
        entry_price: args.entry,
        exit_price: args.exit,
        quantity: args.quantity,
        status: args.status.into(),
        notes: args.notes,
        entry_date,
        exit_date,
    };

    let trade = app.journal().create(app.owner(), draft).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "trade": serde_json::to_value(&trade)?,
        }));
        return Ok(());
    }

    output::success(&format!(
        "Recorded {} {} {} @ {}",
        trade.coin, trade.direction, trade.quantity, trade.entry_price
    ));
    output::field("Id", output::muted(&trade.id));
    output::field("Status", trade.status);
    if let Some(pnl) = trade.profit_loss {
        output::field("P/L", signed_money(pnl));
    }
    Ok(())
}

/// Execute `tradelog list`.
pub async fn list(app: &App, args: ListArgs) -> Result<()> {
    let trades = app
        .journal()
        .list(app.owner(), args.search.as_deref())
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "count": trades.len(),
            "trades": serde_json::to_value(&trades)?,
        }));
        return Ok(());
    }

    if trades.is_empty() {
        match &args.search {
            Some(term) => output::note(&format!("No trades match {term:?}.")),
            None => output::note("No trades recorded yet."),
        }
        return Ok(());
    }

    output::section("Journal");
    println!();
    let table = Table::new(trades.iter().map(ListRow::from)).to_string();
    for line in table.lines() {
        println!("  {}", line);
    }
    println!();
    println!(
        "  Close an open position with {}",
        output::highlight("tradelog close <id> --exit <price>")
    );

    Ok(())
}

/// Execute `tradelog edit`.
pub async fn edit(app: &App, args: EditArgs) -> Result<()> {
    let trade = resolve_id(app, &args.id).await?;

    let entry_date = args
        .date
        .as_deref()
        .map(|d| parse_date_arg("entry_date", d))
        .transpose()?;
    let exit_date = args
        .exit_date
        .as_deref()
        .map(|d| parse_date_arg("exit_date", d))
        .transpose()?;

    let patch = TradePatch {
        coin: args.coin,
        direction: args.direction.map(Into::into),
        entry_price: args.entry,
        exit_price: args.exit,
        quantity: args.quantity,
        status: args.status.map(Into::into),
        notes: args.notes,
        entry_date,
        exit_date,
    };

    let updated = app.journal().update(&trade.id, app.owner(), patch).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "edit",
            "trade": serde_json::to_value(&updated)?,
        }));
        return Ok(());
    }

    output::success(&format!("Updated {}", updated.coin));
    output::field("Status", updated.status);
    if let Some(pnl) = updated.profit_loss {
        output::field("P/L", signed_money(pnl));
    }
    Ok(())
}

/// Execute `tradelog close`.
pub async fn close(app: &App, args: CloseArgs) -> Result<()> {
    let trade = resolve_id(app, &args.id).await?;

    let exit_date = match args.exit_date.as_deref() {
        Some(d) => parse_date_arg("exit_date", d)?,
        None => Utc::now(),
    };
    let patch = TradePatch {
        exit_price: Some(args.exit),
        exit_date: Some(exit_date),
        status: Some(TradeStatus::Closed),
        ..Default::default()
    };

    let updated = app.journal().update(&trade.id, app.owner(), patch).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "close",
            "trade": serde_json::to_value(&updated)?,
        }));
        return Ok(());
    }

    output::success(&format!("Closed {} at {}", updated.coin, args.exit));
    if let Some(pnl) = updated.profit_loss {
        output::field("P/L", signed_money(pnl));
    }
    Ok(())
}

/// Execute `tradelog rm`.
pub async fn rm(app: &App, args: RmArgs) -> Result<()> {
    let trade = resolve_id(app, &args.id).await?;

    if !args.yes && !output::is_json() && !output::is_quiet() {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete {} trade {}?", trade.coin, trade.id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Aborted.");
            return Ok(());
        }
    }

    app.journal().delete(&trade.id, app.owner()).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "rm",
            "deleted": trade.id.as_str(),
        }));
        return Ok(());
    }

    output::success(&format!("Deleted {} trade {}", trade.coin, trade.id));
    Ok(())
}

/// Resolve a full trade ID or unique prefix against the owner's journal.
async fn resolve_id(app: &App, prefix: &str) -> Result<Trade> {
    let trades = app.journal().list(app.owner(), None).await?;
    let mut matches = trades
        .into_iter()
        .filter(|t| t.id.as_str().starts_with(prefix));

    match (matches.next(), matches.next()) {
        (Some(trade), None) => Ok(trade),
        (Some(_), Some(_)) => Err(ValidationError {
            field: "id",
            reason: format!("{prefix:?} matches more than one trade"),
        }
        .into()),
        (None, _) => Err(Error::NotFound {
            id: TradeId::from(prefix),
        }),
    }
}

/// Format a P/L value with an explicit sign, colored by outcome.
pub(crate) fn signed_money(pnl: Decimal) -> String {
    if pnl > Decimal::ZERO {
        output::positive(format!("+{pnl}"))
    } else if pnl < Decimal::ZERO {
        output::negative(pnl)
    } else {
        pnl.to_string()
    }
}

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Coin")]
    coin: String,
    #[tabled(rename = "Dir")]
    direction: String,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Exit")]
    exit: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "P/L")]
    profit_loss: String,
    #[tabled(rename = "Entered")]
    entered: String,
}

impl From<&Trade> for ListRow {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id.as_str().chars().take(8).collect(),
            coin: trade.coin.clone(),
            direction: trade.direction.to_string(),
            entry: trade.entry_price.to_string(),
            exit: trade
                .exit_price
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            quantity: trade.quantity.to_string(),
            status: trade.status.to_string(),
            profit_loss: trade
                .profit_loss
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            entered: trade.entry_date.format("%Y-%m-%d").to_string(),
        }
    }
}
