//! Handler for the `stats` command.

use serde_json::json;

use super::output;
use super::trades::signed_money;
use crate::app::App;
use crate::error::Result;

/// Execute `tradelog stats`.
pub async fn show(app: &App) -> Result<()> {
    let stats = app.journal().stats(app.owner()).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stats",
            "stats": serde_json::to_value(&stats)?,
        }));
        return Ok(());
    }

    output::section("Performance");
    output::field("Closed", stats.total_trades);
    output::field("Winners", stats.winning_trades);
    output::field("Win rate", format!("{}%", stats.win_rate));
    output::field("Net P/L", signed_money(stats.net_profit));
    output::field("Open", stats.open_trades);

    Ok(())
}
