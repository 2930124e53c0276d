//! Database model types for Diesel ORM.
//!
//! Decimals and timestamps are stored as TEXT so values round-trip exactly;
//! conversions to and from domain types live in the store.

use diesel::prelude::*;

use super::schema::{trades, users};

/// Database row for a trade.
///
/// `treat_none_as_null` makes a cleared optional column (e.g. an exit price
/// removed by a merge) actually write NULL instead of being skipped.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = trades)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeRow {
    pub id: String,
    pub owner_id: String,
    pub coin: String,
    pub direction: String,
    pub entry_price: String,
    pub exit_price: Option<String>,
    pub quantity: String,
    pub status: String,
    pub notes: Option<String>,
    pub entry_date: String,
    pub exit_date: Option<String>,
    pub profit_loss: Option<String>,
    pub recorded_at: String,
}

/// Database row for a user.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::connection::{create_pool, run_migrations};

    #[test]
    fn trade_row_roundtrip_with_db() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let row = TradeRow {
            id: "trade-1".to_string(),
            owner_id: "user-1".to_string(),
            coin: "BTC".to_string(),
            direction: "Long".to_string(),
            entry_price: "42000".to_string(),
            exit_price: Some("45000".to_string()),
            quantity: "0.5".to_string(),
            status: "Closed".to_string(),
            notes: Some("Strong uptrend breakout".to_string()),
            entry_date: "2024-01-15T00:00:00+00:00".to_string(),
            exit_date: Some("2024-01-20T00:00:00+00:00".to_string()),
            profit_loss: Some("1500".to_string()),
            recorded_at: "2024-01-20T12:00:00+00:00".to_string(),
        };

        diesel::insert_into(trades::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: TradeRow = trades::table.find("trade-1").first(&mut conn).unwrap();

        assert_eq!(loaded.coin, "BTC");
        assert_eq!(loaded.profit_loss, Some("1500".to_string()));
        assert_eq!(loaded.exit_date, Some("2024-01-20T00:00:00+00:00".to_string()));
    }

    #[test]
    fn trade_row_changeset_clears_optional_columns() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let mut row = TradeRow {
            id: "trade-1".to_string(),
            owner_id: "user-1".to_string(),
            coin: "SOL".to_string(),
            direction: "Short".to_string(),
            entry_price: "95".to_string(),
            exit_price: Some("90".to_string()),
            quantity: "10".to_string(),
            status: "Closed".to_string(),
            notes: None,
            entry_date: "2024-01-25T00:00:00+00:00".to_string(),
            exit_date: None,
            profit_loss: Some("50".to_string()),
            recorded_at: "2024-01-25T12:00:00+00:00".to_string(),
        };
        diesel::insert_into(trades::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        row.exit_price = None;
        row.profit_loss = None;
        diesel::update(trades::table.find("trade-1"))
            .set(&row)
            .execute(&mut conn)
            .unwrap();

        let loaded: TradeRow = trades::table.find("trade-1").first(&mut conn).unwrap();
        assert!(loaded.exit_price.is_none());
        assert!(loaded.profit_loss.is_none());
    }

    #[test]
    fn user_row_email_is_unique() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let row = UserRow {
            id: "user-1".to_string(),
            email: "demo@crypto.com".to_string(),
            name: "Demo User".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .unwrap();

        let dup = UserRow {
            id: "user-2".to_string(),
            ..row
        };
        let result = diesel::insert_into(users::table)
            .values(&dup)
            .execute(&mut conn);
        assert!(result.is_err());
    }
}
