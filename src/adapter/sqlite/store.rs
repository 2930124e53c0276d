//! SQLite journal store implementation.
//!
//! Provides persistent storage for trades and users using SQLite and the
//! Diesel ORM. Implements the [`TradeStore`] and [`UserStore`] ports.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::connection::DbPool;
use super::model::{TradeRow, UserRow};
use super::schema::{trades, users};
use crate::domain::{Direction, Trade, TradeId, TradeStatus, User, UserId};
use crate::error::{Error, Result};
use crate::port::{TradeStore, UserStore};

/// SQLite-backed journal store.
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(trade: &Trade) -> TradeRow {
        TradeRow {
            id: trade.id.to_string(),
            owner_id: trade.owner_id.to_string(),
            coin: trade.coin.clone(),
            direction: trade.direction.to_string(),
            entry_price: trade.entry_price.to_string(),
            exit_price: trade.exit_price.map(|p| p.to_string()),
            quantity: trade.quantity.to_string(),
            status: trade.status.to_string(),
            notes: trade.notes.clone(),
            entry_date: trade.entry_date.to_rfc3339(),
            exit_date: trade.exit_date.map(|d| d.to_rfc3339()),
            profit_loss: trade.profit_loss.map(|p| p.to_string()),
            recorded_at: Utc::now().to_rfc3339(),
        }
    }

    fn from_row(row: TradeRow) -> Result<Trade> {
        Ok(Trade {
            id: TradeId::from(row.id),
            owner_id: UserId::from(row.owner_id),
            coin: row.coin,
            direction: parse_direction(&row.direction)?,
            entry_price: parse_decimal(&row.entry_price)?,
            exit_price: row.exit_price.as_deref().map(parse_decimal).transpose()?,
            quantity: parse_decimal(&row.quantity)?,
            status: parse_status(&row.status)?,
            notes: row.notes,
            entry_date: parse_date(&row.entry_date)?,
            exit_date: row.exit_date.as_deref().map(parse_date).transpose()?,
            profit_loss: row.profit_loss.as_deref().map(parse_decimal).transpose()?,
        })
    }

    fn user_to_row(user: &User) -> UserRow {
        UserRow {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at.to_rfc3339(),
        }
    }

    fn user_from_row(row: UserRow) -> Result<User> {
        Ok(User {
            id: UserId::from(row.id),
            email: row.email,
            name: row.name,
            created_at: parse_date(&row.created_at)?,
        })
    }
}

fn parse_decimal(text: &str) -> Result<Decimal> {
    Decimal::from_str(text).map_err(|e| Error::Parse(e.to_string()))
}

fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(text)
        .map_err(|e| Error::Parse(e.to_string()))?
        .with_timezone(&Utc))
}

fn parse_direction(text: &str) -> Result<Direction> {
    match text {
        "Long" => Ok(Direction::Long),
        "Short" => Ok(Direction::Short),
        other => Err(Error::Parse(format!("unknown direction: {other}"))),
    }
}

fn parse_status(text: &str) -> Result<TradeStatus> {
    match text {
        "Open" => Ok(TradeStatus::Open),
        "Closed" => Ok(TradeStatus::Closed),
        "Cancelled" => Ok(TradeStatus::Cancelled),
        other => Err(Error::Parse(format!("unknown status: {other}"))),
    }
}

impl TradeStore for SqliteStore {
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Trade>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<TradeRow> = trades::table
            .filter(trades::owner_id.eq(owner.as_str()))
            .order((trades::recorded_at.asc(), trades::id.asc()))
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<TradeRow> = trades::table
            .find(id.as_str())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn insert(&self, trade: &Trade) -> Result<()> {
        let row = Self::to_row(trade);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(trades::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn replace(&self, id: &TradeId, trade: &Trade) -> Result<Option<Trade>> {
        let mut row = Self::to_row(trade);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        // Keep the original recording timestamp so enumeration order is stable.
        let recorded_at: Option<String> = trades::table
            .find(id.as_str())
            .select(trades::recorded_at)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        let Some(recorded_at) = recorded_at else {
            return Ok(None);
        };
        row.recorded_at = recorded_at;

        let updated = diesel::update(trades::table.find(id.as_str()))
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(trade.clone()))
    }

    async fn remove(&self, id: &TradeId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(trades::table.find(id.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}

impl UserStore for SqliteStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::user_from_row).transpose()
    }

    async fn insert(&self, user: &User) -> Result<()> {
        let row = Self::user_to_row(user);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }
}
