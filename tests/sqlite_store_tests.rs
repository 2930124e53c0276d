//! SQLite store contract tests against a temporary database.

use rust_decimal_macros::dec;
use tempfile::TempDir;
use tradelog::adapter::sqlite::{create_pool, run_migrations, SqliteStore};
use tradelog::domain::{Direction, TradeStatus, UserId};
use tradelog::journal::Journal;
use tradelog::port::{TradeStore, UserStore};
use tradelog::testkit::{DraftBuilder, TradeBuilder};

/// Open a store on a fresh database file; the directory guard keeps the
/// file alive for the duration of the test.
fn temp_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("journal.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    (dir, SqliteStore::new(pool))
}

#[tokio::test]
async fn insert_and_find_round_trips_every_field() {
    let (_guard, store) = temp_store();
    let trade = TradeBuilder::new()
        .coin("BTC")
        .direction(Direction::Long)
        .entry_price(dec!(42000))
        .exit_price(dec!(45000))
        .quantity(dec!(0.5))
        .status(TradeStatus::Closed)
        .notes("Strong uptrend breakout")
        .profit_loss(dec!(1500))
        .build();

    TradeStore::insert(&store, &trade).await.unwrap();
    let loaded = store.find_by_id(&trade.id).await.unwrap().unwrap();

    assert_eq!(loaded, trade);
}

#[tokio::test]
async fn find_by_id_returns_none_for_missing_record() {
    let (_guard, store) = temp_store();
    let found = store.find_by_id(&"no-such-id".into()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_owner_orders_by_recording_time_and_filters() {
    let (_guard, store) = temp_store();
    let owner = UserId::from("user-1");

    for coin in ["BTC", "ETH", "SOL"] {
        let trade = TradeBuilder::new().owner("user-1").coin(coin).build();
        TradeStore::insert(&store, &trade).await.unwrap();
    }
    let other = TradeBuilder::new().owner("user-2").coin("DOGE").build();
    TradeStore::insert(&store, &other).await.unwrap();

    let coins: Vec<String> = store
        .find_by_owner(&owner)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.coin)
        .collect();

    assert_eq!(coins, ["BTC", "ETH", "SOL"]);
}

#[tokio::test]
async fn replace_updates_fields_and_keeps_listing_position() {
    let (_guard, store) = temp_store();
    let owner = UserId::from("user-1");
    let first = TradeBuilder::new().owner("user-1").coin("BTC").build();
    let second = TradeBuilder::new().owner("user-1").coin("ETH").build();
    TradeStore::insert(&store, &first).await.unwrap();
    TradeStore::insert(&store, &second).await.unwrap();

    let mut updated = first.clone();
    updated.exit_price = Some(dec!(45000));
    updated.status = TradeStatus::Closed;
    updated.profit_loss = Some(dec!(1500));
    let replaced = store.replace(&first.id, &updated).await.unwrap();
    assert!(replaced.is_some());

    let listed = store.find_by_owner(&owner).await.unwrap();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].profit_loss, Some(dec!(1500)));
    assert_eq!(listed[1].coin, "ETH");
}

#[tokio::test]
async fn replace_can_clear_optional_fields() {
    let (_guard, store) = temp_store();
    let trade = TradeBuilder::new()
        .exit_price(dec!(45000))
        .status(TradeStatus::Closed)
        .profit_loss(dec!(1500))
        .build();
    TradeStore::insert(&store, &trade).await.unwrap();

    let mut reopened = trade.clone();
    reopened.exit_price = None;
    reopened.profit_loss = None;
    reopened.status = TradeStatus::Open;
    store.replace(&trade.id, &reopened).await.unwrap();

    let loaded = store.find_by_id(&trade.id).await.unwrap().unwrap();
    assert!(loaded.exit_price.is_none());
    assert!(loaded.profit_loss.is_none());
}

#[tokio::test]
async fn replace_missing_record_returns_none() {
    let (_guard, store) = temp_store();
    let trade = TradeBuilder::new().build();
    let replaced = store.replace(&"ghost".into(), &trade).await.unwrap();
    assert!(replaced.is_none());
}

#[tokio::test]
async fn remove_reports_whether_a_record_was_deleted() {
    let (_guard, store) = temp_store();
    let trade = TradeBuilder::new().build();
    TradeStore::insert(&store, &trade).await.unwrap();

    assert!(store.remove(&trade.id).await.unwrap());
    assert!(!store.remove(&trade.id).await.unwrap());
}

#[tokio::test]
async fn user_registration_round_trips() {
    let (_guard, store) = temp_store();
    let user = tradelog::app::register_user(&store, "Demo User", "demo@crypto.com")
        .await
        .unwrap();

    let found = UserStore::find_by_email(&store, "demo@crypto.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Demo User");

    let err = tradelog::app::register_user(&store, "Demo User", "demo@crypto.com")
        .await
        .unwrap_err();
    assert!(matches!(err, tradelog::error::Error::DuplicateUser { .. }));
}

#[tokio::test]
async fn journal_runs_end_to_end_over_sqlite() {
    let (_guard, store) = temp_store();
    let journal = Journal::new(store);
    let owner = UserId::from("demo-user-id");

    let open = journal
        .create(
            &owner,
            DraftBuilder::new()
                .coin("SOL")
                .direction(Direction::Short)
                .entry_price(dec!(95))
                .quantity(dec!(10))
                .build(),
        )
        .await
        .unwrap();
    assert!(open.profit_loss.is_none());

    let patch = tradelog::domain::TradePatch {
        status: Some(TradeStatus::Closed),
        exit_price: Some(dec!(90)),
        ..Default::default()
    };
    let closed = journal.update(&open.id, &owner, patch).await.unwrap();
    assert_eq!(closed.profit_loss, Some(dec!(50)));

    let stats = journal.stats(&owner).await.unwrap();
    assert_eq!(stats.total_trades, 1);
    assert_eq!(stats.winning_trades, 1);
    assert_eq!(stats.win_rate, dec!(100.0));
    assert_eq!(stats.net_profit, dec!(50.00));
}
