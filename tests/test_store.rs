//! Integration tests for the SQLite-backed store.
//!
//! Tests cover:
//! - State persisting across close and reopen
//! - Two handles on one file behaving like two tabs
//! - List deduplication on write

mod common;

// Import traits to bring methods into scope
use beehire::{ContractRepository, KeyValueStore, SessionRepository, WorkListRepository};

use common::*;

#[tokio::test]
async fn test_simple() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    assert_eq!(db.store().get_string("missing").await?, None);
    assert!(db.cart().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_string_round_trip_and_remove() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let store = db.store();

    store.set_string("greeting", "hello").await?;
    store.set_string("greeting", "hi").await?;
    assert_eq!(store.get_string("greeting").await?.as_deref(), Some("hi"));

    store.remove("greeting").await?;
    assert_eq!(store.get_string("greeting").await?, None);
    // removing an absent key is fine
    store.remove("greeting").await?;
    Ok(())
}

#[tokio::test]
async fn test_state_persists_after_reopen() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("persist.beehire.db");

    {
        let db: BeeHireDb<SqliteStore> = BeeHireDb::open(&path).await?;
        db.set_username("Rosa").await?;
        db.accept_contract(true).await?;
        db.add_to_cart("hm-01").await?;
        db.apply(find_task("stride-01").unwrap()).await?;
        db.store().close().await?;
    }

    {
        let db: BeeHireDb<SqliteStore> = BeeHireDb::open(&path).await?;
        let session = db.load_session().await?;
        assert_eq!(session.username, "Rosa");
        assert!(session.contract_accepted);
        assert_eq!(db.cart().await?, vec!["hm-01"]);
        assert_eq!(db.applying().await?, vec!["stride-01"]);
    }

    Ok(())
}

#[tokio::test]
async fn test_two_tabs_share_the_store() -> anyhow::Result<()> {
    let (tab_a, _temp_dir) = create_test_db().await;
    let tab_b = BeeHireDb::new(SqliteStore::open(tab_a.store().path()).await?);

    let mut changes_a = tab_a.subscribe();
    tab_b.add_to_cart("dove-01").await?;

    // tabs have separate buses; tab A only sees the write on re-read
    assert!(changes_a.try_changed().is_none());
    assert_eq!(tab_a.cart().await?, vec!["dove-01"]);

    // last writer wins
    tab_a.store().set_list(keys::CART, &["hm-01".to_string()]).await?;
    tab_b.store().set_list(keys::CART, &["fedex-01".to_string()]).await?;
    assert_eq!(tab_a.cart().await?, vec!["fedex-01"]);
    Ok(())
}

#[tokio::test]
async fn test_set_list_collapses_duplicates() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let items: Vec<String> = ["a", "b", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
    db.store().set_list("ids", &items).await?;
    assert_eq!(db.store().get_list("ids").await?, vec!["a", "b", "c"]);
    Ok(())
}

#[tokio::test]
async fn test_open_fails_without_parent_dir() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("missing").join("store.db");
    let result = SqliteStore::open(&path).await;
    assert!(result.is_err());
    Ok(())
}
