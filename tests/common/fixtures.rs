use beehire::core::db::keys;
use beehire::{BeeHireDb, KeyValueStore, MemoryStore, SqliteStore};

/// Creates a BeeHireDb over a fresh in-memory store.
pub fn create_memory_db() -> BeeHireDb<MemoryStore> {
    BeeHireDb::new(MemoryStore::new())
}

/// Creates a BeeHireDb over a SQLite file in a temporary directory.
/// Returns both the db and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (BeeHireDb<SqliteStore>, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test.beehire.db");
    let db = BeeHireDb::open(&path)
        .await
        .expect("Failed to create test store");
    (db, dir)
}

/// Stores the tier, premium flag and contract flag directly, bypassing the rules.
pub async fn seed_session<S: KeyValueStore>(
    db: &BeeHireDb<S>,
    tier: &str,
    is_premium: bool,
    contract_accepted: bool,
) -> anyhow::Result<()> {
    let store = db.store();
    store.set_string(keys::BEE_TIER, tier).await?;
    store
        .set_string(keys::IS_PREMIUM, if is_premium { keys::TRUE } else { keys::FALSE })
        .await?;
    if contract_accepted {
        store.set_string(keys::CONTRACT_ACCEPTED, keys::TRUE).await?;
    }
    Ok(())
}

pub async fn set_work_stats<S: KeyValueStore>(
    db: &BeeHireDb<S>,
    work_days: &str,
    performance: &str,
) -> anyhow::Result<()> {
    db.store().set_string(keys::WORK_DAYS, work_days).await?;
    db.store().set_string(keys::PERFORMANCE, performance).await?;
    Ok(())
}
