//! Integration tests for session identity and the tier upgrade rule.
//!
//! Tests cover:
//! - Defaults for absent and invalid stored values
//! - Username validation
//! - Seeding absent fields without clobbering existing ones
//! - Upgrading New to Advanced and the upgrade indicator

mod common;

// Import traits to bring methods into scope
use beehire::{KeyValueStore, SessionRepository};

use common::*;

#[tokio::test]
async fn test_empty_store_loads_defaults() -> anyhow::Result<()> {
    let db = create_memory_db();
    let session = db.load_session().await?;
    assert_eq!(session, Session::default());
    assert_eq!(session.username, "Bee");
    assert_eq!(session.work_days, 120.0);
    assert_eq!(session.performance, 7.3);
    assert!(!session.contract_accepted);
    Ok(())
}

#[tokio::test]
async fn test_invalid_values_fall_back_silently() -> anyhow::Result<()> {
    let db = BeeHireDb::new(MemoryStore::with_entries([
        (keys::BEE_TIER, "golden"),
        (keys::WORK_DAYS, "-4"),
        (keys::PERFORMANCE, "fast"),
        (keys::IS_PREMIUM, "yes"),
        (keys::USERNAME, ""),
    ]));
    let session = db.load_session().await?;
    assert_eq!(session.bee_tier, BeeTier::New);
    assert_eq!(session.work_days, 120.0);
    assert_eq!(session.performance, 7.3);
    assert!(!session.is_premium);
    assert_eq!(session.username, "Bee");
    Ok(())
}

#[tokio::test]
async fn test_blank_username_is_refused() -> anyhow::Result<()> {
    let db = create_memory_db();
    assert!(!db.set_username("").await?);
    assert!(!db.set_username("   ").await?);
    assert_eq!(db.store().get_string(keys::USERNAME).await?, None);

    assert!(db.set_username("  Maya ").await?);
    assert_eq!(db.load_session().await?.username, "Maya");
    Ok(())
}

#[tokio::test]
async fn test_seed_keeps_existing_values() -> anyhow::Result<()> {
    let db = BeeHireDb::new(MemoryStore::with_entries([
        (keys::USERNAME, "Ana"),
        (keys::WORK_DAYS, "260"),
    ]));
    let session = db.seed_session().await?;
    assert_eq!(session.username, "Ana");
    assert_eq!(session.work_days, 260.0);
    assert_eq!(session.performance, 7.3);

    let store = db.store();
    assert_eq!(store.get_string(keys::BEE_TIER).await?.as_deref(), Some("New"));
    assert_eq!(store.get_string(keys::PERFORMANCE).await?.as_deref(), Some("7.3"));
    assert_eq!(store.get_string(keys::IS_PREMIUM).await?.as_deref(), Some("false"));
    // seeding never touches consent
    assert_eq!(store.get_string(keys::CONTRACT_ACCEPTED).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_upgrade_with_default_stats() -> anyhow::Result<()> {
    let db = create_memory_db();
    let before = db.seed_session().await?;
    assert!(before.can_upgrade());
    assert!(before.show_upgrade_indicator());

    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::Upgraded);

    let after = db.load_session().await?;
    assert_eq!(after.bee_tier, BeeTier::Advanced);
    assert!(!after.show_upgrade_indicator());
    assert!(!after.can_upgrade());

    // a second upgrade is refused
    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::NotEligible);
    Ok(())
}

#[tokio::test]
async fn test_upgrade_refused_below_thresholds() -> anyhow::Result<()> {
    let db = create_memory_db();

    set_work_stats(&db, "90", "9.5").await?;
    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::NotEligible);

    set_work_stats(&db, "200", "7").await?;
    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::NotEligible);

    let session = db.load_session().await?;
    assert_eq!(session.bee_tier, BeeTier::New);
    assert!(!session.show_upgrade_indicator());

    set_work_stats(&db, "91", "7.01").await?;
    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::Upgraded);
    Ok(())
}

#[tokio::test]
async fn test_golden_bee_never_upgrades() -> anyhow::Result<()> {
    let db = create_memory_db();
    seed_session(&db, "Golden", false, false).await?;
    assert_eq!(db.upgrade_to_advanced().await?, UpgradeOutcome::NotEligible);
    assert_eq!(db.load_session().await?.bee_tier, BeeTier::Golden);
    Ok(())
}

#[tokio::test]
async fn test_premium_and_tier_notify_subscribers() -> anyhow::Result<()> {
    let db = create_memory_db();
    let mut changes = db.subscribe();

    db.subscribe_premium().await?;
    db.set_tier(BeeTier::Golden).await?;

    assert_eq!(changes.drain(), vec![StateChange::Premium, StateChange::Tier]);
    let session = db.load_session().await?;
    assert!(session.is_premium);
    assert_eq!(session.bee_tier, BeeTier::Golden);
    Ok(())
}
