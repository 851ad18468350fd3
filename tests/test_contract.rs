//! Integration tests for the consent gate.
//!
//! Tests cover:
//! - Entry guard on the task hub and work list
//! - Accept requires the agreement box and is idempotent
//! - Reset and read-only review from the profile

mod common;

// Import traits to bring methods into scope
use beehire::ContractRepository;

use common::*;

#[tokio::test]
async fn test_task_hub_redirects_until_accepted() -> anyhow::Result<()> {
    let db = create_memory_db();

    assert_eq!(db.enter(Route::TaskHub).await?, Route::Contract { from_profile: false });
    assert_eq!(db.enter(Route::WorkList).await?, Route::Contract { from_profile: false });
    assert_eq!(db.enter(Route::Earn).await?, Route::Earn);

    assert_eq!(db.accept_contract(true).await?, AcceptOutcome::Accepted);

    assert_eq!(db.enter(Route::TaskHub).await?, Route::TaskHub);
    assert_eq!(db.enter(Route::WorkList).await?, Route::WorkList);
    Ok(())
}

#[tokio::test]
async fn test_accept_requires_checkbox() -> anyhow::Result<()> {
    let db = create_memory_db();
    assert_eq!(db.accept_contract(false).await?, AcceptOutcome::NotChecked);
    assert!(!db.contract_accepted().await?);
    Ok(())
}

#[tokio::test]
async fn test_accept_is_idempotent() -> anyhow::Result<()> {
    let db = create_memory_db();
    let mut changes = db.subscribe();

    assert_eq!(db.accept_contract(true).await?, AcceptOutcome::Accepted);
    assert_eq!(db.accept_contract(true).await?, AcceptOutcome::AlreadyAccepted);
    // unticking after acceptance changes nothing, the box is locked
    assert_eq!(db.accept_contract(false).await?, AcceptOutcome::AlreadyAccepted);

    assert_eq!(changes.drain(), vec![StateChange::Contract]);
    assert!(db.contract_accepted().await?);
    Ok(())
}

#[tokio::test]
async fn test_reset_returns_to_not_accepted() -> anyhow::Result<()> {
    let db = create_memory_db();
    db.accept_contract(true).await?;
    db.reset_contract().await?;

    assert!(!db.contract_accepted().await?);
    assert_eq!(db.store().len().await, 0);
    assert_eq!(db.enter(Route::TaskHub).await?, Route::Contract { from_profile: false });
    Ok(())
}

#[tokio::test]
async fn test_contract_entry_forwards_unless_from_profile() -> anyhow::Result<()> {
    let db = create_memory_db();

    let view = db.open_contract(false).await?;
    assert!(!view.accepted);
    assert!(!view.read_only);
    assert_eq!(view.redirect, None);

    db.accept_contract(true).await?;

    let view = db.open_contract(false).await?;
    assert_eq!(view.redirect, Some(Route::TaskHub));

    let view = db.open_contract(true).await?;
    assert!(view.read_only);
    assert_eq!(view.redirect, None);
    Ok(())
}
