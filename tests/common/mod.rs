#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from beehire for tests
pub use beehire::core::db::keys;
pub use beehire::{
    AcceptOutcome, ApplyOutcome, BeeHireDb, BeeTier, ControlLevel, MemoryStore, Route, Session,
    SqliteStore, StateChange, Task, UpgradeOutcome, find_task,
};
