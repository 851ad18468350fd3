pub mod core;
pub mod logging;

pub use crate::core::catalog::{TaskFilter, SortOrder, find_task, resolve_task, visible_tasks};
pub use crate::core::db::{
    AcceptOutcome, ApplyOutcome, BeeHireDb, ContractRepository, KeyValueStore, MemoryStore,
    SessionRepository, Snapshot, SqliteStore, UpgradeOutcome, WorkList, WorkListRepository,
};
pub use crate::core::events::{ChangeBus, StateChange, Subscription};
pub use crate::core::model::{BeeTier, ControlLevel, Session, Task};
pub use crate::core::nav::Route;
pub use crate::core::rules::{Estimate, estimate};

#[cfg(feature = "gui")]
pub mod gui;
