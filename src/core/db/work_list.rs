use std::future::Future;

use crate::core::{
    model::{BeeTier, Task},
    nav::Route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Already in the applying set; nothing changed.
    AlreadyApplying,
    PremiumRequired,
    TierTooLow { required: BeeTier },
}

impl ApplyOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, ApplyOutcome::Applied | ApplyOutcome::AlreadyApplying)
    }

    /// Screen to send the bee to instead of staying put.
    pub fn redirect(self) -> Option<Route> {
        match self {
            ApplyOutcome::PremiumRequired => Some(Route::Premium),
            _ => None,
        }
    }

    pub fn notice(self) -> Option<String> {
        match self {
            ApplyOutcome::TierTooLow { required } => {
                Some(format!("This job requires {} Bee access.", required))
            }
            _ => None,
        }
    }
}

pub const APPLYING_STATUS: &str = "ETA: 12-48 hours";

#[derive(Debug, Clone)]
pub struct WorkListEntry {
    /// Stored id; may not match `task.id` when the task left the catalog.
    pub id: String,
    pub task: &'static Task,
    pub locked_by_premium: bool,
    pub locked_by_tier: bool,
}

impl WorkListEntry {
    pub fn is_locked(&self) -> bool {
        self.locked_by_premium || self.locked_by_tier
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkList {
    pub cart: Vec<WorkListEntry>,
    pub applying: Vec<WorkListEntry>,
    pub approved: Vec<WorkListEntry>,
}

pub trait WorkListRepository {
    fn cart(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;
    fn applying(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;
    /// Approved ids, seeding the default set if the stored set is empty.
    fn approved(&self) -> impl Future<Output = anyhow::Result<Vec<String>>> + Send;
    /// Returns `false` if the id was already in the cart.
    fn add_to_cart(&self, task_id: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;
    /// Returns `false` if the id was not in the cart.
    fn remove_from_cart(&self, task_id: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;
    /// Gate and insert into applying. The cart is left alone.
    fn apply(&self, task: &Task) -> impl Future<Output = anyhow::Result<ApplyOutcome>> + Send;
    /// Gate, then insert into applying and drop from the cart.
    fn move_cart_to_applying(&self, task: &Task) -> impl Future<Output = anyhow::Result<ApplyOutcome>> + Send;
    fn work_list(&self) -> impl Future<Output = anyhow::Result<WorkList>> + Send;
}
