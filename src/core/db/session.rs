use std::future::Future;

use crate::core::model::{BeeTier, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Upgraded,
    NotEligible,
}

pub trait SessionRepository {
    /// Read every session field, falling back to defaults for absent or invalid values.
    fn load_session(&self) -> impl Future<Output = anyhow::Result<Session>> + Send;
    /// Write defaults for fields that are absent, then load.
    fn seed_session(&self) -> impl Future<Output = anyhow::Result<Session>> + Send;
    /// Store the display name. Blank names are refused and `false` is returned.
    fn set_username(&self, name: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;
    fn set_tier(&self, tier: BeeTier) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn subscribe_premium(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn upgrade_to_advanced(&self) -> impl Future<Output = anyhow::Result<UpgradeOutcome>> + Send;
}
