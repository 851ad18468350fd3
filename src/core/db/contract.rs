use std::future::Future;

use crate::core::nav::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    Accepted,
    AlreadyAccepted,
    /// The agreement box was not ticked.
    NotChecked,
}

/// What the contract screen shows on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractView {
    pub accepted: bool,
    /// Once accepted the agreement box is locked.
    pub read_only: bool,
    /// Where to go instead of showing the contract, if anywhere.
    pub redirect: Option<Route>,
}

pub trait ContractRepository {
    fn contract_accepted(&self) -> impl Future<Output = anyhow::Result<bool>> + Send;
    fn accept_contract(&self, checked: bool) -> impl Future<Output = anyhow::Result<AcceptOutcome>> + Send;
    fn reset_contract(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
    fn open_contract(&self, from_profile: bool) -> impl Future<Output = anyhow::Result<ContractView>> + Send;
    /// Apply the entry guard for `route` against stored state.
    fn enter(&self, route: Route) -> impl Future<Output = anyhow::Result<Route>> + Send;
}
