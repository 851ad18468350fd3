mod contract;
pub mod keys;
mod memory;
mod session;
mod state;
mod store;
mod work_list;

use std::{path::Path, sync::Arc};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::core::{
    catalog::{self, APPROVED_DEFAULT_IDS},
    events::{ChangeBus, StateChange, Subscription},
    model::{BeeTier, DEFAULT_PERFORMANCE, DEFAULT_USERNAME, DEFAULT_WORK_DAYS, Session, Task},
    nav::{self, Route},
    rules::{self, Gate},
};

pub use contract::{AcceptOutcome, ContractRepository, ContractView};
pub use memory::MemoryStore;
pub use session::{SessionRepository, UpgradeOutcome};
pub use state::SqliteStore;
pub use store::KeyValueStore;
pub use work_list::{APPLYING_STATUS, ApplyOutcome, WorkList, WorkListEntry, WorkListRepository};

/// Handle on the application state: one store plus the change bus of the
/// views sharing it. Clones share both, and their mutations run one at a
/// time. A second handle made with [`BeeHireDb::new`] on the same store acts
/// like a second tab: it has its own bus and lock, and the last writer wins.
pub struct BeeHireDb<S = SqliteStore> {
    store: Arc<S>,
    bus: ChangeBus,
    writer: Arc<Mutex<()>>,
}

impl<S> Clone for BeeHireDb<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            bus: self.bus.clone(),
            writer: self.writer.clone(),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for BeeHireDb<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeeHireDb")
            .field("store", &self.store)
            .field("subscribers", &self.bus.subscriber_count())
            .finish()
    }
}

impl BeeHireDb<SqliteStore> {
    pub async fn open<P: AsRef<Path>>(store_file: P) -> anyhow::Result<Self> {
        Ok(Self::new(SqliteStore::open(store_file).await?))
    }
}

impl<S: KeyValueStore> BeeHireDb<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            bus: ChangeBus::new(),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }

    /// Session and all three work-list sets, read in one go.
    pub async fn snapshot(&self) -> anyhow::Result<Snapshot> {
        Ok(Snapshot {
            session: self.load_session().await?,
            cart: self.cart().await?,
            applying: self.applying().await?,
            approved: self.approved().await?,
        })
    }

    /// Held across every read-modify-write so mutations on this handle never interleave.
    async fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    async fn store_tier(&self, tier: BeeTier) -> anyhow::Result<()> {
        self.store.set_string(keys::BEE_TIER, tier.as_str()).await?;
        info!(%tier, "tier set");
        self.bus.publish(StateChange::Tier);
        Ok(())
    }

    async fn get_flag(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.store.get_string(key).await?.as_deref() == Some(keys::TRUE))
    }

    async fn get_positive_number(&self, key: &str, default: f64) -> anyhow::Result<f64> {
        let raw = self.store.get_string(key).await?;
        Ok(parse_positive(raw.as_deref()).unwrap_or_else(|| {
            if raw.is_some() {
                debug!(key, ?raw, "stored number not usable, using default");
            }
            default
        }))
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.store.get_string(key).await?.is_none() {
            self.store.set_string(key, value).await?;
        }
        Ok(())
    }

    async fn insert_into(&self, key: &str, task_id: &str) -> anyhow::Result<bool> {
        let mut items = self.store.get_list(key).await?;
        if items.iter().any(|id| id == task_id) {
            return Ok(false);
        }
        items.push(task_id.to_string());
        self.store.set_list(key, &items).await?;
        Ok(true)
    }
}

/// Finite and strictly positive, like the stored counters require.
fn parse_positive(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub session: Session,
    pub cart: Vec<String>,
    pub applying: Vec<String>,
    pub approved: Vec<String>,
}

impl Snapshot {
    /// Resolve the stored ids against the catalog and this session's access.
    pub fn work_list(&self) -> WorkList {
        WorkList {
            cart: self.entries(&self.cart),
            applying: self.entries(&self.applying),
            approved: self.entries(&self.approved),
        }
    }

    fn entries(&self, ids: &[String]) -> Vec<WorkListEntry> {
        ids.iter()
            .map(|id| {
                let task = catalog::resolve_task(id);
                WorkListEntry {
                    id: id.clone(),
                    task,
                    locked_by_premium: task.premium_only && !self.session.is_premium,
                    locked_by_tier: !rules::tier_allows(self.session.bee_tier, task.tier_required),
                }
            })
            .collect()
    }
}

impl<S: KeyValueStore> SessionRepository for BeeHireDb<S> {
    async fn load_session(&self) -> anyhow::Result<Session> {
        let username = self
            .store
            .get_string(keys::USERNAME)
            .await?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

        let bee_tier = match self.store.get_string(keys::BEE_TIER).await? {
            Some(raw) => raw.parse::<BeeTier>().unwrap_or_else(|e| {
                warn!(error = %e, "invalid stored tier, using New");
                BeeTier::New
            }),
            None => BeeTier::New,
        };

        Ok(Session {
            username,
            bee_tier,
            is_premium: self.get_flag(keys::IS_PREMIUM).await?,
            work_days: self.get_positive_number(keys::WORK_DAYS, DEFAULT_WORK_DAYS).await?,
            performance: self
                .get_positive_number(keys::PERFORMANCE, DEFAULT_PERFORMANCE)
                .await?,
            contract_accepted: self.get_flag(keys::CONTRACT_ACCEPTED).await?,
        })
    }

    async fn seed_session(&self) -> anyhow::Result<Session> {
        let _guard = self.write_lock().await;
        self.set_if_absent(keys::USERNAME, DEFAULT_USERNAME).await?;
        self.set_if_absent(keys::BEE_TIER, BeeTier::New.as_str()).await?;
        self.set_if_absent(keys::IS_PREMIUM, keys::FALSE).await?;
        self.set_if_absent(keys::WORK_DAYS, &DEFAULT_WORK_DAYS.to_string())
            .await?;
        self.set_if_absent(keys::PERFORMANCE, &DEFAULT_PERFORMANCE.to_string())
            .await?;
        self.load_session().await
    }

    async fn set_username(&self, name: &str) -> anyhow::Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let _guard = self.write_lock().await;
        self.store.set_string(keys::USERNAME, name).await?;
        info!(username = name, "username set");
        self.bus.publish(StateChange::Username);
        Ok(true)
    }

    async fn set_tier(&self, tier: BeeTier) -> anyhow::Result<()> {
        let _guard = self.write_lock().await;
        self.store_tier(tier).await
    }

    async fn subscribe_premium(&self) -> anyhow::Result<()> {
        let _guard = self.write_lock().await;
        self.store.set_string(keys::IS_PREMIUM, keys::TRUE).await?;
        info!("premium enabled");
        self.bus.publish(StateChange::Premium);
        Ok(())
    }

    async fn upgrade_to_advanced(&self) -> anyhow::Result<UpgradeOutcome> {
        let _guard = self.write_lock().await;
        let session = self.load_session().await?;
        if !session.can_upgrade() {
            debug!(
                tier = %session.bee_tier,
                work_days = session.work_days,
                performance = session.performance,
                "upgrade refused"
            );
            return Ok(UpgradeOutcome::NotEligible);
        }
        self.store_tier(BeeTier::Advanced).await?;
        Ok(UpgradeOutcome::Upgraded)
    }
}

impl<S: KeyValueStore> ContractRepository for BeeHireDb<S> {
    async fn contract_accepted(&self) -> anyhow::Result<bool> {
        self.get_flag(keys::CONTRACT_ACCEPTED).await
    }

    async fn accept_contract(&self, checked: bool) -> anyhow::Result<AcceptOutcome> {
        let _guard = self.write_lock().await;
        if self.contract_accepted().await? {
            return Ok(AcceptOutcome::AlreadyAccepted);
        }
        if !checked {
            return Ok(AcceptOutcome::NotChecked);
        }
        self.store.set_string(keys::CONTRACT_ACCEPTED, keys::TRUE).await?;
        info!("contract accepted");
        self.bus.publish(StateChange::Contract);
        Ok(AcceptOutcome::Accepted)
    }

    async fn reset_contract(&self) -> anyhow::Result<()> {
        let _guard = self.write_lock().await;
        self.store.remove(keys::CONTRACT_ACCEPTED).await?;
        info!("contract reset");
        self.bus.publish(StateChange::Contract);
        Ok(())
    }

    async fn open_contract(&self, from_profile: bool) -> anyhow::Result<ContractView> {
        let accepted = self.contract_accepted().await?;
        Ok(ContractView {
            accepted,
            read_only: accepted,
            redirect: nav::contract_entry(accepted, from_profile),
        })
    }

    async fn enter(&self, route: Route) -> anyhow::Result<Route> {
        let session = self.load_session().await?;
        let target = nav::guard(route, &session);
        if target != route {
            debug!(?route, ?target, "entry redirected");
        }
        Ok(target)
    }
}

impl<S: KeyValueStore> WorkListRepository for BeeHireDb<S> {
    async fn cart(&self) -> anyhow::Result<Vec<String>> {
        self.store.get_list(keys::CART).await
    }

    async fn applying(&self) -> anyhow::Result<Vec<String>> {
        self.store.get_list(keys::APPLYING).await
    }

    async fn approved(&self) -> anyhow::Result<Vec<String>> {
        let approved = self.store.get_list(keys::APPROVED).await?;
        if !approved.is_empty() {
            return Ok(approved);
        }
        let _guard = self.write_lock().await;
        // another call may have seeded while we waited
        let approved = self.store.get_list(keys::APPROVED).await?;
        if !approved.is_empty() {
            return Ok(approved);
        }
        let seeded: Vec<String> = APPROVED_DEFAULT_IDS.iter().map(|id| id.to_string()).collect();
        self.store.set_list(keys::APPROVED, &seeded).await?;
        debug!("seeded approved set");
        self.bus.publish(StateChange::Approved);
        Ok(seeded)
    }

    async fn add_to_cart(&self, task_id: &str) -> anyhow::Result<bool> {
        let _guard = self.write_lock().await;
        let inserted = self.insert_into(keys::CART, task_id).await?;
        if inserted {
            info!(task_id, "added to cart");
            self.bus.publish(StateChange::Cart);
        }
        Ok(inserted)
    }

    async fn remove_from_cart(&self, task_id: &str) -> anyhow::Result<bool> {
        let _guard = self.write_lock().await;
        let mut cart = self.cart().await?;
        let before = cart.len();
        cart.retain(|id| id != task_id);
        if cart.len() == before {
            return Ok(false);
        }
        self.store.set_list(keys::CART, &cart).await?;
        info!(task_id, "removed from cart");
        self.bus.publish(StateChange::Cart);
        Ok(true)
    }

    async fn apply(&self, task: &Task) -> anyhow::Result<ApplyOutcome> {
        let _guard = self.write_lock().await;
        let session = self.load_session().await?;
        match rules::gate(&session, task) {
            Gate::PremiumRequired => return Ok(ApplyOutcome::PremiumRequired),
            Gate::TierTooLow { required } => return Ok(ApplyOutcome::TierTooLow { required }),
            Gate::Open => {}
        }
        if !self.insert_into(keys::APPLYING, task.id).await? {
            return Ok(ApplyOutcome::AlreadyApplying);
        }
        info!(task_id = task.id, "applied");
        self.bus.publish(StateChange::Applying);
        Ok(ApplyOutcome::Applied)
    }

    async fn move_cart_to_applying(&self, task: &Task) -> anyhow::Result<ApplyOutcome> {
        let _guard = self.write_lock().await;
        let session = self.load_session().await?;
        match rules::gate(&session, task) {
            Gate::PremiumRequired => return Ok(ApplyOutcome::PremiumRequired),
            Gate::TierTooLow { required } => return Ok(ApplyOutcome::TierTooLow { required }),
            Gate::Open => {}
        }
        // applying first: an interruption leaves the task in both sets, never in neither
        let inserted = self.insert_into(keys::APPLYING, task.id).await?;
        if inserted {
            self.bus.publish(StateChange::Applying);
        }
        let mut cart = self.cart().await?;
        let before = cart.len();
        cart.retain(|id| id != task.id);
        if cart.len() < before {
            self.store.set_list(keys::CART, &cart).await?;
            self.bus.publish(StateChange::Cart);
        }
        info!(task_id = task.id, inserted, "moved from cart to applying");
        Ok(if inserted {
            ApplyOutcome::Applied
        } else {
            ApplyOutcome::AlreadyApplying
        })
    }

    async fn work_list(&self) -> anyhow::Result<WorkList> {
        Ok(self.snapshot().await?.work_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_numbers_only() {
        assert_eq!(parse_positive(Some("260")), Some(260.0));
        assert_eq!(parse_positive(Some(" 7.5 ")), Some(7.5));
        assert_eq!(parse_positive(Some("0")), None);
        assert_eq!(parse_positive(Some("-3")), None);
        assert_eq!(parse_positive(Some("abc")), None);
        assert_eq!(parse_positive(Some("inf")), None);
        assert_eq!(parse_positive(Some("NaN")), None);
        assert_eq!(parse_positive(None), None);
    }
}
