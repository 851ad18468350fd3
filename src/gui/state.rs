use std::path::Path;

use crate::core::{
    db::{BeeHireDb, SessionRepository, Snapshot},
    events::Subscription,
    model::Session,
};

/// State shared by every screen once the store is open.
#[derive(Debug)]
pub struct AppState {
    pub db: BeeHireDb,
    pub snapshot: Snapshot,
    changes: Subscription,
}

impl AppState {
    pub async fn open(store_file: &Path) -> anyhow::Result<Self> {
        let db = BeeHireDb::open(store_file).await?;
        db.seed_session().await?;
        let changes = db.subscribe();
        let snapshot = db.snapshot().await?;
        Ok(Self {
            db,
            snapshot,
            changes,
        })
    }

    pub fn session(&self) -> &Session {
        &self.snapshot.session
    }

    /// True if anything was published since the last call.
    pub fn take_changes(&mut self) -> bool {
        !self.changes.drain().is_empty()
    }
}
