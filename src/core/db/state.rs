use anyhow::Context;
use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, info};

use std::{
    ops::{Deref, DerefMut},
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::core::db::store::KeyValueStore;

const MAX_CONNECTIONS: u32 = 5;

/// Key-value store kept in a SQLite file.
///
/// Handles opened separately on the same file behave like separate browser
/// tabs: they see each other's writes and the last writer wins.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    state: Arc<StoreState>,
}

struct StoreState {
    store_file: PathBuf,
    pool: RwLock<SqlitePool>,
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState")
            .field("store_file", &self.store_file)
            .finish()
    }
}

fn connect_options(store_file: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(store_file)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
}

impl SqliteStore {
    pub async fn open<P: AsRef<Path>>(store_file: P) -> anyhow::Result<Self> {
        let store_file = store_file.as_ref().to_path_buf();

        if let Some(parent) = store_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Store file parent does not exist: {:?}", store_file);
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(connect_options(&store_file))
            .await
            .with_context(|| format!("Failed to open store {:?}", store_file))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to migrate store")?;
        info!(path = ?store_file, "opened store");

        Ok(Self {
            state: Arc::new(StoreState {
                store_file,
                pool: RwLock::new(pool),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.state.store_file
    }

    /// Acquire a pooled connection and hold the pool read lock for the entire lifetime
    /// of the returned guard.
    async fn conn(&self) -> anyhow::Result<DbConnGuard<'_>> {
        let pool_guard = self.state.pool.read().await;
        // acquire while the read lock is held so close() cannot race us
        let conn = pool_guard.acquire().await?;
        Ok(DbConnGuard {
            _pool_guard: pool_guard,
            conn,
        })
    }

    /// Flush the WAL into the main file and release all connections.
    ///
    /// Waits for in-flight queries because it takes the pool write lock.
    /// Any later use of this handle (or its clones) fails.
    pub async fn close(&self) -> anyhow::Result<()> {
        let pool_guard = self.state.pool.write().await;
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&*pool_guard)
            .await?;
        pool_guard.close().await;
        debug!(path = ?self.state.store_file, "closed store");
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    async fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.conn().await?;
        let value = sqlx::query_scalar::<_, String>(r#"SELECT value FROM kv_entry WHERE key = $1"#)
            .bind(key)
            .fetch_optional(&mut **conn)
            .await?;
        Ok(value)
    }

    async fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut conn = self.conn().await?;
        sqlx::query(
            r#"INSERT INTO kv_entry (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&mut **conn)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut conn = self.conn().await?;
        sqlx::query(r#"DELETE FROM kv_entry WHERE key = $1"#)
            .bind(key)
            .execute(&mut **conn)
            .await?;
        Ok(())
    }
}

struct DbConnGuard<'a> {
    _pool_guard: RwLockReadGuard<'a, SqlitePool>,
    conn: PoolConnection<Sqlite>,
}

impl<'a> Deref for DbConnGuard<'a> {
    type Target = PoolConnection<Sqlite>;
    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl<'a> DerefMut for DbConnGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
