//! The trace store.
//!
//! [`TraceStore`] maps record types onto engine statements and owns the
//! transaction discipline of its single connection. Query and insert families
//! live in the submodules, grouped by the data they touch:
//!
//! - `traces` - API call traces, stack traces and marshalled parameters
//! - `annotations` - user and global annotations
//! - `shaders` - shader snapshots, the incremental merge and assembly stats
//! - `samples` - counters, weights, samples and the derived aggregates
//! - `feedback` - regions of interest, summaries and category tables
//! - `power` - power estimation, GPU timers and devices
//! - `session` - key/value session metadata
//!
//! # Transactions
//!
//! The engine does not nest transactions, so the store tracks whether one is
//! open and rejects a second `begin_transaction`. Operations that need their own
//! transaction while the caller may hold one go through
//! [`TraceStore::with_suspended_transaction`].

mod annotations;
mod feedback;
mod power;
mod samples;
mod session;
mod shaders;
mod traces;

pub use feedback::FEEDBACK_TABLES;
pub use session::SessionKey;

use crate::config::StoreConfig;
use crate::engine::{u64_value, SqlValue, SqliteEngine, StorageEngine, MAX_ORDERED};
use crate::error::{Result, StoreError};
use crate::schema;
use crate::table::StoredRecord;
use std::path::Path;
use tracing::{debug, info, warn};

/// Persistence and query layer for one profiling session.
///
/// Not meant to be shared between threads without external serialization; the
/// default engine holds a single SQLite connection.
pub struct TraceStore<E: StorageEngine = SqliteEngine> {
    engine: E,
    transaction_active: bool,
}

impl TraceStore<SqliteEngine> {
    /// Open or create a session database at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Database file
    /// * `config` - Connection settings (journal mode, busy timeout, ...)
    ///
    /// # Returns
    ///
    /// A store whose schema is guaranteed to exist
    pub fn open(path: &Path, config: &StoreConfig) -> Result<Self> {
        let engine = SqliteEngine::open(path, config)?;
        let store = Self::with_engine(engine)?;
        info!("opened trace store at {}", path.display());
        Ok(store)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_engine(SqliteEngine::open_in_memory()?)
    }
}

impl<E: StorageEngine> TraceStore<E> {
    /// Wrap an engine, creating the schema if needed.
    pub fn with_engine(engine: E) -> Result<Self> {
        schema::create_schema(&engine)?;
        let transaction_active = engine.is_transaction_active();
        Ok(Self {
            engine,
            transaction_active,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consume the store and return its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    pub fn is_transaction_active(&self) -> bool {
        self.transaction_active
    }

    /// Open a transaction. Fails with `TransactionMisuse` if one is already open.
    pub fn begin_transaction(&mut self) -> Result<()> {
        if self.transaction_active {
            return Err(StoreError::TransactionMisuse(
                "begin_transaction called while a transaction is active".to_string(),
            ));
        }
        self.engine.begin_transaction()?;
        self.transaction_active = true;
        debug!("transaction opened");
        Ok(())
    }

    /// Commit the open transaction.
    ///
    /// If the commit fails, one rollback is attempted before the commit error is
    /// returned.
    pub fn end_transaction(&mut self) -> Result<()> {
        if !self.transaction_active {
            return Err(StoreError::TransactionMisuse(
                "end_transaction called with no active transaction".to_string(),
            ));
        }
        match self.engine.commit() {
            Ok(()) => {
                self.transaction_active = false;
                debug!("transaction committed");
                Ok(())
            }
            Err(err) => {
                warn!("commit failed, rolling back: {}", err);
                if let Err(rollback_err) = self.engine.rollback() {
                    warn!("rollback after failed commit also failed: {}", rollback_err);
                }
                self.transaction_active = self.engine.is_transaction_active();
                Err(err)
            }
        }
    }

    /// Discard the open transaction.
    pub fn rollback_transaction(&mut self) -> Result<()> {
        if !self.transaction_active {
            return Err(StoreError::TransactionMisuse(
                "rollback_transaction called with no active transaction".to_string(),
            ));
        }
        let result = self.engine.rollback();
        self.transaction_active = self.engine.is_transaction_active();
        debug!("transaction rolled back");
        result
    }

    /// Run `f` inside a fresh transaction: commit on `Ok`, roll back on `Err`.
    pub fn in_transaction<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.begin_transaction()?;
        match f(self) {
            Ok(value) => {
                self.end_transaction()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback_transaction() {
                    warn!("rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Run `f` with any open transaction committed first and reopened afterwards.
    ///
    /// Whether a transaction is open is the same before and after the call. Work
    /// the caller did before the call is committed by it. The reopen happens even
    /// when `f` fails; a failed reopen takes precedence over `f`'s result.
    pub fn with_suspended_transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let suspended = self.transaction_active;
        if suspended {
            debug!("suspending active transaction");
            self.end_transaction()?;
        }
        let result = f(self);
        if suspended {
            self.begin_transaction()?;
            debug!("resumed transaction");
        }
        result
    }

    // ------------------------------------------------------------------
    // Generic record access
    // ------------------------------------------------------------------

    /// Every stored record of type `T`.
    pub fn get_all<T: StoredRecord>(&self) -> Result<Vec<T>> {
        self.fetch(&T::select_sql(), &[])
    }

    /// Insert one record after checking its invariants.
    pub fn insert<T: StoredRecord>(&mut self, record: &T) -> Result<()> {
        record.validate()?;
        self.engine.execute(&T::insert_sql(), &record.to_values())?;
        Ok(())
    }

    /// Remove every row of `T`'s table. Returns the number of rows removed.
    pub fn delete_all<T: StoredRecord>(&mut self) -> Result<usize> {
        let removed = self
            .engine
            .execute(&format!("DELETE FROM {}", T::TABLE), &[])?;
        info!("deleted {} rows from {}", removed, T::TABLE);
        Ok(removed)
    }

    /// Number of stored records of type `T`.
    pub fn count<T: StoredRecord>(&self) -> Result<u64> {
        self.count_table(T::TABLE)
    }

    /// Row count of every store table, in schema order.
    pub fn row_counts(&self) -> Result<Vec<(&'static str, u64)>> {
        schema::TABLES
            .iter()
            .map(|table| Ok((*table, self.count_table(table)?)))
            .collect()
    }

    pub(crate) fn count_table(&self, table: &str) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        self.scalar_u64(&sql, &[])?
            .ok_or_else(|| StoreError::not_found(format!("row count of {table}")))
    }

    pub(crate) fn fetch<T: StoredRecord>(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<T>> {
        self.engine
            .query(sql, params)?
            .iter()
            .map(T::from_row)
            .collect()
    }

    /// `SELECT <T columns> FROM <T table> <clause>`.
    pub(crate) fn fetch_where<T: StoredRecord>(
        &self,
        clause: &str,
        params: &[SqlValue],
    ) -> Result<Vec<T>> {
        self.fetch(&format!("{} {}", T::select_sql(), clause), params)
    }

    /// First record matching `clause`, or `NotFound` described by `what`.
    pub(crate) fn fetch_one<T: StoredRecord>(
        &self,
        clause: &str,
        params: &[SqlValue],
        what: impl FnOnce() -> String,
    ) -> Result<T> {
        self.fetch_where::<T>(clause, params)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(what()))
    }

    /// First column of the first row as u64. `None` if there is no row or the value is NULL.
    pub(crate) fn scalar_u64(&self, sql: &str, params: &[SqlValue]) -> Result<Option<u64>> {
        match self.engine.query(sql, params)?.first() {
            Some(row) => Ok(row.optional_i64(0)?.map(|v| v as u64)),
            None => Ok(None),
        }
    }

    /// First column of every row as u64.
    pub(crate) fn column_u64(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<u64>> {
        self.engine
            .query(sql, params)?
            .iter()
            .map(|row| row.u64(0))
            .collect()
    }
}

/// Comma-separated `T` columns qualified with a table alias.
pub(crate) fn qualified_columns<T: StoredRecord>(alias: &str) -> String {
    T::COLUMNS
        .iter()
        .map(|c| format!("{alias}.{}", c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reject ranges whose end precedes their start.
pub(crate) fn check_range(what: &'static str, start: u64, end: u64) -> Result<()> {
    if end < start {
        return Err(StoreError::invalid_range(what, start, end));
    }
    Ok(())
}

/// Bind `[start, end]` for comparison against an ordered column.
///
/// `end` is clamped to [`MAX_ORDERED`], so `u64::MAX` means no upper limit.
/// Returns `None` when `start` is past every value a column can hold.
pub(crate) fn ordered_range(
    what: &'static str,
    start: u64,
    end: u64,
) -> Result<Option<[SqlValue; 2]>> {
    check_range(what, start, end)?;
    if start > MAX_ORDERED {
        return Ok(None);
    }
    Ok(Some([u64_value(start), u64_value(end.min(MAX_ORDERED))]))
}

#[cfg(test)]
pub(crate) mod test_support;
