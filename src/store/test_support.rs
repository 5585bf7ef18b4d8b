//! Shared test utilities for store tests.

use super::TraceStore;
use crate::engine::{Row, SqlValue, SqliteEngine, StorageEngine};
use crate::error::{Result, StoreError};
use std::cell::{Cell, RefCell};

/// Create an in-memory store with the schema applied.
///
/// # Panics
///
/// Panics if the database cannot be opened. This is intentional for test code.
pub fn create_test_store() -> TraceStore {
    TraceStore::open_in_memory().expect("Failed to open in-memory store")
}

/// Engine wrapper that fails any statement containing a configured fragment.
///
/// Transaction commands are matched against "BEGIN", "COMMIT" and "ROLLBACK".
pub struct FaultyEngine {
    inner: SqliteEngine,
    fail_patterns: RefCell<Vec<String>>,
    rollbacks: Cell<usize>,
}

impl FaultyEngine {
    pub fn new() -> Self {
        Self {
            inner: SqliteEngine::open_in_memory().expect("Failed to open in-memory engine"),
            fail_patterns: RefCell::new(Vec::new()),
            rollbacks: Cell::new(0),
        }
    }

    pub fn fail_on(&self, fragment: &str) {
        self.fail_patterns.borrow_mut().push(fragment.to_string());
    }

    pub fn clear_failures(&self) {
        self.fail_patterns.borrow_mut().clear();
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.get()
    }

    fn check(&self, sql: &str, params: &[SqlValue]) -> Result<()> {
        let patterns = self.fail_patterns.borrow();
        let hit = patterns.iter().any(|p| {
            sql.contains(p.as_str())
                || params
                    .iter()
                    .any(|v| matches!(v, SqlValue::Text(t) if t == p))
        });
        if hit {
            return Err(StoreError::Engine {
                message: format!("injected failure: {sql}"),
            });
        }
        Ok(())
    }
}

impl StorageEngine for FaultyEngine {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<usize> {
        self.check(sql, params)?;
        self.inner.execute(sql, params)
    }

    fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        self.check(sql, params)?;
        self.inner.query(sql, params)
    }

    fn execute_batch(&self, sql: &str) -> Result<()> {
        self.check(sql, &[])?;
        self.inner.execute_batch(sql)
    }

    fn begin_transaction(&self) -> Result<()> {
        self.check("BEGIN", &[])?;
        self.inner.begin_transaction()
    }

    fn commit(&self) -> Result<()> {
        self.check("COMMIT", &[])?;
        self.inner.commit()
    }

    fn rollback(&self) -> Result<()> {
        self.rollbacks.set(self.rollbacks.get() + 1);
        self.check("ROLLBACK", &[])?;
        self.inner.rollback()
    }

    fn is_transaction_active(&self) -> bool {
        self.inner.is_transaction_active()
    }

    fn last_error(&self) -> String {
        self.inner.last_error()
    }

    fn last_insert_rowid(&self) -> i64 {
        self.inner.last_insert_rowid()
    }
}
