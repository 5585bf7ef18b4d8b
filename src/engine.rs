//! Storage engine binding.
//!
//! The store talks to its relational engine only through the [`StorageEngine`]
//! trait: statement execution, row queries, transaction control and the text of
//! the last failure. [`SqliteEngine`] is the production binding over a single
//! rusqlite connection.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub use rusqlite::types::Value as SqlValue;

/// Narrow contract between the trace store and the physical engine.
///
/// Implementations hold exactly one connection and do not support nested
/// transactions.
pub trait StorageEngine {
    /// Execute a statement that returns no rows. Returns the number of rows changed.
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<usize>;

    /// Execute a statement and collect every returned row.
    fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>>;

    /// Run several `;`-separated statements with no parameters.
    fn execute_batch(&self, sql: &str) -> Result<()>;

    fn begin_transaction(&self) -> Result<()>;
    fn commit(&self) -> Result<()>;
    fn rollback(&self) -> Result<()>;

    /// Whether the engine currently has an open transaction.
    fn is_transaction_active(&self) -> bool;

    /// Text of the most recent engine failure, empty if none occurred.
    fn last_error(&self) -> String;

    /// Row id assigned by the most recent successful insert.
    fn last_insert_rowid(&self) -> i64;
}

/// One result row, decoded into owned engine values.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(columns: Arc<Vec<String>>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn column_name(&self, idx: usize) -> &str {
        self.columns.get(idx).map(String::as_str).unwrap_or("?")
    }

    pub fn value(&self, idx: usize) -> Result<&SqlValue> {
        self.values.get(idx).ok_or_else(|| StoreError::Decode {
            column: format!("#{idx}"),
            message: format!("row has only {} columns", self.values.len()),
        })
    }

    fn decode_error(&self, idx: usize, expected: &str) -> StoreError {
        let got = match self.values.get(idx) {
            Some(SqlValue::Null) => "NULL",
            Some(SqlValue::Integer(_)) => "INTEGER",
            Some(SqlValue::Real(_)) => "REAL",
            Some(SqlValue::Text(_)) => "TEXT",
            Some(SqlValue::Blob(_)) => "BLOB",
            None => "nothing",
        };
        StoreError::Decode {
            column: self.column_name(idx).to_string(),
            message: format!("expected {expected}, got {got}"),
        }
    }

    pub fn i64(&self, idx: usize) -> Result<i64> {
        match self.value(idx)? {
            SqlValue::Integer(v) => Ok(*v),
            _ => Err(self.decode_error(idx, "INTEGER")),
        }
    }

    /// Unsigned values are stored as their i64 bit pattern.
    pub fn u64(&self, idx: usize) -> Result<u64> {
        self.i64(idx).map(|v| v as u64)
    }

    pub fn u32(&self, idx: usize) -> Result<u32> {
        let v = self.i64(idx)?;
        u32::try_from(v).map_err(|_| StoreError::Decode {
            column: self.column_name(idx).to_string(),
            message: format!("{v} does not fit in u32"),
        })
    }

    pub fn i32(&self, idx: usize) -> Result<i32> {
        let v = self.i64(idx)?;
        i32::try_from(v).map_err(|_| StoreError::Decode {
            column: self.column_name(idx).to_string(),
            message: format!("{v} does not fit in i32"),
        })
    }

    pub fn f64(&self, idx: usize) -> Result<f64> {
        match self.value(idx)? {
            SqlValue::Real(v) => Ok(*v),
            SqlValue::Integer(v) => Ok(*v as f64),
            _ => Err(self.decode_error(idx, "REAL")),
        }
    }

    pub fn f32(&self, idx: usize) -> Result<f32> {
        self.f64(idx).map(|v| v as f32)
    }

    /// NULL decodes as an empty string.
    pub fn string(&self, idx: usize) -> Result<String> {
        match self.value(idx)? {
            SqlValue::Text(s) => Ok(s.clone()),
            SqlValue::Null => Ok(String::new()),
            _ => Err(self.decode_error(idx, "TEXT")),
        }
    }

    /// NULL decodes as an empty blob.
    pub fn blob(&self, idx: usize) -> Result<Vec<u8>> {
        match self.value(idx)? {
            SqlValue::Blob(b) => Ok(b.clone()),
            SqlValue::Text(s) => Ok(s.as_bytes().to_vec()),
            SqlValue::Null => Ok(Vec::new()),
            _ => Err(self.decode_error(idx, "BLOB")),
        }
    }

    pub fn optional_i64(&self, idx: usize) -> Result<Option<i64>> {
        match self.value(idx)? {
            SqlValue::Null => Ok(None),
            _ => self.i64(idx).map(Some),
        }
    }
}

/// Convert a u64 field to its stored representation.
pub fn u64_value(v: u64) -> SqlValue {
    SqlValue::Integer(v as i64)
}

/// Largest value an ordered column (times, frame numbers) may hold.
///
/// The engine compares the stored i64 bit pattern, so anything above this
/// would sort below zero.
pub const MAX_ORDERED: u64 = i64::MAX as u64;

/// SQLite binding over a single connection.
pub struct SqliteEngine {
    conn: Connection,
    last_error: RefCell<String>,
}

impl SqliteEngine {
    /// Open (or create) a database file and apply the connection pragmas from `config`.
    pub fn open(path: &Path, config: &StoreConfig) -> Result<Self> {
        if !config.create_if_missing && !path.exists() {
            return Err(StoreError::NotFound(format!(
                "database {}",
                path.display()
            )));
        }
        let conn = Connection::open(path)?;
        let engine = Self::from_connection(conn);
        engine.apply_config(config)?;
        Ok(engine)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let engine = Self::from_connection(conn);
        engine.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(engine)
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            last_error: RefCell::new(String::new()),
        }
    }

    fn apply_config(&self, config: &StoreConfig) -> Result<()> {
        self.conn
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|e| self.fail(e))?;
        self.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;\nPRAGMA journal_mode = {};\nPRAGMA synchronous = {};",
            config.journal_mode.as_pragma(),
            config.sync_mode.as_pragma()
        ))
    }

    /// Borrow the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn fail(&self, err: rusqlite::Error) -> StoreError {
        let message = err.to_string();
        *self.last_error.borrow_mut() = message.clone();
        StoreError::Engine { message }
    }
}

fn owned_value(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(v) => SqlValue::Integer(v),
        ValueRef::Real(v) => SqlValue::Real(v),
        ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
    }
}

impl StorageEngine for SqliteEngine {
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<usize> {
        debug!("execute: {}", sql);
        let mut stmt = self.conn.prepare_cached(sql).map_err(|e| self.fail(e))?;
        stmt.execute(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| self.fail(e))
    }

    fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        debug!("query: {}", sql);
        let mut stmt = self.conn.prepare_cached(sql).map_err(|e| self.fail(e))?;
        let columns: Arc<Vec<String>> = Arc::new(
            stmt.column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
        let column_count = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| self.fail(e))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|e| self.fail(e))? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(owned_value(row.get_ref(i).map_err(|e| self.fail(e))?));
            }
            out.push(Row::new(Arc::clone(&columns), values));
        }
        Ok(out)
    }

    fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql).map_err(|e| self.fail(e))
    }

    fn begin_transaction(&self) -> Result<()> {
        self.execute_batch("BEGIN TRANSACTION")
    }

    fn commit(&self) -> Result<()> {
        self.execute_batch("COMMIT")
    }

    fn rollback(&self) -> Result<()> {
        self.execute_batch("ROLLBACK")
    }

    fn is_transaction_active(&self) -> bool {
        !self.conn.is_autocommit()
    }

    fn last_error(&self) -> String {
        self.last_error.borrow().clone()
    }

    fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
