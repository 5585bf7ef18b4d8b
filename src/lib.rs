//! Profstore library - embedded storage for GPU/CPU profiling sessions.
//!
//! A session database holds intercepted API calls, shader snapshots, counter
//! samples, annotations and the feedback data derived from them. The library
//! is used by the `profstore` binary and by capture and analysis tools.
//!
//! # Modules
//!
//! - [`store`] - [`TraceStore`], the persistence and query layer
//! - [`engine`] - The storage engine boundary and its SQLite implementation
//! - [`records`] - Record types stored in a session
//! - [`preprocess`] - Call and counter category classification
//! - [`export`] - CSV export, one file per table
//! - [`config`] - Connection settings loaded from TOML
//!
//! # Example
//!
//! ```no_run
//! use profstore::{CategoryPreprocessor, StoreConfig, TraceStore};
//! use std::path::Path;
//!
//! let mut store = TraceStore::open(Path::new("./session.db"), &StoreConfig::default())
//!     .expect("Failed to open session");
//! let counters = store.counter_index().expect("Failed to read counters");
//! CategoryPreprocessor::new(&mut store, &counters)
//!     .run()
//!     .expect("Failed to classify calls");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod preprocess;
pub mod records;
pub mod registry;
pub mod schema;
pub mod store;
pub mod table;

pub use config::StoreConfig;
pub use engine::{SqliteEngine, StorageEngine};
pub use error::{Result, StoreError};
pub use export::{export_to_csv, ExportOptions};
pub use preprocess::{CategoryPreprocessor, PreprocessReport};
pub use registry::{CounterIndex, CounterRegistry};
pub use store::{SessionKey, TraceStore};
