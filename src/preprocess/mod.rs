//! Category preprocessing.
//!
//! Rebuilds the call and counter classification tables from the static rules
//! in [`rules`]. Every insert is attempted even after a failure; the run fails
//! with `PartialBatchFailure` if any of them did.

pub mod rules;

use crate::engine::StorageEngine;
use crate::error::{BatchOutcome, Result, StoreError};
use crate::records::{CallCategory, CounterCategory};
use crate::registry::CounterRegistry;
use crate::store::TraceStore;
use rules::{CALL_RULES, COUNTER_RULES};
use serde::Serialize;
use tracing::{debug, info};

/// Row counts of a successful preprocessing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    pub call_rows: usize,
    pub counter_rows: usize,
    /// Counter names with no id in the registry.
    pub skipped_counters: usize,
}

pub struct CategoryPreprocessor<'a, E: StorageEngine> {
    store: &'a mut TraceStore<E>,
    registry: &'a dyn CounterRegistry,
}

impl<'a, E: StorageEngine> CategoryPreprocessor<'a, E> {
    /// # Arguments
    ///
    /// * `store` - Store whose category tables are rebuilt
    /// * `registry` - Resolves counter names to the ids used in this session
    pub fn new(store: &'a mut TraceStore<E>, registry: &'a dyn CounterRegistry) -> Self {
        Self { store, registry }
    }

    /// Replace both category tables with the static classification.
    ///
    /// Must be called with no transaction open.
    pub fn run(&mut self) -> Result<PreprocessReport> {
        // The resets run outside the batch transaction, so an open caller
        // transaction is refused before anything is deleted.
        if self.store.is_transaction_active() {
            return Err(StoreError::TransactionMisuse(
                "category preprocessing needs its own transaction".to_string(),
            ));
        }

        let mut outcome = BatchOutcome::new();
        let mut report = PreprocessReport::default();

        outcome.record("reset call categories", self.store.delete_call_categories());
        outcome.record(
            "reset counter categories",
            self.store.delete_counter_categories(),
        );

        self.store.begin_transaction()?;
        self.insert_call_categories(&mut outcome, &mut report);
        self.insert_counter_categories(&mut outcome, &mut report);
        outcome.record("commit categories", self.store.end_transaction());

        info!(
            "preprocessed categories: {} call rows, {} counter rows, {} counters not in session, {} failures",
            report.call_rows,
            report.counter_rows,
            report.skipped_counters,
            outcome.failed()
        );
        outcome.finish()?;
        Ok(report)
    }

    fn insert_call_categories(&mut self, outcome: &mut BatchOutcome, report: &mut PreprocessReport) {
        for rule in CALL_RULES {
            for call in rule.calls {
                let row = CallCategory {
                    call_name: call.to_string(),
                    category: rule.category.to_string(),
                    api_name: rule.api.to_string(),
                };
                let label = format!("classify {} call {} as {}", rule.api, call, rule.category);
                if outcome
                    .record(label, self.store.insert_call_category(&row))
                    .is_some()
                {
                    report.call_rows += 1;
                }
            }
        }
    }

    fn insert_counter_categories(
        &mut self,
        outcome: &mut BatchOutcome,
        report: &mut PreprocessReport,
    ) {
        for rule in COUNTER_RULES {
            for name in rule.counters {
                let Some(counter_id) = self.registry.counter_id(name) else {
                    debug!("counter {:?} not present, skipping", name);
                    report.skipped_counters += 1;
                    continue;
                };
                let row = CounterCategory {
                    counter_id,
                    category: rule.category.to_string(),
                };
                let label = format!("classify counter {name} as {}", rule.category);
                if outcome
                    .record(label, self.store.insert_counter_category(&row))
                    .is_some()
                {
                    report.counter_rows += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::rules::{category, counter_category};
    use super::*;
    use crate::registry::CounterIndex;
    use crate::store::test_support::{create_test_store, FaultyEngine};

    fn total_calls() -> usize {
        CALL_RULES.iter().map(|r| r.calls.len()).sum()
    }

    fn session_counters() -> CounterIndex {
        [("FPS", 1), ("GPU Load", 2), ("CPU Core 0 Load", 3), ("Vendor Specific", 4)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_run_classifies_calls_and_known_counters() {
        let mut store = create_test_store();
        let registry = session_counters();
        let report = CategoryPreprocessor::new(&mut store, &registry)
            .run()
            .unwrap();

        assert_eq!(report.call_rows, total_calls());
        assert_eq!(report.counter_rows, 3);
        let listed: usize = COUNTER_RULES.iter().map(|r| r.counters.len()).sum();
        assert_eq!(report.skipped_counters, listed - 3);

        let draws = store.call_names_by_category(category::DRAW).unwrap();
        assert!(draws.contains(&"glDrawArrays".to_string()));
        assert!(draws.contains(&"vkCmdDraw".to_string()));

        let categories = store.counter_categories().unwrap();
        assert_eq!(
            categories,
            vec![
                CounterCategory {
                    counter_id: 1,
                    category: counter_category::FPS.to_string(),
                },
                CounterCategory {
                    counter_id: 2,
                    category: counter_category::GPU_LOAD.to_string(),
                },
                CounterCategory {
                    counter_id: 3,
                    category: counter_category::CPU_LOAD.to_string(),
                },
            ]
        );
        assert!(!store.is_transaction_active());
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut store = create_test_store();
        let registry = session_counters();
        let first = CategoryPreprocessor::new(&mut store, &registry)
            .run()
            .unwrap();
        let rows_after_first = store.call_categories().unwrap().len();
        let second = CategoryPreprocessor::new(&mut store, &registry)
            .run()
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.call_categories().unwrap().len(), rows_after_first);
        assert_eq!(store.counter_categories().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_registry_skips_every_counter() {
        let mut store = create_test_store();
        let registry = CounterIndex::new();
        let report = CategoryPreprocessor::new(&mut store, &registry)
            .run()
            .unwrap();
        assert_eq!(report.counter_rows, 0);
        assert!(store.counter_categories().unwrap().is_empty());
    }

    #[test]
    fn test_failed_inserts_do_not_stop_the_batch() {
        let mut store = TraceStore::with_engine(FaultyEngine::new()).unwrap();
        store.engine().fail_on("glClear");
        let registry = session_counters();

        let err = CategoryPreprocessor::new(&mut store, &registry)
            .run()
            .unwrap_err();
        let expected_failures = CALL_RULES
            .iter()
            .filter(|r| r.calls.contains(&"glClear"))
            .count();
        match err {
            StoreError::PartialBatchFailure { failed, .. } => {
                assert_eq!(failed, expected_failures)
            }
            other => panic!("expected partial failure, got {other:?}"),
        }

        store.engine().clear_failures();
        assert_eq!(
            store.call_categories().unwrap().len(),
            total_calls() - expected_failures
        );
        assert_eq!(store.counter_categories().unwrap().len(), 3);
    }

    #[test]
    fn test_run_inside_open_transaction_is_misuse() {
        let mut store = create_test_store();
        store
            .insert_call_category(&CallCategory {
                call_name: "glFinish".to_string(),
                category: category::WAIT.to_string(),
                api_name: "OpenGL".to_string(),
            })
            .unwrap();
        store
            .insert_counter_category(&CounterCategory {
                counter_id: 1,
                category: counter_category::FPS.to_string(),
            })
            .unwrap();

        store.begin_transaction().unwrap();
        let registry = session_counters();
        assert!(matches!(
            CategoryPreprocessor::new(&mut store, &registry).run(),
            Err(StoreError::TransactionMisuse(_))
        ));
        assert!(store.is_transaction_active());
        store.end_transaction().unwrap();

        // The refused run left the existing classification alone.
        assert_eq!(store.call_categories().unwrap().len(), 1);
        assert_eq!(store.counter_categories().unwrap().len(), 1);
    }
}
