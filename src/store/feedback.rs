//! Feedback data: regions of interest, per-region summaries and the call and
//! counter classification tables.

use super::TraceStore;
use crate::engine::{u64_value, SqlValue, StorageEngine};
use crate::error::{BatchOutcome, Result};
use crate::records::{
    CallCategory, CallSummary, CallsPerType, CounterCategory, RegionOfInterest,
};
use crate::table::StoredRecord;
use tracing::info;

/// Tables cleared by [`TraceStore::delete_feedback_data`]. Summaries go with
/// their regions.
pub const FEEDBACK_TABLES: &[&str] = &[
    RegionOfInterest::TABLE,
    CallSummary::TABLE,
    CallsPerType::TABLE,
    "annotations",
];

impl<E: StorageEngine> TraceStore<E> {
    /// Store a region after checking its frame range and degree of interest.
    pub fn insert_region_of_interest(&mut self, region: &RegionOfInterest) -> Result<()> {
        self.insert(region)
    }

    pub fn regions_of_interest(&self) -> Result<Vec<RegionOfInterest>> {
        self.fetch_where("ORDER BY regionId", &[])
    }

    pub fn region_of_interest(&self, region_id: u64) -> Result<RegionOfInterest> {
        self.fetch_one("WHERE regionId = ?1", &[u64_value(region_id)], || {
            format!("region of interest {region_id}")
        })
    }

    /// Store a call summary. The region must already exist.
    pub fn insert_call_summary(&mut self, summary: &CallSummary) -> Result<()> {
        self.insert(summary)
    }

    pub fn call_summaries(&self) -> Result<Vec<CallSummary>> {
        self.get_all()
    }

    pub fn call_summaries_for_region(&self, region_id: u64) -> Result<Vec<CallSummary>> {
        self.fetch_where(
            "WHERE regionId = ?1 ORDER BY callName",
            &[u64_value(region_id)],
        )
    }

    /// Total time over every call summary, 0 when there are none.
    pub fn accumulated_call_summary_time(&self) -> Result<u64> {
        Ok(self
            .scalar_u64("SELECT SUM(totalTime) FROM call_summaries", &[])?
            .unwrap_or(0))
    }

    /// Store the call-type split of a region. The region must already exist.
    pub fn insert_calls_per_type(&mut self, split: &CallsPerType) -> Result<()> {
        self.insert(split)
    }

    pub fn calls_per_type(&self) -> Result<Vec<CallsPerType>> {
        self.get_all()
    }

    pub fn calls_per_type_for_region(&self, region_id: u64) -> Result<CallsPerType> {
        self.fetch_one("WHERE regionId = ?1", &[u64_value(region_id)], || {
            format!("calls per type for region {region_id}")
        })
    }

    pub fn insert_call_category(&mut self, category: &CallCategory) -> Result<()> {
        self.insert(category)
    }

    pub fn call_categories(&self) -> Result<Vec<CallCategory>> {
        self.get_all()
    }

    /// Distinct call names classified under `category`, sorted.
    pub fn call_names_by_category(&self, category: &str) -> Result<Vec<String>> {
        self.engine
            .query(
                "SELECT DISTINCT callName FROM call_categories \
                 WHERE category = ?1 ORDER BY callName",
                &[SqlValue::Text(category.to_string())],
            )?
            .iter()
            .map(|row| row.string(0))
            .collect()
    }

    pub fn insert_counter_category(&mut self, category: &CounterCategory) -> Result<()> {
        self.insert(category)
    }

    pub fn counter_categories(&self) -> Result<Vec<CounterCategory>> {
        self.fetch_where("ORDER BY counterId", &[])
    }

    /// Remove every region along with its summaries.
    pub fn delete_regions_of_interest(&mut self) -> Result<()> {
        self.delete_all::<RegionOfInterest>()?;
        Ok(())
    }

    pub fn delete_call_categories(&mut self) -> Result<()> {
        self.delete_all::<CallCategory>()?;
        Ok(())
    }

    pub fn delete_counter_categories(&mut self) -> Result<()> {
        self.delete_all::<CounterCategory>()?;
        Ok(())
    }

    /// Delete regions of interest and annotations.
    ///
    /// Both deletes are attempted. If one fails the other is not undone and a
    /// `PartialBatchFailure` is returned.
    pub fn delete_feedback_data(&mut self) -> Result<()> {
        let mut outcome = BatchOutcome::new();
        outcome.record("delete regions of interest", self.delete_regions_of_interest());
        outcome.record("delete annotations", self.delete_annotations());
        info!(
            "feedback data reset: {} of {} deletes failed",
            outcome.failed(),
            outcome.attempted()
        );
        outcome.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{create_test_store, FaultyEngine};
    use super::*;
    use crate::error::StoreError;
    use crate::records::Annotation;

    fn region(id: u64, start: u64, end: u64) -> RegionOfInterest {
        RegionOfInterest {
            region_id: id,
            frame_start: start,
            frame_end: end,
            degree_of_interest: 0.5,
        }
    }

    fn summary(region_id: u64, call: &str, total_time: u64) -> CallSummary {
        CallSummary {
            region_id,
            call_name: call.to_string(),
            times_called: 3,
            total_time,
        }
    }

    #[test]
    fn test_region_validation() {
        let mut store = create_test_store();
        assert!(matches!(
            store.insert_region_of_interest(&region(1, 10, 9)),
            Err(StoreError::InvalidRange { .. })
        ));
        let mut hot = region(2, 1, 2);
        hot.degree_of_interest = 1.5;
        assert!(matches!(
            store.insert_region_of_interest(&hot),
            Err(StoreError::InvalidRecord(_))
        ));
        // Open-ended regions are refused before they reach the engine.
        assert!(matches!(
            store.insert_region_of_interest(&region(4, 0, u64::MAX)),
            Err(StoreError::InvalidRecord(_))
        ));
        store.insert_region_of_interest(&region(3, 4, 4)).unwrap();
        assert_eq!(store.regions_of_interest().unwrap(), vec![region(3, 4, 4)]);
        assert!(store.region_of_interest(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_region_foreign_key_discipline() {
        let mut store = create_test_store();
        assert!(matches!(
            store.insert_call_summary(&summary(7, "glDrawArrays", 10)),
            Err(StoreError::Engine { .. })
        ));
        assert!(store
            .insert_calls_per_type(&CallsPerType {
                region_id: 7,
                ..Default::default()
            })
            .is_err());

        store.insert_region_of_interest(&region(7, 1, 5)).unwrap();
        store
            .insert_call_summary(&summary(7, "glDrawArrays", 10))
            .unwrap();
        store
            .insert_calls_per_type(&CallsPerType {
                region_id: 7,
                draw_percentage: 0.6,
                bind_percentage: 0.6,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.call_summaries_for_region(7).unwrap().len(), 1);
        assert_eq!(
            store.calls_per_type_for_region(7).unwrap().draw_percentage,
            0.6
        );
        assert!(store.calls_per_type_for_region(8).unwrap_err().is_not_found());
    }

    #[test]
    fn test_accumulated_call_summary_time() {
        let mut store = create_test_store();
        assert_eq!(store.accumulated_call_summary_time().unwrap(), 0);
        store.insert_region_of_interest(&region(1, 1, 5)).unwrap();
        store.insert_call_summary(&summary(1, "glClear", 40)).unwrap();
        store.insert_call_summary(&summary(1, "glFlush", 2)).unwrap();
        assert_eq!(store.accumulated_call_summary_time().unwrap(), 42);
        assert_eq!(store.call_summaries().unwrap().len(), 2);
    }

    #[test]
    fn test_call_names_by_category() {
        let mut store = create_test_store();
        for (call, category, api) in [
            ("vkCmdDraw", "Draw", "Vulkan"),
            ("glDrawArrays", "Draw", "OpenGLES"),
            ("glDrawArrays", "Draw", "OpenGL"),
            ("glBindBuffer", "Bind", "OpenGL"),
        ] {
            store
                .insert_call_category(&CallCategory {
                    call_name: call.to_string(),
                    category: category.to_string(),
                    api_name: api.to_string(),
                })
                .unwrap();
        }
        assert_eq!(
            store.call_names_by_category("Draw").unwrap(),
            vec!["glDrawArrays".to_string(), "vkCmdDraw".to_string()]
        );
        store.delete_call_categories().unwrap();
        assert!(store.call_categories().unwrap().is_empty());
    }

    #[test]
    fn test_counter_category_is_unique_per_counter() {
        let mut store = create_test_store();
        let fps = CounterCategory {
            counter_id: 4,
            category: "FPS".to_string(),
        };
        store.insert_counter_category(&fps).unwrap();
        assert!(store
            .insert_counter_category(&CounterCategory {
                counter_id: 4,
                category: "GPU_LOAD".to_string(),
            })
            .is_err());
        assert_eq!(store.counter_categories().unwrap(), vec![fps]);
        store.delete_counter_categories().unwrap();
        assert!(store.counter_categories().unwrap().is_empty());
    }

    fn seed_feedback<E: StorageEngine>(store: &mut TraceStore<E>) {
        store.insert_region_of_interest(&region(1, 1, 5)).unwrap();
        store.insert_call_summary(&summary(1, "glClear", 40)).unwrap();
        store
            .insert_annotation(&Annotation {
                annotation_type: 1,
                text: "slow frame".to_string(),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn test_delete_feedback_data() {
        let mut store = create_test_store();
        seed_feedback(&mut store);
        store.delete_feedback_data().unwrap();
        assert!(store.regions_of_interest().unwrap().is_empty());
        assert!(store.call_summaries().unwrap().is_empty());
        assert!(store.annotations().unwrap().is_empty());
        // Idempotent on an empty store.
        store.delete_feedback_data().unwrap();
    }

    #[test]
    fn test_delete_feedback_data_keeps_partial_progress() {
        let mut store = TraceStore::with_engine(FaultyEngine::new()).unwrap();
        seed_feedback(&mut store);

        store.engine().fail_on("DELETE FROM annotations");
        match store.delete_feedback_data() {
            Err(StoreError::PartialBatchFailure {
                failed, attempted, ..
            }) => {
                assert_eq!(failed, 1);
                assert_eq!(attempted, 2);
            }
            other => panic!("expected partial failure, got {other:?}"),
        }
        store.engine().clear_failures();

        assert!(store.regions_of_interest().unwrap().is_empty());
        assert_eq!(store.annotations().unwrap().len(), 1);
        assert_eq!(store.engine().rollbacks(), 0);
    }
}
