//! Counters, counter weights, samples and the aggregates derived from them.
//!
//! Samples and sample blobs live in separate tables and pair up by position:
//! the n-th sample inserted owns the n-th blob inserted. A sample without a blob
//! reads back with an empty one.

use super::{ordered_range, TraceStore};
use crate::engine::{u64_value, Row, SqlValue, StorageEngine, MAX_ORDERED};
use crate::error::{Result, StoreError};
use crate::records::{
    Counter, CounterSample, CounterWeight, PPSampleData, SampleBlob, SampledValue,
};
use crate::registry::CounterIndex;
use tracing::debug;

const SAMPLES_WITH_BLOBS: &str = "SELECT s.counterId, s.quantizedTimeMs, s.sampleValue, b.blob \
     FROM samples s LEFT JOIN samples_blobs b ON b.blobId = s.sampleId";

const COUNTER_IDS_FOR_NAME: &str = "SELECT counterId FROM counters WHERE counterName = ?1";

const COUNTER_IDS_FOR_CATEGORY: &str =
    "SELECT counterId FROM counter_categories WHERE category = ?1";

fn sample_from_row(row: &Row) -> Result<PPSampleData> {
    Ok(PPSampleData {
        counter_id: row.u64(0)?,
        quantized_time_ms: row.u64(1)?,
        sample_value: row.f64(2)?,
        blob: row.blob(3)?,
    })
}

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

impl<E: StorageEngine> TraceStore<E> {
    fn query_samples(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<PPSampleData>> {
        self.engine
            .query(sql, params)?
            .iter()
            .map(sample_from_row)
            .collect()
    }

    // ------------------------------------------------------------------
    // Counter registry
    // ------------------------------------------------------------------

    pub fn insert_counter(&mut self, counter: &Counter) -> Result<()> {
        self.insert(counter)
    }

    pub fn counters(&self) -> Result<Vec<Counter>> {
        self.get_all()
    }

    pub fn counter_id_by_name(&self, name: &str) -> Result<u64> {
        self.scalar_u64(COUNTER_IDS_FOR_NAME, &[text(name)])?
            .ok_or_else(|| StoreError::not_found(format!("counter named {name:?}")))
    }

    /// Snapshot of the counter registry for name lookups.
    pub fn counter_index(&self) -> Result<CounterIndex> {
        Ok(self.counters()?.into_iter().collect())
    }

    // ------------------------------------------------------------------
    // Weights
    // ------------------------------------------------------------------

    pub fn insert_counter_weight(&mut self, weight: &CounterWeight) -> Result<()> {
        self.insert(weight)
    }

    pub fn counter_weights(&self) -> Result<Vec<CounterWeight>> {
        self.get_all()
    }

    pub fn counter_weight_for(&self, counter_name: &str) -> Result<CounterWeight> {
        self.fetch_one("WHERE counterName = ?1", &[text(counter_name)], || {
            format!("weight for counter {counter_name:?}")
        })
    }

    /// Weight of `counter_name`, zero when none is stored.
    fn weight_or_zero(&self, counter_name: &str) -> Result<f64> {
        match self.counter_weight_for(counter_name) {
            Ok(weight) => Ok(weight.weight_value as f64),
            Err(StoreError::NotFound(_)) => {
                debug!("no weight for counter {:?}, using 0", counter_name);
                Ok(0.0)
            }
            Err(err) => Err(err),
        }
    }

    // ------------------------------------------------------------------
    // Samples
    // ------------------------------------------------------------------

    pub fn insert_counter_sample(&mut self, sample: &CounterSample) -> Result<()> {
        self.insert(sample)
    }

    /// Every sample with its blob, in insertion order.
    pub fn samples(&self) -> Result<Vec<PPSampleData>> {
        self.query_samples(&format!("{SAMPLES_WITH_BLOBS} ORDER BY s.sampleId"), &[])
    }

    pub fn samples_for_counter_name(&self, counter_name: &str) -> Result<Vec<PPSampleData>> {
        self.query_samples(
            &format!(
                "{SAMPLES_WITH_BLOBS} WHERE s.counterId IN ({COUNTER_IDS_FOR_NAME}) \
                 ORDER BY s.sampleId"
            ),
            &[text(counter_name)],
        )
    }

    /// Store sample blobs one by one, in order.
    ///
    /// Each insert is atomic on its own; wrap the call in a transaction for
    /// all-or-nothing behaviour.
    pub fn insert_counter_sample_blobs(&mut self, blobs: &[Vec<u8>]) -> Result<()> {
        for blob in blobs {
            self.engine.execute(
                "INSERT INTO samples_blobs (blob) VALUES (?1)",
                &[SqlValue::Blob(blob.clone())],
            )?;
        }
        debug!("stored {} sample blobs", blobs.len());
        Ok(())
    }

    pub fn sample_blobs(&self) -> Result<Vec<SampleBlob>> {
        self.fetch_where("ORDER BY blobId", &[])
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Sum of `value * weight` over the samples of `counter_name` with a
    /// quantized time in `[start, end]`.
    ///
    /// A counter without a stored weight sums to zero.
    pub fn weighted_sum(&self, counter_name: &str, start: u64, end: u64) -> Result<f32> {
        let Some([lower, upper]) = ordered_range("quantized time", start, end)? else {
            return Ok(0.0);
        };
        let weight = self.weight_or_zero(counter_name)?;
        let rows = self.engine.query(
            &format!(
                "SELECT TOTAL(sampleValue) FROM samples \
                 WHERE quantizedTimeMs BETWEEN ?2 AND ?3 AND counterId IN ({COUNTER_IDS_FOR_NAME})"
            ),
            &[text(counter_name), lower, upper],
        )?;
        let sum = match rows.first() {
            Some(row) => row.f64(0)?,
            None => 0.0,
        };
        Ok((sum * weight) as f32)
    }

    /// Samples of `counter_name` with `sample_value` multiplied by the counter's
    /// weight (zero when none is stored).
    pub fn weighted_samples(&self, counter_name: &str) -> Result<Vec<PPSampleData>> {
        let weight = self.weight_or_zero(counter_name)?;
        let mut samples = self.samples_for_counter_name(counter_name)?;
        for sample in &mut samples {
            sample.sample_value *= weight;
        }
        Ok(samples)
    }

    /// Mean sample value per `(counter, quantized time)` for the counters of
    /// `category`, over quantized times in `[start, end]`. Rows carry no blob.
    pub fn average_by_category_in_range(
        &self,
        category: &str,
        start: u64,
        end: u64,
    ) -> Result<Vec<PPSampleData>> {
        let Some([lower, upper]) = ordered_range("quantized time", start, end)? else {
            return Ok(Vec::new());
        };
        self.query_samples(
            &format!(
                "SELECT counterId, quantizedTimeMs, AVG(sampleValue), NULL FROM samples \
                 WHERE counterId IN ({COUNTER_IDS_FOR_CATEGORY}) \
                 AND quantizedTimeMs BETWEEN ?2 AND ?3 \
                 GROUP BY counterId, quantizedTimeMs \
                 ORDER BY quantizedTimeMs, counterId"
            ),
            &[text(category), lower, upper],
        )
    }

    /// Largest sample value per `(counter, quantized time)` for the counters of
    /// `category`, with the blob of the sample that held it.
    pub fn max_by_category(&self, category: &str) -> Result<Vec<PPSampleData>> {
        // SQLite takes the bare blob column from the row that supplied MAX().
        self.query_samples(
            &format!(
                "SELECT s.counterId, s.quantizedTimeMs, MAX(s.sampleValue), b.blob \
                 FROM samples s LEFT JOIN samples_blobs b ON b.blobId = s.sampleId \
                 WHERE s.counterId IN ({COUNTER_IDS_FOR_CATEGORY}) \
                 GROUP BY s.counterId, s.quantizedTimeMs \
                 ORDER BY s.quantizedTimeMs, s.counterId"
            ),
            &[text(category)],
        )
    }

    /// The sample of `counter_id` with the greatest time strictly before `time`.
    pub fn nearest_before(&self, time: u64, counter_id: u64) -> Result<SampledValue> {
        // Past MAX_ORDERED every stored time is earlier.
        let condition = if time > MAX_ORDERED {
            "quantizedTimeMs <= ?2 ORDER BY quantizedTimeMs DESC"
        } else {
            "quantizedTimeMs < ?2 ORDER BY quantizedTimeMs DESC"
        };
        self.nearest(condition, time, counter_id, "before")
    }

    /// The sample of `counter_id` with the least time strictly after `time`.
    pub fn nearest_after(&self, time: u64, counter_id: u64) -> Result<SampledValue> {
        if time >= MAX_ORDERED {
            return Err(StoreError::not_found(format!(
                "sample of counter {counter_id} after {time}"
            )));
        }
        self.nearest(
            "quantizedTimeMs > ?2 ORDER BY quantizedTimeMs ASC",
            time,
            counter_id,
            "after",
        )
    }

    fn nearest(
        &self,
        condition: &str,
        time: u64,
        counter_id: u64,
        side: &str,
    ) -> Result<SampledValue> {
        let rows = self.engine.query(
            &format!(
                "SELECT quantizedTimeMs, counterId, sampleValue FROM samples \
                 WHERE counterId = ?1 AND {condition} LIMIT 1"
            ),
            &[u64_value(counter_id), u64_value(time.min(MAX_ORDERED))],
        )?;
        let row = rows.first().ok_or_else(|| {
            StoreError::not_found(format!("sample of counter {counter_id} {side} {time}"))
        })?;
        Ok(SampledValue {
            time: row.u64(0)?,
            counter_id: row.u64(1)?,
            value: row.f64(2)?,
        })
    }

    /// Distinct quantized sample times, ascending, optionally limited to
    /// `[start, end]` and to the counters of a category.
    pub fn unique_quantized_times(
        &self,
        range: Option<(u64, u64)>,
        category: Option<&str>,
    ) -> Result<Vec<u64>> {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        if let Some((start, end)) = range {
            let Some(bounds) = ordered_range("quantized time", start, end)? else {
                return Ok(Vec::new());
            };
            params.extend(bounds);
            conditions.push(format!(
                "quantizedTimeMs BETWEEN ?{} AND ?{}",
                params.len() - 1,
                params.len()
            ));
        }
        if let Some(category) = category {
            params.push(text(category));
            conditions.push(format!(
                "counterId IN (SELECT counterId FROM counter_categories WHERE category = ?{})",
                params.len()
            ));
        }
        let filter = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        self.column_u64(
            &format!("SELECT DISTINCT quantizedTimeMs FROM samples {filter} ORDER BY quantizedTimeMs"),
            &params,
        )
    }

    /// Sampling frequency of `counter_id` in Hz.
    ///
    /// Computed from the mean spacing between consecutive quantized sample
    /// times (milliseconds). Needs at least two samples at distinct times.
    pub fn estimate_counter_frequency(&self, counter_id: u64) -> Result<f64> {
        let times = self.column_u64(
            "SELECT quantizedTimeMs FROM samples WHERE counterId = ?1 ORDER BY quantizedTimeMs",
            &[u64_value(counter_id)],
        )?;
        let (first, last) = match (times.iter().min(), times.iter().max()) {
            (Some(first), Some(last)) if times.len() >= 2 => (*first, *last),
            _ => {
                return Err(StoreError::not_found(format!(
                    "two samples of counter {counter_id}"
                )))
            }
        };
        let spacing_ms = (last - first) as f64 / (times.len() - 1) as f64;
        if spacing_ms <= 0.0 {
            return Err(StoreError::not_found(format!(
                "distinct sample times for counter {counter_id}"
            )));
        }
        Ok(1000.0 / spacing_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_store;
    use super::*;
    use crate::records::CounterCategory;

    fn counter(id: u64, name: &str) -> Counter {
        Counter {
            counter_id: id,
            counter_name: name.to_string(),
        }
    }

    fn sample(counter_id: u64, time: u64, value: f64) -> CounterSample {
        CounterSample {
            counter_id,
            quantized_time_ms: time,
            sample_value: value,
        }
    }

    fn store_with_samples(samples: &[CounterSample]) -> TraceStore {
        let mut store = create_test_store();
        for s in samples {
            store.insert_counter_sample(s).unwrap();
        }
        store
    }

    #[test]
    fn test_weighted_sum_example() {
        let mut store = store_with_samples(&[sample(1, 10, 5.0), sample(1, 20, 7.0)]);
        store.insert_counter(&counter(1, "FPS")).unwrap();
        store
            .insert_counter_weight(&CounterWeight {
                counter_name: "FPS".to_string(),
                weight_value: 2.0,
            })
            .unwrap();

        assert_eq!(store.weighted_sum("FPS", 0, 30).unwrap(), 24.0);
        // Inclusive bounds.
        assert_eq!(store.weighted_sum("FPS", 10, 20).unwrap(), 24.0);
        assert_eq!(store.weighted_sum("FPS", 11, 20).unwrap(), 14.0);
        assert!(matches!(
            store.weighted_sum("FPS", 30, 0),
            Err(StoreError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_open_ended_sample_queries() {
        let mut store = store_with_samples(&[sample(1, 10, 5.0), sample(1, MAX_ORDERED, 1.0)]);
        store.insert_counter(&counter(1, "FPS")).unwrap();
        store
            .insert_counter_weight(&CounterWeight {
                counter_name: "FPS".to_string(),
                weight_value: 2.0,
            })
            .unwrap();
        store
            .insert_counter_category(&CounterCategory {
                counter_id: 1,
                category: "FPS".to_string(),
            })
            .unwrap();

        assert_eq!(store.weighted_sum("FPS", 0, u64::MAX).unwrap(), 12.0);
        assert_eq!(store.weighted_sum("FPS", 0, MAX_ORDERED - 1).unwrap(), 10.0);
        assert_eq!(store.weighted_sum("FPS", u64::MAX, u64::MAX).unwrap(), 0.0);
        assert_eq!(
            store.average_by_category_in_range("FPS", 0, u64::MAX).unwrap().len(),
            2
        );
        assert_eq!(
            store.unique_quantized_times(Some((0, u64::MAX)), None).unwrap(),
            vec![10, MAX_ORDERED]
        );
        assert_eq!(store.nearest_before(u64::MAX, 1).unwrap().time, MAX_ORDERED);
        assert_eq!(store.nearest_before(MAX_ORDERED, 1).unwrap().time, 10);
        assert!(store.nearest_after(MAX_ORDERED, 1).unwrap_err().is_not_found());
        assert!(store.nearest_after(u64::MAX, 1).unwrap_err().is_not_found());
        assert!(store.estimate_counter_frequency(1).unwrap() > 0.0);

        assert!(matches!(
            store.insert_counter_sample(&sample(1, u64::MAX, 0.0)),
            Err(StoreError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_weighted_sum_without_weight_is_zero() {
        let mut store = store_with_samples(&[sample(1, 10, 5.0)]);
        store.insert_counter(&counter(1, "GPU Load")).unwrap();
        assert_eq!(store.weighted_sum("GPU Load", 0, 100).unwrap(), 0.0);
    }

    #[test]
    fn test_weighted_samples() {
        let mut store = store_with_samples(&[sample(2, 10, 1.5), sample(2, 20, 3.0)]);
        store.insert_counter(&counter(2, "Battery Power")).unwrap();
        store
            .insert_counter_weight(&CounterWeight {
                counter_name: "Battery Power".to_string(),
                weight_value: 4.0,
            })
            .unwrap();
        store
            .insert_counter_sample_blobs(&[vec![1], vec![2]])
            .unwrap();

        let weighted = store.weighted_samples("Battery Power").unwrap();
        let values: Vec<f64> = weighted.iter().map(|s| s.sample_value).collect();
        assert_eq!(values, vec![6.0, 12.0]);
        assert_eq!(weighted[1].blob, vec![2]);
    }

    #[test]
    fn test_samples_pair_with_blobs() {
        let mut store = store_with_samples(&[sample(1, 10, 1.0), sample(1, 20, 2.0)]);
        store
            .insert_counter_sample_blobs(&[vec![0xAB, 0xCD]])
            .unwrap();
        let samples = store.samples().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].blob, vec![0xAB, 0xCD]);
        assert!(samples[1].blob.is_empty());
        assert_eq!(store.sample_blobs().unwrap().len(), 1);
    }

    fn categorized_store() -> TraceStore {
        let mut store = store_with_samples(&[
            sample(1, 10, 2.0),
            sample(1, 10, 4.0),
            sample(1, 20, 6.0),
            sample(2, 10, 10.0),
            sample(3, 10, 99.0),
        ]);
        store
            .insert_counter_sample_blobs(&[vec![1], vec![2], vec![3], vec![4], vec![5]])
            .unwrap();
        for (id, category) in [(1, "CPU_LOAD"), (2, "CPU_LOAD"), (3, "GPU_LOAD")] {
            store
                .insert_counter_category(&CounterCategory {
                    counter_id: id,
                    category: category.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_average_by_category() {
        let store = categorized_store();
        let averaged = store.average_by_category_in_range("CPU_LOAD", 0, 15).unwrap();
        let rows: Vec<(u64, u64, f64)> = averaged
            .iter()
            .map(|s| (s.counter_id, s.quantized_time_ms, s.sample_value))
            .collect();
        assert_eq!(rows, vec![(1, 10, 3.0), (2, 10, 10.0)]);
        assert!(averaged.iter().all(|s| s.blob.is_empty()));

        let all = store.average_by_category_in_range("CPU_LOAD", 10, 20).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_max_by_category() {
        let store = categorized_store();
        let maxed = store.max_by_category("CPU_LOAD").unwrap();
        let first = maxed
            .iter()
            .find(|s| s.counter_id == 1 && s.quantized_time_ms == 10)
            .unwrap();
        assert_eq!(first.sample_value, 4.0);
        assert_eq!(first.blob, vec![2]);
        assert_eq!(maxed.len(), 3);
        assert!(store.max_by_category("FPS").unwrap().is_empty());
    }

    #[test]
    fn test_nearest_lookup_boundaries() {
        let store = store_with_samples(&[
            sample(3, 100, 1.0),
            sample(3, 200, 2.0),
            sample(3, 300, 3.0),
            sample(4, 150, 9.0),
        ]);
        assert_eq!(store.nearest_before(250, 3).unwrap().time, 200);
        assert_eq!(store.nearest_after(250, 3).unwrap().time, 300);
        assert_eq!(store.nearest_after(250, 3).unwrap().value, 3.0);
        assert!(store.nearest_before(50, 3).unwrap_err().is_not_found());
        assert!(store.nearest_after(300, 3).unwrap_err().is_not_found());
        // Strict on both sides.
        assert_eq!(store.nearest_before(200, 3).unwrap().time, 100);
        assert_eq!(store.nearest_after(200, 3).unwrap().time, 300);
    }

    #[test]
    fn test_unique_quantized_times() {
        let store = categorized_store();
        assert_eq!(store.unique_quantized_times(None, None).unwrap(), vec![10, 20]);
        assert_eq!(
            store.unique_quantized_times(Some((15, 25)), None).unwrap(),
            vec![20]
        );
        assert_eq!(
            store.unique_quantized_times(None, Some("GPU_LOAD")).unwrap(),
            vec![10]
        );
        assert_eq!(
            store
                .unique_quantized_times(Some((0, 20)), Some("CPU_LOAD"))
                .unwrap(),
            vec![10, 20]
        );
    }

    #[test]
    fn test_estimate_counter_frequency() {
        let fast = store_with_samples(&[sample(1, 0, 0.0), sample(1, 10, 0.0), sample(1, 20, 0.0)]);
        assert_eq!(fast.estimate_counter_frequency(1).unwrap(), 100.0);

        let slow = store_with_samples(&[sample(1, 0, 0.0), sample(1, 100, 0.0)]);
        assert_eq!(slow.estimate_counter_frequency(1).unwrap(), 10.0);

        let single = store_with_samples(&[sample(1, 0, 0.0)]);
        assert!(single.estimate_counter_frequency(1).unwrap_err().is_not_found());

        let stacked = store_with_samples(&[sample(1, 5, 0.0), sample(1, 5, 1.0)]);
        assert!(stacked.estimate_counter_frequency(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_counter_registry() {
        let mut store = create_test_store();
        store.insert_counter(&counter(7, "GPU Temperature")).unwrap();
        assert_eq!(store.counter_id_by_name("GPU Temperature").unwrap(), 7);
        assert!(store.counter_id_by_name("FPS").unwrap_err().is_not_found());

        use crate::registry::CounterRegistry;
        let index = store.counter_index().unwrap();
        assert_eq!(index.counter_id("GPU Temperature"), Some(7));
    }
}
