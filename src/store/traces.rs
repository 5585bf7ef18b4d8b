//! API call traces, stack traces and marshalled call parameters.

use super::{ordered_range, qualified_columns, TraceStore};
use crate::engine::{u64_value, SqlValue, StorageEngine, MAX_ORDERED};
use crate::error::{Result, StoreError};
use crate::records::{ProfileTraceInfo, StackTraceInfo, StackTraceParameter};

const CATEGORY_CALLS: &str = "SELECT callName FROM call_categories WHERE category = ?1";
const API_CALLS: &str = "SELECT callName FROM call_categories WHERE apiName = ?1";
const CATEGORY_API_CALLS: &str =
    "SELECT callName FROM call_categories WHERE category = ?1 AND apiName = ?2";

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

impl<E: StorageEngine> TraceStore<E> {
    pub fn insert_profile_trace(&mut self, trace: &ProfileTraceInfo) -> Result<()> {
        self.insert(trace)
    }

    pub fn profile_traces(&self) -> Result<Vec<ProfileTraceInfo>> {
        self.get_all()
    }

    pub fn profile_traces_by_call_name(&self, call_name: &str) -> Result<Vec<ProfileTraceInfo>> {
        self.fetch_where("WHERE callName = ?1", &[text(call_name)])
    }

    pub fn profile_traces_by_api_id(&self, api_id: u64) -> Result<Vec<ProfileTraceInfo>> {
        self.fetch_where("WHERE apiId = ?1", &[u64_value(api_id)])
    }

    /// Traces whose call name is classified under `category` for any API.
    pub fn profile_traces_by_call_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProfileTraceInfo>> {
        self.fetch_where(
            &format!("WHERE callName IN ({CATEGORY_CALLS})"),
            &[text(category)],
        )
    }

    /// Traces whose call name belongs to `api_name` ("OpenGLES", "Vulkan", ...).
    pub fn profile_traces_by_api_name(&self, api_name: &str) -> Result<Vec<ProfileTraceInfo>> {
        self.fetch_where(
            &format!("WHERE callName IN ({API_CALLS})"),
            &[text(api_name)],
        )
    }

    pub fn profile_traces_by_call_category_and_api_name(
        &self,
        category: &str,
        api_name: &str,
    ) -> Result<Vec<ProfileTraceInfo>> {
        self.fetch_where(
            &format!("WHERE callName IN ({CATEGORY_API_CALLS})"),
            &[text(category), text(api_name)],
        )
    }

    /// Traces that lie entirely inside `[start, end]`, ordered by `cpuStart`.
    pub fn profile_traces_in_range(&self, start: u64, end: u64) -> Result<Vec<ProfileTraceInfo>> {
        let Some(bounds) = ordered_range("cpu time", start, end)? else {
            return Ok(Vec::new());
        };
        self.fetch_where("WHERE cpuStart >= ?1 AND cpuEnd <= ?2 ORDER BY cpuStart", &bounds)
    }

    /// Traces whose frame number lies in `[first, last]`.
    pub fn profile_traces_in_frame_range(
        &self,
        first: u64,
        last: u64,
    ) -> Result<Vec<ProfileTraceInfo>> {
        let Some(bounds) = ordered_range("frame", first, last)? else {
            return Ok(Vec::new());
        };
        self.fetch_where("WHERE frameNum BETWEEN ?1 AND ?2", &bounds)
    }

    /// For every frame with more than `threshold` calls in `category`, the
    /// earliest such call.
    pub fn profile_traces_by_call_category_above_threshold(
        &self,
        category: &str,
        threshold: u64,
    ) -> Result<Vec<ProfileTraceInfo>> {
        // SQLite takes bare columns from the row that supplied MIN().
        let sql = format!(
            "SELECT traceId, callName, MIN(cpuStart), cpuEnd, frameNum, drawNum, apiId, \
             parameterOffset, parameterLength FROM traces \
             WHERE callName IN ({CATEGORY_CALLS}) \
             GROUP BY frameNum HAVING COUNT(*) > ?2 ORDER BY frameNum"
        );
        // No frame holds more than MAX_ORDERED calls.
        self.fetch(&sql, &[text(category), u64_value(threshold.min(MAX_ORDERED))])
    }

    /// The trace in `frame` with the greatest `cpuEnd`.
    ///
    /// When several traces share that `cpuEnd`, which one is returned is
    /// unspecified.
    pub fn max_cpu_end_for_frame(&self, frame: u64) -> Result<ProfileTraceInfo> {
        self.fetch_one(
            "WHERE frameNum = ?1 ORDER BY cpuEnd DESC LIMIT 1",
            &[u64_value(frame)],
            || format!("traces for frame {frame}"),
        )
    }

    /// `(min cpuStart, max cpuEnd)` over the traces of `frame`.
    pub fn frame_time_range(&self, frame: u64) -> Result<(u64, u64)> {
        let rows = self.engine.query(
            "SELECT MIN(cpuStart), MAX(cpuEnd) FROM traces WHERE frameNum = ?1",
            &[u64_value(frame)],
        )?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::not_found(format!("traces for frame {frame}")))?;
        match (row.optional_i64(0)?, row.optional_i64(1)?) {
            (Some(start), Some(end)) => Ok((start as u64, end as u64)),
            _ => Err(StoreError::not_found(format!("traces for frame {frame}"))),
        }
    }

    /// Earliest `cpuStart` of any trace.
    pub fn first_trace_call_timestamp(&self) -> Result<u64> {
        self.scalar_u64("SELECT MIN(cpuStart) FROM traces", &[])?
            .ok_or_else(|| StoreError::not_found("any trace"))
    }

    /// Distinct frame numbers, ascending.
    pub fn unique_frame_numbers(&self) -> Result<Vec<u64>> {
        self.column_u64("SELECT DISTINCT frameNum FROM traces ORDER BY frameNum", &[])
    }

    pub fn insert_stack_trace(&mut self, stack: &StackTraceInfo) -> Result<()> {
        self.insert(stack)
    }

    pub fn stack_traces(&self) -> Result<Vec<StackTraceInfo>> {
        self.get_all()
    }

    pub fn insert_stack_trace_parameter(&mut self, parameter: &StackTraceParameter) -> Result<()> {
        self.insert(parameter)
    }

    pub fn stack_trace_parameters(&self) -> Result<Vec<StackTraceParameter>> {
        self.get_all()
    }

    pub fn stack_trace_parameters_for_draw(
        &self,
        frame: u64,
        draw: u64,
    ) -> Result<Vec<StackTraceParameter>> {
        self.fetch_where(
            "WHERE frameNum = ?1 AND drawNum = ?2",
            &[u64_value(frame), u64_value(draw)],
        )
    }

    /// Parameters recorded for draws that contain a call in `category`.
    pub fn stack_trace_parameters_by_call_category(
        &self,
        category: &str,
    ) -> Result<Vec<StackTraceParameter>> {
        self.parameters_for_calls(CATEGORY_CALLS, &[text(category)])
    }

    /// Parameters recorded for draws that contain a call of `api_name`.
    pub fn stack_trace_parameters_by_api_name(
        &self,
        api_name: &str,
    ) -> Result<Vec<StackTraceParameter>> {
        self.parameters_for_calls(API_CALLS, &[text(api_name)])
    }

    pub fn stack_trace_parameters_by_call_category_and_api_name(
        &self,
        category: &str,
        api_name: &str,
    ) -> Result<Vec<StackTraceParameter>> {
        self.parameters_for_calls(CATEGORY_API_CALLS, &[text(category), text(api_name)])
    }

    fn parameters_for_calls(
        &self,
        call_filter: &str,
        params: &[SqlValue],
    ) -> Result<Vec<StackTraceParameter>> {
        let sql = format!(
            "SELECT {} FROM trace_parameters p WHERE EXISTS (\
             SELECT 1 FROM traces t WHERE t.frameNum = p.frameNum AND t.drawNum = p.drawNum \
             AND t.callName IN ({call_filter}))",
            qualified_columns::<StackTraceParameter>("p")
        );
        self.fetch(&sql, params)
    }

    /// Number of distinct threads that recorded call parameters.
    pub fn thread_count_from_trace_parameters(&self) -> Result<u64> {
        Ok(self
            .scalar_u64("SELECT COUNT(DISTINCT threadId) FROM trace_parameters", &[])?
            .unwrap_or(0))
    }
}
