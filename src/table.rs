//! Mapping between record types and their tables.
//!
//! Each record type implements [`StoredRecord`], which names its table, lists its
//! columns in attribute order and converts between rows and statement parameters.
//! The generic fetch, insert and CSV export paths are all driven by this trait.

use crate::engine::{u64_value, Row, SqlValue, MAX_ORDERED};
use crate::error::{Result, StoreError};
use crate::records::*;

/// Storage class of a column, used to render exported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// u64 stored as its i64 bit pattern.
    Unsigned,
    Signed,
    Float32,
    Float64,
    Text,
    Blob,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column { name, kind }
}

use ColumnKind::{Blob, Float32, Float64, Signed, Text, Unsigned};

/// A record type persisted one row per value.
pub trait StoredRecord: Sized {
    const TABLE: &'static str;

    /// Columns in attribute order.
    const COLUMNS: &'static [Column];

    fn from_row(row: &Row) -> Result<Self>;

    /// Statement parameters in `COLUMNS` order.
    fn to_values(&self) -> Vec<SqlValue>;

    /// Check record invariants before the record reaches the engine.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn column_list() -> String {
        Self::COLUMNS
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", Self::column_list(), Self::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders: Vec<String> = (1..=Self::COLUMNS.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            Self::TABLE,
            Self::column_list(),
            placeholders.join(", ")
        )
    }
}

fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}

fn blob(b: &[u8]) -> SqlValue {
    SqlValue::Blob(b.to_vec())
}

fn real(v: f64) -> SqlValue {
    SqlValue::Real(v)
}

/// Reject time and frame fields the engine could not order correctly.
fn check_ordered(table: &str, fields: &[(&str, u64)]) -> Result<()> {
    match fields.iter().find(|(_, value)| *value > MAX_ORDERED) {
        Some((column, value)) => Err(StoreError::InvalidRecord(format!(
            "{table}.{column} value {value} is above {MAX_ORDERED}"
        ))),
        None => Ok(()),
    }
}

fn shader_api(row: &Row, idx: usize) -> Result<ShaderApi> {
    let id = row.u64(idx)?;
    ShaderApi::from_id(id).ok_or_else(|| StoreError::Decode {
        column: row.column_name(idx).to_string(),
        message: format!("unknown shader API id {id:#06x}"),
    })
}

impl StoredRecord for ProfileTraceInfo {
    const TABLE: &'static str = "traces";
    const COLUMNS: &'static [Column] = &[
        col("traceId", Unsigned),
        col("callName", Text),
        col("cpuStart", Unsigned),
        col("cpuEnd", Unsigned),
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("apiId", Unsigned),
        col("parameterOffset", Unsigned),
        col("parameterLength", Unsigned),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            trace_id: row.u64(0)?,
            call_name: row.string(1)?,
            cpu_start: row.u64(2)?,
            cpu_end: row.u64(3)?,
            frame_num: row.u64(4)?,
            draw_num: row.u64(5)?,
            api_id: row.u64(6)?,
            parameter_offset: row.u64(7)?,
            parameter_length: row.u64(8)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(
            Self::TABLE,
            &[
                ("cpuStart", self.cpu_start),
                ("cpuEnd", self.cpu_end),
                ("frameNum", self.frame_num),
            ],
        )
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.trace_id),
            text(&self.call_name),
            u64_value(self.cpu_start),
            u64_value(self.cpu_end),
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.api_id),
            u64_value(self.parameter_offset),
            u64_value(self.parameter_length),
        ]
    }
}

impl StoredRecord for Annotation {
    const TABLE: &'static str = "annotations";
    const COLUMNS: &'static [Column] = &[
        col("annotationId", Unsigned),
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("annotationType", Unsigned),
        col("cpuStartTime", Unsigned),
        col("cpuEndTime", Unsigned),
        col("text", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            annotation_id: row.optional_i64(0)?.map(|v| v as u64),
            frame_num: row.u64(1)?,
            draw_num: row.u64(2)?,
            annotation_type: row.u64(3)?,
            cpu_start_time: row.u64(4)?,
            cpu_end_time: row.u64(5)?,
            text: row.string(6)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(
            Self::TABLE,
            &[
                ("frameNum", self.frame_num),
                ("cpuStartTime", self.cpu_start_time),
                ("cpuEndTime", self.cpu_end_time),
            ],
        )
    }

    // A NULL id lets the engine assign the next rowid.
    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            self.annotation_id.map_or(SqlValue::Null, u64_value),
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.annotation_type),
            u64_value(self.cpu_start_time),
            u64_value(self.cpu_end_time),
            text(&self.text),
        ]
    }
}

impl StoredRecord for EstimatedPowerSample {
    const TABLE: &'static str = "estimated_power";
    const COLUMNS: &'static [Column] = &[
        col("sampleTime", Unsigned),
        col("estimatedPower", Float32),
        col("modelId", Unsigned),
        col("componentId", Unsigned),
        col("unit", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            sample_time: row.u64(0)?,
            estimated_power: row.f32(1)?,
            model_id: row.u64(2)?,
            component_id: row.u64(3)?,
            unit: row.string(4)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.sample_time),
            real(self.estimated_power as f64),
            u64_value(self.model_id),
            u64_value(self.component_id),
            text(&self.unit),
        ]
    }
}

impl StoredRecord for EstimatedPowerComponent {
    const TABLE: &'static str = "estimated_power_components";
    const COLUMNS: &'static [Column] = &[
        col("deviceId", Unsigned),
        col("componentId", Unsigned),
        col("componentName", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            device_id: row.u64(0)?,
            component_id: row.u64(1)?,
            component_name: row.string(2)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.device_id),
            u64_value(self.component_id),
            text(&self.component_name),
        ]
    }
}

impl StoredRecord for StackTraceInfo {
    const TABLE: &'static str = "stack_traces";
    const COLUMNS: &'static [Column] = &[
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("baseAddr", Unsigned),
        col("fileName", Text),
        col("symbolAddr", Unsigned),
        col("symbolName", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            frame_num: row.u64(0)?,
            draw_num: row.u64(1)?,
            base_addr: row.u64(2)?,
            file_name: row.string(3)?,
            symbol_addr: row.u64(4)?,
            symbol_name: row.string(5)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.base_addr),
            text(&self.file_name),
            u64_value(self.symbol_addr),
            text(&self.symbol_name),
        ]
    }
}

impl StoredRecord for StackTraceParameter {
    const TABLE: &'static str = "trace_parameters";
    const COLUMNS: &'static [Column] = &[
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("threadId", Unsigned),
        col("typeDefDescription", Text),
        col("binaryParams", Blob),
        col("paramsSize", Unsigned),
        col("binaryReturn", Blob),
        col("returnSize", Signed),
        col("error", Signed),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            frame_num: row.u64(0)?,
            draw_num: row.u64(1)?,
            thread_id: row.u64(2)?,
            type_def_description: row.string(3)?,
            binary_params: row.blob(4)?,
            params_size: row.u64(5)?,
            binary_return: row.blob(6)?,
            return_size: row.i32(7)?,
            error: row.i32(8)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.thread_id),
            text(&self.type_def_description),
            blob(&self.binary_params),
            u64_value(self.params_size),
            blob(&self.binary_return),
            SqlValue::Integer(self.return_size as i64),
            SqlValue::Integer(self.error as i64),
        ]
    }
}

impl StoredRecord for GpuTimer {
    const TABLE: &'static str = "gpu_timers";
    const COLUMNS: &'static [Column] = &[
        col("timerType", Unsigned),
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("time", Unsigned),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            timer_type: row.u64(0)?,
            frame_num: row.u64(1)?,
            draw_num: row.u64(2)?,
            time: row.u64(3)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(Self::TABLE, &[("frameNum", self.frame_num)])
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.timer_type),
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.time),
        ]
    }
}

impl StoredRecord for ShaderTrace {
    const TABLE: &'static str = "shaders";
    const COLUMNS: &'static [Column] = &[
        col("shaderId", Unsigned),
        col("apiId", Unsigned),
        col("frameNum", Unsigned),
        col("drawNum", Unsigned),
        col("shaderType", Unsigned),
        col("cpuTime", Unsigned),
        col("srcCode", Text),
        col("asmCode", Text),
        col("debug", Blob),
        col("binary", Blob),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            shader_id: row.u64(0)?,
            api: shader_api(row, 1)?,
            frame_num: row.u64(2)?,
            draw_num: row.u64(3)?,
            shader_type: row.u64(4)?,
            cpu_time: row.u64(5)?,
            src_code: row.string(6)?,
            asm_code: row.string(7)?,
            debug: row.blob(8)?,
            binary: row.blob(9)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(
            Self::TABLE,
            &[("frameNum", self.frame_num), ("cpuTime", self.cpu_time)],
        )
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.shader_id),
            u64_value(self.api.id()),
            u64_value(self.frame_num),
            u64_value(self.draw_num),
            u64_value(self.shader_type),
            u64_value(self.cpu_time),
            text(&self.src_code),
            text(&self.asm_code),
            blob(&self.debug),
            blob(&self.binary),
        ]
    }
}

impl StoredRecord for ShaderAsmStat {
    const TABLE: &'static str = "shader_asm_stats";
    const COLUMNS: &'static [Column] = &[
        col("shaderId", Unsigned),
        col("apiId", Unsigned),
        col("asmLine", Unsigned),
        col("percentage", Float32),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            shader_id: row.u64(0)?,
            api: shader_api(row, 1)?,
            asm_line: row.u64(2)?,
            percentage: row.f32(3)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.shader_id),
            u64_value(self.api.id()),
            u64_value(self.asm_line),
            real(self.percentage as f64),
        ]
    }
}

impl StoredRecord for ShaderToAsm {
    const TABLE: &'static str = "shader_to_asm";
    const COLUMNS: &'static [Column] = &[
        col("shaderId", Unsigned),
        col("apiId", Unsigned),
        col("shaderLine", Unsigned),
        col("asmStartLine", Unsigned),
        col("asmEndLine", Unsigned),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            shader_id: row.u64(0)?,
            api: shader_api(row, 1)?,
            shader_line: row.u64(2)?,
            asm_start_line: row.u64(3)?,
            asm_end_line: row.u64(4)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.shader_id),
            u64_value(self.api.id()),
            u64_value(self.shader_line),
            u64_value(self.asm_start_line),
            u64_value(self.asm_end_line),
        ]
    }
}

impl StoredRecord for CounterWeight {
    const TABLE: &'static str = "counter_weights";
    const COLUMNS: &'static [Column] = &[col("counterName", Text), col("weightValue", Float32)];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            counter_name: row.string(0)?,
            weight_value: row.f32(1)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![text(&self.counter_name), real(self.weight_value as f64)]
    }
}

impl StoredRecord for Counter {
    const TABLE: &'static str = "counters";
    const COLUMNS: &'static [Column] = &[col("counterId", Unsigned), col("counterName", Text)];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            counter_id: row.u64(0)?,
            counter_name: row.string(1)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![u64_value(self.counter_id), text(&self.counter_name)]
    }
}

impl StoredRecord for CounterSample {
    const TABLE: &'static str = "samples";
    const COLUMNS: &'static [Column] = &[
        col("counterId", Unsigned),
        col("quantizedTimeMs", Unsigned),
        col("sampleValue", Float64),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            counter_id: row.u64(0)?,
            quantized_time_ms: row.u64(1)?,
            sample_value: row.f64(2)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(Self::TABLE, &[("quantizedTimeMs", self.quantized_time_ms)])
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.counter_id),
            u64_value(self.quantized_time_ms),
            real(self.sample_value),
        ]
    }
}

impl StoredRecord for SampleBlob {
    const TABLE: &'static str = "samples_blobs";
    const COLUMNS: &'static [Column] = &[col("blobId", Unsigned), col("blob", Blob)];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            blob_id: row.u64(0)?,
            blob: row.blob(1)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![u64_value(self.blob_id), blob(&self.blob)]
    }
}

impl StoredRecord for RegionOfInterest {
    const TABLE: &'static str = "regions_of_interest";
    const COLUMNS: &'static [Column] = &[
        col("regionId", Unsigned),
        col("frameStart", Unsigned),
        col("frameEnd", Unsigned),
        col("degreeOfInterest", Float32),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            region_id: row.u64(0)?,
            frame_start: row.u64(1)?,
            frame_end: row.u64(2)?,
            degree_of_interest: row.f32(3)?,
        })
    }

    fn validate(&self) -> Result<()> {
        check_ordered(
            Self::TABLE,
            &[("frameStart", self.frame_start), ("frameEnd", self.frame_end)],
        )?;
        if self.frame_end < self.frame_start {
            return Err(StoreError::invalid_range(
                "region frame",
                self.frame_start,
                self.frame_end,
            ));
        }
        if !(0.0..=1.0).contains(&self.degree_of_interest) {
            return Err(StoreError::InvalidRecord(format!(
                "region {} degree of interest {} is outside [0, 1]",
                self.region_id, self.degree_of_interest
            )));
        }
        Ok(())
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.region_id),
            u64_value(self.frame_start),
            u64_value(self.frame_end),
            real(self.degree_of_interest as f64),
        ]
    }
}

impl StoredRecord for CallSummary {
    const TABLE: &'static str = "call_summaries";
    const COLUMNS: &'static [Column] = &[
        col("regionId", Unsigned),
        col("callName", Text),
        col("timesCalled", Unsigned),
        col("totalTime", Unsigned),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            region_id: row.u64(0)?,
            call_name: row.string(1)?,
            times_called: row.u64(2)?,
            total_time: row.u64(3)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.region_id),
            text(&self.call_name),
            u64_value(self.times_called),
            u64_value(self.total_time),
        ]
    }
}

impl StoredRecord for CallsPerType {
    const TABLE: &'static str = "calls_per_type";
    const COLUMNS: &'static [Column] = &[
        col("regionId", Unsigned),
        col("drawPercentage", Float32),
        col("bindPercentage", Float32),
        col("setupPercentage", Float32),
        col("waitPercentage", Float32),
        col("errorPercentage", Float32),
        col("delimiterPercentage", Float32),
        col("otherPercentage", Float32),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            region_id: row.u64(0)?,
            draw_percentage: row.f32(1)?,
            bind_percentage: row.f32(2)?,
            setup_percentage: row.f32(3)?,
            wait_percentage: row.f32(4)?,
            error_percentage: row.f32(5)?,
            delimiter_percentage: row.f32(6)?,
            other_percentage: row.f32(7)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            u64_value(self.region_id),
            real(self.draw_percentage as f64),
            real(self.bind_percentage as f64),
            real(self.setup_percentage as f64),
            real(self.wait_percentage as f64),
            real(self.error_percentage as f64),
            real(self.delimiter_percentage as f64),
            real(self.other_percentage as f64),
        ]
    }
}

impl StoredRecord for CallCategory {
    const TABLE: &'static str = "call_categories";
    const COLUMNS: &'static [Column] = &[
        col("callName", Text),
        col("category", Text),
        col("apiName", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            call_name: row.string(0)?,
            category: row.string(1)?,
            api_name: row.string(2)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            text(&self.call_name),
            text(&self.category),
            text(&self.api_name),
        ]
    }
}

impl StoredRecord for CounterCategory {
    const TABLE: &'static str = "counter_categories";
    const COLUMNS: &'static [Column] = &[col("counterId", Unsigned), col("category", Text)];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            counter_id: row.u64(0)?,
            category: row.string(1)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![u64_value(self.counter_id), text(&self.category)]
    }
}

impl StoredRecord for Device {
    const TABLE: &'static str = "devices";
    const COLUMNS: &'static [Column] = &[
        col("deviceId", Unsigned),
        col("deviceTypeId", Unsigned),
        col("deviceName", Text),
        col("deviceDescription", Text),
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            device_id: row.u32(0)?,
            device_type_id: row.u32(1)?,
            device_name: row.string(2)?,
            device_description: row.string(3)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.device_id as i64),
            SqlValue::Integer(self.device_type_id as i64),
            text(&self.device_name),
            text(&self.device_description),
        ]
    }
}

impl StoredRecord for SessionEntry {
    const TABLE: &'static str = "session_info";
    const COLUMNS: &'static [Column] = &[col("key", Text), col("value", Text)];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            key: row.string(0)?,
            value: row.string(1)?,
        })
    }

    fn to_values(&self) -> Vec<SqlValue> {
        vec![text(&self.key), text(&self.value)]
    }
}
