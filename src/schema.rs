//! SQL schema for profiling session databases
//!
//! One table per record type. Column names are the record attribute names, which
//! are also used verbatim as CSV export headers. Unsigned 64-bit values are stored
//! in INTEGER columns as their two's-complement bit pattern.

use crate::engine::StorageEngine;
use crate::error::Result;

pub const SCHEMA_VERSION: i32 = 1;

/// SQL schema for profiling session databases
pub const SCHEMA_SQL: &str = r#"
-- Enable foreign key constraints
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Schema Version Tracking
-- ============================================================================

CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    description TEXT
);

INSERT OR IGNORE INTO schema_version (version, description)
VALUES (1, 'Initial schema');

-- ============================================================================
-- API Call Traces
-- ============================================================================

CREATE TABLE IF NOT EXISTS traces (
    traceId INTEGER NOT NULL,
    callName TEXT NOT NULL,
    cpuStart INTEGER NOT NULL,
    cpuEnd INTEGER NOT NULL,
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    apiId INTEGER NOT NULL,
    parameterOffset INTEGER NOT NULL,
    parameterLength INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_traces_frame ON traces(frameNum);
CREATE INDEX IF NOT EXISTS idx_traces_cpu_start ON traces(cpuStart);
CREATE INDEX IF NOT EXISTS idx_traces_call_name ON traces(callName);

CREATE TABLE IF NOT EXISTS stack_traces (
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    baseAddr INTEGER NOT NULL,
    fileName TEXT NOT NULL,
    symbolAddr INTEGER NOT NULL,
    symbolName TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS trace_parameters (
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    threadId INTEGER NOT NULL,
    typeDefDescription TEXT NOT NULL,
    binaryParams BLOB,
    paramsSize INTEGER NOT NULL,
    binaryReturn BLOB,
    returnSize INTEGER NOT NULL,
    error INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_trace_parameters_draw ON trace_parameters(frameNum, drawNum);

-- ============================================================================
-- Annotations and GPU Timing
-- ============================================================================

CREATE TABLE IF NOT EXISTS annotations (
    annotationId INTEGER PRIMARY KEY,
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    annotationType INTEGER NOT NULL,
    cpuStartTime INTEGER NOT NULL,
    cpuEndTime INTEGER NOT NULL,
    text TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS gpu_timers (
    timerType INTEGER NOT NULL,
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    time INTEGER NOT NULL
);

-- ============================================================================
-- Power Estimation
-- ============================================================================

CREATE TABLE IF NOT EXISTS estimated_power (
    sampleTime INTEGER NOT NULL,
    estimatedPower REAL NOT NULL,
    modelId INTEGER NOT NULL,
    componentId INTEGER NOT NULL,
    unit TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS estimated_power_components (
    deviceId INTEGER NOT NULL,
    componentId INTEGER NOT NULL,
    componentName TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS devices (
    deviceId INTEGER PRIMARY KEY,
    deviceTypeId INTEGER NOT NULL,
    deviceName TEXT NOT NULL,
    deviceDescription TEXT NOT NULL
);

-- ============================================================================
-- Shaders
-- ============================================================================

CREATE TABLE IF NOT EXISTS shaders (
    shaderId INTEGER NOT NULL,
    apiId INTEGER NOT NULL,
    frameNum INTEGER NOT NULL,
    drawNum INTEGER NOT NULL,
    shaderType INTEGER NOT NULL,
    cpuTime INTEGER NOT NULL,
    srcCode TEXT NOT NULL,
    asmCode TEXT NOT NULL,
    debug BLOB,
    binary BLOB,
    PRIMARY KEY (shaderId, apiId)
);

CREATE TABLE IF NOT EXISTS shader_asm_stats (
    shaderId INTEGER NOT NULL,
    apiId INTEGER NOT NULL,
    asmLine INTEGER NOT NULL,
    percentage REAL NOT NULL,
    FOREIGN KEY (shaderId, apiId) REFERENCES shaders(shaderId, apiId) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_shader_asm_stats_shader ON shader_asm_stats(shaderId, apiId);

CREATE TABLE IF NOT EXISTS shader_to_asm (
    shaderId INTEGER NOT NULL,
    apiId INTEGER NOT NULL,
    shaderLine INTEGER NOT NULL,
    asmStartLine INTEGER NOT NULL,
    asmEndLine INTEGER NOT NULL,
    FOREIGN KEY (shaderId, apiId) REFERENCES shaders(shaderId, apiId) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_shader_to_asm_shader ON shader_to_asm(shaderId, apiId);

-- ============================================================================
-- Counters and Samples
-- ============================================================================

CREATE TABLE IF NOT EXISTS counters (
    counterId INTEGER PRIMARY KEY,
    counterName TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_counters_name ON counters(counterName);

CREATE TABLE IF NOT EXISTS counter_weights (
    counterName TEXT PRIMARY KEY,
    weightValue REAL NOT NULL
);

-- Samples pair 1:1 with samples_blobs by sampleId = blobId (insertion order)
CREATE TABLE IF NOT EXISTS samples (
    sampleId INTEGER PRIMARY KEY,
    counterId INTEGER NOT NULL,
    quantizedTimeMs INTEGER NOT NULL,
    sampleValue REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_samples_counter_time ON samples(counterId, quantizedTimeMs);

CREATE TABLE IF NOT EXISTS samples_blobs (
    blobId INTEGER PRIMARY KEY,
    blob BLOB
);

-- ============================================================================
-- Feedback Data
-- ============================================================================

CREATE TABLE IF NOT EXISTS regions_of_interest (
    regionId INTEGER PRIMARY KEY,
    frameStart INTEGER NOT NULL,
    frameEnd INTEGER NOT NULL,
    degreeOfInterest REAL NOT NULL,
    CHECK (frameEnd >= frameStart)
);

CREATE TABLE IF NOT EXISTS call_summaries (
    regionId INTEGER NOT NULL,
    callName TEXT NOT NULL,
    timesCalled INTEGER NOT NULL,
    totalTime INTEGER NOT NULL,
    PRIMARY KEY (regionId, callName),
    FOREIGN KEY (regionId) REFERENCES regions_of_interest(regionId) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS calls_per_type (
    regionId INTEGER PRIMARY KEY,
    drawPercentage REAL NOT NULL,
    bindPercentage REAL NOT NULL,
    setupPercentage REAL NOT NULL,
    waitPercentage REAL NOT NULL,
    errorPercentage REAL NOT NULL,
    delimiterPercentage REAL NOT NULL,
    otherPercentage REAL NOT NULL,
    FOREIGN KEY (regionId) REFERENCES regions_of_interest(regionId) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS call_categories (
    callId INTEGER PRIMARY KEY AUTOINCREMENT,
    callName TEXT NOT NULL,
    category TEXT NOT NULL,
    apiName TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_call_categories_category ON call_categories(category, apiName);

CREATE TABLE IF NOT EXISTS counter_categories (
    counterId INTEGER PRIMARY KEY,
    category TEXT NOT NULL
);

-- ============================================================================
-- Session Metadata
-- ============================================================================

CREATE TABLE IF NOT EXISTS session_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Every table created by [`SCHEMA_SQL`], excluding `schema_version`.
pub const TABLES: &[&str] = &[
    "traces",
    "stack_traces",
    "trace_parameters",
    "annotations",
    "gpu_timers",
    "estimated_power",
    "estimated_power_components",
    "devices",
    "shaders",
    "shader_asm_stats",
    "shader_to_asm",
    "counters",
    "counter_weights",
    "samples",
    "samples_blobs",
    "regions_of_interest",
    "call_summaries",
    "calls_per_type",
    "call_categories",
    "counter_categories",
    "session_info",
];

/// Creates the complete schema through the provided engine
///
/// Safe to call on a database that already holds the schema.
///
/// # Arguments
/// * `engine` - Storage engine to create the schema in
///
/// # Returns
/// * `Ok(())` on success
/// * `Err` if schema creation fails
pub fn create_schema<E: StorageEngine + ?Sized>(engine: &E) -> Result<()> {
    engine.execute_batch(SCHEMA_SQL)
}
