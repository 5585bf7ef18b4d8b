//! CSV export, one file per table.
//!
//! Columns follow the record attribute order and the header row carries the
//! attribute names. Numbers are written in Rust's locale-independent shortest
//! form and blobs as lower-case hex.

use crate::engine::{SqlValue, StorageEngine};
use crate::error::{Result, StoreError};
use crate::records::*;
use crate::store::TraceStore;
use crate::table::{Column, ColumnKind, StoredRecord};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Prepended to every file name.
    pub prefix: String,
    /// Replace files that already exist instead of failing.
    pub overwrite: bool,
}

/// One written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedTable {
    pub table: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

struct TableExport {
    table: &'static str,
    columns: &'static [Column],
    select: String,
}

fn table_export<T: StoredRecord>() -> TableExport {
    TableExport {
        table: T::TABLE,
        columns: T::COLUMNS,
        select: T::select_sql(),
    }
}

fn exported_tables() -> Vec<TableExport> {
    vec![
        table_export::<ProfileTraceInfo>(),
        table_export::<Annotation>(),
        table_export::<EstimatedPowerSample>(),
        table_export::<EstimatedPowerComponent>(),
        table_export::<GpuTimer>(),
        table_export::<StackTraceInfo>(),
        table_export::<StackTraceParameter>(),
        table_export::<ShaderTrace>(),
        table_export::<ShaderAsmStat>(),
        table_export::<ShaderToAsm>(),
        table_export::<CounterWeight>(),
        table_export::<Counter>(),
        table_export::<CounterSample>(),
        table_export::<SampleBlob>(),
        table_export::<RegionOfInterest>(),
        table_export::<CallSummary>(),
        table_export::<CallsPerType>(),
        table_export::<CallCategory>(),
        table_export::<CounterCategory>(),
        table_export::<Device>(),
        table_export::<SessionEntry>(),
    ]
}

/// Write every table of `store` to `<dir>/<prefix><table>.csv`.
///
/// `dir` is created if missing. Without `overwrite`, every target is checked
/// before anything is written, so an `ExportTargetExists` error leaves `dir`
/// as it was.
pub fn export_to_csv<E: StorageEngine>(
    store: &TraceStore<E>,
    dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<ExportedTable>> {
    let tables = exported_tables();
    let targets: Vec<PathBuf> = tables
        .iter()
        .map(|t| dir.join(format!("{}{}.csv", options.prefix, t.table)))
        .collect();

    if !options.overwrite {
        if let Some(existing) = targets.iter().find(|p| p.exists()) {
            return Err(StoreError::ExportTargetExists(existing.clone()));
        }
    }

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(tables.len());
    for (entry, path) in tables.iter().zip(targets) {
        let rows = write_table(store, entry, &path)?;
        debug!("exported {} rows of {} to {}", rows, entry.table, path.display());
        written.push(ExportedTable {
            table: entry.table,
            path,
            rows,
        });
    }

    info!("exported {} tables to {}", written.len(), dir.display());
    Ok(written)
}

fn write_table<E: StorageEngine>(
    store: &TraceStore<E>,
    entry: &TableExport,
    path: &Path,
) -> Result<usize> {
    let rows = store.engine().query(&entry.select, &[])?;
    let mut out = BufWriter::new(File::create(path)?);

    let header: Vec<&str> = entry.columns.iter().map(|c| c.name).collect();
    writeln!(out, "{}", header.join(","))?;

    for row in &rows {
        let mut fields = Vec::with_capacity(entry.columns.len());
        for (idx, column) in entry.columns.iter().enumerate() {
            fields.push(render_field(column, row.value(idx)?)?);
        }
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()?;
    Ok(rows.len())
}

fn render_field(column: &Column, value: &SqlValue) -> Result<String> {
    let rendered = match (column.kind, value) {
        (_, SqlValue::Null) => String::new(),
        (ColumnKind::Unsigned, SqlValue::Integer(v)) => (*v as u64).to_string(),
        (ColumnKind::Signed, SqlValue::Integer(v)) => v.to_string(),
        (ColumnKind::Float32, SqlValue::Real(v)) => (*v as f32).to_string(),
        (ColumnKind::Float32, SqlValue::Integer(v)) => (*v as f32).to_string(),
        (ColumnKind::Float64, SqlValue::Real(v)) => v.to_string(),
        (ColumnKind::Float64, SqlValue::Integer(v)) => (*v as f64).to_string(),
        (ColumnKind::Text, SqlValue::Text(s)) => escape_csv(s),
        (ColumnKind::Blob, SqlValue::Blob(b)) => hex::encode(b),
        (kind, other) => {
            return Err(StoreError::Decode {
                column: column.name.to_string(),
                message: format!("cannot export {other:?} as {kind:?}"),
            })
        }
    };
    Ok(rendered)
}

/// Quote a field when it contains a separator, quote or line break.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::create_test_store;
    use tempfile::TempDir;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("glClear"), "glClear");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_render_field_kinds() {
        let unsigned = Column {
            name: "cpuStart",
            kind: ColumnKind::Unsigned,
        };
        assert_eq!(
            render_field(&unsigned, &SqlValue::Integer(-1)).unwrap(),
            u64::MAX.to_string()
        );
        let ratio = Column {
            name: "percentage",
            kind: ColumnKind::Float32,
        };
        assert_eq!(
            render_field(&ratio, &SqlValue::Real(0.25)).unwrap(),
            "0.25"
        );
        let blob = Column {
            name: "binary",
            kind: ColumnKind::Blob,
        };
        assert_eq!(
            render_field(&blob, &SqlValue::Blob(vec![0xde, 0xad])).unwrap(),
            "dead"
        );
        assert!(render_field(&blob, &SqlValue::Text("x".to_string())).is_err());
    }

    #[test]
    fn test_export_writes_every_table() {
        let mut store = create_test_store();
        store
            .insert_profile_trace(&ProfileTraceInfo {
                trace_id: 1,
                call_name: "glDrawElements".to_string(),
                cpu_start: 100,
                cpu_end: 150,
                frame_num: 2,
                ..Default::default()
            })
            .unwrap();
        store
            .insert_annotation(&Annotation {
                annotation_id: Some(5),
                text: "frame, slow".to_string(),
                ..Default::default()
            })
            .unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("csv");
        let written = export_to_csv(
            &store,
            &out,
            &ExportOptions {
                prefix: "run1_".to_string(),
                overwrite: false,
            },
        )
        .unwrap();
        assert_eq!(written.len(), 21);

        let traces = fs::read_to_string(out.join("run1_traces.csv")).unwrap();
        let mut lines = traces.lines();
        assert_eq!(
            lines.next().unwrap(),
            "traceId,callName,cpuStart,cpuEnd,frameNum,drawNum,apiId,parameterOffset,parameterLength"
        );
        assert_eq!(lines.next().unwrap(), "1,glDrawElements,100,150,2,0,0,0,0");

        let annotations = fs::read_to_string(out.join("run1_annotations.csv")).unwrap();
        assert!(annotations.contains("\"frame, slow\""));
    }

    #[test]
    fn test_existing_target_is_refused_before_writing() {
        let store = create_test_store();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("shaders.csv"), "keep me").unwrap();

        let err = export_to_csv(&store, dir.path(), &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::ExportTargetExists(_)));
        assert!(!dir.path().join("traces.csv").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("shaders.csv")).unwrap(),
            "keep me"
        );

        export_to_csv(
            &store,
            dir.path(),
            &ExportOptions {
                overwrite: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(fs::read_to_string(dir.path().join("shaders.csv"))
            .unwrap()
            .starts_with("shaderId,"));
    }
}
