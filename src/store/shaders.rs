//! Shader snapshots and the incremental shader merge.
//!
//! A capture pipeline learns about a shader piecewise: the source first, then
//! the compiled assembly, debug info or a binary, and finally the main shader
//! packet. [`TraceStore::update_shader_trace`] folds each piece into the single
//! row identified by `(shader_id, api)`.

use super::{ordered_range, TraceStore};
use crate::engine::{u64_value, SqlValue, StorageEngine};
use crate::error::{Result, StoreError};
use crate::records::{ShaderApi, ShaderAsmStat, ShaderMetadataKind, ShaderToAsm, ShaderTrace};
use crate::table::StoredRecord;
use std::collections::BTreeSet;
use tracing::debug;

impl ShaderMetadataKind {
    /// Columns owned by this kind and their values taken from `shader`.
    fn owned_fields(self, shader: &ShaderTrace) -> Vec<(&'static str, SqlValue)> {
        match self {
            ShaderMetadataKind::Source => {
                vec![("srcCode", SqlValue::Text(shader.src_code.clone()))]
            }
            ShaderMetadataKind::Asm => {
                vec![("asmCode", SqlValue::Text(shader.asm_code.clone()))]
            }
            ShaderMetadataKind::Binary => vec![("binary", SqlValue::Blob(shader.binary.clone()))],
            ShaderMetadataKind::Debug => vec![("debug", SqlValue::Blob(shader.debug.clone()))],
            ShaderMetadataKind::SourceFromMainPacket => vec![
                ("srcCode", SqlValue::Text(shader.src_code.clone())),
                ("cpuTime", u64_value(shader.cpu_time)),
                ("frameNum", u64_value(shader.frame_num)),
                ("drawNum", u64_value(shader.draw_num)),
            ],
        }
    }
}

impl<E: StorageEngine> TraceStore<E> {
    pub fn insert_shader_trace(&mut self, shader: &ShaderTrace) -> Result<()> {
        self.insert(shader)
    }

    pub fn shader_traces(&self) -> Result<Vec<ShaderTrace>> {
        self.get_all()
    }

    pub fn shader_trace(&self, shader_id: u64, api: ShaderApi) -> Result<ShaderTrace> {
        self.fetch_one(
            "WHERE shaderId = ?1 AND apiId = ?2",
            &[u64_value(shader_id), u64_value(api.id())],
            || format!("shader {shader_id} ({api})"),
        )
    }

    pub fn shader_traces_by_api(&self, api: ShaderApi) -> Result<Vec<ShaderTrace>> {
        self.fetch_where("WHERE apiId = ?1", &[u64_value(api.id())])
    }

    /// Shaders captured from `api_name` ("OpenGLES", "OpenGL", "Vulkan", "OpenCL").
    pub fn shader_traces_by_api_name(&self, api_name: &str) -> Result<Vec<ShaderTrace>> {
        let api = ShaderApi::from_api_name(api_name)
            .ok_or_else(|| StoreError::not_found(format!("shader API named {api_name:?}")))?;
        self.shader_traces_by_api(api)
    }

    /// Shaders whose `cpuTime` lies in `[start, end]`.
    pub fn shader_traces_in_range(&self, start: u64, end: u64) -> Result<Vec<ShaderTrace>> {
        let Some(bounds) = ordered_range("cpu time", start, end)? else {
            return Ok(Vec::new());
        };
        self.fetch_where("WHERE cpuTime BETWEEN ?1 AND ?2", &bounds)
    }

    pub fn shader_traces_in_frame_range(&self, first: u64, last: u64) -> Result<Vec<ShaderTrace>> {
        let Some(bounds) = ordered_range("frame", first, last)? else {
            return Ok(Vec::new());
        };
        self.fetch_where("WHERE frameNum BETWEEN ?1 AND ?2", &bounds)
    }

    /// Merge one piece of shader metadata into the stored shader.
    ///
    /// If no shader with the same `(shader_id, api)` exists, `shader` is inserted
    /// as is. Otherwise only the columns owned by `kind` are overwritten:
    ///
    /// | kind | columns |
    /// |---|---|
    /// | `Source` | `srcCode` |
    /// | `Asm` | `asmCode` |
    /// | `Binary` | `binary` |
    /// | `Debug` | `debug` |
    /// | `SourceFromMainPacket` | `srcCode`, `cpuTime`, `frameNum`, `drawNum` |
    ///
    /// The lookup and write run in their own transaction. A transaction the caller
    /// has open is committed first and reopened afterwards (see
    /// [`TraceStore::with_suspended_transaction`]).
    pub fn update_shader_trace(
        &mut self,
        kind: ShaderMetadataKind,
        shader: &ShaderTrace,
    ) -> Result<()> {
        self.with_suspended_transaction(|store| {
            store.in_transaction(|store| store.merge_shader_trace(kind, shader))
        })
    }

    fn merge_shader_trace(&mut self, kind: ShaderMetadataKind, shader: &ShaderTrace) -> Result<()> {
        shader.validate()?;
        match self.shader_trace(shader.shader_id, shader.api) {
            Ok(_) => {
                let fields = kind.owned_fields(shader);
                let assignments: Vec<String> = fields
                    .iter()
                    .enumerate()
                    .map(|(i, (column, _))| format!("{column} = ?{}", i + 1))
                    .collect();
                let mut params: Vec<SqlValue> = fields.into_iter().map(|(_, v)| v).collect();
                let key_index = params.len() + 1;
                params.push(u64_value(shader.shader_id));
                params.push(u64_value(shader.api.id()));

                let sql = format!(
                    "UPDATE shaders SET {} WHERE shaderId = ?{} AND apiId = ?{}",
                    assignments.join(", "),
                    key_index,
                    key_index + 1
                );
                debug!(
                    "merging {:?} into shader {} ({})",
                    kind, shader.shader_id, shader.api
                );
                self.engine.execute(&sql, &params)?;
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                debug!(
                    "shader {} ({}) is new, inserting from {:?}",
                    shader.shader_id, shader.api, kind
                );
                self.insert(shader)
            }
            Err(err) => Err(err),
        }
    }

    pub fn insert_shader_asm_stat(&mut self, stat: &ShaderAsmStat) -> Result<()> {
        self.insert(stat)
    }

    /// Assembly stats of `shader_id` for every API.
    pub fn shader_asm_stats_for(&self, shader_id: u64) -> Result<Vec<ShaderAsmStat>> {
        self.fetch_where(
            "WHERE shaderId = ?1 ORDER BY apiId, asmLine",
            &[u64_value(shader_id)],
        )
    }

    pub fn delete_shader_asm_stats_for(&mut self, shader_id: u64, api: ShaderApi) -> Result<()> {
        self.engine.execute(
            "DELETE FROM shader_asm_stats WHERE shaderId = ?1 AND apiId = ?2",
            &[u64_value(shader_id), u64_value(api.id())],
        )?;
        Ok(())
    }

    /// Replace the assembly stats of every shader present in `stats`.
    ///
    /// Existing stats of each distinct `(shader_id, api)` in the input are deleted,
    /// then every input row is inserted. Shaders absent from the input keep their
    /// stats. Runs as one transaction and rolls back entirely on failure, so it
    /// must not be called while a transaction is open.
    pub fn update_shader_asm_stats(&mut self, stats: &[ShaderAsmStat]) -> Result<()> {
        let shaders: BTreeSet<(u64, ShaderApi)> =
            stats.iter().map(|s| (s.shader_id, s.api)).collect();
        self.in_transaction(|store| {
            for (shader_id, api) in &shaders {
                store.delete_shader_asm_stats_for(*shader_id, *api)?;
            }
            for stat in stats {
                store.insert(stat)?;
            }
            Ok(())
        })?;
        debug!(
            "replaced asm stats of {} shaders with {} rows",
            shaders.len(),
            stats.len()
        );
        Ok(())
    }

    pub fn insert_shader_to_asm(&mut self, mapping: &ShaderToAsm) -> Result<()> {
        self.insert(mapping)
    }

    pub fn shader_to_asm_for(&self, shader_id: u64) -> Result<Vec<ShaderToAsm>> {
        self.fetch_where(
            "WHERE shaderId = ?1 ORDER BY apiId, shaderLine",
            &[u64_value(shader_id)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{create_test_store, FaultyEngine};
    use super::*;

    fn shader(id: u64, api: ShaderApi) -> ShaderTrace {
        ShaderTrace {
            shader_id: id,
            api,
            frame_num: 1,
            draw_num: 2,
            shader_type: 0x8B31,
            cpu_time: 1_000,
            ..Default::default()
        }
    }

    fn stat(id: u64, line: u64, percentage: f32) -> ShaderAsmStat {
        ShaderAsmStat {
            shader_id: id,
            api: ShaderApi::Gles2,
            asm_line: line,
            percentage,
        }
    }

    #[test]
    fn test_merge_keeps_fields_of_other_kinds() {
        let mut store = create_test_store();
        let mut source = shader(1, ShaderApi::Gles2);
        source.src_code = "void main() {}".to_string();
        store
            .update_shader_trace(ShaderMetadataKind::Source, &source)
            .unwrap();

        let mut asm = shader(1, ShaderApi::Gles2);
        asm.asm_code = "MOV r0, r1".to_string();
        store.update_shader_trace(ShaderMetadataKind::Asm, &asm).unwrap();

        let mut debug = shader(1, ShaderApi::Gles2);
        debug.debug = vec![0xAA, 0xBB];
        debug.src_code = "must not be applied".to_string();
        store
            .update_shader_trace(ShaderMetadataKind::Debug, &debug)
            .unwrap();

        let stored = store.shader_trace(1, ShaderApi::Gles2).unwrap();
        assert_eq!(stored.src_code, "void main() {}");
        assert_eq!(stored.asm_code, "MOV r0, r1");
        assert_eq!(stored.debug, vec![0xAA, 0xBB]);
        assert!(stored.binary.is_empty());
        assert_eq!(store.shader_traces().unwrap().len(), 1);
    }

    #[test]
    fn test_merge_on_absent_shader_inserts() {
        let mut store = create_test_store();
        let mut asm = shader(9, ShaderApi::Vulkan);
        asm.asm_code = "OpReturn".to_string();
        store.update_shader_trace(ShaderMetadataKind::Asm, &asm).unwrap();

        let stored = store.shader_trace(9, ShaderApi::Vulkan).unwrap();
        assert_eq!(stored, asm);
        assert!(stored.src_code.is_empty());
    }

    #[test]
    fn test_main_packet_overwrites_primary_fields() {
        let mut store = create_test_store();
        let mut first = shader(2, ShaderApi::Gl);
        first.src_code = "old".to_string();
        first.asm_code = "asm".to_string();
        store.insert_shader_trace(&first).unwrap();

        let packet = ShaderTrace {
            src_code: "new".to_string(),
            cpu_time: 5_000,
            frame_num: 40,
            draw_num: 41,
            shader_type: 1,
            ..shader(2, ShaderApi::Gl)
        };
        store
            .update_shader_trace(ShaderMetadataKind::SourceFromMainPacket, &packet)
            .unwrap();

        let stored = store.shader_trace(2, ShaderApi::Gl).unwrap();
        assert_eq!(stored.src_code, "new");
        assert_eq!(stored.cpu_time, 5_000);
        assert_eq!((stored.frame_num, stored.draw_num), (40, 41));
        // Not owned by the main packet.
        assert_eq!(stored.asm_code, "asm");
        assert_eq!(stored.shader_type, 0x8B31);
    }

    #[test]
    fn test_same_id_different_api_are_distinct() {
        let mut store = create_test_store();
        store
            .update_shader_trace(ShaderMetadataKind::Source, &shader(3, ShaderApi::Gles2))
            .unwrap();
        store
            .update_shader_trace(ShaderMetadataKind::Source, &shader(3, ShaderApi::Cl))
            .unwrap();
        assert_eq!(store.shader_traces().unwrap().len(), 2);
        assert_eq!(store.shader_traces_by_api(ShaderApi::Cl).unwrap().len(), 1);
        assert_eq!(store.shader_traces_by_api_name("OpenCL").unwrap().len(), 1);
        assert!(store
            .shader_traces_by_api_name("Direct3D")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_update_restores_open_transaction() {
        let mut store = create_test_store();
        store.begin_transaction().unwrap();
        store
            .update_shader_trace(ShaderMetadataKind::Source, &shader(4, ShaderApi::Gles2))
            .unwrap();
        assert!(store.is_transaction_active());
        store.rollback_transaction().unwrap();
        // The merge committed independently of the caller's transaction.
        assert!(store.shader_trace(4, ShaderApi::Gles2).is_ok());
    }

    #[test]
    fn test_shader_ranges() {
        let mut store = create_test_store();
        for (id, time, frame) in [(1, 100, 1), (2, 200, 2), (3, 300, 3)] {
            let mut s = shader(id, ShaderApi::Gles2);
            s.cpu_time = time;
            s.frame_num = frame;
            store.insert_shader_trace(&s).unwrap();
        }
        assert_eq!(store.shader_traces_in_range(100, 200).unwrap().len(), 2);
        assert_eq!(store.shader_traces_in_range(101, 299).unwrap().len(), 1);
        assert_eq!(store.shader_traces_in_frame_range(2, 3).unwrap().len(), 2);
    }

    #[test]
    fn test_asm_stats_replace_by_key() {
        let mut store = create_test_store();
        store.insert_shader_trace(&shader(1, ShaderApi::Gles2)).unwrap();
        store.insert_shader_trace(&shader(2, ShaderApi::Gles2)).unwrap();

        store
            .update_shader_asm_stats(&[stat(1, 0, 0.25), stat(1, 1, 0.75), stat(2, 0, 1.0)])
            .unwrap();
        store.update_shader_asm_stats(&[stat(1, 5, 0.5)]).unwrap();

        assert_eq!(store.shader_asm_stats_for(1).unwrap(), vec![stat(1, 5, 0.5)]);
        assert_eq!(store.shader_asm_stats_for(2).unwrap(), vec![stat(2, 0, 1.0)]);
        assert!(!store.is_transaction_active());
    }

    #[test]
    fn test_asm_stats_rollback_on_failure() {
        let mut store = TraceStore::with_engine(FaultyEngine::new()).unwrap();
        store.insert_shader_trace(&shader(1, ShaderApi::Gles2)).unwrap();
        store.update_shader_asm_stats(&[stat(1, 0, 1.0)]).unwrap();

        // Shader 8 does not exist, so its stat violates the foreign key after
        // shader 1's stats were already deleted inside the transaction.
        let err = store
            .update_shader_asm_stats(&[stat(1, 3, 0.5), stat(8, 0, 0.5)])
            .unwrap_err();
        assert!(matches!(err, StoreError::Engine { .. }));
        assert!(!store.is_transaction_active());
        assert_eq!(store.shader_asm_stats_for(1).unwrap(), vec![stat(1, 0, 1.0)]);
        assert_eq!(store.engine().rollbacks(), 1);
    }

    #[test]
    fn test_shader_to_asm() {
        let mut store = create_test_store();
        store.insert_shader_trace(&shader(1, ShaderApi::Gles2)).unwrap();
        let mapping = ShaderToAsm {
            shader_id: 1,
            api: ShaderApi::Gles2,
            shader_line: 3,
            asm_start_line: 10,
            asm_end_line: 14,
        };
        store.insert_shader_to_asm(&mapping).unwrap();
        assert_eq!(store.shader_to_asm_for(1).unwrap(), vec![mapping]);
        assert!(store.shader_to_asm_for(2).unwrap().is_empty());
    }
}
