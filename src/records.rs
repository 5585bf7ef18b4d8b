//! Record model for profiling sessions.
//!
//! Plain data types for every entity the store persists. Field order matches the
//! column order of the corresponding table and of its CSV export.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Annotation types written by the capture runtime for frame/session markers.
pub const GLOBAL_ANNOTATION_TYPES: RangeInclusive<u64> = 30..=35;

/// Annotation types created by the user through the annotation API.
pub const USER_ANNOTATION_TYPES: RangeInclusive<u64> = 0..=3;

/// One intercepted API call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileTraceInfo {
    pub trace_id: u64,
    pub call_name: String,
    pub cpu_start: u64,
    pub cpu_end: u64,
    pub frame_num: u64,
    pub draw_num: u64,
    pub api_id: u64,
    pub parameter_offset: u64,
    pub parameter_length: u64,
}

/// A user or system annotation. `annotation_id` is assigned by the store when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub annotation_id: Option<u64>,
    pub frame_num: u64,
    pub draw_num: u64,
    pub annotation_type: u64,
    pub cpu_start_time: u64,
    pub cpu_end_time: u64,
    pub text: String,
}

impl Annotation {
    pub fn is_global(&self) -> bool {
        GLOBAL_ANNOTATION_TYPES.contains(&self.annotation_type)
    }

    pub fn is_user(&self) -> bool {
        USER_ANNOTATION_TYPES.contains(&self.annotation_type)
    }
}

/// Output sample of a power-estimation model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimatedPowerSample {
    pub sample_time: u64,
    pub estimated_power: f32,
    pub model_id: u64,
    pub component_id: u64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimatedPowerComponent {
    pub device_id: u64,
    pub component_id: u64,
    pub component_name: String,
}

/// Call-site metadata for a traced call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackTraceInfo {
    pub frame_num: u64,
    pub draw_num: u64,
    pub base_addr: u64,
    pub file_name: String,
    pub symbol_addr: u64,
    pub symbol_name: String,
}

/// Raw marshalled arguments and return value of a traced call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackTraceParameter {
    pub frame_num: u64,
    pub draw_num: u64,
    pub thread_id: u64,
    pub type_def_description: String,
    pub binary_params: Vec<u8>,
    pub params_size: u64,
    pub binary_return: Vec<u8>,
    pub return_size: i32,
    pub error: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GpuTimer {
    pub timer_type: u64,
    pub frame_num: u64,
    pub draw_num: u64,
    pub time: u64,
}

/// API a shader was captured from. Values are the capture protocol's API bits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[repr(u64)]
pub enum ShaderApi {
    #[default]
    Gles2 = 0x0100,
    Gles3 = 0x0200,
    Egl = 0x0400,
    Gl = 0x0800,
    Cl = 0x1000,
    Vulkan = 0x2000,
    Nema = 0x4000,
    All = 0x3F00,
}

impl ShaderApi {
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            0x0100 => Some(ShaderApi::Gles2),
            0x0200 => Some(ShaderApi::Gles3),
            0x0400 => Some(ShaderApi::Egl),
            0x0800 => Some(ShaderApi::Gl),
            0x1000 => Some(ShaderApi::Cl),
            0x2000 => Some(ShaderApi::Vulkan),
            0x4000 => Some(ShaderApi::Nema),
            0x3F00 => Some(ShaderApi::All),
            _ => None,
        }
    }

    /// Map a user-facing API name ("OpenGLES", "OpenGL", "Vulkan", "OpenCL").
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "OpenGLES" => Some(ShaderApi::Gles2),
            "OpenGL" => Some(ShaderApi::Gl),
            "Vulkan" => Some(ShaderApi::Vulkan),
            "OpenCL" => Some(ShaderApi::Cl),
            _ => None,
        }
    }
}

impl fmt::Display for ShaderApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderApi::Gles2 => "GLES2",
            ShaderApi::Gles3 => "GLES3",
            ShaderApi::Egl => "EGL",
            ShaderApi::Gl => "GL",
            ShaderApi::Cl => "CL",
            ShaderApi::Vulkan => "VULKAN",
            ShaderApi::Nema => "NEMA",
            ShaderApi::All => "ALL",
        };
        write!(f, "{name}")
    }
}

/// Which part of a shader record an incremental update carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShaderMetadataKind {
    Source,
    Asm,
    Binary,
    Debug,
    /// The definitive shader packet: source plus timing and frame/draw position.
    SourceFromMainPacket,
}

impl ShaderMetadataKind {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(ShaderMetadataKind::Source),
            1 => Some(ShaderMetadataKind::Asm),
            2 => Some(ShaderMetadataKind::Binary),
            3 => Some(ShaderMetadataKind::Debug),
            4 => Some(ShaderMetadataKind::SourceFromMainPacket),
            _ => None,
        }
    }
}

/// Shader snapshot keyed by `(shader_id, api)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShaderTrace {
    pub shader_id: u64,
    pub api: ShaderApi,
    pub frame_num: u64,
    pub draw_num: u64,
    pub shader_type: u64,
    pub cpu_time: u64,
    pub src_code: String,
    pub asm_code: String,
    pub debug: Vec<u8>,
    pub binary: Vec<u8>,
}

/// Profiling weight of one assembly line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShaderAsmStat {
    pub shader_id: u64,
    pub api: ShaderApi,
    pub asm_line: u64,
    pub percentage: f32,
}

/// Source line to assembly range mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShaderToAsm {
    pub shader_id: u64,
    pub api: ShaderApi,
    pub shader_line: u64,
    pub asm_start_line: u64,
    pub asm_end_line: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CounterWeight {
    pub counter_name: String,
    pub weight_value: f32,
}

/// Entry in the counter registry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counter {
    pub counter_id: u64,
    pub counter_name: String,
}

/// A raw counter sample as stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CounterSample {
    pub counter_id: u64,
    pub quantized_time_ms: u64,
    pub sample_value: f64,
}

/// A counter sample paired with its blob. Derived queries replace `sample_value`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PPSampleData {
    pub counter_id: u64,
    pub quantized_time_ms: u64,
    pub sample_value: f64,
    pub blob: Vec<u8>,
}

/// Opaque payload attached to a sample.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SampleBlob {
    pub blob_id: u64,
    pub blob: Vec<u8>,
}

/// Result of a nearest-sample lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampledValue {
    pub time: u64,
    pub counter_id: u64,
    pub value: f64,
}

/// Inclusive frame span used to scope feedback summaries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionOfInterest {
    pub region_id: u64,
    pub frame_start: u64,
    pub frame_end: u64,
    pub degree_of_interest: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallSummary {
    pub region_id: u64,
    pub call_name: String,
    pub times_called: u64,
    pub total_time: u64,
}

/// Share of calls per category inside a region. Shares may overlap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallsPerType {
    pub region_id: u64,
    pub draw_percentage: f32,
    pub bind_percentage: f32,
    pub setup_percentage: f32,
    pub wait_percentage: f32,
    pub error_percentage: f32,
    pub delimiter_percentage: f32,
    pub other_percentage: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CallCategory {
    pub call_name: String,
    pub category: String,
    pub api_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CounterCategory {
    pub counter_id: u64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Device {
    pub device_id: u32,
    pub device_type_id: u32,
    pub device_name: String,
    pub device_description: String,
}

/// Key/value metadata describing the capture session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionEntry {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_api_ids() {
        for api in [
            ShaderApi::Gles2,
            ShaderApi::Gles3,
            ShaderApi::Egl,
            ShaderApi::Gl,
            ShaderApi::Cl,
            ShaderApi::Vulkan,
            ShaderApi::Nema,
            ShaderApi::All,
        ] {
            assert_eq!(ShaderApi::from_id(api.id()), Some(api));
        }
        assert_eq!(ShaderApi::Vulkan.id(), 0x2000);
        assert_eq!(ShaderApi::from_id(0x0001), None);
    }

    #[test]
    fn test_shader_api_names() {
        assert_eq!(ShaderApi::from_api_name("OpenGLES"), Some(ShaderApi::Gles2));
        assert_eq!(ShaderApi::from_api_name("OpenGL"), Some(ShaderApi::Gl));
        assert_eq!(ShaderApi::from_api_name("Vulkan"), Some(ShaderApi::Vulkan));
        assert_eq!(ShaderApi::from_api_name("OpenCL"), Some(ShaderApi::Cl));
        assert_eq!(ShaderApi::from_api_name("Metal"), None);
    }

    #[test]
    fn test_annotation_kinds() {
        let mut annotation = Annotation {
            annotation_type: 31,
            ..Default::default()
        };
        assert!(annotation.is_global());
        assert!(!annotation.is_user());

        annotation.annotation_type = 2;
        assert!(annotation.is_user());

        annotation.annotation_type = 42;
        assert!(!annotation.is_global());
        assert!(!annotation.is_user());
    }

    #[test]
    fn test_metadata_kind_codes() {
        assert_eq!(
            ShaderMetadataKind::from_code(4),
            Some(ShaderMetadataKind::SourceFromMainPacket)
        );
        assert_eq!(ShaderMetadataKind::from_code(5), None);
    }
}
