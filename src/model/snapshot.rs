//! Result of one collection call.

use serde::Serialize;

use super::cpu::CpuSummary;
use super::memory::MemoryInfo;
use super::process::ProcessInfo;

/// Which stat a collection call should read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatKind {
    Cpu,
    Processes,
    Memory,
    #[default]
    All,
}

impl StatKind {
    pub fn includes_cpu(self) -> bool {
        matches!(self, StatKind::Cpu | StatKind::All)
    }

    pub fn includes_processes(self) -> bool {
        matches!(self, StatKind::Processes | StatKind::All)
    }

    pub fn includes_memory(self) -> bool {
        matches!(self, StatKind::Memory | StatKind::All)
    }
}

/// Point-in-time telemetry.
///
/// Sections that were not requested are `None`.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct Snapshot {
    /// Unix timestamp (seconds) at the start of collection.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<Vec<ProcessInfo>>,
}
