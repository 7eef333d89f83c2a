//! Data models produced by the collectors.
//!
//! - [`cpu`]: per-core records from `/proc/cpuinfo` and the CPU summary
//! - [`process`]: per-process CPU-time accounting from `/proc/[pid]/stat`
//! - [`memory`]: memory totals reported by `free`
//! - [`snapshot`]: everything gathered by one collection call

mod cpu;
mod memory;
mod process;
mod snapshot;

pub use cpu::{CpuCore, CpuSummary};
pub use memory::MemoryInfo;
pub use process::ProcessInfo;
pub use snapshot::{Snapshot, StatKind};
