//! Per-process CPU-time accounting.

use serde::Serialize;

/// CPU-time accounting for a single process.
///
/// Source: `/proc/[pid]/stat` fields 2, 14 and 15.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct ProcessInfo {
    /// Process ID as it appears in the `/proc` directory name.
    pub pid: String,
    /// Command name without the surrounding parentheses.
    pub name: String,
    /// Time spent in user mode, in clock ticks.
    pub utime: i64,
    /// Time spent in kernel mode, in clock ticks.
    pub stime: i64,
}

impl ProcessInfo {
    /// Total CPU time in seconds given the host's clock ticks per second.
    ///
    /// Returns 0.0 if `clk_tck` is not positive.
    pub fn cpu_seconds(&self, clk_tck: i64) -> f64 {
        if clk_tck <= 0 {
            return 0.0;
        }
        self.utime.saturating_add(self.stime) as f64 / clk_tck as f64
    }
}
