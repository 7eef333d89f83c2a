//! CPU topology and clock records.

use serde::Serialize;

/// One logical processor as described by a `/proc/cpuinfo` block.
///
/// Values are kept as the kernel prints them, except the clock speed.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct CpuCore {
    pub processor: String,
    pub vendor_id: String,
    pub cpu_family: String,
    pub model: String,
    pub model_name: String,
    pub stepping: String,
    pub microcode: String,
    /// Current clock speed in MHz.
    pub cpu_mhz: f32,
    pub cache_size: String,
    pub physical_id: String,
    pub siblings: String,
    pub core_id: String,
    pub cpu_cores: String,
    pub apicid: String,
    pub initial_apicid: String,
    pub fpu: String,
    pub fpu_exception: String,
    pub cpuid_level: String,
    pub wp: String,
    pub flags: String,
    pub vmx_flags: String,
    pub bugs: String,
    pub bogomips: String,
    pub clflush_size: String,
    pub cache_alignment: String,
    pub address_sizes: String,
    pub power_management: String,
}

/// Host-wide CPU summary.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct CpuSummary {
    /// Highest current clock speed across all cores (MHz).
    pub current_hi_clock: f32,
    /// Maximum scaling frequency of cpu0 (MHz), 0 when unavailable.
    ///
    /// `scaling_max_freq` reports kHz; the value is divided by 1000 so it
    /// compares directly with `current_hi_clock`.
    pub max_clock: f32,
    /// Number of logical cores.
    pub num_cores: usize,
    /// Clock ticks per second (USER_HZ).
    pub clk_tck: i64,
}
