//! CPU collector combining `/proc/cpuinfo`, cpufreq and the host clock.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collector::clock::ClockTicks;
use crate::collector::error::CollectError;
use crate::collector::procfs::parser::{parse_cpuinfo, parse_max_freq};
use crate::collector::traits::FileSystem;
use crate::model::{CpuCore, CpuSummary};

/// Default location of cpu0's maximum scaling frequency (kHz).
pub const DEFAULT_MAX_FREQ_PATH: &str = "/sys/devices/system/cpu/cpu0/cpufreq/scaling_max_freq";

/// Collects the host-wide CPU summary.
pub struct CpuCollector<F: FileSystem, C: ClockTicks> {
    fs: F,
    clock: C,
    proc_path: String,
    max_freq_path: PathBuf,
}

impl<F: FileSystem, C: ClockTicks> CpuCollector<F, C> {
    /// Creates a new CPU collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `clock` - Source of clock ticks per second
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, clock: C, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            clock,
            proc_path: proc_path.into(),
            max_freq_path: PathBuf::from(DEFAULT_MAX_FREQ_PATH),
        }
    }

    /// Overrides the cpufreq file location.
    pub fn with_max_freq_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.max_freq_path = path.into();
        self
    }

    /// Reads and parses `/proc/cpuinfo` into per-core records.
    pub fn collect_cores(&self) -> Result<Vec<CpuCore>, CollectError> {
        let path = format!("{}/cpuinfo", self.proc_path);
        let content = self
            .fs
            .read_to_string(Path::new(&path))
            .map_err(|e| CollectError::io(&path, e))?;
        parse_cpuinfo(&content).map_err(|e| CollectError::from_parse_error(&path, e))
    }

    /// Reads the optional max frequency in MHz; 0 when absent or malformed.
    fn read_max_clock(&self) -> f32 {
        let path = self.max_freq_path.display();
        match self.fs.read_to_string(&self.max_freq_path) {
            Ok(content) => parse_max_freq(&content).unwrap_or_else(|e| {
                warn!("ignoring {}: {}", path, e);
                0.0
            }),
            Err(e) => {
                debug!("max frequency unavailable at {}: {}", path, e);
                0.0
            }
        }
    }

    /// Collects the CPU summary.
    pub fn collect_summary(&self) -> Result<CpuSummary, CollectError> {
        let cores = self.collect_cores()?;
        let clk_tck = self.clock.clock_ticks();
        let max_clock = self.read_max_clock();

        let current_hi_clock = cores
            .iter()
            .map(|core| core.cpu_mhz)
            .fold(0.0_f32, f32::max);

        debug!(
            cores = cores.len(),
            current_hi_clock, max_clock, clk_tck, "collected cpu summary"
        );

        Ok(CpuSummary {
            current_hi_clock,
            max_clock,
            num_cores: cores.len(),
            clk_tck,
        })
    }
}
