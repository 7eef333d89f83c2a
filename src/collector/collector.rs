//! Main collector that combines the CPU, process and memory collectors.
//!
//! The `Collector` struct provides a unified interface for gathering
//! the selected stats into a `Snapshot`.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::collector::clock::ClockTicks;
use crate::collector::command::CommandExecutor;
use crate::collector::error::CollectError;
use crate::collector::memory::MemoryCollector;
use crate::collector::procfs::{CpuCollector, ProcessCollector};
use crate::collector::traits::FileSystem;
use crate::model::{Snapshot, StatKind};

/// Timing information for each collector phase.
///
/// Phases that were not requested stay at zero.
#[derive(Debug, Clone, Default)]
pub struct CollectorTiming {
    /// Total snapshot collection time.
    pub total: Duration,
    /// Time to collect the CPU summary.
    pub cpu: Duration,
    /// Time to collect process accounting.
    pub processes: Duration,
    /// Time to collect memory figures.
    pub memory: Duration,
}

/// Main collector that gathers all supported telemetry.
pub struct Collector<F: FileSystem + Clone, C: ClockTicks, E: CommandExecutor> {
    cpu_collector: CpuCollector<F, C>,
    process_collector: ProcessCollector<F>,
    memory_collector: MemoryCollector<E>,
    /// Timing information from the last collect_snapshot call.
    last_timing: Option<CollectorTiming>,
}

impl<F: FileSystem + Clone, C: ClockTicks, E: CommandExecutor> Collector<F, C, E> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `clock` - Source of clock ticks per second
    /// * `executor` - Runs the memory reporting command
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, clock: C, executor: E, proc_path: impl Into<String>) -> Self {
        let proc_path = proc_path.into();
        Self {
            cpu_collector: CpuCollector::new(fs.clone(), clock, &proc_path),
            process_collector: ProcessCollector::new(fs, &proc_path),
            memory_collector: MemoryCollector::new(executor),
            last_timing: None,
        }
    }

    /// Replaces the CPU collector, e.g. to point it at another cpufreq file.
    pub fn with_cpu_collector(mut self, cpu_collector: CpuCollector<F, C>) -> Self {
        self.cpu_collector = cpu_collector;
        self
    }

    /// Returns timing information from the last collect_snapshot call.
    pub fn last_timing(&self) -> Option<&CollectorTiming> {
        self.last_timing.as_ref()
    }

    pub fn memory(&self) -> &MemoryCollector<E> {
        &self.memory_collector
    }

    /// Collects the requested stats.
    ///
    /// The first failing phase aborts the call; no partial snapshot is returned.
    pub fn collect_snapshot(&mut self, kind: StatKind) -> Result<Snapshot, CollectError> {
        let total_start = Instant::now();
        let mut timing = CollectorTiming::default();

        let mut snapshot = Snapshot {
            timestamp: chrono::Utc::now().timestamp(),
            ..Snapshot::default()
        };

        if kind.includes_cpu() {
            let start = Instant::now();
            snapshot.cpu = Some(self.cpu_collector.collect_summary()?);
            timing.cpu = start.elapsed();
        }

        if kind.includes_memory() {
            let start = Instant::now();
            snapshot.memory = Some(self.memory_collector.collect_memory()?);
            timing.memory = start.elapsed();
        }

        if kind.includes_processes() {
            let start = Instant::now();
            snapshot.processes = Some(self.process_collector.collect_all_processes()?);
            timing.processes = start.elapsed();
        }

        timing.total = total_start.elapsed();
        debug!(
            "snapshot collected in {:?} (cpu={:?}, memory={:?}, processes={:?})",
            timing.total, timing.cpu, timing.memory, timing.processes
        );
        self.last_timing = Some(timing);

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::clock::FixedClock;
    use crate::collector::memory::{MEMORY_SHELL, MEMORY_TOTAL_ARGS, MEMORY_USED_ARGS};
    use crate::collector::mock::{MockCommand, MockFs};

    fn memory_command() -> MockCommand {
        MockCommand::new()
            .respond(MEMORY_SHELL, &MEMORY_TOTAL_ARGS, "16000\n")
            .respond(MEMORY_SHELL, &MEMORY_USED_ARGS, "4000\n")
    }

    #[test]
    fn test_collect_all() {
        let mut collector = Collector::new(
            MockFs::typical_system(),
            FixedClock(100),
            memory_command(),
            "/proc",
        );
        let snapshot = collector.collect_snapshot(StatKind::All).unwrap();

        assert!(snapshot.timestamp > 0);
        assert_eq!(snapshot.cpu.unwrap().num_cores, 4);
        assert_eq!(snapshot.memory.unwrap().available, 12000);
        assert_eq!(snapshot.processes.unwrap().len(), 3);
        assert!(collector.last_timing().is_some());
    }

    #[test]
    fn test_collect_only_cpu_skips_other_sources() {
        // No scripted memory command and no processes: only cpu is touched
        let mut fs = MockFs::new();
        fs.add_file("/proc/cpuinfo", "processor : 0\ncpu MHz : 1000\n\n");
        let mut collector = Collector::new(fs, FixedClock(250), MockCommand::new(), "/proc");

        let snapshot = collector.collect_snapshot(StatKind::Cpu).unwrap();
        assert_eq!(snapshot.cpu.unwrap().clk_tck, 250);
        assert!(snapshot.memory.is_none());
        assert!(snapshot.processes.is_none());
        assert!(collector.memory().executor().calls().is_empty());
    }

    #[test]
    fn test_collect_fails_on_any_phase() {
        let mut collector = Collector::new(
            MockFs::typical_system(),
            FixedClock(100),
            MockCommand::new(),
            "/proc",
        );
        let err = collector.collect_snapshot(StatKind::All).unwrap_err();
        assert!(matches!(err, CollectError::Io { .. }));
        assert!(collector.last_timing().is_none());
    }

    #[test]
    fn test_collect_processes_only() {
        let mut collector = Collector::new(
            MockFs::with_mixed_entries(),
            FixedClock(100),
            MockCommand::new(),
            "/proc",
        );
        let snapshot = collector.collect_snapshot(StatKind::Processes).unwrap();
        assert_eq!(snapshot.processes.unwrap().len(), 2);
        assert!(snapshot.cpu.is_none());
    }
}
