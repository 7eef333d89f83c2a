//! Process collector for per-process CPU-time accounting from `/proc/[pid]/stat`.

use std::path::Path;

use tracing::debug;

use crate::collector::error::CollectError;
use crate::collector::procfs::parser::{parse_pid_dir_name, parse_proc_stat};
use crate::collector::traits::FileSystem;
use crate::model::ProcessInfo;

/// Collects CPU-time accounting for every visible process.
pub struct ProcessCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcessCollector<F> {
    /// Creates a new process collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Lists process directories, ordered by PID.
    ///
    /// Returns records holding only the PID. Fails with `NotFound` when no
    /// entry qualifies.
    pub fn list_processes(&self) -> Result<Vec<ProcessInfo>, CollectError> {
        let entries = self
            .fs
            .read_dir(Path::new(&self.proc_path))
            .map_err(|e| CollectError::io(&self.proc_path, e))?;

        let mut pids: Vec<u32> = entries
            .iter()
            .filter(|entry| self.fs.is_dir(entry))
            .filter_map(|entry| entry.file_name().and_then(|n| n.to_str()))
            .filter_map(parse_pid_dir_name)
            .collect();

        if pids.is_empty() {
            return Err(CollectError::NotFound {
                path: self.proc_path.clone(),
            });
        }
        pids.sort_unstable();

        Ok(pids
            .into_iter()
            .map(|pid| ProcessInfo {
                pid: pid.to_string(),
                ..ProcessInfo::default()
            })
            .collect())
    }

    /// Fills name and CPU times of a listed process from its stat file.
    fn fill_process(&self, process: &mut ProcessInfo) -> Result<(), CollectError> {
        let stat_path = format!("{}/{}/stat", self.proc_path, process.pid);
        let content = self
            .fs
            .read_to_string(Path::new(&stat_path))
            .map_err(|e| CollectError::io(&stat_path, e))?;
        let stat =
            parse_proc_stat(&content).map_err(|e| CollectError::from_parse_error(&stat_path, e))?;

        process.name = stat.name;
        process.utime = stat.utime;
        process.stime = stat.stime;
        Ok(())
    }

    /// Collects accounting for all processes.
    ///
    /// Any unreadable or malformed stat file fails the whole call, including
    /// one belonging to a process that exited after the directory listing.
    pub fn collect_all_processes(&self) -> Result<Vec<ProcessInfo>, CollectError> {
        let mut processes = self.list_processes()?;
        for process in &mut processes {
            self.fill_process(process)?;
        }
        debug!(count = processes.len(), "collected processes");
        Ok(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_collect_all_processes() {
        let collector = ProcessCollector::new(MockFs::typical_system(), "/proc");
        let processes = collector.collect_all_processes().unwrap();

        let pids: Vec<&str> = processes.iter().map(|p| p.pid.as_str()).collect();
        assert_eq!(pids, vec!["1", "812", "1000"]);

        assert_eq!(processes[0].name, "systemd");
        assert_eq!(processes[0].utime, 350);
        assert_eq!(processes[0].stime, 820);
        assert_eq!(processes[2].name, "bash");
        assert_eq!(processes[2].utime, 4200);
    }

    #[test]
    fn test_list_filters_non_process_entries() {
        let collector = ProcessCollector::new(MockFs::with_mixed_entries(), "/proc");
        let listed = collector.list_processes().unwrap();

        let pids: Vec<&str> = listed.iter().map(|p| p.pid.as_str()).collect();
        assert_eq!(pids, vec!["1", "42"]);
        assert!(listed.iter().all(|p| p.name.is_empty() && p.utime == 0));
    }

    #[test]
    fn test_name_with_slash_and_colon() {
        let collector = ProcessCollector::new(MockFs::with_mixed_entries(), "/proc");
        let processes = collector.collect_all_processes().unwrap();
        assert_eq!(processes[1].name, "kworker/0:1");
        assert_eq!(processes[1].stime, 7);
    }

    #[test]
    fn test_no_processes_is_not_found() {
        let collector = ProcessCollector::new(MockFs::empty_proc(), "/proc");
        let err = collector.collect_all_processes().unwrap_err();
        assert!(matches!(err, CollectError::NotFound { ref path } if path == "/proc"));
    }

    #[test]
    fn test_unlistable_root_is_io_error() {
        let collector = ProcessCollector::new(MockFs::new(), "/proc");
        assert!(matches!(
            collector.collect_all_processes(),
            Err(CollectError::Io { .. })
        ));
    }

    #[test]
    fn test_truncated_stat_fails_whole_collection() {
        let collector = ProcessCollector::new(MockFs::with_truncated_stat(), "/proc");
        let err = collector.collect_all_processes().unwrap_err();
        assert!(matches!(err, CollectError::Format { .. }));
        assert_eq!(err.path(), "/proc/5/stat");
    }

    #[test]
    fn test_spaced_name_is_format_error() {
        let collector = ProcessCollector::new(MockFs::with_spaced_name(), "/proc");
        let err = collector.collect_all_processes().unwrap_err();
        assert!(matches!(err, CollectError::Format { .. }));
        assert!(err.to_string().contains("got 53"));
    }

    #[test]
    fn test_process_gone_fails_whole_collection() {
        let mut fs = MockFs::typical_system();
        fs.remove_file("/proc/812/stat");

        let collector = ProcessCollector::new(fs, "/proc");
        let err = collector.collect_all_processes().unwrap_err();
        assert!(matches!(err, CollectError::Io { .. }));
        assert_eq!(err.path(), "/proc/812/stat");
    }
}
