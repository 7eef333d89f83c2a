//! Memory collector backed by the `free` utility.

use tracing::debug;

use crate::collector::command::{CommandExecutor, display_command};
use crate::collector::error::CollectError;
use crate::collector::procfs::parser::parse_megabytes;
use crate::model::MemoryInfo;

/// Shell used to run the filtered `free` pipelines.
pub const MEMORY_SHELL: &str = "sh";
/// Prints total memory in megabytes.
pub const MEMORY_TOTAL_ARGS: [&str; 2] = ["-c", "free -m | awk '/^Mem:/ {print $2}'"];
/// Prints used memory in megabytes.
pub const MEMORY_USED_ARGS: [&str; 2] = ["-c", "free -m | awk '/^Mem:/ {print $3}'"];

/// Collects total, used and available memory.
pub struct MemoryCollector<E: CommandExecutor> {
    executor: E,
}

impl<E: CommandExecutor> MemoryCollector<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs one probe and parses its single integer.
    fn probe(&self, args: &[&str]) -> Result<i64, CollectError> {
        let command = display_command(MEMORY_SHELL, args);
        let output = self
            .executor
            .execute(MEMORY_SHELL, args)
            .map_err(|e| CollectError::io(&command, e))?;
        parse_megabytes(&String::from_utf8_lossy(&output))
            .map_err(|e| CollectError::parse(&command, e.message))
    }

    /// Collects memory figures. Both probes must succeed.
    pub fn collect_memory(&self) -> Result<MemoryInfo, CollectError> {
        let total = self.probe(&MEMORY_TOTAL_ARGS)?;
        let used = self.probe(&MEMORY_USED_ARGS)?;
        debug!(total, used, "collected memory");
        Ok(MemoryInfo::new(total, used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockCommand;
    use std::io;

    fn scripted(total: &str, used: &str) -> MockCommand {
        MockCommand::new()
            .respond(MEMORY_SHELL, &MEMORY_TOTAL_ARGS, total)
            .respond(MEMORY_SHELL, &MEMORY_USED_ARGS, used)
    }

    #[test]
    fn test_collect_memory() {
        let mem = MemoryCollector::new(scripted("16000", "4000"))
            .collect_memory()
            .unwrap();
        assert_eq!(mem, MemoryInfo::new(16000, 4000));
        assert_eq!(mem.available, 12000);
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let mem = MemoryCollector::new(scripted("15842\n", "6120\n"))
            .collect_memory()
            .unwrap();
        assert_eq!(mem.total, 15842);
        assert_eq!(mem.used, 6120);
        assert_eq!(mem.available, 9722);
    }

    #[test]
    fn test_command_failure_fails_call() {
        let cmd = MockCommand::new()
            .respond(MEMORY_SHELL, &MEMORY_TOTAL_ARGS, "16000")
            .fail(MEMORY_SHELL, &MEMORY_USED_ARGS, io::ErrorKind::TimedOut);

        let err = MemoryCollector::new(cmd).collect_memory().unwrap_err();
        assert!(matches!(err, CollectError::Io { .. }));
        assert!(err.path().contains("print $3"));
    }

    #[test]
    fn test_empty_output_is_parse_error() {
        let err = MemoryCollector::new(scripted("", "4000"))
            .collect_memory()
            .unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
        assert!(err.path().contains("print $2"));
    }

    #[test]
    fn test_stops_after_first_failure() {
        let cmd = MockCommand::new().fail(MEMORY_SHELL, &MEMORY_TOTAL_ARGS, io::ErrorKind::NotFound);
        let collector = MemoryCollector::new(cmd);
        assert!(collector.collect_memory().is_err());
        assert_eq!(collector.executor().calls().len(), 1);
    }
}
