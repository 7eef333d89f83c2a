//! Scripted command executor for tests.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use crate::collector::command::{CommandExecutor, display_command};

/// Returns canned output keyed by the full command line.
///
/// Commands without a scripted response fail with `ErrorKind::NotFound`.
#[derive(Debug, Default)]
pub struct MockCommand {
    responses: HashMap<String, Result<Vec<u8>, io::ErrorKind>>,
    calls: Mutex<Vec<String>>,
}

impl MockCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful run.
    pub fn respond(mut self, program: &str, args: &[&str], output: impl Into<Vec<u8>>) -> Self {
        self.responses
            .insert(display_command(program, args), Ok(output.into()));
        self
    }

    /// Scripts a failed run.
    pub fn fail(mut self, program: &str, args: &[&str], kind: io::ErrorKind) -> Self {
        self.responses
            .insert(display_command(program, args), Err(kind));
        self
    }

    /// Command lines executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandExecutor for MockCommand {
    fn execute(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>> {
        let line = display_command(program, args);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }
        match self.responses.get(&line) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(kind)) => Err(io::Error::new(*kind, format!("scripted failure: {}", line))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no scripted response for {}", line),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_command_responses() {
        let cmd = MockCommand::new()
            .respond("free", &["-m"], "ok")
            .fail("sh", &["-c", "exit 1"], io::ErrorKind::Other);

        assert_eq!(cmd.execute("free", &["-m"]).unwrap(), b"ok");
        assert!(cmd.execute("sh", &["-c", "exit 1"]).is_err());
        assert_eq!(
            cmd.execute("vmstat", &[]).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(cmd.calls(), vec!["free -m", "sh -c \"exit 1\"", "vmstat"]);
    }
}
