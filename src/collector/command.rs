//! External command execution capability.

use std::io::{self, Read};
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

/// Default time limit for a single external command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Runs an external program and returns its standard output.
pub trait CommandExecutor: Send + Sync {
    /// Runs `program` with `args`.
    ///
    /// Fails if the program cannot be started, exits unsuccessfully,
    /// or does not finish in time.
    fn execute(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>>;
}

/// Runs commands on the host with a time limit.
#[derive(Debug, Clone, Copy)]
pub struct SystemCommand {
    timeout: Duration,
}

impl Default for SystemCommand {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl SystemCommand {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn timed_out(&self, program: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::TimedOut,
            format!("{} did not finish within {:?}", program, self.timeout),
        )
    }
}

/// Kills the child's whole process group, then reaps the child.
///
/// The child is spawned as a group leader, so its pid is the group id and
/// descendants still holding stdout die with it.
fn kill_process_group(child: &mut Child) {
    if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: kill has no memory-safety preconditions; a stale group id only yields ESRCH.
        unsafe {
            libc::kill(-pgid, libc::SIGKILL);
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}

impl CommandExecutor for SystemCommand {
    fn execute(&self, program: &str, args: &[&str]) -> io::Result<Vec<u8>> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()?;

        // Drain stdout on a separate thread so a chatty child cannot block on a full pipe.
        // The result comes back over a channel so waiting for EOF is bounded too:
        // a backgrounded descendant may keep the pipe open after the shell exits.
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut out = Vec::new();
            let _ = tx.send(stdout.read_to_end(&mut out).map(|_| out));
        });

        let start = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if start.elapsed() >= self.timeout {
                kill_process_group(&mut child);
                return Err(self.timed_out(program));
            }
            thread::sleep(POLL_INTERVAL);
        };

        let remaining = self.timeout.saturating_sub(start.elapsed());
        let output = match rx.recv_timeout(remaining) {
            Ok(result) => result?,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                kill_process_group(&mut child);
                return Err(self.timed_out(program));
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("stdout reader exited without a result"));
            }
        };
        trace!(program, bytes = output.len(), elapsed = ?start.elapsed(), "command finished");

        if !status.success() {
            return Err(io::Error::other(format!("{} exited with {}", program, status)));
        }
        Ok(output)
    }
}

/// Renders a command line for logs and error messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
