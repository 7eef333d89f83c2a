//! In-memory stand-ins for the host, used by tests.

mod command;
mod filesystem;
mod scenarios;

pub use command::MockCommand;
pub use filesystem::MockFs;
