//! Telemetry collectors for Linux hosts.
//!
//! This module provides infrastructure for collecting CPU, process and memory
//! telemetry from the Linux `/proc` and `/sys` filesystems and from the `free`
//! utility, with support for mocking every host dependency in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            Collector                             │
//! │  ┌────────────────┐  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │  CpuCollector  │  │ ProcessCollector │  │ MemoryCollector  │  │
//! │  │  - cpuinfo     │  │ - /proc/[pid]/   │  │ - free -m        │  │
//! │  │  - cpufreq     │  │   stat           │  │                  │  │
//! │  └───┬───────┬────┘  └────────┬─────────┘  └────────┬─────────┘  │
//! │      │       │                │                     │            │
//! │ ┌────▼─────┐ └──────┬─────────┘          ┌──────────▼────────┐   │
//! │ │ClockTicks│ ┌──────▼──────┐             │  CommandExecutor  │   │
//! │ └──────────┘ │  FileSystem │             └───────────────────┘   │
//! │              └─────────────┘                                     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Production uses `RealFs`, `SysconfClock` and `SystemCommand`; tests use
//! `MockFs`, `FixedClock` and `MockCommand`.
//!
//! # Usage
//!
//! ```
//! use statos::collector::{Collector, FixedClock, MockCommand, MockFs};
//! use statos::model::StatKind;
//!
//! let fs = MockFs::typical_system();
//! let mut collector = Collector::new(fs, FixedClock(100), MockCommand::new(), "/proc");
//! let snapshot = collector.collect_snapshot(StatKind::Cpu).unwrap();
//! assert_eq!(snapshot.cpu.unwrap().num_cores, 4);
//! ```

pub mod clock;
#[allow(clippy::module_inception)]
mod collector;
pub mod command;
mod error;
pub mod memory;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use clock::{ClockTicks, FixedClock, SysconfClock};
pub use collector::{Collector, CollectorTiming};
pub use command::{CommandExecutor, SystemCommand};
pub use error::CollectError;
pub use memory::MemoryCollector;
pub use mock::{MockCommand, MockFs};
pub use procfs::parser::ParseError;
pub use procfs::{CpuCollector, ProcessCollector};
pub use traits::{FileSystem, RealFs};
