//! Collectors for the Linux `/proc` and `/sys` filesystems.
//!
//! This module provides parsers and collectors for reading CPU and process
//! information from kernel-exposed pseudo-files.

pub mod cpu;
pub mod parser;
pub mod process;

pub use cpu::CpuCollector;
pub use process::ProcessCollector;
