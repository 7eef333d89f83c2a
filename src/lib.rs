//! statos - point-in-time hardware and process telemetry for Linux.
//!
//! This library provides:
//! - `collector` — CPU, process and memory collectors over `/proc`, `/sys` and `free`
//! - `model` — typed records produced by the collectors
//! - `report` — text and JSON output templates
//! - `fmt` — formatting helpers for the text template

pub mod collector;
pub mod fmt;
pub mod model;
pub mod report;
