//! Memory totals.

use serde::Serialize;

/// Memory figures in megabytes.
#[derive(Clone, Serialize, Debug, PartialEq, Eq, Default)]
pub struct MemoryInfo {
    pub total: i64,
    pub used: i64,
    /// Always `total - used`, saturating at the `i64` bounds.
    pub available: i64,
}

impl MemoryInfo {
    pub fn new(total: i64, used: i64) -> Self {
        Self {
            total,
            used,
            available: total.saturating_sub(used),
        }
    }
}
