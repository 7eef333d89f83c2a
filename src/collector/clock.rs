//! Host clock-ticks-per-second capability.

/// Fallback USER_HZ when the host cannot be queried.
pub const DEFAULT_CLK_TCK: i64 = 100;

/// Source of the platform's clock ticks per second.
pub trait ClockTicks: Send + Sync {
    /// Returns clock ticks per second. Never fails.
    fn clock_ticks(&self) -> i64;
}

/// Queries `sysconf(_SC_CLK_TCK)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysconfClock;

impl ClockTicks for SysconfClock {
    fn clock_ticks(&self) -> i64 {
        // SAFETY: sysconf has no side effects and is thread-safe for this name.
        let hz = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        if hz > 0 { hz as i64 } else { DEFAULT_CLK_TCK }
    }
}

/// Returns a fixed value. Used in tests and for replaying captured trees.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl ClockTicks for FixedClock {
    fn clock_ticks(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysconf_clock_is_positive() {
        assert!(SysconfClock.clock_ticks() > 0);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(250).clock_ticks(), 250);
    }
}
