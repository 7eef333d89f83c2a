//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` and `/sys` states
//! for testing various system conditions.

use super::filesystem::MockFs;
use crate::collector::procfs::cpu::DEFAULT_MAX_FREQ_PATH;

const CPUINFO_4_CORES: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
stepping\t: 10
microcode\t: 0xf0
cpu MHz\t\t: 2100.000
cache size\t: 8192 KB
physical id\t: 0
siblings\t: 4
core id\t\t: 0
cpu cores\t: 4
apicid\t\t: 0
initial apicid\t: 0
fpu\t\t: yes
fpu_exception\t: yes
cpuid level\t: 22
wp\t\t: yes
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr
vmx flags\t: vnmi preemption_timer invvpid ept_x_only
bugs\t\t: cpu_meltdown spectre_v1 spectre_v2
bogomips\t: 4199.88
clflush size\t: 64
cache_alignment\t: 64
address sizes\t: 39 bits physical, 48 bits virtual
power management:

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
cpu MHz\t\t: 3400.125
core id\t\t: 1

processor\t: 2
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
cpu MHz\t\t: 800.000
core id\t\t: 2

processor\t: 3
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz
cpu MHz\t\t: 1995.312
core id\t\t: 3

";

impl MockFs {
    /// Formats a 52-field `/proc/[pid]/stat` line.
    pub fn stat_line(pid: u32, name: &str, utime: i64, stime: i64) -> String {
        format!(
            "{pid} ({name}) S 1 {pid} {pid} 0 -1 4194560 1200 0 3 0 {utime} {stime} 0 0 20 0 1 0 5000 12345678 600 18446744073709551615 1 1 0 0 0 0 0 4096 0 0 0 0 17 1 0 0 0 0 0 0 0 0 0 0 0 0 0\n"
        )
    }

    /// Creates a typical 4-core host with a few processes.
    ///
    /// Includes: systemd (PID 1), sshd (PID 812), bash (PID 1000),
    /// plus the non-process entries every real `/proc` has.
    pub fn typical_system() -> Self {
        let mut fs = Self::without_max_freq();
        fs.add_file(DEFAULT_MAX_FREQ_PATH, "4200000\n");
        fs
    }

    /// Same as [`MockFs::typical_system`] on a host without cpufreq.
    pub fn without_max_freq() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/cpuinfo", CPUINFO_4_CORES);
        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_dir("/proc/sys/kernel");
        fs.add_dir("/proc/self");

        fs.add_process(1, &Self::stat_line(1, "systemd", 350, 820));
        fs.add_process(812, &Self::stat_line(812, "sshd", 12, 30));
        fs.add_process(1000, &Self::stat_line(1000, "bash", 4200, 1300));

        fs
    }

    /// A `/proc` whose entries mix process and non-process names.
    ///
    /// Only `1` and `42` are process directories; `77` is a plain file.
    pub fn with_mixed_entries() -> Self {
        let mut fs = Self::new();
        fs.add_process(1, &Self::stat_line(1, "init", 10, 20));
        fs.add_process(42, &Self::stat_line(42, "kworker/0:1", 0, 7));
        fs.add_dir("/proc/abc");
        fs.add_dir("/proc/3.5");
        fs.add_file("/proc/77", "");
        fs
    }

    /// A `/proc` that lists no processes at all.
    pub fn empty_proc() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/uptime", "1.00 1.00\n");
        fs.add_dir("/proc/sys");
        fs
    }

    /// A process whose stat line has been truncated.
    pub fn with_truncated_stat() -> Self {
        let mut fs = Self::new();
        fs.add_process(1, &Self::stat_line(1, "init", 10, 20));
        fs.add_process(5, "5 (broken) S 1 5 5\n");
        fs
    }

    /// A process whose name contains a space, which splits into 53 fields.
    pub fn with_spaced_name() -> Self {
        let mut fs = Self::new();
        fs.add_process(5000, &Self::stat_line(5000, "Web Content", 100, 10));
        fs
    }
}
