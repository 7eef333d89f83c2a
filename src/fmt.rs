//! Formatting helpers for the text report.

/// Format a megabyte count as human-readable size.
///
/// `"512 MiB"`, `"15.5 GiB"`, `"1.2 TiB"`
pub fn format_megabytes(mb: i64) -> String {
    let f = mb as f64;
    if mb.abs() >= 1024 * 1024 {
        format!("{:.1} TiB", f / (1024.0 * 1024.0))
    } else if mb.abs() >= 1024 {
        format!("{:.1} GiB", f / 1024.0)
    } else {
        format!("{} MiB", mb)
    }
}

/// Format CPU seconds as `"3m 5.20s"`, `"2h 3m"` or `"0.42s"`.
pub fn format_cpu_time(secs: f64) -> String {
    if secs < 60.0 {
        return format!("{:.2}s", secs.max(0.0));
    }
    let whole = secs as u64;
    if whole < 3600 {
        format!("{}m {:.2}s", whole / 60, secs - (whole / 60 * 60) as f64)
    } else if whole < 86400 {
        format!("{}h {}m", whole / 3600, (whole % 3600) / 60)
    } else {
        format!("{}d {}h", whole / 86400, (whole % 86400) / 3600)
    }
}

/// Format a clock speed in MHz, `"-"` when unknown.
pub fn format_mhz(mhz: f32) -> String {
    if mhz <= 0.0 {
        "-".to_string()
    } else {
        format!("{:.0} MHz", mhz)
    }
}
