//! Output templates for a collected snapshot.

use std::fmt::Write;

use crate::fmt::{format_cpu_time, format_megabytes, format_mhz};
use crate::model::Snapshot;

/// How a snapshot is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Template {
    /// Human-readable sections.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Renders `snapshot` with the chosen template.
pub fn render(snapshot: &Snapshot, template: Template) -> Result<String, serde_json::Error> {
    match template {
        Template::Json => serde_json::to_string_pretty(snapshot),
        Template::Text => Ok(render_text(snapshot)),
    }
}

fn render_text(snapshot: &Snapshot) -> String {
    // Writing to a String never fails.
    let mut out = String::new();
    let clk_tck = snapshot.cpu.as_ref().map(|c| c.clk_tck);

    if let Some(cpu) = &snapshot.cpu {
        let _ = writeln!(out, "CPU");
        let _ = writeln!(out, "  cores:          {}", cpu.num_cores);
        let _ = writeln!(out, "  current clock:  {}", format_mhz(cpu.current_hi_clock));
        let _ = writeln!(out, "  max clock:      {}", format_mhz(cpu.max_clock));
        let _ = writeln!(out, "  clock ticks/s:  {}", cpu.clk_tck);
    }

    if let Some(mem) = &snapshot.memory {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "MEMORY");
        let _ = writeln!(out, "  total:      {}", format_megabytes(mem.total));
        let _ = writeln!(out, "  used:       {}", format_megabytes(mem.used));
        let _ = writeln!(out, "  available:  {}", format_megabytes(mem.available));
    }

    if let Some(processes) = &snapshot.processes {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "PROCESSES ({})", processes.len());
        let _ = write!(out, "  {:>7}  {:<16}  {:>10}  {:>10}", "PID", "NAME", "UTIME", "STIME");
        if clk_tck.is_some() {
            let _ = write!(out, "  {:>10}", "CPU");
        }
        out.push('\n');
        for p in processes {
            let _ = write!(
                out,
                "  {:>7}  {:<16}  {:>10}  {:>10}",
                p.pid, p.name, p.utime, p.stime
            );
            if let Some(hz) = clk_tck {
                let _ = write!(out, "  {:>10}", format_cpu_time(p.cpu_seconds(hz)));
            }
            out.push('\n');
        }
    }

    out
}
