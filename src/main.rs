//! statos - prints a point-in-time telemetry report.
//!
//! Usage:
//!   statos                       # all stats, text template
//!   statos --stat cpu            # CPU summary only
//!   statos --template json       # machine-readable output
//!   statos -v                    # debug logging to stderr

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use statos::collector::{Collector, RealFs, SysconfClock, SystemCommand};
use statos::model::StatKind;
use statos::report::{Template, render};

const PROC_PATH: &str = "/proc";
const FILE_READ_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StatArg {
    Cpu,
    Processes,
    Memory,
    All,
}

impl From<StatArg> for StatKind {
    fn from(arg: StatArg) -> Self {
        match arg {
            StatArg::Cpu => StatKind::Cpu,
            StatArg::Processes => StatKind::Processes,
            StatArg::Memory => StatKind::Memory,
            StatArg::All => StatKind::All,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TemplateArg {
    Text,
    Json,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Text => Template::Text,
            TemplateArg::Json => Template::Json,
        }
    }
}

/// Point-in-time CPU, process and memory telemetry.
#[derive(Parser)]
#[command(name = "statos", about = "Point-in-time system telemetry", version)]
struct Args {
    /// Which stat to read.
    #[arg(short, long, value_enum, default_value = "all")]
    stat: StatArg,

    /// Output template.
    #[arg(short, long, value_enum, default_value = "text")]
    template: TemplateArg,

    /// Time limit for the memory reporting command, in seconds.
    #[arg(long, default_value = "5", value_name = "SECS")]
    command_timeout: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("statos={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let kind = StatKind::from(args.stat);
    debug!(
        "statos {} stat={:?} template={:?} command_timeout={}s",
        env!("CARGO_PKG_VERSION"),
        args.stat,
        args.template,
        args.command_timeout
    );

    let fs = RealFs::new().with_read_timeout(FILE_READ_TIMEOUT);
    let executor = SystemCommand::new(Duration::from_secs(args.command_timeout));
    let mut collector = Collector::new(fs, SysconfClock, executor, PROC_PATH);

    let snapshot = match collector.collect_snapshot(kind) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("collection failed: {}", e);
            std::process::exit(1);
        }
    };

    match render(&snapshot, args.template.into()) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            error!("failed to render report: {}", e);
            std::process::exit(1);
        }
    }
}
