//! End-to-end collection against mocked host dependencies.

use std::path::Path;

use statos::collector::memory::{MEMORY_SHELL, MEMORY_TOTAL_ARGS, MEMORY_USED_ARGS};
use statos::collector::{
    CollectError, Collector, CpuCollector, FileSystem, FixedClock, MockCommand, MockFs,
    ProcessCollector,
};
use statos::model::StatKind;
use statos::report::{Template, render};

fn memory_command(total: &str, used: &str) -> MockCommand {
    MockCommand::new()
        .respond(MEMORY_SHELL, &MEMORY_TOTAL_ARGS, total)
        .respond(MEMORY_SHELL, &MEMORY_USED_ARGS, used)
}

#[test]
fn full_snapshot_renders_as_json() {
    let mut collector = Collector::new(
        MockFs::typical_system(),
        FixedClock(100),
        memory_command("16000\n", "4000\n"),
        "/proc",
    );
    let snapshot = collector.collect_snapshot(StatKind::All).unwrap();

    let json = render(&snapshot, Template::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cpu"]["num_cores"], 4);
    assert_eq!(value["cpu"]["max_clock"], 4200.0);
    assert_eq!(value["memory"]["total"], 16000);
    assert_eq!(value["memory"]["used"], 4000);
    assert_eq!(value["memory"]["available"], 12000);
    assert_eq!(value["processes"].as_array().unwrap().len(), 3);
    assert_eq!(value["processes"][2]["name"], "bash");
}

#[test]
fn memory_failure_returns_no_partial_snapshot() {
    let mut collector = Collector::new(
        MockFs::typical_system(),
        FixedClock(100),
        memory_command("16000\n", "n/a\n"),
        "/proc",
    );
    let err = collector.collect_snapshot(StatKind::All).unwrap_err();
    assert!(matches!(err, CollectError::Parse { .. }));
}

#[test]
fn mixed_proc_listing_yields_numeric_directories_only() {
    let collector = ProcessCollector::new(MockFs::with_mixed_entries(), "/proc");
    let pids: Vec<String> = collector
        .list_processes()
        .unwrap()
        .into_iter()
        .map(|p| p.pid)
        .collect();
    assert_eq!(pids, vec!["1", "42"]);
}

#[test]
fn captured_proc_tree_can_be_replayed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cpuinfo"),
        "processor\t: 0\ncpu MHz\t\t: 2200.000\n\nprocessor\t: 1\ncpu MHz\t\t: 2900.500\n\n",
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("314")).unwrap();
    std::fs::write(
        dir.path().join("314").join("stat"),
        MockFs::stat_line(314, "postgres", 77, 12),
    )
    .unwrap();

    let fs = MockFs::from_snapshot(dir.path()).unwrap();
    assert!(fs.is_dir(Path::new("/proc/314")));

    let summary = CpuCollector::new(fs.clone(), FixedClock(100), "/proc")
        .collect_summary()
        .unwrap();
    assert_eq!(summary.num_cores, 2);
    assert_eq!(summary.current_hi_clock, 2900.5);
    assert_eq!(summary.max_clock, 0.0);

    let processes = ProcessCollector::new(fs, "/proc")
        .collect_all_processes()
        .unwrap();
    assert_eq!(processes.len(), 1);
    assert_eq!(processes[0].name, "postgres");
    assert_eq!(processes[0].utime, 77);
}

#[test]
fn cpu_collector_can_be_redirected_to_another_cpufreq_file() {
    let mut fs = MockFs::without_max_freq();
    fs.add_file("/sys/devices/system/cpu/cpu3/cpufreq/scaling_max_freq", "2800000\n");

    let cpu = CpuCollector::new(fs.clone(), FixedClock(100), "/proc")
        .with_max_freq_path("/sys/devices/system/cpu/cpu3/cpufreq/scaling_max_freq");
    let mut collector = Collector::new(fs, FixedClock(100), MockCommand::new(), "/proc")
        .with_cpu_collector(cpu);

    let snapshot = collector.collect_snapshot(StatKind::Cpu).unwrap();
    let cpu = snapshot.cpu.unwrap();
    assert_eq!(cpu.max_clock, 2800.0);
    assert_eq!(cpu.num_cores, 4);
}
