//! Tests for run statistics: derived ratios, the text report and JSON export.

use ilpsim_core::config::IssueModel;
use ilpsim_core::stats::{RunMode, SimStats};

use crate::common::builder::TraceBuilder;

#[test]
fn test_stats_default() {
    let stats = SimStats::default();
    assert_eq!(stats.mode, RunMode::CriticalPath);
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions, 0);
    assert_eq!(stats.ipc(), 0.0);
    assert_eq!(stats.speedup(), 0.0);
}

#[test]
fn test_stats_for_graph_shape() {
    let graph = TraceBuilder::chain(&[2, 3, 4]).graph();
    let stats = SimStats::for_graph(&graph, RunMode::Windowed);
    assert_eq!(stats.mode, RunMode::Windowed);
    assert_eq!(stats.instructions, 3);
    assert_eq!(stats.edges, 2);
    assert_eq!(stats.sources, 1);
    assert_eq!(stats.sinks, 1);
    assert_eq!(stats.total_latency, 9);
    assert_eq!(stats.cycles, 0);
}

#[test]
fn test_ipc_and_speedup() {
    let graph = TraceBuilder::independent(&[2, 2, 2, 2]).graph();
    let mut stats = SimStats::for_graph(&graph, RunMode::Windowed);
    stats.cycles = 4;
    assert!((stats.ipc() - 1.0).abs() < f64::EPSILON);
    assert!((stats.speedup() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_observe_keeps_peak() {
    let mut stats = SimStats::default();
    stats.observe_window(3);
    stats.observe_window(1);
    stats.observe_units(2);
    stats.observe_units(5);
    stats.observe_units(0);
    assert_eq!(stats.peak_window, 3);
    assert_eq!(stats.peak_busy_units, 5);
}

#[test]
fn test_run_mode_from_issue_model() {
    assert_eq!(RunMode::from(IssueModel::Windowed), RunMode::Windowed);
    assert_eq!(RunMode::from(IssueModel::Direct), RunMode::Direct);
    assert_eq!(RunMode::CriticalPath.to_string(), "critical_path");
}

#[test]
fn test_report_critical_path_sections() {
    let mut stats = SimStats::default();
    stats.cycles = 9;
    stats.critical_path = 9;
    let report = stats.to_string();
    assert!(report.contains("ILP SCHEDULING STATISTICS"));
    assert!(report.contains("DEPENDENCY GRAPH"));
    assert!(report.contains("mode                     critical_path"));
    assert!(!report.contains("OCCUPANCY"));
    assert!(!report.contains("STALLS"));
}

#[test]
fn test_report_scheduler_sections() {
    let mut stats = SimStats::default();
    stats.mode = RunMode::Direct;
    stats.cycles = 10;
    stats.fetch_blocked_cycles = 5;
    stats.stalls_data = 7;
    let report = stats.to_string();
    assert!(report.contains("OCCUPANCY"));
    assert!(report.contains("STALLS"));
    assert!(report.contains("stalls.data            7 node-cycles"));
    assert!(report.contains("(50.00%)"));
}

#[test]
fn test_json_export() {
    let mut stats = SimStats::default();
    stats.mode = RunMode::Windowed;
    stats.cycles = 42;
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["mode"], "windowed");
    assert_eq!(value["cycles"], 42);
    assert!(value.get("start_time").is_none());
    assert!(value.get("peak_window").is_some());
}
