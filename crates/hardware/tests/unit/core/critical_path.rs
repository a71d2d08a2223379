//! Critical Path Evaluator Tests.

use ilpsim_core::core::{DependencyGraph, NodeId, critical_chain, critical_path};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::TraceBuilder;
use crate::common::harness::critical;

#[test]
fn chain_sums_latencies() {
    assert_eq!(critical(&TraceBuilder::chain(&[2, 3, 4])), 9);
}

#[test]
fn independent_takes_max() {
    assert_eq!(critical(&TraceBuilder::independent(&[2, 3, 4])), 4);
}

#[test]
fn empty_trace_is_zero() {
    assert_eq!(critical(&TraceBuilder::new()), 0);
}

#[test]
fn longest_branch_wins() {
    // #0 -> #1 (5) -> #3 and #0 -> #2 (2) -> #3
    let trace = TraceBuilder::new()
        .inst(1, 0, 0, 1)
        .inst(2, 1, 1, 5)
        .inst(3, 1, 1, 2)
        .inst(4, 2, 3, 1);
    assert_eq!(critical(&trace), 7);
}

#[test]
fn renamed_register_breaks_chain() {
    // #2 reads r1 from #1 (latency 1), not from #0 (latency 5).
    let trace = TraceBuilder::new()
        .inst(1, 0, 0, 5)
        .inst(1, 0, 0, 1)
        .inst(2, 1, 1, 1);
    assert_eq!(critical(&trace), 5);
}

#[test]
fn memoizes_every_node() {
    let mut graph = TraceBuilder::new()
        .inst(1, 0, 0, 1)
        .inst(2, 1, 1, 5)
        .inst(3, 1, 1, 2)
        .inst(4, 2, 3, 1)
        .graph();
    let _ = critical_path(&mut graph);
    let memo: Vec<Option<u64>> = graph.nodes().iter().map(|n| n.best_path_from_here).collect();
    assert_eq!(memo, vec![Some(7), Some(6), Some(3), Some(1)]);
}

#[test]
fn repeated_evaluation_is_stable() {
    let mut graph = TraceBuilder::chain(&[4, 1, 3]).graph();
    let first = critical_path(&mut graph);
    let second = critical_path(&mut graph);
    graph.reset();
    let third = critical_path(&mut graph);
    assert_eq!((first, second, third), (8, 8, 8));
}

#[test]
fn chain_of_longest_path() {
    let mut graph = TraceBuilder::new()
        .inst(1, 0, 0, 1) // #0
        .inst(2, 1, 1, 5) // #1
        .inst(3, 1, 1, 2) // #2
        .inst(4, 2, 3, 1) // #3
        .inst(5, 0, 0, 3) // #4, independent
        .graph();
    assert_eq!(critical_chain(&mut graph), vec![NodeId(0), NodeId(1), NodeId(3)]);
}

#[rstest]
#[case(&[1], 1)]
#[case(&[7, 1], 8)]
#[case(&[1, 1, 1, 1, 1, 1, 1, 1], 8)]
fn chain_scenarios(#[case] latencies: &[u32], #[case] expected: u64) {
    assert_eq!(critical(&TraceBuilder::chain(latencies)), expected);
}

#[test]
fn wide_fan_out_fan_in() {
    let mut graph = DependencyGraph::new();
    let root = graph.push_node(2);
    let mids: Vec<_> = (1..=20).map(|l| graph.push_node(l)).collect();
    let sink = graph.push_node(1);
    for &m in &mids {
        graph.add_edge(root, m).unwrap();
        graph.add_edge(m, sink).unwrap();
    }
    assert_eq!(critical_path(&mut graph), 2 + 20 + 1);
}
