//! Randomized scheduling properties.
//!
//! Traces draw registers from a small range so that dependencies, renames and
//! independent runs all occur frequently.

use ilpsim_core::config::IssueModel;
use proptest::prelude::*;

use crate::common::builder::TraceBuilder;
use crate::common::harness::{critical, direct, machine, schedule, windowed};

fn arb_trace() -> impl Strategy<Value = TraceBuilder> {
    prop::collection::vec((0i64..8, 0i64..8, 0i64..8, 1u32..6), 0..40).prop_map(|insts| {
        insts
            .into_iter()
            .fold(TraceBuilder::new(), |b, (d, s1, s2, lat)| b.inst(d, s1, s2, lat))
    })
}

/// Shorthand bound: 0 is unbounded.
fn arb_bound() -> impl Strategy<Value = usize> {
    0usize..5
}

fn arb_model() -> impl Strategy<Value = IssueModel> {
    prop_oneof![Just(IssueModel::Windowed), Just(IssueModel::Direct)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn schedule_between_critical_path_and_serial(
        trace in arb_trace(),
        fetch in arb_bound(),
        units in arb_bound(),
        model in arb_model(),
    ) {
        let lower = critical(&trace);
        let mut graph = trace.graph();
        let upper = graph.total_latency();
        let cycles = schedule(&mut graph, machine(fetch, units, model));
        prop_assert!(lower <= cycles, "{cycles} < critical path {lower}");
        prop_assert!(cycles <= upper, "{cycles} > serial {upper}");
    }

    #[test]
    fn critical_path_between_longest_latency_and_serial(trace in arb_trace()) {
        let mut graph = trace.graph();
        let cp = ilpsim_core::core::critical_path(&mut graph);
        prop_assert!(graph.max_latency() <= cp);
        prop_assert!(cp <= graph.total_latency());
    }

    #[test]
    fn unbounded_equals_critical_path(trace in arb_trace()) {
        let expected = critical(&trace);
        prop_assert_eq!(windowed(&trace, 0, 0), expected);
        prop_assert_eq!(direct(&trace, 0, 0), expected);
    }

    #[test]
    fn single_unit_equals_serial(trace in arb_trace(), fetch in arb_bound()) {
        let serial = trace.graph().total_latency();
        prop_assert_eq!(windowed(&trace, fetch, 1), serial);
        prop_assert_eq!(direct(&trace, fetch, 1), serial);
    }

    #[test]
    fn rescheduling_is_idempotent(
        trace in arb_trace(),
        fetch in arb_bound(),
        units in arb_bound(),
        model in arb_model(),
    ) {
        let mut graph = trace.graph();
        let config = machine(fetch, units, model);
        let first = schedule(&mut graph, config);
        prop_assert_eq!(schedule(&mut graph, config), first);
    }

    #[test]
    fn edges_point_forward(trace in arb_trace()) {
        let graph = trace.graph();
        for node in graph.nodes() {
            prop_assert!(node.producers.iter().all(|p| *p < node.id));
            prop_assert!(node.producers.len() <= 2);
        }
    }
}
