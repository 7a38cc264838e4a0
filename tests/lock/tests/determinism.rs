//! In-process determinism and budget behaviour.
//!
//! Repeated runs over the same inputs must produce identical paths, stats
//! and report digests. A policy-bounded search with a large enough budget
//! must agree with the unbounded entry point.

use lock_tests::{diamond, fixture_reports, WALLED_MAP};
use wayfind_harness::worlds::GridWorld;
use wayfind_search::search::search;
use wayfind_search::{dijkstra_from, search_space, SearchPolicy, SearchSpace, Termination};

#[test]
fn repeated_runs_are_identical() {
    let (world, start) = GridWorld::parse(WALLED_MAP).unwrap();
    let first = search_space(&world, start, &SearchPolicy::default()).unwrap();
    for _ in 0..10 {
        let again = search_space(&world, start, &SearchPolicy::default()).unwrap();
        assert_eq!(again.path, first.path);
        assert_eq!(again.stats, first.stats);
        assert_eq!(again.termination, first.termination);
    }
    assert_eq!(first.path.unwrap().cost, 7);
}

#[test]
fn fixture_report_digests_are_stable() {
    let baseline = fixture_reports(&SearchPolicy::default()).unwrap();
    for _ in 0..5 {
        let again = fixture_reports(&SearchPolicy::default()).unwrap();
        assert_eq!(again, baseline);
    }
    let terminations: Vec<_> = baseline.iter().map(|r| r.termination).collect();
    assert_eq!(
        terminations,
        vec![
            Termination::GoalReached,
            Termination::GoalReached,
            Termination::GoalReached,
            Termination::FrontierExhausted,
        ]
    );
    for report in &baseline {
        assert!(report.digest.as_str().starts_with("sha256:"));
        assert_eq!(report.policy_digest, baseline[0].policy_digest);
    }
}

#[test]
fn generous_budget_agrees_with_unbounded_search() {
    let (world, start) = GridWorld::parse(WALLED_MAP).unwrap();
    let unbounded = dijkstra_from(
        start,
        0,
        |n| world.expand(n),
        |n| world.is_goal(n),
    );
    let bounded = search(
        start,
        0,
        |n| world.expand(n),
        |n| world.is_goal(n),
        &SearchPolicy::with_max_expansions(10_000),
    )
    .unwrap();
    assert_eq!(bounded.termination, Termination::GoalReached);
    assert_eq!(bounded.path, unbounded);
}

#[test]
fn tight_budget_stops_before_the_goal() {
    let run = search_space(&diamond(), "S", &SearchPolicy::with_max_expansions(1)).unwrap();
    assert_eq!(run.termination, Termination::ExpansionBudgetExceeded);
    assert!(run.path.is_none());
    assert_eq!(run.stats.expansions, 1);
}

#[test]
fn budget_equal_to_expansions_needed_still_finds_goal() {
    // S, A and B are expanded before G is popped.
    let run = search_space(&diamond(), "S", &SearchPolicy::with_max_expansions(3)).unwrap();
    assert_eq!(run.termination, Termination::GoalReached);
    assert_eq!(run.path.unwrap().cost, 3);
    assert_eq!(run.stats.expansions, 3);
}

#[test]
fn expansions_never_exceed_the_budget() {
    let (world, start) = GridWorld::parse(WALLED_MAP).unwrap();
    for max in 1..40 {
        let run = search_space(&world, start, &SearchPolicy::with_max_expansions(max)).unwrap();
        assert!(run.stats.expansions <= max, "budget {max}: {:?}", run.stats);
        if run.termination == Termination::ExpansionBudgetExceeded {
            assert_eq!(run.stats.expansions, max);
            assert!(run.path.is_none());
        }
    }
}
