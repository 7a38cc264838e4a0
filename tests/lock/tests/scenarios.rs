//! End-to-end search scenarios through the public API.
//!
//! Covers the closure entry points (`dijkstra`, `dijkstra_from`) and the
//! `SearchSpace` entry point against the same small graphs.

use std::cell::Cell;
use std::collections::HashMap;

use lock_tests::{check_path, diamond};
use wayfind_search::{dijkstra, dijkstra_from, search_space, SearchPolicy, Termination};

type Edges = HashMap<&'static str, Vec<(&'static str, u32)>>;

fn edges(list: &[(&'static str, &'static str, u32)]) -> Edges {
    let mut map = Edges::new();
    for &(from, to, cost) in list {
        map.entry(from).or_default().push((to, cost));
    }
    map
}

fn expand_of(graph: &Edges) -> impl FnMut(&&'static str) -> Vec<(&'static str, u32, ())> + '_ {
    move |n| {
        graph
            .get(n)
            .map(|out| out.iter().map(|&(to, c)| (to, c, ())).collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Closure entry points
// ---------------------------------------------------------------------------

#[test]
fn diamond_takes_the_cheap_detour() {
    let graph = edges(&[
        ("S", "A", 1),
        ("S", "B", 4),
        ("A", "B", 1),
        ("A", "G", 5),
        ("B", "G", 1),
    ]);
    let path = dijkstra("S", expand_of(&graph), |n| *n == "G").expect("G is reachable");
    assert_eq!(path.nodes, vec!["S", "A", "B", "G"]);
    assert_eq!(path.cost, 3);
    check_path(&path, &"S", 0).unwrap();
}

#[test]
fn goal_at_start_returns_without_expanding() {
    let expanded = Cell::new(0);
    let path = dijkstra(
        "S",
        |_: &&'static str| {
            expanded.set(expanded.get() + 1);
            vec![("A", 1_u32, ())]
        },
        |n| *n == "S",
    )
    .expect("start is a goal");
    assert_eq!(path.nodes, vec!["S"]);
    assert_eq!(path.cost, 0);
    assert!(path.steps.is_empty());
    assert!(path.is_trivial());
    assert_eq!(expanded.get(), 0);
}

#[test]
fn unreachable_goal_is_absent() {
    let graph = edges(&[("S", "A", 1), ("A", "S", 1), ("G", "S", 1)]);
    assert!(dijkstra("S", expand_of(&graph), |n| *n == "G").is_none());
}

#[test]
fn equal_cost_routes_return_cost_two() {
    let graph = edges(&[("S", "A", 1), ("S", "B", 1), ("A", "G", 1), ("B", "G", 1)]);
    let path = dijkstra("S", expand_of(&graph), |n| *n == "G").expect("G is reachable");
    assert_eq!(path.cost, 2);
    assert_eq!(path.nodes.len(), 3);
    assert!(path.nodes[1] == "A" || path.nodes[1] == "B");
    check_path(&path, &"S", 0).unwrap();
}

#[test]
fn start_cost_offsets_the_total() {
    let graph = edges(&[("S", "A", 2), ("A", "G", 3)]);
    let path = dijkstra_from("S", 10, expand_of(&graph), |n| *n == "G").unwrap();
    assert_eq!(path.cost, 15);
    check_path(&path, &"S", 10).unwrap();
}

#[test]
fn cycles_and_self_loops_terminate() {
    let graph = edges(&[
        ("S", "S", 1),
        ("S", "A", 1),
        ("A", "S", 1),
        ("A", "A", 0),
        ("A", "B", 2),
        ("B", "A", 1),
    ]);
    assert!(dijkstra("S", expand_of(&graph), |n| *n == "G").is_none());
    let path = dijkstra("S", expand_of(&graph), |n| *n == "B").unwrap();
    assert_eq!(path.cost, 3);
}

#[test]
fn zero_cost_edges_are_followed() {
    let graph = edges(&[("S", "A", 0), ("A", "B", 0), ("B", "G", 0), ("S", "G", 1)]);
    let path = dijkstra("S", expand_of(&graph), |n| *n == "G").unwrap();
    assert_eq!(path.cost, 0);
    assert_eq!(path.nodes, vec!["S", "A", "B", "G"]);
}

#[test]
fn parallel_edges_use_the_cheapest() {
    let path = dijkstra(
        "S",
        |n: &&'static str| {
            if *n == "S" {
                vec![("G", 5_u32, "slow"), ("G", 2, "fast"), ("G", 7, "slower")]
            } else {
                vec![]
            }
        },
        |n| *n == "G",
    )
    .unwrap();
    assert_eq!(path.cost, 2);
    assert_eq!(path.steps[0].label, "fast");
}

#[test]
fn nearest_of_several_goals_wins() {
    let graph = edges(&[("S", "far", 9), ("S", "A", 1), ("A", "near", 2)]);
    let path = dijkstra("S", expand_of(&graph), |n| *n == "far" || *n == "near").unwrap();
    assert_eq!(path.goal(), &"near");
    assert_eq!(path.cost, 3);
}

// ---------------------------------------------------------------------------
// SearchSpace entry point
// ---------------------------------------------------------------------------

#[test]
fn table_graph_matches_closure_result() {
    let run = search_space(&diamond(), "S", &SearchPolicy::default()).unwrap();
    assert_eq!(run.termination, Termination::GoalReached);
    let path = run.path.expect("goal reached");
    assert_eq!(path.nodes, vec!["S", "A", "B", "G"]);
    assert_eq!(path.cost, 3);
    let labels: Vec<_> = path.steps.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["S->A", "A->B", "B->G"]);
    check_path(&path, &"S", 0).unwrap();
}

#[test]
fn every_node_is_expanded_at_most_once() {
    let graph = edges(&[
        ("S", "A", 1),
        ("S", "B", 1),
        ("A", "C", 1),
        ("B", "C", 1),
        ("C", "D", 1),
        ("A", "D", 5),
    ]);
    let mut seen: HashMap<&'static str, u32> = HashMap::new();
    let mut inner = expand_of(&graph);
    let result = dijkstra(
        "S",
        |n: &&'static str| {
            *seen.entry(*n).or_default() += 1;
            inner(n)
        },
        |_| false,
    );
    assert!(result.is_none());
    assert_eq!(seen.len(), 5);
    assert!(seen.values().all(|&count| count == 1), "{seen:?}");
}
