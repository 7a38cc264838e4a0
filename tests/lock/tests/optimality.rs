//! Property tests: search cost equals the brute-force optimum on small
//! random graphs, and every returned path is internally consistent.

use lock_tests::{adjacency, brute_force_min_cost, check_path, Adjacency};
use proptest::prelude::*;
use wayfind_search::{dijkstra, dijkstra_from, Cost};

const MAX_NODES: usize = 7;

/// `(node_count, edges, goal_mask)` with every edge inside `0..node_count`.
fn graph_strategy<C: std::fmt::Debug + Clone + 'static>(
    cost: impl Strategy<Value = C> + Clone + 'static,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, C)>, Vec<bool>)> {
    (2..=MAX_NODES).prop_flat_map(move |n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, cost.clone()), 0..=3 * n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn search<C: Cost>(
    adj: &Adjacency<C>,
    start_cost: C,
    goals: &[bool],
) -> Option<wayfind_search::FoundPath<usize, C, usize>> {
    dijkstra_from(
        0_usize,
        start_cost,
        |n: &usize| adj[*n].clone(),
        |n: &usize| goals[*n],
    )
}

proptest! {
    #[test]
    fn integer_costs_match_brute_force((n, edges, goals) in graph_strategy(0_u32..20)) {
        let adj = adjacency(n, &edges);
        let expected = brute_force_min_cost(&adj, 0, &|v: usize| goals[v]);
        let found = search(&adj, 0, &goals);

        prop_assert_eq!(found.as_ref().map(|p| p.cost), expected);
        if let Some(path) = found {
            prop_assert!(goals[*path.goal()]);
            prop_assert_eq!(check_path(&path, &0, 0), Ok(()));
            for step in &path.steps {
                // The label is the index of the edge that was taken.
                let (from, to, cost) = edges[step.label];
                prop_assert_eq!((from, to, cost), (step.from, step.to, step.edge_cost));
            }
        }
    }

    #[test]
    fn dyadic_float_costs_match_brute_force(
        (n, edges, goals) in graph_strategy((0_u32..40).prop_map(|k| f64::from(k) / 4.0))
    ) {
        let adj = adjacency(n, &edges);
        let expected = brute_force_min_cost(&adj, 0, &|v: usize| goals[v]);
        let found = search(&adj, 0.0, &goals);

        prop_assert_eq!(found.as_ref().map(|p| p.cost), expected);
        if let Some(path) = found {
            prop_assert_eq!(check_path(&path, &0, 0.0), Ok(()));
        }
    }

    #[test]
    fn start_cost_shifts_the_result((n, edges, goals) in graph_strategy(0_u64..50), offset in 0_u64..1000) {
        let adj = adjacency(n, &edges);
        let base = search(&adj, 0, &goals).map(|p| p.cost);
        let shifted = search(&adj, offset, &goals).map(|p| p.cost);
        prop_assert_eq!(shifted, base.map(|c| c + offset));
    }

    #[test]
    fn goal_at_start_is_trivial((n, edges, _goals) in graph_strategy(0_u32..20)) {
        let adj = adjacency(n, &edges);
        let path = dijkstra(0_usize, |v: &usize| adj[*v].clone(), |v: &usize| *v == 0);
        let path = path.expect("start is a goal");
        prop_assert!(path.is_trivial());
        prop_assert_eq!(path.cost, 0);
    }
}
