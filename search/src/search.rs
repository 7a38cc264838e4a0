//! Search entry points and the expansion loop.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::contract::SearchSpace;
use crate::cost::Cost;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{reconstruct, FoundPath, Predecessor};
use crate::policy::SearchPolicy;
use crate::stats::{SearchStats, Termination};

/// Result of a bounded search.
///
/// `path` is `Some` exactly when `termination` is
/// [`Termination::GoalReached`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRun<N, C, L> {
    /// The cheapest path to the first goal popped, if any.
    pub path: Option<FoundPath<N, C, L>>,
    /// Counters collected during the run.
    pub stats: SearchStats,
    /// Why the run stopped.
    pub termination: Termination,
}

impl<N, C, L> SearchRun<N, C, L> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == Termination::GoalReached
    }
}

/// Find a cheapest path from `start` to any node satisfying `is_goal`,
/// starting from a cost of [`Cost::zero`].
///
/// See [`dijkstra_from`].
pub fn dijkstra<N, C, L, F, I, G>(start: N, expand: F, is_goal: G) -> Option<FoundPath<N, C, L>>
where
    N: Eq + Hash + Clone,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C, L)>,
    G: FnMut(&N) -> bool,
{
    dijkstra_from(start, C::zero(), expand, is_goal)
}

/// Find a cheapest path from `start` to any node satisfying `is_goal`.
///
/// `expand` yields `(neighbor, edge_cost, label)` for a node. It is called at
/// most once per node. `is_goal` is called on every node popped from the
/// frontier, `start` included, before that node is expanded.
///
/// Returns `None` if the frontier empties without a goal. If `start` is a
/// goal the result is `[start]` with cost `start_cost` and no steps, and
/// `expand` is never called.
///
/// With non-negative edge costs the returned cost is minimal over all paths
/// to all goal nodes. Among equally cheap goals or paths the choice is
/// arbitrary. Negative edge costs are outside the contract. Panics raised by
/// `expand` or `is_goal` propagate unchanged.
pub fn dijkstra_from<N, C, L, F, I, G>(
    start: N,
    start_cost: C,
    expand: F,
    is_goal: G,
) -> Option<FoundPath<N, C, L>>
where
    N: Eq + Hash + Clone,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C, L)>,
    G: FnMut(&N) -> bool,
{
    run(start, start_cost, expand, is_goal, None).path
}

/// Run a policy-bounded search.
///
/// Identical to [`dijkstra_from`] except that the run stops with
/// [`Termination::ExpansionBudgetExceeded`] once `policy.max_expansions`
/// nodes have been expanded and another non-goal node is popped. A goal
/// popped at that point is still returned.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
/// No collaborator is called in that case.
pub fn search<N, C, L, F, I, G>(
    start: N,
    start_cost: C,
    expand: F,
    is_goal: G,
    policy: &SearchPolicy,
) -> Result<SearchRun<N, C, L>, SearchError>
where
    N: Eq + Hash + Clone,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C, L)>,
    G: FnMut(&N) -> bool,
{
    policy.validate()?;
    Ok(run(start, start_cost, expand, is_goal, policy.max_expansions))
}

/// Run a policy-bounded search over a [`SearchSpace`], from a zero cost.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
pub fn search_space<S>(
    space: &S,
    start: S::Node,
    policy: &SearchPolicy,
) -> Result<SearchRun<S::Node, S::Cost, S::Label>, SearchError>
where
    S: SearchSpace + ?Sized,
{
    search(
        start,
        S::Cost::zero(),
        |node: &S::Node| space.expand(node),
        |node: &S::Node| space.is_goal(node),
        policy,
    )
}

fn run<N, C, L, F, I, G>(
    start: N,
    start_cost: C,
    mut expand: F,
    mut is_goal: G,
    max_expansions: Option<u64>,
) -> SearchRun<N, C, L>
where
    N: Eq + Hash + Clone,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C, L)>,
    G: FnMut(&N) -> bool,
{
    let _span = tracing::debug_span!("dijkstra", ?max_expansions).entered();

    let mut frontier: Frontier<C, N> = Frontier::new();
    let mut predecessors: HashMap<N, Predecessor<N, C, L>> = HashMap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut stats = SearchStats::default();

    frontier.push(start_cost, start.clone());

    let (termination, goal) = loop {
        let Some((cost, node)) = frontier.pop() else {
            break (Termination::FrontierExhausted, None);
        };

        if is_goal(&node) {
            break (Termination::GoalReached, Some((node, cost)));
        }

        // A cheaper entry for this node was already expanded.
        if settled.contains(&node) {
            stats.stale_pops += 1;
            continue;
        }

        if max_expansions.is_some_and(|max| stats.expansions >= max) {
            break (Termination::ExpansionBudgetExceeded, None);
        }

        settled.insert(node.clone());
        stats.expansions += 1;
        tracing::trace!(expansion = stats.expansions, "expand");

        for (neighbor, edge_cost, label) in expand(&node) {
            // Settled costs are final; this also keeps `start` record-free.
            if settled.contains(&neighbor) {
                continue;
            }
            let new_cost = cost.clone() + edge_cost.clone();
            let improves = match predecessors.get(&neighbor) {
                Some(existing) => new_cost < existing.cost,
                None => true,
            };
            if improves {
                stats.relaxations += 1;
                predecessors.insert(
                    neighbor.clone(),
                    Predecessor {
                        from: node.clone(),
                        edge_cost,
                        label,
                        cost: new_cost.clone(),
                    },
                );
                frontier.push(new_cost, neighbor);
            }
        }
    };

    stats.frontier_pushes = frontier.pushed();
    stats.frontier_high_water = u64::try_from(frontier.high_water()).unwrap_or(u64::MAX);
    drop(frontier);
    drop(settled);

    tracing::debug!(
        termination = termination.as_str(),
        expansions = stats.expansions,
        stale_pops = stats.stale_pops,
        relaxations = stats.relaxations,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    let path = goal.map(|(node, cost)| reconstruct(start, node, cost, predecessors));

    SearchRun {
        path,
        stats,
        termination,
    }
}
