use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use tracing::{debug, warn};

/// Contract a state space must satisfy for [`best_first_search`].
///
/// One flat capability trait at the seam; actions are state-valued, so a
/// successor already names the state it leads to.
pub trait SearchProblem {
    type State: Copy + Eq + Hash;

    fn start(&self) -> Self::State;

    fn is_goal(&self, state: Self::State) -> bool;

    /// Appends every successor of `state` to `out`.
    fn expand(&self, state: Self::State, out: &mut Vec<Self::State>);

    /// Cost of the `from` → `to` edge. Must be non-negative; strictly
    /// positive except for the designated entry edge.
    fn step_cost(&self, from: Self::State, to: Self::State) -> f64;

    /// Admissible estimate of the remaining cost to any goal.
    fn heuristic(&self, state: Self::State) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Expansion cap; the state space here is small and bounded, so hitting
    /// this indicates a malformed problem rather than a hard riff.
    pub max_expansions: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: 200_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<S> {
    /// Start-to-goal state sequence, start included.
    pub states: Vec<S>,
    /// Accumulated path cost at the goal.
    pub cost: f64,
    /// Nodes expanded before the goal was popped.
    pub expanded: usize,
}

/// Frontier entry. The heap is a max-heap, so the ordering is reversed to
/// pop the lowest f first; `seq` is a monotone insertion counter that makes
/// ties deterministic without requiring an order on states.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    seq: u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Arena-allocated search node; children hold the parent's index, never a
/// pointer, so the tree needs no shared ownership.
#[derive(Debug, Clone, Copy)]
struct Node<S> {
    state: S,
    parent: Option<usize>,
    g: f64,
}

/// A* over `problem`. Returns `None` when the frontier is exhausted without
/// reaching a goal, or when the expansion cap trips.
pub fn best_first_search<P: SearchProblem>(
    problem: &P,
    limits: SearchLimits,
) -> Option<SearchOutcome<P::State>> {
    let mut arena: Vec<Node<P::State>> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut best_g: HashMap<P::State, f64> = HashMap::new();
    let mut seq = 0u64;

    let start = problem.start();
    arena.push(Node {
        state: start,
        parent: None,
        g: 0.0,
    });
    best_g.insert(start, 0.0);
    open.push(OpenEntry {
        f: problem.heuristic(start),
        seq,
        node: 0,
    });

    let mut expanded = 0usize;
    let mut successors: Vec<P::State> = Vec::new();

    while let Some(entry) = open.pop() {
        let node = arena[entry.node];

        // Dominated entries survive in the heap; drop them on pop instead
        // of paying for a decrease-key operation.
        if best_g
            .get(&node.state)
            .is_some_and(|&recorded| recorded < node.g)
        {
            continue;
        }

        if problem.is_goal(node.state) {
            debug!(expanded, cost = node.g, "search reached goal");
            return Some(SearchOutcome {
                states: reconstruct(&arena, entry.node),
                cost: node.g,
                expanded,
            });
        }

        expanded += 1;
        if expanded > limits.max_expansions {
            warn!(limit = limits.max_expansions, "search expansion cap hit");
            return None;
        }

        successors.clear();
        problem.expand(node.state, &mut successors);
        for &next in &successors {
            let g = node.g + problem.step_cost(node.state, next);
            if best_g.get(&next).is_some_and(|&recorded| recorded <= g) {
                continue;
            }
            best_g.insert(next, g);
            arena.push(Node {
                state: next,
                parent: Some(entry.node),
                g,
            });
            seq += 1;
            open.push(OpenEntry {
                f: g + problem.heuristic(next),
                seq,
                node: arena.len() - 1,
            });
        }
    }

    None
}

fn reconstruct<S: Copy>(arena: &[Node<S>], goal: usize) -> Vec<S> {
    let mut states = Vec::new();
    let mut cursor = Some(goal);
    while let Some(index) = cursor {
        states.push(arena[index].state);
        cursor = arena[index].parent;
    }
    states.reverse();
    states
}
