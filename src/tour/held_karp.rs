//! Held-Karp dynamic programming for the TSP.
//!
//! # Algorithm
//!
//! Let `others` be the non-start nodes, numbered `0..m`. For every subset
//! `mask` of `others` and every `j ∈ mask`, `dp[mask][j]` is the cheapest
//! walk that leaves the start, visits exactly `mask` and ends at `j`. The
//! start is implicitly in every subset, so the table has `m · 2^m` cells
//! instead of `n · 2^n`.
//!
//! ```text
//! dp[{j}][j]          = d(start, j)
//! dp[mask ∪ {k}][k]   = min over j ∈ mask of dp[mask][j] + d(j, k)
//! answer              = min over j of dp[all][j] + d(j, start)
//! ```
//!
//! A parallel table stores the `j` that produced each minimum so the tour
//! can be walked back from the best final node.
//!
//! # Complexity
//!
//! O(n² · 2ⁿ) time, O(n · 2ⁿ) space. The table is indexed by a `usize`
//! bitmask with `u8` back-pointers; [`HELD_KARP_MAX_NODES`] bounds memory at
//! roughly 100 MB.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the Society for Industrial and Applied
//! Mathematics* 10(1), 196-210.

use super::{closed_route, others};
use crate::distance::CostMatrix;
use crate::models::{Graph, Route};

/// Largest graph [`held_karp`] accepts.
pub const HELD_KARP_MAX_NODES: usize = 20;

/// Finds a minimum-distance closed tour with the Held-Karp recurrence.
///
/// # Panics
///
/// Panics if the graph has more than [`HELD_KARP_MAX_NODES`] nodes.
///
/// # Examples
///
/// ```
/// use u_routesim::models::{Edge, Graph, Node};
/// use u_routesim::tour::held_karp;
///
/// let mut g = Graph::from_parts(
///     ["A", "B", "C", "D"].map(|id| Node::new(id, 0.0, 0.0)),
///     Vec::new(),
/// )
/// .unwrap();
/// for (a, b, d) in [("A", "B", 10.0), ("B", "C", 10.0), ("C", "D", 10.0),
///                   ("D", "A", 10.0), ("A", "C", 15.0), ("B", "D", 15.0)] {
///     g.add_bidirectional_edge(Edge::new(a, b, d, d)).unwrap();
/// }
///
/// let tour = held_karp(&g, "A");
/// assert_eq!(tour.distance(), 40.0);
/// assert_eq!(tour.nodes().first(), tour.nodes().last());
/// ```
pub fn held_karp(graph: &Graph, start: &str) -> Route {
    let Some(s) = graph.index_of(start) else {
        return Route::empty();
    };
    let n = graph.node_count();
    assert!(
        n <= HELD_KARP_MAX_NODES,
        "held_karp supports at most {HELD_KARP_MAX_NODES} nodes, got {n}"
    );
    if n == 1 {
        return Route::trivial(graph, s);
    }

    let matrix = CostMatrix::from_graph(graph);
    let others = others(n, s);
    let m = others.len();
    let full = (1usize << m) - 1;
    let cell = |mask: usize, j: usize| mask * m + j;

    let mut dp = vec![f64::INFINITY; (full + 1) * m];
    let mut parent: Vec<Option<u8>> = vec![None; (full + 1) * m];

    for (j, &node) in others.iter().enumerate() {
        if matrix.has_edge(s, node) {
            dp[cell(1 << j, j)] = matrix.get(s, node);
        }
    }

    for mask in 1..=full {
        for j in 0..m {
            if mask & (1 << j) == 0 {
                continue;
            }
            let here = dp[cell(mask, j)];
            if here.is_infinite() {
                continue;
            }
            for k in 0..m {
                if mask & (1 << k) != 0 || !matrix.has_edge(others[j], others[k]) {
                    continue;
                }
                let next = mask | (1 << k);
                let candidate = here + matrix.get(others[j], others[k]);
                if candidate < dp[cell(next, k)] {
                    dp[cell(next, k)] = candidate;
                    parent[cell(next, k)] = Some(j as u8);
                }
            }
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (j, &node) in others.iter().enumerate() {
        let here = dp[cell(full, j)];
        if here.is_infinite() || !matrix.has_edge(node, s) {
            continue;
        }
        let total = here + matrix.get(node, s);
        if best.map_or(true, |(b, _)| total < b) {
            best = Some((total, j));
        }
    }
    let Some((_, last)) = best else {
        return Route::empty();
    };

    let mut order = Vec::with_capacity(m);
    let mut mask = full;
    let mut j = last;
    loop {
        order.push(others[j]);
        match parent[cell(mask, j)] {
            Some(p) => {
                mask &= !(1 << j);
                j = usize::from(p);
            }
            None => break,
        }
    }
    order.reverse();

    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(s);
    sequence.extend(order);
    sequence.push(s);
    closed_route(graph, &matrix, &sequence)
}
