//! Graph coloring search with step tracing.
//!
//! Nodes are colored in plain index order with colors tried in ascending
//! order, recording every assignment, rejected attempt, and backtrack as a
//! [`Step`]. Index order is deliberate: no degree or saturation heuristic,
//! since the trace is meant to show naive backtracking as-is.

use rustc_hash::FxHashSet;

use crate::graph::Graph;
use crate::trace::{Step, StepAction};

/// Per-node neighbor sets, derived once from the edge list.
///
/// Each undirected edge registers in both endpoints' sets, so the result is
/// symmetric regardless of how the input edges are directed. Edges naming a
/// node id outside the node set are skipped rather than rejected.
fn build_adjacency(graph: &Graph) -> Vec<FxHashSet<usize>> {
    let node_count = graph.nodes.len();
    let mut adjacency: Vec<FxHashSet<usize>> = vec![FxHashSet::default(); node_count];

    for edge in &graph.edges {
        if edge.source < node_count && edge.target < node_count {
            adjacency[edge.source].insert(edge.target);
            adjacency[edge.target].insert(edge.source);
        }
    }

    adjacency
}

/// Checks whether `color` can be assigned to `node` without matching a neighbor.
fn is_safe(
    adjacency: &[FxHashSet<usize>],
    colors: &[Option<usize>],
    node: usize,
    color: usize,
) -> bool {
    !adjacency[node]
        .iter()
        .any(|&neighbor| colors[neighbor] == Some(color))
}

/// Traces a first-solution search for a coloring of `graph` with at most
/// `color_budget` colors.
///
/// An empty node set completes vacuously; a zero budget fails without a
/// single assignment attempt. Either way the trace itself is the result:
/// success is the presence of a `Complete` step, failure its absence.
pub fn solve(graph: &Graph, color_budget: usize) -> Vec<Step> {
    let adjacency = build_adjacency(graph);
    let mut colors: Vec<Option<usize>> = vec![None; graph.nodes.len()];
    let mut steps = Vec::new();

    steps.push(Step::record(
        &colors,
        Some(0),
        StepAction::Assign,
        "Starting the graph coloring algorithm".to_string(),
    ));

    search(&adjacency, &mut colors, &mut steps, 0, color_budget);

    steps
}

/// Recursive per-node assignment; returns whether a full coloring was reached.
fn search(
    adjacency: &[FxHashSet<usize>],
    colors: &mut [Option<usize>],
    steps: &mut Vec<Step>,
    node: usize,
    color_budget: usize,
) -> bool {
    if node >= colors.len() {
        steps.push(Step::record(
            colors,
            None,
            StepAction::Complete,
            "Graph coloring complete! All nodes have been assigned colors.".to_string(),
        ));
        return true;
    }

    for color in 0..color_budget {
        if is_safe(adjacency, colors, node, color) {
            colors[node] = Some(color);
            steps.push(Step::record(
                colors,
                Some(node),
                StepAction::Assign,
                format!("Coloring node {} with color {}", node + 1, color + 1),
            ));

            if search(adjacency, colors, steps, node + 1, color_budget) {
                return true;
            }

            colors[node] = None;
            steps.push(Step::record(
                colors,
                Some(node),
                StepAction::Unassign,
                format!(
                    "Color {} doesn't work for node {}, trying another color",
                    color + 1,
                    node + 1
                ),
            ));
        } else {
            // a rejected same-node attempt, not a backtrack
            steps.push(Step::record(
                colors,
                Some(node),
                StepAction::Conflict,
                format!(
                    "Cannot color node {} with color {} due to conflicts",
                    node + 1,
                    color + 1
                ),
            ));
        }
    }

    steps.push(Step::record(
        colors,
        node.checked_sub(1),
        StepAction::Backtrack,
        format!("No valid color found for node {}, backtracking", node + 1),
    ));

    false
}

/// Formats a color assignment as one line per node.
pub fn format_assignment(assignment: &[Option<usize>]) -> String {
    let mut output = String::new();
    for (node, slot) in assignment.iter().enumerate() {
        match slot {
            Some(color) => output.push_str(&format!("node {} -> color {}\n", node + 1, color + 1)),
            None => output.push_str(&format!("node {} -> uncolored\n", node + 1)),
        }
    }
    output
}
