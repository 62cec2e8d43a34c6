//! Simple-cycle enumeration for undirected graphs.
//!
//! The enumerator discovers every simple cycle of a [`UGraph`] with one
//! traversal pass per connected component. The traversal is an **iterative**
//! depth-first search that reproduces recursive backtracking with an
//! explicit stack: each pending frame carries the depth the current path
//! must have when the frame is processed, and popping a frame shallower
//! than the live path is treated as a return from deeper recursion that
//! trims the path back first. Getting that trim exact is the whole game —
//! trimming too little or too much silently corrupts cycle detection.
//!
//! Because the search backtracks over every simple path from the component
//! start, each cycle is discovered several times (at minimum once per
//! traversal direction). Discoveries are collapsed through a canonical
//! form: rotate the cycle so its minimum node comes first, then keep the
//! lexicographically smaller of the two directions. The canonical tuple is
//! the deduplication key and also the reported representative, so output
//! does not depend on which direction the traversal happened to walk.
//!
//! Cost is exponential in the worst case (it is an all-simple-paths
//! search). That is fine for the small graphs this crate classifies; see
//! `classify` for the scalability note.

use crate::graph::{NodeId, UGraph};
use std::collections::BTreeSet;

/// A simple cycle, reported as a closed walk: the canonical node sequence
/// with the first node repeated at the end. Body length is at least 3.
pub type Cycle = Vec<NodeId>;

/// A pending traversal step: visit `node`, reached from `parent`, with the
/// path expected to hold exactly `depth` nodes beforehand.
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    depth: usize,
}

/// Enumerates all simple cycles of `graph`, one representative per distinct
/// cycle, in ascending canonical order.
///
/// A forest (or an empty graph) yields an empty vector; the minimum cycle
/// length is 3 since the graph is simple.
pub fn enumerate_cycles(graph: &UGraph) -> Vec<Cycle> {
    let mut global_visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut canonical: BTreeSet<Vec<NodeId>> = BTreeSet::new();

    // One traversal per connected component, started from the smallest
    // still-unvisited node.
    for node in graph.nodes() {
        if !global_visited.contains(&node) {
            component_cycles(graph, node, &mut global_visited, &mut canonical);
        }
    }

    canonical.into_iter().map(close_walk).collect()
}

/// Walks the component containing `start`, inserting every discovered
/// cycle's canonical form into `canonical` and every reached node into
/// `global_visited`.
fn component_cycles(
    graph: &UGraph,
    start: NodeId,
    global_visited: &mut BTreeSet<NodeId>,
    canonical: &mut BTreeSet<Vec<NodeId>>,
) {
    let mut stack: Vec<Frame> = vec![Frame {
        node: start,
        parent: None,
        depth: 0,
    }];
    // The current DFS branch and its membership set. `on_path` always
    // equals the set of nodes in `path`; the trim below maintains that.
    let mut path: Vec<NodeId> = Vec::new();
    let mut on_path: BTreeSet<NodeId> = BTreeSet::new();

    while let Some(Frame {
        node,
        parent,
        depth,
    }) = stack.pop()
    {
        // A frame shallower than the live path is a return from deeper
        // recursion: unwind the branch to the frame's depth before
        // processing it.
        if depth < path.len() {
            for &trimmed in &path[depth..] {
                on_path.remove(&trimmed);
            }
            path.truncate(depth);
        }

        on_path.insert(node);
        global_visited.insert(node);
        path.push(node);

        for neighbor in graph.neighbors(node) {
            if !on_path.contains(&neighbor) {
                stack.push(Frame {
                    node: neighbor,
                    parent: Some(node),
                    depth: depth + 1,
                });
            } else if parent != Some(neighbor) {
                // Back edge to an ancestor that is not the edge we came in
                // on: the cycle body is the path slice from that ancestor
                // through the current node.
                if let Some(pos) = path.iter().position(|&p| p == neighbor) {
                    canonical.insert(canonical_form(&path[pos..]));
                }
            }
        }
    }
}

/// Canonical form of a cycle body: rotated so the minimum node is first,
/// in the lexicographically smaller of the two traversal directions.
///
/// Both orientations of the same cycle map to the same form, which is what
/// collapses mirror-image discoveries to a single entry.
fn canonical_form(body: &[NodeId]) -> Vec<NodeId> {
    let forward = rotate_to_min(body.to_vec());
    let mut backward: Vec<NodeId> = body.to_vec();
    backward.reverse();
    let backward = rotate_to_min(backward);
    forward.min(backward)
}

/// Rotates a cycle body so its minimum node comes first.
fn rotate_to_min(mut body: Vec<NodeId>) -> Vec<NodeId> {
    if let Some(min_index) = body
        .iter()
        .enumerate()
        .min_by_key(|&(_, n)| n)
        .map(|(i, _)| i)
    {
        body.rotate_left(min_index);
    }
    body
}

/// Appends the closing repetition of the first node, turning a canonical
/// body into the reported closed walk.
fn close_walk(mut body: Vec<NodeId>) -> Cycle {
    if let Some(&first) = body.first() {
        body.push(first);
    }
    body
}
