//! Structural classification of an undirected graph against the tree
//! characterizations.
//!
//! The classifier runs the cycle enumerator on the unmodified graph once,
//! then probes subcyclicity by temporarily joining every non-adjacent node
//! pair: add the edge, re-enumerate, record whether exactly one cycle
//! exists, remove the edge. The probe sweep is a critical section over the
//! shared graph; nothing else may observe the graph while a probe edge is
//! in place. Total cost is O(pairs × enumeration), which is acceptable for
//! the small graphs this tool targets and is deliberately not optimized.

use crate::cycle::{Cycle, enumerate_cycles};
use crate::graph::{NodeId, UGraph};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of testing a graph against a pair of tree-characterizing
/// predicates. `FirstOnly`/`SecondOnly` report which of the pair held when
/// the characterization as a whole failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Characterization {
    /// Both predicates hold: the graph is a tree by this characterization.
    IsTree,
    /// Both predicates hold but the graph matches a known counterexample
    /// pattern, so the characterization does not apply.
    KnownException,
    FirstOnly,
    SecondOnly,
    Neither,
}

/// Everything the classifier decides about a graph. Built once per
/// [`classify`] call and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// All simple cycles of the unmodified graph, canonical and ascending,
    /// each closed by a repetition of its first node.
    pub cycles: Vec<Cycle>,
    pub node_count: usize,
    pub edge_count: usize,
    /// No simple cycles exist.
    pub acyclic: bool,
    /// `node_count == edge_count + 1`, computed globally. A disconnected
    /// graph whose totals happen to satisfy the formula is still reported
    /// as tree-structured; that matches the check this tool implements.
    pub tree_structure: bool,
    /// Joining any non-adjacent pair creates exactly one cycle.
    pub subcyclic: bool,
    /// The graph matches the known counterexample pattern to the
    /// tree+subcyclic characterization.
    pub is_exception: bool,
    /// Acyclic ∧ tree-structured.
    pub acyclic_and_tree: Characterization,
    /// Tree-structured ∧ subcyclic, gated by the exception pattern.
    pub tree_and_subcyclic: Characterization,
    /// Acyclic ∧ subcyclic.
    pub acyclic_and_subcyclic: Characterization,
}

/// Classifies `graph` against the tree characterizations.
///
/// Takes the graph mutably because the subcyclicity probe inserts and
/// removes temporary edges; on return the graph is exactly as it was
/// passed in.
pub fn classify(graph: &mut UGraph) -> ClassificationResult {
    let cycles = enumerate_cycles(graph);
    let acyclic = cycles.is_empty();

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let tree_structure = node_count == edge_count + 1;

    let subcyclic = check_subcyclic(graph);

    // The exception pattern only matters where the tree+subcyclic
    // characterization would otherwise fire.
    let is_exception = subcyclic && tree_structure && matches_exception(graph);

    let tree_and_subcyclic = if tree_structure && subcyclic && is_exception {
        Characterization::KnownException
    } else {
        characterize(tree_structure, subcyclic)
    };

    ClassificationResult {
        cycles,
        node_count,
        edge_count,
        acyclic,
        tree_structure,
        subcyclic,
        is_exception,
        acyclic_and_tree: characterize(acyclic, tree_structure),
        tree_and_subcyclic,
        acyclic_and_subcyclic: characterize(acyclic, subcyclic),
    }
}

fn characterize(first: bool, second: bool) -> Characterization {
    match (first, second) {
        (true, true) => Characterization::IsTree,
        (true, false) => Characterization::FirstOnly,
        (false, true) => Characterization::SecondOnly,
        (false, false) => Characterization::Neither,
    }
}

/// A temporarily inserted probe edge, removed again on drop so the graph
/// is restored on every exit path of the sweep.
struct ProbeEdge<'a> {
    graph: &'a mut UGraph,
    u: NodeId,
    v: NodeId,
}

impl<'a> ProbeEdge<'a> {
    fn insert(graph: &'a mut UGraph, u: NodeId, v: NodeId) -> Self {
        graph.add_edge(u, v);
        Self { graph, u, v }
    }

    fn graph(&self) -> &UGraph {
        self.graph
    }
}

impl Drop for ProbeEdge<'_> {
    fn drop(&mut self) {
        self.graph.remove_edge(self.u, self.v);
    }
}

/// Probes every unordered non-adjacent node pair, in ascending order.
///
/// The full sweep runs even after a failing probe so that every probe is
/// logged; subcyclicity is the conjunction over all probes. A complete
/// graph has nothing to probe and is subcyclic only in the trivial cases
/// of one or two nodes.
fn check_subcyclic(graph: &mut UGraph) -> bool {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    let mut subcyclic = true;
    let mut probed_any = false;

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let (u, v) = (nodes[i], nodes[j]);
            if graph.has_edge(u, v) {
                continue;
            }
            probed_any = true;
            let probe = ProbeEdge::insert(graph, u, v);
            let cycle_count = enumerate_cycles(probe.graph()).len();
            debug!("probe edge {} -- {}: {} cycles", u, v, cycle_count);
            if cycle_count != 1 {
                subcyclic = false;
            }
        }
    }

    subcyclic && (probed_any || nodes.len() == 1 || nodes.len() == 2)
}

/// Whether the component decomposition matches the known counterexample
/// pattern: exactly one isolated vertex, or exactly one isolated edge,
/// together with exactly one triangle component.
fn matches_exception(graph: &UGraph) -> bool {
    let signatures = component_signatures(graph);
    let count_of = |sig: (usize, usize)| signatures.iter().filter(|&&s| s == sig).count();
    (count_of((1, 0)) == 1 || count_of((2, 1)) == 1) && count_of((3, 3)) == 1
}

/// `(node_count, edge_count)` per connected component, via an iterative
/// DFS sweep. Edges are seen once from each endpoint, hence the halving.
fn component_signatures(graph: &UGraph) -> Vec<(usize, usize)> {
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    let mut signatures = Vec::new();

    for start in graph.nodes() {
        if visited.contains(&start) {
            continue;
        }
        let mut stack = vec![start];
        let mut nodes = 0usize;
        let mut half_edges = 0usize;
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            nodes += 1;
            for neighbor in graph.neighbors(current) {
                half_edges += 1;
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        signatures.push((nodes, half_edges / 2));
    }

    signatures
}
