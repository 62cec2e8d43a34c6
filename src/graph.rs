//! Adjacency-set model of a simple undirected graph.
//!
//! `UGraph` is the substrate everything else mutates and queries: the cycle
//! enumerator walks it, the classifier perturbs it (temporary edge insertion
//! and removal) to probe structural properties. Nodes are dense numeric ids;
//! `LabeledGraph` bridges between the integer-or-string labels used by input
//! files and the numeric ids used by the algorithms.
//!
//! Invariants: adjacency is symmetric (`v ∈ adj[u] ⟺ u ∈ adj[v]`), no
//! self-loops, boolean edge multiplicity. Nodes with no neighbors keep an
//! empty adjacency entry, so `node_count` is the number of entries and
//! `edge_count` is half the sum of adjacency-set sizes.
//!
//! Storage is `BTreeMap`/`BTreeSet` so node and neighbor iteration is always
//! ascending by id. Cycle enumeration inherits this as its deterministic
//! traversal order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A node identifier. Dense ids assigned by insertion order; the numeric
/// order doubles as the total order used for cycle canonicalization.
pub type NodeId = usize;

/// A simple undirected graph as a map from node to its adjacency set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UGraph {
    adj: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl UGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no neighbors. Idempotent: an existing node keeps
    /// its adjacency set.
    pub fn add_node(&mut self, n: NodeId) {
        self.adj.entry(n).or_default();
    }

    /// Adds the undirected edge `u -- v`, creating either endpoint if
    /// absent. Idempotent; self-loops are ignored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if u == v {
            return;
        }
        self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
    }

    /// Removes the edge `u -- v` from both adjacency sets. No-op if the
    /// edge is absent; the endpoints themselves are never removed.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) {
        if let Some(set) = self.adj.get_mut(&u) {
            set.remove(&v);
        }
        if let Some(set) = self.adj.get_mut(&v) {
            set.remove(&u);
        }
    }

    /// Whether the edge `u -- v` exists.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adj.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Number of nodes, isolated ones included.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges. Each edge appears in two adjacency
    /// sets, so this is half the total adjacency size.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(|set| set.len()).sum::<usize>() / 2
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.keys().copied()
    }

    /// Neighbors of `n` in ascending id order. Empty for unknown nodes.
    pub fn neighbors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.get(&n).into_iter().flatten().copied()
    }
}

/// A node label as it appears in an input file: an integer or a string.
///
/// Integers order before strings, so mixed-label graphs still have a total
/// order for display purposes. The algorithms themselves only ever see
/// numeric [`NodeId`]s.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A graph with labeled nodes, mapping between input-file labels and the
/// numeric ids used by the cycle and classification algorithms.
///
/// Ids are assigned by insertion order, which makes them deterministic for
/// a given input file.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    labels: Vec<Label>,
    ids: HashMap<Label, NodeId>,
    graph: UGraph,
}

impl LabeledGraph {
    /// Creates an empty labeled graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given label, returning its id. An existing
    /// label keeps its id.
    pub fn add_node(&mut self, label: Label) -> NodeId {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        self.graph.add_node(id);
        id
    }

    /// Adds an undirected edge between two already-declared labels.
    /// Returns `None` (and leaves the graph untouched) if either label is
    /// unknown; the loader turns that into an eager validation error.
    pub fn add_edge(&mut self, u: &Label, v: &Label) -> Option<(NodeId, NodeId)> {
        let u_id = self.id_of(u)?;
        let v_id = self.id_of(v)?;
        self.graph.add_edge(u_id, v_id);
        Some((u_id, v_id))
    }

    /// The id for a label, if declared.
    pub fn id_of(&self, label: &Label) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// The label for an id.
    pub fn label_of(&self, id: NodeId) -> &Label {
        &self.labels[id]
    }

    /// The underlying graph.
    pub fn graph(&self) -> &UGraph {
        &self.graph
    }

    /// Mutable access for the classifier's probe sweep.
    pub fn graph_mut(&mut self) -> &mut UGraph {
        &mut self.graph
    }

    /// Renders a walk of node ids as ` -> `-joined labels.
    pub fn render_walk(&self, walk: &[NodeId]) -> String {
        walk.iter()
            .map(|&id| self.label_of(id).to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = UGraph::new();
        g.add_edge(0, 1);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut g = UGraph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = UGraph::new();
        g.add_edge(3, 3);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(3, 3));
    }

    #[test]
    fn test_isolated_node_counts() {
        let mut g = UGraph::new();
        g.add_node(7);
        g.add_node(7);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.neighbors(7).count(), 0);
    }

    #[test]
    fn test_remove_edge_keeps_nodes() {
        let mut g = UGraph::new();
        g.add_edge(0, 1);
        g.remove_edge(0, 1);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
        // Removing again is a no-op
        g.remove_edge(0, 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = UGraph::new();
        g.add_edge(5, 9);
        g.add_edge(5, 1);
        g.add_edge(5, 3);
        let order: Vec<NodeId> = g.neighbors(5).collect();
        assert_eq!(order, vec![1, 3, 9]);
    }

    #[test]
    fn test_labeled_graph_assigns_dense_ids() {
        let mut g = LabeledGraph::new();
        let a = g.add_node(Label::Text("a".into()));
        let b = g.add_node(Label::Int(2));
        let a2 = g.add_node(Label::Text("a".into()));
        assert_eq!((a, b), (0, 1));
        assert_eq!(a, a2);
        assert_eq!(g.label_of(1), &Label::Int(2));
    }

    #[test]
    fn test_labeled_graph_rejects_unknown_edge_endpoint() {
        let mut g = LabeledGraph::new();
        g.add_node(Label::Int(1));
        assert!(g.add_edge(&Label::Int(1), &Label::Int(2)).is_none());
        assert_eq!(g.graph().edge_count(), 0);
    }

    #[test]
    fn test_render_walk() {
        let mut g = LabeledGraph::new();
        g.add_node(Label::Int(1));
        g.add_node(Label::Text("mid".into()));
        assert_eq!(g.render_walk(&[0, 1, 0]), "1 -> mid -> 1");
    }
}
