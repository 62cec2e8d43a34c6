//! Human-readable rendering of a [`ClassificationResult`].
//!
//! The report has an acyclicity section, a dendricity (node/edge count)
//! section, a subcyclicity section, then one section per tree
//! characterization. `verbose` controls whether the full cycle
//! listings are spelled out or summarized to a count.

use crate::classify::{Characterization, ClassificationResult};
use crate::graph::LabeledGraph;
use std::fmt::Write;

/// Renders the full classification report.
pub fn render(result: &ClassificationResult, graph: &LabeledGraph, verbose: bool) -> String {
    let mut out = String::new();

    writeln!(out, "Acyclicity check:").unwrap();
    out.push_str(&cycles_summary(result, graph, verbose));
    if result.acyclic {
        writeln!(out, "The graph is acyclic.").unwrap();
    } else {
        writeln!(out, "The graph is cyclic.").unwrap();
    }

    writeln!(out, "Dendricity check:").unwrap();
    writeln!(
        out,
        "Nodes: {}, edges: {}",
        result.node_count, result.edge_count
    )
    .unwrap();
    if result.tree_structure {
        writeln!(out, "The graph is tree-structured.").unwrap();
    } else {
        writeln!(out, "The graph is not tree-structured.").unwrap();
    }

    writeln!(out, "Subcyclicity check:").unwrap();
    if result.subcyclic {
        writeln!(out, "The graph is subcyclic.").unwrap();
    } else {
        writeln!(out, "The graph is not subcyclic.").unwrap();
    }

    writeln!(out, "Characterization: acyclic + tree-structured").unwrap();
    writeln!(
        out,
        "{}",
        characterization_line(
            result.acyclic_and_tree,
            "acyclic",
            "tree-structured",
            "The graph is acyclic and tree-structured, hence a tree.",
        )
    )
    .unwrap();

    writeln!(
        out,
        "Characterization: tree-structured + subcyclic (up to the two known exceptions)"
    )
    .unwrap();
    if result.tree_and_subcyclic == Characterization::KnownException {
        writeln!(out, "The graph is one of the known exceptions.").unwrap();
    } else {
        writeln!(
            out,
            "{}",
            characterization_line(
                result.tree_and_subcyclic,
                "tree-structured",
                "subcyclic",
                "The graph is tree-structured and subcyclic, hence a tree.",
            )
        )
        .unwrap();
    }

    writeln!(out, "Characterization: acyclic + subcyclic").unwrap();
    writeln!(
        out,
        "{}",
        characterization_line(
            result.acyclic_and_subcyclic,
            "acyclic",
            "subcyclic",
            "The graph is acyclic and subcyclic, hence a tree.",
        )
    )
    .unwrap();

    out
}

fn cycles_summary(result: &ClassificationResult, graph: &LabeledGraph, verbose: bool) -> String {
    if result.cycles.is_empty() {
        return "The graph contains no cycles.\n".to_string();
    }
    if verbose {
        let listing: Vec<String> = result
            .cycles
            .iter()
            .map(|cycle| graph.render_walk(cycle))
            .collect();
        format!(
            "The graph contains {} simple cycle(s): {}\n",
            result.cycles.len(),
            listing.join(", ")
        )
    } else {
        format!(
            "The graph contains {} simple cycle(s).\n",
            result.cycles.len()
        )
    }
}

fn characterization_line(
    outcome: Characterization,
    first: &str,
    second: &str,
    both_line: &str,
) -> String {
    match outcome {
        Characterization::IsTree | Characterization::KnownException => both_line.to_string(),
        Characterization::FirstOnly => {
            format!("The graph is {first}, but not {second}.")
        }
        Characterization::SecondOnly => {
            format!("The graph is {second}, but not {first}.")
        }
        Characterization::Neither => {
            format!("The graph is neither {first} nor {second}.")
        }
    }
}

/// The `--json` projection: the classification result with cycles rendered
/// through their labels instead of internal ids.
pub fn to_json(result: &ClassificationResult, graph: &LabeledGraph) -> serde_json::Value {
    let cycles: Vec<Vec<String>> = result
        .cycles
        .iter()
        .map(|cycle| {
            cycle
                .iter()
                .map(|&id| graph.label_of(id).to_string())
                .collect()
        })
        .collect();

    serde_json::json!({
        "node_count": result.node_count,
        "edge_count": result.edge_count,
        "cycles": cycles,
        "acyclic": result.acyclic,
        "tree_structure": result.tree_structure,
        "subcyclic": result.subcyclic,
        "is_exception": result.is_exception,
        "acyclic_and_tree": result.acyclic_and_tree,
        "tree_and_subcyclic": result.tree_and_subcyclic,
        "acyclic_and_subcyclic": result.acyclic_and_subcyclic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::graph::Label;

    fn triangle() -> LabeledGraph {
        let mut g = LabeledGraph::new();
        for n in 1..=3 {
            g.add_node(Label::Int(n));
        }
        g.add_edge(&Label::Int(1), &Label::Int(2));
        g.add_edge(&Label::Int(2), &Label::Int(3));
        g.add_edge(&Label::Int(3), &Label::Int(1));
        g
    }

    #[test]
    fn test_verbose_report_lists_cycles() {
        let mut g = triangle();
        let result = classify(g.graph_mut());
        let report = render(&result, &g, true);
        assert!(report.contains("1 simple cycle(s): 1 -> 2 -> 3 -> 1"));
        assert!(report.contains("The graph is cyclic."));
    }

    #[test]
    fn test_terse_report_counts_cycles() {
        let mut g = triangle();
        let result = classify(g.graph_mut());
        let report = render(&result, &g, false);
        assert!(report.contains("1 simple cycle(s)."));
        assert!(!report.contains("->"));
    }

    #[test]
    fn test_tree_report() {
        let mut g = LabeledGraph::new();
        g.add_node(Label::Text("root".into()));
        g.add_node(Label::Text("leaf".into()));
        g.add_edge(&Label::Text("root".into()), &Label::Text("leaf".into()));
        let result = classify(g.graph_mut());
        let report = render(&result, &g, true);
        assert!(report.contains("The graph contains no cycles."));
        assert!(report.contains("acyclic and tree-structured, hence a tree"));
    }

    #[test]
    fn test_exception_report() {
        let mut g = triangle();
        g.add_node(Label::Int(4));
        let result = classify(g.graph_mut());
        let report = render(&result, &g, false);
        assert!(report.contains("one of the known exceptions"));
    }

    #[test]
    fn test_json_projection_uses_labels() {
        let mut g = triangle();
        let result = classify(g.graph_mut());
        let value = to_json(&result, &g);
        assert_eq!(value["cycles"][0][0], "1");
        assert_eq!(value["acyclic"], false);
        assert_eq!(value["tree_and_subcyclic"], "neither");
    }
}
