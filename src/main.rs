use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use treecheck::classify::classify;
use treecheck::parser::load_graph;
use treecheck::report;

/// Classify an undirected graph against the tree characterizations:
/// acyclicity, dendricity, and subcyclicity.
#[derive(Parser)]
#[command(name = "treecheck", version, about)]
struct Cli {
    /// Path to the graph description (JSON: {"nodes": [...], "edges": [[u, v], ...]})
    graph: PathBuf,

    /// List every discovered cycle instead of just counting them
    #[arg(short, long)]
    verbose: bool,

    /// Emit the classification result as JSON
    #[arg(long)]
    json: bool,

    /// Also write the report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut graph = load_graph(&cli.graph)
        .with_context(|| format!("could not load graph from {}", cli.graph.display()))?;
    let result = classify(graph.graph_mut());

    let rendered = if cli.json {
        let mut text = serde_json::to_string_pretty(&report::to_json(&result, &graph))?;
        text.push('\n');
        text
    } else {
        report::render(&result, &graph, cli.verbose)
    };

    if let Some(path) = &cli.output {
        fs::write(path, &rendered)
            .with_context(|| format!("could not write report to {}", path.display()))?;
    }
    print!("{rendered}");

    Ok(())
}
