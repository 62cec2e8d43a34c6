pub mod classify;
pub mod cycle;
pub mod graph;
pub mod parser;
pub mod report;

pub use classify::{Characterization, ClassificationResult, classify};
pub use cycle::{Cycle, enumerate_cycles};
pub use graph::{Label, LabeledGraph, NodeId, UGraph};
pub use parser::{ParseError, load_graph};
