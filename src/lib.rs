use std::path::PathBuf;

use clap::Args;
use error::GraphError;
use graphs::{adjacency_list_graph::AdjacencyListGraph, graph_factory::GraphFactory, Graph};
use tracing::info;
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod utility;

/// Input options shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph file: vertex count on the first line, then `tail head weight` per line
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Treat every line as a one-way edge
    #[arg(short, long)]
    pub directed: bool,

    /// Lines are `tail head` and every edge weighs 1
    #[arg(short, long)]
    pub unweighted: bool,
}

impl GraphArgs {
    pub fn read_graph(&self) -> Result<AdjacencyListGraph, GraphError> {
        let spinner = get_progressspinner("Reading graph");
        let graph = GraphFactory::new(self.directed, !self.unweighted).from_file(&self.graph)?;
        spinner.finish_and_clear();

        info!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            directed = graph.is_directed(),
            weighted = graph.is_weighted(),
            "read {}",
            self.graph.display()
        );
        Ok(graph)
    }
}
