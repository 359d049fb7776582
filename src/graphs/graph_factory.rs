use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use super::{adjacency_list_graph::AdjacencyListGraph, Graph, VertexId, Weight};
use crate::error::GraphError;

/// Builds graphs from the plain text edge list format.
///
/// The first non-empty line holds the number of vertices, every following
/// line one edge `tail head weight` (or `tail head` for unweighted graphs).
/// Lines that cannot be read as an edge are skipped.
#[derive(Clone, Debug)]
pub struct GraphFactory {
    directed: bool,
    weighted: bool,
}

impl Default for GraphFactory {
    fn default() -> Self {
        GraphFactory {
            directed: false,
            weighted: true,
        }
    }
}

impl GraphFactory {
    pub fn new(directed: bool, weighted: bool) -> Self {
        GraphFactory { directed, weighted }
    }

    pub fn from_file(&self, path: &Path) -> Result<AdjacencyListGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        self.from_reader(reader)
    }

    pub fn from_reader<R: BufRead>(&self, reader: R) -> Result<AdjacencyListGraph, GraphError> {
        let mut lines = reader.lines();

        let header = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(GraphError::MissingVertexCount),
            }
        };
        let number_of_vertices: u32 = header
            .trim()
            .parse()
            .map_err(|_| GraphError::InvalidVertexCount(header.clone()))?;

        let mut graph = AdjacencyListGraph::with_number_of_vertices(
            number_of_vertices,
            self.directed,
            self.weighted,
        );

        let mut skipped = 0;
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_edge(&line, number_of_vertices) {
                Some((tail, head, weight)) => graph.add_edge(tail, head, weight),
                None => {
                    warn!("skipping ill-formatted line {:?}", line);
                    skipped += 1;
                }
            }
        }

        debug!(
            number_of_vertices,
            number_of_edges = graph.number_of_edges(),
            skipped,
            "graph read"
        );

        Ok(graph)
    }

    fn parse_edge(
        &self,
        line: &str,
        number_of_vertices: u32,
    ) -> Option<(VertexId, VertexId, Weight)> {
        let values: Vec<&str> = line.split_whitespace().collect();
        let expected_values = if self.weighted { 3 } else { 2 };
        if values.len() != expected_values {
            return None;
        }

        let tail: VertexId = values[0].parse().ok()?;
        let head: VertexId = values[1].parse().ok()?;
        if tail >= number_of_vertices || head >= number_of_vertices {
            return None;
        }

        let weight: Weight = if self.weighted {
            values[2].parse().ok()?
        } else {
            1.0
        };
        if !weight.is_finite() {
            return None;
        }

        Some((tail, head, weight))
    }
}
