use std::slice::Iter;

use ahash::{HashMap, HashMapExt};

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    Graph, VertexId, Weight,
};
use crate::error::GraphError;

/// Adjacency-list graph keyed by vertex id.
///
/// Per-vertex edge lists are append-only. Parallel edges and self-loops are
/// kept as added. In undirected mode every `add_edge` stores the edge and its
/// reverse, so the mapping stays symmetric.
#[derive(Clone, Debug)]
pub struct AdjacencyListGraph {
    number_of_vertices: u32,
    directed: bool,
    weighted: bool,
    edges: HashMap<VertexId, Vec<TaillessWeightedEdge>>,
}

impl Default for AdjacencyListGraph {
    fn default() -> Self {
        Self::new(false, true)
    }
}

impl AdjacencyListGraph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        AdjacencyListGraph {
            number_of_vertices: 0,
            directed,
            weighted,
            edges: HashMap::new(),
        }
    }

    pub fn with_number_of_vertices(
        number_of_vertices: u32,
        directed: bool,
        weighted: bool,
    ) -> Self {
        let mut graph = Self::new(directed, weighted);
        graph.number_of_vertices = number_of_vertices;
        graph
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge], directed: bool) -> Self {
        let mut graph = Self::with_number_of_vertices(number_of_vertices, directed, true);
        for edge in edges {
            graph.add_edge(edge.tail(), edge.head(), edge.weight());
        }
        graph
    }

    /// Sets the vertex count. Only possible while the graph has no edges.
    pub fn set_number_of_vertices(&mut self, number_of_vertices: u32) -> Result<(), GraphError> {
        if !self.edges.is_empty() {
            return Err(GraphError::VertexCountFrozen(self.number_of_vertices));
        }
        self.number_of_vertices = number_of_vertices;
        Ok(())
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Appends `source -> target`, and `target -> source` for undirected graphs.
    ///
    /// The caller guarantees both endpoints lie in `[0, number_of_vertices())`.
    /// Release builds do not check them; debug builds panic on a violation.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) {
        debug_assert!(
            source < self.number_of_vertices && target < self.number_of_vertices,
            "edge {} -> {} outside of [0, {})",
            source,
            target,
            self.number_of_vertices
        );

        let edge = WeightedEdge::new(source, target, weight);
        self.push(&edge);
        if !self.directed {
            self.push(&edge.reversed());
        }
    }

    pub fn add_unweighted_edge(&mut self, source: VertexId, target: VertexId) {
        self.add_edge(source, target, 1.0);
    }

    fn push(&mut self, edge: &WeightedEdge) {
        self.edges.entry(edge.tail()).or_default().push(edge.tailless());
    }
}

impl Graph for AdjacencyListGraph {
    fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // The iterator owns `source` so the produced edges can carry their tail.
        struct OutEdgeIterator<'a> {
            source: VertexId,
            tailless_edge_iterator: Iter<'a, TaillessWeightedEdge>,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let edge = self.tailless_edge_iterator.next()?;
                Some(edge.set_tail(self.source))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.tailless_edge_iterator.len()
            }
        }

        let tailless_edge_iterator = self
            .edges
            .get(&source)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
            .iter();

        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator,
        })
    }

    fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.edges.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.values().map(|edges| edges.len() as u32).sum()
    }
}
