use crate::{
    graphs::{edge::WeightedEdge, VertexId, Weight},
    search::path::Path,
};

/// Result of a single-source shortest path search.
///
/// Buffers are sized once to the number of vertices and only written by the
/// search that created them; afterwards every query is a pure read.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Weight>,
    predecessor_edges: Vec<Option<WeightedEdge>>,
}

impl ShortestPathTree {
    pub(crate) fn new(number_of_vertices: usize, source: VertexId) -> Self {
        ShortestPathTree {
            source,
            distances: vec![Weight::INFINITY; number_of_vertices],
            predecessor_edges: vec![None; number_of_vertices],
        }
    }

    pub(crate) fn set_distance(&mut self, vertex: VertexId, distance: Weight) {
        self.distances[vertex as usize] = distance;
    }

    pub(crate) fn set_predecessor_edge(&mut self, vertex: VertexId, edge: WeightedEdge) {
        self.predecessor_edges[vertex as usize] = Some(edge);
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, `Weight::INFINITY` if `vertex` was not reached.
    pub fn distance_to(&self, vertex: VertexId) -> Weight {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    pub fn has_path_to(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex) < Weight::INFINITY
    }

    /// The edge that last improved the distance of `vertex`.
    pub fn predecessor_edge(&self, vertex: VertexId) -> Option<&WeightedEdge> {
        self.predecessor_edges.get(vertex as usize)?.as_ref()
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Edges from the source to `vertex`, or `None` if `vertex` is unreachable.
    pub fn path_to(&self, vertex: VertexId) -> Option<Path> {
        if !self.has_path_to(vertex) {
            return None;
        }

        // Walk the predecessor chain back to the source.
        let mut edges = Vec::new();
        let mut current = self.predecessor_edge(vertex);
        while let Some(edge) = current {
            edges.push(*edge);
            current = self.predecessor_edge(edge.tail());
        }
        edges.reverse();

        Some(Path {
            edges,
            distance: self.distance_to(vertex),
        })
    }
}
