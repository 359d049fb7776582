use ahash::HashMap;

use self::edge::WeightedEdge;

pub mod adjacency_list_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;

pub type VertexId = u32;
pub type Weight = f64;

/// Read-only view every algorithm in this crate runs against.
///
/// Vertex ids are dense in `[0, number_of_vertices())`. A graph must not be
/// mutated while an algorithm holds a reference to it.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn is_directed(&self) -> bool;

    /// Outgoing edges of `source`. Empty for a vertex without edges.
    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Vertices that own at least one adjacency entry, in ascending order.
    ///
    /// Isolated vertices are not part of this set.
    fn vertices(&self) -> Vec<VertexId>;

    /// Out-degree of every vertex returned by [`Graph::vertices`].
    fn degrees(&self) -> HashMap<VertexId, u32> {
        self.vertices()
            .into_iter()
            .map(|vertex| (vertex, self.out_edges(vertex).len() as u32))
            .collect()
    }

    /// Every stored directed edge record. Undirected graphs yield both directions.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        Box::new(
            self.vertices()
                .into_iter()
                .flat_map(move |vertex| self.out_edges(vertex)),
        )
    }

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .into_iter()
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }
}
