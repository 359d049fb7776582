use tracing::debug;

use super::{
    collections::dijkstra_data::ShortestPathTree,
    path::{Path, PathFinding},
};
use crate::{
    error::GraphError,
    graphs::{Graph, VertexId},
    queue::IndexedMinQueue,
};

/// Single-source shortest paths over a graph without negative edge weights.
///
/// Weights are validated once on construction. Every [`Dijkstra::run`] owns a
/// fresh queue and fresh result buffers, so the same instance can be run from
/// as many sources as needed, also from several threads at once.
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Result<Self, GraphError> {
        if let Some(edge) = graph.edges().find(|edge| edge.weight() < 0.0) {
            return Err(GraphError::NegativeWeight(edge));
        }

        Ok(Dijkstra { graph })
    }

    pub fn run(&self, source: VertexId) -> Result<ShortestPathTree, GraphError> {
        let number_of_vertices = self.graph.number_of_vertices() as usize;
        let mut data = ShortestPathTree::new(number_of_vertices, source);
        let mut queue = IndexedMinQueue::new(number_of_vertices);

        queue.insert(source as usize, 0.0)?;
        data.set_distance(source, 0.0);

        let mut settled = 0;
        while !queue.is_empty() {
            let tail = queue.delete_min()? as VertexId;
            settled += 1;

            let distance_tail = data.distance_to(tail);
            for edge in self.graph.out_edges(tail) {
                let head = edge.head();
                let alternative_distance_head = distance_tail + edge.weight();
                if alternative_distance_head < data.distance_to(head) {
                    if queue.contains(head as usize)? {
                        queue.decrease_key(head as usize, alternative_distance_head)?;
                    } else {
                        queue.insert(head as usize, alternative_distance_head)?;
                    }
                    data.set_distance(head, alternative_distance_head);
                    data.set_predecessor_edge(head, edge);
                }
            }
        }

        debug!(source, settled, "dijkstra finished");
        Ok(data)
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Path>, GraphError> {
        let number_of_vertices = self.graph.number_of_vertices() as usize;
        if target as usize >= number_of_vertices {
            return Err(GraphError::InvalidIndex {
                index: target as usize,
                capacity: number_of_vertices,
            });
        }

        Ok(self.run(source)?.path_to(target))
    }
}
