use tracing::debug;

use super::collections::vertex_expanded_data::VertexExpandedDataVec;
use crate::{
    error::GraphError,
    graphs::{edge::WeightedEdge, Graph, VertexId, Weight},
    queue::IndexedMinQueue,
};

/// Minimum spanning forest computed with eager Prim.
///
/// The search is restarted from every vertex that no earlier tree reached,
/// so a disconnected graph yields one tree per connected component. Negative
/// weights are fine here.
#[derive(Clone, Debug)]
pub struct MinimumSpanningForest {
    edge_to: Vec<Option<WeightedEdge>>,
    number_of_trees: u32,
}

impl MinimumSpanningForest {
    pub fn new(graph: &dyn Graph) -> Result<Self, GraphError> {
        let number_of_vertices = graph.number_of_vertices() as usize;
        let mut edge_to = vec![None; number_of_vertices];
        let mut distance_to_tree = vec![Weight::INFINITY; number_of_vertices];
        let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
        let mut queue = IndexedMinQueue::new(number_of_vertices);
        let mut number_of_trees = 0;

        for root in 0..graph.number_of_vertices() {
            if expanded.is_expanded(root) {
                continue;
            }
            number_of_trees += 1;

            distance_to_tree[root as usize] = 0.0;
            queue.insert(root as usize, 0.0)?;

            while !queue.is_empty() {
                let tail = queue.delete_min()? as VertexId;
                expanded.expand(tail);

                for edge in graph.out_edges(tail) {
                    let head = edge.head();
                    let in_queue = queue.contains(head as usize)?;
                    if expanded.is_expanded(head) || edge.weight() >= distance_to_tree[head as usize]
                    {
                        continue;
                    }

                    distance_to_tree[head as usize] = edge.weight();
                    edge_to[head as usize] = Some(edge);
                    if in_queue {
                        queue.change_key(head as usize, edge.weight())?;
                    } else {
                        queue.insert(head as usize, edge.weight())?;
                    }
                }
            }
        }

        debug!(number_of_vertices, number_of_trees, "spanning forest built");

        Ok(MinimumSpanningForest {
            edge_to,
            number_of_trees,
        })
    }

    /// Edges of the forest, ordered by the vertex they connect to the forest.
    pub fn edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.edge_to.iter().flatten()
    }

    pub fn weight(&self) -> Weight {
        self.edges().map(|edge| edge.weight()).sum()
    }

    /// Edge connecting `vertex` to its tree, `None` for roots.
    pub fn edge_to(&self, vertex: VertexId) -> Option<&WeightedEdge> {
        self.edge_to.get(vertex as usize)?.as_ref()
    }

    /// One tree per connected component, isolated vertices included.
    pub fn number_of_trees(&self) -> u32 {
        self.number_of_trees
    }
}
