use serde::Serialize;

use crate::{
    error::GraphError,
    graphs::{edge::WeightedEdge, VertexId, Weight},
};

/// A path given by its edges in travel order, together with its total weight.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path {
    pub edges: Vec<WeightedEdge>,
    pub distance: Weight,
}

impl Path {
    /// Vertices along the path, starting with the tail of the first edge.
    ///
    /// A path from a vertex to itself has no edges and no listed vertices.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.edges.iter().map(|edge| edge.tail()).collect();
        if let Some(last) = self.edges.last() {
            vertices.push(last.head());
        }
        vertices
    }
}

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: VertexId, target: VertexId)
        -> Result<Option<Path>, GraphError>;

    fn shortest_path_distance(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<Weight>, GraphError> {
        Ok(self
            .shortest_path(source, target)?
            .map(|path| path.distance))
    }
}
