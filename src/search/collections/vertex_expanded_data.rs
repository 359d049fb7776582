use crate::graphs::VertexId;

/// Marks vertices an algorithm has already finished with.
pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: usize) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices],
        }
    }

    /// Marks `vertex` and returns whether it was marked before.
    pub fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    pub fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded[vertex as usize]
    }
}
