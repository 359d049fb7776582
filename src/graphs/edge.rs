use std::fmt;

use serde::Serialize;

use super::{VertexId, Weight};

/// A directed record `tail -> head` carrying a weight.
///
/// Undirected graphs store one record per direction. Self-loops are allowed.
#[derive(Clone, Copy, PartialEq, Serialize, Debug)]
pub struct WeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        debug_assert!(weight.is_finite(), "edge weight must be finite");
        WeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessWeightedEdge {
        TaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.tail, self.head, self.weight)
    }
}

/// Edge stored in an adjacency list; the tail is implied by the list it lives in.
#[derive(Clone, Copy, PartialEq, Serialize, Debug)]
pub struct TaillessWeightedEdge {
    head: VertexId,
    weight: Weight,
}

impl TaillessWeightedEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::WeightedEdge;

    #[test]
    fn reversed_keeps_weight() {
        let edge = WeightedEdge::new(3, 7, 2.5);
        let reversed = edge.reversed();

        assert_eq!(reversed.tail(), 7);
        assert_eq!(reversed.head(), 3);
        assert_eq!(reversed.weight(), 2.5);
        assert_eq!(reversed.reversed(), edge);
    }

    #[test]
    fn tailless_round_trip() {
        let edge = WeightedEdge::new(1, 1, 4.0);
        assert_eq!(edge.tailless().set_tail(1), edge);
        assert_eq!(edge.to_string(), "1 -> 1 (4)");
    }

    #[test]
    fn serializes_as_json_object() {
        let edge = WeightedEdge::new(0, 2, 1.5);
        assert_eq!(
            serde_json::to_value(edge).unwrap(),
            json!({ "tail": 0, "head": 2, "weight": 1.5 })
        );
    }
}
