use thiserror::Error;

use crate::graphs::{edge::WeightedEdge, VertexId};

/// Every contract violation the library can report.
///
/// None of these are transient; they are surfaced to the caller as soon as
/// they are detected and never retried.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("index {index} is outside of [0, {capacity})")]
    InvalidIndex { index: usize, capacity: usize },

    #[error("index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    #[error("index {0} is not in the priority queue")]
    NotPresent(usize),

    #[error("new key would not strictly decrease the key of index {0}")]
    NotADecrease(usize),

    #[error("new key would not strictly increase the key of index {0}")]
    NotAnIncrease(usize),

    #[error("priority queue underflow")]
    Underflow,

    #[error("edge {0} has negative weight")]
    NegativeWeight(WeightedEdge),

    #[error("number of vertices cannot change once the graph has edges (has {0})")]
    VertexCountFrozen(VertexId),

    #[error("graph file does not start with a vertex count")]
    MissingVertexCount,

    #[error("unable to parse vertex count from {0:?}")]
    InvalidVertexCount(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
