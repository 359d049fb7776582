pub mod indexed_min_queue;

pub use indexed_min_queue::{IndexedMinQueue, SortedIndices};
