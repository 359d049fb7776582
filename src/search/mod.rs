pub mod average_path_length;
pub mod collections;
pub mod coloring;
pub mod dijkstra;
pub mod path;
pub mod prim;
pub mod traversal;
