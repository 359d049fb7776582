use std::collections::VecDeque;

use super::collections::vertex_expanded_data::VertexExpandedDataVec;
use crate::{
    error::GraphError,
    graphs::{Graph, VertexId},
};

fn check_root(graph: &dyn Graph, root: VertexId) -> Result<(), GraphError> {
    if root >= graph.number_of_vertices() {
        return Err(GraphError::InvalidIndex {
            index: root as usize,
            capacity: graph.number_of_vertices() as usize,
        });
    }
    Ok(())
}

/// Vertices reachable from `root` in breadth-first order.
pub fn breadth_first_search(
    graph: &dyn Graph,
    root: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    check_root(graph, root)?;

    let mut expanded = VertexExpandedDataVec::new(graph.number_of_vertices() as usize);
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    expanded.expand(root);
    queue.push_back(root);

    while let Some(tail) = queue.pop_front() {
        order.push(tail);
        for edge in graph.out_edges(tail) {
            if !expanded.expand(edge.head()) {
                queue.push_back(edge.head());
            }
        }
    }

    Ok(order)
}

/// Vertices reachable from `root` in depth-first order.
///
/// Neighbours are pushed in adjacency order, so the last neighbour of a
/// vertex is visited first.
pub fn depth_first_search(
    graph: &dyn Graph,
    root: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    check_root(graph, root)?;

    let mut expanded = VertexExpandedDataVec::new(graph.number_of_vertices() as usize);
    let mut order = Vec::new();
    let mut stack = vec![root];

    while let Some(tail) = stack.pop() {
        if expanded.expand(tail) {
            continue;
        }
        order.push(tail);

        stack.extend(
            graph
                .out_edges(tail)
                .map(|edge| edge.head())
                .filter(|&head| !expanded.is_expanded(head)),
        );
    }

    Ok(order)
}
