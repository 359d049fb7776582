use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use tracing::debug;

use super::dijkstra::Dijkstra;
use crate::{
    error::GraphError,
    graphs::{Graph, Weight},
};

/// Mean shortest path length over all ordered vertex pairs.
///
/// Runs one independent Dijkstra search per vertex with at least one edge,
/// in parallel, and sums the finite distances to all other such vertices.
/// The sum is divided by `n * (n - 1)` with `n` the full vertex count, so
/// unreachable pairs count as zero. Returns `None` for fewer than two vertices.
pub fn average_path_length(graph: &dyn Graph) -> Result<Option<Weight>, GraphError> {
    average_path_length_with_progress(graph, ProgressBar::hidden())
}

/// Same as [`average_path_length`], ticking `bar` once per finished source.
pub fn average_path_length_with_progress(
    graph: &dyn Graph,
    bar: ProgressBar,
) -> Result<Option<Weight>, GraphError> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices < 2 {
        return Ok(None);
    }

    let dijkstra = Dijkstra::new(graph)?;
    let vertices = graph.vertices();
    bar.set_length(vertices.len() as u64);

    let distance_sum = vertices
        .par_iter()
        .progress_with(bar.clone())
        .map(|&source| -> Result<Weight, GraphError> {
            let data = dijkstra.run(source)?;
            Ok(vertices
                .iter()
                .filter(|&&target| target != source)
                .map(|&target| data.distance_to(target))
                .filter(|distance| distance.is_finite())
                .sum::<Weight>())
        })
        .try_reduce(|| 0.0, |a, b| Ok(a + b))?;
    bar.finish_and_clear();

    debug!(sources = vertices.len(), distance_sum, "average path length");

    let number_of_vertices = number_of_vertices as Weight;
    Ok(Some(
        distance_sum / (number_of_vertices * (number_of_vertices - 1.0)),
    ))
}
