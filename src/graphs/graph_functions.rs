use std::io::{self, Write};

use rand::Rng;

use super::{edge::WeightedEdge, VertexId, Weight};

/// `number_of_edges` random edges without self-loops and with integral
/// weights in `[0, max_weight]`.
pub fn random_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: u32,
) -> Vec<WeightedEdge> {
    if number_of_vertices <= 1 {
        // not enough vertices for an edge with tail != head
        return Vec::new();
    }

    (0..number_of_edges)
        .map(|_| {
            // guarantee that tail != head
            let tail: VertexId = rng.gen_range(0..number_of_vertices);
            let mut head: VertexId = rng.gen_range(0..number_of_vertices - 1);
            if head >= tail {
                head += 1;
            }
            let weight = rng.gen_range(0..=max_weight) as Weight;
            WeightedEdge::new(tail, head, weight)
        })
        .collect()
}

/// Writes `edges` in the format read by [`super::graph_factory::GraphFactory`].
pub fn write_edges<W: Write>(
    writer: &mut W,
    number_of_vertices: u32,
    edges: &[WeightedEdge],
) -> io::Result<()> {
    writeln!(writer, "{}", number_of_vertices)?;
    for edge in edges {
        writeln!(writer, "{} {} {}", edge.tail(), edge.head(), edge.weight())?;
    }
    writer.flush()
}
