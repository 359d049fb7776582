use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use itertools::Itertools;
use tracing::debug;

use crate::graphs::{Graph, VertexId};

/// Welsh-Powell greedy vertex coloring.
///
/// Vertices are taken by descending degree (ties by ascending id). Each round
/// opens a new color and gives it to every remaining vertex that has no edge,
/// in either direction, to a vertex already holding that color. Only vertices
/// listed by [`Graph::degrees`] are colored.
#[derive(Clone, Debug)]
pub struct GreedyColoring {
    colors: Vec<Option<u32>>,
    number_of_colors: u32,
}

impl GreedyColoring {
    pub fn new(graph: &dyn Graph) -> Self {
        let neighbors = undirected_neighbors(graph);

        let mut remaining = graph
            .degrees()
            .into_iter()
            .sorted_by(|(vertex_a, degree_a), (vertex_b, degree_b)| {
                degree_b.cmp(degree_a).then(vertex_a.cmp(vertex_b))
            })
            .map(|(vertex, _)| vertex)
            .collect_vec();

        let mut colors = vec![None; graph.number_of_vertices() as usize];
        let mut number_of_colors = 0;

        while !remaining.is_empty() {
            let color = number_of_colors;
            number_of_colors += 1;

            let mut colored = HashSet::new();
            for &vertex in remaining.iter() {
                let conflict = neighbors
                    .get(&vertex)
                    .is_some_and(|neighbors| neighbors.iter().any(|n| colored.contains(n)));
                if !conflict {
                    colored.insert(vertex);
                    colors[vertex as usize] = Some(color);
                }
            }

            remaining.retain(|vertex| !colored.contains(vertex));
        }

        debug!(number_of_colors, "coloring finished");

        GreedyColoring {
            colors,
            number_of_colors,
        }
    }

    pub fn color_of(&self, vertex: VertexId) -> Option<u32> {
        *self.colors.get(vertex as usize)?
    }

    pub fn number_of_colors(&self) -> u32 {
        self.number_of_colors
    }

    /// No edge joins two distinct vertices of the same color. Self-loops are ignored.
    pub fn is_valid(&self, graph: &dyn Graph) -> bool {
        graph.edges().all(|edge| {
            edge.tail() == edge.head()
                || self.color_of(edge.tail()).is_none()
                || self.color_of(edge.tail()) != self.color_of(edge.head())
        })
    }
}

fn undirected_neighbors(graph: &dyn Graph) -> HashMap<VertexId, HashSet<VertexId>> {
    let mut neighbors: HashMap<VertexId, HashSet<VertexId>> = HashMap::new();

    for edge in graph.edges() {
        if edge.tail() == edge.head() {
            continue;
        }
        neighbors.entry(edge.tail()).or_default().insert(edge.head());
        neighbors.entry(edge.head()).or_default().insert(edge.tail());
    }

    neighbors
}
