use grafos::{
    graphs::{
        adjacency_list_graph::AdjacencyListGraph, edge::WeightedEdge,
        graph_functions::random_edges, Graph, VertexId, Weight,
    },
    search::prim::MinimumSpanningForest,
};
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};

fn get_small_graph() -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(4, false, true);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 2.0);
    graph.add_edge(0, 2, 4.0);
    graph.add_edge(2, 3, 1.0);
    graph
}

/// Edges as `(smaller endpoint, larger endpoint, weight)`, sorted.
fn normalized<'a>(
    edges: impl Iterator<Item = &'a WeightedEdge>,
) -> Vec<(VertexId, VertexId, Weight)> {
    edges
        .map(|edge| {
            let (a, b) = (edge.tail(), edge.head());
            (a.min(b), a.max(b), edge.weight())
        })
        .sorted_by(|x, y| x.partial_cmp(y).unwrap())
        .collect()
}

fn find(parents: &mut [usize], vertex: usize) -> usize {
    let mut root = vertex;
    while parents[root] != root {
        root = parents[root];
    }
    parents[vertex] = root;
    root
}

/// Kruskal over the same edges, returns (forest weight, number of components).
fn kruskal(number_of_vertices: u32, edges: &[WeightedEdge]) -> (Weight, u32) {
    let mut parents: Vec<usize> = (0..number_of_vertices as usize).collect();
    let mut weight = 0.0;
    let mut components = number_of_vertices;

    for edge in edges
        .iter()
        .sorted_by(|a, b| a.weight().partial_cmp(&b.weight()).unwrap())
    {
        let a = find(&mut parents, edge.tail() as usize);
        let b = find(&mut parents, edge.head() as usize);
        if a != b {
            parents[a] = b;
            weight += edge.weight();
            components -= 1;
        }
    }

    (weight, components)
}

#[test]
fn small_graph_forest() {
    let graph = get_small_graph();
    let forest = MinimumSpanningForest::new(&graph).unwrap();

    assert_eq!(forest.weight(), 4.0);
    assert_eq!(
        normalized(forest.edges()),
        vec![(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0)]
    );
    assert_eq!(forest.number_of_trees(), 1);
    assert!(forest.edge_to(0).is_none());
    assert_eq!(forest.edge_to(2), Some(&WeightedEdge::new(1, 2, 2.0)));
}

#[test]
fn disconnected_graph_spans_every_component() {
    // components {0, 1, 2}, {3, 4, 5, 6} and the isolated vertex 7
    let mut graph = AdjacencyListGraph::with_number_of_vertices(8, false, true);
    graph.add_edge(0, 1, 3.0);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(0, 2, 2.0);
    graph.add_edge(3, 4, 5.0);
    graph.add_edge(4, 5, 1.0);
    graph.add_edge(5, 6, 2.0);
    graph.add_edge(3, 6, 1.0);
    graph.add_edge(4, 6, 4.0);

    let forest = MinimumSpanningForest::new(&graph).unwrap();

    assert_eq!(forest.weight(), 3.0 + 4.0);
    assert_eq!(forest.number_of_trees(), 3);
    assert_eq!(
        forest.edges().count() as u32,
        graph.number_of_vertices() - forest.number_of_trees()
    );
    assert!(forest.edge_to(7).is_none());
}

#[test]
fn negative_weights_are_allowed() {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(3, false, true);
    graph.add_edge(0, 1, -2.0);
    graph.add_edge(1, 2, -1.0);
    graph.add_edge(0, 2, 5.0);
    graph.add_edge(2, 2, -7.0);

    let forest = MinimumSpanningForest::new(&graph).unwrap();
    assert_eq!(forest.weight(), -3.0);
    assert_eq!(forest.edges().count(), 2);
}

#[test]
fn queries_are_idempotent() {
    let forest = MinimumSpanningForest::new(&get_small_graph()).unwrap();

    let edges = forest.edges().copied().collect_vec();
    let weight = forest.weight();
    assert_eq!(forest.edges().copied().collect_vec(), edges);
    assert_eq!(forest.weight(), weight);
}

#[test]
fn empty_graph() {
    let graph = AdjacencyListGraph::default();
    let forest = MinimumSpanningForest::new(&graph).unwrap();

    assert_eq!(forest.weight(), 0.0);
    assert_eq!(forest.edges().count(), 0);
    assert_eq!(forest.number_of_trees(), 0);
}

#[test]
fn matches_kruskal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..200 {
        let number_of_vertices = 1 + round % 25;
        let number_of_edges = round % 60;
        let edges = random_edges(&mut rng, number_of_vertices, number_of_edges, 30);
        let graph = AdjacencyListGraph::from_edges(number_of_vertices, &edges, false);

        let forest = MinimumSpanningForest::new(&graph).unwrap();
        let (weight, components) = kruskal(number_of_vertices, &edges);

        assert_eq!(forest.weight(), weight, "round {}", round);
        assert_eq!(forest.number_of_trees(), components, "round {}", round);
        assert_eq!(
            forest.edges().count() as u32,
            number_of_vertices - components,
            "round {}",
            round
        );
    }
}
