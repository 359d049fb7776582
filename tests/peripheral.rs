use std::io::Cursor;

use grafos::{
    error::GraphError,
    graphs::{
        adjacency_list_graph::AdjacencyListGraph, graph_factory::GraphFactory,
        graph_functions::random_edges, Graph,
    },
    search::{
        average_path_length::average_path_length,
        coloring::GreedyColoring,
        traversal::{breadth_first_search, depth_first_search},
    },
};
use rand::{rngs::StdRng, SeedableRng};

fn get_small_graph() -> AdjacencyListGraph {
    GraphFactory::default()
        .from_reader(Cursor::new("4\n0 1 1\n1 2 2\n0 2 4\n2 3 1\n"))
        .unwrap()
}

fn complete_graph(number_of_vertices: u32) -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(number_of_vertices, false, false);
    for tail in 0..number_of_vertices {
        for head in (tail + 1)..number_of_vertices {
            graph.add_unweighted_edge(tail, head);
        }
    }
    graph
}

#[test]
fn breadth_first_order() {
    let graph = get_small_graph();
    assert_eq!(breadth_first_search(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(breadth_first_search(&graph, 3).unwrap(), vec![3, 2, 1, 0]);
}

#[test]
fn depth_first_order() {
    let graph = get_small_graph();
    assert_eq!(depth_first_search(&graph, 0).unwrap(), vec![0, 2, 3, 1]);
}

#[test]
fn traversal_stays_in_component() {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(6, true, false);
    graph.add_unweighted_edge(0, 1);
    graph.add_unweighted_edge(1, 2);
    graph.add_unweighted_edge(2, 0);
    graph.add_unweighted_edge(3, 4);

    let mut reached = breadth_first_search(&graph, 1).unwrap();
    reached.sort();
    assert_eq!(reached, vec![0, 1, 2]);

    let mut reached = depth_first_search(&graph, 1).unwrap();
    reached.sort();
    assert_eq!(reached, vec![0, 1, 2]);

    assert_eq!(breadth_first_search(&graph, 5).unwrap(), vec![5]);
    assert_eq!(depth_first_search(&graph, 4).unwrap(), vec![4]);
    assert!(matches!(
        breadth_first_search(&graph, 6),
        Err(GraphError::InvalidIndex { .. })
    ));
    assert!(matches!(
        depth_first_search(&graph, 6),
        Err(GraphError::InvalidIndex { .. })
    ));
}

#[test]
fn even_cycle_needs_two_colors() {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(4, false, false);
    graph.add_unweighted_edge(0, 1);
    graph.add_unweighted_edge(1, 2);
    graph.add_unweighted_edge(2, 3);
    graph.add_unweighted_edge(3, 0);

    let coloring = GreedyColoring::new(&graph);
    assert_eq!(coloring.number_of_colors(), 2);
    assert_eq!(coloring.color_of(0), coloring.color_of(2));
    assert_eq!(coloring.color_of(1), coloring.color_of(3));
    assert_ne!(coloring.color_of(0), coloring.color_of(1));
    assert!(coloring.is_valid(&graph));
}

#[test]
fn complete_graph_needs_a_color_per_vertex() {
    let graph = complete_graph(5);
    let coloring = GreedyColoring::new(&graph);
    assert_eq!(coloring.number_of_colors(), 5);
    assert!(coloring.is_valid(&graph));
}

#[test]
fn directed_edges_conflict_both_ways() {
    // 1 has the higher degree and is colored first
    let mut graph = AdjacencyListGraph::with_number_of_vertices(3, true, false);
    graph.add_unweighted_edge(1, 0);
    graph.add_unweighted_edge(1, 2);
    graph.add_unweighted_edge(0, 2);

    let coloring = GreedyColoring::new(&graph);
    assert!(coloring.is_valid(&graph));
    assert_ne!(coloring.color_of(0), coloring.color_of(1));
    // 2 has no outgoing edges, so it is not colored
    assert_eq!(coloring.color_of(2), None);
}

#[test]
fn random_colorings_are_valid() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..50 {
        let number_of_vertices = 2 + round % 30;
        let edges = random_edges(&mut rng, number_of_vertices, round * 3, 1);
        let graph = AdjacencyListGraph::from_edges(number_of_vertices, &edges, round % 2 == 0);

        let coloring = GreedyColoring::new(&graph);
        assert!(coloring.is_valid(&graph), "round {}", round);
        for vertex in graph.vertices() {
            assert!(coloring.color_of(vertex).is_some());
        }
    }
}

#[test]
fn average_path_length_of_small_graph() {
    let graph = get_small_graph();
    let average = average_path_length(&graph).unwrap().unwrap();
    assert!((average - 28.0 / 12.0).abs() < 1e-9);
}

#[test]
fn average_path_length_counts_unreachable_pairs_as_zero() {
    let mut graph = AdjacencyListGraph::with_number_of_vertices(4, false, true);
    graph.add_edge(0, 1, 3.0);
    graph.add_edge(2, 3, 1.0);

    let average = average_path_length(&graph).unwrap().unwrap();
    assert!((average - 8.0 / 12.0).abs() < 1e-9);
}

#[test]
fn average_path_length_edge_cases() {
    let single = AdjacencyListGraph::with_number_of_vertices(1, false, true);
    assert_eq!(average_path_length(&single).unwrap(), None);

    let mut negative = AdjacencyListGraph::with_number_of_vertices(2, true, true);
    negative.add_edge(0, 1, -1.0);
    assert!(matches!(
        average_path_length(&negative),
        Err(GraphError::NegativeWeight(_))
    ));
}
