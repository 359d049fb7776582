use anyhow::{Context, Result};
use clap::Parser;
use grafos::{
    graphs::{Graph, VertexId},
    search::dijkstra::Dijkstra,
    utility::init_tracing,
    GraphArgs,
};
use itertools::Itertools;
use serde_json::json;

/// Single-source shortest paths with Dijkstra.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: GraphArgs,

    /// Source vertex
    #[arg(short, long)]
    source: VertexId,

    /// Only report the path to this vertex
    #[arg(short, long)]
    target: Option<VertexId>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = args.input.read_graph()?;
    let dijkstra = Dijkstra::new(&graph)?;
    let data = dijkstra
        .run(args.source)
        .with_context(|| format!("cannot search from vertex {}", args.source))?;

    if let Some(target) = args.target {
        let path = data.path_to(target);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&path)?);
            return Ok(());
        }

        match path {
            Some(path) => {
                println!("distance to {}: {}", target, path.distance);
                for edge in path.edges.iter() {
                    println!("{}", edge);
                }
            }
            None => println!("{} is not reachable from {}", target, args.source),
        }
        return Ok(());
    }

    let reachable = data
        .distances()
        .iter()
        .enumerate()
        .filter(|(_, distance)| distance.is_finite())
        .map(|(vertex, _)| vertex as VertexId)
        .collect_vec();

    if args.json {
        let distances = reachable
            .iter()
            .map(|&vertex| json!({ "vertex": vertex, "distance": data.distance_to(vertex) }))
            .collect_vec();
        println!("{}", serde_json::to_string_pretty(&distances)?);
        return Ok(());
    }

    println!(
        "{} of {} vertices reachable from {}",
        reachable.len(),
        graph.number_of_vertices(),
        args.source
    );
    for vertex in reachable {
        println!("{} {}", vertex, data.distance_to(vertex));
    }

    Ok(())
}
