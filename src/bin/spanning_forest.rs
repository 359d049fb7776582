use anyhow::Result;
use clap::Parser;
use grafos::{search::prim::MinimumSpanningForest, utility::init_tracing, GraphArgs};
use itertools::Itertools;
use serde_json::json;

/// Minimum spanning forest with Prim.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: GraphArgs,

    /// Also list the forest edges
    #[arg(short, long)]
    edges: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = args.input.read_graph()?;
    let forest = MinimumSpanningForest::new(&graph)?;

    if args.json {
        let edges = if args.edges {
            forest.edges().collect_vec()
        } else {
            Vec::new()
        };
        let summary = json!({
            "weight": forest.weight(),
            "trees": forest.number_of_trees(),
            "number_of_edges": forest.edges().count(),
            "edges": edges,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("forest weight: {}", forest.weight());
    println!("trees: {}", forest.number_of_trees());
    println!("edges: {}", forest.edges().count());
    if args.edges {
        for edge in forest.edges() {
            println!("{}", edge);
        }
    }

    Ok(())
}
