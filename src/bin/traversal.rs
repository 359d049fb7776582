use anyhow::Result;
use clap::{Parser, ValueEnum};
use grafos::{
    graphs::VertexId,
    search::traversal::{breadth_first_search, depth_first_search},
    utility::init_tracing,
    GraphArgs,
};
use itertools::Itertools;

#[derive(Debug, ValueEnum, Clone)]
enum Order {
    Bfs,
    Dfs,
}

/// Prints the vertices reachable from a root in traversal order.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: GraphArgs,

    /// Root vertex
    #[arg(short, long)]
    root: VertexId,

    /// Traversal order
    #[arg(short, long, value_enum, default_value = "bfs")]
    order: Order,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = args.input.read_graph()?;
    let order = match args.order {
        Order::Bfs => breadth_first_search(&graph, args.root)?,
        Order::Dfs => depth_first_search(&graph, args.root)?,
    };

    println!("{}", order.iter().join(" "));

    Ok(())
}
