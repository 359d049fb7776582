use anyhow::{ensure, Result};
use clap::Parser;
use grafos::{graphs::Graph, search::coloring::GreedyColoring, utility::init_tracing, GraphArgs};

/// Greedy Welsh-Powell coloring.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: GraphArgs,

    /// Print the color of every colored vertex
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let graph = args.input.read_graph()?;
    let coloring = GreedyColoring::new(&graph);
    ensure!(coloring.is_valid(&graph), "invalid coloring");

    println!("colors: {}", coloring.number_of_colors());
    if args.verbose {
        for vertex in 0..graph.number_of_vertices() {
            if let Some(color) = coloring.color_of(vertex) {
                println!("{} {}", vertex, color);
            }
        }
    }

    Ok(())
}
