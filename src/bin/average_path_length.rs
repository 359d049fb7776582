use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use grafos::{
    graphs::Graph,
    search::average_path_length::average_path_length_with_progress,
    utility::{get_progressbar_long_jobs, init_tracing},
    GraphArgs,
};
use tracing::info;

/// Average shortest path length over all vertex pairs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    input: GraphArgs,

    /// Number of worker threads, all cores if not set
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let graph = args.input.read_graph()?;

    let start = Instant::now();
    let bar = get_progressbar_long_jobs("Dijkstra per vertex", graph.vertices().len() as u64);
    let average = average_path_length_with_progress(&graph, bar)?;
    info!("took {:?}", start.elapsed());

    match average {
        Some(average) => println!("average path length: {}", average),
        None => println!("average path length is undefined for fewer than two vertices"),
    }

    Ok(())
}
