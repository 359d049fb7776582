use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use grafos::{
    graphs::graph_functions::{random_edges, write_edges},
    utility::init_tracing,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Writes a random weighted edge list, e.g. as input for the other binaries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Outfile
    #[arg(short, long)]
    graph: PathBuf,

    /// Number of vertices
    #[arg(short, long)]
    vertices: u32,

    /// Number of edge lines
    #[arg(short, long)]
    edges: u32,

    /// Largest edge weight
    #[arg(short, long, default_value_t = 100)]
    max_weight: u32,

    /// Seed for reproducible graphs
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let edges = random_edges(&mut rng, args.vertices, args.edges, args.max_weight);

    let file = File::create(&args.graph)
        .with_context(|| format!("cannot create {}", args.graph.display()))?;
    let mut writer = BufWriter::new(file);
    write_edges(&mut writer, args.vertices, &edges)?;

    info!(edges = edges.len(), "wrote {}", args.graph.display());
    Ok(())
}
