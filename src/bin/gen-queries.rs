//! Query corpus generator.
//!
//! Writes random decision queries as JSON envelope lines to stdout, for
//! use with `pdp-bench --queries` or any HTTP load driver.

use std::io::Write;

use clap::Parser;

use pdp_bench::queries::QueryGenerator;

#[derive(Parser, Debug)]
#[command(name = "gen-queries", version, about = "Generate random decision queries")]
struct Args {
    #[arg(long, default_value_t = 100_000, help = "Number of queries to generate")]
    count: usize,
    #[arg(long, help = "Seed the generator for a reproducible corpus")]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let generator = match args.seed {
        Some(seed) => QueryGenerator::seeded(seed),
        None => QueryGenerator::from_entropy(),
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for query in generator.take(args.count) {
        let line = serde_json::to_string(&query)?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
