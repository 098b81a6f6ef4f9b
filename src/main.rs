use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use pdp_bench::bench;
use pdp_bench::logger;
use pdp_bench::policy::{self, DecisionMode};
use pdp_bench::server;
use pdp_bench::wire::AccessQuery;

#[derive(Parser, Debug)]
#[command(name = "pdp-bench", version, about = "RBAC policy decision benchmark")]
struct Args {
    #[arg(
        long,
        help = "Run a local perftest over a file of JSON query envelopes, one per line"
    )]
    queries: Option<PathBuf>,
    #[arg(long, help = "Write the perftest decisions to this file")]
    output: Option<PathBuf>,
    #[arg(short = 'p', long, help = "Serve the policy over HTTP on this port")]
    port: Option<u16>,
    #[arg(
        short = 'd',
        long,
        help = "With --port, serve forever instead of reading stdin"
    )]
    daemon: bool,
    #[arg(long, help = "Parse inputs but skip evaluation, answering false")]
    parse_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mode = if args.parse_only {
        DecisionMode::ParseOnly
    } else {
        DecisionMode::Evaluate
    };

    // A perftest run wins over everything else and exits when done.
    if let Some(path) = args.queries.as_deref() {
        return run_perftest(path, args.output.as_deref(), mode);
    }

    if let Some(port) = args.port {
        let listener = server::bind(port).await?;
        if args.daemon {
            server::serve(listener, mode).await?;
            return Ok(());
        }
        // Serve in the background while stdin queries are answered.
        tokio::spawn(async move {
            if let Err(e) = server::serve(listener, mode).await {
                logger::log_error(&format!("Decision server failed: {e}"));
            }
        });
    } else if args.daemon {
        logger::log_warning("--daemon has no effect without --port");
    }

    answer_stdin_queries(mode).await
}

/// Offline perftest: the corpus is parsed up front, the timed loop decides
/// only. Prints the corpus size and the us/query and PAPS metrics.
fn run_perftest(
    path: &Path,
    output: Option<&Path>,
    mode: DecisionMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let queries = bench::read_queries(path)?;
    println!("Read {}, {} queries.", path.display(), queries.len());
    if queries.is_empty() {
        return Ok(());
    }

    let (results, report) = bench::run(&queries, mode);
    println!(
        "Result: {:.3}us, {:.3} PAPS",
        report.micros_per_query(),
        report.paps()
    );

    if let Some(output) = output {
        bench::write_results(output, &results)?;
    }
    Ok(())
}

/// Interactive mode: one bare query object per stdin line, one bare
/// decision per stdout line. A malformed line is fatal.
async fn answer_stdin_queries(mode: DecisionMode) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let query: AccessQuery = serde_json::from_str(&line)?;
        println!("{}", policy::decide(&query, mode));
    }
    Ok(())
}
