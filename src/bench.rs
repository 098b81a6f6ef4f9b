//! Offline policy perftest.
//!
//! Separates JSON parsing from evaluation: the whole corpus is parsed up
//! front and the timed loop runs decisions only.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::policy::{self, DecisionMode};
use crate::wire::{DecisionInput, DecisionResponse};

/// Load a query corpus, one JSON envelope per line.
///
/// Blank lines are skipped. A malformed line fails the whole load with an
/// `InvalidData` error naming the line number.
pub fn read_queries(path: &Path) -> io::Result<Vec<DecisionInput>> {
    let file = File::open(path)?;
    let mut queries = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let query = serde_json::from_str(&line).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {e}", index + 1))
        })?;
        queries.push(query);
    }
    Ok(queries)
}

/// Timing summary of one perftest run.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
    pub queries: usize,
    pub elapsed: Duration,
}

impl BenchReport {
    /// Mean microseconds per query.
    #[allow(clippy::cast_precision_loss)]
    pub fn micros_per_query(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e6 / self.queries as f64
    }

    /// Policy answers per second.
    #[allow(clippy::cast_precision_loss)]
    pub fn paps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.queries as f64 / secs
    }
}

/// Decide every query in a tight loop, timing the loop only.
pub fn run(queries: &[DecisionInput], mode: DecisionMode) -> (Vec<bool>, BenchReport) {
    let mut results = Vec::with_capacity(queries.len());
    let started = Instant::now();
    for query in queries {
        results.push(policy::decide(&query.input, mode));
    }
    let report = BenchReport {
        queries: queries.len(),
        elapsed: started.elapsed(),
    };
    (results, report)
}

/// Write decisions as `{"result":<bool>}` lines.
pub fn write_results(path: &Path, results: &[bool]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for result in results {
        let line = serde_json::to_string(&DecisionResponse { result: *result })?;
        writeln!(out, "{line}")?;
    }
    out.flush()
}
