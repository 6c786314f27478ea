//! Benchmark orchestration, comparison reports and CSV export.

use crate::counter::ComparisonCounter;
use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::sorting::comparison_sort::{available_variants, expected_comparisons};
use crate::utils::data::{generate, InputPattern};
use crate::utils::timer::{measure_variants, TimingConfig};
use log::{info, warn};
use std::io::Write;
use std::time::Duration;

/// Results of one algorithm family at one input size
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<BenchmarkResult>,
}

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub pattern: InputPattern,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub comparisons: u64,
}

/// Everything a benchmark session produced, grouped per algorithm then per size
pub struct BenchmarkRun {
    pub results: Vec<Vec<SizeResults>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every variant of every algorithm at every size.
pub fn run_benchmarks(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    pattern: InputPattern,
    seed: u64,
    config: &TimingConfig,
) -> BenchmarkRun {
    let mut run = BenchmarkRun {
        results: Vec::with_capacity(algorithms.len()),
        raw_data: Vec::new(),
    };

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sizes.len());
        for &size in sizes {
            info!("benchmarking '{}' on {} {} elements", algo.name(), size, pattern);
            let closures = algo.get_variant_closures(size, pattern, seed);
            let results = measure_variants(closures, config);

            run.raw_data.extend(results.iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name.clone(),
                pattern,
                input_size: size,
                avg_nanos: r.avg_nanos_f64 as u64,
                comparisons: r.comparisons,
            }));
            per_size.push(SizeResults { size, results });
        }
        run.results.push(per_size);
    }

    run
}

/// One line of the comparison-count report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub variant: &'static str,
    pub pattern: InputPattern,
    pub size: usize,
    pub comparisons: u64,
    /// Closed-form count for this variant and pattern, when one exists
    pub expected: Option<u64>,
    /// Wall-clock time of the single counted run
    pub elapsed: Duration,
}

impl ReportRow {
    pub fn matches_expectation(&self) -> bool {
        self.expected.map_or(true, |e| e == self.comparisons)
    }
}

/// Run every sort variant once per (pattern, size) and record its comparison count.
pub fn comparison_report(sizes: &[usize], patterns: &[InputPattern], seed: u64) -> Vec<ReportRow> {
    let variants = available_variants();
    let mut rows = Vec::with_capacity(variants.len() * sizes.len() * patterns.len());

    for &pattern in patterns {
        for &size in sizes {
            let input = generate(pattern, size, seed);
            for variant in &variants {
                let mut data = input.clone();
                let mut counter = ComparisonCounter::new();
                let start = std::time::Instant::now();
                if let Err(e) = (variant.function)(&mut data, &mut counter) {
                    warn!("variant '{}' failed on {} x {}: {}", variant.name, pattern, size, e);
                    continue;
                }
                let row = ReportRow {
                    variant: variant.name,
                    pattern,
                    size,
                    comparisons: counter.read(),
                    expected: expected_comparisons(variant.name, pattern, size as u64),
                    elapsed: start.elapsed(),
                };
                if !row.matches_expectation() {
                    warn!(
                        "variant '{}' on {} x {}: {} comparisons, expected {:?}",
                        row.variant, pattern, size, row.comparisons, row.expected
                    );
                }
                rows.push(row);
            }
        }
    }

    rows
}

/// Export timing data to a CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, data)
}

fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,pattern,input_size,avg_time_{},comparisons",
        crate::utils::bench::unit_name()
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.pattern,
            entry.input_size,
            entry.avg_nanos,
            entry.comparisons
        )?;
    }

    Ok(())
}
