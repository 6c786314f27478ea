//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner::{BenchmarkRun, ReportRow};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: Rust variants keep their table order, C ports go last.
fn variant_sort_key(result: &BenchmarkResult) -> u8 {
    if result.name.starts_with("c-") {
        1
    } else {
        0
    }
}

/// Group Rust variants before their C ports (stable, so table order survives)
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .iter()
    .copied()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // 14+14+14+9+9+14 = 74 chars + 6 spaces + 2 indent = 82
    let fixed_width = 82;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 74 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_nanos_f64)
        .unwrap_or(1.0);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>14} {:>14} {:>14} {:>9} {:>9} {:>14}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Comparisons",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev / result.avg_nanos_f64
        } else {
            0.0
        };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        println!(
            "  {:<v_width$} {:>14} {:>14} {:>14} {:>8.2}x {:>8.2}% {:>14}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_nanos_f64 as u64),
            format_measurement(result.min_time.as_nanos() as u64),
            format_measurement(result.max_time.as_nanos() as u64),
            speedup,
            cv * 100.0,
            result.comparisons,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every algorithm's results from a finished benchmark run
pub fn print_benchmark_run(
    algorithms: &[&dyn AlgorithmRunner],
    run: &BenchmarkRun,
    runs: usize,
) {
    for (algo, per_size) in algorithms.iter().zip(&run.results) {
        print_algo_info_box(*algo);
        for size_results in per_size {
            let mut results = size_results.results.clone();
            sort_variants(&mut results);
            print_results_table(&results, size_results.size, runs);
        }
    }
}

/// Print the comparison-count report, one block per input pattern
pub fn print_comparison_report(rows: &[ReportRow]) {
    let mut current = None;
    for row in rows {
        if current != Some(row.pattern) {
            current = Some(row.pattern);
            println!();
            println!("  Pattern: {}", row.pattern);
            println!(
                "  {:<18} {:>8} {:>14} {:>14} {:>12}",
                "Variant", "Size", "Comparisons", "Expected", "Time"
            );
            println!("  {}", "─".repeat(70));
        }

        let expected = match row.expected {
            Some(e) if e == row.comparisons => format!("{}", e),
            Some(e) => format!("{} (!)", e),
            None => "-".to_string(),
        };
        println!(
            "  {:<18} {:>8} {:>14} {:>14} {:>12}",
            row.variant,
            row.size,
            row.comparisons,
            expected,
            format!("{:?}", row.elapsed)
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Linear-Algo: Counted Sorts & Searches ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: linear-algo [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l        List all available algorithms");
    println!("  --help, -h        Show this help message");
    println!("  --sizes SIZES     Comma-separated input sizes (default: 64,256,1024,4096)");
    println!("  --runs N, -r N    Number of measurement runs per variant (default: 30)");
    println!("  --seed N          Random seed for inputs and schedule (default: time-based)");
    println!("  --pattern P       Input shape: random, sorted, reversed, few-unique (default: random)");
    println!("  --csv PATH        Export raw timings and comparison counts to CSV");
    println!("  --report          Print comparison counts against closed forms instead of timing");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM         Name of specific algorithm to run (omit for all)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG          Log filter (default: warn)");
    println!();
    println!("Examples:");
    println!("  linear-algo                         # Benchmark everything");
    println!("  linear-algo sort --pattern sorted   # Sorts on already sorted input");
    println!("  linear-algo --report --sizes 8,64   # Comparison counts per pattern");
    println!("  linear-algo --seed 12345            # Reproducible run");
    println!("  linear-algo --csv data.csv          # Export raw data to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
    }
}
