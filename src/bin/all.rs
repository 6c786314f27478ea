//! CLI for benchmarking and inspecting the counted algorithms.
//!
//! Usage:
//!   linear-algo                  # Benchmark all algorithms
//!   linear-algo --list           # List available algorithms
//!   linear-algo sort             # Benchmark one algorithm family
//!   linear-algo --report         # Comparison counts against closed forms
//!   linear-algo --help           # Show help

use linear_algo::registry::{build_registry, AlgorithmRunner};
use linear_algo::utils::data::InputPattern;
use linear_algo::utils::runner::{comparison_report, export_csv};
use linear_algo::utils::{time_seed, TimingConfig};
use log::{info, LevelFilter};
use std::env;
use std::process;

struct Options {
    show_list: bool,
    show_help: bool,
    report: bool,
    sizes: Vec<usize>,
    runs: usize,
    seed: Option<u64>,
    pattern: InputPattern,
    csv_path: Option<String>,
    algorithm: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_list: false,
            show_help: false,
            report: false,
            sizes: vec![64, 256, 1024, 4096],
            runs: TimingConfig::default().runs_per_variant,
            seed: None,
            pattern: InputPattern::default(),
            csv_path: None,
            algorithm: None,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" | "-l" => options.show_list = true,
            "--help" | "-h" => options.show_help = true,
            "--report" => options.report = true,
            "--sizes" => {
                let value = iter.next().ok_or("--sizes needs a value")?;
                options.sizes = value
                    .split(',')
                    .map(|s| s.trim().parse::<usize>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| format!("invalid --sizes '{}': {}", value, e))?;
            }
            "--runs" | "-r" => {
                let value = iter.next().ok_or("--runs needs a value")?;
                options.runs = value
                    .parse()
                    .map_err(|e| format!("invalid --runs '{}': {}", value, e))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|e| format!("invalid --seed '{}': {}", value, e))?,
                );
            }
            "--pattern" => {
                let value = iter.next().ok_or("--pattern needs a value")?;
                options.pattern = value.parse()?;
            }
            "--csv" => {
                let value = iter.next().ok_or("--csv needs a value")?;
                options.csv_path = Some(value.clone());
            }
            other if !other.starts_with('-') => options.algorithm = Some(other.to_string()),
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run with --help for usage.");
            process::exit(1);
        }
    };

    let registry = build_registry();

    if options.show_help {
        linear_algo::tui::print_help();
        return;
    }

    if options.show_list {
        linear_algo::tui::print_available_algorithms(&registry);
        return;
    }

    let seed = options.seed.unwrap_or_else(time_seed);
    info!("input seed {}", seed);

    linear_algo::tui::print_header();

    if options.report {
        let rows = comparison_report(&options.sizes, &InputPattern::ALL, seed);
        linear_algo::tui::print_comparison_report(&rows);
        return;
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &options.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let config = TimingConfig {
        runs_per_variant: options.runs,
        schedule_seed: options.seed,
        ..TimingConfig::default()
    };

    let run = linear_algo::run_benchmarks(&algorithms, &options.sizes, options.pattern, seed, &config);

    if let Some(path) = &options.csv_path {
        match export_csv(path, &run.raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    linear_algo::tui::print_benchmark_run(&algorithms, &run, config.runs_per_variant);

    println!("Note: Speedup is relative to the first variant of each table.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("linear-algo")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.sizes, vec![64, 256, 1024, 4096]);
        assert_eq!(options.pattern, InputPattern::Random);
        assert!(options.algorithm.is_none());
    }

    #[test]
    fn test_flags() {
        let options = parse_args(&args(&[
            "sort", "--sizes", "8,16", "--runs", "5", "--seed", "9", "--pattern", "reversed",
        ]))
        .unwrap();
        assert_eq!(options.algorithm.as_deref(), Some("sort"));
        assert_eq!(options.sizes, vec![8, 16]);
        assert_eq!(options.runs, 5);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.pattern, InputPattern::Reversed);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--sizes", "8,x"])).is_err());
        assert!(parse_args(&args(&["--pattern", "zigzag"])).is_err());
        assert!(parse_args(&args(&["--runs"])).is_err());
    }
}
