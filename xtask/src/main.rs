use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "tagged-variant workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the container benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the test suite under Miri
    Miri {
        /// Only run tests whose name contains this filter
        filter: Option<String>,
    },
}

const BENCH: &str = "variant_benchmark";

/// The fields of criterion's `benchmark.json` the report needs.
#[derive(Deserialize)]
struct BenchmarkId {
    group_id: String,
    title: String,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// The fields of criterion's `estimates.json` the report needs.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Miri { filter } => run_miri(filter.as_deref())?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn run_miri(filter: Option<&str>) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["+nightly", "miri", "test", "--all-features"]);
    if let Some(filter) = filter {
        cmd.arg(filter);
    }
    let status = cmd.status().context("failed to spawn cargo miri")?;
    if !status.success() {
        anyhow::bail!("miri reported errors");
    }
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> (function -> mean time in ns)
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Variant Benchmark Report")?;
    for (group, functions) in &results {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Function | Mean | vs fastest |")?;
        writeln!(file, "|---|---|---|")?;

        let fastest = functions.values().copied().fold(f64::INFINITY, f64::min);
        for (function, time_ns) in functions {
            let rel = if fastest > 0.0 { time_ns / fastest } else { 0.0 };
            writeln!(file, "| {function} | {} | **{rel:.2}x** |", format_time(*time_ns))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.2} ns")
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_owned)
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if file_name(&path).as_deref() != Some("report") {
                collect_results(&path, results)?;
            }
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        // Structure: .../group/function[/parameter]/new/estimates.json
        let Some(run_dir) = path.parent() else { continue };
        if file_name(run_dir).as_deref() != Some("new") {
            continue;
        }
        let bench_json = run_dir.join("benchmark.json");
        let Ok(content) = fs::read_to_string(&bench_json) else {
            continue;
        };
        let bench: BenchmarkId = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", bench_json.display()))?;
        let function = bench
            .title
            .strip_prefix(&bench.group_id)
            .map(|t| t.trim_start_matches('/').to_owned())
            .unwrap_or_default();

        let content = fs::read_to_string(&path)?;
        let estimates: Estimates =
            serde_json::from_str(&content).with_context(|| format!("malformed {}", path.display()))?;
        results
            .entry(bench.group_id)
            .or_default()
            .insert(function, estimates.mean.point_estimate);
    }
    Ok(())
}
