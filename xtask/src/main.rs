use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "dfs-graph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run benchmarks whose id contains this string
        #[arg(long)]
        filter: Option<String>,
    },
}

const BENCHES: &[&str] = &["linked_list_benchmark", "dfs_benchmark"];

const REPORT_PATH: &str = "benchmark_results/report.md";

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    full_id: String,
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

struct Row {
    id: String,
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            filter,
        } => {
            if !report_only {
                run_benchmarks(quick, filter.as_deref())?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, filter: Option<&str>) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["bench", "--no-run"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if let Some(filter) = filter {
            cmd.arg(filter);
        }
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {bench}"))?;

        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
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

    let mut rows = Vec::new();
    for dir in find_new_estimates(criterion_dir) {
        match read_row(&dir) {
            Ok(row) => rows.push(row),
            Err(err) => eprintln!("Skipping {}: {err:#}", dir.display()),
        }
    }
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Throughput |")?;
    writeln!(file, "|---|---|---|")?;
    for row in &rows {
        let throughput = row
            .elements
            .map_or_else(|| "-".to_string(), |n| format_rate(n as f64 * 1e9 / row.mean_ns));
        writeln!(file, "| {} | {} | {} |", row.id, format_time(row.mean_ns), throughput)?;
    }

    println!("Report written to {} ({} rows)", report_path.display(), rows.len());
    Ok(())
}

/// Collects every `<bench>/new` directory below `dir`.
fn find_new_estimates(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return found;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("new")
            && path.join("estimates.json").is_file()
        {
            found.push(path);
        } else {
            found.extend(find_new_estimates(&path));
        }
    }
    found
}

fn read_row(dir: &Path) -> Result<Row> {
    let info: BenchmarkInfo = read_json(&dir.join("benchmark.json"))?;
    let estimates: Estimates = read_json(&dir.join("estimates.json"))?;
    let elements = info
        .throughput
        .as_ref()
        .and_then(|t| t.get("Elements"))
        .and_then(serde_json::Value::as_u64);
    Ok(Row {
        id: info.full_id,
        mean_ns: estimates.mean.point_estimate,
        elements,
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn format_time(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} us", ns / 1_000.0)
    } else {
        format!("{ns:.1} ns")
    }
}

fn format_rate(per_sec: f64) -> String {
    if per_sec > 1_000_000.0 {
        format!("{:.2}M elem/s", per_sec / 1_000_000.0)
    } else if per_sec > 1_000.0 {
        format!("{:.2}K elem/s", per_sec / 1_000.0)
    } else {
        format!("{per_sec:.0} elem/s")
    }
}
