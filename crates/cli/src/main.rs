use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use foldcheck::format::{parse_problem, parse_solution, write_solution};
use foldcheck::sample::{draw_solution, ReplayToken, SamplerCfg};
use foldcheck::validate::{CheckCfg, CrossingRule};

mod provenance;
mod summary;

use summary::{ProblemSummary, SolutionSummary};

#[derive(Parser)]
#[command(name = "foldcheck")]
#[command(about = "Exact checker for fold-puzzle problems and solutions")]
struct Cmd {
    /// Log why individual checks fail
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the exact signed area of a problem
    Problem {
        file: PathBuf,
        /// Also write a JSON summary (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a solution's source shape
    Solution {
        file: PathBuf,
        /// Use the symmetric segment-intersection test for source edges
        #[arg(long)]
        exact_crossings: bool,
        /// Also check the closing edge of every facet for zero length
        #[arg(long)]
        close_facets: bool,
        /// Also write a JSON summary (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a random convex solution in the text format
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Grid points drawn before taking the hull
        #[arg(long, default_value_t = 24)]
        points: usize,
        /// Grid denominator
        #[arg(long, default_value_t = 64)]
        den: i64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Problem { file, out } => problem(&file, out),
        Action::Solution {
            file,
            exact_crossings,
            close_facets,
            out,
        } => {
            let cfg = CheckCfg {
                crossing: if exact_crossings {
                    CrossingRule::Exact
                } else {
                    CrossingRule::Reference
                },
                close_facets,
            };
            solution(&file, cfg, out)
        }
        Action::Sample {
            seed,
            index,
            points,
            den,
        } => sample(seed, index, points, den),
        Action::Report => report(),
    }
}

fn read(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn problem(file: &Path, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(file = %file.display(), "problem");
    let problem = parse_problem(&read(file)?)
        .with_context(|| format!("parsing problem {}", file.display()))?;
    let summary = ProblemSummary::new(&file.to_string_lossy(), &problem);
    println!("Problem area: {}", summary.area);
    if let Some(out) = out {
        write_summary(&out, &summary, provenance::Payload::problem(file))?;
    }
    Ok(())
}

fn solution(file: &Path, cfg: CheckCfg, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(file = %file.display(), cfg = ?cfg, "solution");
    let solution = parse_solution(&read(file)?)
        .with_context(|| format!("parsing solution {}", file.display()))?;
    let summary = SolutionSummary::new(&file.to_string_lossy(), &solution, cfg);
    for line in summary.lines() {
        println!("{line}");
    }
    if let Some(out) = out {
        write_summary(&out, &summary, provenance::Payload::solution(file, cfg))?;
    }
    Ok(())
}

fn sample(seed: u64, index: u64, points: usize, den: i64) -> Result<()> {
    tracing::info!(seed, index, points, den, "sample");
    let cfg = SamplerCfg { points, den };
    let sol = draw_solution(cfg, ReplayToken { seed, index })
        .context("sampler produced only degenerate hulls; try more points or a larger grid")?;
    let text = write_solution(&sol).context("sampled facet vertex missing from source")?;
    print!("{text}");
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_summary<T: Serialize>(
    out: &Path,
    summary: &T,
    payload: provenance::Payload,
) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote summary");
    Ok(())
}
