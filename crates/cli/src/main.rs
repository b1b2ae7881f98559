use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

use skyroute::api::{check_route, Point, RadarId};

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Check whether a quadrocopter route stays inside radar coverage")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide a single route; exit status 0 if possible, 1 otherwise
    Check {
        /// Start point
        #[arg(short, long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        start: Vec<i32>,
        /// Finish point
        #[arg(short, long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, required = true)]
        finish: Vec<i32>,
        /// Radar center and radius; repeat for each radar
        #[arg(short, long = "radar", num_args = 3, value_names = ["X", "Y", "R"], action = ArgAction::Append, allow_negative_numbers = true)]
        radars: Vec<i32>,
        /// CSV file with header `x,y,r`, appended to the --radar list
        #[arg(long)]
        radars_csv: Option<PathBuf>,
        /// Also print the radars covering each endpoint
        #[arg(short, long)]
        verbose: bool,
    },
    /// Decide every scenario of a JSON batch and write results plus provenance
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only the verdict.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            start,
            finish,
            radars,
            radars_csv,
            verbose,
        } => check(
            &start,
            &finish,
            &radars,
            radars_csv.as_deref(),
            verbose,
            &mut std::io::stdout().lock(),
        ),
        Action::Run { input, out } => run(&input, &out).map(|()| ExitCode::SUCCESS),
        Action::Report => report().map(|()| ExitCode::SUCCESS),
    }
}

fn point(values: &[i32]) -> Result<Point> {
    match values {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => bail!("a point takes exactly two values (x y)"),
    }
}

fn check(
    start: &[i32],
    finish: &[i32],
    flat_radars: &[i32],
    radars_csv: Option<&Path>,
    verbose: bool,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let start = point(start)?;
    let finish = point(finish)?;
    let mut radars = input::radars_from_flat(flat_radars)?;
    if let Some(path) = radars_csv {
        radars.extend(input::radars_from_csv(path)?);
    }
    tracing::info!(?start, ?finish, radars = radars.len(), "check");
    let report = check_route(start, finish, &radars);
    if verbose {
        let fmt_ids = |ids: &[RadarId]| {
            ids.iter().map(|id| id.0.to_string()).collect::<Vec<_>>().join(",")
        };
        writeln!(out, "start radars: [{}]", fmt_ids(&report.start_radars))?;
        writeln!(out, "finish radars: [{}]", fmt_ids(&report.finish_radars))?;
        writeln!(
            out,
            "graph: {} radars, {} overlaps, {} components",
            report.radar_count, report.edge_count, report.component_count
        )?;
    }
    if report.possible {
        writeln!(out, "Route possible")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out, "Route impossible")?;
        Ok(ExitCode::FAILURE)
    }
}

fn run(input_path: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input_path.display(), out = %out.display(), "run");
    let scenarios = input::load_scenarios(input_path)?;
    let outcomes = input::evaluate(&scenarios)?;
    let prov = provenance::RunProvenance::from_outcomes(input_path, &outcomes, out);
    tracing::info!(
        scenarios = prov.scenarios,
        possible = prov.possible,
        "run_done"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&outcomes)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, &prov)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance_written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "skyroute_version": skyroute::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
