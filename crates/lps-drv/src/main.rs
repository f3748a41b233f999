//! lps - command-line front end for the LP solver.
//!
//! Wires the three stages together: parse the LP file, rewrite it into
//! standard form, run the simplex driver, then print a solution summary.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lps_ir::Mode;
use lps_solve::{solve, to_standard_form, Heuristic};

const USAGE: &str = "USAGE: lps --lp FILE [--iteration-limit N] [--heuristic lowest|bland] [--verbose]";

/// Linear-programming solver for CPLEX LP format files.
#[derive(Parser, Debug)]
#[command(name = "lps")]
#[command(version)]
#[command(about = "Solve linear programs in CPLEX LP format", long_about = None)]
struct Cli {
    /// Problem file in LP format
    #[arg(long, value_name = "FILE")]
    lp: PathBuf,

    /// Stop after this many simplex iterations
    #[arg(long, default_value_t = 20, value_name = "N")]
    iteration_limit: u32,

    /// Pivot selection heuristic ("lowest" or "bland")
    #[arg(long, default_value = "lowest")]
    heuristic: String,

    /// Log pivot choices and tableau states
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::new(if verbose { "debug" } else { "info" });
    let layer = fmt::layer().with_target(false).without_time();
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn run(cli: &Cli) -> Result<()> {
    println!("lps {}", env!("CARGO_PKG_VERSION"));

    let heuristic = Heuristic::from_str(&cli.heuristic)?;

    info!("loading LP problem from {}", cli.lp.display());
    let text = std::fs::read_to_string(&cli.lp)
        .with_context(|| format!("failed to read {}", cli.lp.display()))?;
    let mut problem = lps_par::parse_str(&text)
        .with_context(|| format!("failed to parse {}", cli.lp.display()))?;
    debug!("parsed problem:\n{problem}");

    // The presolver flips minimisation problems; remember what the user
    // asked for so the summary can report in their terms.
    let mode = problem.mode;

    info!("converting to standard form");
    to_standard_form(&mut problem);
    debug!("standard form:\n{problem}");

    info!(
        "solving with iteration limit {} using heuristic '{}'",
        cli.iteration_limit, heuristic
    );
    let solution = solve(&problem, cli.iteration_limit, heuristic)?;

    let objective_value = match mode {
        Mode::Min => -solution.objective_value,
        Mode::Max => solution.objective_value,
    };

    println!();
    println!("solution ({mode}):");
    for (name, value) in &solution.values {
        println!("  {name} = {value}");
    }
    println!("objective value: {objective_value}");
    println!(
        "optimality certified: {}",
        if solution.optimal { "yes" } else { "no" }
    );

    Ok(())
}
