//! qubit - single-qubit state inspector
//! Command-line front end for constructing a qubit, applying gates and
//! reading its measurement probabilities and Bloch coordinates

mod input;
mod report;

use clap::{Parser, Subcommand};
use colored::*;
use qubit_core::{Basis, QubitEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::input::StateArgs;
use crate::report::{print_bloch, print_gates, print_json, print_measurement, StateReport};

#[derive(Parser)]
#[command(name = "qubit")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "Single-qubit state engine: gates, measurement probabilities, Bloch sphere", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Re-normalize after every gate to absorb floating-point drift
    #[arg(long, global = true)]
    renormalize: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show amplitudes, probabilities in all bases and the Bloch coordinate
    State {
        #[command(flatten)]
        input: StateArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Measurement probabilities in one basis
    Measure {
        /// Basis: Z, X or Y
        #[arg(short, long, default_value = "Z")]
        basis: String,

        #[command(flatten)]
        input: StateArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Bloch sphere coordinate
    Bloch {
        #[command(flatten)]
        input: StateArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the supported gates and their matrices
    Gates,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = qubit_core::EngineConfig::from_env();
    if cli.renormalize {
        config = config.with_renormalize_gates(true);
    }
    let engine = QubitEngine::with_config(config);

    if let Err(e) = run(&engine, cli.command) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "qubit=info,qubit_core=warn",
        1 => "qubit=debug,qubit_core=debug",
        _ => "qubit=trace,qubit_core=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(engine: &QubitEngine, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::State { input, json } => {
            let state = input.build(engine)?;
            let report = StateReport::new(engine, &state);
            if json {
                print_json(&report)?;
            } else {
                report.print();
            }
        }

        Commands::Measure { basis, input, json } => {
            // fail on an unknown basis before building the state
            basis.parse::<Basis>()?;
            let state = input.build(engine)?;
            let result = engine.measure(&state, &basis)?;
            if json {
                print_json(&result)?;
            } else {
                print_measurement(&result);
            }
        }

        Commands::Bloch { input, json } => {
            let state = input.build(engine)?;
            let bloch = engine.to_bloch(&state);
            if json {
                print_json(&bloch)?;
            } else {
                print_bloch(&bloch);
            }
        }

        Commands::Gates => print_gates(),
    }

    Ok(())
}
