//! Text and JSON rendering of engine results

use colored::*;
use qubit_core::{BlochCoordinate, Gate, MeasurementResult, QubitEngine, QubitState};
use serde::Serialize;

/// Everything the display layer reads from one state snapshot
#[derive(Debug, Serialize)]
pub struct StateReport {
    pub alpha: String,
    pub beta: String,
    pub state: QubitState,
    pub measurements: [MeasurementResult; 3],
    pub bloch: BlochCoordinate,
    pub normalized: bool,
}

impl StateReport {
    pub fn new(engine: &QubitEngine, state: &QubitState) -> Self {
        Self {
            alpha: engine.format_amplitude(state.alpha()),
            beta: engine.format_amplitude(state.beta()),
            state: *state,
            measurements: state.measure_all(),
            bloch: engine.to_bloch(state),
            normalized: engine.check_normalized(state).is_ok(),
        }
    }

    pub fn print(&self) {
        println!("{}", "State".green().bold());
        println!("  alpha  {}", self.alpha.cyan());
        println!("  beta   {}", self.beta.cyan());
        if !self.normalized {
            println!("  {}", "zero amplitude pair, probabilities and angles are undefined".yellow());
        }
        println!();
        println!("{}", "Measurement probabilities".green().bold());
        for result in &self.measurements {
            print_measurement(result);
        }
        println!();
        print_bloch(&self.bloch);
    }
}

pub fn print_measurement(result: &MeasurementResult) {
    println!(
        "  {}  P({}) = {:.4}   P({}) = {:.4}",
        result.basis.to_string().bold(),
        result.outcomes[0],
        result.probabilities[0],
        result.outcomes[1],
        result.probabilities[1]
    );
}

pub fn print_bloch(bloch: &BlochCoordinate) {
    println!("{}", "Bloch sphere".green().bold());
    println!("  x = {:>8.4}   y = {:>8.4}   z = {:>8.4}", bloch.x, bloch.y, bloch.z);
    println!("  θ = {:>8.4}   φ = {:>8.4}", bloch.theta, bloch.phi);
}

pub fn print_gates() {
    for gate in Gate::ALL {
        println!("{} {}", gate.symbol().cyan().bold(), gate.name());
        for line in gate.matrix().to_string().lines() {
            println!("    {line}");
        }
        println!();
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
