//! Raw amplitude input.
//!
//! The engine only takes finite numbers. The CLI plays the role of the input
//! form and coerces whatever the user typed: anything that does not parse as
//! a finite float becomes `0`.

use clap::Args;
use qubit_core::{QubitEngine, QubitState};
use tracing::warn;

/// Amplitude arguments shared by every state-taking subcommand
#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    /// Real part of alpha (coefficient of |0⟩)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub alpha_re: String,

    /// Imaginary part of alpha
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub alpha_im: String,

    /// Real part of beta (coefficient of |1⟩)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub beta_re: String,

    /// Imaginary part of beta
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub beta_im: String,

    /// Gate to apply after construction (H, X, Y, Z); repeat for a sequence
    #[arg(short, long = "gate", value_name = "GATE")]
    pub gates: Vec<String>,
}

impl StateArgs {
    /// Coerce the raw fields and build the state, then apply the gates
    pub fn build(&self, engine: &QubitEngine) -> anyhow::Result<QubitState> {
        let state = engine.construct(
            coerce("alpha-re", &self.alpha_re),
            coerce("alpha-im", &self.alpha_im),
            coerce("beta-re", &self.beta_re),
            coerce("beta-im", &self.beta_im),
        );
        Ok(engine.apply_gates(&state, &self.gates)?)
    }
}

/// Best-effort parse: malformed or non-finite input becomes 0
pub fn coerce(field: &str, raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(field, raw, "not a finite number, using 0");
            0.0
        }
    }
}
