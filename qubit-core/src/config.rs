//! Configuração do motor
//!
//! Carrega valores de um arquivo `.env` ou de variáveis de ambiente.
//! Valores ausentes ou inválidos caem no padrão.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

// Carrega .env na primeira leitura de configuração
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Garante que o ambiente foi carregado
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Tolerância padrão para o invariante de normalização
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Configuração do motor de estado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tolerância de |alpha|² + |beta|² − 1
    pub tolerance: f64,
    /// Renormaliza após cada porta para absorver deriva de ponto flutuante
    pub renormalize_gates: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            renormalize_gates: false,
        }
    }
}

impl EngineConfig {
    /// Lê `QUBIT_TOLERANCE` e `QUBIT_RENORMALIZE_GATES`
    pub fn from_env() -> Self {
        ensure_loaded();
        let defaults = Self::default();
        Self {
            tolerance: tolerance_from(env::var("QUBIT_TOLERANCE").ok().as_deref())
                .unwrap_or(defaults.tolerance),
            renormalize_gates: flag_from(env::var("QUBIT_RENORMALIZE_GATES").ok().as_deref())
                .unwrap_or(defaults.renormalize_gates),
        }
    }

    /// Define a tolerância
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Liga ou desliga a renormalização após portas
    pub fn with_renormalize_gates(mut self, enabled: bool) -> Self {
        self.renormalize_gates = enabled;
        self
    }
}

fn tolerance_from(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t > 0.0)
}

fn flag_from(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
