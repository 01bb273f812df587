//! Tipos de erro para qubit-core

use thiserror::Error;

/// Resultado customizado para operações sobre o qubit
pub type QubitResult<T> = Result<T, QubitError>;

/// Erros que podem ocorrer em operações sobre o qubit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    #[error("Invalid gate: {0:?} (expected one of H, X, Y, Z)")]
    InvalidGate(String),

    #[error("Invalid basis: {0:?} (expected one of Z, X, Y)")]
    InvalidBasis(String),

    #[error("Non-finite amplitude component {component}: {value}")]
    NonFiniteAmplitude { component: &'static str, value: f64 },

    #[error("State is not normalized: |alpha|² + |beta|² = {norm_sqr} (tolerance {tolerance})")]
    Denormalized { norm_sqr: f64, tolerance: f64 },
}
