//! # Portas Quânticas
//!
//! As quatro portas de um qubit suportadas pelo motor: H (Hadamard) e as
//! Pauli X, Y, Z. Cada porta é aplicada com a transformação explícita por
//! componentes; a matriz 2x2 correspondente existe para inspeção e para
//! verificar unitariedade.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};
use std::fmt;
use std::str::FromStr;

use crate::error::QubitError;
use crate::state::Amplitude;

const ZERO: Amplitude = Amplitude::new(0.0, 0.0);
const ONE: Amplitude = Amplitude::new(1.0, 0.0);
const I: Amplitude = Amplitude::new(0.0, 1.0);

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Amplitude; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self {
            elements: [[ONE, ZERO], [ZERO, ONE]],
        }
    }

    /// Aplica a matriz a um estado [alpha, beta]
    pub fn apply(&self, state: [Amplitude; 2]) -> [Amplitude; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }

    /// Compara elemento a elemento dentro da tolerância
    pub fn approx_eq(&self, other: &Matrix2x2, tolerance: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(x, y)| (x - y).norm() <= tolerance)
    }

    /// Verifica se M·M† = I
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.mul(&self.dagger())
            .approx_eq(&Matrix2x2::identity(), tolerance)
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::format::FormattedAmplitude;

        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[ {:>8}  {:>8} ]",
                FormattedAmplitude(row[0]).to_string(),
                FormattedAmplitude(row[1]).to_string()
            )?;
        }
        Ok(())
    }
}

/// Porta de um qubit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard: cria superposição
    #[serde(rename = "H")]
    Hadamard,
    /// Pauli-X (NOT quântico)
    #[serde(rename = "X")]
    PauliX,
    /// Pauli-Y
    #[serde(rename = "Y")]
    PauliY,
    /// Pauli-Z (phase flip)
    #[serde(rename = "Z")]
    PauliZ,
}

impl Gate {
    /// Todas as portas suportadas
    pub const ALL: [Gate; 4] = [Gate::Hadamard, Gate::PauliX, Gate::PauliY, Gate::PauliZ];

    /// Identificador curto (H, X, Y, Z)
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Hadamard => "H",
            Self::PauliX => "X",
            Self::PauliY => "Y",
            Self::PauliZ => "Z",
        }
    }

    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hadamard => "Hadamard",
            Self::PauliX => "Pauli-X",
            Self::PauliY => "Pauli-Y",
            Self::PauliZ => "Pauli-Z",
        }
    }

    /// Transforma `[alpha, beta]`
    ///
    /// Determinística e sem renormalização: as quatro portas são unitárias,
    /// então um estado normalizado continua normalizado.
    pub fn apply(&self, state: [Amplitude; 2]) -> [Amplitude; 2] {
        let [alpha, beta] = state;
        match self {
            Self::Hadamard => [(alpha + beta) / SQRT_2, (alpha - beta) / SQRT_2],
            Self::PauliX => [beta, alpha],
            Self::PauliY => [
                Amplitude::new(-beta.im, beta.re),
                Amplitude::new(alpha.im, -alpha.re),
            ],
            Self::PauliZ => [alpha, Amplitude::new(-beta.re, -beta.im)],
        }
    }

    /// Matriz da porta
    ///
    /// A Y usada aqui é `[[0, i], [-i, 0]]`, ou seja, a Pauli-Y usual com
    /// fase global −1. Probabilidades e coordenadas de Bloch não mudam.
    pub fn matrix(&self) -> Matrix2x2 {
        let elements = match self {
            Self::Hadamard => {
                let h = Amplitude::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            Self::PauliX => [[ZERO, ONE], [ONE, ZERO]],
            Self::PauliY => [[ZERO, I], [-I, ZERO]],
            Self::PauliZ => [[ONE, ZERO], [ZERO, -ONE]],
        };
        Matrix2x2 { elements }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gate {
    type Err = QubitError;

    /// Aceita H, X, Y, Z (sem distinção de caixa) e os nomes longos
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" | "HADAMARD" => Ok(Self::Hadamard),
            "X" | "PAULI-X" | "PAULI_X" | "PAULIX" => Ok(Self::PauliX),
            "Y" | "PAULI-Y" | "PAULI_Y" | "PAULIY" => Ok(Self::PauliY),
            "Z" | "PAULI-Z" | "PAULI_Z" | "PAULIZ" => Ok(Self::PauliZ),
            _ => Err(QubitError::InvalidGate(s.to_string())),
        }
    }
}
