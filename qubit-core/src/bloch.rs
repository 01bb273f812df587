//! Coordenadas na esfera de Bloch
//!
//! ```text
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ) sin(θ/2)|1⟩
//! ```
//!
//! `θ = 2·acos(|alpha|)` fica em [0, π]. `φ = arg(beta) − arg(alpha)` é a
//! diferença bruta de dois `atan2` e NÃO é reduzida a [0, 2π): o intervalo
//! efetivo é (−2π, 2π).
//!
//! Estado degenerado: com `alpha = beta = 0`, `atan2(0, 0) = 0`, então
//! `θ = π`, `φ = 0` e o ponto devolvido é o polo sul (0, 0, −1).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::QubitState;

/// Descrição do ponto atribuído ao estado degenerado
pub const DEGENERATE_BLOCH_NOTE: &str = "Bloch point is the south pole (theta = pi, phi = 0 by the atan2(0,0) = 0 convention)";

/// Ponto na esfera de Bloch
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochCoordinate {
    pub x: f64,
    pub y: f64,
    /// +Z é |0⟩, −Z é |1⟩
    pub z: f64,
    /// Ângulo polar em [0, π]
    pub theta: f64,
    /// Ângulo azimutal, diferença bruta de fases
    pub phi: f64,
}

impl BlochCoordinate {
    /// Deriva as coordenadas de um estado
    pub fn from_state(state: &QubitState) -> Self {
        let alpha = state.alpha();
        let beta = state.beta();

        // |alpha| pode passar de 1 por arredondamento; acos(>1) seria NaN
        let magnitude = alpha.norm_sqr().sqrt().min(1.0);
        let theta = 2.0 * magnitude.acos();
        let phi = beta.arg() - alpha.arg();

        Self::from_angles(theta, phi)
    }

    /// Coordenadas cartesianas a partir dos ângulos
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            x: sin_theta * cos_phi,
            y: sin_theta * sin_phi,
            z: cos_theta,
            theta,
            phi,
        }
    }

    /// Distância à origem (1 para estados normalizados)
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Vetor (x, y, z)
    pub fn vector(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<&QubitState> for BlochCoordinate {
    fn from(state: &QubitState) -> Self {
        Self::from_state(state)
    }
}

impl fmt::Display for BlochCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4}) θ={:.4} φ={:.4}",
            self.x, self.y, self.z, self.theta, self.phi
        )
    }
}
