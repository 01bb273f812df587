//! Motor de estado do qubit
//!
//! Fronteira numérica consumida pela camada de apresentação. O motor não
//! guarda estado do qubit: quem chama mantém o "estado atual" e o passa por
//! valor a cada consulta.

use tracing::{debug, trace, warn};

use crate::bloch::{BlochCoordinate, DEGENERATE_BLOCH_NOTE};
use crate::config::EngineConfig;
use crate::error::{QubitError, QubitResult};
use crate::format::format_amplitude;
use crate::gates::Gate;
use crate::measure::{Basis, MeasurementResult};
use crate::state::{Amplitude, QubitState};

/// Motor de estado do qubit
#[derive(Debug, Clone, Default)]
pub struct QubitEngine {
    config: EngineConfig,
}

impl QubitEngine {
    /// Cria motor com configuração padrão
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Cria motor com configuração customizada
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Cria motor com a configuração do ambiente
    pub fn from_env() -> Self {
        Self::with_config(EngineConfig::from_env())
    }

    /// Configuração atual
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Constrói e normaliza um estado
    pub fn construct(&self, alpha_re: f64, alpha_im: f64, beta_re: f64, beta_im: f64) -> QubitState {
        let state = QubitState::from_parts(alpha_re, alpha_im, beta_re, beta_im);
        if state.is_degenerate() {
            warn!("zero amplitude pair; state left un-normalized, {DEGENERATE_BLOCH_NOTE}");
        } else {
            debug!(
                alpha = %format_amplitude(state.alpha()),
                beta = %format_amplitude(state.beta()),
                "state constructed"
            );
        }
        state
    }

    /// Aplica a porta identificada por `gate_id` (H, X, Y ou Z)
    ///
    /// Identificador desconhecido falha com [`QubitError::InvalidGate`].
    pub fn apply_gate(&self, state: &QubitState, gate_id: &str) -> QubitResult<QubitState> {
        let gate: Gate = gate_id.parse()?;
        Ok(self.apply(state, gate))
    }

    /// Aplica uma porta já tipada
    pub fn apply(&self, state: &QubitState, gate: Gate) -> QubitState {
        let next = state.apply(gate);
        trace!(gate = gate.symbol(), norm_sqr = next.norm_sqr(), "gate applied");

        if self.config.renormalize_gates && !next.is_degenerate() {
            trace!(gate = gate.symbol(), "renormalizing after gate");
            return next.normalized();
        }
        next
    }

    /// Aplica uma sequência de identificadores; falha sem resultado parcial
    pub fn apply_gates<S: AsRef<str>>(&self, state: &QubitState, gate_ids: &[S]) -> QubitResult<QubitState> {
        let gates = gate_ids
            .iter()
            .map(|id| id.as_ref().parse::<Gate>())
            .collect::<QubitResult<Vec<_>>>()?;
        Ok(gates
            .into_iter()
            .fold(*state, |current, gate| self.apply(&current, gate)))
    }

    /// Probabilidades na base identificada por `basis_id` (Z, X ou Y)
    pub fn measure(&self, state: &QubitState, basis_id: &str) -> QubitResult<MeasurementResult> {
        let basis: Basis = basis_id.parse()?;
        Ok(state.measure(basis))
    }

    /// Coordenadas de Bloch do estado
    pub fn to_bloch(&self, state: &QubitState) -> BlochCoordinate {
        if state.is_degenerate() {
            warn!("Bloch coordinates requested for the zero state: {DEGENERATE_BLOCH_NOTE}");
        }
        state.bloch()
    }

    /// Formata uma amplitude para exibição
    pub fn format_amplitude(&self, amplitude: Amplitude) -> String {
        format_amplitude(amplitude)
    }

    /// Verifica o invariante de normalização com a tolerância configurada
    pub fn check_normalized(&self, state: &QubitState) -> QubitResult<()> {
        let norm_sqr = state.norm_sqr();
        if (norm_sqr - 1.0).abs() <= self.config.tolerance {
            Ok(())
        } else {
            Err(QubitError::Denormalized {
                norm_sqr,
                tolerance: self.config.tolerance,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_gate_leaves_state_untouched() {
        let engine = QubitEngine::new();
        let state = engine.construct(1.0, 0.0, 0.0, 0.0);
        let err = engine.apply_gate(&state, "Q").unwrap_err();
        assert_eq!(err, QubitError::InvalidGate("Q".into()));
        assert_eq!(state, QubitState::zero());
    }

    #[test]
    fn test_invalid_basis() {
        let engine = QubitEngine::new();
        let err = engine.measure(&QubitState::zero(), "W").unwrap_err();
        assert_eq!(err, QubitError::InvalidBasis("W".into()));
    }

    #[test]
    fn test_apply_gates_is_all_or_nothing() {
        let engine = QubitEngine::new();
        let err = engine
            .apply_gates(&QubitState::zero(), &["H", "X", "nope"])
            .unwrap_err();
        assert_eq!(err, QubitError::InvalidGate("nope".into()));

        let state = engine.apply_gates(&QubitState::zero(), &["H", "Z", "H"]).unwrap();
        // HZH = X
        assert!((state.beta().re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_renormalize_gates_absorbs_drift() {
        let drifted = QubitState::from_raw(Amplitude::new(1.0 + 1e-6, 0.0), Amplitude::new(0.0, 0.0));

        let plain = QubitEngine::new().apply(&drifted, Gate::PauliX);
        assert!(!plain.is_normalized(1e-9));

        let engine = QubitEngine::with_config(EngineConfig::default().with_renormalize_gates(true));
        let fixed = engine.apply(&drifted, Gate::PauliX);
        assert!(fixed.is_normalized(1e-12));
    }

    #[test]
    fn test_zero_state_bloch_matches_log_note() {
        assert!(DEGENERATE_BLOCH_NOTE.contains("south pole"));
        let engine = QubitEngine::new();
        let b = engine.to_bloch(&engine.construct(0.0, 0.0, 0.0, 0.0));
        assert!((b.z + 1.0).abs() < 1e-12);
        assert_eq!(b.phi, 0.0);
    }

    #[test]
    fn test_check_normalized() {
        let engine = QubitEngine::new();
        assert!(engine.check_normalized(&QubitState::plus()).is_ok());

        let zero = engine.construct(0.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            engine.check_normalized(&zero),
            Err(QubitError::Denormalized { norm_sqr, .. }) if norm_sqr == 0.0
        ));
    }
}
