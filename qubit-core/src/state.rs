//! Estado do qubit
//!
//! `QubitState` é um valor pequeno (`Copy`): toda operação devolve um novo
//! estado e nunca altera o estado de entrada.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::bloch::BlochCoordinate;
use crate::error::{QubitError, QubitResult};
use crate::format::FormattedAmplitude;
use crate::gates::Gate;
use crate::measure::{Basis, MeasurementResult};

/// Amplitude complexa de um estado da base
pub type Amplitude = Complex64;

/// Estado de um qubit: `alpha|0⟩ + beta|1⟩`
///
/// Após a construção vale `|alpha|² + |beta|² = 1`, exceto quando as duas
/// amplitudes são exatamente zero. Nesse caso a normalização não faz nada e
/// o estado degenerado segue adiante sem erro.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawState")]
pub struct QubitState {
    alpha: Amplitude,
    beta: Amplitude,
}

/// Forma serializada; desserializar passa por [`QubitState::new`]
#[derive(Deserialize)]
struct RawState {
    alpha: Amplitude,
    beta: Amplitude,
}

impl From<RawState> for QubitState {
    fn from(raw: RawState) -> Self {
        Self::new(raw.alpha, raw.beta)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl QubitState {
    /// Cria estado normalizado a partir de duas amplitudes
    ///
    /// Valores não finitos não são rejeitados aqui: coagir entrada malformada
    /// é responsabilidade de quem chama (ver [`QubitState::try_from_parts`]).
    pub fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        Self::from_raw(alpha, beta).normalized()
    }

    /// Cria estado a partir dos quatro componentes reais
    pub fn from_parts(alpha_re: f64, alpha_im: f64, beta_re: f64, beta_im: f64) -> Self {
        Self::new(
            Amplitude::new(alpha_re, alpha_im),
            Amplitude::new(beta_re, beta_im),
        )
    }

    /// Como [`QubitState::from_parts`], mas rejeita componentes não finitos
    pub fn try_from_parts(
        alpha_re: f64,
        alpha_im: f64,
        beta_re: f64,
        beta_im: f64,
    ) -> QubitResult<Self> {
        let components = [
            ("alpha.re", alpha_re),
            ("alpha.im", alpha_im),
            ("beta.re", beta_re),
            ("beta.im", beta_im),
        ];
        if let Some(&(component, value)) = components.iter().find(|(_, v)| !v.is_finite()) {
            return Err(QubitError::NonFiniteAmplitude { component, value });
        }
        Ok(Self::from_parts(alpha_re, alpha_im, beta_re, beta_im))
    }

    /// Monta o estado sem normalizar
    pub(crate) const fn from_raw(alpha: Amplitude, beta: Amplitude) -> Self {
        Self { alpha, beta }
    }

    /// |0⟩
    pub const fn zero() -> Self {
        Self::from_raw(Amplitude::new(1.0, 0.0), Amplitude::new(0.0, 0.0))
    }

    /// |1⟩
    pub const fn one() -> Self {
        Self::from_raw(Amplitude::new(0.0, 0.0), Amplitude::new(1.0, 0.0))
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub const fn plus() -> Self {
        Self::from_raw(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
        )
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub const fn minus() -> Self {
        Self::from_raw(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(-FRAC_1_SQRT_2, 0.0),
        )
    }

    /// |+i⟩ = (|0⟩ + i|1⟩)/√2
    pub const fn plus_i() -> Self {
        Self::from_raw(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(0.0, FRAC_1_SQRT_2),
        )
    }

    /// |−i⟩ = (|0⟩ − i|1⟩)/√2
    pub const fn minus_i() -> Self {
        Self::from_raw(
            Amplitude::new(FRAC_1_SQRT_2, 0.0),
            Amplitude::new(0.0, -FRAC_1_SQRT_2),
        )
    }

    /// Amplitude de |0⟩
    pub fn alpha(&self) -> Amplitude {
        self.alpha
    }

    /// Amplitude de |1⟩
    pub fn beta(&self) -> Amplitude {
        self.beta
    }

    /// Par `[alpha, beta]`
    pub fn amplitudes(&self) -> [Amplitude; 2] {
        [self.alpha, self.beta]
    }

    /// |alpha|² + |beta|²
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Verifica o invariante de normalização
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Ambas as amplitudes exatamente zero
    pub fn is_degenerate(&self) -> bool {
        self.alpha == Amplitude::new(0.0, 0.0) && self.beta == Amplitude::new(0.0, 0.0)
    }

    /// Cópia normalizada; o estado zero volta inalterado
    pub fn normalized(&self) -> Self {
        // hypot evita overflow/underflow de |alpha|² + |beta|²
        let norm = self.alpha.norm().hypot(self.beta.norm());
        if norm.is_infinite() {
            // componentes finitos perto de f64::MAX: reescala antes
            let scale = [self.alpha.re, self.alpha.im, self.beta.re, self.beta.im]
                .iter()
                .fold(0.0_f64, |acc, c| acc.max(c.abs()));
            if scale.is_finite() {
                return Self::from_raw(self.alpha / scale, self.beta / scale).normalized();
            }
        }
        if norm > 0.0 {
            Self::from_raw(self.alpha / norm, self.beta / norm)
        } else {
            *self
        }
    }

    /// Aplica uma porta e devolve o novo estado (sem renormalizar)
    #[must_use]
    pub fn apply(&self, gate: Gate) -> Self {
        let [alpha, beta] = gate.apply(self.amplitudes());
        Self::from_raw(alpha, beta)
    }

    /// Aplica as portas em sequência, da esquerda para a direita
    #[must_use]
    pub fn apply_all<I>(&self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        gates.into_iter().fold(*self, |state, gate| state.apply(gate))
    }

    /// Probabilidades de medição na base indicada
    pub fn measure(&self, basis: Basis) -> MeasurementResult {
        MeasurementResult::of(self, basis)
    }

    /// Resultados nas bases Z, X e Y, nessa ordem
    pub fn measure_all(&self) -> [MeasurementResult; 3] {
        Basis::ALL.map(|basis| self.measure(basis))
    }

    /// Coordenadas na esfera de Bloch
    pub fn bloch(&self) -> BlochCoordinate {
        BlochCoordinate::from_state(self)
    }
}

impl From<[Amplitude; 2]> for QubitState {
    fn from([alpha, beta]: [Amplitude; 2]) -> Self {
        Self::new(alpha, beta)
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})|0⟩ + ({})|1⟩",
            FormattedAmplitude(self.alpha),
            FormattedAmplitude(self.beta)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ket_zero() {
        let state = QubitState::default();
        assert_eq!(state.alpha(), Amplitude::new(1.0, 0.0));
        assert_eq!(state.beta(), Amplitude::new(0.0, 0.0));
    }

    #[test]
    fn test_construction_normalizes() {
        let state = QubitState::from_parts(3.0, 0.0, 0.0, 4.0);
        assert!((state.alpha().re - 0.6).abs() < 1e-12);
        assert!((state.beta().im - 0.8).abs() < 1e-12);
        assert!(state.is_normalized(1e-9));
    }

    #[test]
    fn test_construction_normalizes_extreme_magnitudes() {
        let tiny = QubitState::from_parts(1e-170, 0.0, 0.0, 1e-170);
        assert!(tiny.is_normalized(1e-9));
        assert!((tiny.alpha().re - FRAC_1_SQRT_2).abs() < 1e-12);

        let huge = QubitState::from_parts(1e160, 0.0, 0.0, 0.0);
        assert!(!huge.is_degenerate());
        assert_eq!(huge.alpha(), Amplitude::new(1.0, 0.0));

        let smallest = QubitState::from_parts(0.0, 0.0, f64::MIN_POSITIVE / 4.0, 0.0);
        assert_eq!(smallest.beta(), Amplitude::new(1.0, 0.0));

        let largest = QubitState::from_parts(f64::MAX, 0.0, 0.0, f64::MAX);
        assert!(largest.is_normalized(1e-9));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let state: QubitState =
            serde_json::from_str(r#"{"alpha":[3.0,0.0],"beta":[4.0,0.0]}"#).unwrap();
        assert!(state.is_normalized(1e-9));
        assert!((state.alpha().re - 0.6).abs() < 1e-12);
        assert!((state.beta().re - 0.8).abs() < 1e-12);

        let zero: QubitState =
            serde_json::from_str(r#"{"alpha":[0.0,0.0],"beta":[0.0,0.0]}"#).unwrap();
        assert!(zero.is_degenerate());
    }

    #[test]
    fn test_zero_state_passes_through() {
        let state = QubitState::from_parts(0.0, 0.0, 0.0, 0.0);
        assert!(state.is_degenerate());
        assert_eq!(state.norm_sqr(), 0.0);
        assert!(!state.is_normalized(1e-9));
    }

    #[test]
    fn test_try_from_parts_rejects_non_finite() {
        let err = QubitState::try_from_parts(1.0, f64::NAN, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            QubitError::NonFiniteAmplitude { component: "alpha.im", .. }
        ));

        let err = QubitState::try_from_parts(0.0, 0.0, f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(
            err,
            QubitError::NonFiniteAmplitude { component: "beta.re", .. }
        ));

        assert!(QubitState::try_from_parts(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_named_states_are_normalized() {
        for state in [
            QubitState::zero(),
            QubitState::one(),
            QubitState::plus(),
            QubitState::minus(),
            QubitState::plus_i(),
            QubitState::minus_i(),
        ] {
            assert!(state.is_normalized(1e-12), "{state}");
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let original = QubitState::plus();
        let copy = original.apply(Gate::PauliZ);
        assert_eq!(original, QubitState::plus());
        assert_eq!(copy, QubitState::minus());
    }

    #[test]
    fn test_apply_all_runs_left_to_right() {
        // X depois H: |0⟩ → |1⟩ → |−⟩
        let state = QubitState::zero().apply_all([Gate::PauliX, Gate::Hadamard]);
        assert!((state.alpha().re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((state.beta().re + FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(QubitState::plus_i().to_string(), "(0.707)|0⟩ + (0.707i)|1⟩");
    }
}
