//! Formatação de amplitudes para exibição
//!
//! Regras, nesta ordem:
//!
//! - `|im| < 1e-4`: só a parte real, `"0.707"`
//! - `|re| < 1e-4`: só a parte imaginária, `"-0.707i"`
//! - caso geral: `"0.500+0.500i"` / `"0.500-0.500i"`
//!
//! Sempre três casas decimais.

use std::fmt;

use crate::state::Amplitude;

/// Abaixo disso um componente é omitido
pub const DISPLAY_EPSILON: f64 = 1e-4;

/// Amplitude formatada via `Display`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormattedAmplitude(pub Amplitude);

impl fmt::Display for FormattedAmplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Amplitude { re, im } = self.0;
        if im.abs() < DISPLAY_EPSILON {
            write!(f, "{:.3}", unsigned_zero(re))
        } else if re.abs() < DISPLAY_EPSILON {
            write!(f, "{:.3}i", unsigned_zero(im))
        } else {
            let sign = if im >= 0.0 { "+" } else { "" };
            write!(f, "{:.3}{}{:.3}i", re, sign, im)
        }
    }
}

/// Formata uma amplitude para exibição
pub fn format_amplitude(amplitude: Amplitude) -> String {
    FormattedAmplitude(amplitude).to_string()
}

// -0.0 vira 0.0 para não imprimir "-0.000"
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_only() {
        assert_eq!(format_amplitude(Amplitude::new(0.70710678, 0.0)), "0.707");
        assert_eq!(format_amplitude(Amplitude::new(-0.8, 0.00009)), "-0.800");
    }

    #[test]
    fn test_below_both_thresholds_takes_real_branch() {
        assert_eq!(format_amplitude(Amplitude::new(0.00005, 0.00005)), "0.000");
    }

    #[test]
    fn test_imaginary_only() {
        assert_eq!(format_amplitude(Amplitude::new(0.0, 0.70710678)), "0.707i");
        assert_eq!(format_amplitude(Amplitude::new(0.00001, -1.0)), "-1.000i");
    }

    #[test]
    fn test_general_form_signs() {
        assert_eq!(format_amplitude(Amplitude::new(0.5, 0.5)), "0.500+0.500i");
        assert_eq!(format_amplitude(Amplitude::new(0.5, -0.25)), "0.500-0.250i");
        assert_eq!(format_amplitude(Amplitude::new(-0.6, 0.8)), "-0.600+0.800i");
    }

    #[test]
    fn test_threshold_is_strict() {
        // |im| == 1e-4 não é omitido
        assert_eq!(format_amplitude(Amplitude::new(0.5, 1e-4)), "0.500+0.000i");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_amplitude(Amplitude::new(-0.0, -0.0)), "0.000");
    }
}
