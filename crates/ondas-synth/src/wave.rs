//! Wave shapes and their Fourier-series coefficients.
//!
//! Each supported shape has a closed-form sine-series coefficient `b_n`;
//! the synthesizer weighs harmonic `n` by `coefficient(n)`. The shapes are
//! a closed enum resolved by exhaustive match rather than a string-keyed
//! table, so an unsupported name can only arise at the parse boundary.

use crate::error::SynthError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Names accepted by [`WaveShape::from_str`], in canonical order.
pub const SUPPORTED_SHAPES: [&str; 4] = ["sine", "square", "sawtooth", "triangle"];

/// Periodic wave shape approximated by a truncated Fourier series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WaveShape {
    /// Pure fundamental: `b_1 = 1`, every other harmonic zero.
    #[default]
    Sine,
    /// Odd harmonics at `4 / (π n)`.
    Square,
    /// All harmonics at `-2 / (π n)`.
    Sawtooth,
    /// Odd harmonics at `(-1)^((n-1)/2) · 8 / (π n)²`.
    Triangle,
}

impl WaveShape {
    /// Fourier coefficient `b_n` for harmonic order `n` (`n ≥ 1`).
    pub fn coefficient(self, n: u32) -> f64 {
        let x = f64::from(n);
        match self {
            WaveShape::Sine => {
                if n == 1 {
                    1.0
                } else {
                    0.0
                }
            }
            WaveShape::Square => {
                if n % 2 == 1 {
                    4.0 / (PI * x)
                } else {
                    0.0
                }
            }
            WaveShape::Sawtooth => -2.0 / (PI * x),
            // The alternating sign (-1)^((n-1)/2) on odd n reduces to an
            // n mod 4 lookup: 1, 5, 9, … → +1 and 3, 7, 11, … → −1.
            WaveShape::Triangle => match n % 4 {
                1 => 8.0 / (PI * x).powi(2),
                3 => -8.0 / (PI * x).powi(2),
                _ => 0.0,
            },
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            WaveShape::Sine => "sine",
            WaveShape::Square => "square",
            WaveShape::Sawtooth => "sawtooth",
            WaveShape::Triangle => "triangle",
        }
    }

    /// All supported shapes, in canonical order.
    pub fn all() -> [WaveShape; 4] {
        [
            WaveShape::Sine,
            WaveShape::Square,
            WaveShape::Sawtooth,
            WaveShape::Triangle,
        ]
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveShape {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(WaveShape::Sine),
            "square" => Ok(WaveShape::Square),
            "sawtooth" => Ok(WaveShape::Sawtooth),
            "triangle" => Ok(WaveShape::Triangle),
            other => Err(SynthError::unsupported_shape(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_is_single_harmonic() {
        assert_eq!(WaveShape::Sine.coefficient(1), 1.0);
        for n in 2..200 {
            assert_eq!(WaveShape::Sine.coefficient(n), 0.0);
        }
    }

    #[test]
    fn square_even_harmonics_vanish() {
        for n in 1..200 {
            let b = WaveShape::Square.coefficient(n);
            if n % 2 == 0 {
                assert_eq!(b, 0.0, "n={n}");
            } else {
                assert_eq!(b, 4.0 / (PI * f64::from(n)), "n={n}");
            }
        }
    }

    #[test]
    fn sawtooth_coefficients_are_all_negative() {
        for n in 1..200 {
            assert_eq!(WaveShape::Sawtooth.coefficient(n), -2.0 / (PI * f64::from(n)));
        }
    }

    #[test]
    fn triangle_sign_matches_alternating_power() {
        // The n % 4 lookup must reproduce (-1)^((n-1)/2) for odd n.
        for n in (1u32..400).step_by(2) {
            let expected_sign = (-1.0f64).powi(((n - 1) / 2) as i32);
            let b = WaveShape::Triangle.coefficient(n);
            let magnitude = 8.0 / (PI * f64::from(n)).powi(2);
            assert_eq!(b, expected_sign * magnitude, "n={n}");
        }
    }

    #[test]
    fn triangle_even_harmonics_vanish() {
        for n in (2u32..400).step_by(2) {
            assert_eq!(WaveShape::Triangle.coefficient(n), 0.0, "n={n}");
        }
    }

    #[test]
    fn triangle_first_signs() {
        // n = 1, 3, 5, 7 → +, −, +, −
        assert!(WaveShape::Triangle.coefficient(1) > 0.0);
        assert!(WaveShape::Triangle.coefficient(3) < 0.0);
        assert!(WaveShape::Triangle.coefficient(5) > 0.0);
        assert!(WaveShape::Triangle.coefficient(7) < 0.0);
    }

    #[test]
    fn parse_round_trips_display() {
        for shape in WaveShape::all() {
            assert_eq!(shape.name().parse::<WaveShape>().unwrap(), shape);
        }
    }

    #[test]
    fn parse_rejects_unknown_shape() {
        let err = "noise".parse::<WaveShape>().unwrap_err();
        assert!(matches!(
            err,
            SynthError::UnsupportedShape { ref shape, .. } if shape == "noise"
        ));
    }
}
