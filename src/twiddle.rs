//! Twiddle factors.

use crate::float::FftFloat;
use num_complex::Complex;

/// The sign of the phase exponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Negative exponent, `exp(-2πik/N)`
    Forward,
    /// Positive exponent, `exp(2πik/N)`
    Inverse,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Forward
    }
}

impl Direction {
    /// Returns true if this is the forward direction.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Forward => true,
            Self::Inverse => false,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

/// Computes the twiddle factor `exp(∓2πi * index / size)`.
///
/// The phase is always evaluated in `f64`.
#[inline]
pub fn compute_twiddle<T: FftFloat>(index: usize, size: usize, direction: Direction) -> Complex<T> {
    let theta = (index * 2) as f64 * core::f64::consts::PI / size as f64;
    let twiddle = Complex::new(
        T::from_f64_lossy(theta.cos()),
        T::from_f64_lossy(-theta.sin()),
    );
    if direction.is_forward() {
        twiddle
    } else {
        twiddle.conj()
    }
}

/// Generates the first `count` twiddle factors for a transform of length `size`.
pub fn twiddles<T: FftFloat>(count: usize, size: usize, direction: Direction) -> Vec<Complex<T>> {
    (0..count)
        .map(|index| compute_twiddle(index, size, direction))
        .collect()
}

/// Rotates each element of `input` by its twiddle factor, `input[i] * exp(∓2πi * i / size)`.
pub fn apply_twiddles<T: FftFloat>(
    input: &[Complex<T>],
    size: usize,
    direction: Direction,
) -> Vec<Complex<T>> {
    input
        .iter()
        .enumerate()
        .map(|(index, x)| x * compute_twiddle::<T>(index, size, direction))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn near(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip(expected.iter()) {
            assert!((actual - expected).norm() < 1e-12, "{} != {}", actual, expected);
        }
    }

    #[test]
    fn apply_forward() {
        let ones = vec![Complex::new(1.0, 0.0); 4];
        near(
            &apply_twiddles(&ones, 4, Direction::Forward),
            &[
                Complex::new(1.0, 0.0),
                Complex::new(0.0, -1.0),
                Complex::new(-1.0, 0.0),
                Complex::new(0.0, 1.0),
            ],
        );
    }

    #[test]
    fn apply_inverse() {
        let ones = vec![Complex::new(1.0, 0.0); 4];
        near(
            &apply_twiddles(&ones, 4, Direction::Inverse),
            &[
                Complex::new(1.0, 0.0),
                Complex::new(0.0, 1.0),
                Complex::new(-1.0, 0.0),
                Complex::new(0.0, -1.0),
            ],
        );
    }

    #[test]
    fn unit_magnitude() {
        for &size in &[1, 2, 4, 8, 16, 32, 64, 1024] {
            for direction in [Direction::Forward, Direction::Inverse].iter() {
                for w in twiddles::<f64>(size, size, *direction) {
                    assert!((w.norm() - 1.0).abs() < 1e-12, "|{}| != 1", w);
                }
            }
        }
    }

    #[test]
    fn directions_are_conjugate() {
        for &size in &[2, 4, 8, 12, 16, 100] {
            let forward = twiddles::<f64>(size / 2, size, Direction::Forward);
            let inverse = twiddles::<f64>(size / 2, size, Direction::Inverse);
            near(
                &forward,
                &inverse.iter().map(|w| w.conj()).collect::<Vec<_>>(),
            );
        }
    }

    #[test]
    fn count_independent_of_size() {
        let w = twiddles::<f64>(3, 16, Direction::Forward);
        assert_eq!(w.len(), 3);
        near(&w[2..], &[compute_twiddle(2, 16, Direction::Forward)]);
        let angle = -core::f64::consts::PI / 4.0;
        near(&w[2..], &[Complex::new(angle.cos(), angle.sin())]);
    }

    #[test]
    fn empty() {
        assert!(twiddles::<f64>(0, 8, Direction::Forward).is_empty());
        assert!(apply_twiddles::<f64>(&[], 8, Direction::Inverse).is_empty());
    }

    #[test]
    fn single_precision() {
        let rotated = apply_twiddles(&[Complex::new(2f32, 0f32); 2], 4, Direction::Forward);
        assert!((rotated[1] - Complex::new(0f32, -2f32)).norm() < 1e-6);
    }

    #[test]
    fn direction() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert_eq!(Direction::Forward.inverse(), Direction::Inverse);
        assert!(!Direction::Inverse.is_forward());
    }
}
