//! This crate provides a recursive radix-2 fast Fourier transform (FFT) in pure Rust.
//!
//! # Implementation
//! Inputs with power-of-two lengths are transformed with the decimation-in-time Cooley-Tukey
//! algorithm: the input is split by index parity, both halves are transformed recursively, and
//! the half-size results are merged with a butterfly.  Every stage allocates its output, and the
//! input is never modified.
//!
//! Only forward transforms are provided.  The twiddle factors may be generated in either
//! [`Direction`], but the butterfly always rotates in the forward direction.
//!
//! ```
//! use num_complex::Complex;
//!
//! let input = [1.0, 2.0, 3.0, 4.0].iter().map(|&x| Complex::new(x, 0.0)).collect::<Vec<_>>();
//! let output = radix2_fft::transform(&input).unwrap();
//! assert!((output[0] - Complex::new(10.0, 0.0)).norm() < 1e-12);
//! assert!((output[1] - Complex::new(-2.0, 2.0)).norm() < 1e-12);
//! ```
//!
//! [`Direction`]: enum.Direction.html

mod butterfly;
mod error;
mod fft;
mod float;
mod split;
mod twiddle;

pub use crate::butterfly::combine;
pub use crate::error::{Error, Result};
pub use crate::fft::{transform, transform_halves, Configuration};
pub use crate::float::FftFloat;
pub use crate::split::split_parity;
pub use crate::twiddle::{apply_twiddles, compute_twiddle, twiddles, Direction};
