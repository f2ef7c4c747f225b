use crate::butterfly::combine;
use crate::error::{Error, Result};
use crate::float::FftFloat;
use crate::split::split_parity;
use num_complex::Complex;
use tracing::{debug, trace};

/// Returns true if `size` is a nonzero power of two.
#[inline]
fn is_radix2(size: usize) -> bool {
    size != 0 && size & (size - 1) == 0
}

/// A validated transform size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    size: usize,
    depth: usize,
}

impl Configuration {
    /// Construct a new configuration with the FFT size.
    ///
    /// Fails with [`Error::InvalidLength`] unless `size` is a power of two.
    ///
    /// [`Error::InvalidLength`]: enum.Error.html#variant.InvalidLength
    pub fn new(size: usize) -> Result<Self> {
        if !is_radix2(size) {
            return Err(Error::InvalidLength(size));
        }
        Ok(Self {
            size,
            depth: size.trailing_zeros() as usize,
        })
    }

    /// The size of the FFT.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of radix-2 stages, `log2(size)`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Apply an FFT out-of-place.
    pub fn transform<T: FftFloat>(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        if input.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                actual: input.len(),
            });
        }
        debug!(size = self.size, depth = self.depth, "radix-2 transform");
        Ok(radix2(input))
    }
}

fn radix2<T: FftFloat>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let size = input.len();
    debug_assert!(is_radix2(size));
    trace!(size, "radix-2 stage");

    if size == 1 {
        return input.to_vec();
    }

    let (even, odd) = split_parity(input);
    let even = radix2(&even);
    let odd = radix2(&odd);
    combine(&even, &odd, size)
}

/// Computes the DFT of `input`, `X[k] = Σ x[n] exp(-2πikn/N)`.
///
/// The input length must be a power of two.
pub fn transform<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    Configuration::new(input.len())?.transform(input)
}

/// Computes the DFTs of the even-indexed and odd-indexed halves of `input` separately.
///
/// The results are suitable inputs to [`combine`](fn.combine.html) with size `input.len()`.
/// The input length must be a power of two of at least 2.
pub fn transform_halves<T: FftFloat>(
    input: &[Complex<T>],
) -> Result<(Vec<Complex<T>>, Vec<Complex<T>>)> {
    let configuration = Configuration::new(input.len())?;
    if configuration.depth == 0 {
        return Err(Error::InvalidLength(input.len()));
    }
    debug!(size = configuration.size, "radix-2 half transforms");
    let (even, odd) = split_parity(input);
    Ok((radix2(&even), radix2(&odd)))
}
