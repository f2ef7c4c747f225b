//! The radix-2 butterfly.

use crate::float::FftFloat;
use crate::twiddle::{apply_twiddles, Direction};
use num_complex::Complex;

/// Combines the transforms of the even and odd halves of a sequence into the transform of the
/// whole sequence of length `size`.
///
/// `even` and `odd` must both contain `size / 2` elements.
pub fn combine<T: FftFloat>(
    even: &[Complex<T>],
    odd: &[Complex<T>],
    size: usize,
) -> Vec<Complex<T>> {
    debug_assert_eq!(even.len(), odd.len());
    debug_assert_eq!(even.len() * 2, size);

    let rotated = apply_twiddles(odd, size, Direction::Forward);
    let mut output = Vec::with_capacity(size);
    output.extend(even.iter().zip(rotated.iter()).map(|(e, o)| e + o));
    output.extend(even.iter().zip(rotated.iter()).map(|(e, o)| e - o));
    output
}
