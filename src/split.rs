//! Decimation in time.

/// Splits a sequence into its even-indexed and odd-indexed elements.
///
/// For an input of length `n` the halves have lengths `ceil(n / 2)` and `floor(n / 2)`.
pub fn split_parity<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    let even = input.iter().step_by(2).copied().collect();
    let odd = input.iter().skip(1).step_by(2).copied().collect();
    (even, odd)
}
