use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing fast Fourier transforms.
pub trait FftFloat: Float + FloatConst + FromPrimitive + NumAssign + Default + Clone {
    /// Converts a value computed in double precision, such as a twiddle phase component.
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}
impl<T> FftFloat for T where T: Float + FloatConst + FromPrimitive + NumAssign + Default + Clone {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn narrows_to_f32() {
        assert_eq!(f32::from_f64_lossy(0.5), 0.5f32);
        assert_eq!(f64::from_f64_lossy(-0.25), -0.25f64);
    }
}
