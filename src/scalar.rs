use num_traits::Float;
use std::fmt::Debug;

/// Floating-point width the engine runs at.
///
/// Implemented for `f32` and `f64`; everything in the renderer is generic over
/// it so both precisions share one DDA.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    fn from_i32(value: i32) -> Self;

    /// narrowing for `f32`
    fn from_f64(value: f64) -> Self;

    /// truncate toward zero, saturating at the `i32` range (NaN maps to 0)
    fn trunc_i32(self) -> i32;
}

impl Scalar for f32 {
    #[inline]
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn trunc_i32(self) -> i32 {
        self as i32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_i32(value: i32) -> Self {
        value as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn trunc_i32(self) -> i32 {
        self as i32
    }
}
