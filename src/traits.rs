use std::ops::{Add, Div, Mul, Neg, Sub};

/// Coordinate scalar abstraction, implemented for `f32` and `f64`.
///
/// `From<f32>` provides the small exact constants the geometry needs
/// (0.0, 0.5, ...) without a numeric-traits dependency.
pub trait Scalar:
    Copy
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + Neg<Output = Self>
    + PartialOrd<Self>
    + From<f32>
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Provides approximate equality for floating point values.
pub trait ApproxEq: Copy {
    fn approx_eq(self, other: Self) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq(self, other: Self) -> bool {
        const EPSILON: f32 = 2.0 * std::f32::EPSILON;
        (self - other).abs() <= EPSILON
    }
}

impl ApproxEq for f64 {
    fn approx_eq(self, other: Self) -> bool {
        const EPSILON: f64 = 2.0 * std::f64::EPSILON;
        (self - other).abs() <= EPSILON
    }
}
