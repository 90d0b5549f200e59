//! Scalar helpers shared by the generic rotation math.

use nalgebra::RealField;

/// Convert an `f64` literal into the working scalar.
#[inline(always)]
pub fn real<T: RealField + Copy>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Semantic shorthand for 2.
#[inline(always)]
pub fn two<T: RealField + Copy>() -> T {
    T::one() + T::one()
}

/// Semantic shorthand for 1/2.
#[inline(always)]
pub fn half<T: RealField + Copy>() -> T {
    real(0.5)
}

/// Clamp into `[-1, 1]` before an inverse trigonometric call.
#[inline(always)]
pub fn clamp_unit<T: RealField + Copy>(value: T) -> T {
    value.clamp(-T::one(), T::one())
}
