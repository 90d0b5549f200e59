//! Quaternion algebra on scalar-first rotation quaternions.
//!
//! Functions operate on plain [`Quaternion`] values rather than `UnitQuaternion` so that
//! the caller decides when to renormalize.

use nalgebra::{Quaternion, RealField, Vector3};

use crate::math::{clamp_unit, real, two};

/// Above this dot product slerp falls back to a renormalized lerp.
pub const SLERP_LERP_THRESHOLD: f64 = 0.9995;

/// Build a quaternion from scalar-first components.
#[inline]
pub fn quaternion_from_components<T: RealField + Copy>(w: T, x: T, y: T, z: T) -> Quaternion<T> {
    Quaternion::new(w, x, y, z)
}

/// The identity rotation `{w: 1, x: 0, y: 0, z: 0}`.
#[inline]
pub fn identity<T: RealField + Copy>() -> Quaternion<T> {
    Quaternion::new(T::one(), T::zero(), T::zero(), T::zero())
}

/// Four-component dot product.
#[inline]
pub fn dot<T: RealField + Copy>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> T {
    q1.w * q2.w + q1.i * q2.i + q1.j * q2.j + q1.k * q2.k
}

/// Hamilton product `q1 * q2`. The result is not normalized.
pub fn multiply<T: RealField + Copy>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> Quaternion<T> {
    Quaternion::new(
        q1.w * q2.w - q1.i * q2.i - q1.j * q2.j - q1.k * q2.k,
        q1.w * q2.i + q1.i * q2.w + q1.j * q2.k - q1.k * q2.j,
        q1.w * q2.j - q1.i * q2.k + q1.j * q2.w + q1.k * q2.i,
        q1.w * q2.k + q1.i * q2.j - q1.j * q2.i + q1.k * q2.w,
    )
}

/// Divide every component by the Euclidean norm.
///
/// A zero quaternion produces NaN components; callers must not pass one.
pub fn normalize<T: RealField + Copy>(q: &Quaternion<T>) -> Quaternion<T> {
    let magnitude = dot(q, q).sqrt();
    Quaternion::new(
        q.w / magnitude,
        q.i / magnitude,
        q.j / magnitude,
        q.k / magnitude,
    )
}

/// Rotate `v` by the unit quaternion `q` without building a matrix.
///
/// Uses `v' = v + 2w(u × v) + 2(u × (u × v))` where `u` is the vector part of `q`.
pub fn rotate_vector<T: RealField + Copy>(v: &Vector3<T>, q: &Quaternion<T>) -> Vector3<T> {
    let u = Vector3::new(q.i, q.j, q.k);
    let uv = u.cross(v);
    let uuv = u.cross(&uv);
    v + uv * (two::<T>() * q.w) + uuv * two::<T>()
}

/// Spherical linear interpolation from `q1` (`t = 0`) to `q2` (`t = 1`).
///
/// Takes the shorter arc by flipping `q2` when the quaternions lie in opposite
/// hemispheres. Nearly parallel inputs are lerped and renormalized.
pub fn slerp<T: RealField + Copy>(q1: &Quaternion<T>, q2: &Quaternion<T>, t: T) -> Quaternion<T> {
    let mut cos_theta = dot(q1, q2);
    let mut q2 = *q2;
    if cos_theta < T::zero() {
        q2 = -q2;
        cos_theta = -cos_theta;
    }

    if cos_theta > real(SLERP_LERP_THRESHOLD) {
        let blended = Quaternion::new(
            q1.w + t * (q2.w - q1.w),
            q1.i + t * (q2.i - q1.i),
            q1.j + t * (q2.j - q1.j),
            q1.k + t * (q2.k - q1.k),
        );
        return normalize(&blended);
    }

    let theta = clamp_unit(cos_theta).acos();
    let sin_theta = theta.sin();
    let s0 = ((T::one() - t) * theta).sin() / sin_theta;
    let s1 = (t * theta).sin() / sin_theta;

    Quaternion::new(
        s0 * q1.w + s1 * q2.w,
        s0 * q1.i + s1 * q2.i,
        s0 * q1.j + s1 * q2.j,
        s0 * q1.k + s1 * q2.k,
    )
}
