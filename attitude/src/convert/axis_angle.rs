//! Axis-angle and rotation-vector (Rodrigues) representations.

use nalgebra::{Quaternion, RealField, Vector3};

use crate::math::{clamp_unit, half, real, two};

/// Above this `|w|` the rotation angle is treated as zero.
pub const IDENTITY_W_THRESHOLD: f64 = 0.9999;

/// Below this `sqrt(1 - w²)` the vector part is returned unscaled.
pub const AXIS_SCALE_THRESHOLD: f64 = 1e-4;

/// A rotation of `angle` radians about `axis`.
///
/// After [`quaternion_to_axis_angle`] the angle lies in `[0, π]`. When the angle is
/// zero the axis carries no information and is reported as unit X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle<T> {
    pub axis: Vector3<T>,
    pub angle: T,
}

impl<T: RealField + Copy> AxisAngle<T> {
    pub fn new(axis: Vector3<T>, angle: T) -> Self {
        Self { axis, angle }
    }

    /// The zero rotation with the default axis.
    pub fn zero() -> Self {
        Self::new(Vector3::x(), T::zero())
    }

    /// Rotation vector `axis * angle`.
    pub fn rotation_vector(&self) -> Vector3<T> {
        self.axis * self.angle
    }

    pub fn to_quaternion(&self) -> Quaternion<T> {
        axis_angle_to_quaternion(&self.axis, self.angle)
    }
}

/// Closed-form quaternion for a rotation about a pre-normalized axis.
pub fn axis_angle_to_quaternion<T: RealField + Copy>(axis: &Vector3<T>, angle: T) -> Quaternion<T> {
    let (s, c) = (angle * half::<T>()).sin_cos();
    Quaternion::new(c, axis.x * s, axis.y * s, axis.z * s)
}

/// Decompose a unit quaternion into the minor-angle axis-angle pair.
pub fn quaternion_to_axis_angle<T: RealField + Copy>(q: &Quaternion<T>) -> AxisAngle<T> {
    if q.w.abs() > real(IDENTITY_W_THRESHOLD) {
        return AxisAngle::zero();
    }

    let mut angle = two::<T>() * clamp_unit(q.w).acos();
    let s = (T::one() - q.w * q.w).sqrt();
    let vector = Vector3::new(q.i, q.j, q.k);

    if s < real(AXIS_SCALE_THRESHOLD) {
        return AxisAngle::new(vector, angle);
    }

    let mut axis = vector / s;
    if angle > T::pi() {
        angle = T::two_pi() - angle;
        axis = -axis;
    }

    AxisAngle::new(axis, angle)
}

/// Quaternion for a rotation vector whose length is the angle. The zero vector maps
/// to the identity.
pub fn rotation_vector_to_quaternion<T: RealField + Copy>(vector: &Vector3<T>) -> Quaternion<T> {
    let angle = vector.norm();
    if angle == T::zero() {
        return crate::quaternion::identity();
    }
    axis_angle_to_quaternion(&(vector / angle), angle)
}

/// Rotation vector of a unit quaternion, using the minor angle.
pub fn quaternion_to_rotation_vector<T: RealField + Copy>(q: &Quaternion<T>) -> Vector3<T> {
    quaternion_to_axis_angle(q).rotation_vector()
}
