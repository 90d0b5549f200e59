//! Kinematic scoring of candidate gimbal configurations.

use nalgebra::{Matrix3, RealField, Vector3};

use super::state::GimbalState;
use crate::convert::matrix::{matrix_to_euler, rotation_x, rotation_y, rotation_z};

/// Principal angles `(alpha, beta, gamma)` once the redundant joint is set to `delta`.
///
/// The redundant contribution is removed as a Y rotation, `R · Ry(-delta)`, while
/// [`joint_axes`] models the redundant joint about Z. The two conventions do not agree;
/// both are kept as they are.
pub fn principal_angles<T: RealField + Copy>(target: &Matrix3<T>, delta: T) -> (T, T, T) {
    let reduced = target * rotation_y(-delta);
    let angles = matrix_to_euler(&reduced);
    (angles.yaw, angles.pitch, angles.roll)
}

/// Base-frame rotation axes of the four joints along the chain
/// `Z(alpha) · Y(beta) · X(gamma) · Z(delta)`.
pub fn joint_axes<T: RealField + Copy>(state: &GimbalState<T>) -> [Vector3<T>; 4] {
    let outer = rotation_z(state.alpha);
    let middle = outer * rotation_y(state.beta);
    let inner = middle * rotation_x(state.gamma);

    [
        Vector3::z(),
        outer * Vector3::y(),
        middle * Vector3::x(),
        inner * Vector3::z(),
    ]
}

/// `det(Σ Aᵏ·Aᵏᵀ)` over the joint axes.
///
/// Zero when the axes span less than 3D (a singular configuration); larger is safer.
pub fn safety_metric<T: RealField + Copy>(state: &GimbalState<T>) -> T {
    let mut m = Matrix3::<T>::zeros();
    for axis in joint_axes(state) {
        m += axis * axis.transpose();
    }
    m.determinant()
}

/// Squared change of the redundant angle between ticks.
#[inline]
pub fn speed_penalty<T: RealField + Copy>(candidate: T, previous: T) -> T {
    let step = candidate - previous;
    step * step
}
