//! Rotation matrices: elementary axis rotations, quaternion conversion and
//! Z-Y-X angle extraction.

use nalgebra::{Matrix3, Quaternion, RealField};

use super::euler::EulerAngles;
use crate::math::{clamp_unit, two};

/// Rotation by `angle` about the X axis.
pub fn rotation_x<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(
        l, o, o, //
        o, c, -s, //
        o, s, c,
    )
}

/// Rotation by `angle` about the Y axis.
pub fn rotation_y<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(
        c, o, s, //
        o, l, o, //
        -s, o, c,
    )
}

/// Rotation by `angle` about the Z axis.
pub fn rotation_z<T: RealField + Copy>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(
        c, -s, o, //
        s, c, o, //
        o, o, l,
    )
}

/// Orthonormal matrix of a unit quaternion, written out row by row.
pub fn quaternion_to_rotation_matrix<T: RealField + Copy>(q: &Quaternion<T>) -> Matrix3<T> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let two = two::<T>();
    let one = T::one();

    Matrix3::new(
        one - two * (y * y + z * z),
        two * (x * y - w * z),
        two * (x * z + w * y),
        two * (x * y + w * z),
        one - two * (x * x + z * z),
        two * (y * z - w * x),
        two * (x * z - w * y),
        two * (y * z + w * x),
        one - two * (x * x + y * y),
    )
}

/// Extract angles with `R = Rz(yaw) · Ry(pitch) · Rx(roll)`.
///
/// Same asin clamp as the quaternion path; at `|pitch| = π/2` yaw and roll are not unique.
pub fn matrix_to_euler<T: RealField + Copy>(r: &Matrix3<T>) -> EulerAngles<T> {
    let pitch = clamp_unit(-r[(2, 0)]).asin();
    let yaw = r[(1, 0)].atan2(r[(0, 0)]);
    let roll = r[(2, 1)].atan2(r[(2, 2)]);
    EulerAngles { yaw, pitch, roll }
}

/// `Rz(yaw) · Ry(pitch) · Rx(roll)`.
pub fn euler_to_rotation_matrix<T: RealField + Copy>(angles: &EulerAngles<T>) -> Matrix3<T> {
    rotation_z(angles.yaw) * rotation_y(angles.pitch) * rotation_x(angles.roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::euler::{euler_to_quaternion, quaternion_to_euler};
    use approx::assert_abs_diff_eq;
    use nalgebra::{UnitQuaternion, Vector3};

    #[test]
    fn elementary_rotations_match_nalgebra() {
        let angle = 0.83;
        let x = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle);
        let y = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle);
        let z = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle);
        assert_abs_diff_eq!(rotation_x(angle), *x.to_rotation_matrix().matrix(), epsilon = 1e-12);
        assert_abs_diff_eq!(rotation_y(angle), *y.to_rotation_matrix().matrix(), epsilon = 1e-12);
        assert_abs_diff_eq!(rotation_z(angle), *z.to_rotation_matrix().matrix(), epsilon = 1e-12);
    }

    #[test]
    fn quaternion_matrix_matches_nalgebra() {
        let q = euler_to_quaternion(0.4, -0.9, 2.2);
        let expected = UnitQuaternion::new_unchecked(q).to_rotation_matrix();
        let ours = quaternion_to_rotation_matrix(&q);
        assert_abs_diff_eq!(ours, *expected.matrix(), epsilon = 1e-12);
        assert_abs_diff_eq!(ours.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matrix_angles_agree_with_quaternion_angles() {
        let q = euler_to_quaternion(-2.1, 0.6, 0.35);
        let from_matrix = matrix_to_euler(&quaternion_to_rotation_matrix(&q));
        let from_quaternion = quaternion_to_euler(&q);
        assert_abs_diff_eq!(from_matrix.yaw, from_quaternion.yaw, epsilon = 1e-10);
        assert_abs_diff_eq!(from_matrix.pitch, from_quaternion.pitch, epsilon = 1e-10);
        assert_abs_diff_eq!(from_matrix.roll, from_quaternion.roll, epsilon = 1e-10);
    }

    #[test]
    fn extraction_inverts_composition() {
        let angles = EulerAngles::new(1.3, -0.45, -2.6);
        let recovered = matrix_to_euler(&euler_to_rotation_matrix(&angles));
        assert_abs_diff_eq!(recovered.yaw, angles.yaw, epsilon = 1e-12);
        assert_abs_diff_eq!(recovered.pitch, angles.pitch, epsilon = 1e-12);
        assert_abs_diff_eq!(recovered.roll, angles.roll, epsilon = 1e-12);
    }
}
