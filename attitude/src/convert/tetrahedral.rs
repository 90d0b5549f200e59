//! Four-angle decomposition onto the axes of a regular tetrahedron.
//!
//! The rotation vector is projected on four unit axes pointing at alternating cube
//! corners. The four ring angles are driven from the same quaternion as a reference
//! model, so the display shows how a redundant four-ring gimbal tracks it.

use nalgebra::{Quaternion, RealField, Vector3};

use crate::math::{clamp_unit, real, two};

/// Unnormalized tetrahedral directions, in ring order alpha, beta, gamma, delta.
const TETRAHEDRAL_DIRECTIONS: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Angles about the four tetrahedral axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TetrahedralAngles<T> {
    pub alpha: T,
    pub beta: T,
    pub gamma: T,
    pub delta: T,
}

impl<T: RealField + Copy> TetrahedralAngles<T> {
    pub fn as_array(&self) -> [T; 4] {
        [self.alpha, self.beta, self.gamma, self.delta]
    }
}

/// The four normalized tetrahedral axes.
pub fn tetrahedral_axes<T: RealField + Copy>() -> [Vector3<T>; 4] {
    TETRAHEDRAL_DIRECTIONS.map(|[x, y, z]| Vector3::new(real(x), real(y), real(z)).normalize())
}

/// Project the rotation of `q` onto each tetrahedral axis.
///
/// A quaternion with a zero vector part has no defined axis and yields all zeros.
pub fn quaternion_to_tetrahedral<T: RealField + Copy>(q: &Quaternion<T>) -> TetrahedralAngles<T> {
    let vector = Vector3::new(q.i, q.j, q.k);
    let norm = vector.norm();
    if norm == T::zero() {
        return TetrahedralAngles {
            alpha: T::zero(),
            beta: T::zero(),
            gamma: T::zero(),
            delta: T::zero(),
        };
    }

    let angle = two::<T>() * clamp_unit(q.w).acos();
    let axis = vector / norm;
    let [a, b, c, d] = tetrahedral_axes::<T>().map(|t| angle * axis.dot(&t));

    TetrahedralAngles {
        alpha: a,
        beta: b,
        gamma: c,
        delta: d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::axis_angle::axis_angle_to_quaternion;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axes_are_unit_and_sum_to_zero() {
        let axes = tetrahedral_axes::<f64>();
        let mut sum = Vector3::zeros();
        for axis in &axes {
            assert_abs_diff_eq!(axis.norm(), 1.0, epsilon = 1e-12);
            sum += axis;
        }
        assert_abs_diff_eq!(sum, Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn identity_projects_to_zero() {
        let angles = quaternion_to_tetrahedral(&Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(angles, TetrahedralAngles::default());
    }

    #[test]
    fn rotation_about_first_axis() {
        let axes = tetrahedral_axes::<f64>();
        let q = axis_angle_to_quaternion(&axes[0], 0.9);
        let angles = quaternion_to_tetrahedral(&q);
        assert_abs_diff_eq!(angles.alpha, 0.9, epsilon = 1e-12);
        // Distinct tetrahedral axes meet at cos = -1/3.
        for other in [angles.beta, angles.gamma, angles.delta] {
            assert_abs_diff_eq!(other, -0.3, epsilon = 1e-12);
        }
        let total: f64 = angles.as_array().iter().sum();
        assert_abs_diff_eq!(total, 0.0, epsilon = 1e-12);
    }
}
