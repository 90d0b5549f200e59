//! Yaw/pitch/roll Euler angles in intrinsic Z-Y-X order.

use nalgebra::{Quaternion, RealField};

use crate::math::{clamp_unit, half, two};

/// Euler angles in radians, composed as `Z(yaw) · Y(pitch) · X(roll)`.
///
/// Matches the gimbal nesting: the yaw ring is outermost, the roll ring innermost.
/// `pitch` stays within `[-π/2, π/2]`; at the ends yaw and roll are coupled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerAngles<T> {
    pub yaw: T,
    pub pitch: T,
    pub roll: T,
}

impl<T: RealField + Copy> EulerAngles<T> {
    pub fn new(yaw: T, pitch: T, roll: T) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Equivalent unit quaternion.
    pub fn to_quaternion(&self) -> Quaternion<T> {
        euler_to_quaternion(self.yaw, self.pitch, self.roll)
    }

    /// Distance of `pitch` from the nearest gimbal-lock pole.
    pub fn distance_to_gimbal_lock(&self) -> T {
        T::frac_pi_2() - self.pitch.abs()
    }
}

/// Build a unit quaternion from half-angle sines and cosines.
pub fn euler_to_quaternion<T: RealField + Copy>(yaw: T, pitch: T, roll: T) -> Quaternion<T> {
    let (sy, cy) = (yaw * half::<T>()).sin_cos();
    let (sp, cp) = (pitch * half::<T>()).sin_cos();
    let (sr, cr) = (roll * half::<T>()).sin_cos();

    Quaternion::new(
        cy * cp * cr + sy * sp * sr,
        cy * cp * sr - sy * sp * cr,
        sy * cp * sr + cy * sp * cr,
        sy * cp * cr - cy * sp * sr,
    )
}

/// Recover yaw, pitch and roll from a unit quaternion.
///
/// The pitch argument is clamped to `[-1, 1]` before `asin`; near gimbal lock the
/// returned yaw/roll split is valid but not unique.
pub fn quaternion_to_euler<T: RealField + Copy>(q: &Quaternion<T>) -> EulerAngles<T> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let ysqr = y * y;

    let t0 = two::<T>() * (w * x + y * z);
    let t1 = T::one() - two::<T>() * (x * x + ysqr);
    let roll = t0.atan2(t1);

    let t2 = clamp_unit(two::<T>() * (w * y - z * x));
    let pitch = t2.asin();

    let t3 = two::<T>() * (w * z + x * y);
    let t4 = T::one() - two::<T>() * (ysqr + z * z);
    let yaw = t3.atan2(t4);

    EulerAngles { yaw, pitch, roll }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::{normalize, rotate_vector};
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, PI};
    use nalgebra::{UnitQuaternion, Vector3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn zero_angles_give_identity() {
        let q = euler_to_quaternion(0.0, 0.0, 0.0);
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn matches_nalgebra_zyx_composition() {
        let (yaw, pitch, roll) = (0.7, -0.3, 1.1);
        let ours = euler_to_quaternion(yaw, pitch, roll);
        // nalgebra's from_euler_angles(roll, pitch, yaw) composes Z · Y · X.
        let reference = UnitQuaternion::from_euler_angles(roll, pitch, yaw).into_inner();
        assert_abs_diff_eq!(ours.coords, reference.coords, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_away_from_gimbal_lock() {
        let mut rng = StdRng::seed_from_u64(3);
        let margin = 1e-2;
        for _ in 0..500 {
            let yaw = rng.random_range(-PI + margin..PI - margin);
            let pitch = rng.random_range(-FRAC_PI_2 + margin..FRAC_PI_2 - margin);
            let roll = rng.random_range(-PI + margin..PI - margin);
            let angles = quaternion_to_euler(&euler_to_quaternion(yaw, pitch, roll));
            assert_abs_diff_eq!(angles.yaw, yaw, epsilon = 1e-8);
            assert_abs_diff_eq!(angles.pitch, pitch, epsilon = 1e-8);
            assert_abs_diff_eq!(angles.roll, roll, epsilon = 1e-8);
        }
    }

    #[test]
    fn gimbal_lock_returns_finite_angles() {
        let q = euler_to_quaternion(0.4, FRAC_PI_2, -0.2);
        let angles = quaternion_to_euler(&q);
        assert!(angles.yaw.is_finite() && angles.roll.is_finite());
        assert_abs_diff_eq!(angles.pitch, FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.distance_to_gimbal_lock(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn to_quaternion_reproduces_rotation() {
        let angles = EulerAngles::new(-1.2, 0.5, 2.0);
        let q = normalize(&angles.to_quaternion());
        let v = Vector3::new(0.3, -0.5, 0.8);
        let expected = UnitQuaternion::from_euler_angles(2.0, 0.5, -1.2).transform_vector(&v);
        assert_abs_diff_eq!(rotate_vector(&v, &q), expected, epsilon = 1e-12);
    }

    #[test]
    fn overshooting_quaternion_is_clamped() {
        // Slightly non-unit input pushes the asin argument past 1.
        let q = Quaternion::new(0.7072, 0.0, 0.7072, 0.0);
        let angles = quaternion_to_euler(&q);
        assert_abs_diff_eq!(angles.pitch, FRAC_PI_2, epsilon = 1e-12);
    }
}
