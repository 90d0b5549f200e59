//! Deterministic "pseudo-random" rotation generators.
//!
//! Each generator drives the four quaternion components with fixed-frequency sines and
//! cosines and normalizes the result. The motion is smooth and periodic rather than
//! random; distinct frequencies and phases keep the repetition out of sight for the
//! length of an animation loop.

use nalgebra::{Quaternion, RealField};

use crate::math::real;
use crate::quaternion::{dot, identity};

/// Available generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// Full 3D motion.
    PseudoRandom,
    /// `x` held at zero.
    PseudoRandomPlanar,
    /// `x` held at zero, with faster frequencies so the loop closes visibly.
    PseudoRepeating,
}

impl Generator {
    /// Unit quaternion at time `t`.
    pub fn sample<T: RealField + Copy>(self, t: T) -> Quaternion<T> {
        match self {
            Generator::PseudoRandom => pseudo_random_quaternion(t),
            Generator::PseudoRandomPlanar => pseudo_random_planar_quaternion(t),
            Generator::PseudoRepeating => pseudo_repeating_quaternion(t),
        }
    }
}

/// Normalize, falling back to the identity when the magnitude vanishes.
fn normalized_or_identity<T: RealField + Copy>(w: T, x: T, y: T, z: T) -> Quaternion<T> {
    let q = Quaternion::new(w, x, y, z);
    let magnitude = dot(&q, &q).sqrt();
    if magnitude <= T::default_epsilon() {
        log::warn!("generator produced a degenerate quaternion, using identity");
        return identity();
    }
    q / magnitude
}

pub fn pseudo_random_quaternion<T: RealField + Copy>(t: T) -> Quaternion<T> {
    let w = (-t * real(0.5) + T::one()).cos();
    let x = (-t * real(0.3)).sin();
    let y = (t * real(0.2) + T::one()).cos();
    let z = (t * real(0.2) + real(2.0)).sin();
    normalized_or_identity(w, x, y, z)
}

pub fn pseudo_random_planar_quaternion<T: RealField + Copy>(t: T) -> Quaternion<T> {
    let w = (-t * real(0.5) + T::one()).cos();
    let y = (t * real(0.2) + T::one()).cos();
    let z = (t * real(0.2) + real(2.0)).sin();
    normalized_or_identity(w, T::zero(), y, z)
}

pub fn pseudo_repeating_quaternion<T: RealField + Copy>(t: T) -> Quaternion<T> {
    let w = (-t * real(3.0) + T::one()).cos();
    let y = (t + T::one()).cos();
    let z = (t * real(3.0) + real(2.0)).sin();
    normalized_or_identity(w, T::zero(), y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::TAU;

    const ALL: [Generator; 3] = [
        Generator::PseudoRandom,
        Generator::PseudoRandomPlanar,
        Generator::PseudoRepeating,
    ];

    #[test]
    fn outputs_are_unit_for_sampled_times() {
        for generator in ALL {
            for step in -2000..2000 {
                let t = f64::from(step) * 0.037;
                let q = generator.sample(t);
                assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn planar_generators_keep_x_at_zero() {
        for step in 0..500 {
            let t = f64::from(step) * 0.05;
            assert_eq!(Generator::PseudoRandomPlanar.sample(t).i, 0.0);
            assert_eq!(Generator::PseudoRepeating.sample(t).i, 0.0);
        }
    }

    #[test]
    fn generators_are_deterministic_and_continuous() {
        for generator in ALL {
            let a = generator.sample(4.2);
            let b = generator.sample(4.2);
            assert_eq!(a, b);
            let c = generator.sample(4.2 + 1e-6);
            assert!((a.coords - c.coords).norm() < 1e-4);
        }
    }

    #[test]
    fn repeating_generator_has_period_two_pi() {
        let a = pseudo_repeating_quaternion(0.7);
        let b = pseudo_repeating_quaternion(0.7 + TAU);
        assert_abs_diff_eq!(a.coords, b.coords, epsilon = 1e-9);
    }

    #[test]
    fn known_value_at_zero() {
        let q = pseudo_random_quaternion(0.0);
        let (w, y, z) = (1.0f64.cos(), 1.0f64.cos(), 2.0f64.sin());
        let m = (w * w + y * y + z * z).sqrt();
        let expected = Quaternion::new(w / m, 0.0, y / m, z / m);
        assert_abs_diff_eq!(q.coords, expected.coords, epsilon = 1e-12);
    }
}
