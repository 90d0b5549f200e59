//! Sampling of the Euler-angle singularity inside the rotation-vector ball.
//!
//! Every rotation is a rotation vector of length at most π. Scaling that ball to the unit
//! ball, this module marks the grid points whose Z-Y-X pitch lies within a tolerance of
//! ±π/2, i.e. the orientations at which a three-ring gimbal locks.

use core::fmt;

use nalgebra::{RealField, Vector3};

use crate::convert::{quaternion_to_euler, rotation_vector_to_quaternion};
use crate::math::real;

pub const DEFAULT_RESOLUTION: usize = 80;
pub const DEFAULT_TOLERANCE: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    /// The grid needs at least two points per dimension.
    ResolutionTooSmall,
    /// The pitch tolerance must be finite and positive.
    InvalidTolerance,
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::ResolutionTooSmall => write!(f, "grid resolution must be at least 2"),
            SamplerError::InvalidTolerance => write!(f, "tolerance must be finite and positive"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Grid sampler for gimbal-lock orientations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularitySampler<T> {
    resolution: usize,
    tolerance: T,
}

impl<T: RealField + Copy> SingularitySampler<T> {
    pub fn new(resolution: usize, tolerance: T) -> Result<Self, SamplerError> {
        if resolution < 2 {
            return Err(SamplerError::ResolutionTooSmall);
        }
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(SamplerError::InvalidTolerance);
        }
        Ok(Self {
            resolution,
            tolerance,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Whether the rotation vector `vector` (length = angle) is within tolerance of lock.
    pub fn is_near_lock(&self, vector: &Vector3<T>) -> bool {
        let pitch = quaternion_to_euler(&rotation_vector_to_quaternion(vector)).pitch;
        (pitch.abs() - T::frac_pi_2()).abs() < self.tolerance
    }

    /// Grid coordinate in `[-1, 1]` of index `i`.
    fn coordinate(&self, i: usize) -> T {
        let half_grid = real::<T>((self.resolution - 1) as f64) / real(2.0);
        (real::<T>(i as f64) - half_grid) / half_grid
    }

    /// Normalized rotation vectors (scale by π for the actual rotation vector) whose
    /// pitch is near ±π/2, in grid order.
    pub fn sample(&self) -> Vec<Vector3<T>> {
        let coordinates: Vec<T> = (0..self.resolution).map(|i| self.coordinate(i)).collect();
        let mut points = Vec::new();

        for &x in &coordinates {
            for &y in &coordinates {
                for &z in &coordinates {
                    let point = Vector3::new(x, y, z);
                    if point.norm_squared() > T::one() {
                        continue;
                    }
                    if self.is_near_lock(&(point * T::pi())) {
                        points.push(point);
                    }
                }
            }
        }

        log::debug!(
            "sampled {} near-lock orientations on a {}^3 grid",
            points.len(),
            self.resolution
        );
        points
    }
}

impl<T: RealField + Copy> Default for SingularitySampler<T> {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            tolerance: real(DEFAULT_TOLERANCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            SingularitySampler::new(1, 0.1),
            Err(SamplerError::ResolutionTooSmall)
        );
        assert_eq!(
            SingularitySampler::new(10, 0.0),
            Err(SamplerError::InvalidTolerance)
        );
        assert_eq!(
            SingularitySampler::new(10, f64::NAN),
            Err(SamplerError::InvalidTolerance)
        );
    }

    #[test]
    fn pure_pitch_quarter_turn_is_near_lock() {
        let sampler = SingularitySampler::<f64>::default();
        assert!(sampler.is_near_lock(&Vector3::new(0.0, FRAC_PI_2, 0.0)));
        assert!(!sampler.is_near_lock(&Vector3::new(0.0, 0.3, 0.0)));
        assert!(!sampler.is_near_lock(&Vector3::zeros()));
    }

    #[test]
    fn samples_lie_in_ball_and_satisfy_criterion() {
        let sampler = SingularitySampler::new(21, 0.1).expect("valid sampler");
        let points = sampler.sample();
        assert!(!points.is_empty());
        for point in &points {
            assert!(point.norm() <= 1.0 + 1e-12);
            assert!(sampler.is_near_lock(&(point * PI)));
        }
    }

    #[test]
    fn grid_endpoints_are_unit() {
        let sampler = SingularitySampler::new(5, 0.1).expect("valid sampler");
        assert_eq!(sampler.coordinate(0), -1.0);
        assert_eq!(sampler.coordinate(2), 0.0);
        assert_eq!(sampler.coordinate(4), 1.0);
    }
}
