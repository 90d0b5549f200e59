//! Local line search over the redundant joint.

use nalgebra::{Matrix3, Quaternion, RealField};

use super::error::SolverError;
use super::metric::{principal_angles, safety_metric, speed_penalty};
use super::state::GimbalState;
use crate::convert::matrix::quaternion_to_rotation_matrix;
use crate::math::{real, two};

/// Default number of sampled redundant angles per tick.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;
/// Default half width of the search window around the previous redundant angle, in radians.
pub const DEFAULT_SEARCH_HALF_WIDTH: f64 = 0.1;
/// Default weight of the speed penalty.
pub const DEFAULT_SPEED_WEIGHT: f64 = 1.0;

/// Tunable parameters of [`RedundantGimbalSolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig<T> {
    pub sample_count: usize,
    pub search_half_width: T,
    pub speed_weight: T,
}

impl<T: RealField + Copy> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            search_half_width: real(DEFAULT_SEARCH_HALF_WIDTH),
            speed_weight: real(DEFAULT_SPEED_WEIGHT),
        }
    }
}

impl<T: RealField + Copy> SolverConfig<T> {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_search_half_width(mut self, search_half_width: T) -> Self {
        self.search_half_width = search_half_width;
        self
    }

    pub fn with_speed_weight(mut self, speed_weight: T) -> Self {
        self.speed_weight = speed_weight;
        self
    }

    fn validate(&self) -> Result<(), SolverError> {
        if self.sample_count == 0 {
            return Err(SolverError::ZeroSamples);
        }
        if !self.search_half_width.is_finite() || self.search_half_width < T::zero() {
            return Err(SolverError::InvalidSearchWidth);
        }
        if !self.speed_weight.is_finite() || self.speed_weight < T::zero() {
            return Err(SolverError::InvalidSpeedWeight);
        }
        Ok(())
    }
}

/// One scored sample of the redundant angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate<T> {
    pub state: GimbalState<T>,
    pub safety: T,
    pub penalty: T,
    pub objective: T,
}

/// Chooses the redundant angle that keeps a four-ring gimbal away from singular
/// configurations while limiting how fast that ring turns.
///
/// Each tick samples `sample_count` redundant angles evenly across
/// `[delta_prev - search_half_width, delta_prev + search_half_width]`, solves the
/// three principal angles for each, and keeps the candidate maximizing
/// `safety - speed_weight * penalty`. The search is local by construction: the
/// redundant angle moves by at most `search_half_width` per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedundantGimbalSolver<T> {
    config: SolverConfig<T>,
}

impl<T: RealField + Copy> RedundantGimbalSolver<T> {
    /// Validate `config` and build a solver.
    pub fn new(config: SolverConfig<T>) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Redundant angles sampled around `previous_delta`, in ascending order.
    pub fn candidate_deltas(&self, previous_delta: T) -> impl Iterator<Item = T> {
        let count = self.config.sample_count;
        let half_width = self.config.search_half_width;
        let last = count.saturating_sub(1);
        (0..count).map(move |i| {
            if last == 0 {
                return previous_delta;
            }
            let fraction = real::<T>(i as f64) / real::<T>(last as f64);
            previous_delta + half_width * (two::<T>() * fraction - T::one())
        })
    }

    /// Score a single redundant angle for `target`.
    pub fn score(&self, previous: &GimbalState<T>, target: &Matrix3<T>, delta: T) -> Candidate<T> {
        let (alpha, beta, gamma) = principal_angles(target, delta);
        let state = GimbalState::new(alpha, beta, gamma, delta);
        let safety = safety_metric(&state);
        let penalty = speed_penalty(delta, previous.delta);
        Candidate {
            state,
            safety,
            penalty,
            objective: safety - self.config.speed_weight * penalty,
        }
    }

    /// Every sampled candidate, in ascending redundant-angle order.
    pub fn evaluate(&self, previous: &GimbalState<T>, target: &Matrix3<T>) -> Vec<Candidate<T>> {
        self.candidate_deltas(previous.delta)
            .map(|delta| self.score(previous, target, delta))
            .collect()
    }

    /// Next gimbal state for `target`, given the state of the previous tick.
    ///
    /// Ties keep the first (lowest) candidate. A non-finite objective never wins over a
    /// finite one; when no objective is finite the lowest sample is returned.
    pub fn solve(&self, previous: &GimbalState<T>, target: &Matrix3<T>) -> GimbalState<T> {
        let mut deltas = self.candidate_deltas(previous.delta);
        // sample_count >= 1 is enforced in `new`
        let first = deltas.next().unwrap_or(previous.delta);
        let mut best = self.score(previous, target, first);

        for delta in deltas {
            let candidate = self.score(previous, target, delta);
            let replaces_unusable = !best.objective.is_finite() && candidate.objective.is_finite();
            if candidate.objective > best.objective || replaces_unusable {
                best = candidate;
            }
        }

        if !best.objective.is_finite() {
            log::warn!(
                "no finite objective around delta = {}, keeping {}",
                previous.delta,
                best.state.delta
            );
        }
        log::trace!(
            "gimbal solve: delta {} -> {} (safety {}, penalty {})",
            previous.delta,
            best.state.delta,
            best.safety,
            best.penalty
        );

        best.state
    }

    /// [`Self::solve`] for a unit-quaternion target.
    pub fn solve_quaternion(
        &self,
        previous: &GimbalState<T>,
        target: &Quaternion<T>,
    ) -> GimbalState<T> {
        self.solve(previous, &quaternion_to_rotation_matrix(target))
    }
}

impl<T: RealField + Copy> Default for RedundantGimbalSolver<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}
