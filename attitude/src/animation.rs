//! Frame-by-frame driving of a rotation and its derived representations.
//!
//! [`Animation::tick`] takes the previous [`AnimationState`] and returns the next one
//! together with a [`Frame`] holding every representation of the current rotation.
//! The caller owns the state; nothing is kept between calls.

use nalgebra::{Quaternion, RealField, Scalar, Vector3};

use crate::convert::{
    euler_to_quaternion, quaternion_to_axis_angle, quaternion_to_euler,
    quaternion_to_tetrahedral, rotation_vector_to_quaternion, AxisAngle, EulerAngles,
    TetrahedralAngles,
};
use crate::generator::Generator;
use crate::gimbal::{GimbalState, RedundantGimbalSolver};
use crate::math::real;
use crate::quaternion::{identity, slerp};

/// Source of the rotation at a given animation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion<T: Scalar> {
    /// `generator(time + phase)`.
    Generated { generator: Generator, phase: T },
    /// Slerp from `from` to `to`, with the time clamped to `[0, 1]`.
    Interpolated {
        from: Quaternion<T>,
        to: Quaternion<T>,
    },
    Fixed(Quaternion<T>),
}

impl<T: RealField + Copy> Motion<T> {
    pub fn sample(&self, time: T) -> Quaternion<T> {
        match self {
            Motion::Generated { generator, phase } => generator.sample(time + *phase),
            Motion::Interpolated { from, to } => slerp(from, to, time.clamp(T::zero(), T::one())),
            Motion::Fixed(q) => *q,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig<T: Scalar> {
    pub motion: Motion<T>,
    /// Time added per tick once the hold period is over.
    pub time_step: T,
    /// Number of initial ticks during which the time stays put.
    pub hold_ticks: u64,
    pub record_history: bool,
    /// Most recent rotations kept in the history; `None` keeps every tick.
    pub history_limit: Option<usize>,
    pub solve_gimbal: bool,
}

impl<T: RealField + Copy> AnimationConfig<T> {
    pub fn new(motion: Motion<T>, time_step: T) -> Self {
        Self {
            motion,
            time_step,
            hold_ticks: 0,
            record_history: false,
            history_limit: None,
            solve_gimbal: false,
        }
    }

    pub fn with_hold_ticks(mut self, hold_ticks: u64) -> Self {
        self.hold_ticks = hold_ticks;
        self
    }

    /// Record every sampled rotation in [`AnimationState::history`].
    ///
    /// The history grows by one quaternion per tick unless capped with
    /// [`Self::with_history_limit`].
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    /// Keep only the `limit` most recent rotations in the history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_gimbal(mut self, solve_gimbal: bool) -> Self {
        self.solve_gimbal = solve_gimbal;
        self
    }

    /// Smooth pseudo-random motion shown through three Euler rings.
    pub fn random_euler_angles() -> Self {
        Self::new(generated(Generator::PseudoRandom, T::zero()), real(0.05))
    }

    /// Same motion as [`Self::random_euler_angles`], shown through the tetrahedral rings.
    pub fn random_four_euler_angles() -> Self {
        Self::new(generated(Generator::PseudoRandom, T::zero()), real(0.05))
    }

    /// Slerp across the pitch singularity, from 40° to 140° of pitch.
    pub fn through_euler_singularity() -> Self {
        let pitch_offset = real::<T>(50.0f64.to_radians());
        let roll = real::<T>(10.0f64.to_radians());
        let from = euler_to_quaternion(T::zero(), T::frac_pi_2() - pitch_offset, -roll);
        let to = euler_to_quaternion(T::zero(), T::frac_pi_2() + pitch_offset, roll);
        Self::new(Motion::Interpolated { from, to }, real(0.005))
            .with_hold_ticks(40)
            .with_history(true)
    }

    /// Motion restricted to rotation axes in the YZ plane.
    pub fn rodrigues_2d() -> Self {
        Self::new(
            generated(Generator::PseudoRandomPlanar, T::one()),
            T::two_pi() / real(120.0),
        )
    }

    pub fn rp2_representations() -> Self {
        Self::new(
            generated(Generator::PseudoRepeating, T::zero()),
            T::pi() / real(240.0),
        )
    }

    /// Pseudo-random motion tracked by the four-ring gimbal.
    pub fn redundant_gimbal() -> Self {
        Self::random_euler_angles().with_gimbal(true)
    }

    /// A still rotation given as a rotation vector.
    pub fn explore_singularities(rotation_vector: &Vector3<T>) -> Self {
        Self::new(
            Motion::Fixed(rotation_vector_to_quaternion(rotation_vector)),
            T::zero(),
        )
    }
}

fn generated<T: Scalar>(generator: Generator, phase: T) -> Motion<T> {
    Motion::Generated { generator, phase }
}

/// Everything carried from one tick to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState<T: Scalar> {
    pub time: T,
    pub tick: u64,
    pub gimbal: GimbalState<T>,
    pub history: Vec<Quaternion<T>>,
}

impl<T: RealField + Copy> AnimationState<T> {
    pub fn new() -> Self {
        Self {
            time: T::zero(),
            tick: 0,
            gimbal: GimbalState::zero(),
            history: Vec::new(),
        }
    }
}

impl<T: RealField + Copy> Default for AnimationState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All representations of the rotation at one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<T: Scalar> {
    pub time: T,
    pub quaternion: Quaternion<T>,
    pub euler: EulerAngles<T>,
    pub axis_angle: AxisAngle<T>,
    pub tetrahedral: TetrahedralAngles<T>,
    /// Present when the animation solves the redundant gimbal.
    pub gimbal: Option<GimbalState<T>>,
}

impl<T: RealField + Copy> Frame<T> {
    pub fn from_quaternion(time: T, quaternion: Quaternion<T>) -> Self {
        Self {
            time,
            quaternion,
            euler: quaternion_to_euler(&quaternion),
            axis_angle: quaternion_to_axis_angle(&quaternion),
            tetrahedral: quaternion_to_tetrahedral(&quaternion),
            gimbal: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation<T: Scalar> {
    config: AnimationConfig<T>,
    solver: RedundantGimbalSolver<T>,
}

impl<T: RealField + Copy> Animation<T> {
    pub fn new(config: AnimationConfig<T>) -> Self {
        Self {
            config,
            solver: RedundantGimbalSolver::default(),
        }
    }

    pub fn with_solver(mut self, solver: RedundantGimbalSolver<T>) -> Self {
        self.solver = solver;
        self
    }

    pub fn config(&self) -> &AnimationConfig<T> {
        &self.config
    }

    /// Advance one tick.
    pub fn tick(&self, state: AnimationState<T>) -> (AnimationState<T>, Frame<T>) {
        let AnimationState {
            mut time,
            tick,
            mut gimbal,
            mut history,
        } = state;

        let tick = tick + 1;
        if tick > self.config.hold_ticks {
            time += self.config.time_step;
        }

        let quaternion = self.config.motion.sample(time);
        let mut frame = Frame::from_quaternion(time, quaternion);

        if self.config.solve_gimbal {
            gimbal = self.solver.solve_quaternion(&gimbal, &quaternion);
            frame.gimbal = Some(gimbal);
        }
        if self.config.record_history {
            history.push(quaternion);
            if let Some(limit) = self.config.history_limit {
                let excess = history.len().saturating_sub(limit);
                history.drain(..excess);
            }
        }

        log::trace!("tick {tick}: t = {time}, q = {quaternion:?}");

        (
            AnimationState {
                time,
                tick,
                gimbal,
                history,
            },
            frame,
        )
    }

    /// Run `ticks` ticks from a fresh state, collecting the frames.
    pub fn run(&self, ticks: usize) -> (AnimationState<T>, Vec<Frame<T>>) {
        let mut state = AnimationState::new();
        let mut frames = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            let (next, frame) = self.tick(state);
            state = next;
            frames.push(frame);
        }
        log::debug!("ran {ticks} ticks, final time {}", state.time);
        (state, frames)
    }
}

impl<T: RealField + Copy> Default for Animation<T> {
    fn default() -> Self {
        Self::new(AnimationConfig::new(Motion::Fixed(identity()), T::zero()))
    }
}
