//! Redundant four-ring gimbal.
//!
//! A three-ring gimbal loses a degree of freedom when its middle ring reaches ±π/2.
//! Adding a fourth, redundant ring lets the mechanism trade that singularity for a
//! continuous choice: each tick [`RedundantGimbalSolver`] picks the redundant angle
//! near the previous one that maximizes [`safety_metric`] minus a speed penalty.

pub mod error;
pub mod metric;
pub mod solver;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::SolverError;
pub use metric::{joint_axes, principal_angles, safety_metric, speed_penalty};
pub use solver::{Candidate, RedundantGimbalSolver, SolverConfig};
pub use state::GimbalState;
