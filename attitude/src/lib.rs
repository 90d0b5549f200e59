//! Rotation representations and a redundant gimbal solver in Rust
//!
//! Quaternions are the canonical representation. Everything else (Euler angles,
//! axis-angle, rotation vectors, rotation matrices, tetrahedral angles) is derived
//! from them on demand. The [`gimbal`] module keeps a four-ring gimbal clear of the
//! singular configurations a three-ring Euler gimbal runs into.

pub mod animation;
pub mod convert;
pub mod display;
pub mod generator;
pub mod gimbal;
pub mod math;
pub mod quaternion;
pub mod singularity;

pub use animation::{Animation, AnimationConfig, AnimationState, Frame, Motion};
pub use convert::{AxisAngle, EulerAngles, TetrahedralAngles};
pub use generator::Generator;
pub use gimbal::{GimbalState, RedundantGimbalSolver, SolverConfig, SolverError};
pub use singularity::{SamplerError, SingularitySampler};
