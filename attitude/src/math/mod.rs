pub mod scalar;

pub use scalar::{clamp_unit, half, real, two};
