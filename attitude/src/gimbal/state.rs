//! State carried by the gimbal solver between ticks.

use nalgebra::{Matrix3, RealField};

use crate::convert::matrix::{rotation_x, rotation_y, rotation_z};

/// Joint angles of the four-ring gimbal.
///
/// `alpha`, `beta` and `gamma` drive the Z, Y and X rings; `delta` drives the redundant
/// ring. The state starts at zero and is the only memory carried from one tick to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GimbalState<T> {
    pub alpha: T,
    pub beta: T,
    pub gamma: T,
    pub delta: T,
}

impl<T: RealField + Copy> GimbalState<T> {
    pub fn new(alpha: T, beta: T, gamma: T, delta: T) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn as_array(&self) -> [T; 4] {
        [self.alpha, self.beta, self.gamma, self.delta]
    }

    /// `Rz(alpha) · Ry(beta) · Rx(gamma)`, the orientation of the principal rings.
    pub fn principal_matrix(&self) -> Matrix3<T> {
        rotation_z(self.alpha) * rotation_y(self.beta) * rotation_x(self.gamma)
    }
}
