//! Renderer-agnostic geometry for drawing rotations.
//!
//! Nothing here draws. The types describe arrows, rings and traces in world
//! coordinates so any backend (the `rerun` demos, a plotting script) can render them.

use nalgebra::{Quaternion, RealField, Vector3};

use crate::convert::tetrahedral::tetrahedral_axes;
use crate::convert::{quaternion_to_axis_angle, AxisAngle, EulerAngles, TetrahedralAngles};
use crate::gimbal::GimbalState;
use crate::math::{clamp_unit, half, real};
use crate::quaternion::rotate_vector;

/// Below this cross-product norm the shaft direction is treated as parallel to +Y.
const PARALLEL_THRESHOLD: f64 = 1e-4;

/// Drawing parameters of a Rodrigues arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowConfig<T> {
    /// Length of an arrow for a half turn.
    pub length: T,
    pub shaft_radius: T,
    pub ball_radius: T,
    pub color: [u8; 3],
}

impl<T: RealField + Copy> Default for ArrowConfig<T> {
    fn default() -> Self {
        Self {
            length: T::one(),
            shaft_radius: real(1.5),
            ball_radius: real(5.0),
            color: [250, 100, 100],
        }
    }
}

impl<T: RealField + Copy> ArrowConfig<T> {
    pub fn with_length(mut self, length: T) -> Self {
        self.length = length;
        self
    }

    pub fn with_shaft_radius(mut self, shaft_radius: T) -> Self {
        self.shaft_radius = shaft_radius;
        self
    }

    pub fn with_ball_radius(mut self, ball_radius: T) -> Self {
        self.ball_radius = ball_radius;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }
}

/// An arrow from the origin along a rotation axis, as long as the rotation angle
/// relative to a half turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow<T> {
    pub tip: Vector3<T>,
    pub magnitude: T,
    /// Rotation taking a shaft modelled along +Y onto the arrow direction.
    pub shaft_rotation: AxisAngle<T>,
    pub config: ArrowConfig<T>,
}

impl<T: RealField + Copy> Arrow<T> {
    pub fn from_quaternion(q: &Quaternion<T>, config: ArrowConfig<T>) -> Self {
        let axis_angle = quaternion_to_axis_angle(q);
        Self::from_axis_angle(&axis_angle.axis, axis_angle.angle, config)
    }

    /// Arrow for a rotation vector whose length is the angle.
    pub fn from_rotation_vector(vector: &Vector3<T>, config: ArrowConfig<T>) -> Self {
        let angle = vector.norm();
        if angle == T::zero() {
            return Self::from_axis_angle(&Vector3::x(), angle, config);
        }
        Self::from_axis_angle(&(vector / angle), angle, config)
    }

    fn from_axis_angle(axis: &Vector3<T>, angle: T, config: ArrowConfig<T>) -> Self {
        let magnitude = angle.abs() / T::pi() * config.length;
        let direction = axis.try_normalize(T::zero()).unwrap_or_else(Vector3::zeros);
        Self {
            tip: direction * magnitude,
            magnitude,
            shaft_rotation: shaft_rotation(&direction),
            config,
        }
    }

    /// Center of the shaft cylinder.
    pub fn shaft_center(&self) -> Vector3<T> {
        self.tip * half::<T>()
    }
}

/// Rotation taking +Y onto the unit vector `direction`.
fn shaft_rotation<T: RealField + Copy>(direction: &Vector3<T>) -> AxisAngle<T> {
    let up = Vector3::<T>::y();
    let cross = up.cross(direction);
    let cos = up.dot(direction);

    if cross.norm() < real(PARALLEL_THRESHOLD) {
        if cos < T::zero() {
            return AxisAngle::new(Vector3::x(), T::pi());
        }
        return AxisAngle::zero();
    }

    let axis = cross.normalize();
    AxisAngle::new(axis, clamp_unit(cos).acos())
}

/// A ring rotating by `angle` about `axis`, expressed in the frame of its parent ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTransform<T> {
    pub angle: T,
    pub axis: Vector3<T>,
}

impl<T: RealField + Copy> RingTransform<T> {
    pub fn new(angle: T, axis: Vector3<T>) -> Self {
        Self { angle, axis }
    }

    pub fn to_quaternion(&self) -> Quaternion<T> {
        crate::convert::axis_angle_to_quaternion(&self.axis, self.angle)
    }
}

/// Yaw, pitch and roll rings, outermost first.
pub fn euler_rings<T: RealField + Copy>(angles: &EulerAngles<T>) -> [RingTransform<T>; 3] {
    [
        RingTransform::new(angles.yaw, Vector3::z()),
        RingTransform::new(angles.pitch, Vector3::y()),
        RingTransform::new(angles.roll, Vector3::x()),
    ]
}

/// The four gimbal rings, outermost first; the redundant ring turns about Z.
pub fn gimbal_rings<T: RealField + Copy>(state: &GimbalState<T>) -> [RingTransform<T>; 4] {
    [
        RingTransform::new(state.alpha, Vector3::z()),
        RingTransform::new(state.beta, Vector3::y()),
        RingTransform::new(state.gamma, Vector3::x()),
        RingTransform::new(state.delta, Vector3::z()),
    ]
}

/// Tetrahedral rings, outermost first: delta about T₄ down to alpha about T₁.
pub fn tetrahedral_rings<T: RealField + Copy>(
    angles: &TetrahedralAngles<T>,
) -> [RingTransform<T>; 4] {
    let axes = tetrahedral_axes::<T>();
    [
        RingTransform::new(angles.delta, axes[3]),
        RingTransform::new(angles.gamma, axes[2]),
        RingTransform::new(angles.beta, axes[1]),
        RingTransform::new(angles.alpha, axes[0]),
    ]
}

/// Points traced by `base` under each rotation of `history`.
pub fn trail<T: RealField + Copy>(history: &[Quaternion<T>], base: &Vector3<T>) -> Vec<Vector3<T>> {
    history.iter().map(|q| rotate_vector(base, q)).collect()
}

/// Point of a disk that folds into a hemisphere as `morph` goes from 0 to π.
///
/// `theta` is the polar angle, `phi` the azimuth and `direction` (±1) picks the
/// hemisphere.
pub fn disk_to_hemisphere<T: RealField + Copy>(
    theta: T,
    phi: T,
    morph: T,
    direction: T,
    radius: T,
) -> Vector3<T> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let fold = (morph.cos() - T::one()) * half::<T>();
    Vector3::new(
        radius * sin_theta * cos_phi,
        radius * sin_theta * sin_phi,
        radius * cos_theta * direction * fold,
    )
}

/// The two antipodal points `±(w, y, z) · radius` a planar rotation (`x = 0`) occupies
/// on the sphere.
///
/// `q` and `-q` give the same pair in swapped order, so a rotation is a pair of opposite
/// points, i.e. a single point of RP².
pub fn rp2_point_pair<T: RealField + Copy>(q: &Quaternion<T>, radius: T) -> [Vector3<T>; 2] {
    let point = Vector3::new(q.w, q.j, q.k) * radius;
    [point, -point]
}
