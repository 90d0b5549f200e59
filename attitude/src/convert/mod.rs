//! Conversions between quaternions and the other rotation representations.

pub mod axis_angle;
pub mod euler;
pub mod matrix;
pub mod tetrahedral;

pub use axis_angle::{
    axis_angle_to_quaternion, quaternion_to_axis_angle, quaternion_to_rotation_vector,
    rotation_vector_to_quaternion, AxisAngle,
};
pub use euler::{euler_to_quaternion, quaternion_to_euler, EulerAngles};
pub use matrix::{
    euler_to_rotation_matrix, matrix_to_euler, quaternion_to_rotation_matrix, rotation_x,
    rotation_y, rotation_z,
};
pub use tetrahedral::{quaternion_to_tetrahedral, tetrahedral_axes, TetrahedralAngles};
