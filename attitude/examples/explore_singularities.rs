//! Locates the gimbal-lock orientations inside the rotation-vector ball.
//!
//! The ball of radius π holds every rotation exactly once (up to antipodal points on its
//! surface). The orientations at which a Z-Y-X gimbal locks form two surfaces in it.

use attitude::convert::{quaternion_to_euler, rotation_vector_to_quaternion};
use attitude::display::{Arrow, ArrowConfig};
use attitude::singularity::{SingularitySampler, DEFAULT_RESOLUTION};
use core::f64::consts::{FRAC_PI_2, PI};
use nalgebra::Vector3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let resolution = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(DEFAULT_RESOLUTION / 2);

    let sampler = SingularitySampler::new(resolution, 0.06)?;
    let points = sampler.sample();
    println!(
        "{} near-lock grid points on a {}^3 grid",
        points.len(),
        sampler.resolution()
    );

    let (upper, lower): (Vec<&Vector3<f64>>, Vec<&Vector3<f64>>) =
        points.iter().partition(|point| {
            let q = rotation_vector_to_quaternion(&(*point * PI));
            quaternion_to_euler(&q).pitch > 0.0
        });
    println!("pitch +90°: {}, pitch -90°: {}", upper.len(), lower.len());

    let config = ArrowConfig::default().with_length(100.0);
    for point in points.iter().step_by((points.len() / 8).max(1)) {
        let arrow = Arrow::from_rotation_vector(&(point * PI), config);
        println!("arrow tip {:7.2?}", arrow.tip.as_slice());
    }

    let pure_pitch = Vector3::new(0.0, FRAC_PI_2, 0.0);
    println!(
        "pure pitch by 90° is near lock: {}",
        sampler.is_near_lock(&pure_pitch)
    );

    Ok(())
}
