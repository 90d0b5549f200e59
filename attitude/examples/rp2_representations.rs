//! The same repeating motion in every representation side by side, plus the
//! disk-to-hemisphere morph used to picture the projective plane RP².

use attitude::display::{disk_to_hemisphere, rp2_point_pair};
use attitude::{Animation, AnimationConfig};
use core::f64::consts::{FRAC_PI_2, PI, TAU};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let animation = Animation::new(AnimationConfig::<f64>::rp2_representations());
    let (_, frames) = animation.run(480);

    for (tick, frame) in frames.iter().enumerate().step_by(40) {
        let q = frame.quaternion;
        let axis_angle = frame.axis_angle;
        println!(
            "tick {:03}: q = ({:6.3}, {:6.3}, {:6.3}, {:6.3})  \
             axis ({:6.3}, {:6.3}, {:6.3}) angle {:7.2}°  euler ({:7.2}°, {:7.2}°, {:7.2}°)",
            tick,
            q.w,
            q.i,
            q.j,
            q.k,
            axis_angle.axis.x,
            axis_angle.axis.y,
            axis_angle.axis.z,
            axis_angle.angle.to_degrees(),
            frame.euler.yaw.to_degrees(),
            frame.euler.pitch.to_degrees(),
            frame.euler.roll.to_degrees()
        );
    }

    println!("\nthe same rotations as antipodal point pairs on the RP² sphere:");
    for (tick, frame) in frames.iter().enumerate().step_by(60) {
        let [p, antipode] = rp2_point_pair(&frame.quaternion, 100.0);
        println!(
            "tick {:03}: ({:7.2}, {:7.2}, {:7.2})  and  ({:7.2}, {:7.2}, {:7.2})",
            tick, p.x, p.y, p.z, antipode.x, antipode.y, antipode.z
        );
    }

    println!("\nrim and pole of the morphing disk:");
    for step in 0..=4 {
        let morph = PI * f64::from(step) / 4.0;
        let rim = disk_to_hemisphere(FRAC_PI_2, 0.0, morph, 1.0, 100.0);
        let pole = disk_to_hemisphere(0.0, TAU, morph, 1.0, 100.0);
        println!(
            "morph {:4.2}: rim z {:7.2}, pole z {:7.2}",
            morph, rim.z, pole.z
        );
    }

    Ok(())
}
