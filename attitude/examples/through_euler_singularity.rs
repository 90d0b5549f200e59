//! Slerp straight through pitch = 90° and watch the Euler angles jump.
//!
//! The quaternion path is smooth, yet the yaw and roll rings flip by half a turn when
//! pitch passes the pole. The nose of the body traces a smooth arc all along.

use attitude::display::trail;
use attitude::{Animation, AnimationConfig, AnimationState, EulerAngles};
use nalgebra::Vector3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let animation = Animation::new(AnimationConfig::<f64>::through_euler_singularity());
    let mut state = AnimationState::new();
    let mut previous_euler: Option<EulerAngles<f64>> = None;

    // 40 held ticks, then 200 ticks to reach t = 1.
    for _ in 0..260 {
        let (next, frame) = animation.tick(state);
        state = next;

        if let Some(previous) = previous_euler {
            let yaw_jump: f64 = (frame.euler.yaw - previous.yaw).abs();
            let roll_jump: f64 = (frame.euler.roll - previous.roll).abs();
            if yaw_jump > 1.0 || roll_jump > 1.0 {
                println!(
                    "tick {:03} (t = {:.3}): yaw jumped {:.1}°, roll jumped {:.1}°",
                    state.tick,
                    frame.time,
                    yaw_jump.to_degrees(),
                    roll_jump.to_degrees()
                );
            }
        }
        if state.tick % 20 == 0 {
            println!(
                "tick {:03} (t = {:.3}): yaw {:7.2}°  pitch {:7.2}°  roll {:7.2}°",
                state.tick,
                frame.time,
                frame.euler.yaw.to_degrees(),
                frame.euler.pitch.to_degrees(),
                frame.euler.roll.to_degrees()
            );
        }
        previous_euler = Some(frame.euler);
    }

    let nose = trail(&state.history, &Vector3::x());
    let longest_step = nose
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).norm())
        .fold(0.0, f64::max);
    println!(
        "\nnose trail: {} points, longest step {:.4}",
        nose.len(),
        longest_step
    );

    Ok(())
}
