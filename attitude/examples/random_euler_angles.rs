//! Smooth pseudo-random rotation shown through three Euler rings.
//!
//! Prints the yaw, pitch and roll ring angles every few ticks together with the
//! distance of pitch from gimbal lock. Run with `RUST_LOG=trace` to see every tick.

use attitude::{Animation, AnimationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let animation = Animation::new(AnimationConfig::<f64>::random_euler_angles());
    let (_, frames) = animation.run(600);

    for (tick, frame) in frames.iter().enumerate().step_by(20) {
        let euler = frame.euler;
        println!(
            "tick {:03}: yaw {:7.2}°  pitch {:7.2}°  roll {:7.2}°  (lock margin {:6.2}°)",
            tick,
            euler.yaw.to_degrees(),
            euler.pitch.to_degrees(),
            euler.roll.to_degrees(),
            euler.distance_to_gimbal_lock().to_degrees()
        );
    }

    let closest = frames
        .iter()
        .map(|frame| frame.euler.distance_to_gimbal_lock())
        .fold(f64::INFINITY, f64::min);
    println!("\nclosest approach to gimbal lock: {:.2}°", closest.to_degrees());

    Ok(())
}
