//! Rodrigues arrow of a rotation whose axis stays in the YZ plane.
//!
//! With the x component of the quaternion held at zero the arrow tip never leaves a
//! disk of radius `length`. Crossing the rim flips the tip to the opposite side, since
//! a half turn about `n` and about `-n` are the same rotation.

use attitude::display::{Arrow, ArrowConfig};
use attitude::{Animation, AnimationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ArrowConfig::<f64>::default()
        .with_length(200.0)
        .with_color([100, 100, 250]);
    let animation = Animation::new(AnimationConfig::<f64>::rodrigues_2d());
    let (_, frames) = animation.run(240);

    let mut previous_tip: Option<nalgebra::Vector3<f64>> = None;
    for (tick, frame) in frames.iter().enumerate() {
        let arrow = Arrow::from_quaternion(&frame.quaternion, config);
        if let Some(previous) = previous_tip {
            let jump: f64 = (arrow.tip - previous).norm();
            if jump > config.length {
                println!("tick {:03}: tip wrapped across the rim (jump {:.1})", tick, jump);
            }
        }
        if tick % 10 == 0 {
            println!(
                "tick {:03}: tip ({:7.2}, {:7.2}, {:7.2})  |tip| {:6.2}",
                tick, arrow.tip.x, arrow.tip.y, arrow.tip.z, arrow.magnitude
            );
        }
        previous_tip = Some(arrow.tip);
    }

    Ok(())
}
