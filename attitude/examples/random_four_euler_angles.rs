//! The pseudo-random rotation decomposed onto four tetrahedral axes.

use attitude::convert::tetrahedral::tetrahedral_axes;
use attitude::display::tetrahedral_rings;
use attitude::{Animation, AnimationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    for (k, axis) in tetrahedral_axes::<f64>().iter().enumerate() {
        println!("T{}: {:6.3?}", k + 1, axis.as_slice());
    }
    println!();

    let animation = Animation::new(AnimationConfig::<f64>::random_four_euler_angles());
    let (_, frames) = animation.run(400);

    for (tick, frame) in frames.iter().enumerate().step_by(25) {
        let rings = tetrahedral_rings(&frame.tetrahedral);
        let degrees = rings.map(|ring| ring.angle.to_degrees());
        println!(
            "tick {:03}: T4 {:7.2}°  T3 {:7.2}°  T2 {:7.2}°  T1 {:7.2}°  (rotation {:6.2}°)",
            tick,
            degrees[0],
            degrees[1],
            degrees[2],
            degrees[3],
            frame.axis_angle.angle.to_degrees()
        );
    }

    Ok(())
}
