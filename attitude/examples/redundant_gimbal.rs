//! A four-ring gimbal tracking pseudo-random motion.
//!
//! Each tick the redundant ring is nudged toward the configuration whose joint axes are
//! farthest from coplanar. Compare the safety metric with the one a plain three-ring
//! gimbal (redundant ring held at zero) would have for the same target.
//!
//! Build with `--features rerun` to stream the rings and the Rodrigues arrow to a viewer.

use attitude::display::{gimbal_rings, Arrow, ArrowConfig};
use attitude::gimbal::{safety_metric, GimbalState, RedundantGimbalSolver, SolverConfig};
use attitude::{Animation, AnimationConfig, AnimationState};

#[cfg(feature = "rerun")]
struct Visualizer {
    rec: rerun::RecordingStream,
}

#[cfg(feature = "rerun")]
impl Visualizer {
    fn new(name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let rec = rerun::RecordingStreamBuilder::new(name).spawn()?;
        Ok(Self { rec })
    }

    fn set_step(&self, step: i64) {
        self.rec.set_time_sequence("step", step);
    }

    fn log_rotation(
        &self,
        path: &str,
        q: &nalgebra::Quaternion<f64>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        use rerun::{archetypes::Transform3D, datatypes::Quaternion as RerunQuaternion};
        self.rec.log(
            path,
            &Transform3D::from_rotation(RerunQuaternion::from_xyzw([
                q.i as f32, q.j as f32, q.k as f32, q.w as f32,
            ])),
        )?;
        Ok(())
    }

    fn log_arrow(&self, path: &str, arrow: &Arrow<f64>) -> Result<(), Box<dyn std::error::Error>> {
        use rerun::{archetypes::Arrows3D, Color};
        let [r, g, b] = arrow.config.color;
        self.rec.log(
            path,
            &Arrows3D::from_vectors([[
                arrow.tip.x as f32,
                arrow.tip.y as f32,
                arrow.tip.z as f32,
            ]])
            .with_colors([Color::from_rgb(r, g, b)]),
        )?;
        Ok(())
    }

    fn log_scalar(&self, path: &str, value: f64) -> Result<(), Box<dyn std::error::Error>> {
        self.rec.log(path, &rerun::Scalar::new(value))?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    #[cfg(feature = "rerun")]
    let viz = Visualizer::new("redundant_gimbal")?;

    let solver = RedundantGimbalSolver::new(
        SolverConfig::default()
            .with_sample_count(50)
            .with_search_half_width(0.1)
            .with_speed_weight(1.0),
    )?;
    let animation = Animation::new(AnimationConfig::<f64>::redundant_gimbal()).with_solver(solver);
    let arrow_config = ArrowConfig::default().with_length(1.0);

    let mut state = AnimationState::new();
    let mut worst_redundant = f64::INFINITY;
    let mut worst_plain = f64::INFINITY;

    for _ in 0..1200 {
        let (next, frame) = animation.tick(state);
        state = next;

        let gimbal = frame.gimbal.ok_or("gimbal solving is disabled")?;
        let euler = frame.euler;
        let plain = GimbalState::new(euler.yaw, euler.pitch, euler.roll, 0.0);
        let redundant_safety = safety_metric(&gimbal);
        let plain_safety = safety_metric(&plain);
        worst_redundant = worst_redundant.min(redundant_safety);
        worst_plain = worst_plain.min(plain_safety);

        if state.tick % 100 == 0 {
            let rings = gimbal_rings(&gimbal).map(|ring| ring.angle.to_degrees());
            let arrow = Arrow::from_quaternion(&frame.quaternion, arrow_config);
            println!(
                "tick {:04}: rings ({:7.2}°, {:7.2}°, {:7.2}°, {:7.2}°)  \
                 safety {:.3} (three rings {:.3})  arrow {:.2}",
                state.tick,
                rings[0],
                rings[1],
                rings[2],
                rings[3],
                redundant_safety,
                plain_safety,
                arrow.magnitude
            );
        }

        #[cfg(feature = "rerun")]
        {
            viz.set_step(state.tick as i64);
            let mut ring = attitude::quaternion::identity();
            for (k, transform) in gimbal_rings(&gimbal).iter().enumerate() {
                ring = attitude::quaternion::multiply(&ring, &transform.to_quaternion());
                viz.log_rotation(&format!("gimbal/ring{}", k), &ring)?;
            }
            let arrow = Arrow::from_quaternion(&frame.quaternion, arrow_config);
            viz.log_arrow("rodrigues", &arrow)?;
            viz.log_scalar("safety/redundant", redundant_safety)?;
            viz.log_scalar("safety/three_rings", plain_safety)?;
        }
    }

    println!(
        "\nlowest safety: {:.4} with the redundant ring, {:.4} without",
        worst_redundant, worst_plain
    );

    Ok(())
}
