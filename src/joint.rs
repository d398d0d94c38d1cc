//! Distance joints connecting mesh vertices, solved by iterative relaxation.

use crate::float::Float;
use crate::particle::Particle;

/// A distance joint between two mesh vertices.
///
/// Stiffness is the fraction of the position error corrected per solver
/// iteration, in [0, 1].
pub struct DistanceJoint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> DistanceJoint<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        DistanceJoint { a, b, rest_length, stiffness }
    }

    /// Joint whose rest length is the current distance between the vertices.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], stiffness: F) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        DistanceJoint { a, b, rest_length, stiffness }
    }

    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;
        let a_inv = particles[self.a].inv_mass;
        let b_inv = particles[self.b].inv_mass;

        let w_total = a_inv + b_inv;
        if w_total.is_near_zero(F::from_f32(1e-10)) {
            return; // both pinned
        }

        let delta = b_pos - a_pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return; // degenerate
        }

        let error = dist - self.rest_length;
        let correction = delta.scale(error * self.stiffness / dist);

        if !particles[self.a].pinned {
            particles[self.a].pos = particles[self.a].pos + correction.scale(a_inv / w_total);
        }
        if !particles[self.b].pinned {
            particles[self.b].pos = particles[self.b].pos - correction.scale(b_inv / w_total);
        }
    }
}

/// Map a joint's frequency (Hz) and damping ratio onto solver parameters.
///
/// Returns `(stiffness, damping_factor)`:
/// - stiffness: position-error fraction per iteration, `1 - exp(-2πf·dt)`.
///   Frequency 0 means a rigid joint (stiffness 1).
/// - damping_factor: per-sub-step velocity retention, `exp(-ζ·2πf·dt)`,
///   the decay rate of a damped oscillator at that frequency.
pub fn soft_params<F: Float>(frequency_hz: F, damping_ratio: F, sub_dt: F) -> (F, F) {
    if frequency_hz <= F::zero() {
        return (F::one(), F::one());
    }
    let omega = F::two() * F::pi() * frequency_hz;
    let stiffness = (F::one() - (-omega * sub_dt).exp()).clamp(F::zero(), F::one());
    let damping_factor = (-damping_ratio * omega * sub_dt).exp().clamp(F::zero(), F::one());
    (stiffness, damping_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;

    #[test]
    fn joint_pulls_vertices_to_rest_length() {
        let mut particles = [
            Particle::new(Vec2::new(0.0f32, 0.0), 1.0, 1.0),
            Particle::new(Vec2::new(20.0, 0.0), 1.0, 1.0),
        ];
        let joint = DistanceJoint::new(0, 1, 5.0, 1.0);
        for _ in 0..10 {
            joint.solve(&mut particles);
        }
        let dist = particles[0].pos.distance(particles[1].pos);
        assert!((dist - 5.0).abs() < 0.5, "distance should be near 5.0, got {}", dist);
    }

    #[test]
    fn heavier_vertex_moves_less() {
        let mut particles = [
            Particle::new(Vec2::new(0.0f32, 0.0), 10.0, 1.0), // heavy
            Particle::new(Vec2::new(10.0, 0.0), 1.0, 1.0),    // light
        ];
        let initial_heavy = particles[0].pos;
        let initial_light = particles[1].pos;

        let joint = DistanceJoint::new(0, 1, 5.0, 1.0);
        joint.solve(&mut particles);

        let heavy_moved = particles[0].pos.distance(initial_heavy);
        let light_moved = particles[1].pos.distance(initial_light);
        assert!(heavy_moved < light_moved);
        assert!(heavy_moved > 0.0);
    }

    #[test]
    fn zero_frequency_is_rigid() {
        let (stiffness, damping) = soft_params(0.0f32, 1.0, 1.0 / 120.0);
        assert_eq!(stiffness, 1.0);
        assert_eq!(damping, 1.0);
    }

    #[test]
    fn higher_frequency_is_stiffer() {
        let sub_dt = 1.0f32 / 120.0;
        let (soft, _) = soft_params(2.0, 1.0, sub_dt);
        let (stiff, _) = soft_params(16.0, 1.0, sub_dt);
        assert!(stiff > soft);
        assert!(soft > 0.0 && stiff < 1.0);
    }

    #[test]
    fn damping_ratio_bleeds_velocity() {
        let sub_dt = 1.0f32 / 120.0;
        let (_, none) = soft_params(4.0, 0.0, sub_dt);
        let (_, heavy) = soft_params(4.0, 5.0, sub_dt);
        assert_eq!(none, 1.0);
        assert!(heavy < 1.0);
    }
}
