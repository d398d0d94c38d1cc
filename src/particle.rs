//! Verlet mesh vertices with position-based dynamics.

use crate::float::Float;
use crate::vec2::Vec2;

/// A mesh vertex: a Verlet particle with implicit velocity and a
/// collision radius.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub mass: F,
    pub inv_mass: F,
    pub radius: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F, radius: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            mass,
            inv_mass,
            radius,
            pinned: false,
        }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.pinned {
            self.acceleration = self.acceleration + force.scale(self.inv_mass);
        }
    }

    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        if !self.pinned {
            self.acceleration = self.acceleration + accel;
        }
    }

    pub fn integrate(&mut self, dt: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec2::zero();
    }

    /// Velocity in units per step (pos - prev_pos).
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.inv_mass = F::zero();
        self.prev_pos = self.pos;
    }
}
