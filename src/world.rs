//! Physics world: solver settings, bounds behavior, and the per-frame step.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::softbody::SoftBody;
use crate::vec2::{Rect, Vec2};

/// How the world reacts when mesh vertices reach the playfield edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bounds<F: Float> {
    /// No collision; bodies drift off-screen and get pruned.
    None,
    /// A floor along `y = value`; bodies rest on it.
    Floor(F),
    /// A closed box; bodies stay inside.
    Box(Rect<F>),
}

/// Configuration for the physics world.
///
/// # Builder Pattern
/// ```
/// use tearaway::world::{WorldConfig, Bounds};
/// use tearaway::vec2::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, 300.0))
///     .with_iterations(8)
///     .with_sub_steps(2)
///     .with_bounds(Bounds::Floor(1000.0));
/// ```
pub struct WorldConfig<F: Float> {
    /// Gravity acceleration, in pixels per second squared.
    pub gravity: Vec2<F>,
    /// Joint solver iterations per sub-step. Default: 4.
    pub iterations: usize,
    /// Sub-steps per frame. Higher = more stable. Default: 1.
    pub sub_steps: usize,
    /// Global velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Edge behavior. Default: none.
    pub bounds: Bounds<F>,
    /// Maximum live mesh vertices across all bodies. Default: 4096.
    pub particle_budget: usize,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec2::zero(),
            iterations: 4,
            sub_steps: 1,
            damping: F::from_f32(0.99),
            bounds: Bounds::None,
            particle_budget: 4096,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the number of joint iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set the global damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the edge behavior.
    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the live-vertex budget.
    pub fn with_particle_budget(mut self, budget: usize) -> Self {
        self.particle_budget = budget;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// The physics world. Owns no bodies (the pool does) but advances the
/// simulation for all of them once per frame.
pub struct World<F: Float> {
    config: WorldConfig<F>,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        World { config }
    }

    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    /// Duration of one sub-step for a frame of length `dt`.
    pub fn sub_dt(&self, dt: F) -> F {
        dt / F::from_f32(self.config.sub_steps as f32)
    }

    /// Vertices still available under the particle budget.
    pub fn budget_remaining(&self, in_use: usize) -> usize {
        self.config.particle_budget.saturating_sub(in_use)
    }

    /// Advance all bodies by one frame tick.
    pub fn step<O: StepObserver>(&self, bodies: &mut [SoftBody<F>], dt: F, observer: &mut O) {
        let sub_dt = self.sub_dt(dt);

        for _sub in 0..self.config.sub_steps {
            for body in bodies.iter_mut() {
                body.integrate(self.config.gravity, sub_dt, self.config.damping);
                observer.on_integrate();

                for i in 0..self.config.iterations {
                    body.solve_joints();
                    observer.on_joint_iteration(i);
                }

                body.solve_bounds(&self.config.bounds);
            }
        }

        for index in 0..bodies.len() {
            observer.on_body_stepped(index);
        }
        observer.on_step_complete();
    }
}
