//! Soft-body flap: a rows × columns Verlet mesh torn out of the image.

use crate::config::SoftBodyProperties;
use crate::float::Float;
use crate::joint::{soft_params, DistanceJoint};
use crate::particle::Particle;
use crate::vec2::{Rect, Vec2};
use crate::world::{Bounds, World};
use alloc::vec::Vec;

/// Reference frame rate used to translate joint frequency into per-iteration
/// stiffness at build time.
const REFERENCE_FPS: f32 = 60.0;

/// A deformable flap of the source image, simulated as a grid mesh of
/// Verlet vertices connected by distance joints.
///
/// Built by [`SoftBody::build`], owned by the pool, and removed once
/// [`is_outside`](SoftBody::is_outside) is set.
pub struct SoftBody<F: Float> {
    particles: Vec<Particle<F>>,
    joints: Vec<DistanceJoint<F>>,
    origin: Vec2<F>,
    rows: usize,
    cols: usize,
    filter_index: usize,
    restitution: F,
    friction: F,
    damping_factor: F,
    texcoords: Vec<Vec2<F>>,
    is_outside: bool,
}

impl<F: Float> SoftBody<F> {
    /// Build a mesh body anchored at `origin`, registered against `world`'s
    /// solver settings.
    ///
    /// Succeeds deterministically for any well-formed property snapshot;
    /// degenerate mesh dimensions are a caller contract violation and simply
    /// produce degenerate geometry. The filter index starts at 0; assigning
    /// the real one is the caller's job.
    pub fn build(world: &World<F>, origin: Vec2<F>, props: &SoftBodyProperties<F>) -> Self {
        let rows = props.mesh_rows.max(1);
        let cols = props.mesh_columns.max(1);

        // The mesh spans the full tile; a single row or column collapses
        // that axis onto the origin.
        let step_x = if cols > 1 {
            props.subsection_width / F::from_f32((cols - 1) as f32)
        } else {
            F::zero()
        };
        let step_y = if rows > 1 {
            props.subsection_height / F::from_f32((rows - 1) as f32)
        } else {
            F::zero()
        };

        let radius = props.mesh_vertex_radius;
        let mass = props.vertex_density.max(F::from_f32(0.05)) * radius * radius;

        let mut particles = Vec::with_capacity(rows * cols);
        let mut texcoords = Vec::with_capacity(rows * cols);
        let image = Vec2::new(props.image_width, props.image_height);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    origin.x + F::from_f32(col as f32) * step_x,
                    origin.y + F::from_f32(row as f32) * step_y,
                );
                particles.push(Particle::new(pos, mass, radius));
                texcoords.push(pos.component_div(image));
            }
        }

        let sub_dt = world.sub_dt(F::from_f32(1.0 / REFERENCE_FPS));
        let (stiffness, damping_factor) =
            soft_params(props.joint_frequency, props.joint_damping, sub_dt);

        let mut joints = Vec::new();

        // Structural: horizontal (col, col+1)
        for row in 0..rows {
            for col in 0..(cols - 1) {
                let a = row * cols + col;
                let b = row * cols + col + 1;
                joints.push(DistanceJoint::from_particles(a, b, &particles, stiffness));
            }
        }

        // Structural: vertical (row, row+1)
        for row in 0..(rows - 1) {
            for col in 0..cols {
                let a = row * cols + col;
                let b = (row + 1) * cols + col;
                joints.push(DistanceJoint::from_particles(a, b, &particles, stiffness));
            }
        }

        // Shear: both diagonals of every cell
        for row in 0..(rows - 1) {
            for col in 0..(cols - 1) {
                let tl = row * cols + col;
                let tr = row * cols + col + 1;
                let bl = (row + 1) * cols + col;
                let br = (row + 1) * cols + col + 1;
                joints.push(DistanceJoint::from_particles(tl, br, &particles, stiffness));
                joints.push(DistanceJoint::from_particles(tr, bl, &particles, stiffness));
            }
        }

        SoftBody {
            particles,
            joints,
            origin,
            rows,
            cols,
            filter_index: 0,
            restitution: props.vertex_bounce.clamp(F::zero(), F::one()),
            friction: props.vertex_friction.clamp(F::zero(), F::one()),
            damping_factor,
            texcoords,
            is_outside: false,
        }
    }

    pub fn origin(&self) -> Vec2<F> {
        self.origin
    }

    pub fn filter_index(&self) -> usize {
        self.filter_index
    }

    pub fn set_filter_index(&mut self, index: usize) {
        self.filter_index = index;
    }

    /// True once the body has left the playfield and should be pruned.
    pub fn is_outside(&self) -> bool {
        self.is_outside
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn joint_count(&self) -> usize { self.joints.len() }

    /// Current vertex positions, row-major.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[row * self.cols + col].pos
    }

    /// Static normalized texture coordinates, row-major; the flap always
    /// samples the image region it was torn from.
    pub fn texcoords(&self) -> &[Vec2<F>] {
        &self.texcoords
    }

    /// Triangle-list indices over the mesh, two triangles per cell.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity((self.rows.saturating_sub(1)) * (self.cols.saturating_sub(1)) * 6);
        for row in 0..self.rows.saturating_sub(1) {
            for col in 0..self.cols.saturating_sub(1) {
                let tl = (row * self.cols + col) as u32;
                let tr = tl + 1;
                let bl = tl + self.cols as u32;
                let br = bl + 1;
                indices.extend_from_slice(&[tl, tr, bl, tr, br, bl]);
            }
        }
        indices
    }

    /// Average vertex position.
    pub fn centroid(&self) -> Vec2<F> {
        if self.particles.is_empty() {
            return Vec2::zero();
        }
        let mut sum = Vec2::zero();
        for p in &self.particles {
            sum = sum + p.pos;
        }
        sum.scale(F::one() / F::from_f32(self.particles.len() as f32))
    }

    /// Re-evaluate the out-of-bounds flag against the playfield.
    pub(crate) fn update_outside(&mut self, playfield: &Rect<F>) -> bool {
        self.is_outside = !playfield.contains(self.centroid());
        self.is_outside
    }

    pub(crate) fn integrate(&mut self, gravity: Vec2<F>, sub_dt: F, damping: F) {
        let damping = damping * self.damping_factor;
        for p in self.particles.iter_mut() {
            p.apply_acceleration(gravity);
            p.integrate(sub_dt, damping);
        }
    }

    pub(crate) fn solve_joints(&mut self) {
        for j in self.joints.iter() {
            j.solve(&mut self.particles);
        }
    }

    pub(crate) fn solve_bounds(&mut self, bounds: &Bounds<F>) {
        match bounds {
            Bounds::None => {}
            Bounds::Floor(floor) => {
                for p in self.particles.iter_mut() {
                    let limit = *floor - p.radius;
                    if p.pos.y > limit {
                        let vel = p.velocity_raw();
                        p.pos.y = limit;
                        p.prev_pos.y = p.pos.y + vel.y * self.restitution;
                        p.prev_pos.x = p.pos.x - vel.x * (F::one() - self.friction);
                    }
                }
            }
            Bounds::Box(rect) => {
                for p in self.particles.iter_mut() {
                    let vel = p.velocity_raw();
                    if p.pos.x < rect.min.x + p.radius {
                        p.pos.x = rect.min.x + p.radius;
                        p.prev_pos.x = p.pos.x + vel.x * self.restitution;
                        p.prev_pos.y = p.pos.y - vel.y * (F::one() - self.friction);
                    } else if p.pos.x > rect.max.x - p.radius {
                        p.pos.x = rect.max.x - p.radius;
                        p.prev_pos.x = p.pos.x + vel.x * self.restitution;
                        p.prev_pos.y = p.pos.y - vel.y * (F::one() - self.friction);
                    }
                    if p.pos.y < rect.min.y + p.radius {
                        p.pos.y = rect.min.y + p.radius;
                        p.prev_pos.y = p.pos.y + vel.y * self.restitution;
                        p.prev_pos.x = p.pos.x - vel.x * (F::one() - self.friction);
                    } else if p.pos.y > rect.max.y - p.radius {
                        p.pos.y = rect.max.y - p.radius;
                        p.prev_pos.y = p.pos.y + vel.y * self.restitution;
                        p.prev_pos.x = p.pos.x - vel.x * (F::one() - self.friction);
                    }
                }
            }
        }
    }
}
