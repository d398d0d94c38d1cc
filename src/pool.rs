//! The live set of simulated soft bodies.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::softbody::SoftBody;
use crate::vec2::Rect;
use crate::world::World;
use alloc::vec::Vec;

/// Owns every live soft body, steps them once per frame, and prunes the
/// ones that have left the playfield.
pub struct SoftBodyPool<F: Float> {
    bodies: Vec<SoftBody<F>>,
}

impl<F: Float> SoftBodyPool<F> {
    pub fn new() -> Self {
        SoftBodyPool { bodies: Vec::new() }
    }

    /// Append a newly built body. No dedup; the same tile can be torn again
    /// while its previous flap is still falling.
    pub fn add(&mut self, body: SoftBody<F>) {
        self.bodies.push(body);
    }

    /// Drop every live body. Torn-tile state is not touched; that belongs
    /// to the registry.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// One frame tick: a single world step over all bodies, then a deferred
    /// sweep of everything now outside the playfield. Removal happens after
    /// the iteration completes, never during it.
    pub fn step<O: StepObserver>(
        &mut self,
        world: &World<F>,
        playfield: &Rect<F>,
        dt: F,
        observer: &mut O,
    ) {
        world.step(&mut self.bodies, dt, observer);

        for body in self.bodies.iter_mut() {
            body.update_outside(playfield);
        }

        let before = self.bodies.len();
        self.bodies.retain(|b| !b.is_outside());
        let removed = before - self.bodies.len();
        if removed > 0 {
            log::debug!("pruned {} off-screen bodies, {} live", removed, self.bodies.len());
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in insertion order, for the draw pass.
    pub fn iter(&self) -> core::slice::Iter<'_, SoftBody<F>> {
        self.bodies.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SoftBody<F>> {
        self.bodies.get(index)
    }

    /// Total live mesh vertices, for budget checks.
    pub fn particle_count(&self) -> usize {
        self.bodies.iter().map(|b| b.particle_count()).sum()
    }
}

impl<F: Float> Default for SoftBodyPool<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SoftBodyProperties;
    use crate::observer::NoOpStepObserver;
    use crate::vec2::Vec2;
    use crate::world::WorldConfig;

    fn small_props() -> SoftBodyProperties<f32> {
        SoftBodyProperties {
            mesh_rows: 3,
            mesh_columns: 3,
            ..SoftBodyProperties::default()
        }
    }

    #[test]
    fn no_outside_bodies_survive_a_step() {
        let world = World::new(WorldConfig::new());
        let props = small_props();
        let mut pool = SoftBodyPool::new();
        pool.add(SoftBody::build(&world, Vec2::new(100.0, 100.0), &props));
        pool.add(SoftBody::build(&world, Vec2::new(2000.0, 2000.0), &props)); // off-screen
        pool.add(SoftBody::build(&world, Vec2::new(300.0, 300.0), &props));

        let playfield = Rect::from_size(800.0, 1000.0);
        pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);

        assert_eq!(pool.len(), 2);
        for body in pool.iter() {
            assert!(!body.is_outside());
        }
    }

    #[test]
    fn compaction_keeps_insertion_order() {
        let world = World::new(WorldConfig::new());
        let props = small_props();
        let mut pool = SoftBodyPool::new();
        pool.add(SoftBody::build(&world, Vec2::new(100.0, 100.0), &props));
        pool.add(SoftBody::build(&world, Vec2::new(5000.0, 100.0), &props));
        pool.add(SoftBody::build(&world, Vec2::new(200.0, 200.0), &props));

        let playfield = Rect::from_size(800.0, 1000.0);
        pool.step(&world, &playfield, 1.0 / 60.0, &mut NoOpStepObserver);

        let origins: alloc::vec::Vec<_> = pool.iter().map(|b| b.origin()).collect();
        assert_eq!(origins, alloc::vec![Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0)]);
    }

    #[test]
    fn clear_empties_the_pool() {
        let world = World::new(WorldConfig::new());
        let mut pool = SoftBodyPool::new();
        pool.add(SoftBody::build(&world, Vec2::new(1.0, 1.0), &small_props()));
        assert_eq!(pool.particle_count(), 9);
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.particle_count(), 0);
    }
}
