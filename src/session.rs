//! Per-sketch session: owns the world, registry, pool and scheduler, and
//! runs the frame tick.

use crate::config::{SessionConfig, SoftBodyProperties};
use crate::error::TearError;
use crate::filter::FilterBank;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::pool::SoftBodyPool;
use crate::registry::{SubsectionRegistry, TornSubsection};
use crate::scheduler::SpawnScheduler;
use crate::softbody::SoftBody;
use crate::vec2::{Rect, Vec2};
use crate::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Discrete user commands, decoupled from any windowing event system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip the scheduler's armed state, forcing or cancelling a tear.
    ToggleSpawn,
    /// Flip the debug mesh view flag.
    ToggleDebugView,
    /// Flip the GUI visibility flag.
    ToggleGui,
    /// Drop all live bodies; torn tiles stay open.
    ClearPool,
}

/// One sketch instance. Everything lives on the render thread; a frame is
/// one call to [`update`](Session::update) followed by the host's draw pass
/// (base image, then torn overlays, then live bodies).
pub struct Session<F: Float> {
    world: World<F>,
    registry: SubsectionRegistry<F>,
    pool: SoftBodyPool<F>,
    scheduler: SpawnScheduler,
    filters: FilterBank,
    filter_cycle: Option<usize>,
    rng: SmallRng,
    props: SoftBodyProperties<F>,
    debug_view: bool,
    gui_hidden: bool,
}

impl<F: Float> Session<F> {
    /// Create a session and tear the first subsection on the next update,
    /// the way the sketches open with one flap already falling.
    pub fn new(
        config: SessionConfig<F>,
        props: SoftBodyProperties<F>,
        filters: FilterBank,
        seed: u64,
    ) -> Self {
        let mut registry = SubsectionRegistry::new();
        registry.rebuild_grid(
            Vec2::new(props.image_width, props.image_height),
            props.subsection_width,
            props.subsection_height,
            props.mesh_vertex_radius,
        );

        let mut scheduler = SpawnScheduler::new(config.spawn_interval_ms, config.max_bodies);
        scheduler.toggle_armed();

        Session {
            world: World::new(config.world),
            registry,
            pool: SoftBodyPool::new(),
            scheduler,
            filters,
            filter_cycle: config.filter_cycle,
            rng: SmallRng::seed_from_u64(seed),
            props,
            debug_view: false,
            gui_hidden: false,
        }
    }

    /// One frame tick: snapshot the live parameters, let the scheduler
    /// decide on a tear, reconcile it into the registry, then step and
    /// prune the pool.
    pub fn update<O: StepObserver>(
        &mut self,
        now_ms: u64,
        dt: F,
        props: SoftBodyProperties<F>,
        observer: &mut O,
    ) {
        if !props.grid_matches(&self.props) {
            self.registry.rebuild_grid(
                Vec2::new(props.image_width, props.image_height),
                props.subsection_width,
                props.subsection_height,
                props.mesh_vertex_radius,
            );
        }
        self.props = props;

        self.scheduler.tick(now_ms, self.pool.len());
        if self.scheduler.take(now_ms) {
            if let Err(err) = self.spawn() {
                log::warn!("tear skipped: {}", err);
            }
        }

        let playfield = Rect::from_size(self.props.image_width, self.props.image_height);
        self.pool.step(&self.world, &playfield, dt, observer);
    }

    /// Tear a random subsection now.
    fn spawn(&mut self) -> Result<(), TearError> {
        let index = self.registry.pick_random(&mut self.rng)?;
        self.tear(index)
    }

    /// Tear the subsection at `index`: build its body, hand the body the
    /// tile's current filter, advance the tile to the next filter, and
    /// record the torn overlay with the advanced value. The falling flap
    /// shows the old look while the opened tile underneath shows the new
    /// one, so re-tearing a tile visibly changes it.
    ///
    /// # Panics
    /// Panics if `index` is out of range for the current grid.
    pub fn tear(&mut self, index: usize) -> Result<(), TearError> {
        let requested = self.props.mesh_vertex_count();
        let available = self.world.budget_remaining(self.pool.particle_count());
        if requested > available {
            return Err(TearError::ParticleBudgetExceeded { requested, available });
        }

        let origin = self.registry.subsection(index).origin;
        let mut body = SoftBody::build(&self.world, origin, &self.props);

        let cycle = self.filter_cycle();
        let subsection = self.registry.subsection_mut(index);
        body.set_filter_index(subsection.filter_index);
        subsection.filter_index = (subsection.filter_index + 1) % cycle;
        let advanced = subsection.filter_index;

        self.registry.record_tear(origin, advanced);
        self.pool.add(body);
        Ok(())
    }

    /// Apply a user command.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::ToggleSpawn => self.scheduler.toggle_armed(),
            Command::ToggleDebugView => self.debug_view = !self.debug_view,
            Command::ToggleGui => self.gui_hidden = !self.gui_hidden,
            Command::ClearPool => self.pool.clear(),
        }
    }

    /// The modulus used when cycling a tile's filter index.
    pub fn filter_cycle(&self) -> usize {
        self.filter_cycle.unwrap_or_else(|| self.filters.len()).max(1)
    }

    /// Torn tiles for the overlay draw pass.
    pub fn torn(&self) -> &[TornSubsection<F>] {
        self.registry.torn()
    }

    /// Live bodies in draw order.
    pub fn bodies(&self) -> core::slice::Iter<'_, SoftBody<F>> {
        self.pool.iter()
    }

    pub fn world(&self) -> &World<F> {
        &self.world
    }

    pub fn registry(&self) -> &SubsectionRegistry<F> {
        &self.registry
    }

    pub fn pool(&self) -> &SoftBodyPool<F> {
        &self.pool
    }

    pub fn filters(&self) -> &FilterBank {
        &self.filters
    }

    pub fn properties(&self) -> &SoftBodyProperties<F> {
        &self.props
    }

    pub fn debug_view(&self) -> bool {
        self.debug_view
    }

    pub fn gui_hidden(&self) -> bool {
        self.gui_hidden
    }
}
