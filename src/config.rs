//! Configuration types: the per-frame property snapshot and the session config.

use crate::float::Float;
use crate::world::WorldConfig;

/// Live tunable parameters, snapshotted once per frame.
///
/// A GUI panel (or any other parameter source) rebuilds this struct every
/// frame and hands it to [`Session::update`](crate::session::Session::update);
/// the simulation never reads widget state directly. The defaults match the
/// panel's initial slider positions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoftBodyProperties<F: Float> {
    /// Mesh vertex rows per flap.
    pub mesh_rows: usize,
    /// Mesh vertex columns per flap.
    pub mesh_columns: usize,
    /// Vertex restitution [0, 1].
    pub vertex_bounce: F,
    /// Vertex density; mass scales with density and radius.
    pub vertex_density: F,
    /// Vertex friction [0, 1], applied on bounds contact.
    pub vertex_friction: F,
    /// Joint stiffness frequency in Hz. 0 = rigid.
    pub joint_frequency: F,
    /// Joint damping ratio.
    pub joint_damping: F,
    /// Collision radius of each mesh vertex, in pixels.
    pub mesh_vertex_radius: F,
    /// Width of one image tile, in pixels.
    pub subsection_width: F,
    /// Height of one image tile, in pixels.
    pub subsection_height: F,
    /// Source image width, in pixels.
    pub image_width: F,
    /// Source image height, in pixels.
    pub image_height: F,
}

impl<F: Float> Default for SoftBodyProperties<F> {
    fn default() -> Self {
        SoftBodyProperties {
            mesh_rows: 20,
            mesh_columns: 20,
            vertex_bounce: F::half(),
            vertex_density: F::half(),
            vertex_friction: F::half(),
            joint_frequency: F::from_f32(4.0),
            joint_damping: F::one(),
            mesh_vertex_radius: F::from_f32(5.0),
            subsection_width: F::from_f32(50.0),
            subsection_height: F::from_f32(50.0),
            image_width: F::from_f32(800.0),
            image_height: F::from_f32(1000.0),
        }
    }
}

impl<F: Float> SoftBodyProperties<F> {
    /// Number of vertices one flap's mesh will use.
    pub fn mesh_vertex_count(&self) -> usize {
        self.mesh_rows * self.mesh_columns
    }

    /// Whether `other` would produce the same subsection grid.
    ///
    /// The grid depends on tile size, vertex radius, and image bounds;
    /// the remaining fields only affect bodies built after the change.
    pub fn grid_matches(&self, other: &Self) -> bool {
        self.subsection_width == other.subsection_width
            && self.subsection_height == other.subsection_height
            && self.mesh_vertex_radius == other.mesh_vertex_radius
            && self.image_width == other.image_width
            && self.image_height == other.image_height
    }
}

/// Per-sketch session configuration.
///
/// # Builder Pattern
/// ```
/// use tearaway::config::SessionConfig;
/// use tearaway::world::{WorldConfig, Bounds};
/// use tearaway::vec2::Vec2;
///
/// let config: SessionConfig<f32> = SessionConfig::new()
///     .with_spawn_interval_ms(3_000)
///     .with_max_bodies(3)
///     .with_world(
///         WorldConfig::new()
///             .with_gravity(Vec2::new(-300.0, -300.0))
///             .with_bounds(Bounds::Floor(1000.0)),
///     );
/// ```
pub struct SessionConfig<F: Float> {
    /// Minimum time between automatic tears, in milliseconds. Default: 4000.
    pub spawn_interval_ms: u64,
    /// No automatic tear while more than this many bodies are live. Default: 4.
    pub max_bodies: usize,
    /// Modulus for cycling a subsection's filter index. `None` uses the
    /// filter bank length.
    pub filter_cycle: Option<usize>,
    /// Physics world settings.
    pub world: WorldConfig<F>,
}

impl<F: Float> SessionConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SessionConfig {
            spawn_interval_ms: 4_000,
            max_bodies: 4,
            filter_cycle: None,
            world: WorldConfig::new(),
        }
    }

    /// Set the automatic spawn interval.
    pub fn with_spawn_interval_ms(mut self, interval_ms: u64) -> Self {
        self.spawn_interval_ms = interval_ms;
        self
    }

    /// Set the live-body cap.
    pub fn with_max_bodies(mut self, max_bodies: usize) -> Self {
        self.max_bodies = max_bodies;
        self
    }

    /// Override the filter-cycle modulus.
    pub fn with_filter_cycle(mut self, cycle: usize) -> Self {
        self.filter_cycle = Some(cycle);
        self
    }

    /// Set the physics world configuration.
    pub fn with_world(mut self, world: WorldConfig<F>) -> Self {
        self.world = world;
        self
    }
}

impl<F: Float> Default for SessionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
