//! Image-tearing soft-body simulation for interactive sketches.
//!
//! `tearaway` partitions a static image into a grid of tiles and
//! periodically tears one loose as a deformable flap: a grid mesh of Verlet
//! vertices held together by distance joints, falling under the session's
//! gravity until it drifts off-screen. Each torn tile keeps a residual
//! overlay whose filter look advances on every re-tear, so the image slowly
//! shreds and mutates.
//!
//! # Features
//!
//! - **Subsection registry**: grid partitioning, random tile picking, and
//!   the persistent torn-tile record
//! - **Soft bodies**: rows × columns Verlet meshes with structural and
//!   shear joints, built from a per-frame property snapshot
//! - **Pool & scheduler**: capped live set with deferred pruning, periodic
//!   spawn gate with manual override
//! - **Two-track filters**: a falling flap keeps the tile's old look while
//!   the opened tile underneath shows the next one
//! - **Observable**: monitor solver progress via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! Rendering, shaders, textures and GUI widgets stay outside: a host feeds
//! in a [`SoftBodyProperties`] snapshot plus [`Command`]s each frame and
//! draws the base image, the torn overlays, then the live bodies.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec2;
pub mod particle;
pub mod joint;
pub mod world;
pub mod softbody;
pub mod registry;
pub mod pool;
pub mod scheduler;
pub mod session;
pub mod filter;
pub mod config;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec2::{Rect, Vec2};
pub use particle::Particle;
pub use joint::DistanceJoint;
pub use world::{Bounds, World, WorldConfig};
pub use softbody::SoftBody;
pub use registry::{Subsection, SubsectionRegistry, TornSubsection};
pub use pool::SoftBodyPool;
pub use scheduler::{SpawnScheduler, SpawnState};
pub use session::{Command, Session};
pub use filter::{FilterBank, FilterKind};
pub use config::{SessionConfig, SoftBodyProperties};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::TearError;
