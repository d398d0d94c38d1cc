//! Subsection registry: the tile grid and the record of torn tiles.

use crate::error::TearError;
use crate::float::Float;
use crate::vec2::Vec2;
use alloc::vec::Vec;
use rand::Rng;

/// One tile of the partitioned image grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subsection<F: Float> {
    pub origin: Vec2<F>,
    pub filter_index: usize,
}

/// The residual state of a tile that has been torn at least once.
///
/// Persists for the life of the session: a tile stays visually "open"
/// after its animating body is gone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TornSubsection<F: Float> {
    pub origin: Vec2<F>,
    pub filter_index: usize,
}

/// Partitions the image into a grid of subsections and tracks which of
/// them have been torn.
pub struct SubsectionRegistry<F: Float> {
    subsections: Vec<Subsection<F>>,
    torn: Vec<TornSubsection<F>>,
}

impl<F: Float> SubsectionRegistry<F> {
    pub fn new() -> Self {
        SubsectionRegistry {
            subsections: Vec::new(),
            torn: Vec::new(),
        }
    }

    /// Clear and regenerate the tile grid, row-major, starting at
    /// `vertex_radius` on both axes and stopping before `bounds - radius`.
    ///
    /// Idempotent for identical inputs. Filter indices restart at 0; the
    /// torn-tile record is left untouched.
    pub fn rebuild_grid(&mut self, bounds: Vec2<F>, tile_width: F, tile_height: F, vertex_radius: F) {
        self.subsections.clear();

        if tile_width <= F::zero() || tile_height <= F::zero() {
            return;
        }

        let mut x = vertex_radius;
        while x < bounds.x - vertex_radius {
            let mut y = vertex_radius;
            while y < bounds.y - vertex_radius {
                self.subsections.push(Subsection {
                    origin: Vec2::new(x, y),
                    filter_index: 0,
                });
                y = y + tile_height;
            }
            x = x + tile_width;
        }

        log::debug!("rebuilt subsection grid: {} tiles", self.subsections.len());
    }

    /// Pick a uniformly random subsection to tear next.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<usize, TearError> {
        if self.subsections.is_empty() {
            return Err(TearError::EmptyRegistry);
        }
        Ok(rng.gen_range(0..self.subsections.len()))
    }

    /// Record a tear at `origin`: update the existing torn entry if one
    /// matches exactly, otherwise insert a new one.
    ///
    /// A linear scan; tears are rare and the set stays small.
    pub fn record_tear(&mut self, origin: Vec2<F>, filter_index: usize) {
        for torn in self.torn.iter_mut() {
            if torn.origin == origin {
                torn.filter_index = filter_index;
                log::debug!("updated torn tile, {} total", self.torn.len());
                return;
            }
        }
        self.torn.push(TornSubsection { origin, filter_index });
        log::debug!("new torn tile, {} total", self.torn.len());
    }

    pub fn len(&self) -> usize {
        self.subsections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsections.is_empty()
    }

    pub fn subsection(&self, index: usize) -> &Subsection<F> {
        &self.subsections[index]
    }

    pub fn subsection_mut(&mut self, index: usize) -> &mut Subsection<F> {
        &mut self.subsections[index]
    }

    pub fn subsections(&self) -> &[Subsection<F>] {
        &self.subsections
    }

    /// Torn tiles in first-torn order, for the overlay draw pass.
    pub fn torn(&self) -> &[TornSubsection<F>] {
        &self.torn
    }
}

impl<F: Float> Default for SubsectionRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}
