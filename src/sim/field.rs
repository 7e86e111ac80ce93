//! Toroidal wrap-around field
//!
//! The arena is a rectangle whose edges wrap: leaving one edge re-enters
//! from the opposite side. Re-anchoring works by testing five images of the
//! integrated position (the on-canvas one plus four ghosts displaced by the
//! arena period) against the bounds and keeping the last image that lands
//! inside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Axis-aligned arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl ArenaBounds {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds of the given size centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Inclusive membership test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Both extents must be positive for the wrap offsets to be meaningful
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self::new(0.0, ARENA_WIDTH, 0.0, ARENA_HEIGHT)
    }
}

/// Number of wrap candidates tested per re-anchor
pub const WRAP_OFFSET_COUNT: usize = 5;

/// Wrap-around re-anchoring against one arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToroidalField {
    bounds: ArenaBounds,
    offsets: [Vec2; WRAP_OFFSET_COUNT],
}

impl ToroidalField {
    /// Degenerate bounds are a contract violation: fatal in debug builds,
    /// replaced with the default arena in release.
    pub fn new(bounds: ArenaBounds) -> Self {
        debug_assert!(bounds.is_valid(), "arena bounds must have positive extent");
        let bounds = if bounds.is_valid() {
            bounds
        } else {
            log::warn!("degenerate arena bounds {bounds:?}, using default arena");
            ArenaBounds::default()
        };
        Self {
            bounds,
            offsets: Self::offsets_for(&bounds),
        }
    }

    /// The horizontal/vertical period translations, in evaluation order:
    /// identity, +width, -width, +height, -height. The order is observable
    /// through the last-match-wins rule in [`ToroidalField::rewrap`].
    fn offsets_for(bounds: &ArenaBounds) -> [Vec2; WRAP_OFFSET_COUNT] {
        let w = bounds.width();
        let h = bounds.height();
        [
            Vec2::ZERO,
            Vec2::new(w, 0.0),
            Vec2::new(-w, 0.0),
            Vec2::new(0.0, h),
            Vec2::new(0.0, -h),
        ]
    }

    #[inline]
    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    /// The five wrap offsets in evaluation order. A renderer can use these to
    /// place visual mirrors of the actor at each period translation.
    #[inline]
    pub fn offsets(&self) -> &[Vec2; WRAP_OFFSET_COUNT] {
        &self.offsets
    }

    /// Replace the bounds and recompute the wrap offsets.
    ///
    /// Degenerate bounds are fatal in debug builds; in release the update is
    /// rejected and the previous bounds stay in effect.
    pub fn set_bounds(&mut self, bounds: ArenaBounds) {
        debug_assert!(bounds.is_valid(), "arena bounds must have positive extent");
        if !bounds.is_valid() {
            log::warn!("degenerate arena bounds {bounds:?}, keeping {:?}", self.bounds);
            return;
        }
        self.bounds = bounds;
        self.offsets = Self::offsets_for(&bounds);
    }

    /// Re-anchor an integrated position onto the arena.
    ///
    /// All five images are tested in fixed order and the last one inside the
    /// bounds becomes canonical. Near a corner a horizontal and a vertical
    /// image can both match; the vertical image is evaluated later and takes
    /// precedence. If no image lands inside (possible only at extreme
    /// speeds) the position is returned unchanged and the previous frame's
    /// anchoring persists.
    pub fn rewrap(&self, pos: Vec2) -> Vec2 {
        let mut canonical = pos;
        for offset in self.offsets {
            let candidate = pos + offset;
            if self.bounds.contains(candidate) {
                canonical = candidate;
            }
        }
        canonical
    }
}
