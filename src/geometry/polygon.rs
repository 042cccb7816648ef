//! Regular polygon tracing
//!
//! A phase angle in radians is mapped onto the polygon boundary by splitting
//! the full turn into `sides` equal angular segments and blending the two
//! vertices that bound the segment.
//!
//! ## Interpolation
//! ```text
//! w  = 2π / sides
//! k  = trunc(phase / w)          (k >= sides → 0)
//! a0 = k * w
//! a1 = (k + 1) * w               (2π for the last segment)
//! t  = (phase - a0) / w
//! p  = r * (cos a0, sin a0) * (1 - t) + r * (cos a1, sin a1) * t
//! ```
//!
//! The blend is linear in phase, not in arc length along the edge, so the
//! point speeds up toward the middle of each edge.

use std::f64::consts::TAU;

use crate::error::ConfigError;

/// Smallest number of sides a polygon can have
pub const MIN_SIDES: u32 = 3;

/// Map a phase angle onto the boundary of a regular polygon
///
/// # Arguments
/// * `phase` - Angle in radians, normally in `[0, 2π)`
/// * `radius` - Distance from center to vertices (must be positive)
/// * `sides` - Number of sides (must be at least 3)
///
/// # Returns
/// The (x, y) offset from the polygon center, y pointing up
///
/// The segment index truncates toward zero. An index past the last segment,
/// as at exactly `2π`, falls back to segment 0 and extrapolates along it;
/// negative phases keep their (negative) index and extrapolate from there.
pub fn boundary_offset(phase: f64, radius: f64, sides: u32) -> (f64, f64) {
    debug_assert!(sides >= MIN_SIDES, "polygon requires at least 3 sides");
    debug_assert!(radius > 0.0, "polygon radius must be positive");

    let width = TAU / sides as f64;

    let mut segment = (phase / width) as i64;
    if segment >= sides as i64 {
        segment = 0;
    }

    let start_angle = segment as f64 * width;
    let end_angle = if segment == sides as i64 - 1 {
        TAU
    } else {
        (segment + 1) as f64 * width
    };

    let (x1, y1) = (radius * start_angle.cos(), radius * start_angle.sin());
    let (x2, y2) = (radius * end_angle.cos(), radius * end_angle.sin());

    let t = (phase - start_angle) / width;
    (x1 * (1.0 - t) + x2 * t, y1 * (1.0 - t) + y2 * t)
}

/// A regular polygon centered at the origin
///
/// The first vertex sits on the positive X axis and vertices are laid out
/// counter-clockwise, matching the phase direction of [`boundary_offset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygon {
    sides: u32,
    radius: f64,
}

impl RegularPolygon {
    /// Create a regular polygon, rejecting degenerate shapes
    pub fn new(sides: u32, radius: f64) -> Result<Self, ConfigError> {
        if sides < MIN_SIDES {
            return Err(ConfigError::SidesOutOfRange {
                sides,
                min: MIN_SIDES,
                max: u32::MAX,
            });
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { sides, radius })
    }

    /// Build from values that already passed validation
    pub(crate) fn from_validated(sides: u32, radius: f64) -> Self {
        debug_assert!(sides >= MIN_SIDES && radius > 0.0);
        Self { sides, radius }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the boundary for a phase angle
    pub fn boundary_offset(&self, phase: f64) -> (f64, f64) {
        boundary_offset(phase, self.radius, self.sides)
    }

    /// Vertex positions in tracing order
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        (0..self.sides)
            .map(|i| {
                let angle = TAU * i as f64 / self.sides as f64;
                (self.radius * angle.cos(), self.radius * angle.sin())
            })
            .collect()
    }
}
