//! Geometry module - maps phase angles onto regular polygons
//!
//! This module provides:
//! - `boundary_offset` for turning a phase into a point on a polygon edge
//! - `RegularPolygon`, a validated polygon definition

mod polygon;

pub use polygon::{boundary_offset, RegularPolygon, MIN_SIDES};
