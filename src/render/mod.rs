//! Render module - UI components for visualization
//!
//! This module provides:
//! - Polygon wave scene (polygon, moving point and waveform plot)

mod scene;

pub use scene::PolygonWaveView;
