//! Animation module - phase state, controls and timing
//!
//! This module provides:
//! - `AnimationController`, which owns the phase and advances it per tick
//! - `ControlCommand` channel for routing widget input to the controller
//! - `Ticker`, the periodic tick source driven by frame time

mod commands;
mod controller;
mod ticker;

pub use commands::{command_channel, CommandQueue, ControlCommand, ControlHandle};
pub use controller::{
    AnimationController, DEFAULT_SIDES, DEFAULT_TICK_INTERVAL_MS, MAX_SIDES,
    MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
pub use ticker::Ticker;
