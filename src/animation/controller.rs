//! Animation controller - owns the phase and advances it per tick
//!
//! The controller holds the only copy of [`AnimationState`]. Controls reach it
//! through its setters or through [`ControlCommand`]s, and the renderer reads
//! snapshots and derived points back out.
//!
//! ## Phase reset
//!
//! Each tick adds a fixed step. Once the phase passes 2π it is reset to 0
//! rather than wrapped, so every cycle starts from exactly the same point.

use std::f64::consts::TAU;

use super::commands::ControlCommand;
use crate::error::ConfigError;
use crate::geometry::{boundary_offset, RegularPolygon, MIN_SIDES};

/// Largest side count offered by the controls
pub const MAX_SIDES: u32 = 20;

/// Tick delay bounds in milliseconds
pub const MIN_TICK_INTERVAL_MS: u32 = 1;
pub const MAX_TICK_INTERVAL_MS: u32 = 200;

/// Phase added per tick (radians)
pub const DEFAULT_PHASE_STEP: f64 = 0.05;

/// Spacing between waveform samples (radians)
pub const DEFAULT_TRACE_STEP: f64 = 0.01;

pub const DEFAULT_SIDES: u32 = 6;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 20;
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Whether the animation is moving
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    /// Label for the button that switches away from this state
    pub fn toggle_label(&self) -> &'static str {
        match self {
            RunState::Running => "Stop",
            RunState::Paused => "Start",
        }
    }
}

/// Mutable animation state
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationState {
    /// Current phase angle in radians
    pub phase: f64,
    pub side_count: u32,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u32,
    pub running: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            phase: 0.0,
            side_count: DEFAULT_SIDES,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            running: true,
        }
    }
}

/// One point of the waveform plot
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WaveformSample {
    pub phase: f64,
    /// Vertical boundary offset at `phase`
    pub y: f64,
}

/// Lazily computed waveform from phase 0 up to the current phase
///
/// Cloning restarts the sequence; nothing is cached between frames.
///
/// Sample `j` sits at `j * step` rather than at a running sum of steps, so
/// float error does not build up along the trace. Near the end of the trace
/// this can include or drop one sample compared to summing.
#[derive(Clone, Debug)]
pub struct WaveformTrace {
    radius: f64,
    sides: u32,
    step: f64,
    end: f64,
    index: u64,
}

impl Iterator for WaveformTrace {
    type Item = WaveformSample;

    fn next(&mut self) -> Option<Self::Item> {
        let phase = self.index as f64 * self.step;
        if phase > self.end {
            return None;
        }
        self.index += 1;
        let (_, y) = boundary_offset(phase, self.radius, self.sides);
        Some(WaveformSample { phase, y })
    }
}

/// Drives the polygon animation
pub struct AnimationController {
    state: AnimationState,
    radius: f64,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    /// Create a controller with the default radius
    pub fn new() -> Self {
        Self {
            state: AnimationState::default(),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Create a controller for a polygon of the given radius
    pub fn with_radius(radius: f64) -> Result<Self, ConfigError> {
        RegularPolygon::new(DEFAULT_SIDES, radius)?;
        Ok(Self {
            state: AnimationState::default(),
            radius,
        })
    }

    /// Advance by the default phase step
    pub fn advance(&mut self) {
        self.advance_by(DEFAULT_PHASE_STEP);
    }

    /// Advance the phase by `delta` radians if running
    pub fn advance_by(&mut self, delta: f64) {
        if !self.state.running {
            return;
        }

        self.state.phase += delta;
        if self.state.phase > TAU {
            self.state.phase = 0.0;
            log::trace!("Phase reset after full cycle");
        }
    }

    /// Change the number of polygon sides; the phase is kept
    pub fn set_side_count(&mut self, sides: u32) -> Result<(), ConfigError> {
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(ConfigError::SidesOutOfRange {
                sides,
                min: MIN_SIDES,
                max: MAX_SIDES,
            });
        }
        self.state.side_count = sides;
        log::debug!("Side count set to {}", sides);
        Ok(())
    }

    /// Change the tick delay, applied when the next tick is scheduled
    pub fn set_tick_interval(&mut self, ms: u32) -> Result<(), ConfigError> {
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&ms) {
            return Err(ConfigError::TickIntervalOutOfRange {
                ms,
                min: MIN_TICK_INTERVAL_MS,
                max: MAX_TICK_INTERVAL_MS,
            });
        }
        self.state.tick_interval_ms = ms;
        log::debug!("Tick interval set to {} ms", ms);
        Ok(())
    }

    /// Pause or resume; the phase is kept
    pub fn toggle_running(&mut self) -> RunState {
        self.state.running = !self.state.running;
        let run_state = self.run_state();
        log::debug!("Animation {:?}", run_state);
        run_state
    }

    /// Apply a queued control command
    pub fn apply(&mut self, command: ControlCommand) -> Result<(), ConfigError> {
        match command {
            ControlCommand::SetSides(sides) => self.set_side_count(sides),
            ControlCommand::SetTickInterval(ms) => self.set_tick_interval(ms),
            ControlCommand::Toggle => {
                self.toggle_running();
                Ok(())
            }
        }
    }

    /// Polygon-local position of the moving point
    pub fn current_point(&self) -> (f64, f64) {
        boundary_offset(self.state.phase, self.radius, self.state.side_count)
    }

    /// Waveform samples from 0 to the current phase at the default spacing
    pub fn waveform_trace(&self) -> WaveformTrace {
        self.trace(DEFAULT_TRACE_STEP)
    }

    /// Waveform samples from 0 to the current phase every `step` radians
    pub fn waveform_trace_with_step(&self, step: f64) -> Result<WaveformTrace, ConfigError> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(self.trace(step))
    }

    fn trace(&self, step: f64) -> WaveformTrace {
        WaveformTrace {
            radius: self.radius,
            sides: self.state.side_count,
            step,
            end: self.state.phase,
            index: 0,
        }
    }

    pub fn phase(&self) -> f64 {
        self.state.phase
    }

    pub fn side_count(&self) -> u32 {
        self.state.side_count
    }

    /// Tick delay in milliseconds
    pub fn tick_interval(&self) -> u32 {
        self.state.tick_interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn run_state(&self) -> RunState {
        if self.state.running {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The polygon currently being traced
    pub fn polygon(&self) -> RegularPolygon {
        RegularPolygon::from_validated(self.state.side_count, self.radius)
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> AnimationState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let controller = AnimationController::new();
        let state = controller.snapshot();
        assert_eq!(state.phase, 0.0);
        assert_eq!(state.side_count, 6);
        assert_eq!(state.tick_interval_ms, 20);
        assert!(state.running);
        assert_eq!(controller.run_state(), RunState::Running);
        assert_eq!(controller.radius(), 100.0);
    }

    #[test]
    fn test_advance_resets_after_full_turn() {
        let mut controller = AnimationController::new();

        for _ in 0..125 {
            controller.advance();
        }
        assert!((controller.phase() - 6.25).abs() < 1e-9);

        // 6.30 > 2π, so the 126th tick resets instead of wrapping
        controller.advance();
        assert_eq!(controller.phase(), 0.0);

        controller.advance();
        assert!((controller.phase() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_landing_on_full_turn_does_not_reset() {
        let mut controller = AnimationController::new();
        controller.advance_by(TAU);
        assert_eq!(controller.phase(), TAU);

        controller.advance_by(1e-9);
        assert_eq!(controller.phase(), 0.0);
    }

    #[test]
    fn test_pause_holds_phase() {
        let mut controller = AnimationController::new();
        controller.advance();
        controller.advance();
        let phase = controller.phase();

        assert_eq!(controller.toggle_running(), RunState::Paused);
        for _ in 0..10 {
            controller.advance();
        }
        assert_eq!(controller.phase(), phase);

        assert_eq!(controller.toggle_running(), RunState::Running);
        controller.advance();
        assert!((controller.phase() - (phase + 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_side_count_change_keeps_phase() {
        let mut controller = AnimationController::new();
        for _ in 0..7 {
            controller.advance();
        }
        let phase = controller.phase();
        let hexagon_point = controller.current_point();

        controller.set_side_count(3).unwrap();
        assert_eq!(controller.phase(), phase);
        assert_eq!(controller.side_count(), 3);

        let triangle_point = controller.current_point();
        assert!((hexagon_point.0 - triangle_point.0).abs() > 1e-3);
        assert_eq!(triangle_point, boundary_offset(phase, 100.0, 3));
    }

    #[test]
    fn test_side_count_rejected_outside_range() {
        let mut controller = AnimationController::new();
        assert!(controller.set_side_count(2).is_err());
        assert!(controller.set_side_count(21).is_err());
        assert_eq!(controller.side_count(), 6);
        assert!(controller.set_side_count(20).is_ok());
    }

    #[test]
    fn test_tick_interval() {
        let mut controller = AnimationController::new();
        assert!(matches!(
            controller.set_tick_interval(0),
            Err(ConfigError::TickIntervalOutOfRange { ms: 0, .. })
        ));
        assert!(controller.set_tick_interval(201).is_err());
        assert_eq!(controller.tick_interval(), 20);

        controller.set_tick_interval(1).unwrap();
        assert_eq!(controller.tick_interval(), 1);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(AnimationController::with_radius(0.0).is_err());
        assert!(AnimationController::with_radius(-5.0).is_err());
        assert_eq!(AnimationController::with_radius(42.0).unwrap().radius(), 42.0);
    }

    #[test]
    fn test_waveform_trace_length_and_values() {
        let mut controller = AnimationController::new();
        controller.state.phase = 1.005;

        let samples: Vec<_> = controller.waveform_trace().collect();
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0].phase, 0.0);
        for sample in &samples {
            assert!(sample.phase <= 1.005);
            assert_eq!(sample.y, boundary_offset(sample.phase, 100.0, 6).1);
        }

        controller.state.phase = 0.25;
        let coarse: Vec<_> = controller.waveform_trace_with_step(0.1).unwrap().collect();
        assert_eq!(coarse.len(), 3);
    }

    #[test]
    fn test_waveform_trace_is_restartable() {
        let mut controller = AnimationController::new();
        controller.state.phase = 2.0;

        let trace = controller.waveform_trace();
        let first: Vec<_> = trace.clone().collect();
        let second: Vec<_> = trace.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_waveform_trace_at_zero_phase() {
        let controller = AnimationController::new();
        let samples: Vec<_> = controller.waveform_trace().collect();
        assert_eq!(samples, vec![WaveformSample { phase: 0.0, y: 0.0 }]);
    }

    #[test]
    fn test_waveform_trace_rejects_bad_step() {
        let controller = AnimationController::new();
        assert!(controller.waveform_trace_with_step(0.0).is_err());
        assert!(controller.waveform_trace_with_step(-0.1).is_err());
        assert!(controller.waveform_trace_with_step(f64::INFINITY).is_err());
    }

    #[test]
    fn test_apply_commands() {
        let mut controller = AnimationController::new();
        controller.apply(ControlCommand::SetSides(8)).unwrap();
        controller.apply(ControlCommand::SetTickInterval(50)).unwrap();
        controller.apply(ControlCommand::Toggle).unwrap();

        assert_eq!(controller.side_count(), 8);
        assert_eq!(controller.tick_interval(), 50);
        assert!(!controller.is_running());
        assert!(controller.apply(ControlCommand::SetSides(1)).is_err());
    }
}
