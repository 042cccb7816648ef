//! Control commands for the animation controller
//!
//! Widgets never touch the controller directly. They send a
//! [`ControlCommand`] through a [`ControlHandle`], and the frame loop drains
//! the [`CommandQueue`] into the controller before advancing it. The handle is
//! `Clone + Send`, so a control surface on another thread can drive the same
//! controller without sharing its state.

use std::sync::mpsc::{self, Receiver, Sender};

use super::controller::AnimationController;

/// A change requested by the user
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlCommand {
    /// Trace a polygon with this many sides
    SetSides(u32),
    /// Delay between ticks in milliseconds
    SetTickInterval(u32),
    /// Pause or resume
    Toggle,
}

impl ControlCommand {
    /// Whether applying this command changes a saved preference
    pub fn changes_preferences(&self) -> bool {
        match self {
            ControlCommand::SetSides(_) | ControlCommand::SetTickInterval(_) => true,
            ControlCommand::Toggle => false,
        }
    }
}

/// Sending half of the command channel
#[derive(Clone)]
pub struct ControlHandle {
    tx: Sender<ControlCommand>,
}

impl ControlHandle {
    /// Queue a command
    ///
    /// # Returns
    /// `false` if the queue has been dropped
    pub fn send(&self, command: ControlCommand) -> bool {
        self.tx.send(command).is_ok()
    }
}

/// Receiving half of the command channel, owned by the frame loop
pub struct CommandQueue {
    rx: Receiver<ControlCommand>,
}

impl CommandQueue {
    /// Apply every pending command in order
    ///
    /// Rejected commands are logged and skipped.
    ///
    /// # Returns
    /// The commands that were applied, in order
    pub fn drain_into(&self, controller: &mut AnimationController) -> Vec<ControlCommand> {
        let mut applied = Vec::new();
        for command in self.rx.try_iter() {
            match controller.apply(command) {
                Ok(()) => applied.push(command),
                Err(e) => log::warn!("Ignoring {:?}: {}", command, e),
            }
        }
        applied
    }
}

/// Create a connected handle/queue pair
pub fn command_channel() -> (ControlHandle, CommandQueue) {
    let (tx, rx) = mpsc::channel();
    (ControlHandle { tx }, CommandQueue { rx })
}
