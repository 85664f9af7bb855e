//! Per-frame input handling
//!
//! The presentation layer collects input events into a `FrameInput` and hands
//! it to `step` once per frame, before drawing.

use super::controller::AnimationController;
use super::points::Bounds;
use super::vector::Vector2;

/// A single user input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary-button click in window coordinates
    Click(Vector2),
    TogglePause,
    IncreaseResolution,
    DecreaseResolution,
    /// Drop all control points
    Restart,
    /// Help overlay toggle (passed through to the presentation layer)
    ToggleHelp,
    /// Quit request (passed through to the presentation layer)
    Quit,
}

/// Input gathered during one frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    /// One click event per position
    pub fn clicks(positions: impl IntoIterator<Item = Vector2>) -> Self {
        Self::new(positions.into_iter().map(InputEvent::Click).collect())
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

/// What the presentation layer must handle itself after a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub quit: bool,
    /// Odd number of help toggles this frame
    pub toggle_help: bool,
}

/// Apply one frame of input in arrival order, then advance the animation
pub fn step(controller: &mut AnimationController, input: &FrameInput, bounds: Bounds) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();

    for event in &input.events {
        match *event {
            InputEvent::Click(pos) => controller.add_control_point(pos),
            InputEvent::TogglePause => controller.toggle_pause(),
            InputEvent::IncreaseResolution => controller.increase_resolution(),
            InputEvent::DecreaseResolution => controller.decrease_resolution(),
            InputEvent::Restart => controller.clear(),
            InputEvent::ToggleHelp => outcome.toggle_help = !outcome.toggle_help,
            InputEvent::Quit => outcome.quit = true,
        }
    }

    controller.tick(bounds);
    outcome
}
