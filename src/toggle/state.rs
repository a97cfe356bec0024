use std::time::Duration;

use crate::toggle::timeline::Settle;

/// Knob travel span in pixels between the off and on resting positions.
pub const TRAVEL: f32 = 60.0;

/// Drag distance past which releasing the knob commits a state change.
pub const COMMIT_THRESHOLD: f32 = 30.0;

/// Duration of the settle animation that snaps the knob back after a gesture.
pub const SETTLE_DURATION: Duration = Duration::from_millis(250);

/// Extra delay after the settle animation before the active background hides.
///
/// Hiding earlier leaves a visible colored fringe around the knob while it is
/// still travelling back to the off position.
pub const HIDE_BACKGROUND_DELAY: Duration = Duration::from_millis(125);

/// Where the gesture state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No pointer interaction and no settle animation in flight.
    Idle,
    /// A pointer is down and has moved past the tap slop.
    Dragging,
    /// A gesture ended and the knob is animating back to a resting position.
    Settling,
}

/// A snapshot of the toggle's transient UI state.
///
/// Owned by the hosting view and reset only when the view is recreated.
/// Advanced exclusively through [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleState {
    /// Authoritative switch state.
    pub is_on: bool,
    /// Whether the colored background layer is visible. Tracked separately
    /// from `is_on` so the active color can appear as soon as a drag starts,
    /// before the state commits.
    pub show_active_background: bool,
    /// Live horizontal pointer displacement while dragging, zero otherwise.
    pub drag_offset: f32,
    /// Gesture state machine position.
    pub phase: Phase,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            is_on: false,
            show_active_background: false,
            drag_offset: 0.0,
            phase: Phase::Idle,
        }
    }
}

/// An input to the reducer: a pointer gesture or a timeline deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleEvent {
    /// A pointer press moved past the tap slop and became a drag.
    DragStarted,
    /// The pointer moved while dragging. `translation` is the cumulative
    /// horizontal displacement since the press, unclamped.
    DragMoved { translation: f32 },
    /// The pointer was released at the end of a drag.
    DragReleased { translation: f32 },
    /// The pointer was pressed and released without meaningful movement.
    Tapped,
    /// The settle animation ran to completion.
    SettleFinished,
    /// The delayed active-background hide deadline elapsed.
    HideBackgroundDue,
}

/// The result of reducing one event: the next state plus, for events that end
/// a gesture, the settle transition the timeline should play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reduced {
    pub state: ToggleState,
    pub settle: Option<Settle>,
}

/// Advance the state machine by one event.
///
/// Pure: no clock access and no side effects. Events that do not apply to the
/// current phase leave the state unchanged.
pub fn reduce(state: ToggleState, event: ToggleEvent) -> Reduced {
    let mut next = state;
    let mut settle = None;

    match event {
        ToggleEvent::DragStarted => {
            // Valid from Idle or Settling. A drag landing mid-settle takes
            // over; the host cancels the timeline alongside this event.
            if state.phase != Phase::Dragging {
                next.phase = Phase::Dragging;
                next.show_active_background = true;
                next.drag_offset = 0.0;
            }
        }
        ToggleEvent::DragMoved { translation } => {
            if state.phase == Phase::Dragging {
                next.drag_offset = clamp_translation(state.is_on, translation);
            }
        }
        ToggleEvent::DragReleased { translation } => {
            if state.phase == Phase::Dragging {
                let released = clamp_translation(state.is_on, translation);
                let commit = if state.is_on {
                    translation < -COMMIT_THRESHOLD
                } else {
                    translation > COMMIT_THRESHOLD
                };
                if commit {
                    next.is_on = !state.is_on;
                }
                next.drag_offset = 0.0;
                next.phase = Phase::Settling;

                // Distance already covered by the drag counts toward the new
                // resting position, so the knob animates from where it was
                // dropped rather than jumping.
                let swing = if commit {
                    if state.is_on { -TRAVEL } else { TRAVEL }
                } else {
                    0.0
                };
                settle = Some(settle_toward(next.is_on, released - swing));
            }
        }
        ToggleEvent::Tapped => {
            if state.phase != Phase::Dragging {
                next.is_on = !state.is_on;
                next.show_active_background = true;
                next.drag_offset = 0.0;
                next.phase = Phase::Settling;
                let from_delta = if next.is_on { -TRAVEL } else { TRAVEL };
                settle = Some(settle_toward(next.is_on, from_delta));
            }
        }
        ToggleEvent::SettleFinished => {
            if state.phase == Phase::Settling {
                next.phase = Phase::Idle;
            }
        }
        ToggleEvent::HideBackgroundDue => {
            // Stale deadlines from a superseded settle must not blank the
            // background under an on switch or mid-drag.
            if !state.is_on && state.phase != Phase::Dragging {
                next.show_active_background = false;
            }
        }
    }

    Reduced { state: next, settle }
}

/// Clamp a raw drag translation to the travel span, gated by the pre-drag
/// state so the knob cannot be pushed past its current resting position.
fn clamp_translation(is_on: bool, translation: f32) -> f32 {
    if is_on {
        translation.clamp(-TRAVEL, 0.0)
    } else {
        translation.clamp(0.0, TRAVEL)
    }
}

/// The settle transition for a gesture that ended with the switch in
/// `is_on`, starting `from_delta` pixels away from the resting position.
fn settle_toward(is_on: bool, from_delta: f32) -> Settle {
    Settle {
        from_delta,
        duration: SETTLE_DURATION,
        hide_background_after: if is_on {
            None
        } else {
            Some(SETTLE_DURATION + HIDE_BACKGROUND_DELAY)
        },
    }
}
