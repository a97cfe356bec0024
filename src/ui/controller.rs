use std::time::Instant;

use gpui::prelude::*;
use gpui::{FontWeight, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, div, rgb};

use crate::toggle::state::{self, ToggleEvent, ToggleState};
use crate::toggle::timeline::Timeline;
use crate::ui::components::switch;

/// Pointer movement below this many pixels counts as a tap, not a drag.
const TAP_SLOP: f32 = 4.0;

/// Tracking data for the pointer currently held down on the switch.
struct PointerGesture {
    /// Window-space x coordinate where the pointer went down.
    origin_x: f32,
    /// Whether the pointer has moved past [`TAP_SLOP`] since going down.
    became_drag: bool,
}

/// Root view of the demo window.
///
/// Owns the toggle state, the settle timeline, and the in-flight pointer
/// gesture, and translates raw mouse events into reducer events. The switch
/// state is advanced only through [`state::reduce`]; `render` re-reads the
/// resulting snapshot every frame.
#[derive(Default)]
pub struct Controller {
    /// Current toggle state. `toggle.is_on` is the externally readable
    /// switch value.
    pub toggle: ToggleState,
    /// Plays the settle transition and the delayed background hide.
    timeline: Timeline,
    /// The pointer gesture in progress, if any.
    gesture: Option<PointerGesture>,
}

impl Controller {
    /// Feed one event through the reducer and start any settle it produces.
    fn apply(&mut self, event: ToggleEvent, now: Instant) {
        let reduced = state::reduce(self.toggle, event);
        self.toggle = reduced.state;
        if let Some(settle) = reduced.settle {
            self.timeline.begin(settle, now);
        }
    }

    fn pointer_down(&mut self, position_x: f32) {
        self.gesture = Some(PointerGesture {
            origin_x: position_x,
            became_drag: false,
        });
    }

    /// Returns true when the visual state changed and a redraw is needed.
    fn pointer_moved(&mut self, position_x: f32, now: Instant) -> bool {
        let Some(gesture) = &mut self.gesture else {
            return false;
        };
        let translation = position_x - gesture.origin_x;
        if !gesture.became_drag {
            if translation.abs() <= TAP_SLOP {
                return false;
            }
            gesture.became_drag = true;
            // A fresh drag takes over from any settle still in flight, which
            // also discards a pending background hide.
            self.timeline.cancel();
            self.apply(ToggleEvent::DragStarted, now);
        }
        self.apply(ToggleEvent::DragMoved { translation }, now);
        true
    }

    /// Returns true when the release ended a gesture.
    fn pointer_up(&mut self, position_x: f32, now: Instant) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        if gesture.became_drag {
            let translation = position_x - gesture.origin_x;
            self.apply(ToggleEvent::DragReleased { translation }, now);
        } else {
            self.apply(ToggleEvent::Tapped, now);
        }
        true
    }
}

impl Render for Controller {
    fn render(
        &mut self,
        window: &mut gpui::Window,
        cx: &mut gpui::Context<Self>,
    ) -> impl IntoElement {
        let now = Instant::now();

        // ── Feed timeline deadlines back into the reducer ────────────────
        for event in self.timeline.poll(now) {
            self.apply(event, now);
        }
        if self.timeline.is_active() {
            window.request_animation_frame();
        }

        // ── Snapshot values for the element builders below ───────────────
        let is_on = self.toggle.is_on;
        let show_active_background = self.toggle.show_active_background;
        let gesture_offset = self.toggle.drag_offset + self.timeline.offset(now);

        // ── The switch itself ────────────────────────────────────────────
        let toggle_switch = switch(
            is_on,
            show_active_background,
            gesture_offset,
            cx.listener(|this, event: &MouseDownEvent, _window, cx| {
                this.pointer_down(event.position.x.into());
                cx.notify();
            }),
        );

        // ── Assemble the window layout ───────────────────────────────────
        // Move and release listeners live on the root element so a drag
        // keeps tracking after the pointer leaves the 92x32 widget.
        div()
            .flex()
            .flex_col()
            .size_full()
            .items_center()
            .justify_center()
            .gap_5()
            .bg(rgb(0x0e0e0e))
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _window, cx| {
                if event.pressed_button == Some(MouseButton::Left)
                    && this.pointer_moved(event.position.x.into(), Instant::now())
                {
                    cx.notify();
                }
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event: &MouseUpEvent, _window, cx| {
                    if this.pointer_up(event.position.x.into(), Instant::now()) {
                        cx.notify();
                    }
                }),
            )
            // Title
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(0xffffff))
                            .child("Retro Toggle"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x888888))
                            .child("An iOS 6 era switch, knob drag and all"),
                    ),
            )
            // The switch
            .child(toggle_switch)
            // State caption
            .child(
                div()
                    .text_sm()
                    .text_color(if is_on { rgb(0x4caf50) } else { rgb(0x666666) })
                    .child(if is_on { "State: ON" } else { "State: OFF" }),
            )
    }
}
