use gpui::prelude::*;
use gpui::{
    FontWeight, MouseButton, MouseDownEvent, Rgba, div, linear_color_stop, linear_gradient, px,
    rgb, rgba,
};

/// Track width in pixels, matching the iOS 6 artwork.
pub const TRACK_WIDTH: f32 = 92.0;
/// Track height in pixels.
pub const TRACK_HEIGHT: f32 = 32.0;

const CORNER_RADIUS: f32 = 16.0;
const KNOB_DIAMETER: f32 = 30.0;

/// Center-relative horizontal resting offset of the knob.
pub fn knob_base_offset(is_on: bool) -> f32 {
    if is_on { 30.0 } else { -30.0 }
}

/// Center-relative resting offset of the "OFF" label. Slides fully out of
/// view to the right when the switch is on.
pub fn off_label_base_offset(is_on: bool) -> f32 {
    if is_on { 70.0 } else { 10.0 }
}

/// Center-relative resting offset of the colored background layer. Parks
/// one travel span to the left while the switch is off.
pub fn active_background_base_offset(is_on: bool) -> f32 {
    if is_on { 0.0 } else { -60.0 }
}

/// Center-relative resting offset of the "ON" label. Hidden off the left
/// edge while the switch is off.
pub fn on_label_base_offset(is_on: bool) -> f32 {
    if is_on { -10.0 } else { -70.0 }
}

/// Build the layered iOS 6 style switch element.
///
/// `gesture_offset` is the live drag displacement plus any in-flight settle
/// offset; every gesture-driven layer shifts by it together, which is what
/// keeps the knob, labels, and colored background visually glued during a
/// drag. The composite is clipped to the track's rounded rect.
pub fn switch(
    is_on: bool,
    show_active_background: bool,
    gesture_offset: f32,
    on_pointer_down: impl Fn(&MouseDownEvent, &mut gpui::Window, &mut gpui::App) + 'static,
) -> impl IntoElement {
    div()
        .relative()
        .w(px(TRACK_WIDTH))
        .h(px(TRACK_HEIGHT))
        .rounded(px(CORNER_RADIUS))
        .overflow_hidden()
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, move |event, window, cx| {
            on_pointer_down(event, window, cx);
        })
        // Neutral track, fixed.
        .child(
            div()
                .absolute()
                .inset_0()
                .rounded(px(CORNER_RADIUS))
                .bg(rgb(0xf7f7f7)),
        )
        // "OFF" label.
        .child(label(
            "OFF",
            rgb(0x6f6f6f),
            off_label_base_offset(is_on) + gesture_offset,
        ))
        // Active background, slides in under the knob. Kept in the layout
        // even when invisible so its position never has to catch up.
        .child(
            div()
                .absolute()
                .left(px(active_background_base_offset(is_on) + gesture_offset))
                .top(px(0.0))
                .w(px(TRACK_WIDTH))
                .h(px(TRACK_HEIGHT))
                .rounded(px(CORNER_RADIUS))
                .bg(rgb(0x047de5))
                .opacity(if show_active_background { 1.0 } else { 0.0 }),
        )
        // "ON" label.
        .child(label(
            "ON",
            rgb(0xffffff),
            on_label_base_offset(is_on) + gesture_offset,
        ))
        // Highlight sheen across the lower half of the track, fixed.
        .child(
            div()
                .absolute()
                .left(px((TRACK_WIDTH - 80.0) / 2.0))
                .top(px(16.0))
                .w(px(80.0))
                .h(px(24.0))
                .rounded(px(12.0))
                .bg(linear_gradient(
                    180.0,
                    linear_color_stop(rgba(0xffffff1a), 0.0),
                    linear_color_stop(rgba(0xffffffb3), 1.0),
                )),
        )
        // Hairline stroke around the track, fixed.
        .child(
            div()
                .absolute()
                .inset_0()
                .rounded(px(CORNER_RADIUS))
                .border_1()
                .border_color(rgba(0x00000038)),
        )
        // Soft inner shadow falling from the top edge, fixed.
        .child(
            div()
                .absolute()
                .left(px(0.0))
                .top(px(0.0))
                .w(px(TRACK_WIDTH))
                .h(px(10.0))
                .bg(linear_gradient(
                    180.0,
                    linear_color_stop(rgba(0x00000040), 0.0),
                    linear_color_stop(rgba(0x00000000), 1.0),
                )),
        )
        // Knob, the pointer target.
        .child(knob(knob_base_offset(is_on) + gesture_offset))
}

/// A state label centered on the track, shifted horizontally by `offset`.
fn label(text: &'static str, color: Rgba, offset: f32) -> impl IntoElement {
    div()
        .absolute()
        .left(px(offset))
        .top(px(0.0))
        .w(px(TRACK_WIDTH))
        .h(px(TRACK_HEIGHT))
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(18.0))
        .font_weight(FontWeight::BOLD)
        .text_color(color)
        .child(text)
}

/// The circular drag handle with its brushed vertical gradient.
fn knob(offset: f32) -> impl IntoElement {
    div()
        .absolute()
        .left(px((TRACK_WIDTH - KNOB_DIAMETER) / 2.0 + offset))
        .top(px((TRACK_HEIGHT - KNOB_DIAMETER) / 2.0))
        .w(px(KNOB_DIAMETER))
        .h(px(KNOB_DIAMETER))
        .rounded_full()
        .bg(linear_gradient(
            180.0,
            linear_color_stop(rgb(0xd6d5d3), 0.0),
            linear_color_stop(rgb(0xfcfcfb), 1.0),
        ))
        .border_1()
        .border_color(rgba(0xffffffcc))
        .shadow_sm()
}
