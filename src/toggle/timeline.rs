use std::time::{Duration, Instant};

use crate::toggle::state::ToggleEvent;

/// A timed transition descriptor produced by the reducer when a gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// Visual offset relative to the new resting position at the moment the
    /// gesture ended. Interpolates to zero over `duration`.
    pub from_delta: f32,
    /// How long the snap-back takes.
    pub duration: Duration,
    /// If set, the active background must hide this long after the settle
    /// starts. Present only when the gesture ended in the off state.
    pub hide_background_after: Option<Duration>,
}

/// Plays at most one [`Settle`] transition against an externally supplied
/// clock.
///
/// Every method takes `now` explicitly, so tests drive the timeline with
/// synthetic instants instead of sleeping.
#[derive(Debug, Default)]
pub struct Timeline {
    active: Option<ActiveSettle>,
}

#[derive(Debug)]
struct ActiveSettle {
    from_delta: f32,
    started_at: Instant,
    duration: Duration,
    hide_background_at: Option<Instant>,
    finish_reported: bool,
}

impl Timeline {
    /// Start playing `settle`, replacing any transition already in flight.
    pub fn begin(&mut self, settle: Settle, now: Instant) {
        self.active = Some(ActiveSettle {
            from_delta: settle.from_delta,
            started_at: now,
            duration: settle.duration,
            hide_background_at: settle.hide_background_after.map(|after| now + after),
            finish_reported: false,
        });
    }

    /// Drop the current transition along with any pending hide deadline.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// The eased offset the settle currently contributes to the rendered
    /// position: `from_delta` at the start, exactly zero from `duration` on.
    pub fn offset(&self, now: Instant) -> f32 {
        let Some(active) = &self.active else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(active.started_at);
        if elapsed >= active.duration {
            return 0.0;
        }
        let progress = elapsed.as_secs_f32() / active.duration.as_secs_f32();
        active.from_delta * (1.0 - ease_in_out(progress))
    }

    /// Report deadlines crossed by `now`, each at most once:
    /// [`ToggleEvent::SettleFinished`] when the snap-back completes, then
    /// [`ToggleEvent::HideBackgroundDue`] when the delayed hide falls due.
    /// The timeline clears itself once nothing is left to report.
    pub fn poll(&mut self, now: Instant) -> Vec<ToggleEvent> {
        let mut events = Vec::new();
        let Some(active) = &mut self.active else {
            return events;
        };

        if !active.finish_reported
            && now.saturating_duration_since(active.started_at) >= active.duration
        {
            active.finish_reported = true;
            events.push(ToggleEvent::SettleFinished);
        }
        if let Some(deadline) = active.hide_background_at {
            if now >= deadline {
                active.hide_background_at = None;
                events.push(ToggleEvent::HideBackgroundDue);
            }
        }
        if active.finish_reported && active.hide_background_at.is_none() {
            self.active = None;
        }
        events
    }

    /// Whether another frame must be scheduled to keep sampling.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Cubic ease-in-out over `t` clamped to [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::state::{self, ToggleState};

    fn settle(from_delta: f32, hide: bool) -> Settle {
        Settle {
            from_delta,
            duration: Duration::from_millis(250),
            hide_background_after: hide.then(|| Duration::from_millis(375)),
        }
    }

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn offset_eases_from_delta_to_zero() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        timeline.begin(settle(60.0, false), t0);

        assert_eq!(timeline.offset(t0), 60.0);
        assert_eq!(timeline.offset(at(t0, 125)), 30.0);
        assert_eq!(timeline.offset(at(t0, 250)), 0.0);
        assert_eq!(timeline.offset(at(t0, 2000)), 0.0);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_the_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        let sum = ease_in_out(0.25) + ease_in_out(0.75);
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn poll_reports_each_deadline_once() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        timeline.begin(settle(20.0, true), t0);

        assert!(timeline.poll(at(t0, 100)).is_empty());
        assert_eq!(timeline.poll(at(t0, 250)), vec![ToggleEvent::SettleFinished]);
        assert!(timeline.poll(at(t0, 300)).is_empty());
        assert!(timeline.is_active());
        assert_eq!(
            timeline.poll(at(t0, 375)),
            vec![ToggleEvent::HideBackgroundDue]
        );
        assert!(!timeline.is_active());
        assert!(timeline.poll(at(t0, 500)).is_empty());
    }

    #[test]
    fn late_poll_reports_both_deadlines_in_order() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        timeline.begin(settle(20.0, true), t0);

        assert_eq!(
            timeline.poll(at(t0, 1000)),
            vec![ToggleEvent::SettleFinished, ToggleEvent::HideBackgroundDue]
        );
        assert!(!timeline.is_active());
    }

    #[test]
    fn settle_without_hide_clears_after_finishing() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        timeline.begin(settle(60.0, false), t0);

        assert_eq!(timeline.poll(at(t0, 250)), vec![ToggleEvent::SettleFinished]);
        assert!(!timeline.is_active());
    }

    #[test]
    fn cancel_silences_everything() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        timeline.begin(settle(60.0, true), t0);
        timeline.cancel();

        assert_eq!(timeline.offset(at(t0, 10)), 0.0);
        assert!(timeline.poll(at(t0, 1000)).is_empty());
        assert!(!timeline.is_active());
    }

    /// The under-threshold drag from the visual contract, replayed end to end
    /// through reducer and timeline with a synthetic clock: release at 20 px
    /// leaves the switch off and the background hides only at 375 ms.
    #[test]
    fn under_threshold_drag_hides_background_after_the_delay() {
        let t0 = Instant::now();
        let mut timeline = Timeline::default();
        let mut st = ToggleState::default();

        st = state::reduce(st, ToggleEvent::DragStarted).state;
        st = state::reduce(st, ToggleEvent::DragMoved { translation: 20.0 }).state;
        let reduced = state::reduce(st, ToggleEvent::DragReleased { translation: 20.0 });
        st = reduced.state;
        timeline.begin(reduced.settle.unwrap(), t0);

        assert!(!st.is_on);
        assert!(st.show_active_background);

        for millis in [100, 250, 300] {
            for event in timeline.poll(at(t0, millis)) {
                st = state::reduce(st, event).state;
            }
            assert!(st.show_active_background, "hidden too early at {millis} ms");
        }

        for event in timeline.poll(at(t0, 375)) {
            st = state::reduce(st, event).state;
        }
        assert!(!st.show_active_background);
        assert_eq!(st.drag_offset, 0.0);
    }
}
