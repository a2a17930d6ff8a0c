//! # CSS Motion
//!
//! The concrete animation engine behind [`CyberModal`](crate::CyberModal).
//!
//! A motion request is expressed by putting an animation class on the
//! backdrop and the panel; the keyframes live in the stylesheet. The
//! panel's `animationend` event is the completion signal. A watchdog timer
//! reports the same ticket slightly after the expected duration, in case
//! the webview never delivers the event (hidden window, throttled frames).
//!
//! ## Retargeting
//!
//! The exit keyframes are the enter keyframes reversed, both on the same
//! symmetric easing. A motion that starts while the previous one is still
//! running begins part-way into its keyframes (a negative
//! `animation-delay`), at the point showing what was on screen. The panel
//! then continues from where it is instead of jumping back to the start.

use std::time::{Duration, Instant};

use cyberkit_core::motion::{MotionDriver, MotionStatus, MotionTarget, MotionTicket, MotionTimings};
use cyberkit_core::DialogPhase;

// ============================================================================
// Constants
// ============================================================================

/// Keyframes played by the panel on enter
pub const PANEL_ENTER_ANIMATION: &str = "cyber-panel-in";

/// Keyframes played by the panel on exit
pub const PANEL_EXIT_ANIMATION: &str = "cyber-panel-out";

/// Extra time the watchdog waits past the expected duration
pub const WATCHDOG_GRACE: Duration = Duration::from_millis(150);

// ============================================================================
// Driver
// ============================================================================

/// Motion driver backed by CSS keyframe animations
#[derive(Debug, Clone, Copy, Default)]
pub struct CssMotion {
    reduced: bool,
}

impl CssMotion {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }
}

impl MotionDriver for CssMotion {
    fn animate(&mut self, ticket: MotionTicket) -> MotionStatus {
        if self.reduced {
            return MotionStatus::Settled;
        }
        tracing::trace!(generation = ticket.generation, target = ?ticket.target, "css motion requested");
        MotionStatus::Pending
    }
}

// ============================================================================
// Phase to CSS
// ============================================================================

/// Keyframe name that completes a motion towards `target`
pub fn animation_name(target: MotionTarget) -> &'static str {
    match target {
        MotionTarget::Shown => PANEL_ENTER_ANIMATION,
        MotionTarget::Hidden => PANEL_EXIT_ANIMATION,
    }
}

/// Animation class for the panel
pub fn panel_class(phase: DialogPhase) -> &'static str {
    match phase {
        DialogPhase::Opening => "cyber-panel-enter",
        DialogPhase::Closing => "cyber-panel-exit",
        DialogPhase::Open | DialogPhase::Closed => "",
    }
}

/// Animation class for the backdrop
pub fn backdrop_class(phase: DialogPhase) -> &'static str {
    match phase {
        DialogPhase::Opening => "cyber-backdrop-enter",
        DialogPhase::Closing => "cyber-backdrop-exit",
        DialogPhase::Open | DialogPhase::Closed => "",
    }
}

/// Inline animation timing for the current phase
///
/// `offset` is how far into its keyframes the motion starts.
pub fn animation_style(phase: DialogPhase, timings: &MotionTimings, offset: Duration) -> String {
    let duration = match phase {
        DialogPhase::Opening => timings.enter,
        DialogPhase::Closing => timings.exit,
        DialogPhase::Open | DialogPhase::Closed => return String::new(),
    };
    let offset = round_millis(offset.min(duration));
    if offset == 0 {
        format!("animation-duration: {}ms;", round_millis(duration))
    } else {
        format!(
            "animation-duration: {}ms; animation-delay: -{offset}ms;",
            round_millis(duration)
        )
    }
}

/// Whole milliseconds, to the nearest
pub fn round_millis(duration: Duration) -> u64 {
    (duration.as_secs_f64() * 1000.0).round() as u64
}

/// `data-phase` attribute value
pub fn phase_attr(phase: DialogPhase) -> &'static str {
    match phase {
        DialogPhase::Closed => "closed",
        DialogPhase::Opening => "opening",
        DialogPhase::Open => "open",
        DialogPhase::Closing => "closing",
    }
}

/// The outstanding ticket, if `animation` is the one that completes it
///
/// `animationend` bubbles, so events from nested elements or from the
/// previous phase's keyframes are filtered out here.
pub fn completed_ticket(pending: Option<MotionTicket>, animation: &str) -> Option<MotionTicket> {
    pending.filter(|ticket| animation_name(ticket.target) == animation)
}

/// How long the watchdog waits before forcing completion
pub fn watchdog_delay(ticket: MotionTicket, timings: &MotionTimings, offset: Duration) -> Duration {
    timings.for_target(ticket.target).saturating_sub(offset) + WATCHDOG_GRACE
}

// ============================================================================
// Motion Clock
// ============================================================================

/// When a motion started and how far into its keyframes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionClock {
    ticket: MotionTicket,
    offset: Duration,
    started: Instant,
}

impl MotionClock {
    /// Start timing `ticket`, resuming from what `previous` left on screen
    ///
    /// Without a previous motion the dialog starts from the opposite end:
    /// fully hidden when showing, fully shown when hiding.
    pub fn start(
        ticket: MotionTicket,
        previous: Option<MotionClock>,
        timings: &MotionTimings,
        now: Instant,
    ) -> Self {
        let visibility = match previous {
            Some(clock) => clock.visibility_at(now, timings),
            None => match ticket.target {
                MotionTarget::Shown => 0.0,
                MotionTarget::Hidden => 1.0,
            },
        };

        Self {
            ticket,
            offset: start_offset(ticket.target, visibility, timings),
            started: now,
        }
    }

    pub fn ticket(&self) -> MotionTicket {
        self.ticket
    }

    /// Offset into the keyframes at which this motion began
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Fraction of the way to fully shown at `now`
    pub fn visibility_at(&self, now: Instant, timings: &MotionTimings) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        visibility(self.ticket.target, self.offset + elapsed, timings)
    }
}

/// Fraction of the way to fully shown, `position` into a motion's keyframes
pub fn visibility(target: MotionTarget, position: Duration, timings: &MotionTimings) -> f64 {
    let total = timings.for_target(target);
    let progress = if total.is_zero() {
        1.0
    } else {
        (position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    };

    match target {
        MotionTarget::Shown => progress,
        MotionTarget::Hidden => 1.0 - progress,
    }
}

/// Keyframe position of a motion towards `target` that shows `visibility`
pub fn start_offset(target: MotionTarget, visibility: f64, timings: &MotionTimings) -> Duration {
    let visibility = visibility.clamp(0.0, 1.0);
    let progress = match target {
        MotionTarget::Shown => visibility,
        MotionTarget::Hidden => 1.0 - visibility,
    };
    timings.for_target(target).mul_f64(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(generation: u64, target: MotionTarget) -> MotionTicket {
        MotionTicket { generation, target }
    }

    #[test]
    fn test_reduced_motion_settles() {
        let t = ticket(1, MotionTarget::Shown);
        assert_eq!(CssMotion::new(true).animate(t), MotionStatus::Settled);
        assert_eq!(CssMotion::new(false).animate(t), MotionStatus::Pending);
    }

    #[test]
    fn test_classes_only_while_transitioning() {
        assert_eq!(panel_class(DialogPhase::Opening), "cyber-panel-enter");
        assert_eq!(backdrop_class(DialogPhase::Closing), "cyber-backdrop-exit");
        assert!(panel_class(DialogPhase::Open).is_empty());
        assert!(backdrop_class(DialogPhase::Open).is_empty());
    }

    #[test]
    fn test_animation_style() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(150));
        assert_eq!(
            animation_style(DialogPhase::Opening, &timings, Duration::ZERO),
            "animation-duration: 300ms;"
        );
        assert_eq!(
            animation_style(DialogPhase::Closing, &timings, Duration::ZERO),
            "animation-duration: 150ms;"
        );
        assert_eq!(
            animation_style(DialogPhase::Closing, &timings, Duration::from_millis(60)),
            "animation-duration: 150ms; animation-delay: -60ms;"
        );
        assert!(animation_style(DialogPhase::Open, &timings, Duration::ZERO).is_empty());
    }

    #[test]
    fn test_completed_ticket_filters_by_animation() {
        let pending = Some(ticket(3, MotionTarget::Hidden));
        assert_eq!(completed_ticket(pending, PANEL_EXIT_ANIMATION), pending);
        assert_eq!(completed_ticket(pending, PANEL_ENTER_ANIMATION), None);
        assert_eq!(completed_ticket(pending, "cyber-backdrop-out"), None);
        assert_eq!(completed_ticket(None, PANEL_EXIT_ANIMATION), None);
    }

    #[test]
    fn test_watchdog_delay() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(100));
        assert_eq!(
            watchdog_delay(ticket(1, MotionTarget::Shown), &timings, Duration::ZERO),
            Duration::from_millis(450)
        );
        assert_eq!(
            watchdog_delay(ticket(2, MotionTarget::Hidden), &timings, Duration::ZERO),
            Duration::from_millis(250)
        );
        assert_eq!(
            watchdog_delay(ticket(3, MotionTarget::Hidden), &timings, Duration::from_millis(40)),
            Duration::from_millis(210)
        );
    }

    #[test]
    fn test_fresh_motion_starts_at_the_beginning() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(200));
        let now = Instant::now();

        let enter = MotionClock::start(ticket(1, MotionTarget::Shown), None, &timings, now);
        assert_eq!(enter.offset(), Duration::ZERO);
        assert_eq!(enter.visibility_at(now, &timings), 0.0);

        let exit = MotionClock::start(ticket(2, MotionTarget::Hidden), None, &timings, now);
        assert_eq!(exit.offset(), Duration::ZERO);
        assert_eq!(exit.visibility_at(now, &timings), 1.0);
    }

    #[test]
    fn test_exit_after_settled_enter_starts_at_the_beginning() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(200));
        let start = Instant::now();

        let enter = MotionClock::start(ticket(1, MotionTarget::Shown), None, &timings, start);
        let later = start + Duration::from_secs(5);
        let exit = MotionClock::start(ticket(2, MotionTarget::Hidden), Some(enter), &timings, later);
        assert_eq!(exit.offset(), Duration::ZERO);
    }

    #[test]
    fn test_retarget_while_opening_resumes_from_current_visibility() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(200));
        let start = Instant::now();

        // Reversed at 3/4 of the way in: the exit picks up at 1/4 of its run
        let enter = MotionClock::start(ticket(1, MotionTarget::Shown), None, &timings, start);
        let flip = start + Duration::from_millis(225);
        let exit = MotionClock::start(ticket(2, MotionTarget::Hidden), Some(enter), &timings, flip);

        assert_eq!(round_millis(exit.offset()), 50);
        let before = enter.visibility_at(flip, &timings);
        let after = exit.visibility_at(flip, &timings);
        assert!((before - 0.75).abs() < 1e-9);
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_retarget_while_closing_resumes_from_current_visibility() {
        let timings = MotionTimings::default().with_overrides(Some(300), Some(200));
        let start = Instant::now();

        let exit = MotionClock::start(ticket(1, MotionTarget::Hidden), None, &timings, start);
        let flip = start + Duration::from_millis(100);
        let enter = MotionClock::start(ticket(2, MotionTarget::Shown), Some(exit), &timings, flip);

        // Half hidden, so the enter starts half-way through its 300ms
        assert_eq!(round_millis(enter.offset()), 150);
        assert_eq!(
            animation_style(DialogPhase::Opening, &timings, enter.offset()),
            "animation-duration: 300ms; animation-delay: -150ms;"
        );
    }
}
