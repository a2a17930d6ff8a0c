//! Motion model
//!
//! The dialog does not animate anything itself. It asks a [`MotionDriver`]
//! to head towards a [`MotionTarget`] and later receives a completion
//! carrying the same [`MotionTicket`]. How the interpolation happens (CSS
//! keyframes, a spring integrator, nothing at all) is up to the driver.
//!
//! [`Spring`] turns the spring parameters the design language is tuned with
//! into concrete durations for engines that need one.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Spring behind the dialog panel's enter motion
pub const PANEL_SPRING: Spring = Spring::new(300.0, 25.0);

/// Spring behind the trigger's press feedback
pub const PRESS_SPRING: Spring = Spring::new(400.0, 17.0);

/// Exit fade duration
pub const DEFAULT_EXIT: Duration = Duration::from_millis(200);

/// Vertical offset (px) the panel slides in from
pub const PANEL_OFFSET_Y: f32 = 20.0;

// ============================================================================
// Spring
// ============================================================================

/// Damped harmonic spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Unit-mass spring
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Undamped natural frequency (rad/s)
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time for the slowest mode to decay to ~2% of its amplitude
    pub fn settle_duration(&self) -> Duration {
        let zeta = self.damping_ratio();
        let omega = self.natural_frequency();

        let decay_rate = if zeta < 1.0 {
            self.damping / (2.0 * self.mass)
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };

        if decay_rate <= f64::EPSILON || !decay_rate.is_finite() {
            return Duration::ZERO;
        }

        Duration::from_secs_f64(4.0 / decay_rate)
    }
}

// ============================================================================
// Timings
// ============================================================================

/// Enter and exit durations of the dialog motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTimings {
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            enter: PANEL_SPRING.settle_duration(),
            exit: DEFAULT_EXIT,
        }
    }
}

impl MotionTimings {
    /// Replace either duration, keeping the defaults for `None`
    pub fn with_overrides(mut self, enter_ms: Option<u64>, exit_ms: Option<u64>) -> Self {
        if let Some(ms) = enter_ms {
            self.enter = Duration::from_millis(ms);
        }
        if let Some(ms) = exit_ms {
            self.exit = Duration::from_millis(ms);
        }
        self
    }

    /// Duration of the motion towards `target`
    pub fn for_target(&self, target: MotionTarget) -> Duration {
        match target {
            MotionTarget::Shown => self.enter,
            MotionTarget::Hidden => self.exit,
        }
    }
}

// ============================================================================
// Requests and Completions
// ============================================================================

/// Visual state the driver is asked to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionTarget {
    Shown,
    Hidden,
}

/// Identifies one motion request
///
/// A completion is only honored when it presents the ticket that is still
/// outstanding; anything older was superseded by a retarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionTicket {
    pub generation: u64,
    pub target: MotionTarget,
}

/// What the driver did with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStatus {
    /// Motion is running; completion will be reported later
    Pending,
    /// Target was reached synchronously
    Settled,
}

/// The animation engine as seen by the dialog lifecycle
pub trait MotionDriver {
    /// Start moving towards `ticket.target` from wherever the visuals are now
    fn animate(&mut self, ticket: MotionTicket) -> MotionStatus;
}

/// Driver that reaches every target immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantMotion;

impl MotionDriver for InstantMotion {
    fn animate(&mut self, _ticket: MotionTicket) -> MotionStatus {
        MotionStatus::Settled
    }
}

// ============================================================================
// Tests
// ============================================================================
