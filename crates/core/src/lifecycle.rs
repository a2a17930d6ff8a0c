//! # Dialog Lifecycle
//!
//! The dialog is a controlled component: the host owns a single `bool`
//! saying whether it should be visible. The dialog owns only the phase of
//! getting there.
//!
//! ```text
//!            visible=true              complete(Shown)
//!   Closed ───────────────▶ Opening ────────────────▶ Open
//!     ▲                      │   ▲                      │
//!     │                false │   │ true                 │ visible=false
//!     │                      ▼   │                      │
//!     └─────────────────── Closing ◀────────────────────┘
//!          complete(Hidden)
//! ```
//!
//! Two signals drive it: the observed visibility flag
//! ([`DialogLifecycle::request_visibility`]) and the motion engine's
//! completion ([`DialogLifecycle::motion_complete`]). A flip while a motion
//! runs retargets it; nothing is queued. `Open` and `Closed` are only ever
//! reached through a completion carrying the outstanding ticket.

use uuid::Uuid;

use crate::actions::{DialogEvent, DialogIntent};
use crate::motion::{MotionDriver, MotionStatus, MotionTarget, MotionTicket};

// ============================================================================
// Phase
// ============================================================================

/// Where the dialog is in its mount/unmount cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogPhase {
    /// Not mounted
    #[default]
    Closed,
    /// Mounted, enter motion running
    Opening,
    /// Idle and interactive
    Open,
    /// Exit motion running
    Closing,
}

impl DialogPhase {
    /// Whether anything is rendered
    pub fn is_mounted(&self) -> bool {
        !matches!(self, DialogPhase::Closed)
    }

    /// Whether the dialog is heading to, or resting at, visible
    pub fn is_visible_target(&self) -> bool {
        matches!(self, DialogPhase::Opening | DialogPhase::Open)
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Phase state machine for one dialog instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLifecycle {
    id: Uuid,
    phase: DialogPhase,
    generation: u64,
    pending: Option<MotionTicket>,
}

impl Default for DialogLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogLifecycle {
    /// A closed, unmounted dialog
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: DialogPhase::Closed,
            generation: 0,
            pending: None,
        }
    }

    /// Identifier used in log fields
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_mounted()
    }

    /// The visibility this lifecycle is currently honoring
    pub fn desired_visible(&self) -> bool {
        self.phase.is_visible_target()
    }

    /// Whether user gestures are routed to the host
    ///
    /// Gestures are dropped while closing so a dismissal cannot be
    /// reported twice.
    pub fn accepts_input(&self) -> bool {
        self.phase.is_visible_target()
    }

    /// The motion request still waiting for completion
    pub fn pending(&self) -> Option<MotionTicket> {
        self.pending
    }

    /// Observe the host's visibility flag
    ///
    /// Returns the ticket of the motion that was requested, or `None` when
    /// the flag matches what the dialog already honors. A driver that
    /// settles synchronously completes the motion before this returns.
    pub fn request_visibility<D: MotionDriver + ?Sized>(
        &mut self,
        visible: bool,
        driver: &mut D,
    ) -> Option<MotionTicket> {
        if visible == self.desired_visible() {
            return None;
        }

        let (next, target) = if visible {
            (DialogPhase::Opening, MotionTarget::Shown)
        } else {
            (DialogPhase::Closing, MotionTarget::Hidden)
        };

        self.generation += 1;
        let ticket = MotionTicket {
            generation: self.generation,
            target,
        };
        self.set_phase(next);
        self.pending = Some(ticket);

        if driver.animate(ticket) == MotionStatus::Settled {
            self.motion_complete(ticket);
        }

        Some(ticket)
    }

    /// Report that the motion for `ticket` finished
    ///
    /// Returns `false` when the ticket is stale (superseded by a retarget,
    /// or already completed) and nothing changed.
    pub fn motion_complete(&mut self, ticket: MotionTicket) -> bool {
        if self.pending != Some(ticket) {
            tracing::trace!(
                dialog = %self.id,
                generation = ticket.generation,
                target = ?ticket.target,
                "ignoring stale motion completion"
            );
            return false;
        }

        self.pending = None;
        let next = match ticket.target {
            MotionTarget::Shown => DialogPhase::Open,
            MotionTarget::Hidden => DialogPhase::Closed,
        };
        self.set_phase(next);
        true
    }

    /// Callbacks a gesture maps to in the current phase
    pub fn route(&self, intent: DialogIntent) -> &'static [DialogEvent] {
        if !self.accepts_input() {
            tracing::trace!(dialog = %self.id, ?intent, phase = ?self.phase, "gesture dropped");
            return &[];
        }
        tracing::trace!(dialog = %self.id, ?intent, "gesture routed");
        intent.events()
    }

    fn set_phase(&mut self, next: DialogPhase) {
        if next != self.phase {
            tracing::debug!(dialog = %self.id, from = ?self.phase, to = ?next, "dialog phase changed");
            self.phase = next;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
