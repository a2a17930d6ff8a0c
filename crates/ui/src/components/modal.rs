//! # Cyber Modal
//!
//! Themed modal dialog with enter/exit motion.
//!
//! ## Behavior
//!
//! - Controlled: the host owns `is_open`. Gestures only notify the host
//!   through `on_confirm` / `on_close`; the dialog starts closing once the
//!   host flips `is_open` to `false`.
//! - Confirm runs `on_confirm` and then `on_close`. Cancel, the close glyph
//!   and a backdrop click run `on_close` only.
//! - Clicks inside the panel never reach the backdrop.
//! - The dialog stays mounted through its exit motion and unmounts when the
//!   motion completes (see [`DialogLifecycle`]).
//!
//! ## Usage
//!
//! ```rust,ignore
//! rsx! {
//!     CyberModal {
//!         is_open: open(),
//!         on_close: move |_| open.set(false),
//!         title: "Purge cache".to_string(),
//!         message: "This cannot be undone.".to_string(),
//!         severity: SeverityType::Confirm,
//!         show_cancel: true,
//!         on_confirm: move |_| purge(),
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

use cyberkit_core::actions::ACTION_ROW_CLASSES;
use cyberkit_core::motion::MotionTicket;
use cyberkit_core::{
    DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT, DialogActions, DialogConfig, DialogEvent,
    DialogIntent, DialogLifecycle, IconKind, SeverityType,
};
use dioxus::prelude::*;

use crate::components::button::CyberButton;
use crate::components::icons::Icon;
use crate::config::MotionSettings;
use crate::motion::{self, CssMotion, MotionClock};

// ============================================================================
// Constants
// ============================================================================

/// Icon size in the panel body
pub const SEVERITY_ICON_SIZE: u32 = 48;

/// Close glyph size
pub const CLOSE_ICON_SIZE: u32 = 20;

/// Corner decoration placements
const CORNERS: [&str; 4] = [
    "cyber-corner-tl",
    "cyber-corner-tr",
    "cyber-corner-bl",
    "cyber-corner-br",
];

// ============================================================================
// Component Props
// ============================================================================

/// Properties for the CyberModal component
#[derive(Props, Clone, PartialEq)]
pub struct CyberModalProps {
    /// Whether the dialog should be shown (owned by the host)
    pub is_open: bool,

    /// Called on every dismissal, including after confirm
    pub on_close: EventHandler<()>,

    /// Heading text
    pub title: String,

    /// Body text
    pub message: String,

    /// Icon, colors and default action variant
    #[props(default)]
    pub severity: SeverityType,

    /// Label of the confirm button
    #[props(default = DEFAULT_CONFIRM_TEXT.to_string())]
    pub confirm_text: String,

    /// Label of the cancel button
    #[props(default = DEFAULT_CANCEL_TEXT.to_string())]
    pub cancel_text: String,

    /// Called before `on_close` when the confirm button is clicked
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Whether to show the cancel button
    #[props(default = false)]
    pub show_cancel: bool,
}

// ============================================================================
// Main Component
// ============================================================================

/// Modal dialog in the Cyberkit style
#[component]
pub fn CyberModal(props: CyberModalProps) -> Element {
    let settings = try_use_context::<MotionSettings>().unwrap_or_default();
    let is_open = props.is_open;

    let mut lifecycle = use_signal(move || {
        let mut lifecycle = DialogLifecycle::new();
        follow_host(&mut lifecycle, is_open, settings.reduced);
        lifecycle
    });
    let mut clock = use_signal(move || {
        lifecycle
            .peek()
            .pending()
            .map(|ticket| MotionClock::start(ticket, None, &settings.timings, Instant::now()))
    });

    // Follow the host's flag
    use_effect(use_reactive((&props.is_open,), move |(is_open,)| {
        if lifecycle.peek().desired_visible() == is_open {
            return;
        }
        let ticket = follow_host(&mut lifecycle.write(), is_open, settings.reduced);
        if let Some(ticket) = ticket {
            let previous = *clock.peek();
            clock.set(Some(MotionClock::start(
                ticket,
                previous,
                &settings.timings,
                Instant::now(),
            )));
        }
    }));

    // Watchdog for lost animationend events
    use_effect(move || {
        let Some(ticket) = lifecycle.read().pending() else {
            return;
        };
        let offset = resume_offset(*clock.read(), ticket);
        let delay = motion::watchdog_delay(ticket, &settings.timings, offset);
        spawn(async move {
            tokio::time::sleep(delay).await;
            if lifecycle.peek().pending() == Some(ticket) {
                tracing::debug!(dialog = %lifecycle.peek().id(), "motion watchdog fired");
                lifecycle.write().motion_complete(ticket);
            }
        });
    });

    let phase = lifecycle.read().phase();
    if !phase.is_mounted() {
        return rsx! {};
    }

    let config = DialogConfig::for_severity(props.severity);
    let actions = DialogActions::resolve(
        &config,
        &props.confirm_text,
        &props.cancel_text,
        props.show_cancel,
    );
    let buttons = actions.buttons().to_vec();

    let on_close = props.on_close;
    let on_confirm = props.on_confirm;
    let dispatch = move |intent: DialogIntent| {
        for event in lifecycle.peek().route(intent) {
            match event {
                DialogEvent::Confirm => on_confirm.call(()),
                DialogEvent::Close => on_close.call(()),
            }
        }
    };

    let phase_name = motion::phase_attr(phase);
    let backdrop_class = motion::backdrop_class(phase);
    let panel_class = motion::panel_class(phase);
    let offset = lifecycle
        .read()
        .pending()
        .map(|ticket| resume_offset(*clock.read(), ticket))
        .unwrap_or_default();
    let animation_style = motion::animation_style(phase, &settings.timings, offset);
    let border_class = config.border_class();
    let icon_class = config.icon_class();
    let accent_class = config.accent_line_class();

    rsx! {
        div {
            class: "cyber-modal-root",
            "data-phase": "{phase_name}",
            "data-severity": "{props.severity}",

            // Backdrop with grid overlay
            div {
                class: "cyber-backdrop {backdrop_class}",
                style: "{animation_style}",
                onclick: move |_| dispatch(DialogIntent::Backdrop),
                div { class: "cyber-backdrop-grid" }
            }

            // Centering layer; transparent to the pointer outside the panel
            div {
                class: "cyber-modal-layer",

                div {
                    class: "cyber-panel {panel_class}",
                    style: "{animation_style}",
                    onclick: move |evt| evt.stop_propagation(),
                    onanimationend: move |evt| {
                        let name = evt.data().animation_name();
                        let pending = lifecycle.peek().pending();
                        if let Some(ticket) = motion::completed_ticket(pending, &name) {
                            lifecycle.write().motion_complete(ticket);
                        }
                    },

                    // Glow halo
                    div { class: "cyber-panel-halo {accent_class}" }

                    div {
                        class: "cyber-panel-body {border_class}",

                        // Top accent line
                        div { class: "cyber-accent-line {accent_class}" }

                        button {
                            class: "cyber-close {icon_class}",
                            onclick: move |_| dispatch(DialogIntent::CloseGlyph),
                            Icon { kind: IconKind::Close, size: CLOSE_ICON_SIZE }
                        }

                        div {
                            class: "cyber-panel-content",

                            div {
                                class: "cyber-modal-icon {icon_class}",
                                Icon { kind: config.icon, size: SEVERITY_ICON_SIZE }
                            }

                            h2 { class: "cyber-modal-title", "{props.title}" }

                            p { class: "cyber-modal-message", "{props.message}" }

                            div {
                                class: ACTION_ROW_CLASSES,
                                for button in buttons {
                                    CyberButton {
                                        key: "{button.role:?}",
                                        variant: button.variant,
                                        size: button.size,
                                        glow: button.glow,
                                        class: button.class,
                                        onclick: move |_| dispatch(button.role.intent()),
                                        "{button.label}"
                                    }
                                }
                            }
                        }

                        // Corner decorations
                        for corner in CORNERS {
                            div { class: "cyber-corner {corner} {border_class}" }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Bring the lifecycle in line with the host's flag
///
/// Returns the ticket of the motion this started, if any. Re-asserting the
/// current flag starts nothing.
fn follow_host(
    lifecycle: &mut DialogLifecycle,
    is_open: bool,
    reduced: bool,
) -> Option<MotionTicket> {
    if lifecycle.desired_visible() == is_open {
        return None;
    }
    lifecycle.request_visibility(is_open, &mut CssMotion::new(reduced))
}

/// Keyframe offset of `ticket`, if the clock is timing it
fn resume_offset(clock: Option<MotionClock>, ticket: MotionTicket) -> Duration {
    clock
        .filter(|clock| clock.ticket() == ticket)
        .map(|clock| clock.offset())
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
