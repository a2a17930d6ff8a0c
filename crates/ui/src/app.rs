//! Gallery Application Component
//!
//! The root component launched by the desktop binary. It lays out every
//! trigger variant and size, and opens a [`CyberModal`] of each severity so
//! the components can be inspected side by side.

use cyberkit_core::{ClosedSet, SeverityType, SizeClass, StyleVariant};
use dioxus::prelude::*;

use crate::components::{CyberButton, CyberModal, Icon};
use crate::config::{LaunchConfig, MotionSettings};
use crate::state::{GalleryState, demo_copy};

// ============================================================================
// Main App Component
// ============================================================================

/// Root gallery component
#[component]
pub fn App() -> Element {
    let config = try_use_context::<LaunchConfig>().unwrap_or_default();
    use_context_provider(|| config.motion.settings());
    let state = use_signal(GalleryState::new);
    let name = crate::NAME;
    let version = crate::VERSION;

    use_effect(|| {
        tracing::info!("Cyberkit gallery initialized");
    });

    rsx! {
        div {
            class: "gallery",

            header {
                class: "gallery-header",
                h1 { class: "gallery-title", "{name}" }
                span { class: "gallery-version", "v{version}" }
            }

            VariantGrid { size: config.gallery.size, glow: config.gallery.glow, state }
            SizeRow { state }
            DialogLaunchers { state }
            EventLog { state }
            GalleryModal { state }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// One trigger per variant
#[component]
fn VariantGrid(size: SizeClass, glow: bool, state: Signal<GalleryState>) -> Element {
    let mut state = state;

    rsx! {
        section {
            class: "gallery-section",
            h2 { class: "gallery-heading", "Variants" }
            div {
                class: "gallery-row",
                for variant in StyleVariant::ALL.iter().copied() {
                    CyberButton {
                        key: "{variant}",
                        variant,
                        size,
                        glow,
                        onclick: move |_| state.write().record(format!("clicked {variant}")),
                        "{variant}"
                    }
                }
                CyberButton {
                    variant: StyleVariant::Secondary,
                    size,
                    disabled: true,
                    "disabled"
                }
            }
        }
    }
}

/// The primary variant in every size, with and without glow
#[component]
fn SizeRow(state: Signal<GalleryState>) -> Element {
    let mut state = state;

    rsx! {
        section {
            class: "gallery-section",
            h2 { class: "gallery-heading", "Sizes" }
            div {
                class: "gallery-row",
                for size in SizeClass::ALL.iter().copied() {
                    CyberButton {
                        key: "{size}",
                        size,
                        onclick: move |_| state.write().record(format!("clicked {size}")),
                        "{size}"
                    }
                }
                CyberButton {
                    glow: false,
                    icon: rsx! { Icon { kind: cyberkit_core::IconKind::Info, size: 16 } },
                    class: "tracking-widest",
                    "no glow"
                }
            }
        }
    }
}

/// A launcher per severity, plus the cancel toggle
#[component]
fn DialogLaunchers(state: Signal<GalleryState>) -> Element {
    let mut state = state;
    let show_cancel = state.read().show_cancel;
    let toggle_label = if show_cancel { "cancel: on" } else { "cancel: off" };

    rsx! {
        section {
            class: "gallery-section",
            h2 { class: "gallery-heading", "Dialogs" }
            div {
                class: "gallery-row",
                for severity in SeverityType::ALL.iter().copied() {
                    CyberButton {
                        key: "{severity}",
                        variant: cyberkit_core::DialogConfig::for_severity(severity).button_variant,
                        size: SizeClass::Sm,
                        onclick: move |_| state.write().open_dialog(severity),
                        "{severity}"
                    }
                }
                CyberButton {
                    variant: StyleVariant::Secondary,
                    size: SizeClass::Sm,
                    glow: show_cancel,
                    onclick: move |_| state.write().toggle_cancel(),
                    "{toggle_label}"
                }
            }
        }
    }
}

/// Recent callbacks fired by the components
#[component]
fn EventLog(state: Signal<GalleryState>) -> Element {
    let entries: Vec<String> = state.read().log().map(str::to_string).collect();

    rsx! {
        section {
            class: "gallery-section",
            h2 { class: "gallery-heading", "Events" }
            ul {
                class: "gallery-log",
                for (i, entry) in entries.into_iter().enumerate() {
                    li { key: "{i}", "{entry}" }
                }
            }
        }
    }
}

/// The single dialog instance driven by the gallery state
#[component]
fn GalleryModal(state: Signal<GalleryState>) -> Element {
    let mut state = state;
    let snapshot = state.read().clone();
    let (title, message) = demo_copy(snapshot.severity);
    let reduced = use_context::<MotionSettings>().reduced;
    let confirm_text = match snapshot.severity {
        SeverityType::Confirm => "WIPE",
        _ => cyberkit_core::DEFAULT_CONFIRM_TEXT,
    };

    rsx! {
        CyberModal {
            is_open: snapshot.dialog_open,
            on_close: move |_| state.write().close_dialog(),
            on_confirm: move |_| state.write().record("confirm"),
            title: title.to_string(),
            message: message.to_string(),
            severity: snapshot.severity,
            confirm_text: confirm_text.to_string(),
            show_cancel: snapshot.show_cancel,
        }
        if reduced {
            p { class: "gallery-note", "reduced motion" }
        }
    }
}
