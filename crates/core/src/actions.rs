//! # Dialog Actions
//!
//! What buttons a dialog shows, and what each user gesture means for the
//! host's callbacks.
//!
//! ## Routing
//!
//! ```text
//! Confirm     -> on_confirm (if any), then on_close
//! Cancel      -> on_close
//! Backdrop    -> on_close
//! CloseGlyph  -> on_close
//! ```

use crate::severity::DialogConfig;
use crate::types::{SizeClass, StyleVariant};

// ============================================================================
// Constants
// ============================================================================

/// Default confirm label
pub const DEFAULT_CONFIRM_TEXT: &str = "OK";

/// Default cancel label
pub const DEFAULT_CANCEL_TEXT: &str = "CANCEL";

/// Minimum width of the confirm button
pub const CONFIRM_MIN_WIDTH: &str = "min-w-[120px]";

/// Minimum width of the cancel button
pub const CANCEL_MIN_WIDTH: &str = "min-w-[100px]";

/// Layout of the action row
pub const ACTION_ROW_CLASSES: &str = "flex gap-3 justify-center";

// ============================================================================
// Action Buttons
// ============================================================================

/// Which action a button performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRole {
    Confirm,
    Cancel,
}

impl ActionRole {
    /// Intent raised when the button is clicked
    pub fn intent(&self) -> DialogIntent {
        match self {
            ActionRole::Confirm => DialogIntent::Confirm,
            ActionRole::Cancel => DialogIntent::Cancel,
        }
    }
}

/// One button in the action row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub role: ActionRole,
    pub label: String,
    pub variant: StyleVariant,
    pub size: SizeClass,
    pub glow: bool,
    pub class: &'static str,
}

/// The dialog's action row, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogActions {
    buttons: Vec<ActionButton>,
}

impl DialogActions {
    /// Build the row: cancel (only with `show_cancel`) then confirm
    pub fn resolve(
        config: &DialogConfig,
        confirm_text: &str,
        cancel_text: &str,
        show_cancel: bool,
    ) -> Self {
        let mut buttons = Vec::with_capacity(2);

        if show_cancel {
            buttons.push(ActionButton {
                role: ActionRole::Cancel,
                label: cancel_text.to_string(),
                variant: StyleVariant::Secondary,
                size: SizeClass::Md,
                glow: true,
                class: CANCEL_MIN_WIDTH,
            });
        }

        buttons.push(ActionButton {
            role: ActionRole::Confirm,
            label: confirm_text.to_string(),
            variant: config.button_variant,
            size: SizeClass::Md,
            glow: true,
            class: CONFIRM_MIN_WIDTH,
        });

        Self { buttons }
    }

    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    /// The confirm button, always present
    pub fn confirm(&self) -> Option<&ActionButton> {
        self.find(ActionRole::Confirm)
    }

    pub fn cancel(&self) -> Option<&ActionButton> {
        self.find(ActionRole::Cancel)
    }

    fn find(&self, role: ActionRole) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.role == role)
    }
}

// ============================================================================
// Intents and Events
// ============================================================================

/// A user gesture on an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogIntent {
    Confirm,
    Cancel,
    Backdrop,
    CloseGlyph,
}

/// A callback the host must run, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogEvent {
    /// Run `on_confirm` when one was given
    Confirm,
    /// Run `on_close`
    Close,
}

impl DialogIntent {
    /// Callbacks this gesture maps to
    pub fn events(&self) -> &'static [DialogEvent] {
        match self {
            DialogIntent::Confirm => &[DialogEvent::Confirm, DialogEvent::Close],
            DialogIntent::Cancel | DialogIntent::Backdrop | DialogIntent::CloseGlyph => {
                &[DialogEvent::Close]
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
