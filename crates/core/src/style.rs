//! # Trigger Styling
//!
//! Resolves a trigger's `(variant, size, glow, disabled)` inputs to a
//! style descriptor.
//!
//! ```text
//! style = base ∪ variant[variant] ∪ size[size]
//!       ∪ (glow ? glow[variant] : ∅)
//!       ∪ (disabled ? disabled : ∅)
//!       ∪ caller override
//! ```
//!
//! Layers are kept apart in [`TriggerStyle`] and only merged into a class
//! string at the end, through [`ClassList`], so the caller override is
//! guaranteed to win on conflict.

use std::time::Duration;

use crate::classes::ClassList;
use crate::motion::PRESS_SPRING;
use crate::types::{SizeClass, StyleVariant};

// ============================================================================
// Tables
// ============================================================================

/// Classes shared by every trigger
pub const BASE_CLASSES: &str =
    "relative font-display font-bold uppercase tracking-wider overflow-hidden";

/// Classes added when the trigger is disabled
pub const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

/// Press feedback, timed by the press spring
pub const PRESS_CLASSES: &str = "transition-transform active:scale-95";

/// Inner label row
pub const LABEL_CLASSES: &str = "relative flex items-center justify-center gap-2";

/// Wrapper around the optional icon
pub const ICON_CLASSES: &str = "inline-block";

impl StyleVariant {
    /// Fill, foreground and border
    pub fn classes(&self) -> &'static str {
        match self {
            StyleVariant::Primary => {
                "bg-cyber-primary text-cyber-darker hover:bg-opacity-90 border-2 border-cyber-primary"
            }
            StyleVariant::Secondary => {
                "bg-cyber-secondary text-white hover:bg-opacity-90 border-2 border-cyber-secondary"
            }
            StyleVariant::Success => {
                "bg-cyber-success text-cyber-darker hover:bg-opacity-90 border-2 border-cyber-success"
            }
            StyleVariant::Danger => {
                "bg-cyber-danger text-white hover:bg-opacity-90 border-2 border-cyber-danger"
            }
            StyleVariant::Warning => {
                "bg-cyber-accent text-cyber-darker hover:bg-opacity-90 border-2 border-cyber-accent"
            }
            StyleVariant::Info => "bg-blue-500 text-white hover:bg-opacity-90 border-2 border-blue-500",
        }
    }

    /// Neon shadow, brighter on hover
    pub fn glow_classes(&self) -> &'static str {
        match self {
            StyleVariant::Primary => "shadow-cyber-md hover:shadow-cyber-lg",
            StyleVariant::Secondary => "shadow-cyber-pink hover:shadow-cyber-pink-lg",
            StyleVariant::Success => "shadow-cyber-green hover:shadow-cyber-green-lg",
            StyleVariant::Danger => "shadow-cyber-red hover:shadow-cyber-red-lg",
            StyleVariant::Warning => "shadow-cyber-yellow hover:shadow-cyber-yellow-lg",
            StyleVariant::Info => "shadow-cyber-blue hover:shadow-cyber-blue-lg",
        }
    }
}

impl SizeClass {
    /// Padding and font size
    pub fn classes(&self) -> &'static str {
        match self {
            SizeClass::Sm => "px-4 py-2 text-xs",
            SizeClass::Md => "px-6 py-3 text-sm",
            SizeClass::Lg => "px-8 py-4 text-base",
        }
    }
}

// ============================================================================
// Trigger Style
// ============================================================================

/// Resolved style of one trigger, layer by layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerStyle {
    pub base: &'static str,
    pub variant: &'static str,
    pub size: &'static str,
    pub glow: Option<&'static str>,
    pub disabled: Option<&'static str>,
    pub press: &'static str,
}

impl TriggerStyle {
    /// Look up every layer for the given inputs
    pub fn resolve(variant: StyleVariant, size: SizeClass, glow: bool, disabled: bool) -> Self {
        Self {
            base: BASE_CLASSES,
            variant: variant.classes(),
            size: size.classes(),
            glow: glow.then(|| variant.glow_classes()),
            disabled: disabled.then_some(DISABLED_CLASSES),
            press: PRESS_CLASSES,
        }
    }

    /// Merge the layers, then the caller's classes on top
    pub fn class_list(&self, caller: Option<&str>) -> ClassList {
        let mut list = ClassList::new();
        list.push(self.base)
            .push(self.variant)
            .push(self.size)
            .push(self.glow.unwrap_or_default())
            .push(self.disabled.unwrap_or_default())
            .push(self.press)
            .push(caller.unwrap_or_default());
        list
    }

    /// [`TriggerStyle::class_list`] as a single attribute value
    pub fn class_string(&self, caller: Option<&str>) -> String {
        self.class_list(caller).to_string()
    }

    /// Inline style: press timing first, caller declarations after
    pub fn inline_style(&self, caller: Option<&str>) -> String {
        let mut style = format!(
            "transition-duration: {}ms;",
            press_duration().as_millis()
        );
        if let Some(extra) = caller.map(str::trim).filter(|s| !s.is_empty()) {
            style.push(' ');
            style.push_str(extra);
        }
        style
    }
}

/// Length of the press feedback transition
pub fn press_duration() -> Duration {
    PRESS_SPRING.settle_duration()
}

// ============================================================================
// Tests
// ============================================================================
