//! The fixed Cyberkit palette
//!
//! Six neon tones carry all semantic color in the design language. Each
//! tone knows the utility class names the stylesheet defines for it, so the
//! style and severity tables never spell a color twice.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::motion::PANEL_OFFSET_Y;

// ============================================================================
// Surface Colors
// ============================================================================

/// Panel surface
pub const SURFACE_DARK: &str = "#0a0e27";

/// Deepest background, also the foreground on light tones
pub const SURFACE_DARKER: &str = "#05070f";

/// Second stop of the panel gradient
pub const SURFACE_VIOLET: &str = "#1a0933";

/// Body text
pub const TEXT: &str = "#e0e6ff";

/// Backdrop fill behind an open dialog
pub const BACKDROP: &str = "rgba(10, 14, 39, 0.85)";

// ============================================================================
// Tone
// ============================================================================

/// One of the neon accent colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Cyan
    Primary,
    /// Hot pink
    Secondary,
    /// Acid green
    Success,
    /// Red
    Danger,
    /// Yellow
    Accent,
    /// Plain blue, the only tone outside the cyber-* family
    Blue,
}

impl Tone {
    /// Every tone, in palette order
    pub const ALL: &'static [Tone] = &[
        Tone::Primary,
        Tone::Secondary,
        Tone::Success,
        Tone::Danger,
        Tone::Accent,
        Tone::Blue,
    ];

    /// Custom property the stylesheet reads this tone from
    pub fn css_var(&self) -> &'static str {
        match self {
            Tone::Primary => "--cyber-primary",
            Tone::Secondary => "--cyber-secondary",
            Tone::Success => "--cyber-success",
            Tone::Danger => "--cyber-danger",
            Tone::Accent => "--cyber-accent",
            Tone::Blue => "--cyber-blue",
        }
    }

    /// Hex value of the tone
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Primary => "#00f3ff",
            Tone::Secondary => "#ff006e",
            Tone::Success => "#39ff14",
            Tone::Danger => "#ff0055",
            Tone::Accent => "#ffd60a",
            Tone::Blue => "#3b82f6",
        }
    }

    /// Text color class
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Primary => "text-cyber-primary",
            Tone::Secondary => "text-cyber-secondary",
            Tone::Success => "text-cyber-success",
            Tone::Danger => "text-cyber-danger",
            Tone::Accent => "text-cyber-accent",
            Tone::Blue => "text-blue-500",
        }
    }

    /// Border color class
    pub fn border_class(&self) -> &'static str {
        match self {
            Tone::Primary => "border-cyber-primary",
            Tone::Secondary => "border-cyber-secondary",
            Tone::Success => "border-cyber-success",
            Tone::Danger => "border-cyber-danger",
            Tone::Accent => "border-cyber-accent",
            Tone::Blue => "border-blue-500",
        }
    }

    /// Background color class
    pub fn bg_class(&self) -> &'static str {
        match self {
            Tone::Primary => "bg-cyber-primary",
            Tone::Secondary => "bg-cyber-secondary",
            Tone::Success => "bg-cyber-success",
            Tone::Danger => "bg-cyber-danger",
            Tone::Accent => "bg-cyber-accent",
            Tone::Blue => "bg-blue-500",
        }
    }

    /// Whether dark text is needed on top of a fill in this tone
    pub fn is_light(&self) -> bool {
        matches!(self, Tone::Primary | Tone::Success | Tone::Accent)
    }

    /// Foreground class for text drawn on a fill in this tone
    pub fn on_fill_class(&self) -> &'static str {
        if self.is_light() {
            "text-cyber-darker"
        } else {
            "text-white"
        }
    }
}

// ============================================================================
// Stylesheet Variables
// ============================================================================

/// `:root` rule declaring the palette and panel offset as custom properties
///
/// The stylesheet only refers to `var(--cyber-*)`; this rule is injected
/// ahead of it so the values live in one place.
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for tone in Tone::ALL {
        let _ = writeln!(css, "  {}: {};", tone.css_var(), tone.hex());
    }
    let surfaces = [
        ("--cyber-dark", SURFACE_DARK),
        ("--cyber-darker", SURFACE_DARKER),
        ("--cyber-violet", SURFACE_VIOLET),
        ("--cyber-text", TEXT),
        ("--cyber-backdrop", BACKDROP),
    ];
    for (name, value) in surfaces {
        let _ = writeln!(css, "  {name}: {value};");
    }
    let _ = writeln!(css, "  --cyber-panel-offset: {PANEL_OFFSET_Y}px;");
    css.push('}');
    css
}
