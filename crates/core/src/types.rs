//! Core types used throughout Cyberkit
//!
//! The closed enums every component is configured with. Each one has a
//! canonical lowercase name shared by `Display`, `FromStr` and serde, so a
//! value written in a config file reads the same as one in a log line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CyberError;
use crate::palette::Tone;
use crate::traits::ClosedSet;

// ============================================================================
// Style Variant
// ============================================================================

/// Color theme of a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl StyleVariant {
    /// Palette tone backing this variant
    pub fn tone(&self) -> Tone {
        match self {
            StyleVariant::Primary => Tone::Primary,
            StyleVariant::Secondary => Tone::Secondary,
            StyleVariant::Success => Tone::Success,
            StyleVariant::Danger => Tone::Danger,
            StyleVariant::Warning => Tone::Accent,
            StyleVariant::Info => Tone::Blue,
        }
    }
}

impl ClosedSet for StyleVariant {
    const KIND: &'static str = "variant";
    const ALL: &'static [Self] = &[
        StyleVariant::Primary,
        StyleVariant::Secondary,
        StyleVariant::Success,
        StyleVariant::Danger,
        StyleVariant::Warning,
        StyleVariant::Info,
    ];

    fn name(&self) -> &'static str {
        match self {
            StyleVariant::Primary => "primary",
            StyleVariant::Secondary => "secondary",
            StyleVariant::Success => "success",
            StyleVariant::Danger => "danger",
            StyleVariant::Warning => "warning",
            StyleVariant::Info => "info",
        }
    }
}

// ============================================================================
// Size Class
// ============================================================================

/// Padding and font size of a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ClosedSet for SizeClass {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[SizeClass::Sm, SizeClass::Md, SizeClass::Lg];

    fn name(&self) -> &'static str {
        match self {
            SizeClass::Sm => "sm",
            SizeClass::Md => "md",
            SizeClass::Lg => "lg",
        }
    }
}

// ============================================================================
// Severity Type
// ============================================================================

/// Theme of a dialog: icon, colors and default action variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Looks like `Warning`; meant for confirm/cancel flows
    Confirm,
}

impl ClosedSet for SeverityType {
    const KIND: &'static str = "severity";
    const ALL: &'static [Self] = &[
        SeverityType::Success,
        SeverityType::Error,
        SeverityType::Warning,
        SeverityType::Info,
        SeverityType::Confirm,
    ];

    fn name(&self) -> &'static str {
        match self {
            SeverityType::Success => "success",
            SeverityType::Error => "error",
            SeverityType::Warning => "warning",
            SeverityType::Info => "info",
            SeverityType::Confirm => "confirm",
        }
    }
}

// ============================================================================
// Icon Kind
// ============================================================================

/// Semantic icon name handed to the icon renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Info,
    /// The dismiss glyph in the dialog corner
    Close,
}

impl ClosedSet for IconKind {
    const KIND: &'static str = "icon";
    const ALL: &'static [Self] = &[
        IconKind::CheckCircle,
        IconKind::AlertCircle,
        IconKind::AlertTriangle,
        IconKind::Info,
        IconKind::Close,
    ];

    fn name(&self) -> &'static str {
        match self {
            IconKind::CheckCircle => "check-circle",
            IconKind::AlertCircle => "alert-circle",
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::Info => "info",
            IconKind::Close => "close",
        }
    }
}

// ============================================================================
// Display / FromStr
// ============================================================================

macro_rules! closed_set_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl FromStr for $ty {
                type Err = CyberError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as ClosedSet>::parse_name(s)
                }
            }
        )*
    };
}

closed_set_text!(StyleVariant, SizeClass, SeverityType, IconKind);

// ============================================================================
// Tests
// ============================================================================
