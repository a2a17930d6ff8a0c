//! Dialog theming by severity
//!
//! A dialog's look is fully determined by its [`SeverityType`]. The table
//! below is a plain `match`, so adding a severity without a row is a
//! compile error.

use crate::palette::Tone;
use crate::types::{IconKind, SeverityType, StyleVariant};

/// Icon, colors and default action variant of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogConfig {
    pub icon: IconKind,
    pub icon_color: Tone,
    pub border_color: Tone,
    pub button_variant: StyleVariant,
}

impl DialogConfig {
    /// The severity table
    pub fn for_severity(severity: SeverityType) -> Self {
        match severity {
            SeverityType::Success => Self {
                icon: IconKind::CheckCircle,
                icon_color: Tone::Success,
                border_color: Tone::Success,
                button_variant: StyleVariant::Success,
            },
            SeverityType::Error => Self {
                icon: IconKind::AlertCircle,
                icon_color: Tone::Danger,
                border_color: Tone::Danger,
                button_variant: StyleVariant::Danger,
            },
            SeverityType::Warning => Self {
                icon: IconKind::AlertTriangle,
                icon_color: Tone::Accent,
                border_color: Tone::Accent,
                button_variant: StyleVariant::Warning,
            },
            SeverityType::Info => Self {
                icon: IconKind::Info,
                icon_color: Tone::Primary,
                border_color: Tone::Primary,
                button_variant: StyleVariant::Primary,
            },
            SeverityType::Confirm => Self {
                icon: IconKind::AlertTriangle,
                icon_color: Tone::Accent,
                border_color: Tone::Accent,
                button_variant: StyleVariant::Primary,
            },
        }
    }

    /// Class for the icon and close glyph
    pub fn icon_class(&self) -> &'static str {
        self.icon_color.text_class()
    }

    /// Class for the panel border, glow halo and corner marks
    pub fn border_class(&self) -> &'static str {
        self.border_color.border_class()
    }

    /// Fill class for the accent line along the top edge
    pub fn accent_line_class(&self) -> &'static str {
        self.border_color.bg_class()
    }
}

impl From<SeverityType> for DialogConfig {
    fn from(severity: SeverityType) -> Self {
        Self::for_severity(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ClosedSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_severity_resolves() {
        for severity in SeverityType::ALL {
            let config = DialogConfig::for_severity(*severity);
            assert!(!config.icon_class().is_empty(), "{severity}");
            assert!(!config.border_class().is_empty(), "{severity}");
            assert!(!config.accent_line_class().is_empty(), "{severity}");
            assert!(!config.button_variant.classes().is_empty(), "{severity}");
            assert_ne!(config.icon, IconKind::Close);
        }
    }

    #[test]
    fn test_error_is_danger() {
        let config = DialogConfig::for_severity(SeverityType::Error);
        assert_eq!(config.icon, IconKind::AlertCircle);
        assert_eq!(config.button_variant, StyleVariant::Danger);
        assert_eq!(config.border_class(), "border-cyber-danger");
        assert_eq!(config.icon_class(), "text-cyber-danger");
    }

    #[test]
    fn test_confirm_looks_like_warning() {
        let warning = DialogConfig::for_severity(SeverityType::Warning);
        let confirm = DialogConfig::for_severity(SeverityType::Confirm);
        assert_eq!(confirm.icon, warning.icon);
        assert_eq!(confirm.icon_color, warning.icon_color);
        assert_eq!(confirm.border_color, warning.border_color);
        assert_eq!(confirm.button_variant, StyleVariant::Primary);
        assert_eq!(warning.button_variant, StyleVariant::Warning);
    }

    #[test]
    fn test_accent_line_matches_border() {
        let config: DialogConfig = SeverityType::Success.into();
        assert_eq!(config.accent_line_class(), "bg-cyber-success");
        assert_eq!(config.border_class(), "border-cyber-success");
    }
}
