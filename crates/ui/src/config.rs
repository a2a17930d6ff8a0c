//! # Launch Configuration
//!
//! Settings for the desktop window, the dialog motion and the gallery,
//! read from a TOML file. Every field has a default, so an empty file (or
//! no file at all) is a valid configuration.
//!
//! ```toml
//! [window]
//! title = "Cyberkit Gallery"
//! width = 1200.0
//! height = 800.0
//!
//! [motion]
//! reduced = false
//! enter_ms = 320
//! exit_ms = 200
//!
//! [gallery]
//! size = "md"
//! glow = true
//! ```

use std::path::Path;

use cyberkit_core::motion::{MotionTimings, MotionTarget};
use cyberkit_core::{CyberError, CyberResult, SizeClass};
use serde::{Deserialize, Serialize};

/// Longest enter/exit motion accepted from configuration
pub const MAX_MOTION_MS: u64 = 5_000;

// ============================================================================
// Sections
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: crate::TITLE.to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Dialog motion settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Skip animations entirely; dialogs settle instantly
    pub reduced: bool,
    /// Enter duration override in milliseconds
    pub enter_ms: Option<u64>,
    /// Exit duration override in milliseconds
    pub exit_ms: Option<u64>,
}

impl MotionConfig {
    /// Settings handed to components through context
    pub fn settings(&self) -> MotionSettings {
        MotionSettings {
            reduced: self.reduced,
            timings: MotionTimings::default().with_overrides(self.enter_ms, self.exit_ms),
        }
    }
}

/// Gallery page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Size of the triggers in the variant grid
    pub size: SizeClass,
    /// Whether the variant grid glows
    pub glow: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            size: SizeClass::Md,
            glow: true,
        }
    }
}

// ============================================================================
// Launch Config
// ============================================================================

/// Complete launch configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub window: WindowConfig,
    pub motion: MotionConfig,
    pub gallery: GalleryConfig,
}

impl LaunchConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> CyberResult<Self> {
        let config: LaunchConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> CyberResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CyberError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values that would produce an unusable window or motion
    pub fn validate(&self) -> CyberResult<()> {
        let sizes = [("width", self.window.width), ("height", self.window.height)];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(CyberError::invalid_config(format!(
                    "window {name} must be a positive number, got {value}"
                )));
            }
        }

        let durations = [
            (MotionTarget::Shown, self.motion.enter_ms),
            (MotionTarget::Hidden, self.motion.exit_ms),
        ];
        for (target, ms) in durations {
            if let Some(ms) = ms.filter(|ms| *ms > MAX_MOTION_MS) {
                return Err(CyberError::invalid_config(format!(
                    "{target:?} motion of {ms}ms exceeds {MAX_MOTION_MS}ms"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Motion Settings
// ============================================================================

/// Motion preferences shared with components via context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionSettings {
    pub reduced: bool,
    pub timings: MotionTimings,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LaunchConfig::from_toml_str("").unwrap();
        assert_eq!(config, LaunchConfig::default());
        assert_eq!(config.gallery.size, SizeClass::Md);
        assert!(config.gallery.glow);
        assert!(!config.motion.reduced);
    }

    #[test]
    fn test_partial_document() {
        let config = LaunchConfig::from_toml_str(
            r#"
            [motion]
            reduced = true
            exit_ms = 120

            [gallery]
            size = "lg"
            "#,
        )
        .unwrap();

        assert!(config.motion.reduced);
        assert_eq!(config.gallery.size, SizeClass::Lg);
        assert_eq!(config.window, WindowConfig::default());

        let settings = config.motion.settings();
        assert!(settings.reduced);
        assert_eq!(settings.timings.exit, Duration::from_millis(120));
        assert_eq!(settings.timings.enter, MotionTimings::default().enter);
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        let err = LaunchConfig::from_toml_str("[gallery]\nsize = \"xl\"").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_non_positive_window_is_rejected() {
        let err = LaunchConfig::from_toml_str("[window]\nwidth = 0.0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: window width must be a positive number, got 0"
        );
    }

    #[test]
    fn test_excessive_motion_is_rejected() {
        let err = LaunchConfig::from_toml_str("[motion]\nenter_ms = 60000").unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Neon\"\nheight = 600.0").unwrap();

        let config = LaunchConfig::load(file.path()).unwrap();
        assert_eq!(config.window.title, "Neon");
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.width, 1200.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LaunchConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CyberError::ConfigRead { .. }));
    }
}
