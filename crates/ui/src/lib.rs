//! # Cyberkit UI
//!
//! Dioxus Desktop components for the Cyberkit design language.
//!
//! ## Features
//!
//! - `CyberButton`: neon action trigger with variant, size and glow
//! - `CyberModal`: severity-themed dialog with enter/exit motion
//! - A desktop gallery that shows every variant side by side
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod motion;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export the core crate for convenience
pub use cyberkit_core;

pub use app::App;
pub use components::{
    CyberButton, CyberButtonProps, CyberModal, CyberModalProps, Icon, IconProps,
};
pub use config::{GalleryConfig, LaunchConfig, MotionConfig, MotionSettings, WindowConfig};
pub use motion::CssMotion;
pub use state::GalleryState;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Cyberkit";

/// Application display title
pub const TITLE: &str = "Cyberkit Gallery";

/// Minimum window size
const MIN_WIDTH: f64 = 640.0;
const MIN_HEIGHT: f64 = 480.0;

/// Stylesheet for the components and the gallery, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/cyber.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the gallery with a loaded configuration
///
/// The configuration is provided to the app as context, so components read
/// the motion settings from it.
///
/// ```rust,ignore
/// fn main() {
///     cyberkit_ui::launch_with_config(LaunchConfig::default());
/// }
/// ```
pub fn launch_with_config(config: LaunchConfig) {
    tracing::info!(
        title = %config.window.title,
        reduced_motion = config.motion.reduced,
        "Starting {} v{}",
        NAME,
        VERSION
    );

    let custom_head = custom_head();
    let window = &config.window;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            MIN_WIDTH, MIN_HEIGHT,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(config.clone())
        .launch(App);
}

/// `<style>` element with the palette variables followed by the stylesheet
fn custom_head() -> String {
    format!(
        "<style type=\"text/css\">{}\n{}</style>",
        cyberkit_core::palette::root_variables(),
        STYLES
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Cyberkit");
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".bg-cyber-primary"));
        assert!(STYLES.contains("@keyframes cyber-panel-in"));
        assert!(STYLES.contains("@keyframes cyber-panel-out"));
    }

    #[test]
    fn test_styles_cover_glow_classes() {
        use cyberkit_core::{ClosedSet, StyleVariant};

        for variant in StyleVariant::ALL {
            for class in variant.glow_classes().split_whitespace() {
                let selector = format!(".{}", class.replace(':', "\\:"));
                assert!(STYLES.contains(&selector), "missing {selector}");
            }
        }
    }

    #[test]
    fn test_custom_head_declares_palette_before_use() {
        let head = custom_head();
        assert!(head.starts_with("<style"));
        assert!(head.ends_with("</style>"));

        let declared = head.find("--cyber-primary:").unwrap();
        let used = head.find("var(--cyber-primary)").unwrap();
        assert!(declared < used);
        assert!(head.contains("--cyber-panel-offset: 20px;"));
    }
}
