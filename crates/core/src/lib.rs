//! # Cyberkit Core
//!
//! Renderer-independent building blocks of the Cyberkit components.
//!
//! Nothing in here knows about Dioxus. The crate provides:
//!
//! - **Types**: the closed enums components are configured with
//! - **Palette**: the fixed neon tones and their class names
//! - **Style**: trigger style tables and class merging
//! - **Severity**: the dialog theming table
//! - **Actions**: dialog buttons and gesture routing
//! - **Motion**: the animation engine abstraction and spring timings
//! - **Lifecycle**: the dialog's Closed/Opening/Open/Closing state machine
//! - **Errors**: `CyberError` and `CyberResult` for parsing and config
//!

pub mod actions;
pub mod classes;
pub mod error;
pub mod lifecycle;
pub mod motion;
pub mod palette;
pub mod severity;
pub mod style;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use actions::{
    ActionButton, ActionRole, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT, DialogActions,
    DialogEvent, DialogIntent,
};
pub use classes::ClassList;
pub use error::{CyberError, CyberResult};
pub use lifecycle::{DialogLifecycle, DialogPhase};
pub use motion::{
    InstantMotion, MotionDriver, MotionStatus, MotionTarget, MotionTicket, MotionTimings, Spring,
};
pub use palette::Tone;
pub use severity::DialogConfig;
pub use style::TriggerStyle;
pub use traits::ClosedSet;
pub use types::{IconKind, SeverityType, SizeClass, StyleVariant};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
