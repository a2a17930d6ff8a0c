//! # UI Components
//!
//! Dioxus components of the Cyberkit design language.
//!
//! - **CyberButton**: styled action trigger
//! - **CyberModal**: themed modal dialog with enter/exit motion
//! - **Icon**: stroke icons for the semantic icon names
//!
//! ## Component Hierarchy
//!
//! ```text
//! CyberModal
//! ├── Backdrop (grid overlay, click → close)
//! └── Panel (stops click propagation)
//!     ├── Icon (close glyph)
//!     ├── Icon (severity)
//!     └── CyberButton (cancel?, confirm)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod button;
pub mod icons;
pub mod modal;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use button::{CyberButton, CyberButtonProps};
pub use icons::{Icon, IconProps, Shape};
pub use modal::{CyberModal, CyberModalProps};
