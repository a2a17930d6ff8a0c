//! # Cyber Button
//!
//! The styled action trigger.
//!
//! Styling is resolved by [`TriggerStyle`] from `variant`, `size`, `glow`
//! and `disabled`; a `class` or `style` given by the caller is merged last
//! and wins on conflict. Every other global attribute is spread onto the
//! underlying `<button>` unchanged. Mouse, pointer, focus and keyboard
//! handlers are forwarded with the native event untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! rsx! {
//!     CyberButton {
//!         variant: StyleVariant::Danger,
//!         size: SizeClass::Lg,
//!         onclick: move |_| delete(),
//!         "DELETE"
//!     }
//! }
//! ```

use cyberkit_core::style::{ICON_CLASSES, LABEL_CLASSES};
use cyberkit_core::{SizeClass, StyleVariant, TriggerStyle};
use dioxus::dioxus_core::{Attribute, AttributeValue};
use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

/// Properties for the CyberButton component
#[derive(Props, Clone, PartialEq)]
pub struct CyberButtonProps {
    /// Color theme
    #[props(default)]
    pub variant: StyleVariant,

    /// Padding and font size
    #[props(default)]
    pub size: SizeClass,

    /// Neon shadow in the variant's color
    #[props(default = true)]
    pub glow: bool,

    /// Optional icon shown before the label
    #[props(default)]
    pub icon: Option<Element>,

    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Click handler, receives the native event untouched
    #[props(default)]
    pub onclick: EventHandler<MouseEvent>,

    /// Mouse enter handler
    #[props(default)]
    pub onmouseenter: EventHandler<MouseEvent>,

    /// Mouse leave handler
    #[props(default)]
    pub onmouseleave: EventHandler<MouseEvent>,

    #[props(default)]
    pub onmousedown: EventHandler<MouseEvent>,

    #[props(default)]
    pub onmouseup: EventHandler<MouseEvent>,

    #[props(default)]
    pub ondoubleclick: EventHandler<MouseEvent>,

    #[props(default)]
    pub onpointerdown: EventHandler<PointerEvent>,

    #[props(default)]
    pub onpointerup: EventHandler<PointerEvent>,

    #[props(default)]
    pub onfocus: EventHandler<FocusEvent>,

    #[props(default)]
    pub onblur: EventHandler<FocusEvent>,

    #[props(default)]
    pub onkeydown: EventHandler<KeyboardEvent>,

    #[props(default)]
    pub onkeyup: EventHandler<KeyboardEvent>,

    /// Passthrough attributes (`class` and `style` are merged, the rest spread)
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,

    /// Button label
    pub children: Element,
}

// ============================================================================
// Main Component
// ============================================================================

/// Neon action button
#[component]
pub fn CyberButton(props: CyberButtonProps) -> Element {
    let mut attributes = props.attributes.clone();
    let caller_class = take_text_attribute(&mut attributes, "class");
    let caller_style = take_text_attribute(&mut attributes, "style");

    let style = TriggerStyle::resolve(props.variant, props.size, props.glow, props.disabled);
    let class = style.class_string(caller_class.as_deref());
    let inline_style = style.inline_style(caller_style.as_deref());

    rsx! {
        button {
            class: "{class}",
            style: "{inline_style}",
            disabled: props.disabled,
            "data-variant": "{props.variant}",
            onclick: move |evt| props.onclick.call(evt),
            onmouseenter: move |evt| props.onmouseenter.call(evt),
            onmouseleave: move |evt| props.onmouseleave.call(evt),
            onmousedown: move |evt| props.onmousedown.call(evt),
            onmouseup: move |evt| props.onmouseup.call(evt),
            ondoubleclick: move |evt| props.ondoubleclick.call(evt),
            onpointerdown: move |evt| props.onpointerdown.call(evt),
            onpointerup: move |evt| props.onpointerup.call(evt),
            onfocus: move |evt| props.onfocus.call(evt),
            onblur: move |evt| props.onblur.call(evt),
            onkeydown: move |evt| props.onkeydown.call(evt),
            onkeyup: move |evt| props.onkeyup.call(evt),
            ..attributes,

            span {
                class: LABEL_CLASSES,
                if let Some(icon) = props.icon.clone() {
                    span { class: ICON_CLASSES, {icon} }
                }
                {props.children}
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Remove every `name` text attribute from the list, joining their values
fn take_text_attribute(attributes: &mut Vec<Attribute>, name: &str) -> Option<String> {
    let mut joined: Option<String> = None;

    attributes.retain(|attr| {
        if attr.name != name {
            return true;
        }
        if let AttributeValue::Text(text) = &attr.value {
            match joined.as_mut() {
                Some(acc) => {
                    acc.push(' ');
                    acc.push_str(text);
                }
                None => joined = Some(text.clone()),
            }
        }
        false
    });

    joined
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{Mounted, record, render, take_calls};

    fn text(name: &'static str, value: &str) -> Attribute {
        Attribute::new(name, value.to_string(), None, false)
    }

    #[test]
    fn test_take_text_attribute_joins_values() {
        let mut attrs = vec![
            text("class", "min-w-[120px]"),
            text("id", "save"),
            text("class", "px-2"),
        ];

        let class = take_text_attribute(&mut attrs, "class");
        assert_eq!(class.as_deref(), Some("min-w-[120px] px-2"));
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "id");
    }

    #[test]
    fn test_take_text_attribute_missing() {
        let mut attrs = vec![text("id", "save")];
        assert_eq!(take_text_attribute(&mut attrs, "style"), None);
        assert_eq!(attrs.len(), 1);
    }


    #[test]
    fn test_renders_default_trigger() {
        fn app() -> Element {
            rsx! { CyberButton { "ENGAGE" } }
        }

        let html = render(app);
        assert!(html.contains(r#"data-variant="primary""#));
        assert!(html.contains("bg-cyber-primary"));
        assert!(html.contains("px-6 py-3 text-sm"));
        assert!(html.contains("shadow-cyber-md"));
        assert!(html.contains("transition-duration: 470ms;"));
        assert!(html.contains("ENGAGE"));
        assert!(!html.contains("opacity-50"));
    }

    #[test]
    fn test_caller_class_and_style_win() {
        fn app() -> Element {
            rsx! {
                CyberButton {
                    variant: StyleVariant::Danger,
                    size: SizeClass::Lg,
                    glow: false,
                    class: "px-2",
                    style: "margin: 0;",
                    id: "purge",
                    "PURGE"
                }
            }
        }

        let html = render(app);
        assert!(html.contains("px-2"));
        assert!(!html.contains("px-8"));
        assert!(html.contains("py-4"));
        assert!(!html.contains("shadow-cyber-red"));
        assert!(html.contains("transition-duration: 470ms; margin: 0;"));
        assert!(html.contains(r#"id="purge""#));
    }

    #[test]
    fn test_disabled_trigger() {
        fn app() -> Element {
            rsx! {
                CyberButton {
                    variant: StyleVariant::Secondary,
                    disabled: true,
                    "LOCKED"
                }
            }
        }

        let html = render(app);
        assert!(html.contains("opacity-50"));
        assert!(html.contains("cursor-not-allowed"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_forwards_press_handlers() {
        fn app() -> Element {
            rsx! {
                CyberButton {
                    onmousedown: move |_| record("down"),
                    onmouseup: move |_| record("up"),
                    onclick: move |_| record("click"),
                    "HOLD"
                }
            }
        }

        let mut mounted = Mounted::new(app);
        let button = mounted.element("data-variant", "primary");
        for event in ["click", "mousedown", "mouseup", "focus", "keydown", "pointerdown"] {
            assert!(mounted.listens(button, event), "{event} not forwarded");
        }

        mounted.mouse("mousedown", button);
        mounted.mouse("mouseup", button);
        mounted.click(button);
        assert_eq!(take_calls(), vec!["down", "up", "click"]);
    }
}
