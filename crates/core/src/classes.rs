//! # Class List
//!
//! Ordered utility-class merging.
//!
//! Style layers are concatenated in order, and a class replaces any
//! earlier class from the same conflict group (`px-6` then `px-2` keeps
//! only `px-2`). State prefixes scope the group, so `shadow-cyber-md` and
//! `hover:shadow-cyber-lg` coexist. This is what lets a caller override
//! win over the lookup tables regardless of stylesheet order.

/// Font-size steps of the `text-*` family; any other `text-*` is a color
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl",
];

/// Font-weight steps of the `font-*` family; any other `font-*` is a family
const FONT_WEIGHTS: &[&str] = &[
    "thin", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

/// Families whose group is simply the prefix before the value
const PREFIX_GROUPS: &[&str] = &[
    "px", "py", "pt", "pb", "pl", "pr", "p", "mx", "my", "mt", "mb", "ml", "mr", "m", "min-w",
    "max-w", "min-h", "max-h", "w", "h", "gap", "opacity", "cursor", "tracking", "leading",
    "rounded", "z", "scale", "duration",
];

/// Ordered, de-duplicated list of utility classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every whitespace-separated class of `layer` into the list
    pub fn push(&mut self, layer: &str) -> &mut Self {
        for class in layer.split_whitespace() {
            let group = conflict_group(class);
            self.classes.retain(|existing| conflict_group(existing) != group);
            self.classes.push(class.to_string());
        }
        self
    }

    /// Builder form of [`ClassList::push`]
    pub fn with(mut self, layer: &str) -> Self {
        self.push(layer);
        self
    }

    /// Whether the exact class is present
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Iterate over the classes in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Conflict group of a single class, including its state prefix
///
/// Two classes conflict when this returns the same string for both.
pub fn conflict_group(class: &str) -> String {
    let (state, utility) = match class.rfind(':') {
        Some(idx) => class.split_at(idx + 1),
        None => ("", class),
    };
    let utility = utility.trim_start_matches('-');

    format!("{state}{}", utility_group(utility))
}

/// Bare keywords that set one property, and the group they belong to
const KEYWORD_GROUPS: &[(&str, &[&str])] = &[
    ("position", &["static", "relative", "absolute", "fixed", "sticky"]),
    (
        "display",
        &["block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden"],
    ),
    ("text-transform", &["uppercase", "lowercase", "capitalize", "normal-case"]),
    ("font-style", &["italic", "not-italic"]),
];

/// Side suffixes of the `border-*` family
const BORDER_SIDES: &[&str] = &["t", "r", "b", "l", "x", "y", "s", "e"];

/// Line styles of the `border-*` family
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

fn utility_group(utility: &str) -> String {
    for (group, keywords) in KEYWORD_GROUPS {
        if keywords.contains(&utility) {
            return (*group).into();
        }
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return if TEXT_SIZES.contains(&value) {
            "text-size".into()
        } else {
            "text-color".into()
        };
    }

    if let Some(value) = utility.strip_prefix("font-") {
        return if FONT_WEIGHTS.contains(&value) {
            "font-weight".into()
        } else {
            "font-family".into()
        };
    }

    if utility == "border" || utility.starts_with("border-") {
        return border_group(utility);
    }

    if utility.starts_with("bg-opacity-") {
        return "bg-opacity".into();
    }
    if utility.starts_with("bg-") {
        return "bg".into();
    }

    if utility == "shadow" || utility.starts_with("shadow-") {
        return "shadow".into();
    }

    if utility == "rounded" {
        return "rounded".into();
    }

    // transition, transition-all, transition-transform, ...
    if utility == "transition" || utility.starts_with("transition-") {
        return "transition".into();
    }

    for axis in ["overflow-x", "overflow-y"] {
        if utility.strip_prefix(axis).is_some_and(|rest| rest.starts_with('-')) {
            return axis.into();
        }
    }
    if utility.starts_with("overflow-") {
        return "overflow".into();
    }

    for prefix in PREFIX_GROUPS {
        if utility
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
        {
            return (*prefix).into();
        }
    }

    utility.into()
}

/// `border`, `border-2`, `border-t-4`, `border-x`, `border-dashed`,
/// `border-cyber-primary`, `border-t-cyber-primary`
fn border_group(utility: &str) -> String {
    let value = utility.strip_prefix("border").unwrap_or_default();
    let value = value.strip_prefix('-').unwrap_or(value);

    if value.is_empty() || is_width(value) {
        return "border-width".into();
    }
    if BORDER_STYLES.contains(&value) {
        return "border-style".into();
    }

    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) if BORDER_SIDES.contains(&side) => (side, rest),
        _ if BORDER_SIDES.contains(&value) => (value, ""),
        _ => return "border-color".into(),
    };

    if rest.is_empty() || is_width(rest) {
        format!("border-width-{side}")
    } else {
        format!("border-color-{side}")
    }
}

/// `2`, `[3px]`
fn is_width(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
        || (value.starts_with('[') && value.ends_with("px]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_class_wins_within_group() {
        let list = ClassList::new().with("px-6 py-3 text-sm").with("px-2");
        assert_eq!(list.to_string(), "py-3 text-sm px-2");
    }

    #[test]
    fn test_text_size_and_color_do_not_conflict() {
        let list = ClassList::new().with("text-sm text-white").with("text-lg");
        assert!(list.contains("text-white"));
        assert!(list.contains("text-lg"));
        assert!(!list.contains("text-sm"));
    }

    #[test]
    fn test_border_width_and_color_do_not_conflict() {
        let list = ClassList::new()
            .with("border-2 border-cyber-primary")
            .with("border-cyber-danger");
        assert_eq!(list.to_string(), "border-2 border-cyber-danger");
    }

    #[test]
    fn test_state_prefix_scopes_group() {
        let list = ClassList::new()
            .with("shadow-cyber-md hover:shadow-cyber-lg")
            .with("shadow-cyber-red");
        assert_eq!(list.to_string(), "hover:shadow-cyber-lg shadow-cyber-red");
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let list = ClassList::new().with("relative uppercase").with("relative");
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "uppercase relative");
    }

    #[test]
    fn test_conflict_groups() {
        assert_eq!(conflict_group("min-w-[100px]"), "min-w");
        assert_eq!(conflict_group("w-full"), "w");
        assert_eq!(conflict_group("hover:bg-opacity-90"), "hover:bg-opacity");
        assert_eq!(conflict_group("font-display"), "font-family");
        assert_eq!(conflict_group("font-bold"), "font-weight");
        assert_eq!(conflict_group("-inset-1"), "inset-1");
        assert_eq!(conflict_group("active:scale-95"), "active:scale");
    }

    #[test]
    fn test_empty_layer_is_noop() {
        let mut list = ClassList::new();
        list.push("").push("   ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_keyword_utilities_conflict() {
        let list = ClassList::new()
            .with("relative uppercase flex")
            .with("absolute normal-case hidden");
        assert_eq!(list.to_string(), "absolute normal-case hidden");
    }

    #[test]
    fn test_overflow_and_transition_conflict() {
        let list = ClassList::new()
            .with("overflow-hidden overflow-x-auto transition-transform")
            .with("overflow-visible transition-all");
        assert!(!list.contains("overflow-hidden"));
        assert!(list.contains("overflow-x-auto"));
        assert!(list.contains("overflow-visible"));
        assert!(!list.contains("transition-transform"));
        assert!(list.contains("transition-all"));
    }

    #[test]
    fn test_border_sides_are_widths() {
        assert_eq!(conflict_group("border-t-4"), "border-width-t");
        assert_eq!(conflict_group("border-x"), "border-width-x");
        assert_eq!(conflict_group("border-t-cyber-danger"), "border-color-t");
        assert_eq!(conflict_group("border-[3px]"), "border-width");
        assert_eq!(conflict_group("border-dashed"), "border-style");

        let list = ClassList::new()
            .with("border-2 border-cyber-primary")
            .with("border-t-4");
        assert_eq!(list.to_string(), "border-2 border-cyber-primary border-t-4");
    }
}
