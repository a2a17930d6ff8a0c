//! Core traits for Cyberkit
//!
//! Every styling input is a closed enum. [`ClosedSet`] exposes the full
//! member list of such an enum together with its canonical lowercase
//! names, so that tests, the gallery and text parsing can all walk the
//! same set of values the lookup tables are written against.

use crate::error::{CyberError, CyberResult};

// ============================================================================
// ClosedSet Trait
// ============================================================================

/// A fieldless enum whose members are known up front
///
/// # Example
///
/// ```rust,ignore
/// use cyberkit_core::{ClosedSet, SizeClass};
///
/// for size in SizeClass::ALL {
///     println!("{} -> {}", size.name(), size.classes());
/// }
/// ```
pub trait ClosedSet: Sized + Copy + 'static {
    /// Human readable kind, used in error messages ("variant", "size", ...)
    const KIND: &'static str;

    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Canonical lowercase name of this member
    fn name(&self) -> &'static str;

    /// Parse a canonical name (case-insensitive, surrounding whitespace ignored)
    fn parse_name(value: &str) -> CyberResult<Self> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&'static str> = Self::ALL.iter().map(|m| m.name()).collect();
                CyberError::unknown_variant(Self::KIND, value, &names)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SeverityType, SizeClass, StyleVariant};

    #[test]
    fn test_parse_name_is_case_insensitive() {
        assert_eq!(StyleVariant::parse_name("Danger").unwrap(), StyleVariant::Danger);
        assert_eq!(SizeClass::parse_name(" lg ").unwrap(), SizeClass::Lg);
        assert_eq!(
            SeverityType::parse_name("CONFIRM").unwrap(),
            SeverityType::Confirm
        );
    }

    #[test]
    fn test_parse_name_rejects_unknown() {
        let err = SizeClass::parse_name("xl").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown size 'xl' (expected one of: sm, md, lg)"
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = StyleVariant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleVariant::ALL.len());
    }
}
