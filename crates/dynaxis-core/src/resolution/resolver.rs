//! Axis value resolver.
//!
//! Resolves the raw value string of a dynamic axis from either:
//! 1. A declared build parameter supplied at build start
//! 2. The accumulated build environment, populated by contributors
//!
//! Both paths route through [`resolve`], so the resolved list is identical
//! regardless of where the raw value came from.

use crate::context::ValueSource;
use crate::error::{DynaxisError, Result};
use crate::models::{AxisDefinition, ResolvedValues};

use super::tokenizer::tokenize;

/// Resolves a raw value string into the ordered value list for one axis.
///
/// Tokens are collected in first-occurrence order; exact duplicates are
/// dropped on second and later occurrence. An empty raw value yields an
/// empty list; whether that means "no runs" or a configuration error is
/// the caller's decision.
///
/// Pure function: no hidden state, and identical inputs yield identical
/// output.
pub fn resolve(axis_name: &str, raw_value: &str) -> Result<ResolvedValues> {
    let values = ResolvedValues::from_tokens(tokenize(raw_value)?);
    tracing::debug!(
        "Resolved axis '{}' to {} value(s)",
        axis_name,
        values.len()
    );
    Ok(values)
}

/// Resolves an axis against a value source.
///
/// Fails with [`DynaxisError::MissingSource`] if the axis's source
/// variable was never populated. A present-but-empty value is not an
/// error here.
pub fn resolve_from(source: &dyn ValueSource, axis: &AxisDefinition) -> Result<ResolvedValues> {
    let raw = source
        .raw_value(axis.source_variable())
        .ok_or_else(|| DynaxisError::MissingSource {
            variable: axis.source_variable().to_string(),
        })?;

    resolve(axis.name(), &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn axis() -> AxisDefinition {
        AxisDefinition::new("AXIS", "AXIS_VALUES").unwrap()
    }

    #[test]
    fn test_resolve_plain_values() {
        let values = resolve("AXIS", "1 2 3").unwrap();
        assert_eq!(values.as_slice(), ["1", "2", "3"]);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_resolve_quoted_value_stays_joined() {
        let values = resolve("AXIS", "1 \"2 3\"").unwrap();
        assert_eq!(values.as_slice(), ["1", "2 3"]);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_resolve_drops_duplicates() {
        let values = resolve("AXIS", "1 2 2 3").unwrap();
        assert_eq!(values.as_slice(), ["1", "2", "3"]);
    }

    #[test]
    fn test_resolve_duplicate_after_unquoting() {
        // "2" and 2 are the same token once quotes are stripped.
        let values = resolve("AXIS", "2 \"2\" 3").unwrap();
        assert_eq!(values.as_slice(), ["2", "3"]);
    }

    #[test]
    fn test_resolve_first_occurrence_wins_position() {
        let values = resolve("AXIS", "b a b c a").unwrap();
        assert_eq!(values.as_slice(), ["b", "a", "c"]);
    }

    #[test]
    fn test_resolve_empty_raw_value_yields_empty_list() {
        let values = resolve("AXIS", "").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_resolve_unterminated_quote_fails() {
        let err = resolve("AXIS", "1 \"2 3").unwrap_err();
        assert!(matches!(err, DynaxisError::UnterminatedQuote { .. }));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let raw = "gamma alpha \"b c\" alpha beta";
        let first = resolve("AXIS", raw).unwrap();
        let second = resolve("AXIS", raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), ["gamma", "alpha", "b c", "beta"]);
    }

    #[test]
    fn test_resolve_from_map_source() {
        let mut source = HashMap::new();
        source.insert("AXIS_VALUES".to_string(), "1 2 3".to_string());

        let values = resolve_from(&source, &axis()).unwrap();
        assert_eq!(values.as_slice(), ["1", "2", "3"]);
    }

    #[test]
    fn test_resolve_from_missing_source_fails() {
        let source: HashMap<String, String> = HashMap::new();

        let err = resolve_from(&source, &axis()).unwrap_err();
        assert!(matches!(
            err,
            DynaxisError::MissingSource { ref variable } if variable == "AXIS_VALUES"
        ));
        assert!(err.to_string().contains("AXIS_VALUES"));
    }

    #[test]
    fn test_resolve_from_present_but_empty_value() {
        let mut source = HashMap::new();
        source.insert("AXIS_VALUES".to_string(), String::new());

        let values = resolve_from(&source, &axis()).unwrap();
        assert!(values.is_empty());
    }
}
