//! Axis definition model.

use serde::{Deserialize, Serialize};

use crate::error::{DynaxisError, Result};

/// A dynamic axis of a build matrix.
///
/// `name` identifies the axis in run combinations; `source_variable` names
/// the build parameter or environment key that supplies the raw value list
/// at build-configuration time. Created once with the job configuration and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisDefinition {
    name: String,
    source_variable: String,
}

impl AxisDefinition {
    /// Creates an axis definition, rejecting empty identifiers.
    pub fn new(name: impl Into<String>, source_variable: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let source_variable = source_variable.into();

        if name.trim().is_empty() {
            return Err(DynaxisError::InvalidAxis(
                "axis name must not be empty".to_string(),
            ));
        }
        if source_variable.trim().is_empty() {
            return Err(DynaxisError::InvalidAxis(format!(
                "axis '{}' has no source variable",
                name
            )));
        }

        Ok(Self {
            name,
            source_variable,
        })
    }

    /// The axis name used in run combinations.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter or environment key supplying the raw value list.
    pub fn source_variable(&self) -> &str {
        &self.source_variable
    }
}

impl std::fmt::Display for AxisDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (from ${})", self.name, self.source_variable)
    }
}
