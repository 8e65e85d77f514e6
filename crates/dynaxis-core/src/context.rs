//! Host-facing input boundary for axis resolution.
//!
//! A build supplies raw axis values either through its declared parameters
//! or through environment entries injected by contributors (SCM plugins
//! among them). [`BuildContext`] accumulates both for one build; once all
//! contributors have run it is read as a stable snapshot, so resolution
//! never observes a half-written environment.

use std::collections::HashMap;

/// A named, string-valued source of raw axis values.
///
/// The host adapts whatever supplies the value (declared parameters, an
/// environment map, its own extension types) onto this capability. The
/// resolver does not care which.
pub trait ValueSource {
    /// Returns the raw value for `name`, or `None` if the key was never
    /// populated.
    fn raw_value(&self, name: &str) -> Option<String>;
}

impl ValueSource for HashMap<String, String> {
    fn raw_value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Hook for adding or modifying environment entries before axis
/// resolution.
///
/// Implementations can be:
/// - SCM plugins exposing checkout metadata as environment variables
/// - Host-side property injectors run ahead of the run-matrix rebuild
pub trait EnvironmentContributor {
    fn contribute(&self, env: &mut HashMap<String, String>);
}

/// Parameter and environment state for one build.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    parameters: HashMap<String, String>,
    environment: HashMap<String, String>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declared build parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Adds an environment entry directly.
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(name.into(), value.into());
        self
    }

    /// Runs a contributor against the environment map.
    ///
    /// Contributors are applied in the order the host calls this; a later
    /// contributor sees (and may overwrite) earlier entries.
    pub fn apply(&mut self, contributor: &dyn EnvironmentContributor) {
        contributor.contribute(&mut self.environment);
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn env_var(&self, name: &str) -> Option<&str> {
        self.environment.get(name).map(String::as_str)
    }
}

impl ValueSource for BuildContext {
    /// Declared parameters take precedence over environment entries: the
    /// host injects parameters into the build environment, so on a key
    /// collision the parameter is the authoritative reading.
    fn raw_value(&self, name: &str) -> Option<String> {
        self.parameters
            .get(name)
            .or_else(|| self.environment.get(name))
            .cloned()
    }
}
