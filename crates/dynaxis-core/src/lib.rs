//! Dynaxis Core Library
//!
//! Dynamic matrix-axis value resolution: expands the raw string supplied by
//! a build parameter or an environment contributor into the ordered,
//! deduplicated list of axis values the host uses to fan out matrix runs.

pub mod context;
pub mod error;
pub mod models;
pub mod resolution;

pub use context::{BuildContext, EnvironmentContributor, ValueSource};
pub use error::{DynaxisError, Result};
pub use models::{AxisDefinition, ResolvedValues};
pub use resolution::{resolve, resolve_from, tokenize};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
