//! Query settings loaded from TOML.
//!
//! ```toml
//! dialect = "postgresql"
//! max_limit = 500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

fn default_dialect() -> String {
	"mysql".to_string()
}

/// Settings consumed by [`DialectRegistry::provider_for`].
///
/// [`DialectRegistry::provider_for`]: crate::backend::DialectRegistry::provider_for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySettings {
	/// Name of the dialect to render for
	#[serde(default = "default_dialect")]
	pub dialect: String,
	/// Ceiling applied to every requested row limit
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_limit: Option<u64>,
}

impl QuerySettings {
	/// Settings for `dialect` without a limit ceiling
	pub fn new<S: Into<String>>(dialect: S) -> Self {
		Self {
			dialect: dialect.into(),
			max_limit: None,
		}
	}

	/// Set the limit ceiling.
	pub fn with_max_limit(mut self, max_limit: u64) -> Self {
		self.max_limit = Some(max_limit);
		self
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns [`QueryError::Config`] if the file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)
			.map_err(|e| QueryError::Config(format!("{}: {}", path.display(), e)))?;
		Self::from_toml_str(&content)
	}

	/// Parse settings from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Serialize settings as TOML.
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string(self).map_err(|e| QueryError::Config(e.to_string()))
	}
}

impl Default for QuerySettings {
	fn default() -> Self {
		Self::new(default_dialect())
	}
}
