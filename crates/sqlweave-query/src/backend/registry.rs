//! Name-based dialect lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::{Dialect, MySqlDialect, PostgresDialect, SqlServerDialect, SqliteDialect};
use crate::config::QuerySettings;
use crate::error::{QueryError, Result};
use crate::query::ConstructorProvider;

/// Explicit registry of dialects keyed by lowercase name.
///
/// There is no process-wide registry; callers build one and pass it where
/// dialect names have to be resolved (for example from configuration).
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::backend::DialectRegistry;
///
/// let registry = DialectRegistry::with_defaults();
/// let pg = registry.get("PostgreSQL").unwrap();
/// assert_eq!(pg.name(), "postgresql");
/// assert!(registry.get("oracle").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
	dialects: HashMap<String, Arc<dyn Dialect>>,
}

impl DialectRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding the four built-in dialects
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry
			.register(Arc::new(MySqlDialect::new()))
			.register(Arc::new(PostgresDialect::new()))
			.register(Arc::new(SqliteDialect::new()))
			.register(Arc::new(SqlServerDialect::new()));
		registry
	}

	/// Register `dialect` under its own name, replacing any previous entry.
	pub fn register(&mut self, dialect: Arc<dyn Dialect>) -> &mut Self {
		let name = dialect.name().to_ascii_lowercase();
		tracing::trace!(dialect = %name, "registering dialect");
		self.dialects.insert(name, dialect);
		self
	}

	/// Look up a dialect by name, ignoring case.
	pub fn get(&self, name: &str) -> Result<Arc<dyn Dialect>> {
		self.dialects
			.get(&name.trim().to_ascii_lowercase())
			.cloned()
			.ok_or_else(|| QueryError::UnknownDialect(name.to_string()))
	}

	/// Check whether a dialect is registered under `name`
	pub fn contains(&self, name: &str) -> bool {
		self.dialects.contains_key(&name.trim().to_ascii_lowercase())
	}

	/// Registered names, sorted
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Provider bound to the dialect registered under `name`
	pub fn provider(&self, name: &str) -> Result<ConstructorProvider> {
		self.get(name).map(ConstructorProvider::new)
	}

	/// Provider for the dialect and limit ceiling named in `settings`
	pub fn provider_for(&self, settings: &QuerySettings) -> Result<ConstructorProvider> {
		let provider = self.provider(&settings.dialect)?;
		Ok(provider.with_max_limit(settings.max_limit))
	}
}
