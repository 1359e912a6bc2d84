//! Dialect-bound factory for query constructors.

use std::sync::Arc;

use super::{QueryCapabilities, QueryConstructor};
use crate::backend::{Dialect, MySqlDialect};
use crate::types::IntoTableRef;

/// Hands out [`QueryConstructor`]s pre-wired to one dialect.
///
/// The default provider renders MySQL.
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::prelude::*;
///
/// let provider = ConstructorProvider::for_dialect(SqliteDialect::new());
/// let (sql, _) = provider
///     .new_constructor("logs")
///     .offset(100)
///     .build()
///     .unwrap();
/// assert_eq!(sql, "SELECT * FROM `logs` LIMIT -1 OFFSET 100");
/// ```
#[derive(Debug, Clone)]
pub struct ConstructorProvider {
	dialect: Arc<dyn Dialect>,
	capabilities: QueryCapabilities,
	max_limit: Option<u64>,
}

impl ConstructorProvider {
	/// Create a provider for a shared dialect
	pub fn new(dialect: Arc<dyn Dialect>) -> Self {
		let capabilities = QueryCapabilities::default_sql()
			.with_description(format!("SQL query constructor ({})", dialect.name()));
		Self {
			dialect,
			capabilities,
			max_limit: None,
		}
	}

	/// Create a provider owning `dialect`
	pub fn for_dialect<D>(dialect: D) -> Self
	where
		D: Dialect + 'static,
	{
		Self::new(Arc::new(dialect))
	}

	/// Replace the declared capabilities
	#[must_use]
	pub fn with_capabilities(mut self, capabilities: QueryCapabilities) -> Self {
		self.capabilities = capabilities;
		self
	}

	/// Set the limit ceiling given to every constructor
	#[must_use]
	pub fn with_max_limit(mut self, max_limit: Option<u64>) -> Self {
		self.max_limit = max_limit;
		self
	}

	/// Fresh constructor for `table`
	pub fn new_constructor<T>(&self, table: T) -> QueryConstructor
	where
		T: IntoTableRef,
	{
		let mut constructor = QueryConstructor::new(table, Arc::clone(&self.dialect));
		constructor.max_limit(self.max_limit);
		constructor
	}

	/// Declared capabilities
	pub fn capabilities(&self) -> &QueryCapabilities {
		&self.capabilities
	}

	/// Bound dialect
	pub fn dialect(&self) -> &Arc<dyn Dialect> {
		&self.dialect
	}

	/// Limit ceiling given to constructors
	pub fn max_limit(&self) -> Option<u64> {
		self.max_limit
	}
}

impl Default for ConstructorProvider {
	fn default() -> Self {
		Self::for_dialect(MySqlDialect::new())
	}
}
