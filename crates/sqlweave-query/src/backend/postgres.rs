//! PostgreSQL dialect
//!
//! This module implements the rendering primitives for PostgreSQL.

use super::{Dialect, limit_offset_clause, wrap_identifier};
use crate::error::Result;

/// PostgreSQL dialect
///
/// - Identifiers: double quotes (`"table_name"`)
/// - Placeholders: numbered (`$1`, `$2`, ...)
/// - Pagination: `LIMIT n OFFSET m`; `OFFSET m` alone is valid
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::backend::{Dialect, PostgresDialect};
///
/// let dialect = PostgresDialect::new();
/// assert_eq!(dialect.placeholder(1), "$1");
/// assert_eq!(dialect.pagination_clause(None, Some(5)).unwrap(), "OFFSET 5");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
	/// Create a new PostgreSQL dialect
	pub fn new() -> Self {
		Self
	}
}

impl Dialect for PostgresDialect {
	fn name(&self) -> &'static str {
		"postgresql"
	}

	fn quote_identifier(&self, name: &str) -> String {
		wrap_identifier(name, '"', '"')
	}

	fn placeholder(&self, index: usize) -> String {
		format!("${}", index)
	}

	fn pagination_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
		Ok(limit_offset_clause(limit, offset, None))
	}
}
