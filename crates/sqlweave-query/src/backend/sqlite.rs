//! SQLite dialect

use super::{Dialect, limit_offset_clause, wrap_identifier};
use crate::error::Result;

/// SQLite dialect
///
/// Renders like MySQL: backtick identifiers, `?` placeholders and
/// `LIMIT n OFFSET m`. SQLite reads a negative limit as "no limit", so an
/// offset-only request renders `LIMIT -1 OFFSET m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
	/// Create a new SQLite dialect
	pub fn new() -> Self {
		Self
	}
}

impl Dialect for SqliteDialect {
	fn name(&self) -> &'static str {
		"sqlite"
	}

	fn quote_identifier(&self, name: &str) -> String {
		wrap_identifier(name, '`', '`')
	}

	fn placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}

	fn pagination_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
		Ok(limit_offset_clause(limit, offset, Some("-1")))
	}
}
