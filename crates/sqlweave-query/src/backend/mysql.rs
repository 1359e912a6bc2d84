//! MySQL dialect
//!
//! This module implements the rendering primitives for MySQL.

use super::{Dialect, limit_offset_clause, wrap_identifier};
use crate::error::Result;

/// Largest row count MySQL accepts; stands in for "no limit" when only an
/// offset is requested.
const UNBOUNDED_LIMIT: &str = "18446744073709551615";

/// MySQL dialect
///
/// - Identifiers: backticks (`` `table_name` ``)
/// - Placeholders: question marks (`?`)
/// - Pagination: `LIMIT n OFFSET m`
///
/// MySQL has no OFFSET without LIMIT, so an offset-only request renders
/// `LIMIT 18446744073709551615 OFFSET m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl MySqlDialect {
	/// Create a new MySQL dialect
	pub fn new() -> Self {
		Self
	}
}

impl Dialect for MySqlDialect {
	fn name(&self) -> &'static str {
		"mysql"
	}

	fn quote_identifier(&self, name: &str) -> String {
		wrap_identifier(name, '`', '`')
	}

	fn placeholder(&self, _index: usize) -> String {
		"?".to_string()
	}

	fn pagination_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
		Ok(limit_offset_clause(limit, offset, Some(UNBOUNDED_LIMIT)))
	}
}
