//! SQL Server dialect
//!
//! SQL Server has no LIMIT keyword; pagination uses the
//! `OFFSET ... ROWS FETCH NEXT ... ROWS ONLY` clause.

use super::{Dialect, wrap_identifier};
use crate::error::Result;
use crate::value::Value;

/// SQL Server dialect
///
/// - Identifiers: square brackets (`[table_name]`)
/// - Placeholders: named and numbered (`@p1`, `@p2`, ...)
/// - Pagination: `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
///
/// A limit without an offset renders with `OFFSET 0 ROWS`. SQL Server only
/// accepts the clause after an `ORDER BY`, so an unordered paginated query
/// is ordered by `(SELECT NULL)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerDialect;

impl SqlServerDialect {
	/// Create a new SQL Server dialect
	pub fn new() -> Self {
		Self
	}
}

impl Dialect for SqlServerDialect {
	fn name(&self) -> &'static str {
		"sqlserver"
	}

	fn quote_identifier(&self, name: &str) -> String {
		wrap_identifier(name, '[', ']')
	}

	fn quote_value(&self, value: &Value) -> String {
		match value {
			Value::Bool(Some(b)) => if *b { "1" } else { "0" }.to_string(),
			Value::Bytes(Some(bytes)) => {
				let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
				format!("0x{}", hex)
			}
			other => other.to_sql_literal(),
		}
	}

	fn placeholder(&self, index: usize) -> String {
		format!("@p{}", index)
	}

	fn pagination_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String> {
		let clause = match (limit, offset) {
			(None, None) => String::new(),
			(Some(limit), offset) => format!(
				"OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
				offset.unwrap_or(0),
				limit
			),
			(None, Some(offset)) => format!("OFFSET {} ROWS", offset),
		};
		Ok(clause)
	}

	fn pagination_order_fallback(&self) -> Option<&'static str> {
		Some("(SELECT NULL)")
	}
}
