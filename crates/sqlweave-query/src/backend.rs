//! SQL dialects and the condition translator.
//!
//! A [`Dialect`] supplies the few rendering primitives that differ between
//! databases: identifier quoting, placeholder tokens and pagination syntax.
//! Everything else (operator keywords, clause order, argument order) is
//! shared and lives in the [`translator`] and the query constructor.
//!
//! | Dialect | Identifier | Placeholder | Pagination |
//! |---------|-----------|-------------|------------|
//! | [`MySqlDialect`] | `` `name` `` | `?` | `LIMIT n OFFSET m` |
//! | [`SqliteDialect`] | `` `name` `` | `?` | `LIMIT n OFFSET m` |
//! | [`PostgresDialect`] | `"name"` | `$1, $2, ...` | `LIMIT n OFFSET m` |
//! | [`SqlServerDialect`] | `[name]` | `@p1, @p2, ...` | `OFFSET m ROWS FETCH NEXT n ROWS ONLY` |

use std::fmt::Debug;

use crate::{error::Result, types::TableRef, value::Value};

mod mysql;
mod postgres;
mod registry;
mod sql_writer;
mod sqlite;
mod sqlserver;
pub mod translator;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use registry::DialectRegistry;
pub use sql_writer::SqlWriter;
pub use sqlite::SqliteDialect;
pub use sqlserver::SqlServerDialect;
pub use translator::{ConditionTranslator, translate};

/// Rendering primitives of one SQL dialect.
///
/// Implementations are stateless and shared behind `Arc<dyn Dialect>`; they
/// know nothing about conditions or builder state.
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::backend::{Dialect, PostgresDialect};
///
/// let pg = PostgresDialect::new();
/// assert_eq!(pg.quote_identifier("user"), r#""user""#);
/// assert_eq!(pg.placeholder(3), "$3");
/// assert_eq!(pg.pagination_clause(Some(10), Some(20)).unwrap(), "LIMIT 10 OFFSET 20");
/// ```
pub trait Dialect: Debug + Send + Sync {
	/// Identifier used in diagnostics and registry lookups.
	fn name(&self) -> &'static str;

	/// Quote a table or column name.
	///
	/// Must be applied to every emitted name so that reserved words and
	/// mixed-case names survive.
	fn quote_identifier(&self, name: &str) -> String;

	/// Render a value as a literal, for diagnostics only.
	fn quote_value(&self, value: &Value) -> String {
		value.to_sql_literal()
	}

	/// Placeholder token for the 1-based parameter `index`.
	///
	/// Unnumbered dialects return the same token for every index; the
	/// caller's counter still advances.
	fn placeholder(&self, index: usize) -> String;

	/// Complete trailing pagination clause, or empty text when both parts
	/// are absent.
	fn pagination_clause(&self, limit: Option<u64>, offset: Option<u64>) -> Result<String>;

	/// Ordering expression written when a query is paginated but has no
	/// `ORDER BY` of its own.
	///
	/// `None` for dialects that accept pagination on an unordered query.
	fn pagination_order_fallback(&self) -> Option<&'static str> {
		None
	}

	/// Quote a possibly schema-qualified table reference.
	fn quote_table(&self, table: &TableRef) -> String {
		match table {
			TableRef::Table(name) => self.quote_identifier(name),
			TableRef::SchemaTable(schema, name) => format!(
				"{}.{}",
				self.quote_identifier(schema),
				self.quote_identifier(name)
			),
		}
	}
}

/// Wrap `name` in `open`/`close`, doubling any embedded `close` character.
pub(crate) fn wrap_identifier(name: &str, open: char, close: char) -> String {
	let mut quoted = String::with_capacity(name.len() + 2);
	quoted.push(open);
	for ch in name.chars() {
		if ch == close {
			quoted.push(close);
		}
		quoted.push(ch);
	}
	quoted.push(close);
	quoted
}

/// `LIMIT n [OFFSET m]` rendering shared by the LIMIT-keyword dialects.
///
/// An offset without a limit is rendered with `unbounded_limit` as the
/// limit when the dialect needs one.
pub(crate) fn limit_offset_clause(
	limit: Option<u64>,
	offset: Option<u64>,
	unbounded_limit: Option<&str>,
) -> String {
	let mut parts = Vec::with_capacity(2);
	match (limit, unbounded_limit) {
		(Some(limit), _) => parts.push(format!("LIMIT {}", limit)),
		(None, Some(sentinel)) if offset.is_some() => parts.push(format!("LIMIT {}", sentinel)),
		_ => {}
	}
	if let Some(offset) = offset {
		parts.push(format!("OFFSET {}", offset));
	}
	parts.join(" ")
}
