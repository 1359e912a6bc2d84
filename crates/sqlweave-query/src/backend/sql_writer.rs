//! Accumulating writer for statement text and its arguments.
//!
//! [`SqlWriter`] owns the single placeholder counter of one rendering pass.
//! Everything that emits a placeholder during that pass goes through the
//! same writer, so numbered placeholders are contiguous across the WHERE
//! clause no matter how deeply conditions nest.

use super::Dialect;
use crate::error::Result;
use crate::value::{Value, Values};

/// SQL writer for one rendering pass
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::Value;
/// use sqlweave_query::backend::{PostgresDialect, SqlWriter};
///
/// let pg = PostgresDialect::new();
/// let mut writer = SqlWriter::new();
/// writer.push("SELECT * FROM");
/// writer.push_space();
/// writer.push_identifier("users", &pg);
/// writer.push_keyword("WHERE");
/// writer.push_space();
/// writer.push_identifier("age", &pg);
/// writer.push(" > ");
/// writer.push_value(Value::Int(Some(18)), &pg);
///
/// let (sql, values) = writer.finish();
/// assert_eq!(sql, r#"SELECT * FROM "users" WHERE "age" > $1"#);
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SqlWriter {
	sql: String,
	values: Values,
	/// Index handed to the next placeholder (1-based)
	param_index: usize,
}

impl SqlWriter {
	/// Create a new SQL writer
	pub fn new() -> Self {
		Self {
			sql: String::new(),
			values: Values::default(),
			param_index: 1,
		}
	}

	/// Push raw text
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space unless the text is empty or already ends with one
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push an identifier quoted by `dialect`
	pub fn push_identifier(&mut self, ident: &str, dialect: &dyn Dialect) {
		self.sql.push_str(&dialect.quote_identifier(ident));
	}

	/// Push a placeholder for `value` and record the value as the next
	/// argument.
	///
	/// NULL is bound like any other value so that the argument list always
	/// lines up with the placeholders. Returns the index used.
	pub fn push_value(&mut self, value: Value, dialect: &dyn Dialect) -> usize {
		let index = self.param_index;
		self.sql.push_str(&dialect.placeholder(index));
		self.values.push(value);
		self.param_index += 1;
		index
	}

	/// Push a keyword preceded by a space
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push `items` separated by `separator`, stopping at the first error
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F) -> Result<()>
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T) -> Result<()>,
	{
		for (i, item) in items.into_iter().enumerate() {
			if i > 0 {
				self.sql.push_str(separator);
			}
			f(self, item)?;
		}
		Ok(())
	}

	/// Current SQL text
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Arguments collected so far
	pub fn values(&self) -> &Values {
		&self.values
	}

	/// Index the next placeholder will receive
	pub fn param_index(&self) -> usize {
		self.param_index
	}

	/// Consume the writer and return `(sql, args)`
	pub fn finish(self) -> (String, Values) {
		(self.sql, self.values)
	}
}

impl Default for SqlWriter {
	fn default() -> Self {
		Self::new()
	}
}
