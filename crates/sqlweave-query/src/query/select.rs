//! SELECT statement constructor
//!
//! This module provides the [`QueryConstructor`] type, the builder surface of
//! the crate. It accumulates columns, conditions, ordering and pagination,
//! and renders them through a [`Dialect`] on [`build`](QueryConstructor::build).

use std::sync::Arc;

use crate::{
	backend::{ConditionTranslator, Dialect, SqlWriter},
	error::{QueryError, Result},
	expr::Condition,
	types::{IntoTableRef, Order, OrderExpr, Pagination, TableRef},
	value::Values,
};

/// SELECT statement constructor bound to one dialect
///
/// Builder methods take `&mut self` and return `&mut Self` for chaining.
/// [`build`](Self::build) borrows immutably and may be called repeatedly;
/// each call renders with a fresh placeholder counter.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use sqlweave_query::prelude::*;
///
/// let mut query = QueryConstructor::new("users", Arc::new(PostgresDialect::new()));
/// query
///     .select(["id", "name"])
///     .and_where(Expr::col("age").gte(18))
///     .order_by("name", Order::Asc)
///     .limit(10);
///
/// let (sql, values) = query.build().unwrap();
/// assert_eq!(
///     sql,
///     r#"SELECT "id", "name" FROM "users" WHERE "age" >= $1 ORDER BY "name" ASC LIMIT 10"#
/// );
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QueryConstructor {
	table: TableRef,
	dialect: Arc<dyn Dialect>,
	columns: Vec<String>,
	conditions: Vec<Condition>,
	orders: Vec<OrderExpr>,
	pagination: Pagination,
	max_limit: Option<u64>,
}

impl QueryConstructor {
	/// Create a constructor reading from `table`, rendered for `dialect`
	pub fn new<T>(table: T, dialect: Arc<dyn Dialect>) -> Self
	where
		T: IntoTableRef,
	{
		Self {
			table: table.into_table_ref(),
			dialect,
			columns: Vec::new(),
			conditions: Vec::new(),
			orders: Vec::new(),
			pagination: Pagination::default(),
			max_limit: None,
		}
	}

	/// Table this constructor reads from
	pub fn table(&self) -> &TableRef {
		&self.table
	}

	/// Dialect this constructor renders for
	pub fn dialect(&self) -> &Arc<dyn Dialect> {
		&self.dialect
	}

	/// Current pagination
	pub fn pagination(&self) -> Pagination {
		self.pagination
	}

	/// Add columns to the select list
	///
	/// Repeated calls accumulate. No columns renders `*`.
	pub fn select<I, C>(&mut self, columns: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: Into<String>,
	{
		self.columns.extend(columns.into_iter().map(Into::into));
		self
	}

	/// Add a single column to the select list
	pub fn column<C>(&mut self, column: C) -> &mut Self
	where
		C: Into<String>,
	{
		self.columns.push(column.into());
		self
	}

	/// Add a top-level condition, conjoined with the others
	///
	/// # Examples
	///
	/// ```rust
	/// use std::sync::Arc;
	/// use sqlweave_query::prelude::*;
	///
	/// let (sql, _) = QueryConstructor::new("users", Arc::new(MySqlDialect::new()))
	///     .and_where(Expr::col("active").eq(true))
	///     .and_where(Expr::col("age").gt(18))
	///     .build()
	///     .unwrap();
	/// assert_eq!(sql, "SELECT * FROM `users` WHERE `active` = ? AND `age` > ?");
	/// ```
	pub fn and_where(&mut self, condition: Condition) -> &mut Self {
		self.conditions.push(condition);
		self
	}

	/// Add one parenthesized AND group.
	///
	/// An empty group is reported by [`build`](Self::build).
	pub fn where_all<I>(&mut self, conditions: I) -> &mut Self
	where
		I: IntoIterator<Item = Condition>,
	{
		self.and_where(Condition::all(conditions))
	}

	/// Add one parenthesized OR group.
	///
	/// An empty group is reported by [`build`](Self::build).
	pub fn where_any<I>(&mut self, conditions: I) -> &mut Self
	where
		I: IntoIterator<Item = Condition>,
	{
		self.and_where(Condition::any(conditions))
	}

	/// Append an ORDER BY entry
	pub fn order_by<F>(&mut self, field: F, order: Order) -> &mut Self
	where
		F: Into<String>,
	{
		self.orders.push(OrderExpr::new(field, order));
		self
	}

	/// Append an ORDER BY entry from a textual direction.
	///
	/// Anything other than `asc` or `desc` (any case) falls back to ascending.
	pub fn order_by_str<F>(&mut self, field: F, direction: &str) -> &mut Self
	where
		F: Into<String>,
	{
		self.order_by(field, Order::parse_lenient(direction))
	}

	/// Set the row limit; the last call wins
	pub fn limit(&mut self, limit: u64) -> &mut Self {
		self.pagination.limit = Some(limit);
		self
	}

	/// Set the row offset; the last call wins
	pub fn offset(&mut self, offset: u64) -> &mut Self {
		self.pagination.offset = Some(offset);
		self
	}

	/// Set a ceiling for the row limit.
	///
	/// A larger limit is clamped to the ceiling when rendering.
	pub fn max_limit(&mut self, max_limit: Option<u64>) -> &mut Self {
		self.max_limit = max_limit;
		self
	}

	/// Render the statement and its arguments.
	///
	/// `SELECT <cols|*> FROM <table> [WHERE ...] [ORDER BY ...] [<pagination>]`
	///
	/// # Errors
	///
	/// Returns [`QueryError::MissingTable`] for an empty table name, any
	/// translation error from the conditions, and any pagination error from
	/// the dialect.
	pub fn build(&self) -> Result<(String, Values)> {
		let mut writer = self.write_head(false)?;
		self.write_where(&mut writer)?;
		self.write_order_by(&mut writer);
		self.write_pagination(&mut writer)?;
		Ok(self.finish(writer))
	}

	/// Render `SELECT COUNT(*)` over the same table and conditions.
	///
	/// Columns, ordering and pagination are ignored.
	pub fn build_count(&self) -> Result<(String, Values)> {
		let mut writer = self.write_head(true)?;
		self.write_where(&mut writer)?;
		Ok(self.finish(writer))
	}

	fn write_head(&self, count: bool) -> Result<SqlWriter> {
		if self.table.is_empty() {
			return Err(QueryError::MissingTable);
		}
		let dialect = self.dialect.as_ref();
		let mut writer = SqlWriter::new();
		writer.push("SELECT ");
		if count {
			writer.push("COUNT(*)");
		} else if self.columns.is_empty() {
			writer.push("*");
		} else {
			writer.push_list(&self.columns, ", ", |w, column| {
				w.push_identifier(column, dialect);
				Ok(())
			})?;
		}
		writer.push(" FROM ");
		writer.push(&dialect.quote_table(&self.table));
		Ok(writer)
	}

	fn write_where(&self, writer: &mut SqlWriter) -> Result<()> {
		if self.conditions.is_empty() {
			return Ok(());
		}
		let translator = ConditionTranslator::new(self.dialect.as_ref());
		writer.push_keyword("WHERE");
		writer.push_space();
		writer
			.push_list(&self.conditions, " AND ", |w, condition| {
				translator.translate(w, condition)
			})
			.inspect_err(|err| {
				tracing::debug!(
					dialect = self.dialect.name(),
					table = self.table.name(),
					error = %err,
					"failed to translate WHERE clause"
				);
			})
	}

	fn write_order_by(&self, writer: &mut SqlWriter) {
		let dialect = self.dialect.as_ref();
		if self.orders.is_empty() {
			if let Some(fallback) = dialect.pagination_order_fallback()
				&& !self.pagination.is_empty()
			{
				writer.push_keyword("ORDER BY");
				writer.push_space();
				writer.push(fallback);
			}
			return;
		}
		writer.push_keyword("ORDER BY");
		writer.push_space();
		for (i, order) in self.orders.iter().enumerate() {
			if i > 0 {
				writer.push(", ");
			}
			writer.push_identifier(&order.field, dialect);
			writer.push(" ");
			writer.push(order.order.as_str());
		}
	}

	fn write_pagination(&self, writer: &mut SqlWriter) -> Result<()> {
		let clause = self
			.dialect
			.pagination_clause(self.effective_limit(), self.pagination.offset)?;
		if !clause.is_empty() {
			writer.push_space();
			writer.push(&clause);
		}
		Ok(())
	}

	fn effective_limit(&self) -> Option<u64> {
		match (self.pagination.limit, self.max_limit) {
			(Some(limit), Some(max)) if limit > max => {
				tracing::warn!(limit, max_limit = max, "limit exceeds configured ceiling, clamping");
				Some(max)
			}
			(limit, _) => limit,
		}
	}

	fn finish(&self, writer: SqlWriter) -> (String, Values) {
		let (sql, values) = writer.finish();
		tracing::debug!(
			dialect = self.dialect.name(),
			table = self.table.name(),
			args = values.len(),
			"built query"
		);
		(sql, values)
	}
}
