//! Capability declaration for a constructor provider.

use serde::{Deserialize, Serialize};

use crate::expr::{Combinator, Operator};

/// Builder operations and query features a provider supports.
///
/// The defaults describe a full SQL backend. Values can be loaded from or
/// written to any serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryCapabilities {
	/// `=` conditions
	pub supports_eq: bool,
	/// `!=` conditions
	pub supports_ne: bool,
	/// `>` conditions
	pub supports_gt: bool,
	/// `<` conditions
	pub supports_lt: bool,
	/// `>=` conditions
	pub supports_gte: bool,
	/// `<=` conditions
	pub supports_lte: bool,
	/// `IN` conditions
	pub supports_in: bool,
	/// `BETWEEN` conditions
	pub supports_between: bool,
	/// `LIKE` conditions
	pub supports_like: bool,
	/// AND composites
	pub supports_and: bool,
	/// OR composites
	pub supports_or: bool,
	/// Negation
	pub supports_not: bool,

	/// Column selection
	pub supports_select: bool,
	/// ORDER BY
	pub supports_order_by: bool,
	/// LIMIT
	pub supports_limit: bool,
	/// OFFSET
	pub supports_offset: bool,
	/// Joins across related tables
	pub supports_join: bool,
	/// Subqueries
	pub supports_subquery: bool,

	/// Query plan inspection
	pub supports_query_plan: bool,
	/// Index hints
	pub supports_index: bool,

	/// Native, non-SQL query language
	pub supports_native_query: bool,
	/// Name of the native query language, if any
	pub native_query_lang: Option<String>,

	/// Short human readable description
	pub description: String,
}

impl QueryCapabilities {
	/// Capabilities of a standard SQL backend
	pub fn default_sql() -> Self {
		Self {
			supports_eq: true,
			supports_ne: true,
			supports_gt: true,
			supports_lt: true,
			supports_gte: true,
			supports_lte: true,
			supports_in: true,
			supports_between: true,
			supports_like: true,
			supports_and: true,
			supports_or: true,
			supports_not: true,
			supports_select: true,
			supports_order_by: true,
			supports_limit: true,
			supports_offset: true,
			supports_join: true,
			supports_subquery: true,
			supports_query_plan: true,
			supports_index: true,
			supports_native_query: false,
			native_query_lang: None,
			description: "Default SQL query constructor".to_string(),
		}
	}

	/// Replace the description
	#[must_use]
	pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
		self.description = description.into();
		self
	}

	/// Whether conditions using `operator` are supported
	pub fn supports_operator(&self, operator: Operator) -> bool {
		match operator {
			Operator::Eq => self.supports_eq,
			Operator::Ne => self.supports_ne,
			Operator::Gt => self.supports_gt,
			Operator::Lt => self.supports_lt,
			Operator::Gte => self.supports_gte,
			Operator::Lte => self.supports_lte,
			Operator::In => self.supports_in,
			Operator::Between => self.supports_between,
			Operator::Like => self.supports_like,
		}
	}

	/// Whether composites joined by `combinator` are supported
	pub fn supports_combinator(&self, combinator: Combinator) -> bool {
		match combinator {
			Combinator::And => self.supports_and,
			Combinator::Or => self.supports_or,
		}
	}
}

impl Default for QueryCapabilities {
	fn default() -> Self {
		Self::default_sql()
	}
}
