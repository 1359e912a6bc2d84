//! Error types for query construction and rendering.

use crate::expr::{Combinator, Operator};

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised while translating conditions or assembling statements.
///
/// Every variant is a deterministic function of caller-supplied input:
/// none of them is transient, and retrying the same render yields the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
	/// `IN` was given an empty list of values.
	#[error("membership condition on `{field}` has no values")]
	EmptyMembership {
		/// Field the condition applies to
		field: String,
	},

	/// `BETWEEN` was given something other than exactly two values.
	#[error("range condition on `{field}` expects exactly 2 values, got {found}")]
	RangeArity {
		/// Field the condition applies to
		field: String,
		/// Number of values supplied
		found: usize,
	},

	/// The operand shape does not fit the operator (e.g. a list for `=`).
	#[error("operator {operator} on `{field}` expects {expected}")]
	OperandMismatch {
		/// Field the condition applies to
		field: String,
		/// Operator of the condition
		operator: Operator,
		/// Human readable description of the expected operand
		expected: &'static str,
	},

	/// An AND/OR composite without children.
	#[error("{combinator} composite requires at least one condition")]
	EmptyComposite {
		/// Combinator of the empty composite
		combinator: Combinator,
	},

	/// A textual operator tag that does not name any operator.
	#[error("unknown operator: {0}")]
	UnknownOperator(String),

	/// A textual ordering direction that is neither ascending nor descending.
	#[error("unknown order direction: {0}")]
	UnknownOrder(String),

	/// The statement has no table to select from.
	#[error("query has no table reference")]
	MissingTable,

	/// The dialect cannot express the requested feature.
	#[error("feature not supported by {dialect}: {feature}")]
	UnsupportedFeature {
		/// Dialect name
		dialect: &'static str,
		/// Description of the requested feature
		feature: String,
	},

	/// No dialect is registered under the requested name.
	#[error("unknown dialect: {0}")]
	UnknownDialect(String),

	/// Settings could not be read or parsed.
	#[error("configuration error: {0}")]
	Config(String),
}

impl From<toml::de::Error> for QueryError {
	fn from(err: toml::de::Error) -> Self {
		QueryError::Config(err.to_string())
	}
}

impl From<std::io::Error> for QueryError {
	fn from(err: std::io::Error) -> Self {
		QueryError::Config(err.to_string())
	}
}
