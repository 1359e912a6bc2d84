//! Condition operators and boolean combinators.

use std::{fmt, str::FromStr};

use crate::error::QueryError;

/// Operator of a simple condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	/// Equal (=)
	Eq,
	/// Not equal (!=)
	Ne,
	/// Greater than (>)
	Gt,
	/// Less than (<)
	Lt,
	/// Greater than or equal (>=)
	Gte,
	/// Less than or equal (<=)
	Lte,
	/// Set membership (IN)
	In,
	/// Pattern match (LIKE)
	Like,
	/// Inclusive range (BETWEEN)
	Between,
}

impl Operator {
	/// All operators, in declaration order.
	pub const ALL: [Operator; 9] = [
		Self::Eq,
		Self::Ne,
		Self::Gt,
		Self::Lt,
		Self::Gte,
		Self::Lte,
		Self::In,
		Self::Like,
		Self::Between,
	];

	/// SQL text of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Eq => "=",
			Self::Ne => "!=",
			Self::Gt => ">",
			Self::Lt => "<",
			Self::Gte => ">=",
			Self::Lte => "<=",
			Self::In => "IN",
			Self::Like => "LIKE",
			Self::Between => "BETWEEN",
		}
	}

	/// Short textual tag, as accepted by [`FromStr`].
	#[must_use]
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Eq => "eq",
			Self::Ne => "ne",
			Self::Gt => "gt",
			Self::Lt => "lt",
			Self::Gte => "gte",
			Self::Lte => "lte",
			Self::In => "in",
			Self::Like => "like",
			Self::Between => "between",
		}
	}

	/// Returns `true` for operators taking exactly one scalar operand.
	#[must_use]
	pub fn takes_single_value(&self) -> bool {
		!matches!(self, Self::In | Self::Between)
	}
}

impl FromStr for Operator {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.trim();
		Self::ALL
			.into_iter()
			.find(|op| op.tag().eq_ignore_ascii_case(tag))
			.ok_or_else(|| QueryError::UnknownOperator(s.to_string()))
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Boolean combinator of a composite condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
	/// All children must hold (AND)
	#[default]
	And,
	/// Any child must hold (OR)
	Or,
}

impl Combinator {
	/// SQL keyword of this combinator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
		}
	}

	/// Separator placed between rendered children.
	#[must_use]
	pub fn separator(&self) -> &'static str {
		match self {
			Self::And => " AND ",
			Self::Or => " OR ",
		}
	}
}

impl fmt::Display for Combinator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
