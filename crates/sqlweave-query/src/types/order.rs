//! ORDER BY types.

use std::{fmt, str::FromStr};

use crate::error::QueryError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
	/// Ascending order (ASC)
	#[default]
	Asc,
	/// Descending order (DESC)
	Desc,
}

impl Order {
	/// SQL keyword for this direction.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}

	/// Parse a direction, falling back to [`Order::Asc`] on anything
	/// unrecognized.
	///
	/// ```rust
	/// use sqlweave_query::Order;
	///
	/// assert_eq!(Order::parse_lenient("desc"), Order::Desc);
	/// assert_eq!(Order::parse_lenient("sideways"), Order::Asc);
	/// ```
	pub fn parse_lenient(direction: &str) -> Self {
		direction.parse().unwrap_or_else(|_| {
			tracing::warn!(direction, "unrecognized order direction, using ASC");
			Self::Asc
		})
	}
}

impl FromStr for Order {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.eq_ignore_ascii_case("asc") {
			Ok(Self::Asc)
		} else if trimmed.eq_ignore_ascii_case("desc") {
			Ok(Self::Desc)
		} else {
			Err(QueryError::UnknownOrder(s.to_string()))
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One ORDER BY entry: a field and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderExpr {
	/// Column to sort by
	pub field: String,
	/// Sort direction
	pub order: Order,
}

impl OrderExpr {
	/// Create an ORDER BY entry.
	pub fn new<F: Into<String>>(field: F, order: Order) -> Self {
		Self {
			field: field.into(),
			order,
		}
	}
}
