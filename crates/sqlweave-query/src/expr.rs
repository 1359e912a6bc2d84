//! Condition algebra.
//!
//! - [`Condition`]: simple predicate, AND/OR composite, or negation
//! - [`Cond`]: shorthand for composites
//! - [`Expr`]: fluent column handle producing simple predicates
//! - [`Operator`] / [`Combinator`]: operator and combinator tags
//!
//! # Example
//!
//! ```rust
//! use sqlweave_query::{Cond, Condition, Expr};
//!
//! let adults = Expr::col("age").gte(18);
//! let named = Expr::col("name").like("J%");
//! let cond = Cond::all([adults, Condition::not(named)]);
//! # let _ = cond;
//! ```

mod condition;
mod operator;

pub use condition::{CompositeCondition, Cond, Condition, Operand, SimpleCondition};
pub use operator::{Combinator, Operator};

use crate::value::IntoValue;

/// Column handle used to build simple conditions fluently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
	field: String,
}

impl Expr {
	/// Refer to a column by name.
	pub fn col<F: Into<String>>(field: F) -> Self {
		Self {
			field: field.into(),
		}
	}

	/// Column name.
	pub fn field(&self) -> &str {
		&self.field
	}

	/// `field = value`
	pub fn eq<V: IntoValue>(self, value: V) -> Condition {
		Condition::eq(self.field, value)
	}

	/// `field != value`
	pub fn ne<V: IntoValue>(self, value: V) -> Condition {
		Condition::ne(self.field, value)
	}

	/// `field > value`
	pub fn gt<V: IntoValue>(self, value: V) -> Condition {
		Condition::gt(self.field, value)
	}

	/// `field < value`
	pub fn lt<V: IntoValue>(self, value: V) -> Condition {
		Condition::lt(self.field, value)
	}

	/// `field >= value`
	pub fn gte<V: IntoValue>(self, value: V) -> Condition {
		Condition::gte(self.field, value)
	}

	/// `field <= value`
	pub fn lte<V: IntoValue>(self, value: V) -> Condition {
		Condition::lte(self.field, value)
	}

	/// `field LIKE pattern`
	pub fn like<V: IntoValue>(self, pattern: V) -> Condition {
		Condition::like(self.field, pattern)
	}

	/// `field IN (values...)`
	pub fn is_in<I, V>(self, values: I) -> Condition
	where
		I: IntoIterator<Item = V>,
		V: IntoValue,
	{
		Condition::is_in(self.field, values)
	}

	/// `field BETWEEN low AND high`
	pub fn between<L: IntoValue, H: IntoValue>(self, low: L, high: H) -> Condition {
		Condition::between(self.field, low, high)
	}
}
