//! Condition algebra for WHERE clauses.
//!
//! A [`Condition`] is a tree of simple predicates combined with AND, OR and
//! NOT. Trees are built bottom-up and never change afterwards, so a common
//! filter fragment can be cloned into many constructors or shared across
//! threads.

use super::operator::{Combinator, Operator};
use crate::value::{IntoValue, Value};

/// Operand of a simple condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
	/// One scalar, used by comparison operators and LIKE
	Single(Value),
	/// Ordered values, used by IN and (as `[low, high]`) by BETWEEN
	List(Vec<Value>),
}

impl Operand {
	/// Number of values held by this operand.
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::List(values) => values.len(),
		}
	}

	/// Returns `true` for an empty list.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// An atomic predicate: `field <operator> operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleCondition {
	field: String,
	operator: Operator,
	operand: Operand,
}

impl SimpleCondition {
	/// Field the predicate applies to.
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Operator of the predicate.
	pub fn operator(&self) -> Operator {
		self.operator
	}

	/// Operand of the predicate.
	pub fn operand(&self) -> &Operand {
		&self.operand
	}
}

/// AND/OR over an ordered list of child conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCondition {
	combinator: Combinator,
	conditions: Vec<Condition>,
}

impl CompositeCondition {
	/// Combinator joining the children.
	pub fn combinator(&self) -> Combinator {
		self.combinator
	}

	/// Children in insertion order.
	pub fn conditions(&self) -> &[Condition] {
		&self.conditions
	}

	/// Returns `true` when there are no children.
	pub fn is_empty(&self) -> bool {
		self.conditions.is_empty()
	}

	/// Number of children.
	pub fn len(&self) -> usize {
		self.conditions.len()
	}
}

/// A filter expression.
///
/// # Example
///
/// ```rust
/// use sqlweave_query::{Cond, Condition, Expr};
///
/// // name = 'John' AND (role = 'admin' OR role = 'moderator')
/// let cond = Cond::all([
///     Expr::col("name").eq("John"),
///     Cond::any([
///         Expr::col("role").eq("admin"),
///         Expr::col("role").eq("moderator"),
///     ]),
/// ]);
///
/// let banned = Condition::not(Expr::col("banned").eq(true));
/// # let _ = (cond, banned);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	/// Atomic predicate
	Simple(SimpleCondition),
	/// AND/OR composition
	Composite(CompositeCondition),
	/// Negation of one child
	Not(Box<Condition>),
}

impl Condition {
	/// Build a simple condition from its parts.
	///
	/// The operand is not checked here; an operand that does not fit the
	/// operator is reported when the condition is translated.
	pub fn simple<F: Into<String>>(field: F, operator: Operator, operand: Operand) -> Self {
		Self::Simple(SimpleCondition {
			field: field.into(),
			operator,
			operand,
		})
	}

	fn single<F: Into<String>, V: IntoValue>(field: F, operator: Operator, value: V) -> Self {
		Self::simple(field, operator, Operand::Single(value.into_value()))
	}

	/// `field = value`
	pub fn eq<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Eq, value)
	}

	/// `field != value`
	pub fn ne<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Ne, value)
	}

	/// `field > value`
	pub fn gt<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Gt, value)
	}

	/// `field < value`
	pub fn lt<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Lt, value)
	}

	/// `field >= value`
	pub fn gte<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Gte, value)
	}

	/// `field <= value`
	pub fn lte<F: Into<String>, V: IntoValue>(field: F, value: V) -> Self {
		Self::single(field, Operator::Lte, value)
	}

	/// `field LIKE pattern`
	pub fn like<F: Into<String>, V: IntoValue>(field: F, pattern: V) -> Self {
		Self::single(field, Operator::Like, pattern)
	}

	/// `field IN (values...)`
	pub fn is_in<F, I, V>(field: F, values: I) -> Self
	where
		F: Into<String>,
		I: IntoIterator<Item = V>,
		V: IntoValue,
	{
		let values = values.into_iter().map(IntoValue::into_value).collect();
		Self::simple(field, Operator::In, Operand::List(values))
	}

	/// `field BETWEEN low AND high`
	pub fn between<F, L, H>(field: F, low: L, high: H) -> Self
	where
		F: Into<String>,
		L: IntoValue,
		H: IntoValue,
	{
		Self::simple(
			field,
			Operator::Between,
			Operand::List(vec![low.into_value(), high.into_value()]),
		)
	}

	/// Combine conditions with the given combinator.
	pub fn composite<I>(combinator: Combinator, conditions: I) -> Self
	where
		I: IntoIterator<Item = Condition>,
	{
		Self::Composite(CompositeCondition {
			combinator,
			conditions: conditions.into_iter().collect(),
		})
	}

	/// Conjunction of all given conditions.
	pub fn all<I>(conditions: I) -> Self
	where
		I: IntoIterator<Item = Condition>,
	{
		Self::composite(Combinator::And, conditions)
	}

	/// Disjunction of all given conditions.
	pub fn any<I>(conditions: I) -> Self
	where
		I: IntoIterator<Item = Condition>,
	{
		Self::composite(Combinator::Or, conditions)
	}

	/// Negate a condition.
	// Named constructor, not std::ops::Not
	#[allow(clippy::should_implement_trait)]
	pub fn not(condition: Condition) -> Self {
		Self::Not(Box::new(condition))
	}

	/// `(self AND other)`
	#[must_use]
	pub fn and(self, other: Condition) -> Self {
		Self::all([self, other])
	}

	/// `(self OR other)`
	#[must_use]
	pub fn or(self, other: Condition) -> Self {
		Self::any([self, other])
	}

	/// Total number of placeholders this condition renders to, assuming it
	/// is well formed.
	pub fn placeholder_count(&self) -> usize {
		match self {
			Self::Simple(simple) => simple.operand.len(),
			Self::Composite(composite) => composite
				.conditions
				.iter()
				.map(Condition::placeholder_count)
				.sum(),
			Self::Not(inner) => inner.placeholder_count(),
		}
	}
}

/// Shorthand for composite constructors.
pub struct Cond;

impl Cond {
	/// Conjunction of all given conditions.
	///
	/// ```rust
	/// use sqlweave_query::{Cond, Expr};
	///
	/// let cond = Cond::all([
	///     Expr::col("active").eq(true),
	///     Expr::col("verified").eq(true),
	/// ]);
	/// # let _ = cond;
	/// ```
	pub fn all<I>(conditions: I) -> Condition
	where
		I: IntoIterator<Item = Condition>,
	{
		Condition::all(conditions)
	}

	/// Disjunction of all given conditions.
	pub fn any<I>(conditions: I) -> Condition
	where
		I: IntoIterator<Item = Condition>,
	{
		Condition::any(conditions)
	}
}

/// Create an AND composite from a list of conditions.
///
/// ```rust
/// use sqlweave_query::{all, Expr};
///
/// let cond = all![
///     Expr::col("active").eq(true),
///     Expr::col("verified").eq(true),
/// ];
/// # let _ = cond;
/// ```
#[macro_export]
macro_rules! all {
    ($($cond:expr),* $(,)?) => {
        $crate::expr::Condition::all(::std::vec![$($cond),*])
    };
}

/// Create an OR composite from a list of conditions.
///
/// ```rust
/// use sqlweave_query::{any, Expr};
///
/// let cond = any![
///     Expr::col("role").eq("admin"),
///     Expr::col("role").eq("moderator"),
/// ];
/// # let _ = cond;
/// ```
#[macro_export]
macro_rules! any {
    ($($cond:expr),* $(,)?) => {
        $crate::expr::Condition::any(::std::vec![$($cond),*])
    };
}
