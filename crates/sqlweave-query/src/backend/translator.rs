//! Condition tree to SQL translation.
//!
//! The translator walks a [`Condition`] depth-first, left to right, writing
//! text and arguments into a [`SqlWriter`]. Composites are always wrapped in
//! parentheses, so the rendered text never depends on operator precedence.

use super::{Dialect, SqlWriter};
use crate::error::{QueryError, Result};
use crate::expr::{CompositeCondition, Condition, Operand, Operator, SimpleCondition};
use crate::value::Values;

/// Stateless visitor binding a [`Dialect`] to the condition walk.
///
/// The placeholder counter is owned by the writer, so one translator may be
/// used for several conditions written into the same statement.
#[derive(Debug, Clone, Copy)]
pub struct ConditionTranslator<'a> {
	dialect: &'a dyn Dialect,
}

impl<'a> ConditionTranslator<'a> {
	/// Create a translator for `dialect`
	pub fn new(dialect: &'a dyn Dialect) -> Self {
		Self { dialect }
	}

	/// Dialect this translator renders for
	pub fn dialect(&self) -> &'a dyn Dialect {
		self.dialect
	}

	/// Append `condition` to `writer`.
	///
	/// On error the writer holds partial output and should be discarded.
	pub fn translate(&self, writer: &mut SqlWriter, condition: &Condition) -> Result<()> {
		match condition {
			Condition::Simple(simple) => self.translate_simple(writer, simple),
			Condition::Composite(composite) => self.translate_composite(writer, composite),
			Condition::Not(inner) => {
				writer.push("NOT (");
				self.translate(writer, inner)?;
				writer.push(")");
				Ok(())
			}
		}
	}

	fn translate_simple(&self, writer: &mut SqlWriter, simple: &SimpleCondition) -> Result<()> {
		let field = simple.field();
		let operator = simple.operator();

		let values = match (operator.takes_single_value(), simple.operand()) {
			(true, Operand::Single(value)) => {
				writer.push_identifier(field, self.dialect);
				writer.push(" ");
				writer.push(operator.as_str());
				writer.push(" ");
				writer.push_value(value.clone(), self.dialect);
				return Ok(());
			}
			(true, Operand::List(_)) => {
				return Err(QueryError::OperandMismatch {
					field: field.to_string(),
					operator,
					expected: "a single value",
				});
			}
			(false, Operand::Single(_)) => {
				return Err(QueryError::OperandMismatch {
					field: field.to_string(),
					operator,
					expected: "a list of values",
				});
			}
			(false, Operand::List(values)) => values,
		};

		if operator == Operator::Between {
			let [low, high] = values.as_slice() else {
				return Err(QueryError::RangeArity {
					field: field.to_string(),
					found: values.len(),
				});
			};
			writer.push_identifier(field, self.dialect);
			writer.push(" BETWEEN ");
			writer.push_value(low.clone(), self.dialect);
			writer.push(" AND ");
			writer.push_value(high.clone(), self.dialect);
			return Ok(());
		}

		if values.is_empty() {
			return Err(QueryError::EmptyMembership {
				field: field.to_string(),
			});
		}
		writer.push_identifier(field, self.dialect);
		writer.push(" IN (");
		writer.push_list(values, ", ", |w, value| {
			w.push_value(value.clone(), self.dialect);
			Ok(())
		})?;
		writer.push(")");
		Ok(())
	}

	fn translate_composite(
		&self,
		writer: &mut SqlWriter,
		composite: &CompositeCondition,
	) -> Result<()> {
		if composite.is_empty() {
			return Err(QueryError::EmptyComposite {
				combinator: composite.combinator(),
			});
		}
		writer.push("(");
		writer.push_list(
			composite.conditions(),
			composite.combinator().separator(),
			|w, child| self.translate(w, child),
		)?;
		writer.push(")");
		Ok(())
	}
}

/// Render a single condition with a fresh placeholder counter.
///
/// # Examples
///
/// ```rust
/// use sqlweave_query::{Cond, Expr};
/// use sqlweave_query::backend::{SqlServerDialect, translate};
///
/// let cond = Cond::any([Expr::col("a").eq(1), Expr::col("b").is_in([2, 3])]);
/// let (sql, args) = translate(&cond, &SqlServerDialect::new()).unwrap();
/// assert_eq!(sql, "([a] = @p1 OR [b] IN (@p2, @p3))");
/// assert_eq!(args.len(), 3);
/// ```
pub fn translate(condition: &Condition, dialect: &dyn Dialect) -> Result<(String, Values)> {
	let mut writer = SqlWriter::new();
	ConditionTranslator::new(dialect)
		.translate(&mut writer, condition)
		.inspect_err(|err| {
			tracing::debug!(dialect = dialect.name(), error = %err, "condition translation failed");
		})?;
	Ok(writer.finish())
}
