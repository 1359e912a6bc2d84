//! Error path tests for SELECT construction

use pretty_assertions::assert_eq;
use rstest::*;
use sqlweave_query::prelude::*;

#[fixture]
fn provider() -> ConstructorProvider {
	ConstructorProvider::for_dialect(PostgresDialect::new())
}

/// Test empty membership fails the build
#[rstest]
fn test_empty_membership(provider: ConstructorProvider) {
	let mut query = provider.new_constructor("users");
	query.and_where(Condition::is_in("age", Vec::<i32>::new()));

	let err = query.build().unwrap_err();

	assert_eq!(
		err,
		QueryError::EmptyMembership {
			field: "age".to_string()
		}
	);
	assert_eq!(err.to_string(), "membership condition on `age` has no values");
}

/// Test empty groups fail instead of rendering an empty WHERE
#[rstest]
fn test_empty_where_all(provider: ConstructorProvider) {
	let mut query = provider.new_constructor("users");
	query.where_all(Vec::<Condition>::new());

	assert_eq!(
		query.build(),
		Err(QueryError::EmptyComposite {
			combinator: Combinator::And
		})
	);
}

#[rstest]
fn test_empty_where_any_nested(provider: ConstructorProvider) {
	let mut query = provider.new_constructor("users");
	query.where_all([
		Expr::col("a").eq(1),
		Condition::not(Cond::any(Vec::<Condition>::new())),
	]);

	assert_eq!(
		query.build(),
		Err(QueryError::EmptyComposite {
			combinator: Combinator::Or
		})
	);
}

/// Test range arity is enforced
#[rstest]
#[case::one(vec![Value::Int(Some(1))], 1)]
#[case::three(vec![Value::Int(Some(1)), Value::Int(Some(2)), Value::Int(Some(3))], 3)]
fn test_range_arity(
	provider: ConstructorProvider,
	#[case] values: Vec<Value>,
	#[case] found: usize,
) {
	let mut query = provider.new_constructor("users");
	query.and_where(Condition::simple(
		"age",
		Operator::Between,
		Operand::List(values),
	));

	assert_eq!(
		query.build(),
		Err(QueryError::RangeArity {
			field: "age".to_string(),
			found,
		})
	);
}

/// Test operand shape mismatches
#[rstest]
fn test_operand_mismatch(provider: ConstructorProvider) {
	let mut query = provider.new_constructor("users");
	query.and_where(Condition::simple(
		"name",
		Operator::Like,
		Operand::List(vec![Value::from("a%"), Value::from("b%")]),
	));

	assert!(matches!(
		query.build(),
		Err(QueryError::OperandMismatch {
			operator: Operator::Like,
			..
		})
	));
}

/// Test textual operator and order tags
#[rstest]
fn test_unknown_operator_tag() {
	assert_eq!(
		"regexp".parse::<Operator>(),
		Err(QueryError::UnknownOperator("regexp".to_string()))
	);
}

#[rstest]
fn test_unknown_order_tag() {
	assert_eq!(
		"upward".parse::<Order>(),
		Err(QueryError::UnknownOrder("upward".to_string()))
	);
}

/// Test builder misuse and unknown dialects
#[rstest]
fn test_missing_table(provider: ConstructorProvider) {
	assert_eq!(
		provider.new_constructor("").build(),
		Err(QueryError::MissingTable)
	);
}

#[rstest]
fn test_unknown_dialect() {
	let registry = DialectRegistry::with_defaults();
	let settings = QuerySettings::new("oracle");

	assert_eq!(
		registry.provider_for(&settings).unwrap_err(),
		QueryError::UnknownDialect("oracle".to_string())
	);
}

/// Test errors are deterministic across repeated builds
#[rstest]
fn test_error_is_repeatable(provider: ConstructorProvider) {
	let mut query = provider.new_constructor("users");
	query.and_where(Expr::col("id").is_in(Vec::<i32>::new()));

	assert_eq!(query.build(), query.build());
}
