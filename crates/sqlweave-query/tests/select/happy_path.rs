//! Happy path tests for SELECT construction

use pretty_assertions::assert_eq;
use rstest::*;
use sqlweave_query::prelude::*;
use sqlweave_query::{all, any};

#[fixture]
fn registry() -> DialectRegistry {
	DialectRegistry::with_defaults()
}

/// Test equality on PostgreSQL
///
/// Verifies the canonical single-condition statement and its argument.
#[rstest]
fn test_equality_postgres(registry: DialectRegistry) {
	let provider = registry.provider("postgresql").unwrap();
	let mut query = provider.new_constructor("users");
	query.and_where(Condition::eq("name", "John"));

	let (sql, values) = query.build().unwrap();

	assert_eq!(sql, r#"SELECT * FROM "users" WHERE "name" = $1"#);
	assert_eq!(values.into_inner(), vec![Value::from("John")]);
}

/// Test membership on MySQL
///
/// Verifies that every element gets its own placeholder, in order.
#[rstest]
fn test_membership_mysql(registry: DialectRegistry) {
	let provider = registry.provider("mysql").unwrap();
	let mut query = provider.new_constructor("users");
	query.and_where(Condition::is_in("age", [18, 21, 25, 30]));

	let (sql, values) = query.build().unwrap();

	assert_eq!(sql, "SELECT * FROM `users` WHERE `age` IN (?, ?, ?, ?)");
	assert_eq!(
		values.into_inner(),
		vec![
			Value::Int(Some(18)),
			Value::Int(Some(21)),
			Value::Int(Some(25)),
			Value::Int(Some(30)),
		]
	);
}

/// Test a full statement with every clause
#[rstest]
fn test_full_statement_postgres(registry: DialectRegistry) {
	let provider = registry.provider("postgresql").unwrap();
	let mut query = provider.new_constructor("orders");
	query
		.select(["id", "total", "status"])
		.and_where(Expr::col("total").between(100, 500))
		.where_any([
			Expr::col("status").eq("shipped"),
			Expr::col("status").eq("delivered"),
		])
		.and_where(Condition::not(Expr::col("customer").like("test%")))
		.order_by("total", Order::Desc)
		.order_by("id", Order::Asc)
		.limit(25)
		.offset(50);

	let (sql, values) = query.build().unwrap();

	assert_eq!(
		sql,
		concat!(
			r#"SELECT "id", "total", "status" FROM "orders" "#,
			r#"WHERE "total" BETWEEN $1 AND $2 "#,
			r#"AND ("status" = $3 OR "status" = $4) "#,
			r#"AND NOT ("customer" LIKE $5) "#,
			r#"ORDER BY "total" DESC, "id" ASC LIMIT 25 OFFSET 50"#,
		)
	);
	assert_eq!(
		values.into_inner(),
		vec![
			Value::Int(Some(100)),
			Value::Int(Some(500)),
			Value::from("shipped"),
			Value::from("delivered"),
			Value::from("test%"),
		]
	);
}

/// Test nested groups built with the macros
#[rstest]
fn test_nested_groups_sqlite(registry: DialectRegistry) {
	let provider = registry.provider("sqlite").unwrap();
	let mut query = provider.new_constructor("posts");
	query.and_where(all![
		Expr::col("published").eq(true),
		any![
			Expr::col("author_id").eq(1),
			all![Expr::col("featured").eq(true), Expr::col("score").gte(10)],
		],
	]);

	let (sql, values) = query.build().unwrap();

	assert_eq!(
		sql,
		"SELECT * FROM `posts` WHERE (`published` = ? AND (`author_id` = ? OR (`featured` = ? AND `score` >= ?)))"
	);
	assert_eq!(values.len(), 4);
}

/// Test SQL Server with limit and offset
#[rstest]
fn test_sqlserver_limit_offset(registry: DialectRegistry) {
	let provider = registry.provider("sqlserver").unwrap();
	let mut query = provider.new_constructor("users");
	query
		.and_where(Expr::col("active").eq(true))
		.order_by("id", Order::Asc)
		.limit(10)
		.offset(20);

	let (sql, values) = query.build().unwrap();

	assert_eq!(
		sql,
		"SELECT * FROM [users] WHERE [active] = @p1 ORDER BY [id] ASC OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
	);
	assert_eq!(values.into_inner(), vec![Value::Bool(Some(true))]);
}

/// Test count query from the same conditions
#[rstest]
fn test_count_shares_conditions(registry: DialectRegistry) {
	let provider = registry.provider("mysql").unwrap();
	let mut query = provider.new_constructor("users");
	query
		.and_where(Expr::col("age").gte(18))
		.order_by("name", Order::Asc)
		.limit(10);

	let (page_sql, page_values) = query.build().unwrap();
	let (count_sql, count_values) = query.build_count().unwrap();

	assert_eq!(
		page_sql,
		"SELECT * FROM `users` WHERE `age` >= ? ORDER BY `name` ASC LIMIT 10"
	);
	assert_eq!(count_sql, "SELECT COUNT(*) FROM `users` WHERE `age` >= ?");
	assert_eq!(page_values, count_values);
}

/// Test a table described by external schema metadata
#[rstest]
fn test_table_from_schema(registry: DialectRegistry) {
	struct Accounts;

	impl TableSchema for Accounts {
		fn table_name(&self) -> &str {
			"accounts"
		}

		fn schema_name(&self) -> Option<&str> {
			Some("billing")
		}
	}

	let provider = registry.provider("postgresql").unwrap();
	let (sql, _) = provider
		.new_constructor(TableRef::from_schema(&Accounts))
		.build()
		.unwrap();

	assert_eq!(sql, r#"SELECT * FROM "billing"."accounts""#);
}

/// Test settings-driven provider selection
#[rstest]
fn test_provider_from_settings(registry: DialectRegistry) {
	let settings = QuerySettings::from_toml_str("dialect = \"postgresql\"\nmax_limit = 100").unwrap();
	let provider = registry.provider_for(&settings).unwrap();

	let mut query = provider.new_constructor("events");
	query.limit(1_000);
	let (sql, _) = query.build().unwrap();

	assert_eq!(sql, r#"SELECT * FROM "events" LIMIT 100"#);
}
