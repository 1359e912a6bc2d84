//! Cross-dialect rendering tests

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::*;
use sqlweave_query::prelude::*;

fn sample_query(dialect: Arc<dyn Dialect>) -> QueryConstructor {
	let mut query = QueryConstructor::new("users", dialect);
	query
		.select(["id", "email"])
		.and_where(Expr::col("age").between(18, 65))
		.where_any([
			Expr::col("role").is_in(["admin", "staff"]),
			Expr::col("email").like("%@example.com"),
		])
		.order_by("id", Order::Asc)
		.limit(10)
		.offset(30);
	query
}

#[rstest]
#[case::mysql(
	Arc::new(MySqlDialect::new()),
	"SELECT `id`, `email` FROM `users` WHERE `age` BETWEEN ? AND ? AND (`role` IN (?, ?) OR `email` LIKE ?) ORDER BY `id` ASC LIMIT 10 OFFSET 30"
)]
#[case::sqlite(
	Arc::new(SqliteDialect::new()),
	"SELECT `id`, `email` FROM `users` WHERE `age` BETWEEN ? AND ? AND (`role` IN (?, ?) OR `email` LIKE ?) ORDER BY `id` ASC LIMIT 10 OFFSET 30"
)]
#[case::postgres(
	Arc::new(PostgresDialect::new()),
	r#"SELECT "id", "email" FROM "users" WHERE "age" BETWEEN $1 AND $2 AND ("role" IN ($3, $4) OR "email" LIKE $5) ORDER BY "id" ASC LIMIT 10 OFFSET 30"#
)]
#[case::sqlserver(
	Arc::new(SqlServerDialect::new()),
	"SELECT [id], [email] FROM [users] WHERE [age] BETWEEN @p1 AND @p2 AND ([role] IN (@p3, @p4) OR [email] LIKE @p5) ORDER BY [id] ASC OFFSET 30 ROWS FETCH NEXT 10 ROWS ONLY"
)]
fn test_same_query_every_dialect(#[case] dialect: Arc<dyn Dialect>, #[case] expected: &str) {
	let (sql, values) = sample_query(dialect).build().unwrap();

	assert_eq!(sql, expected);
	assert_eq!(
		values.into_inner(),
		vec![
			Value::Int(Some(18)),
			Value::Int(Some(65)),
			Value::from("admin"),
			Value::from("staff"),
			Value::from("%@example.com"),
		]
	);
}

/// MySQL and PostgreSQL output differ only in quote characters and
/// placeholder tokens.
#[rstest]
fn test_mysql_postgres_structural_equivalence() {
	let (mysql, mysql_values) = sample_query(Arc::new(MySqlDialect::new())).build().unwrap();
	let (pg, pg_values) = sample_query(Arc::new(PostgresDialect::new()))
		.build()
		.unwrap();

	let mut normalized = pg.replace('"', "`");
	for i in (1..=pg_values.len()).rev() {
		normalized = normalized.replace(&format!("${}", i), "?");
	}

	assert_eq!(normalized, mysql);
	assert_eq!(pg_values, mysql_values);
}

#[rstest]
#[case::mysql("mysql", "`")]
#[case::sqlite("sqlite", "`")]
#[case::postgres("postgresql", "\"")]
fn test_registry_dialect_quoting(#[case] name: &str, #[case] quote: &str) {
	let dialect = DialectRegistry::with_defaults().get(name).unwrap();
	assert_eq!(
		dialect.quote_identifier("col"),
		format!("{quote}col{quote}")
	);
}

#[rstest]
fn test_quote_value_is_informational() {
	let registry = DialectRegistry::with_defaults();
	let flag = Value::Bool(Some(true));

	assert_eq!(registry.get("mysql").unwrap().quote_value(&flag), "TRUE");
	assert_eq!(registry.get("sqlserver").unwrap().quote_value(&flag), "1");
	assert_eq!(
		registry.get("postgresql").unwrap().quote_value(&Value::from("it's")),
		"'it''s'"
	);
}

#[rstest]
fn test_translate_standalone_restarts_numbering() {
	let cond = Cond::all([Expr::col("a").eq(1), Expr::col("b").eq(2)]);
	let pg = PostgresDialect::new();

	let first = translate(&cond, &pg).unwrap();
	let second = translate(&cond, &pg).unwrap();

	assert_eq!(first.0, r#"("a" = $1 AND "b" = $2)"#);
	assert_eq!(first, second);
}
