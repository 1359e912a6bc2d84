//! Edge case tests for SELECT construction

use pretty_assertions::assert_eq;
use rstest::*;
use sqlweave_query::prelude::*;

/// Test reserved words and mixed case as identifiers
#[rstest]
#[case::mysql(MySqlDialect::new().name(), "SELECT `select`, `Order` FROM `group` WHERE `from` = ?")]
#[case::postgres(
	PostgresDialect::new().name(),
	r#"SELECT "select", "Order" FROM "group" WHERE "from" = $1"#
)]
#[case::sqlserver(
	SqlServerDialect::new().name(),
	"SELECT [select], [Order] FROM [group] WHERE [from] = @p1"
)]
fn test_reserved_word_identifiers(#[case] dialect: &str, #[case] expected: &str) {
	let provider = DialectRegistry::with_defaults().provider(dialect).unwrap();
	let mut query = provider.new_constructor("group");
	query
		.select(["select", "Order"])
		.and_where(Expr::col("from").eq(1));

	assert_eq!(query.build().unwrap().0, expected);
}

/// Test that hostile identifiers stay inside their quotes
#[rstest]
fn test_identifier_with_closing_quote() {
	let provider = ConstructorProvider::default();
	let mut query = provider.new_constructor("users");
	query.select(["id` FROM secrets; --"]);

	let (sql, _) = query.build().unwrap();

	assert_eq!(sql, "SELECT `id`` FROM secrets; --` FROM `users`");
}

/// Test that values never reach the SQL text
#[rstest]
fn test_value_is_not_inlined() {
	let provider = ConstructorProvider::for_dialect(PostgresDialect::new());
	let mut query = provider.new_constructor("users");
	query.and_where(Expr::col("name").eq("'; DROP TABLE users; --"));

	let (sql, values) = query.build().unwrap();

	assert_eq!(sql, r#"SELECT * FROM "users" WHERE "name" = $1"#);
	assert_eq!(values[0], Value::from("'; DROP TABLE users; --"));
}

/// Test NULL operand is bound as an argument
#[rstest]
fn test_null_operand_is_bound() {
	let provider = ConstructorProvider::for_dialect(SqlServerDialect::new());
	let mut query = provider.new_constructor("users");
	query
		.and_where(Expr::col("manager_id").ne(Option::<i64>::None))
		.and_where(Expr::col("id").gt(5_i64));

	let (sql, values) = query.build().unwrap();

	assert_eq!(
		sql,
		"SELECT * FROM [users] WHERE [manager_id] != @p1 AND [id] > @p2"
	);
	assert_eq!(
		values.into_inner(),
		vec![Value::BigInt(None), Value::BigInt(Some(5))]
	);
}

/// Test single-element membership and single-child group
#[rstest]
fn test_single_element_forms() {
	let provider = ConstructorProvider::for_dialect(PostgresDialect::new());
	let mut query = provider.new_constructor("users");
	query
		.and_where(Expr::col("id").is_in([7]))
		.where_all([Expr::col("active").eq(true)]);

	let (sql, _) = query.build().unwrap();

	assert_eq!(
		sql,
		r#"SELECT * FROM "users" WHERE "id" IN ($1) AND ("active" = $2)"#
	);
}

/// Test explicit zero pagination values are rendered
#[rstest]
#[case::mysql("mysql", "SELECT * FROM `t` LIMIT 0 OFFSET 0")]
#[case::sqlite("sqlite", "SELECT * FROM `t` LIMIT 0 OFFSET 0")]
#[case::postgres("postgresql", r#"SELECT * FROM "t" LIMIT 0 OFFSET 0"#)]
#[case::sqlserver(
	"sqlserver",
	"SELECT * FROM [t] ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 0 ROWS ONLY"
)]
fn test_zero_pagination(#[case] dialect: &str, #[case] expected: &str) {
	let provider = DialectRegistry::with_defaults().provider(dialect).unwrap();
	let mut query = provider.new_constructor("t");
	query.limit(0).offset(0);

	assert_eq!(query.build().unwrap().0, expected);
}

/// Test offset without limit
#[rstest]
#[case::mysql("mysql", "SELECT * FROM `t` LIMIT 18446744073709551615 OFFSET 40")]
#[case::sqlite("sqlite", "SELECT * FROM `t` LIMIT -1 OFFSET 40")]
#[case::postgres("postgresql", r#"SELECT * FROM "t" OFFSET 40"#)]
#[case::sqlserver("sqlserver", "SELECT * FROM [t] ORDER BY (SELECT NULL) OFFSET 40 ROWS")]
fn test_offset_only(#[case] dialect: &str, #[case] expected: &str) {
	let provider = DialectRegistry::with_defaults().provider(dialect).unwrap();
	let mut query = provider.new_constructor("t");
	query.offset(40);

	assert_eq!(query.build().unwrap().0, expected);
}

/// Test a shared condition fragment reused across constructors
#[rstest]
fn test_condition_reuse_across_dialects() {
	let visible = Cond::all([
		Expr::col("deleted").eq(false),
		Expr::col("status").is_in(["open", "pending"]),
	]);
	let registry = DialectRegistry::with_defaults();

	let mut rendered = Vec::new();
	for name in registry.names() {
		let mut query = registry.provider(name).unwrap().new_constructor("tickets");
		query.and_where(visible.clone());
		let (sql, values) = query.build().unwrap();
		assert_eq!(values.len(), 3);
		rendered.push(sql);
	}

	assert_eq!(
		rendered,
		vec![
			"SELECT * FROM `tickets` WHERE (`deleted` = ? AND `status` IN (?, ?))",
			r#"SELECT * FROM "tickets" WHERE ("deleted" = $1 AND "status" IN ($2, $3))"#,
			"SELECT * FROM `tickets` WHERE (`deleted` = ? AND `status` IN (?, ?))",
			"SELECT * FROM [tickets] WHERE ([deleted] = @p1 AND [status] IN (@p2, @p3))",
		]
	);
}

/// Test building from several threads with one shared provider
#[rstest]
fn test_concurrent_builds() {
	let provider = std::sync::Arc::new(ConstructorProvider::for_dialect(PostgresDialect::new()));
	let filter = Expr::col("tenant").eq("acme");

	let handles: Vec<_> = (0..4_u64)
		.map(|i| {
			let provider = std::sync::Arc::clone(&provider);
			let filter = filter.clone();
			std::thread::spawn(move || {
				let mut query = provider.new_constructor("docs");
				query.and_where(filter).limit(i + 1);
				query.build().unwrap().0
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		assert_eq!(
			handle.join().unwrap(),
			format!(r#"SELECT * FROM "docs" WHERE "tenant" = $1 LIMIT {}"#, i + 1)
		);
	}
}
