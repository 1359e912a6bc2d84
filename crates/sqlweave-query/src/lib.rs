//! # sqlweave-query
//!
//! Dialect-aware SQL query construction.
//!
//! A query is described against a table with a small condition algebra
//! (comparison, range, membership, pattern match, AND/OR/NOT) plus column
//! selection, ordering and pagination, then rendered into parameterized SQL
//! text and an ordered argument list for one target dialect. Values never
//! appear in the SQL text; identifiers are always quoted.
//!
//! ## Supported Dialects
//!
//! - **MySQL**: [`MySqlDialect`] (the default)
//! - **PostgreSQL**: [`PostgresDialect`]
//! - **SQLite**: [`SqliteDialect`]
//! - **SQL Server**: [`SqlServerDialect`]
//!
//! Further dialects plug in by implementing [`Dialect`] and registering
//! them with a [`DialectRegistry`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlweave_query::prelude::*;
//!
//! let provider = ConstructorProvider::for_dialect(PostgresDialect::new());
//! let mut query = provider.new_constructor("users");
//! query.and_where(Expr::col("name").eq("John"));
//!
//! let (sql, values) = query.build().unwrap();
//! assert_eq!(sql, r#"SELECT * FROM "users" WHERE "name" = $1"#);
//! assert_eq!(values.into_inner(), vec![Value::from("John")]);
//! ```
//!
//! ## Grouping Conditions
//!
//! Separate [`and_where`](QueryConstructor::and_where) calls are joined with
//! `AND` at the top level. [`where_all`](QueryConstructor::where_all) and
//! [`where_any`](QueryConstructor::where_any) add one parenthesized group:
//!
//! ```rust
//! use sqlweave_query::prelude::*;
//!
//! let mut query = ConstructorProvider::default().new_constructor("users");
//! query
//!     .and_where(Expr::col("active").eq(true))
//!     .where_any([Expr::col("age").lt(18), Expr::col("age").gt(65)]);
//!
//! let (sql, _) = query.build().unwrap();
//! assert_eq!(sql, "SELECT * FROM `users` WHERE `active` = ? AND (`age` < ? OR `age` > ?)");
//! ```
//!
//! ## Configuration
//!
//! [`QuerySettings`] names a dialect and an optional limit ceiling and can be
//! loaded from TOML:
//!
//! ```rust
//! use sqlweave_query::prelude::*;
//!
//! let settings = QuerySettings::from_toml_str("dialect = \"sqlserver\"").unwrap();
//! let provider = DialectRegistry::with_defaults().provider_for(&settings).unwrap();
//! assert_eq!(provider.dialect().name(), "sqlserver");
//! ```
//!
//! ## Feature Flags
//!
//! - `with-chrono`: date and time values
//! - `with-uuid`: UUID values
//! - `with-json`: JSON values
//! - `full`: all of the above

// Core modules
pub mod error;
pub mod types;
pub mod value;

// Condition algebra
pub mod expr;

// Dialects and translation
pub mod backend;

// Query constructors
pub mod query;

pub mod config;

/// Prelude module for convenient imports.
///
/// ```rust
/// use sqlweave_query::prelude::*;
/// ```
pub mod prelude {
	// Dialects
	pub use crate::backend::{
		Dialect, DialectRegistry, MySqlDialect, PostgresDialect, SqlServerDialect, SqlWriter,
		SqliteDialect, translate,
	};
	// Configuration
	pub use crate::config::QuerySettings;
	// Errors
	pub use crate::error::QueryError;
	// Condition algebra
	pub use crate::expr::{Combinator, Cond, Condition, Expr, Operand, Operator};
	// Query constructors
	pub use crate::query::{ConstructorProvider, QueryCapabilities, QueryConstructor};
	// Type system
	pub use crate::types::{IntoTableRef, Order, OrderExpr, Pagination, TableRef, TableSchema};
	// Value system
	pub use crate::value::{IntoValue, Value, Values};
}

// Re-export commonly used types at crate root
pub use prelude::*;
