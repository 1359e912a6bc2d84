//! # sqlweave
//!
//! Dialect-aware SQL query construction: build a query once, render it as
//! parameterized SQL for MySQL, PostgreSQL, SQLite or SQL Server.
//!
//! This crate re-exports [`sqlweave_query`]. See its documentation for the
//! condition algebra, dialects and configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlweave::prelude::*;
//!
//! let registry = DialectRegistry::with_defaults();
//! let provider = registry.provider("mysql").unwrap();
//!
//! let mut query = provider.new_constructor("users");
//! query
//!     .select(["id", "name"])
//!     .and_where(Expr::col("age").is_in([18, 21, 25, 30]))
//!     .order_by("name", Order::Asc)
//!     .limit(10);
//!
//! let (sql, values) = query.build().unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT `id`, `name` FROM `users` WHERE `age` IN (?, ?, ?, ?) ORDER BY `name` ASC LIMIT 10"
//! );
//! assert_eq!(values.len(), 4);
//! ```

pub use sqlweave_query::*;
