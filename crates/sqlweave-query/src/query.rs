//! Query construction
//!
//! - [`QueryConstructor`]: builder surface rendering one SELECT statement
//! - [`ConstructorProvider`]: dialect-bound factory for constructors
//! - [`QueryCapabilities`]: what a provider declares it supports
//!
//! # Examples
//!
//! ```rust
//! use sqlweave_query::prelude::*;
//!
//! let provider = ConstructorProvider::for_dialect(SqlServerDialect::new());
//! let mut query = provider.new_constructor("orders");
//! query
//!     .where_any([Expr::col("status").eq("open"), Expr::col("status").eq("held")])
//!     .order_by("created_at", Order::Desc)
//!     .limit(10)
//!     .offset(20);
//!
//! let (sql, values) = query.build().unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM [orders] WHERE ([status] = @p1 OR [status] = @p2) \
//!      ORDER BY [created_at] DESC OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
//! );
//! assert_eq!(values.len(), 2);
//! ```

mod capabilities;
mod provider;
mod select;

pub use capabilities::QueryCapabilities;
pub use provider::ConstructorProvider;
pub use select::QueryConstructor;
