//! Table references, ordering and pagination types.
//!
//! - [`TableRef`]: the table a statement reads from
//! - [`TableSchema`]: seam for externally defined table metadata
//! - [`Order`] / [`OrderExpr`]: ORDER BY entries
//! - [`Pagination`]: optional LIMIT / OFFSET pair

mod order;
mod pagination;
mod table_ref;

pub use order::{Order, OrderExpr};
pub use pagination::Pagination;
pub use table_ref::{IntoTableRef, TableRef, TableSchema};
