//! LIMIT / OFFSET pair.

/// Optional row limit and row offset.
///
/// `None` omits the corresponding clause; `Some(0)` is an explicit value and
/// is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pagination {
	/// Maximum number of rows
	pub limit: Option<u64>,
	/// Number of rows to skip
	pub offset: Option<u64>,
}

impl Pagination {
	/// Create a LIMIT / OFFSET pair.
	pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
		Self { limit, offset }
	}

	/// Returns `true` when neither a limit nor an offset is set.
	pub fn is_empty(&self) -> bool {
		self.limit.is_none() && self.offset.is_none()
	}
}
