//! Table reference types.

/// Reference to the table a statement selects from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableRef {
	/// Simple table reference (e.g., `users`)
	Table(String),
	/// Schema-qualified table reference (e.g., `public.users`)
	SchemaTable(String, String),
}

impl TableRef {
	/// Create a simple table reference.
	///
	/// ```rust
	/// use sqlweave_query::TableRef;
	///
	/// let table = TableRef::table("users");
	/// assert_eq!(table.name(), "users");
	/// ```
	pub fn table<T: Into<String>>(table: T) -> Self {
		Self::Table(table.into())
	}

	/// Create a schema-qualified table reference.
	pub fn schema_table<S: Into<String>, T: Into<String>>(schema: S, table: T) -> Self {
		Self::SchemaTable(schema.into(), table.into())
	}

	/// Build a reference from externally defined table metadata.
	pub fn from_schema<S: TableSchema + ?Sized>(schema: &S) -> Self {
		match schema.schema_name() {
			Some(ns) => Self::schema_table(ns, schema.table_name()),
			None => Self::table(schema.table_name()),
		}
	}

	/// Unqualified table name.
	pub fn name(&self) -> &str {
		match self {
			Self::Table(name) | Self::SchemaTable(_, name) => name,
		}
	}

	/// Schema qualifier, if any.
	pub fn schema(&self) -> Option<&str> {
		match self {
			Self::Table(_) => None,
			Self::SchemaTable(schema, _) => Some(schema),
		}
	}

	/// Returns `true` when no usable table name is present.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Table(name) => name.is_empty(),
			Self::SchemaTable(schema, name) => schema.is_empty() || name.is_empty(),
		}
	}
}

/// Table metadata owned outside this crate.
///
/// Field definitions and validation live with the caller; a constructor only
/// needs the name of the table.
pub trait TableSchema {
	/// Name of the table.
	fn table_name(&self) -> &str;

	/// Schema (namespace) the table lives in.
	fn schema_name(&self) -> Option<&str> {
		None
	}
}

/// Conversion into a [`TableRef`].
pub trait IntoTableRef {
	/// Convert this type into a `TableRef`.
	fn into_table_ref(self) -> TableRef;
}

impl IntoTableRef for TableRef {
	fn into_table_ref(self) -> TableRef {
		self
	}
}

impl IntoTableRef for &str {
	fn into_table_ref(self) -> TableRef {
		TableRef::table(self)
	}
}

impl IntoTableRef for String {
	fn into_table_ref(self) -> TableRef {
		TableRef::Table(self)
	}
}

// (schema, table)
impl<S, T> IntoTableRef for (S, T)
where
	S: Into<String>,
	T: Into<String>,
{
	fn into_table_ref(self) -> TableRef {
		TableRef::schema_table(self.0, self.1)
	}
}
