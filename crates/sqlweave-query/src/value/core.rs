//! Core `Value` enum definition.

/// A scalar operand bound to a placeholder at execution time.
///
/// Every variant wraps an `Option`; `None` is SQL `NULL` of that type. Values
/// are always emitted as placeholders and handed to the executor in the
/// argument list, never spliced into the statement text.
///
/// ## Example
///
/// ```rust
/// use sqlweave_query::Value;
///
/// let age = Value::Int(Some(42));
/// let name = Value::from("John");
/// assert_eq!(name, Value::String(Some("John".to_string())));
/// assert!(Value::Int(None).is_null());
/// # let _ = age;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 8-bit signed integer
	TinyInt(Option<i8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 8-bit unsigned integer
	TinyUnsigned(Option<u8>),
	/// 16-bit unsigned integer
	SmallUnsigned(Option<u16>),
	/// 32-bit unsigned integer
	Unsigned(Option<u32>),
	/// 64-bit unsigned integer
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),
	/// Text
	String(Option<String>),
	/// Binary data
	Bytes(Option<Vec<u8>>),

	/// Calendar date
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<chrono::NaiveDate>),
	/// Time of day
	#[cfg(feature = "with-chrono")]
	ChronoTime(Option<chrono::NaiveTime>),
	/// Date and time without a zone
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<chrono::NaiveDateTime>),
	/// Date and time in UTC
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeUtc(Option<chrono::DateTime<chrono::Utc>>),

	/// UUID
	#[cfg(feature = "with-uuid")]
	Uuid(Option<uuid::Uuid>),

	/// JSON document
	#[cfg(feature = "with-json")]
	Json(Option<serde_json::Value>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// ```rust
	/// use sqlweave_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyInt(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::TinyUnsigned(v) => v.is_none(),
			Self::SmallUnsigned(v) => v.is_none(),
			Self::Unsigned(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-json")]
			Self::Json(v) => v.is_none(),
		}
	}

	/// Render this value as a standard SQL literal.
	///
	/// Only meant for diagnostics; statements built by this crate always
	/// carry values in the argument list. Dialects may override parts of this
	/// rendering through [`Dialect::quote_value`](crate::backend::Dialect::quote_value).
	///
	/// ```rust
	/// use sqlweave_query::Value;
	///
	/// assert_eq!(Value::Int(Some(42)).to_sql_literal(), "42");
	/// assert_eq!(Value::Int(None).to_sql_literal(), "NULL");
	/// assert_eq!(Value::from("it's").to_sql_literal(), "'it''s'");
	/// ```
	#[must_use]
	pub fn to_sql_literal(&self) -> String {
		if self.is_null() {
			return "NULL".to_string();
		}
		match self {
			Self::Bool(Some(true)) => "TRUE".to_string(),
			Self::Bool(Some(false)) => "FALSE".to_string(),
			Self::TinyInt(Some(v)) => v.to_string(),
			Self::SmallInt(Some(v)) => v.to_string(),
			Self::Int(Some(v)) => v.to_string(),
			Self::BigInt(Some(v)) => v.to_string(),
			Self::TinyUnsigned(Some(v)) => v.to_string(),
			Self::SmallUnsigned(Some(v)) => v.to_string(),
			Self::Unsigned(Some(v)) => v.to_string(),
			Self::BigUnsigned(Some(v)) => v.to_string(),
			Self::Float(Some(v)) => v.to_string(),
			Self::Double(Some(v)) => v.to_string(),
			Self::Char(Some(v)) => quote_text(&v.to_string()),
			Self::String(Some(v)) => quote_text(v),
			Self::Bytes(Some(v)) => {
				let hex: String = v.iter().map(|b| format!("{:02X}", b)).collect();
				format!("X'{}'", hex)
			}
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(Some(v)) => format!("'{}'", v.to_rfc3339()),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-json")]
			Self::Json(Some(v)) => quote_text(&v.to_string()),
			_ => "NULL".to_string(),
		}
	}
}

/// Single-quote text, doubling embedded quotes.
fn quote_text(text: &str) -> String {
	format!("'{}'", text.replace('\'', "''"))
}

impl Default for Value {
	/// A null string.
	fn default() -> Self {
		Self::String(None)
	}
}
