//! Value types carried as query arguments.
//!
//! - [`Value`]: a single, possibly null, scalar
//! - [`Values`]: the ordered argument list returned next to rendered SQL
//! - [`IntoValue`]: conversion from Rust types

mod core;

pub use self::core::Value;

use std::fmt;

/// Ordered list of arguments, aligned one-to-one with the placeholders of
/// the statement it was rendered with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(pub Vec<Value>);

impl Values {
	/// Create an empty argument list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a value.
	pub fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	/// Number of arguments.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when there are no arguments.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the arguments in placeholder order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	/// Unwrap into the underlying vector.
	pub fn into_inner(self) -> Vec<Value> {
		self.0
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl From<Vec<Value>> for Values {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl std::ops::Index<usize> for Values {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_sql_literal())
	}
}

/// Conversion into a [`Value`].
///
/// Implemented for every type with a `From` conversion, so builder methods can
/// take `impl IntoValue` and accept plain Rust literals.
pub trait IntoValue {
	/// Convert into a `Value`.
	fn into_value(self) -> Value;
}

impl<T> IntoValue for T
where
	T: Into<Value>,
{
	fn into_value(self) -> Value {
		self.into()
	}
}

macro_rules! impl_value_from {
	($ty:ty, $variant:ident) => {
		impl From<$ty> for Value {
			fn from(v: $ty) -> Self {
				Value::$variant(Some(v))
			}
		}

		impl From<Option<$ty>> for Value {
			fn from(v: Option<$ty>) -> Self {
				Value::$variant(v)
			}
		}
	};
}

impl_value_from!(bool, Bool);
impl_value_from!(i8, TinyInt);
impl_value_from!(i16, SmallInt);
impl_value_from!(i32, Int);
impl_value_from!(i64, BigInt);
impl_value_from!(u8, TinyUnsigned);
impl_value_from!(u16, SmallUnsigned);
impl_value_from!(u32, Unsigned);
impl_value_from!(u64, BigUnsigned);
impl_value_from!(f32, Float);
impl_value_from!(f64, Double);
impl_value_from!(char, Char);
impl_value_from!(String, String);
impl_value_from!(Vec<u8>, Bytes);

#[cfg(feature = "with-chrono")]
impl_value_from!(chrono::NaiveDate, ChronoDate);
#[cfg(feature = "with-chrono")]
impl_value_from!(chrono::NaiveTime, ChronoTime);
#[cfg(feature = "with-chrono")]
impl_value_from!(chrono::NaiveDateTime, ChronoDateTime);
#[cfg(feature = "with-chrono")]
impl_value_from!(chrono::DateTime<chrono::Utc>, ChronoDateTimeUtc);
#[cfg(feature = "with-uuid")]
impl_value_from!(uuid::Uuid, Uuid);
#[cfg(feature = "with-json")]
impl_value_from!(serde_json::Value, Json);

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(Some(v.to_string()))
	}
}

impl From<Option<&str>> for Value {
	fn from(v: Option<&str>) -> Self {
		Value::String(v.map(str::to_string))
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Value::String(Some(v.clone()))
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Value::Bytes(Some(v.to_vec()))
	}
}
