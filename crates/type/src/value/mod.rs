// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod convert;
mod ordered_f64;
mod r#type;

pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A cell value, represented as a native Rust type.
///
/// Values of the same variant order naturally (text lexicographically,
/// numbers numerically). Across variants the order is by variant, which only
/// matters for callers mixing types; a validated column never does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
	/// A UTF-8 encoded text.
	Utf8(String),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(OrderedF64),
}

impl Value {
	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> crate::Result<Self> {
		OrderedF64::try_from(v.into()).map(Value::Float8)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Utf8(_) => Type::Utf8,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Utf8(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
		}
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int8(v as i64)
	}
}

impl From<OrderedF64> for Value {
	fn from(v: OrderedF64) -> Self {
		Value::Float8(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::utf8("AAA").to_string(), "AAA");
		assert_eq!(Value::int8(-42).to_string(), "-42");
		assert_eq!(Value::float8(2.5).unwrap().to_string(), "2.5");
		assert_eq!(Value::float8(3.0).unwrap().to_string(), "3");
	}

	#[test]
	fn test_order_within_type() {
		let mut values = vec![Value::utf8("C"), Value::utf8("A"), Value::utf8("B")];
		values.sort();
		assert_eq!(values, vec![Value::utf8("A"), Value::utf8("B"), Value::utf8("C")]);

		let mut values = vec![Value::int8(10), Value::int8(-1), Value::int8(2)];
		values.sort();
		assert_eq!(values, vec![Value::int8(-1), Value::int8(2), Value::int8(10)]);
	}

	#[test]
	fn test_float8_rejects_nan() {
		assert!(Value::float8(f64::NAN).is_err());
	}

	#[test]
	fn test_serde() {
		let json = serde_json::to_string(&Value::int8(7)).unwrap();
		assert_eq!(json, r#"{"Int8":7}"#);
		let back: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(back, Value::int8(7));
	}
}
