// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{OrderedF64, Type, TypeError, Value};

// 2^63; the first f64 above i64::MAX
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Value {
	/// Converts the value into `target`, failing unless the conversion is exact.
	///
	/// Numbers render to text through `Display`. Text never converts to a
	/// number.
	pub fn cast(&self, target: Type) -> crate::Result<Value> {
		match target {
			Type::Utf8 => Ok(self.to_text()),
			Type::Int8 => self.to_int8(),
			Type::Float8 => self.to_float8(),
		}
	}

	pub fn to_text(&self) -> Value {
		match self {
			Value::Utf8(_) => self.clone(),
			Value::Int8(_) | Value::Float8(_) => Value::Utf8(self.to_string()),
		}
	}

	pub fn to_int8(&self) -> crate::Result<Value> {
		match self {
			Value::Int8(_) => Ok(self.clone()),
			Value::Float8(f) => {
				let f = f.value();
				if f.fract() == 0.0 && f >= -I64_UPPER && f < I64_UPPER {
					Ok(Value::Int8(f as i64))
				} else {
					Err(self.lossy(Type::Int8))
				}
			}
			Value::Utf8(_) => Err(self.lossy(Type::Int8)),
		}
	}

	pub fn to_float8(&self) -> crate::Result<Value> {
		match self {
			Value::Float8(_) => Ok(self.clone()),
			Value::Int8(i) => {
				let f = *i as f64;
				if f < I64_UPPER && f as i64 == *i {
					Ok(Value::Float8(OrderedF64::try_from(f)?))
				} else {
					Err(self.lossy(Type::Float8))
				}
			}
			Value::Utf8(_) => Err(self.lossy(Type::Float8)),
		}
	}

	fn lossy(&self, to: Type) -> TypeError {
		TypeError::LossyConversion {
			value: self.to_string(),
			from: self.get_type(),
			to,
		}
	}
}
