// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All possible column value types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A UTF-8 encoded text
	Utf8,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Utf8 => f.write_str("UTF8"),
			Type::Int8 => f.write_str("INT8"),
			Type::Float8 => f.write_str("FLOAT8"),
		}
	}
}
