// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeSet, HashMap},
	fmt::{self, Display, Formatter},
};

use reifydb_type::{Column, Type, Value};
use tracing::trace;

use crate::LookupError;

/// Rank of a distinct value inside its column, in ascending value order.
///
/// Ids are only unique within one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurrogateId(u32);

impl SurrogateId {
	pub fn rank(&self) -> u32 {
		self.0
	}
}

impl Display for SurrogateId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}_", self.0)
	}
}

/// Bijection between the distinct values of one column and their
/// [`SurrogateId`]s.
#[derive(Debug, Clone)]
pub struct Dictionary {
	column: String,
	ty: Type,
	values: Vec<Value>,
	ids: HashMap<Value, SurrogateId>,
}

impl Dictionary {
	pub fn build(column: &Column) -> crate::Result<Self> {
		let distinct: BTreeSet<Value> = column.data.iter().collect();
		if distinct.len() > u32::MAX as usize {
			return Err(LookupError::Internal(format!(
				"column `{}` has {} distinct values, more than surrogate ids can address",
				column.name,
				distinct.len()
			)));
		}

		let values: Vec<Value> = distinct.into_iter().collect();
		let ids = values.iter().enumerate().map(|(rank, value)| (value.clone(), SurrogateId(rank as u32))).collect();

		trace!(column = %column.name, ty = %column.get_type(), distinct = values.len(), "dictionary built");

		Ok(Self {
			column: column.name.clone(),
			ty: column.get_type(),
			values,
			ids,
		})
	}

	pub fn column(&self) -> &str {
		&self.column
	}

	/// Type of the values the ids were assigned to.
	pub fn ty(&self) -> Type {
		self.ty
	}

	pub fn id_of(&self, value: &Value) -> Option<SurrogateId> {
		self.ids.get(value).copied()
	}

	pub fn value_of(&self, id: SurrogateId) -> Option<&Value> {
		self.values.get(id.0 as usize)
	}

	/// Distinct values in ascending order; position equals rank.
	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
