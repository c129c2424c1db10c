// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Composite tokens: the ordered tuple of per-column surrogate ids of a row.
//!
//! A token holds one id per declared column, so two tokens over the same
//! column list are equal exactly when every component is equal. The textual
//! form concatenates the `"<rank>_"` renderings of the components.

use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

use crate::dictionary::SurrogateId;

macro_rules! composite {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
		pub struct $name(SmallVec<[SurrogateId; 4]>);

		impl $name {
			pub fn ids(&self) -> &[SurrogateId] {
				&self.0
			}

			pub fn len(&self) -> usize {
				self.0.len()
			}

			pub fn is_empty(&self) -> bool {
				self.0.is_empty()
			}
		}

		impl FromIterator<SurrogateId> for $name {
			fn from_iter<I: IntoIterator<Item = SurrogateId>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				for id in &self.0 {
					Display::fmt(id, f)?;
				}
				Ok(())
			}
		}
	};
}

composite!(
	/// Ids of a row's key columns, in declared key order. Unique per row.
	CompositeKey
);

composite!(
	/// Ids of a row's value columns, in declared value order. Rows with equal
	/// value tuples share a token.
	CompositeValue
);

#[cfg(test)]
mod tests {
	use reifydb_type::{Column, Value};

	use super::*;
	use crate::Dictionary;

	#[test]
	fn test_display_concatenates_ranks() {
		let rating = Dictionary::build(&Column::utf8("rating", ["A", "B", "C"])).unwrap();
		let maturity = Dictionary::build(&Column::int8("maturity", [1, 2, 3, 5])).unwrap();

		let key: CompositeKey = [
			rating.id_of(&Value::utf8("C")).unwrap(),
			maturity.id_of(&Value::int8(5)).unwrap(),
		]
		.into_iter()
		.collect();

		assert_eq!(key.to_string(), "2_3_");
		assert_eq!(key.len(), 2);
	}

	#[test]
	fn test_no_concatenation_collision() {
		let wide = Dictionary::build(&Column::int8("a", 0..12)).unwrap();
		let narrow = Dictionary::build(&Column::int8("b", 0..12)).unwrap();

		// ranks (1, 11) and (11, 1) must stay apart
		let left: CompositeKey =
			[wide.id_of(&Value::int8(1)).unwrap(), narrow.id_of(&Value::int8(11)).unwrap()].into_iter().collect();
		let right: CompositeKey =
			[wide.id_of(&Value::int8(11)).unwrap(), narrow.id_of(&Value::int8(1)).unwrap()].into_iter().collect();

		assert_ne!(left, right);
		assert_ne!(left.to_string(), right.to_string());
	}
}
