// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use reifydb_type::{Type, Value};
use tracing::trace;

use crate::Coercion;

/// Reconciles a query value with the type a key column's ids were assigned to.
///
/// Returns `None` when the value cannot address the column. Under
/// [`Coercion::Lenient`] a number addressing a text column is rendered to
/// text, and INT8/FLOAT8 convert into each other when exact.
pub(crate) fn coerce(value: &Value, target: Type, coercion: Coercion) -> Option<Cow<'_, Value>> {
	let actual = value.get_type();
	if actual == target {
		return Some(Cow::Borrowed(value));
	}

	match coercion {
		Coercion::Strict => None,
		Coercion::Lenient if actual.is_number() => {
			let converted = value.cast(target).ok()?;
			trace!(from = %actual, to = %target, %value, %converted, "coerced query value");
			Some(Cow::Owned(converted))
		}
		Coercion::Lenient => None,
	}
}
