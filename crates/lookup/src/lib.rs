// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Composite multi-column lookup index.
//!
//! An [`Index`] is built once from a [`Table`](reifydb_type::Table) and a
//! declaration of key and value columns. Every distinct value of a declared
//! column gets a surrogate id (its rank within the column); a row's key is the
//! tuple of its key-column ids and must be unique across the table. Lookups
//! translate the caller's key values into ids and resolve them through the
//! forward index and the per-column reverse indexes, so a query costs a few
//! hash probes instead of a table scan.
//!
//! ```ignore
//! let index = Index::build(&table, &["rating", "maturity"], &["spread"])?;
//! let result = index.lookup(&LookupRequest::new().tuple([Value::utf8("B"), Value::int8(2)]))?;
//! assert_eq!(result.column("spread").unwrap()[0], Some(Value::utf8("Y")));
//! ```
//!
//! The index is immutable after construction and can be shared between
//! threads without locking.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod builder;
pub mod composite;
pub mod config;
pub mod dictionary;
mod error;
mod index;
pub mod query;

pub use composite::{CompositeKey, CompositeValue};
pub use config::{CardinalityCheck, Coercion, IndexConfig, MissingKey};
pub use dictionary::{Dictionary, SurrogateId};
pub use error::{ColumnRole, ErrorKind, LookupError};
pub use index::Index;
pub use query::{KeyFields, LookupRequest, LookupResult};

pub type Result<T> = std::result::Result<T, LookupError>;
