// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{TableError, TypeError};
pub use table::{Column, ColumnData, Table};
pub use value::{OrderedF64, Type, Value};

mod error;
pub mod table;
pub mod value;

pub type Result<T> = std::result::Result<T, TypeError>;
