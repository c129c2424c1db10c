// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tracing setup for tests
//!
//! Installs a fmt subscriber writing through the test harness so output is
//! captured per test. The filter comes from `RUST_LOG` and falls back to
//! `warn`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the test subscriber. Safe to call from every test.
pub fn init_tracing() {
	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
			.with_test_writer()
			.try_init();
	});
}
