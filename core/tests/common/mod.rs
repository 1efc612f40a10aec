// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - An in-memory event service that records the calls it receives

mod fake_service;
mod fixtures;

#[allow(unused_imports)]
pub use fake_service::{Call, FakeService};
#[allow(unused_imports)]
pub use fixtures::{event_id, test_config, test_event, test_receipt};
