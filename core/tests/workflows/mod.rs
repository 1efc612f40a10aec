// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scan workflow tests for the gatepass-core crate.
//!
//! These tests drive a [`gatepass_core::Gate`] from a raw payload to the
//! backend calls it makes, against an in-memory service and against a mock
//! HTTP server.

mod check_in;
mod http;
mod registration;
