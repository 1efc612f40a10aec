// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point for workflow tests.
//!
//! This module serves as the test entry point for all end-to-end scan tests.

mod common;
mod workflows;
