// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Campus integration tests.
//!
//! Deterministic stand-ins for the assistant's collaborators so tests run
//! without network access or wall-clock dependence.
//!
//! # Components
//!
//! - [`MockProvider`] - Completion provider with queued replies and request capture
//! - [`ManualClock`] - Clock that only moves when told to
//! - [`InMemoryCatalog`] - Course catalog backed by a map, optionally failing

pub mod catalog;
pub mod clock;
pub mod mock_provider;

pub use catalog::InMemoryCatalog;
pub use clock::ManualClock;
pub use mock_provider::MockProvider;
