// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits injected into the assistant service.

pub mod catalog;
pub mod clock;
pub mod provider;

pub use catalog::CourseCatalog;
pub use clock::{Clock, SystemClock};
pub use provider::CompletionProvider;
