// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task complexity classification and model-tier routing.
//!
//! This crate provides:
//! - [`classifier`]: ordered regex rules mapping a message to a [`TaskComplexity`]
//! - [`intent`]: cacheable-question and course-outline request detection
//! - [`ModelRouter`]: resolves complexity and [`UserMode`](campus_core::UserMode)
//!   to one of the three fixed [`ModelTier`]s

pub mod classifier;
pub mod intent;
pub mod router;

pub use classifier::{AcademicSignals, ChatDomain, TaskComplexity, classify, classify_academic};
pub use intent::{is_cacheable, is_outline_request};
pub use router::{ModelRouter, ModelTier, RoutingDecision, select_tier};
