// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response tiering and caching for the Campus AI assistant.
//!
//! [`AssistantService`] answers chat turns in three domains:
//! - **Course**: questions about one course, enriched from the course catalog,
//!   with a deterministic fast path for outline requests
//! - **General**: university-life questions
//! - **Academic**: questions about a student's own performance, never cached
//!
//! Every turn is classified, routed to a model tier, and answered either from
//! the response cache, the AI provider, or a canned fallback.

pub mod enrich;
pub mod fallback;
pub mod outline;
pub mod prompt;
pub mod service;
pub mod suggestions;

pub use enrich::enrich_course_context;
pub use fallback::canned_reply;
pub use outline::format_outline;
pub use service::{AssistantService, ChatRequest};
