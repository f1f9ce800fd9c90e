// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response caching for the Campus assistant.
//!
//! Keys are derived from the chat domain, a context id, and a short hash of
//! the normalized message. Entries expire after a fixed TTL and the store
//! evicts in insertion order once full.

pub mod key;
pub mod store;

pub use key::{cache_key, hash_message};
pub use store::{CacheEntry, ResponseCache};
