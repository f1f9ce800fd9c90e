// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tier presets, cost estimation, and confidence scoring.
//!
//! This crate provides:
//! - **Tier table**: the fixed model, token cap, temperature, and price for each tier
//! - **Cost estimation**: USD cost of a completed call from its total token count
//! - **Confidence**: heuristic reply confidence from tier and complexity

pub mod confidence;
pub mod pricing;

pub use confidence::{
    CACHED_COURSE_CONFIDENCE, CACHED_GENERAL_CONFIDENCE, OUTLINE_CONFIDENCE, confidence,
};
pub use pricing::{ModelTierConfig, estimate_cost, tier_config};
