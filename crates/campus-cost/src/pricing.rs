// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tier presets and cost calculation.
//!
//! Prices are blended per-million-token rates applied to the provider's
//! reported total token count:
//!
//! cheap:     gpt-3.5-turbo, 500 max tokens, temperature 0.7, $0.50/MTok
//! balanced:  gpt-4o-mini,   800 max tokens, temperature 0.7, $0.15/MTok
//! smart:     gpt-4o,       1500 max tokens, temperature 0.6, $2.50/MTok

use campus_router::ModelTier;
use serde::Serialize;

/// Fixed request parameters and price for one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelTierConfig {
    /// Provider model identifier.
    pub name: &'static str,
    /// Output token cap sent with every request.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Blended USD price per million tokens.
    pub cost_per_million_tokens: f64,
}

static CHEAP: ModelTierConfig = ModelTierConfig {
    name: "gpt-3.5-turbo",
    max_tokens: 500,
    temperature: 0.7,
    cost_per_million_tokens: 0.50,
};

static BALANCED: ModelTierConfig = ModelTierConfig {
    name: "gpt-4o-mini",
    max_tokens: 800,
    temperature: 0.7,
    cost_per_million_tokens: 0.15,
};

static SMART: ModelTierConfig = ModelTierConfig {
    name: "gpt-4o",
    max_tokens: 1500,
    temperature: 0.6,
    cost_per_million_tokens: 2.50,
};

/// Look up the preset for a tier.
pub fn tier_config(tier: ModelTier) -> &'static ModelTierConfig {
    match tier {
        ModelTier::Cheap => &CHEAP,
        ModelTier::Balanced => &BALANCED,
        ModelTier::Smart => &SMART,
    }
}

/// Estimated USD cost of a call that consumed `total_tokens`.
///
/// Formula: (tokens / 1_000_000) * price_per_million.
pub fn estimate_cost(total_tokens: u64, config: &ModelTierConfig) -> f64 {
    (total_tokens as f64 / 1_000_000.0) * config.cost_per_million_tokens
}
