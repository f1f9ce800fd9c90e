// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic reply confidence.

use campus_router::{ModelTier, TaskComplexity};

/// Confidence reported for a course answer served from the cache.
pub const CACHED_COURSE_CONFIDENCE: f64 = 0.90;
/// Confidence reported for a general answer served from the cache.
pub const CACHED_GENERAL_CONFIDENCE: f64 = 0.85;
/// Confidence reported for an outline rendered straight from course data.
pub const OUTLINE_CONFIDENCE: f64 = 0.98;

const MIN_CONFIDENCE: f64 = 0.50;
const MAX_CONFIDENCE: f64 = 0.99;

fn tier_base(tier: ModelTier) -> f64 {
    match tier {
        ModelTier::Cheap => 0.75,
        ModelTier::Balanced => 0.85,
        ModelTier::Smart => 0.95,
    }
}

fn complexity_delta(complexity: TaskComplexity) -> f64 {
    match complexity {
        TaskComplexity::Simple => 0.05,
        TaskComplexity::Moderate => 0.0,
        TaskComplexity::Complex => -0.05,
    }
}

/// Confidence for a generated reply, always within `[0.50, 0.99]`.
pub fn confidence(tier: ModelTier, complexity: TaskComplexity) -> f64 {
    (tier_base(tier) + complexity_delta(complexity)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn base_plus_delta() {
        assert!(approx(
            confidence(ModelTier::Cheap, TaskComplexity::Simple),
            0.80
        ));
        assert!(approx(
            confidence(ModelTier::Balanced, TaskComplexity::Moderate),
            0.85
        ));
        assert!(approx(
            confidence(ModelTier::Smart, TaskComplexity::Complex),
            0.90
        ));
    }

    #[test]
    fn smart_simple_is_capped() {
        // 0.95 + 0.05 = 1.00, clamped.
        assert!(approx(
            confidence(ModelTier::Smart, TaskComplexity::Simple),
            0.99
        ));
    }

    fn any_tier() -> impl Strategy<Value = ModelTier> {
        prop_oneof![
            Just(ModelTier::Cheap),
            Just(ModelTier::Balanced),
            Just(ModelTier::Smart),
        ]
    }

    fn any_complexity() -> impl Strategy<Value = TaskComplexity> {
        prop_oneof![
            Just(TaskComplexity::Simple),
            Just(TaskComplexity::Moderate),
            Just(TaskComplexity::Complex),
        ]
    }

    proptest! {
        #[test]
        fn confidence_stays_in_bounds(tier in any_tier(), complexity in any_complexity()) {
            let c = confidence(tier, complexity);
            prop_assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&c));
        }
    }
}
