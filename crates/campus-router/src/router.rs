// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-tier routing.
//!
//! Orchestrates tier selection: explicit user mode > domain default mode >
//! classified complexity.

use campus_config::model::RoutingConfig;
use campus_core::UserMode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::classifier::{
    AcademicSignals, ChatDomain, TaskComplexity, classify, classify_academic,
};

/// One of the three fixed cost/quality presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelTier {
    Cheap,
    Balanced,
    Smart,
}

impl ModelTier {
    /// How many trailing history messages fit in a prompt for this tier.
    pub fn history_limit(self) -> usize {
        match self {
            ModelTier::Cheap => 6,
            ModelTier::Balanced => 10,
            ModelTier::Smart => 20,
        }
    }
}

/// Resolve a complexity and user mode to a tier.
///
/// `Fast` and `Smart` override the complexity entirely.
pub fn select_tier(complexity: TaskComplexity, mode: UserMode) -> ModelTier {
    match mode {
        UserMode::Fast => ModelTier::Cheap,
        UserMode::Smart => ModelTier::Smart,
        UserMode::Balanced => match complexity {
            TaskComplexity::Simple => ModelTier::Cheap,
            TaskComplexity::Moderate => ModelTier::Balanced,
            TaskComplexity::Complex => ModelTier::Smart,
        },
    }
}

/// Outcome of routing one message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingDecision {
    pub domain: ChatDomain,
    pub complexity: TaskComplexity,
    pub mode: UserMode,
    pub tier: ModelTier,
}

/// Classifies messages and picks a tier, filling in the configured default
/// user mode when the caller does not supply one.
#[derive(Debug, Clone)]
pub struct ModelRouter {
    config: RoutingConfig,
}

impl ModelRouter {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// The mode used for `domain` when the caller leaves it unspecified.
    pub fn default_mode(&self, domain: ChatDomain) -> UserMode {
        match domain {
            ChatDomain::Academic => self.config.academic_user_mode,
            ChatDomain::Course | ChatDomain::General => self.config.default_user_mode,
        }
    }

    /// Route a message. `signals` is only consulted for academic questions.
    pub fn route(
        &self,
        domain: ChatDomain,
        message: &str,
        signals: Option<&AcademicSignals>,
        mode: Option<UserMode>,
    ) -> RoutingDecision {
        let complexity = match domain {
            ChatDomain::Academic => {
                classify_academic(message, &signals.copied().unwrap_or_default())
            }
            ChatDomain::Course | ChatDomain::General => classify(domain, message),
        };
        let mode = mode.unwrap_or_else(|| self.default_mode(domain));
        let tier = select_tier(complexity, mode);

        debug!(
            domain = %domain,
            complexity = %complexity,
            mode = %mode,
            tier = %tier,
            "routed message"
        );

        RoutingDecision {
            domain,
            complexity,
            mode,
            tier,
        }
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::new(RoutingConfig::default())
    }
}
