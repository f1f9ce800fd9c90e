// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The assistant service: routing, caching, prompt assembly, and provider
//! calls for each chat domain.

use std::sync::Arc;
use std::time::Duration;

use campus_cache::{ResponseCache, cache_key};
use campus_config::CampusConfig;
use campus_core::{
    ChatContext, ChatReply, CompletionProvider, CompletionRequest, ConversationMessage,
    CourseCatalog, CourseContext, StudentContext, SystemClock, UserMode,
};
use campus_cost::{
    CACHED_COURSE_CONFIDENCE, CACHED_GENERAL_CONFIDENCE, OUTLINE_CONFIDENCE, confidence,
    estimate_cost, tier_config,
};
use campus_router::{
    AcademicSignals, ChatDomain, ModelRouter, RoutingDecision, is_cacheable, is_outline_request,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::enrich::enrich_course_context;
use crate::fallback::canned_reply;
use crate::outline::{OUTLINE_MODEL, OUTLINE_SUGGESTIONS, format_outline};
use crate::prompt;
use crate::suggestions;

/// Context id used in cache keys for general questions.
const GENERAL_CACHE_CONTEXT: &str = "university";

/// One inbound chat turn.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: ChatContext,
    #[serde(default)]
    pub history: Vec<ConversationMessage>,
    #[serde(default)]
    pub user_mode: Option<UserMode>,
}

/// Text obtained for a prompt, and whether a provider produced it.
enum Acquired {
    Generated { content: String, total_tokens: u64 },
    Fallback(&'static str),
}

/// Produces [`ChatReply`]s for course, general, and academic questions.
///
/// Never fails: provider errors and a missing provider both degrade to a
/// canned reply.
pub struct AssistantService {
    router: ModelRouter,
    provider: Option<Arc<dyn CompletionProvider>>,
    cache: Arc<ResponseCache>,
    catalog: Option<Arc<dyn CourseCatalog>>,
}

impl AssistantService {
    /// Create a service around an existing cache.
    ///
    /// With `provider` set to `None` every generated answer is a canned reply.
    pub fn new(
        config: &CampusConfig,
        provider: Option<Arc<dyn CompletionProvider>>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        if provider.is_none() {
            warn!("no AI provider configured; replies will use canned fallback text");
        }
        Self {
            router: ModelRouter::new(config.routing.clone()),
            provider,
            cache,
            catalog: None,
        }
    }

    /// Create a service with a wall-clock cache sized from `[cache]`.
    pub fn from_config(
        config: &CampusConfig,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Self {
        let cache = ResponseCache::new(
            Duration::from_millis(config.cache.ttl_ms),
            config.cache.max_entries,
            Arc::new(SystemClock),
        );
        Self::new(config, provider, Arc::new(cache))
    }

    /// Enrich course contexts from `catalog` before answering.
    pub fn with_catalog(mut self, catalog: Arc<dyn CourseCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Answer one chat turn, dispatching on its context.
    pub async fn generate(&self, request: ChatRequest) -> ChatReply {
        let ChatRequest {
            message,
            context,
            history,
            user_mode,
        } = request;

        match context {
            ChatContext::Course(ctx) => {
                self.generate_course_response(&message, ctx, &history, user_mode)
                    .await
            }
            ChatContext::Student(ctx) => {
                self.generate_academic_response(&message, &ctx, &history, user_mode)
                    .await
            }
            ChatContext::General => {
                self.generate_general_response(&message, &history, user_mode)
                    .await
            }
        }
    }

    /// Answer a course-specific question.
    ///
    /// Literal outline requests are answered from course data when an outline
    /// is known. First-turn cacheable questions go through the cache.
    pub async fn generate_course_response(
        &self,
        message: &str,
        ctx: CourseContext,
        history: &[ConversationMessage],
        user_mode: Option<UserMode>,
    ) -> ChatReply {
        let ctx = match &self.catalog {
            Some(catalog) => enrich_course_context(catalog.as_ref(), ctx).await,
            None => ctx,
        };

        if is_outline_request(message) && ctx.non_empty_outline().is_some() {
            info!(course_code = %ctx.course_code, "answering outline request from course data");
            return ChatReply {
                response: format_outline(&ctx),
                confidence: OUTLINE_CONFIDENCE,
                sources: suggestions::course_sources(&ctx),
                suggestions: OUTLINE_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
                cached: false,
                model: OUTLINE_MODEL.to_string(),
                tokens_used: Some(0),
                estimated_cost: Some(0.0),
            };
        }

        let decision = self
            .router
            .route(ChatDomain::Course, message, None, user_mode);
        let cacheable = history.is_empty() && is_cacheable(ChatDomain::Course, message);
        let key = cache_key(ChatDomain::Course, &ctx.course_code, message);

        let hit = if cacheable { self.cache.get(&key) } else { None };
        if let Some(entry) = hit {
            debug!(key = %key, "course cache hit");
            return ChatReply {
                response: entry.content,
                confidence: CACHED_COURSE_CONFIDENCE,
                sources: suggestions::course_sources(&ctx),
                suggestions: suggestions::course_suggestions(&ctx, message),
                cached: true,
                model: entry.model,
                tokens_used: None,
                estimated_cost: None,
            };
        }

        let system = prompt::course_system_prompt(&ctx, history, decision.complexity);
        let messages = prompt::assemble(system, history, decision.tier, message);
        let acquired = self.acquire(messages, &decision, message).await;

        if let (true, Acquired::Generated { content, .. }) = (cacheable, &acquired) {
            self.cache
                .insert(key, content.clone(), tier_config(decision.tier).name);
        }

        build_reply(
            acquired,
            &decision,
            suggestions::course_sources(&ctx),
            suggestions::course_suggestions(&ctx, message),
        )
    }

    /// Answer a general university-life question.
    pub async fn generate_general_response(
        &self,
        message: &str,
        history: &[ConversationMessage],
        user_mode: Option<UserMode>,
    ) -> ChatReply {
        let decision = self
            .router
            .route(ChatDomain::General, message, None, user_mode);
        let cacheable = is_cacheable(ChatDomain::General, message);
        let key = cache_key(ChatDomain::General, GENERAL_CACHE_CONTEXT, message);

        let hit = if cacheable { self.cache.get(&key) } else { None };
        if let Some(entry) = hit {
            debug!(key = %key, "general cache hit");
            return ChatReply {
                response: entry.content,
                confidence: CACHED_GENERAL_CONFIDENCE,
                sources: suggestions::general_sources(),
                suggestions: suggestions::general_suggestions(message),
                cached: true,
                model: entry.model,
                tokens_used: None,
                estimated_cost: None,
            };
        }

        let system = prompt::general_system_prompt(decision.complexity);
        let messages = prompt::assemble(system, history, decision.tier, message);
        let acquired = self.acquire(messages, &decision, message).await;

        if let (true, Acquired::Generated { content, .. }) = (cacheable, &acquired) {
            self.cache
                .insert(key, content.clone(), tier_config(decision.tier).name);
        }

        build_reply(
            acquired,
            &decision,
            suggestions::general_sources(),
            suggestions::general_suggestions(message),
        )
    }

    /// Answer a question about one student's academic performance. Never
    /// cached.
    pub async fn generate_academic_response(
        &self,
        message: &str,
        ctx: &StudentContext,
        history: &[ConversationMessage],
        user_mode: Option<UserMode>,
    ) -> ChatReply {
        let signals = AcademicSignals::from(ctx);
        let decision = self
            .router
            .route(ChatDomain::Academic, message, Some(&signals), user_mode);

        let system = prompt::academic_system_prompt(ctx, decision.complexity);
        let messages = prompt::assemble(system, history, decision.tier, message);
        let acquired = self.acquire(messages, &decision, message).await;

        build_reply(
            acquired,
            &decision,
            suggestions::academic_sources(),
            suggestions::academic_suggestions(ctx),
        )
    }

    async fn acquire(
        &self,
        messages: Vec<ConversationMessage>,
        decision: &RoutingDecision,
        message: &str,
    ) -> Acquired {
        let Some(provider) = &self.provider else {
            debug!("no provider, using canned reply");
            return Acquired::Fallback(canned_reply(message));
        };

        let tier = tier_config(decision.tier);
        let request = CompletionRequest {
            model: tier.name.to_string(),
            messages,
            max_tokens: tier.max_tokens,
            temperature: tier.temperature,
        };

        match provider.complete(request).await {
            Ok(response) => Acquired::Generated {
                content: response.content,
                total_tokens: response.usage.total_tokens,
            },
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    model = tier.name,
                    error = %e,
                    "provider call failed, using canned reply"
                );
                Acquired::Fallback(canned_reply(message))
            }
        }
    }
}

fn build_reply(
    acquired: Acquired,
    decision: &RoutingDecision,
    sources: Vec<String>,
    suggestions: Vec<String>,
) -> ChatReply {
    let tier = tier_config(decision.tier);
    let (response, tokens_used, estimated_cost) = match acquired {
        Acquired::Generated {
            content,
            total_tokens,
        } => {
            // A zero count means the provider reported no usage.
            let cost = (total_tokens > 0).then(|| estimate_cost(total_tokens, tier));
            (content, Some(total_tokens), cost)
        }
        Acquired::Fallback(text) => (text.to_string(), None, None),
    };

    ChatReply {
        response,
        confidence: confidence(decision.tier, decision.complexity),
        sources,
        suggestions,
        cached: false,
        model: tier.name.to_string(),
        tokens_used,
        estimated_cost,
    }
}
