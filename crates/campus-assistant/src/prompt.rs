// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly.
//!
//! Every assembled prompt is one system message, the tier-capped history, and
//! the current user message, in that order.

use campus_core::{ConversationMessage, CourseContext, StudentContext};
use campus_router::{ModelTier, TaskComplexity};

/// Synthetic stand-in for history dropped from cheap-tier prompts.
pub const HISTORY_SUMMARY: &str = "Previous conversation summary: User has been asking about course content and received helpful responses.";

const DIGEST_MESSAGES: usize = 6;
const DIGEST_CHARS: usize = 100;

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

fn join_or<'a>(items: Option<&'a [String]>, fallback: &'a str) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => fallback.to_string(),
    }
}

/// Course facts block for the course system prompt.
pub fn course_context_prompt(ctx: &CourseContext) -> String {
    let assessment = match ctx.assessment.as_deref() {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(|a| format!("{} ({}%)", a.kind, a.percentage))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "No assessment info available".to_string(),
    };

    format!(
        "Course Information:\n\
         - Code: {}\n\
         - Name: {}\n\
         - Instructor: {}\n\
         - Description: {}\n\
         - Outline: {}\n\
         - Assessment: {}",
        or_na(&ctx.course_code),
        or_na(&ctx.course_name),
        or_na(ctx.instructor.as_deref().unwrap_or_default()),
        or_na(ctx.description.as_deref().unwrap_or_default()),
        join_or(ctx.outline.as_deref(), "No outline available"),
        assessment,
    )
}

/// Short digest of the last few history messages, each clipped to 100 chars.
pub fn conversation_digest(history: &[ConversationMessage]) -> String {
    if history.is_empty() {
        return "This is the start of a new conversation.".to_string();
    }

    let start = history.len().saturating_sub(DIGEST_MESSAGES);
    let lines: Vec<String> = history[start..]
        .iter()
        .map(|msg| {
            let clipped: String = msg.content.chars().take(DIGEST_CHARS).collect();
            let ellipsis = if msg.content.chars().count() > DIGEST_CHARS {
                "..."
            } else {
                ""
            };
            format!("{}: {clipped}{ellipsis}", msg.role)
        })
        .collect();

    format!("Recent conversation context:\n{}", lines.join("\n"))
}

/// Student profile block for the academic system prompt.
pub fn student_context_prompt(ctx: &StudentContext) -> String {
    // A zero GPA means "not recorded".
    let gpa = ctx
        .current_gpa
        .filter(|g| *g != 0.0)
        .map_or_else(|| "Not available".to_string(), |g| g.to_string());
    let study_hours = ctx.study_hours.unwrap_or(0.0);

    format!(
        "Student Profile:\n\
         - Student ID: {}\n\
         - Current GPA: {gpa}\n\
         - Enrolled Courses: {}\n\
         - Completed Courses: {}\n\
         - Struggling Subjects: {}\n\
         - Weekly Study Hours: {study_hours}\n\
         - Forum Participation: {} posts",
        or_na(&ctx.student_id),
        join_or(ctx.enrolled_courses.as_deref(), "None"),
        join_or(ctx.completed_courses.as_deref(), "None"),
        join_or(ctx.struggling_subjects.as_deref(), "None"),
        ctx.active_forum_posts.unwrap_or(0),
    )
}

pub fn course_system_prompt(
    ctx: &CourseContext,
    history: &[ConversationMessage],
    complexity: TaskComplexity,
) -> String {
    let style = match complexity {
        TaskComplexity::Complex => "detailed, well-reasoned",
        _ => "concise, direct",
    };
    format!(
        "{}\n\n{}\n\nYou are an AI assistant helping students with course-specific questions. \
         Maintain conversation context and provide {style} responses. \
         Reference previous conversation when relevant.",
        course_context_prompt(ctx),
        conversation_digest(history),
    )
}

pub fn general_system_prompt(complexity: TaskComplexity) -> String {
    let style = match complexity {
        TaskComplexity::Complex => "comprehensive, detailed",
        _ => "concise, actionable",
    };
    format!(
        "You are a helpful AI assistant for university students. Provide {style} guidance \
         on university life, study tips, and academic success."
    )
}

pub fn academic_system_prompt(ctx: &StudentContext, complexity: TaskComplexity) -> String {
    let instruction = match complexity {
        TaskComplexity::Complex => {
            "Provide detailed analysis with specific recommendations and action plans."
        }
        _ => "Give focused, actionable advice.",
    };
    format!(
        "{}. You are an AI academic advisor. {instruction}",
        student_context_prompt(ctx)
    )
}

/// Cap history to the tier's limit, keeping the most recent messages.
///
/// Cheap-tier prompts that lose messages get a one-line summary in their
/// place.
pub fn optimize_history(
    history: &[ConversationMessage],
    tier: ModelTier,
) -> Vec<ConversationMessage> {
    let limit = tier.history_limit();
    if history.len() <= limit {
        return history.to_vec();
    }

    let tail = &history[history.len() - limit..];
    let mut optimized = Vec::with_capacity(limit + 1);
    if tier == ModelTier::Cheap {
        optimized.push(ConversationMessage::system(HISTORY_SUMMARY));
    }
    optimized.extend_from_slice(tail);
    optimized
}

/// Build the full message list sent to the provider.
pub fn assemble(
    system_prompt: String,
    history: &[ConversationMessage],
    tier: ModelTier,
    message: &str,
) -> Vec<ConversationMessage> {
    let mut messages = vec![ConversationMessage::system(system_prompt)];
    messages.extend(optimize_history(history, tier));
    messages.push(ConversationMessage::user(message));
    messages
}
