// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the router, cache, provider, and assistant crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Author of a conversation message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Caller-supplied cost/quality preference. Overrides automatic tier
/// selection unless `Balanced`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserMode {
    Fast,
    #[default]
    Balanced,
    Smart,
}

/// A single message in a conversation. Sequences of these are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// One weighted component of a course's assessment scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub percentage: u32,
}

impl AssessmentItem {
    pub fn new(kind: impl Into<String>, percentage: u32) -> Self {
        Self {
            kind: kind.into(),
            percentage,
        }
    }
}

/// Structured course information supplied with course-domain questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContext {
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Vec<AssessmentItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CourseContext {
    /// Returns the outline when it is present and non-empty.
    pub fn non_empty_outline(&self) -> Option<&[String]> {
        self.outline.as_deref().filter(|o| !o.is_empty())
    }
}

/// Student profile signals supplied with academic-performance questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentContext {
    #[serde(default)]
    pub student_id: String,
    #[serde(default, rename = "currentGPA", skip_serializing_if = "Option::is_none")]
    pub current_gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_courses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_courses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struggling_subjects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_forum_posts: Option<u32>,
}

/// The context a question is asked in. Selects the chat domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ChatContext {
    Course(CourseContext),
    Student(StudentContext),
    #[default]
    General,
}

/// A course row as returned by the course catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub outline: Vec<String>,
    #[serde(default)]
    pub coordinator: Option<String>,
    pub unit_load: u32,
    pub semester: u32,
    pub department: String,
}

/// Token accounting reported by the AI provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub total_tokens: u64,
}

/// A chat-completion request sent to the AI provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ConversationMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A chat-completion response from the AI provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: TokenUsage,
}

/// The assistant's answer, as handed back to the HTTP layer.
///
/// `tokens_used` and `estimated_cost` are absent when the reply came from the
/// cache or from the canned fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub confidence: f64,
    pub sources: Vec<String>,
    pub suggestions: Vec<String>,
    pub cached: bool,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}
