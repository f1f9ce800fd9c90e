// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Campus AI assistant.
//!
//! This crate provides the error type, the conversation and context types,
//! and the collaborator traits (completion provider, course catalog, clock)
//! that the rest of the workspace is written against.

pub mod error;
pub mod redact;
pub mod traits;
pub mod types;

pub use error::CampusError;
pub use traits::{Clock, CompletionProvider, CourseCatalog, SystemClock};
pub use types::{
    AssessmentItem, ChatContext, ChatReply, CompletionRequest, CompletionResponse,
    ConversationMessage, CourseContext, CourseRecord, Role, StudentContext, TokenUsage, UserMode,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_error_variants_render() {
        let config = CampusError::Config("bad".into());
        assert_eq!(config.to_string(), "configuration error: bad");

        let provider = CampusError::provider("503");
        assert_eq!(provider.to_string(), "provider error: 503");

        let catalog = CampusError::Catalog {
            message: "db down".into(),
            source: Some(Box::new(std::io::Error::other("refused"))),
        };
        assert_eq!(catalog.to_string(), "catalog error: db down");

        let timeout = CampusError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        assert!(timeout.to_string().contains("30s"));
    }

    #[test]
    fn role_round_trips_through_strum_and_serde() {
        use std::str::FromStr;

        for role in [Role::User, Role::Assistant, Role::System] {
            let s = role.to_string();
            assert_eq!(Role::from_str(&s).expect("should parse back"), role);
        }

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn course_context_uses_camel_case() {
        let json = serde_json::json!({
            "courseCode": "CS101",
            "courseName": "Intro to Programming",
            "outline": ["Variables", "Loops"],
            "assessment": [{"type": "Final Exam", "percentage": 40}]
        });
        let ctx: CourseContext = serde_json::from_value(json).unwrap();
        assert_eq!(ctx.course_code, "CS101");
        assert_eq!(ctx.non_empty_outline().map(<[String]>::len), Some(2));
        assert_eq!(ctx.assessment.unwrap()[0].kind, "Final Exam");
        assert!(ctx.instructor.is_none());
    }

    #[test]
    fn empty_outline_is_treated_as_missing() {
        let ctx = CourseContext {
            outline: Some(vec![]),
            ..Default::default()
        };
        assert!(ctx.non_empty_outline().is_none());
    }

    #[test]
    fn student_context_reads_gpa_field() {
        let json = serde_json::json!({"studentId": "s1", "currentGPA": 3.2});
        let ctx: StudentContext = serde_json::from_value(json).unwrap();
        assert_eq!(ctx.current_gpa, Some(3.2));
    }

    #[test]
    fn chat_reply_omits_absent_usage() {
        let reply = ChatReply {
            response: "hi".into(),
            confidence: 0.9,
            sources: vec![],
            suggestions: vec![],
            cached: true,
            model: "gpt-4o-mini".into(),
            tokens_used: None,
            estimated_cost: None,
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert!(value.get("tokensUsed").is_none());
        assert!(value.get("estimatedCost").is_none());
        assert_eq!(value["cached"], true);
    }

    #[test]
    fn collaborator_traits_are_object_safe() {
        fn _assert_provider(_: &dyn CompletionProvider) {}
        fn _assert_catalog(_: &dyn CourseCatalog) {}
        fn _assert_clock(_: &dyn Clock) {}
    }
}
