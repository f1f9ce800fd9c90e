// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Follow-up suggestions and cited sources attached to every reply.

use campus_core::{CourseContext, StudentContext};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Source documents cited for a course answer.
pub fn course_sources(ctx: &CourseContext) -> Vec<String> {
    let code = if ctx.course_code.is_empty() {
        "course"
    } else {
        ctx.course_code.as_str()
    };
    let instructor_file = match ctx.instructor.as_deref().filter(|i| !i.is_empty()) {
        // Every space becomes `_`, not just the first.
        Some(name) => format!("{}_notes.md", name.to_lowercase().replace(' ', "_")),
        None => "instructor_notes.md".to_string(),
    };
    vec![
        format!("{code}_syllabus.pdf"),
        instructor_file,
        format!("course_outline_{code}.pdf"),
    ]
}

pub fn general_sources() -> Vec<String> {
    owned(&["study_guides.pdf", "academic_resources.md"])
}

pub fn academic_sources() -> Vec<String> {
    owned(&["academic_performance_data", "study_analytics"])
}

pub fn course_suggestions(ctx: &CourseContext, message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["outline", "topics"]) {
        owned(&[
            "Would you like detailed explanations of specific topics?",
            "Need study strategies for these topics?",
            "Want to know how topics connect to each other?",
        ])
    } else if has(&["description", "detail"]) {
        owned(&[
            "Would you like practical examples for these concepts?",
            "Need help with study materials for this topic?",
            "Want to know how this applies in real projects?",
        ])
    } else if has(&["exam", "test"]) {
        owned(&[
            "Would you like exam preparation strategies?",
            "Need help with practice questions?",
            "Want tips for effective revision?",
        ])
    } else if has(&["assignment", "project"]) {
        owned(&[
            "Need help with assignment planning?",
            "Want guidance on project structure?",
            "Need tips for time management?",
        ])
    } else {
        vec![
            format!("Would you like study tips for {}?", ctx.course_name),
            "Need help understanding specific concepts?".to_string(),
            "Want to know about assessment strategies?".to_string(),
        ]
    }
}

pub fn general_suggestions(message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["study", "learning"]) {
        owned(&[
            "Would you like specific study techniques?",
            "Need help with time management?",
            "Want to know about study groups?",
        ])
    } else if has(&["time", "schedule"]) {
        owned(&[
            "Would you like a time management template?",
            "Need help prioritizing tasks?",
            "Want tips for work-life balance?",
        ])
    } else {
        owned(&[
            "Would you like more specific guidance?",
            "Need help with particular subjects?",
            "Want to explore student resources?",
        ])
    }
}

/// Suggestions derived from the student profile. Zero values count as
/// unrecorded and trigger nothing.
pub fn academic_suggestions(ctx: &StudentContext) -> Vec<String> {
    let mut suggestions = Vec::new();

    if ctx.current_gpa.is_some_and(|g| g > 0.0 && g < 3.0) {
        suggestions.push("Focus on improving grades in struggling subjects");
    }
    if ctx.study_hours.is_some_and(|h| h > 0.0 && h < 10.0) {
        suggestions.push("Consider increasing weekly study hours");
    }
    if ctx.struggling_subjects.as_ref().is_some_and(|s| !s.is_empty()) {
        suggestions.push("Get additional help for challenging subjects");
    }
    if ctx.active_forum_posts.is_some_and(|p| p > 0 && p < 5) {
        suggestions.push("Increase forum participation for better learning");
    }

    if suggestions.is_empty() {
        suggestions = vec![
            "Keep up the good work!",
            "Consider joining study groups",
            "Utilize office hours with instructors",
        ];
    }
    owned(&suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_sources_with_instructor() {
        let ctx = CourseContext {
            course_code: "COMP1010".into(),
            instructor: Some("Dr Ada Lovelace".into()),
            ..Default::default()
        };
        assert_eq!(
            course_sources(&ctx),
            vec![
                "COMP1010_syllabus.pdf",
                "dr_ada_lovelace_notes.md",
                "course_outline_COMP1010.pdf"
            ]
        );
    }

    #[test]
    fn course_sources_without_code_or_instructor() {
        assert_eq!(
            course_sources(&CourseContext::default()),
            vec![
                "course_syllabus.pdf",
                "instructor_notes.md",
                "course_outline_course.pdf"
            ]
        );
    }

    #[test]
    fn course_suggestions_by_keyword() {
        let ctx = CourseContext {
            course_name: "Databases".into(),
            ..Default::default()
        };
        assert_eq!(
            course_suggestions(&ctx, "Which topics are in week 2?")[0],
            "Would you like detailed explanations of specific topics?"
        );
        assert_eq!(
            course_suggestions(&ctx, "when is the exam")[0],
            "Would you like exam preparation strategies?"
        );
        assert_eq!(
            course_suggestions(&ctx, "project groups?")[1],
            "Want guidance on project structure?"
        );
        let defaults = course_suggestions(&ctx, "hmm");
        assert_eq!(defaults[0], "Would you like study tips for Databases?");
        assert_eq!(defaults.len(), 3);
    }

    #[test]
    fn general_suggestions_by_keyword() {
        assert_eq!(
            general_suggestions("learning styles")[0],
            "Would you like specific study techniques?"
        );
        assert_eq!(
            general_suggestions("my schedule is packed")[0],
            "Would you like a time management template?"
        );
        assert_eq!(
            general_suggestions("where is the gym")[2],
            "Want to explore student resources?"
        );
    }

    #[test]
    fn academic_suggestions_from_profile() {
        let ctx = StudentContext {
            current_gpa: Some(2.7),
            study_hours: Some(6.0),
            struggling_subjects: Some(vec!["Calculus".into()]),
            active_forum_posts: Some(1),
            ..Default::default()
        };
        assert_eq!(
            academic_suggestions(&ctx),
            vec![
                "Focus on improving grades in struggling subjects",
                "Consider increasing weekly study hours",
                "Get additional help for challenging subjects",
                "Increase forum participation for better learning",
            ]
        );
    }

    #[test]
    fn academic_defaults_for_strong_profile() {
        let ctx = StudentContext {
            current_gpa: Some(3.8),
            study_hours: Some(20.0),
            active_forum_posts: Some(0),
            ..Default::default()
        };
        assert_eq!(academic_suggestions(&ctx)[0], "Keep up the good work!");
    }
}
