// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic course-outline answers rendered straight from course data.

use std::fmt::Write;

use campus_core::CourseContext;

/// Model name reported for answers that never reached a provider.
pub const OUTLINE_MODEL: &str = "database_lookup";

pub const OUTLINE_SUGGESTIONS: [&str; 3] = [
    "Would you like more details about any specific topic?",
    "Need help with study strategies for this course?",
    "Want to know about assessment methods?",
];

const CLOSING: &str = "This course outline was retrieved from the university database. Would you like more details about any specific topic or need study guidance for this course?";

/// Render the outline answer. Sections with no data are omitted.
pub fn format_outline(ctx: &CourseContext) -> String {
    let mut out = format!("📚 **{}** ({})\n\n", ctx.course_name, ctx.course_code);

    // Writing to a String cannot fail.
    if let Some(description) = ctx.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, "**Course Description:**\n{description}\n\n");
    }

    if let Some(instructor) = ctx.instructor.as_deref().filter(|i| !i.is_empty()) {
        let _ = write!(out, "**Instructor:** {instructor}\n\n");
    }

    if let Some(outline) = ctx.non_empty_outline() {
        out.push_str("**Course Outline:**\n");
        for (i, topic) in outline.iter().enumerate() {
            let _ = writeln!(out, "{}. {topic}", i + 1);
        }
        out.push('\n');
    }

    if let Some(assessment) = ctx.assessment.as_deref().filter(|a| !a.is_empty()) {
        out.push_str("**Assessment Breakdown:**\n");
        for item in assessment {
            let _ = writeln!(out, "• {}: {}%", item.kind, item.percentage);
        }
        out.push('\n');
    }

    out.push_str(CLOSING);
    out
}
