// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned replies used when no provider answer is available.

const COURSE_REPLY: &str = "I'd be happy to help you with course-related questions! Based on the course context, I can provide information about the syllabus, assignments, and study materials. What specific aspect would you like to know more about?";

const STUDY_REPLY: &str = "Here are some effective study strategies: 1) Create a structured study schedule, 2) Use active learning techniques like summarizing and teaching concepts to others, 3) Take regular breaks using the Pomodoro technique, and 4) Form study groups with classmates. Would you like me to elaborate on any of these strategies?";

const PERFORMANCE_REPLY: &str = "Based on your academic performance data, I can see areas where you're excelling and others that might need more attention. Let me analyze your current progress and provide personalized recommendations to help improve your overall academic performance.";

const GREETING_REPLY: &str = "I'm here to help you with your academic journey! Whether you need assistance with course content, study strategies, or academic planning, I'm ready to provide personalized guidance. What would you like to discuss?";

/// Pick a canned reply by keywords in the user's message. First match wins.
pub fn canned_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["course", "syllabus"]) {
        COURSE_REPLY
    } else if has(&["study", "help"]) {
        STUDY_REPLY
    } else if has(&["grade", "performance"]) {
        PERFORMANCE_REPLY
    } else {
        GREETING_REPLY
    }
}
