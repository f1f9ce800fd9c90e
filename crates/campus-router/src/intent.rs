// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Narrow intent detection: which questions are worth caching, and which are
//! literal requests for a course outline.

use std::sync::LazyLock;

use regex::RegexSet;

use crate::classifier::{ChatDomain, case_insensitive_set};

static COURSE_CACHEABLE: LazyLock<RegexSet> = LazyLock::new(|| {
    case_insensitive_set(&[
        r"syllabus|outline|schedule|deadline",
        r"instructor.*name|office.*hours",
        r"assignment.*due|exam.*date",
        r"what.*is.*course.*about",
        r"course.*description|course.*overview",
    ])
});

static GENERAL_CACHEABLE: LazyLock<RegexSet> = LazyLock::new(|| {
    case_insensitive_set(&[
        r"study.*tips|time.*management|note.*taking",
        r"library.*hours|student.*services|campus.*resources",
        r"basic.*advice|general.*guidance",
    ])
});

// Exact phrasings only; "tell me about the outline and exams" is not a match.
static OUTLINE_REQUEST: LazyLock<RegexSet> = LazyLock::new(|| {
    case_insensitive_set(&[
        r"^(show me |get |what is )?(the )?course outline$",
        r"^(show me |get |what is )?(the )?syllabus$",
        r"^course structure$",
        r"^what topics are covered$",
    ])
});

/// Whether answers to `message` may be served from and stored in the cache.
/// Academic answers depend on the student profile and are never cacheable.
pub fn is_cacheable(domain: ChatDomain, message: &str) -> bool {
    match domain {
        ChatDomain::Course => COURSE_CACHEABLE.is_match(message),
        ChatDomain::General => GENERAL_CACHEABLE.is_match(message),
        ChatDomain::Academic => false,
    }
}

/// Whether `message` is a literal request for the course outline.
pub fn is_outline_request(message: &str) -> bool {
    OUTLINE_REQUEST.is_match(message.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_cacheable_questions() {
        for msg in [
            "Can I see the syllabus?",
            "What are the office hours?",
            "When is the exam date?",
            "what is this course about",
            "give me a course overview",
        ] {
            assert!(is_cacheable(ChatDomain::Course, msg), "{msg}");
        }
        assert!(!is_cacheable(ChatDomain::Course, "explain pointers to me"));
    }

    #[test]
    fn general_cacheable_questions() {
        assert!(is_cacheable(ChatDomain::General, "any study tips for finals?"));
        assert!(is_cacheable(ChatDomain::General, "Library hours on Sunday"));
        assert!(!is_cacheable(ChatDomain::General, "I feel homesick"));
    }

    #[test]
    fn academic_is_never_cacheable() {
        assert!(!is_cacheable(ChatDomain::Academic, "study tips"));
    }

    #[test]
    fn outline_requests_match_exact_phrasings() {
        for msg in [
            "course outline",
            "Course Outline",
            "show me the course outline",
            "get course outline",
            "what is the syllabus",
            "  syllabus  ",
            "course structure",
            "What topics are covered",
        ] {
            assert!(is_outline_request(msg), "{msg}");
        }
    }

    #[test]
    fn outline_requests_reject_general_intent() {
        for msg in [
            "what is in the course outline for week 3",
            "course outline?",
            "show me the outline",
            "tell me about the syllabus and exams",
        ] {
            assert!(!is_outline_request(msg), "{msg}");
        }
    }
}
