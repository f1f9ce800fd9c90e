// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic task complexity classification.
//!
//! Each chat domain has an ordered list of "complex" patterns and an ordered
//! list of "simple" patterns. Complex wins over simple; anything matching
//! neither is moderate. No network, no state.

use std::sync::LazyLock;

use campus_core::StudentContext;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reasoning depth a message appears to need.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskComplexity {
    Simple,
    Moderate,
    Complex,
}

/// Which assistant a question is addressed to. Also the cache-key domain tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatDomain {
    /// Course-specific questions.
    Course,
    /// University life and study questions.
    General,
    /// Academic-performance questions about one student.
    Academic,
}

struct PatternRules {
    complex: RegexSet,
    simple: RegexSet,
}

impl PatternRules {
    fn new(complex: &[&str], simple: &[&str]) -> Self {
        Self {
            complex: case_insensitive_set(complex),
            simple: case_insensitive_set(simple),
        }
    }

    fn classify(&self, message: &str) -> TaskComplexity {
        if self.complex.is_match(message) {
            TaskComplexity::Complex
        } else if self.simple.is_match(message) {
            TaskComplexity::Simple
        } else {
            TaskComplexity::Moderate
        }
    }
}

pub(crate) fn case_insensitive_set(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns.iter().map(|p| format!("(?i){p}"))).unwrap()
}

static COURSE_RULES: LazyLock<PatternRules> = LazyLock::new(|| {
    PatternRules::new(
        &[
            r"explain.*why|analyze|compare|evaluate|justify|critique",
            r"relationship.*between|impact.*of|implications",
            r"multi-step|algorithm|proof|derive|solve.*equation",
            r"research|citation|reference|source",
        ],
        &[
            r"what.*is|define|list|when.*due|schedule|deadline",
            r"yes.*no|true.*false|simple.*question",
            r"outline|syllabus|instructor.*name",
        ],
    )
});

static GENERAL_RULES: LazyLock<PatternRules> = LazyLock::new(|| {
    PatternRules::new(
        &[
            r"career.*planning|life.*strategy|academic.*planning",
            r"complex.*problem|multiple.*factors|comprehensive.*advice",
            r"balance.*work.*study|time.*management.*system",
        ],
        &[
            r"study.*tip|quick.*help|simple.*question",
            r"library.*hours|campus.*location|contact.*info",
            r"yes.*no|basic.*info",
        ],
    )
});

static ACADEMIC_RULES: LazyLock<PatternRules> = LazyLock::new(|| {
    PatternRules::new(
        &[
            r"academic.*plan|degree.*planning|career.*path",
            r"performance.*analysis|improvement.*strategy",
            r"course.*selection|major.*change",
        ],
        &[
            r"current.*gpa|quick.*status|basic.*info",
            r"enrolled.*courses|completed.*courses",
        ],
    )
});

/// Student-profile signals that force academic questions to `Complex`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AcademicSignals {
    pub struggling_subjects: usize,
    pub current_gpa: Option<f64>,
    pub enrolled_courses: usize,
}

impl AcademicSignals {
    /// More than 2 struggling subjects, GPA under 2.5, or more than 6 courses.
    pub fn is_complex_profile(&self) -> bool {
        self.struggling_subjects > 2
            || self.current_gpa.is_some_and(|gpa| gpa < 2.5)
            || self.enrolled_courses > 6
    }
}

impl From<&StudentContext> for AcademicSignals {
    fn from(ctx: &StudentContext) -> Self {
        Self {
            struggling_subjects: ctx.struggling_subjects.as_ref().map_or(0, Vec::len),
            current_gpa: ctx.current_gpa,
            enrolled_courses: ctx.enrolled_courses.as_ref().map_or(0, Vec::len),
        }
    }
}

/// Classify a message with the pattern rules of `domain`.
///
/// For [`ChatDomain::Academic`] this only applies the regex rules; use
/// [`classify_academic`] to include the student-profile signals.
pub fn classify(domain: ChatDomain, message: &str) -> TaskComplexity {
    match domain {
        ChatDomain::Course => COURSE_RULES.classify(message),
        ChatDomain::General => GENERAL_RULES.classify(message),
        ChatDomain::Academic => ACADEMIC_RULES.classify(message),
    }
}

/// Classify an academic question. A complex profile forces `Complex`
/// regardless of the message text.
pub fn classify_academic(message: &str, signals: &AcademicSignals) -> TaskComplexity {
    if signals.is_complex_profile() {
        return TaskComplexity::Complex;
    }
    ACADEMIC_RULES.classify(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn course_complex_phrasing() {
        for msg in [
            "Can you explain why recursion terminates?",
            "Compare quicksort and mergesort",
            "What are the implications of this theorem?",
            "Walk me through the proof",
            "Where can I find a citation for this?",
        ] {
            assert_eq!(classify(ChatDomain::Course, msg), TaskComplexity::Complex, "{msg}");
        }
    }

    #[test]
    fn course_simple_phrasing() {
        for msg in [
            "when is assignment 2 due",
            "Define polymorphism",
            "yes or no: is the final open book?",
            "who is the instructor name for this class",
        ] {
            assert_eq!(classify(ChatDomain::Course, msg), TaskComplexity::Simple, "{msg}");
        }
    }

    #[test]
    fn complex_wins_over_simple() {
        // "what ... is" is simple, "analyze" is complex.
        let msg = "what is the best way to analyze this dataset";
        assert_eq!(classify(ChatDomain::Course, msg), TaskComplexity::Complex);
    }

    #[test]
    fn course_fallthrough_is_moderate() {
        assert_eq!(
            classify(ChatDomain::Course, "help me with loops"),
            TaskComplexity::Moderate
        );
    }

    #[test]
    fn general_rules() {
        assert_eq!(
            classify(ChatDomain::General, "I need career planning advice"),
            TaskComplexity::Complex
        );
        assert_eq!(
            classify(ChatDomain::General, "What are the library hours?"),
            TaskComplexity::Simple
        );
        assert_eq!(
            classify(ChatDomain::General, "how do I make friends on campus"),
            TaskComplexity::Moderate
        );
    }

    #[test]
    fn general_domain_ignores_course_patterns() {
        // "syllabus" only matters for course questions.
        assert_eq!(
            classify(ChatDomain::General, "syllabus"),
            TaskComplexity::Moderate
        );
    }

    #[test]
    fn academic_regex_rules() {
        let none = AcademicSignals::default();
        assert_eq!(
            classify_academic("help with degree planning", &none),
            TaskComplexity::Complex
        );
        assert_eq!(
            classify_academic("what is my current GPA", &none),
            TaskComplexity::Simple
        );
        assert_eq!(
            classify_academic("how am I doing", &none),
            TaskComplexity::Moderate
        );
    }

    #[test]
    fn academic_profile_forces_complex() {
        let struggling = AcademicSignals {
            struggling_subjects: 3,
            ..Default::default()
        };
        let low_gpa = AcademicSignals {
            current_gpa: Some(2.4),
            ..Default::default()
        };
        let overloaded = AcademicSignals {
            enrolled_courses: 7,
            ..Default::default()
        };
        for signals in [struggling, low_gpa, overloaded] {
            assert_eq!(
                classify_academic("what is my current gpa", &signals),
                TaskComplexity::Complex
            );
        }
    }

    #[test]
    fn academic_profile_thresholds_are_exclusive() {
        let edge = AcademicSignals {
            struggling_subjects: 2,
            current_gpa: Some(2.5),
            enrolled_courses: 6,
        };
        assert!(!edge.is_complex_profile());
    }

    #[test]
    fn signals_from_student_context() {
        let ctx = StudentContext {
            student_id: "s1".into(),
            current_gpa: Some(3.1),
            struggling_subjects: Some(vec!["Math".into(), "Physics".into()]),
            enrolled_courses: None,
            ..Default::default()
        };
        let signals = AcademicSignals::from(&ctx);
        assert_eq!(signals.struggling_subjects, 2);
        assert_eq!(signals.enrolled_courses, 0);
        assert_eq!(signals.current_gpa, Some(3.1));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(TaskComplexity::Moderate.to_string(), "moderate");
        assert_eq!(ChatDomain::Course.to_string(), "course");
    }

    proptest! {
        #[test]
        fn classification_is_pure(msg in ".{0,80}") {
            for domain in [ChatDomain::Course, ChatDomain::General, ChatDomain::Academic] {
                prop_assert_eq!(classify(domain, &msg), classify(domain, &msg));
            }
        }
    }
}
