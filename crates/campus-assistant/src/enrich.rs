// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Course context enrichment from the course catalog.

use campus_core::{AssessmentItem, CampusError, CourseCatalog, CourseContext, CourseRecord};
use tracing::{debug, warn};

fn default_assessment() -> Vec<AssessmentItem> {
    vec![
        AssessmentItem::new("Assignments", 30),
        AssessmentItem::new("Midterm Exam", 35),
        AssessmentItem::new("Final Exam", 35),
    ]
}

async fn lookup(
    catalog: &dyn CourseCatalog,
    code: &str,
) -> Result<Option<CourseRecord>, CampusError> {
    if let Some(record) = catalog.find_by_code(code).await? {
        return Ok(Some(record));
    }
    Ok(catalog.search_by_code(code).await?.into_iter().next())
}

/// Overlay catalog data onto `ctx`.
///
/// Returns `ctx` unchanged when it has no course code, the course is not
/// found, or the catalog fails.
pub async fn enrich_course_context(
    catalog: &dyn CourseCatalog,
    ctx: CourseContext,
) -> CourseContext {
    if ctx.course_code.is_empty() {
        return ctx;
    }

    let record = match lookup(catalog, &ctx.course_code).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            debug!(course_code = %ctx.course_code, "course not found in catalog");
            return ctx;
        }
        Err(e) => {
            warn!(course_code = %ctx.course_code, error = %e, "course catalog lookup failed");
            return ctx;
        }
    };

    debug!(course_code = %record.code, "enriched course context from catalog");
    CourseContext {
        course_code: if record.code.is_empty() {
            ctx.course_code
        } else {
            record.code
        },
        description: Some(format!(
            "{} - {} units, Semester {}, Department: {}",
            record.name, record.unit_load, record.semester, record.department
        )),
        course_name: record.name,
        outline: Some(record.outline),
        instructor: record.coordinator,
        assessment: Some(default_assessment()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_test_utils::InMemoryCatalog;

    fn record() -> CourseRecord {
        CourseRecord {
            code: "COMP1010".into(),
            name: "Intro to Programming".into(),
            outline: vec!["Variables".into(), "Loops".into()],
            coordinator: Some("Dr Smith".into()),
            unit_load: 6,
            semester: 1,
            department: "Computing".into(),
        }
    }

    fn ctx(code: &str) -> CourseContext {
        CourseContext {
            course_code: code.into(),
            course_name: "caller name".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn exact_match_overrides_fields() {
        let catalog = InMemoryCatalog::with_courses([record()]);
        let out = enrich_course_context(&catalog, ctx("COMP1010")).await;
        assert_eq!(out.course_name, "Intro to Programming");
        assert_eq!(out.instructor.as_deref(), Some("Dr Smith"));
        assert_eq!(
            out.description.as_deref(),
            Some("Intro to Programming - 6 units, Semester 1, Department: Computing")
        );
        assert_eq!(out.non_empty_outline().map(<[String]>::len), Some(2));
        assert_eq!(out.assessment.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn falls_back_to_search() {
        let catalog = InMemoryCatalog::with_courses([record()]);
        let out = enrich_course_context(&catalog, ctx("comp1010")).await;
        assert_eq!(out.course_code, "COMP1010");
    }

    #[tokio::test]
    async fn unknown_course_is_unchanged() {
        let catalog = InMemoryCatalog::with_courses([record()]);
        let out = enrich_course_context(&catalog, ctx("HIST2000")).await;
        assert_eq!(out, ctx("HIST2000"));
    }

    #[tokio::test]
    async fn catalog_errors_are_ignored() {
        let catalog = InMemoryCatalog::failing();
        let out = enrich_course_context(&catalog, ctx("COMP1010")).await;
        assert_eq!(out, ctx("COMP1010"));
    }

    #[tokio::test]
    async fn empty_code_skips_lookup() {
        let catalog = InMemoryCatalog::failing();
        let out = enrich_course_context(&catalog, ctx("")).await;
        assert_eq!(out.course_name, "caller name");
    }
}
