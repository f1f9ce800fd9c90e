// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory course catalog.

use std::collections::BTreeMap;

use async_trait::async_trait;

use campus_core::{CampusError, CourseCatalog, CourseRecord};

/// A catalog backed by a sorted map of course code to record.
///
/// `search_by_code` is a case-insensitive substring match ordered by code.
/// A failing catalog returns `CampusError::Catalog` from every lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: BTreeMap<String, CourseRecord>,
    failing: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: impl IntoIterator<Item = CourseRecord>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.code.clone(), c)).collect(),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            courses: BTreeMap::new(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), CampusError> {
        if self.failing {
            return Err(CampusError::Catalog {
                message: "catalog unavailable".into(),
                source: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCatalog {
    async fn find_by_code(&self, code: &str) -> Result<Option<CourseRecord>, CampusError> {
        self.check()?;
        Ok(self.courses.get(code).cloned())
    }

    async fn search_by_code(&self, code: &str) -> Result<Vec<CourseRecord>, CampusError> {
        self.check()?;
        let needle = code.to_lowercase();
        Ok(self
            .courses
            .values()
            .filter(|c| c.code.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> CourseRecord {
        CourseRecord {
            code: code.into(),
            name: format!("Course {code}"),
            unit_load: 6,
            semester: 1,
            department: "Computing".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn exact_and_fuzzy_lookup() {
        let catalog = InMemoryCatalog::with_courses([record("COMP1010"), record("COMP2020")]);
        assert!(catalog.find_by_code("COMP1010").await.unwrap().is_some());
        assert!(catalog.find_by_code("comp1010").await.unwrap().is_none());

        let hits = catalog.search_by_code("comp10").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "COMP1010");
    }

    #[tokio::test]
    async fn failing_catalog_errors() {
        let catalog = InMemoryCatalog::failing();
        assert!(catalog.find_by_code("X").await.is_err());
        assert!(catalog.search_by_code("X").await.is_err());
    }
}
