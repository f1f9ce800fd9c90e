// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only course lookup used to enrich course contexts.

use async_trait::async_trait;

use crate::error::CampusError;
use crate::types::CourseRecord;

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Exact lookup by course code.
    async fn find_by_code(&self, code: &str) -> Result<Option<CourseRecord>, CampusError>;

    /// Fuzzy lookup by course code, best match first.
    async fn search_by_code(&self, code: &str) -> Result<Vec<CourseRecord>, CampusError>;
}
