//! Learning path endpoints.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::resources::Query;
use crate::types::Page;
use serde::{Deserialize, Serialize};

/// A learning path: an ordered sequence of content items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    /// Path id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Owning category.
    pub category_id: String,
    /// Whether the path is visible to students.
    pub is_active: bool,
}

/// One entry of a path's ordered contents.
///
/// `status` is server-owned progression state (unlocked, blocked,
/// completed, …); the client never computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathContent {
    /// Entry id (distinct from the content item's id).
    pub id: String,
    /// Owning path.
    pub path_id: String,
    /// The content item this entry points at.
    pub content_id: String,
    /// Position within the path.
    pub position: u32,
    /// Server-computed progression status.
    pub status: String,
}

/// Payload for creating a learning path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLearningPath {
    /// Display title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Owning category.
    pub category_id: String,
}

/// Payload for updating a learning path.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathUpdate {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New owning category, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// New visibility flag, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One reorder instruction: move a path entry to a position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    /// The path entry to move.
    pub path_content_id: String,
    /// Its new position.
    pub position: u32,
}

/// List filters for learning paths.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Restrict by visibility.
    pub is_active: Option<bool>,
    /// 1-indexed page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl PathFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Query::new();
        query.push_opt("categoryId", self.category_id.as_ref());
        query.push_opt("isActive", self.is_active);
        query.paginate(self.page, self.limit);
        query.into_pairs()
    }
}

/// Client for the learning path endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PathsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> PathsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List paths matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self, filter: &PathFilter) -> Result<Page<LearningPath>> {
        self.api
            .get("/learning-paths", &filter.to_query(), Auth::Authenticated)
            .await
    }

    /// Fetch one path by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<LearningPath> {
        self.api
            .get(&format!("/learning-paths/{id}"), &[], Auth::Authenticated)
            .await
    }

    /// Fetch a path's ordered contents.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn contents(&self, id: &str) -> Result<Vec<PathContent>> {
        self.api
            .get(&format!("/learning-paths/{id}/contents"), &[], Auth::Authenticated)
            .await
    }

    /// Create a learning path.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn create(&self, new: &NewLearningPath) -> Result<LearningPath> {
        self.api.post("/learning-paths", new, Auth::Authenticated).await
    }

    /// Update a learning path.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn update(&self, id: &str, update: &PathUpdate) -> Result<LearningPath> {
        self.api
            .put(&format!("/learning-paths/{id}"), update, Auth::Authenticated)
            .await
    }

    /// Delete a learning path.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .delete(&format!("/learning-paths/{id}"), Auth::Authenticated)
            .await?;
        Ok(())
    }

    /// Reorder a path's contents.
    ///
    /// There is no batch endpoint: each entry's position is updated with
    /// its own call, strictly in order, each awaited before the next — the
    /// server applies updates by arrival. A failure mid-sequence leaves the
    /// path partially reordered; the error is surfaced and the user retries
    /// manually.
    ///
    /// # Errors
    ///
    /// The first [`ApiError`](crate::ApiError) encountered, untouched.
    pub async fn reorder_contents(&self, id: &str, items: &[ReorderItem]) -> Result<Vec<PathContent>> {
        let mut updated = Vec::with_capacity(items.len());
        for item in items {
            updated.push(
                self.api
                    .put(
                        &format!("/learning-paths/{id}/contents/{}", item.path_content_id),
                        &serde_json::json!({ "position": item.position }),
                        Auth::Authenticated,
                    )
                    .await?,
            );
        }
        Ok(updated)
    }
}
