//! Content library endpoints.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::resources::Query;
use crate::types::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content item (article, video, exercise, …).
///
/// `content_type` stays a string: the set of types is server-defined and
/// the client treats it as opaque beyond display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Content id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Body, markdown as authored.
    pub body: String,
    /// Server-defined content kind.
    pub content_type: String,
    /// Owning category.
    pub category_id: String,
    /// Whether the item is visible to students.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a content item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    /// Display title.
    pub title: String,
    /// Body, markdown.
    pub body: String,
    /// Server-defined content kind.
    pub content_type: String,
    /// Owning category.
    pub category_id: String,
}

/// Payload for updating a content item.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpdate {
    /// New title, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// New content kind, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// New owning category, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// New visibility flag, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// List filters for content.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Restrict to one content kind.
    pub content_type: Option<String>,
    /// Restrict by visibility.
    pub is_active: Option<bool>,
    /// 1-indexed page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl ContentFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Query::new();
        query.push_opt("categoryId", self.category_id.as_ref());
        query.push_opt("contentType", self.content_type.as_ref());
        query.push_opt("isActive", self.is_active);
        query.paginate(self.page, self.limit);
        query.into_pairs()
    }
}

/// Client for the content endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ContentClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ContentClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List content matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self, filter: &ContentFilter) -> Result<Page<Content>> {
        self.api
            .get("/contents", &filter.to_query(), Auth::Authenticated)
            .await
    }

    /// Fetch one content item by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<Content> {
        self.api
            .get(&format!("/contents/{id}"), &[], Auth::Authenticated)
            .await
    }

    /// Create a content item.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn create(&self, new: &NewContent) -> Result<Content> {
        self.api.post("/contents", new, Auth::Authenticated).await
    }

    /// Update a content item.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn update(&self, id: &str, update: &ContentUpdate) -> Result<Content> {
        self.api
            .put(&format!("/contents/{id}"), update, Auth::Authenticated)
            .await
    }

    /// Delete a content item.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .delete(&format!("/contents/{id}"), Auth::Authenticated)
            .await?;
        Ok(())
    }
}
