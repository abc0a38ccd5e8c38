//! Category endpoints.
//!
//! Categories are the linkage target for every other resource; the list is
//! small and unpaged.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A subject category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
}

/// Client for the category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesClient<'a> {
    api: &'a ApiClient,
}

impl<'a> CategoriesClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.api.get("/categories", &[], Auth::Authenticated).await
    }

    /// Fetch one category by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<Category> {
        self.api
            .get(&format!("/categories/{id}"), &[], Auth::Authenticated)
            .await
    }
}
