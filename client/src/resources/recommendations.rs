//! Recommendation endpoints.
//!
//! Recommendations are generated server-side; the client lists them and
//! moves them through their status lifecycle.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::resources::Query;
use crate::types::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    /// Awaiting the student's attention.
    Pending,
    /// The student finished the recommended content.
    Completed,
    /// The student dismissed the recommendation.
    Dismissed,
}

impl RecommendationStatus {
    /// The wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Dismissed => "dismissed",
        }
    }
}

/// A content recommendation for a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Recommendation id.
    pub id: String,
    /// The student it targets.
    pub user_id: String,
    /// The recommended content item.
    pub content_id: String,
    /// Current lifecycle status.
    pub status: RecommendationStatus,
    /// Server-generated explanation shown to the student.
    pub reason: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// List filters for recommendations.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    /// Restrict to one student.
    pub user_id: Option<String>,
    /// Restrict to one status.
    pub status: Option<RecommendationStatus>,
    /// 1-indexed page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl RecommendationFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Query::new();
        query.push_opt("userId", self.user_id.as_ref());
        query.push_opt("status", self.status.map(|status| status.as_str()));
        query.paginate(self.page, self.limit);
        query.into_pairs()
    }
}

/// Client for the recommendation endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> RecommendationsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List recommendations matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self, filter: &RecommendationFilter) -> Result<Page<Recommendation>> {
        self.api
            .get("/recommendations", &filter.to_query(), Auth::Authenticated)
            .await
    }

    /// Fetch one recommendation by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<Recommendation> {
        self.api
            .get(&format!("/recommendations/{id}"), &[], Auth::Authenticated)
            .await
    }

    /// Move a recommendation to a new status.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn set_status(
        &self,
        id: &str,
        status: RecommendationStatus,
    ) -> Result<Recommendation> {
        self.api
            .patch(
                &format!("/recommendations/{id}"),
                &serde_json::json!({ "status": status.as_str() }),
                Auth::Authenticated,
            )
            .await
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;

    #[test]
    fn status_filter_uses_wire_strings() {
        let filter = RecommendationFilter {
            status: Some(RecommendationStatus::Dismissed),
            ..RecommendationFilter::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("status", "dismissed".to_string())]
        );
    }

    #[test]
    fn status_serde_matches_as_str() {
        for status in [
            RecommendationStatus::Pending,
            RecommendationStatus::Completed,
            RecommendationStatus::Dismissed,
        ] {
            let wire = serde_json::to_string(&status).expect("serializable");
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
        }
    }
}
