//! User administration endpoints.
//!
//! The account record is [`UserProfile`], shared with the session crate:
//! the same shape the session store persists is what these endpoints
//! return.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::resources::Query;
use crate::types::{Guardian, Page, Role, UserProfile};
use serde::Serialize;

/// Payload for creating an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Server-side role record id.
    pub role_id: String,
    /// Initial password.
    pub password: String,
    /// Date of birth, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Current grade, for students.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_grade: Option<String>,
    /// Contact phone number, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Guardian contacts (meaningful for students only).
    pub guardians: Vec<Guardian>,
}

/// Payload for updating an account.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New display name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New date of birth, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// New grade, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_grade: Option<String>,
    /// New phone number, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Replacement guardian list, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardians: Option<Vec<Guardian>>,
    /// New activation flag, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// List filters for accounts.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Restrict to one role.
    pub role: Option<Role>,
    /// Restrict by activation.
    pub is_active: Option<bool>,
    /// 1-indexed page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl UserFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Query::new();
        query.push_opt("role", self.role.map(|role| role.as_str()));
        query.push_opt("isActive", self.is_active);
        query.paginate(self.page, self.limit);
        query.into_pairs()
    }
}

/// Client for the user endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UsersClient<'a> {
    api: &'a ApiClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List accounts matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self, filter: &UserFilter) -> Result<Page<UserProfile>> {
        self.api
            .get("/users", &filter.to_query(), Auth::Authenticated)
            .await
    }

    /// Fetch one account by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<UserProfile> {
        self.api
            .get(&format!("/users/{id}"), &[], Auth::Authenticated)
            .await
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn create(&self, new: &NewUser) -> Result<UserProfile> {
        self.api.post("/users", new, Auth::Authenticated).await
    }

    /// Update an account.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<UserProfile> {
        self.api
            .put(&format!("/users/{id}"), update, Auth::Authenticated)
            .await
    }

    /// Deactivate an account (soft removal).
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn deactivate(&self, id: &str) -> Result<UserProfile> {
        self.api
            .patch(
                &format!("/users/{id}"),
                &serde_json::json!({ "isActive": false }),
                Auth::Authenticated,
            )
            .await
    }

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .delete(&format!("/users/{id}"), Auth::Authenticated)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_uses_wire_strings() {
        let filter = UserFilter {
            role: Some(Role::Coordinator),
            ..UserFilter::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("role", "coordinator".to_string())]
        );
    }
}
