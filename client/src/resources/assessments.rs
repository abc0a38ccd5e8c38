//! Assessment endpoints.

use crate::api::{ApiClient, Auth};
use crate::error::Result;
use crate::resources::Query;
use crate::types::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Assessment id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Longer description shown before starting.
    pub description: String,
    /// Owning category.
    pub category_id: String,
    /// Whether the assessment is visible to students.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A question belonging to an assessment.
///
/// `position` is server-assigned by call arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestion {
    /// Question id.
    pub id: String,
    /// Owning assessment.
    pub assessment_id: String,
    /// Question prompt text.
    pub prompt: String,
    /// Answer choices, in display order.
    pub choices: Vec<String>,
    /// Position within the assessment.
    pub position: u32,
}

/// Payload for creating an assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    /// Display title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Owning category.
    pub category_id: String,
}

/// Payload for updating an assessment.
///
/// Unset fields are omitted from the body so the server leaves them
/// untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentUpdate {
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

/// Payload for adding a question to an assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    /// Question prompt text.
    pub prompt: String,
    /// Answer choices, in display order.
    pub choices: Vec<String>,
}

/// A student's submitted answers, keyed by question id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAnswers {
    /// (question id, chosen answer index) pairs.
    pub answers: Vec<(String, u32)>,
}

/// A graded submission.
///
/// The score is server-computed; the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    /// Submission id.
    pub id: String,
    /// The assessment submitted against.
    pub assessment_id: String,
    /// Submitting user.
    pub user_id: String,
    /// Server-computed score.
    pub score: f64,
    /// Submission timestamp.
    pub submitted_at: DateTime<Utc>,
}

/// List filters for assessments.
#[derive(Debug, Clone, Default)]
pub struct AssessmentFilter {
    /// Restrict to one category.
    pub category_id: Option<String>,
    /// Restrict by visibility.
    pub is_active: Option<bool>,
    /// 1-indexed page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl AssessmentFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Query::new();
        query.push_opt("categoryId", self.category_id.as_ref());
        query.push_opt("isActive", self.is_active);
        query.paginate(self.page, self.limit);
        query.into_pairs()
    }
}

/// Client for the assessment endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AssessmentsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List assessments matching `filter`.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn list(&self, filter: &AssessmentFilter) -> Result<Page<Assessment>> {
        self.api
            .get("/assessments", &filter.to_query(), Auth::Authenticated)
            .await
    }

    /// Fetch one assessment by id.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn get(&self, id: &str) -> Result<Assessment> {
        self.api
            .get(&format!("/assessments/{id}"), &[], Auth::Authenticated)
            .await
    }

    /// Create an assessment.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn create(&self, new: &NewAssessment) -> Result<Assessment> {
        self.api.post("/assessments", new, Auth::Authenticated).await
    }

    /// Update an assessment.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn update(&self, id: &str, update: &AssessmentUpdate) -> Result<Assessment> {
        self.api
            .put(&format!("/assessments/{id}"), update, Auth::Authenticated)
            .await
    }

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .api
            .delete(&format!("/assessments/{id}"), Auth::Authenticated)
            .await?;
        Ok(())
    }

    /// List an assessment's questions.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn questions(&self, id: &str) -> Result<Vec<AssessmentQuestion>> {
        self.api
            .get(&format!("/assessments/{id}/questions"), &[], Auth::Authenticated)
            .await
    }

    /// Add one question to an assessment.
    ///
    /// The server assigns the question's position by call arrival order.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn add_question(&self, id: &str, question: &NewQuestion) -> Result<AssessmentQuestion> {
        self.api
            .post(&format!("/assessments/{id}/questions"), question, Auth::Authenticated)
            .await
    }

    /// Submit answers for grading.
    ///
    /// # Errors
    ///
    /// Propagates the facade's [`ApiError`](crate::ApiError) untouched.
    pub async fn submit(&self, id: &str, answers: &SubmissionAnswers) -> Result<AssessmentSubmission> {
        self.api
            .post(&format!("/assessments/{id}/submissions"), answers, Auth::Authenticated)
            .await
    }

    /// Create an assessment together with its questions.
    ///
    /// There is no batch endpoint: the assessment is created first, then
    /// each question is created with its own call, strictly in order, each
    /// awaited before the next starts — the server assigns question
    /// positions purely by arrival. A failure mid-sequence leaves the
    /// assessment partially written; the error is surfaced and the user
    /// retries manually.
    ///
    /// # Errors
    ///
    /// The first [`ApiError`](crate::ApiError) encountered, untouched.
    pub async fn create_with_questions(
        &self,
        new: &NewAssessment,
        questions: &[NewQuestion],
    ) -> Result<(Assessment, Vec<AssessmentQuestion>)> {
        let assessment = self.create(new).await?;

        let mut created = Vec::with_capacity(questions.len());
        for question in questions {
            created.push(self.add_question(&assessment.id, question).await?);
        }

        Ok((assessment, created))
    }
}
