//! Domain resource clients.
//!
//! One thin, stateless client per server entity. Each method maps to
//! exactly one server operation (the two sequential-write helpers map to a
//! documented chain of them), passes its parameters through, and
//! propagates the facade's normalized error untouched. No client-side
//! validation happens here beyond what the type system enforces.

mod assessments;
mod auth;
mod categories;
mod content;
mod paths;
mod recommendations;
mod users;

pub use assessments::{
    Assessment, AssessmentFilter, AssessmentQuestion, AssessmentSubmission, AssessmentUpdate,
    AssessmentsClient, NewAssessment, NewQuestion, SubmissionAnswers,
};
pub use auth::{AuthClient, Credentials, LoginResponse};
pub use categories::{CategoriesClient, Category};
pub use content::{Content, ContentClient, ContentFilter, ContentUpdate, NewContent};
pub use paths::{
    LearningPath, NewLearningPath, PathContent, PathFilter, PathUpdate, PathsClient, ReorderItem,
};
pub use recommendations::{
    Recommendation, RecommendationFilter, RecommendationStatus, RecommendationsClient,
};
pub use users::{NewUser, UserFilter, UserUpdate, UsersClient};

/// Query string accumulator.
///
/// Unset filters must be *omitted*, never sent as empty strings — the
/// server's filtering distinguishes "no filter" from "empty string filter".
/// Building pairs through this type keeps that rule in one place.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub(crate) fn push(&mut self, key: &'static str, value: impl std::fmt::Display) {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a parameter only when it is set.
    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl std::fmt::Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// 1-indexed pagination parameters, both optional.
    pub(crate) fn paginate(&mut self, page: Option<u32>, limit: Option<u32>) {
        self.push_opt("page", page);
        self.push_opt("limit", limit);
    }

    pub(crate) fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}
