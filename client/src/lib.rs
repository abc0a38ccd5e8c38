//! # StudyHub API Client
//!
//! Typed Rust client for the StudyHub REST API: a single HTTP facade with
//! normalized errors, plus one thin resource client per server entity
//! (assessments, content, learning paths, users, recommendations,
//! categories) and the auth endpoints the session store drives.
//!
//! ## Example
//!
//! ```no_run
//! use studyhub_client::{ApiClient, ApiConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::public(ApiConfig::from_env()?)?;
//!
//!     let login = client
//!         .auth()
//!         .login(&Credentials::new("ada@school.example", "hunter2"))
//!         .await?;
//!
//!     println!("token: {:?}", login.access_token);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - Every success body is the `{ "data": … }` envelope; the facade
//!   unwraps it, so resource methods return domain types directly.
//! - Every failure becomes [`ApiError`], with 403/404 classified
//!   structurally at the facade and a fixed message-derivation order for
//!   server error bodies.
//! - Credentials come from an injected [`TokenSource`]; the client itself
//!   never stores a token.
//! - No retries anywhere: one request, one outcome.

pub mod api;
pub mod config;
pub mod error;
pub mod resources;
pub mod token;
pub mod types;

// Re-export main types for convenience
pub use api::{ApiClient, Auth};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use resources::{
    Assessment, AssessmentFilter, AssessmentQuestion, AssessmentSubmission, AssessmentUpdate,
    Category, Content, ContentFilter, ContentUpdate, Credentials, LearningPath, LoginResponse,
    NewAssessment, NewContent, NewLearningPath, NewQuestion, NewUser, PathContent, PathFilter,
    PathUpdate, Recommendation, RecommendationFilter, RecommendationStatus, ReorderItem,
    SubmissionAnswers, UserFilter, UserUpdate,
};
pub use token::{NoAuth, StaticToken, TokenSource};
pub use types::{AccessToken, AuthClaims, Guardian, Page, Role, UserProfile};
