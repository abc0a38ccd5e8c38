//! Integration tests for dependent-write sequences.
//!
//! The server assigns question positions and path-content order purely by
//! call arrival and offers no batch endpoint, so these helpers must issue
//! one call at a time, each awaited before the next starts. A failure
//! mid-sequence leaves the resource partially written by design; the tests
//! pin both the ordering and the partial-failure shape.

#![allow(clippy::expect_used)] // Test code can use expect
#![allow(clippy::unwrap_used)] // Test code can unwrap

use std::sync::Arc;
use studyhub_client::{ApiClient, ApiConfig, NewAssessment, NewQuestion, ReorderItem, StaticToken};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(
        ApiConfig::new(server.uri()),
        Arc::new(StaticToken::new("tok-123")),
    )
    .expect("client builds")
}

fn assessment_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": "a-1",
            "title": "Fractions",
            "description": "Intro quiz",
            "categoryId": "cat-1",
            "isActive": true,
            "createdAt": "2024-09-01T08:00:00Z",
            "updatedAt": "2024-09-01T08:00:00Z"
        }
    })
}

fn question_body(id: &str, position: u32) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": id,
            "assessmentId": "a-1",
            "prompt": "?",
            "choices": ["a", "b"],
            "position": position
        }
    })
}

#[tokio::test]
async fn create_with_questions_posts_each_question_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(assessment_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/assessments/a-1/questions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(question_body("q", 0)))
        .expect(3)
        .mount(&server)
        .await;

    let questions: Vec<NewQuestion> = (1..=3)
        .map(|n| NewQuestion {
            prompt: format!("Question {n}"),
            choices: vec!["a".to_string(), "b".to_string()],
        })
        .collect();

    let (assessment, created) = client_for(&server)
        .assessments()
        .create_with_questions(
            &NewAssessment {
                title: "Fractions".to_string(),
                description: "Intro quiz".to_string(),
                category_id: "cat-1".to_string(),
            },
            &questions,
        )
        .await
        .expect("sequence succeeds");

    assert_eq!(assessment.id, "a-1");
    assert_eq!(created.len(), 3);

    // The recorded request log is in arrival order: the assessment create,
    // then each question, each issued only after the previous resolved.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].url.path(), "/assessments");
    for (index, request) in requests[1..].iter().enumerate() {
        assert_eq!(request.url.path(), "/assessments/a-1/questions");
        let body: serde_json::Value = request.body_json().unwrap();
        assert_eq!(body["prompt"], format!("Question {}", index + 1));
    }
}

#[tokio::test]
async fn create_with_questions_stops_at_the_first_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(assessment_body()))
        .mount(&server)
        .await;
    // First question succeeds…
    Mock::given(method("POST"))
        .and(path("/assessments/a-1/questions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(question_body("q-1", 0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // …the second fails, and the third must never be attempted.
    Mock::given(method("POST"))
        .and(path("/assessments/a-1/questions"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"details": "question store unavailable"})),
        )
        .mount(&server)
        .await;

    let questions: Vec<NewQuestion> = (1..=3)
        .map(|n| NewQuestion {
            prompt: format!("Question {n}"),
            choices: vec!["a".to_string()],
        })
        .collect();

    let err = client_for(&server)
        .assessments()
        .create_with_questions(
            &NewAssessment {
                title: "Fractions".to_string(),
                description: "Intro quiz".to_string(),
                category_id: "cat-1".to_string(),
            },
            &questions,
        )
        .await
        .expect_err("second question fails");

    assert_eq!(err.message(), "question store unavailable");

    // Partial write: assessment plus one question reached the server.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn reorder_contents_issues_one_update_per_entry_in_order() {
    let server = MockServer::start().await;

    for (entry, position) in [("pc-9", 1_u32), ("pc-4", 2), ("pc-2", 3)] {
        Mock::given(method("PUT"))
            .and(path(format!("/learning-paths/lp-1/contents/{entry}")))
            .and(body_partial_json(serde_json::json!({"position": position})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "id": entry,
                    "pathId": "lp-1",
                    "contentId": "c-1",
                    "position": position,
                    "status": "unlocked"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let items = vec![
        ReorderItem { path_content_id: "pc-9".to_string(), position: 1 },
        ReorderItem { path_content_id: "pc-4".to_string(), position: 2 },
        ReorderItem { path_content_id: "pc-2".to_string(), position: 3 },
    ];

    let updated = client_for(&server)
        .paths()
        .reorder_contents("lp-1", &items)
        .await
        .expect("reorder succeeds");

    assert_eq!(updated.len(), 3);

    let requests = server.received_requests().await.unwrap();
    let order: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(
        order,
        vec![
            "/learning-paths/lp-1/contents/pc-9",
            "/learning-paths/lp-1/contents/pc-4",
            "/learning-paths/lp-1/contents/pc-2",
        ]
    );
}
