use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::Method;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::test_support::MockServer;
use crate::api::types::*;
use crate::utils::{browser, storage};

fn token_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({
            "sub": "u1",
            "email": "ada@classline.dev",
            "name": "Ada",
            "role": "student",
            "exp": exp
        })
        .to_string()
        .as_bytes(),
    );
    format!("{}.{}.sig", header, payload)
}

fn store_token(exp: i64) {
    storage::set_item(storage::TOKEN_KEY, &token_with_exp(exp)).unwrap();
    storage::set_item(storage::USER_KEY, "{\"cached\":true}").unwrap();
}

fn clear_session_storage() {
    storage::remove_item(storage::TOKEN_KEY);
    storage::remove_item(storage::USER_KEY);
}

const FAR_FUTURE: i64 = 4_102_444_800; // 2100-01-01

#[tokio::test]
async fn login_start_posts_credentials() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST).path("/api/auth/admin-login");
        then.status(200)
            .json_body(json!({ "message": "OTP sent to your email" }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let response = client
        .request_otp("ada@classline.dev", "hunter2")
        .await
        .unwrap();
    assert_eq!(response.message, "OTP sent to your email");
    mock.assert_hits(1);
}

#[tokio::test]
async fn verify_otp_persists_the_session() {
    let _guard = storage::test_guard();
    clear_session_storage();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/api/auth/verify-otp");
        then.status(200).json_body(json!({
            "token": token_with_exp(FAR_FUTURE),
            "user": {
                "id": "u1",
                "email": "ada@classline.dev",
                "name": "Ada",
                "role": "educator"
            }
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let response = client.verify_otp("ada@classline.dev", "123456").await.unwrap();
    assert_eq!(response.user.name, "Ada");
    assert_eq!(
        storage::get_item(storage::TOKEN_KEY),
        Some(response.token.clone())
    );
    let profile = crate::api::auth::stored_profile().unwrap();
    assert_eq!(profile, response.user);
    clear_session_storage();
}

#[tokio::test]
async fn expired_token_is_rejected_before_the_request_is_sent() {
    let _guard = storage::test_guard();
    browser::clear_last_redirect();
    store_token(1_000_000); // long past
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET).path("/api/courses/approved");
        then.status(200).json_body(json!([]));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let error = client.get_approved_courses().await.unwrap_err();
    assert_eq!(error.code, "SESSION_EXPIRED");
    mock.assert_hits(0);
    assert!(storage::get_item(storage::TOKEN_KEY).is_none());
    assert!(storage::get_item(storage::USER_KEY).is_none());
    assert_eq!(browser::last_redirect().as_deref(), Some("/login"));
    browser::clear_last_redirect();
}

#[tokio::test]
async fn forbidden_responses_force_a_logout() {
    let _guard = storage::test_guard();
    browser::clear_last_redirect();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/admin/users");
        then.status(403)
            .json_body(json!({ "error": "Forbidden" }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let error = client.get_users().await.unwrap_err();
    assert_eq!(error.error, "Access denied");
    assert_eq!(error.code, "ACCESS_DENIED");
    assert!(storage::get_item(storage::TOKEN_KEY).is_none());
    assert!(storage::get_item(storage::USER_KEY).is_none());
    assert_eq!(browser::last_redirect().as_deref(), Some("/login"));
    browser::clear_last_redirect();
}

#[tokio::test]
async fn unauthorized_responses_also_clear_the_session() {
    let _guard = storage::test_guard();
    browser::clear_last_redirect();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/enrollments");
        then.status(401).json_body(json!({ "error": "Unauthorized" }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let error = client.get_my_enrollments().await.unwrap_err();
    assert_eq!(error.code, "SESSION_EXPIRED");
    assert!(storage::get_item(storage::TOKEN_KEY).is_none());
    browser::clear_last_redirect();
}

#[tokio::test]
async fn get_messages_unwraps_the_envelope() {
    let _guard = storage::test_guard();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/messages");
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "conversations": [{
                    "id": "c1",
                    "type": "individual",
                    "title": "Dr. Chen",
                    "participant_id": "u2",
                    "messages": [],
                    "last_activity": "2025-02-01T10:00:00Z",
                    "unread_count": 2
                }],
                "courseDiscussions": []
            }
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let payload = client.get_messages().await.unwrap();
    assert_eq!(payload.conversations.len(), 1);
    assert_eq!(payload.conversations[0].unread_count, 2);
    clear_session_storage();
}

#[tokio::test]
async fn send_message_returns_the_created_message() {
    let _guard = storage::test_guard();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/api/messages");
        then.status(200).json_body(json!({
            "success": true,
            "data": {
                "id": "m9",
                "sender_id": "u1",
                "sender_name": "Ada",
                "text": "hello",
                "timestamp": "2025-02-01T10:05:00Z",
                "is_read": true
            }
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let message = client
        .send_message(&NewMessage {
            conversation_id: "c1".into(),
            text: "hello".into(),
            kind: ConversationKind::Individual,
        })
        .await
        .unwrap();
    assert_eq!(message.id, "m9");
    assert_eq!(message.text, "hello");
    clear_session_storage();
}

#[tokio::test]
async fn validation_errors_surface_the_server_message() {
    let _guard = storage::test_guard();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/api/courses");
        then.status(422).json_body(json!({
            "error": "Title is required",
            "code": "VALIDATION_ERROR"
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let error = client
        .create_course(&NewCourse {
            title: String::new(),
            description: None,
        })
        .await
        .unwrap_err();
    assert_eq!(error.error, "Title is required");
    assert_eq!(error.code, "VALIDATION_ERROR");
    clear_session_storage();
}

#[tokio::test]
async fn admin_course_review_round_trip() {
    let _guard = storage::test_guard();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    let course = json!({
        "id": "crs-1",
        "title": "Rust 101",
        "educator_id": "u2",
        "educator_name": "Dr. Chen",
        "status": "approved",
        "enrolled_count": 0
    });
    server.mock(|when, then| {
        when.method(Method::PUT).path("/api/admin/courses/crs-1/approve");
        then.status(200).json_body(course.clone());
    });
    let reject = server.mock(|when, then| {
        when.method(Method::PUT).path("/api/admin/courses/crs-2/reject");
        then.status(200).json_body(json!({
            "id": "crs-2",
            "title": "Untitled",
            "educator_id": "u3",
            "educator_name": "Mark",
            "status": "rejected",
            "enrolled_count": 0
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let approved = client.approve_course("crs-1").await.unwrap();
    assert_eq!(approved.status, CourseStatus::Approved);
    let rejected = client
        .reject_course("crs-2", "Needs a syllabus")
        .await
        .unwrap();
    assert_eq!(rejected.status, CourseStatus::Rejected);
    reject.assert_hits(1);
    clear_session_storage();
}

#[tokio::test]
async fn analytics_summary_deserializes() {
    let _guard = storage::test_guard();
    store_token(FAR_FUTURE);
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/admin/analytics");
        then.status(200).json_body(json!({
            "total_users": 120,
            "total_courses": 14,
            "active_enrollments": 310,
            "pending_courses": 3
        }));
    });
    let client = ApiClient::new_with_base_url(server.base_url());

    let summary = client.get_analytics().await.unwrap();
    assert_eq!(summary.total_users, 120);
    assert_eq!(summary.pending_courses, 3);
    clear_session_storage();
}
