//! Admin-only endpoints. The backend enforces the role; a 403 here tears the
//! session down via the shared response decoding in `client`.

use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{AdminUser, AnalyticsSummary, ApiError, Course, RejectCourseRequest};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.request(Method::GET, "/api/admin/users", None).await
    }

    pub async fn get_pending_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.request(Method::GET, "/api/admin/courses/pending", None)
            .await
    }

    pub async fn approve_course(&self, course_id: &str) -> Result<Course, ApiError> {
        let path = format!("/api/admin/courses/{}/approve", course_id);
        self.request(Method::PUT, &path, None).await
    }

    pub async fn reject_course(&self, course_id: &str, reason: &str) -> Result<Course, ApiError> {
        let path = format!("/api/admin/courses/{}/reject", course_id);
        let body = serde_json::to_value(RejectCourseRequest {
            reason: reason.to_string(),
        })
        .map_err(|err| ApiError::unknown(err.to_string()))?;
        self.request(Method::PUT, &path, Some(body)).await
    }

    pub async fn get_analytics(&self) -> Result<AnalyticsSummary, ApiError> {
        self.request(Method::GET, "/api/admin/analytics", None)
            .await
    }
}
