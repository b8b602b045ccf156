use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{ApiError, Course, EnrollRequest, Enrollment, NewCourse};

impl ApiClient {
    /// Catalog of approved courses, visible to any authenticated user.
    pub async fn get_approved_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.request(Method::GET, "/api/courses/approved", None)
            .await
    }

    pub async fn get_my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.request(Method::GET, "/api/enrollments", None).await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<Enrollment, ApiError> {
        let body = serde_json::to_value(EnrollRequest {
            course_id: course_id.to_string(),
        })
        .map_err(|err| ApiError::unknown(err.to_string()))?;
        self.request(Method::POST, "/api/enrollments", Some(body))
            .await
    }

    /// Courses authored by the signed-in educator, in every review state.
    pub async fn get_my_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.request(Method::GET, "/api/courses/mine", None).await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course, ApiError> {
        let body = serde_json::to_value(course)
            .map_err(|err| ApiError::unknown(err.to_string()))?;
        self.request(Method::POST, "/api/courses", Some(body)).await
    }
}
