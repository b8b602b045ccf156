use crate::api::types::{AdminUser, AnalyticsSummary, ApiError, Course};
use crate::api::ApiClient;

#[derive(Clone)]
pub struct AdminRepository {
    api: ApiClient,
}

impl AdminRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_analytics(&self) -> Result<AnalyticsSummary, ApiError> {
        self.api.get_analytics().await
    }

    pub async fn load_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.api.get_users().await
    }

    pub async fn load_pending_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.api.get_pending_courses().await
    }

    pub async fn approve(&self, course_id: &str) -> Result<Course, ApiError> {
        self.api.approve_course(course_id).await
    }

    pub async fn reject(&self, course_id: &str, reason: &str) -> Result<Course, ApiError> {
        self.api.reject_course(course_id, reason).await
    }
}

/// Removes a course from the pending queue after it has been reviewed.
pub fn remove_reviewed(pending: &mut Vec<Course>, course_id: &str) {
    pending.retain(|course| course.id != course_id);
}

pub fn format_user_row(user: &AdminUser) -> String {
    let status = if user.suspended { " (suspended)" } else { "" };
    format!("{} · {}{}", user.email, user.role.label(), status)
}
