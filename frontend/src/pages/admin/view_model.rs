use crate::api::types::{AdminUser, AnalyticsSummary, ApiError, Course};
use crate::api::ApiClient;
use crate::pages::admin::repository::{self, AdminRepository};
use leptos::*;

#[derive(Clone)]
pub enum ReviewDecision {
    Approve { course_id: String },
    Reject { course_id: String, reason: String },
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub analytics: RwSignal<Option<AnalyticsSummary>>,
    pub users: RwSignal<Vec<AdminUser>>,
    pub pending: RwSignal<Vec<Course>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    /// The course currently awaiting a rejection reason, if any.
    pub rejecting: RwSignal<Option<Course>>,
    pub review_action: Action<ReviewDecision, ()>,
}

impl AdminViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repo = AdminRepository::new(api);

        let analytics = create_rw_signal(None);
        let users = create_rw_signal(Vec::new());
        let pending = create_rw_signal(Vec::new());
        let loading = create_rw_signal(true);
        let error = create_rw_signal(None::<ApiError>);
        let rejecting = create_rw_signal(None::<Course>);

        let load_repo = repo.clone();
        let load = create_action(move |_: &()| {
            let repo = load_repo.clone();
            async move {
                match repo.load_analytics().await {
                    Ok(summary) => analytics.set(Some(summary)),
                    Err(err) => error.set(Some(err)),
                }
                match repo.load_users().await {
                    Ok(list) => users.set(list),
                    Err(err) => error.set(Some(err)),
                }
                match repo.load_pending_courses().await {
                    Ok(list) => pending.set(list),
                    Err(err) => error.set(Some(err)),
                }
                loading.set(false);
            }
        });
        create_effect(move |_| {
            load.dispatch(());
        });

        let review_repo = repo.clone();
        let review_action = create_action(move |decision: &ReviewDecision| {
            let repo = review_repo.clone();
            let decision = decision.clone();
            async move {
                let result = match &decision {
                    ReviewDecision::Approve { course_id } => repo.approve(course_id).await,
                    ReviewDecision::Reject { course_id, reason } => {
                        repo.reject(course_id, reason).await
                    }
                };
                match result {
                    Ok(course) => {
                        pending.update(|queue| repository::remove_reviewed(queue, &course.id));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
            }
        });

        Self {
            analytics,
            users,
            pending,
            loading,
            error,
            rejecting,
            review_action,
        }
    }

    pub fn approve(&self, course_id: &str) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        self.review_action.dispatch(ReviewDecision::Approve {
            course_id: course_id.to_string(),
        });
    }

    /// Rejection goes through the confirm dialog; this is called with the
    /// reason the admin typed.
    pub fn confirm_rejection(&self, reason: String) {
        let Some(course) = self.rejecting.get_untracked() else {
            return;
        };
        self.rejecting.set(None);
        self.review_action.dispatch(ReviewDecision::Reject {
            course_id: course.id,
            reason,
        });
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    match use_context::<AdminViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
