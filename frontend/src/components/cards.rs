use crate::api::types::{Course, CourseStatus};
use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-5">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-semibold text-fg mt-1">{value}</p>
        </div>
    }
}

pub fn status_badge(status: CourseStatus) -> (&'static str, &'static str) {
    match status {
        CourseStatus::Pending => (
            "Pending review",
            "bg-status-warning-bg text-status-warning-text border-status-warning-border",
        ),
        CourseStatus::Approved => (
            "Approved",
            "bg-status-success-bg text-status-success-text border-status-success-border",
        ),
        CourseStatus::Rejected => (
            "Rejected",
            "bg-status-error-bg text-status-error-text border-status-error-border",
        ),
    }
}

#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    let (badge_label, badge_class) = status_badge(course.status);
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-5 space-y-3">
            <div class="flex items-start justify-between gap-3">
                <h3 class="text-lg font-semibold text-fg">{course.title}</h3>
                <span class=format!("text-xs font-medium px-2 py-1 rounded border {}", badge_class)>
                    {badge_label}
                </span>
            </div>
            {course.description.map(|description| view! {
                <p class="text-sm text-fg-muted">{description}</p>
            })}
            <div class="flex items-center justify-between text-sm text-fg-muted">
                <span>{course.educator_name}</span>
                <span>{format!("{} enrolled", course.enrolled_count)}</span>
            </div>
            {action}
        </div>
    }
}
