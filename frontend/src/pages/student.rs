use crate::api::types::{ApiError, Course, Enrollment};
use crate::api::ApiClient;
use crate::components::{
    cards::{CourseCard, StatCard},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use leptos::*;

/// Mean progress across enrollments, 0 when there are none.
fn average_progress(enrollments: &[Enrollment]) -> f32 {
    if enrollments.is_empty() {
        return 0.0;
    }
    let total: f32 = enrollments
        .iter()
        .map(|enrollment| enrollment.progress_percent)
        .sum();
    total / enrollments.len() as f32
}

/// Catalog courses the student has not enrolled in yet.
fn available_courses(catalog: &[Course], enrollments: &[Enrollment]) -> Vec<Course> {
    catalog
        .iter()
        .filter(|course| {
            !enrollments
                .iter()
                .any(|enrollment| enrollment.course_id == course.id)
        })
        .cloned()
        .collect()
}

#[component]
pub fn StudentPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let enrollments = create_rw_signal(Vec::<Enrollment>::new());
    let catalog = create_rw_signal(Vec::<Course>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<ApiError>);

    let load_api = api.clone();
    let load = create_action(move |_: &()| {
        let api = load_api.clone();
        async move {
            match api.get_my_enrollments().await {
                Ok(list) => enrollments.set(list),
                Err(err) => error.set(Some(err)),
            }
            match api.get_approved_courses().await {
                Ok(list) => catalog.set(list),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        }
    });
    create_effect(move |_| {
        load.dispatch(());
    });

    let enroll_api = api.clone();
    let enroll_action = create_action(move |course_id: &String| {
        let api = enroll_api.clone();
        let course_id = course_id.clone();
        async move {
            match api.enroll(&course_id).await {
                Ok(enrollment) => {
                    enrollments.update(|list| list.push(enrollment));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let open_courses = move || available_courses(&catalog.get(), &enrollments.get());
    let error_signal = Signal::derive(move || error.get());

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-fg">"My Learning"</h1>
                <InlineErrorMessage error=error_signal />
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    {move || view! {
                        <div class="grid grid-cols-2 gap-4">
                            <StatCard
                                label="Enrolled courses"
                                value=enrollments.get().len().to_string()
                            />
                            <StatCard
                                label="Average progress"
                                value=format!("{:.0}%", average_progress(&enrollments.get()))
                            />
                        </div>
                    }}
                    <section class="space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Enrolled"</h2>
                        <Show
                            when=move || !enrollments.get().is_empty()
                            fallback=|| view! {
                                <EmptyState
                                    title="No enrollments yet"
                                    description="Browse the catalog below to get started."
                                />
                            }
                        >
                            <ul class="divide-y divide-border rounded-lg bg-surface-elevated border border-border shadow-sm">
                                <For
                                    each=move || enrollments.get()
                                    key=|enrollment| enrollment.id.clone()
                                    children=|enrollment| view! {
                                        <li class="px-4 py-3 flex items-center justify-between gap-2">
                                            <span class="font-medium text-fg">{enrollment.course_title.clone()}</span>
                                            <span class="text-sm text-fg-muted">
                                                {format!("{:.0}%", enrollment.progress_percent)}
                                            </span>
                                        </li>
                                    }
                                />
                            </ul>
                        </Show>
                    </section>
                    <section class="space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Course catalog"</h2>
                        <div class="grid gap-4 lg:grid-cols-2">
                            <For
                                each=open_courses
                                key=|course| course.id.clone()
                                children=move |course| {
                                    let course_id = course.id.clone();
                                    let action = view! {
                                        <button
                                            type="button"
                                            class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                            disabled=move || enroll_action.pending().get()
                                            on:click=move |_| enroll_action.dispatch(course_id.clone())
                                        >
                                            "Enroll"
                                        </button>
                                    }.into_view();
                                    view! { <CourseCard course=course action=action /> }
                                }
                            />
                        </div>
                    </section>
                </Show>
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::token::Role;
    use crate::test_support::helpers::{provide_auth, user_with_role};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn student_page_renders_its_shell() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://unused.invalid"));
            provide_auth(Some(user_with_role(Role::Student)));
            view! { <StudentPage /> }
        });
        assert!(html.contains("My Learning"));
        assert!(html.contains("animate-spin"));
    }
}
