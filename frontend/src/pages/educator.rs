use crate::api::types::{ApiError, Course, CourseStatus, NewCourse};
use crate::api::ApiClient;
use crate::components::{
    cards::{CourseCard, StatCard},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use leptos::*;

/// (pending, approved, rejected) counts for the header cards.
fn course_counts_by_status(courses: &[Course]) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for course in courses {
        match course.status {
            CourseStatus::Pending => counts.0 += 1,
            CourseStatus::Approved => counts.1 += 1,
            CourseStatus::Rejected => counts.2 += 1,
        }
    }
    counts
}

fn validate_new_course(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Give the course a title.".to_string());
    }
    Ok(())
}

#[component]
pub fn EducatorPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let courses = create_rw_signal(Vec::<Course>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<ApiError>);
    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());

    let load_api = api.clone();
    let load = create_action(move |_: &()| {
        let api = load_api.clone();
        async move {
            match api.get_my_courses().await {
                Ok(list) => courses.set(list),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        }
    });
    create_effect(move |_| {
        load.dispatch(());
    });

    let create_api = api.clone();
    let submit_action = create_action(move |draft: &NewCourse| {
        let api = create_api.clone();
        let draft = draft.clone();
        async move {
            match api.create_course(&draft).await {
                Ok(course) => {
                    courses.update(|list| list.push(course));
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submit_action.pending().get_untracked() {
            return;
        }
        let new_title = title.get_untracked().trim().to_string();
        if let Err(message) = validate_new_course(&new_title) {
            error.set(Some(ApiError::validation(message)));
            return;
        }
        let new_description = description.get_untracked().trim().to_string();
        set_title.set(String::new());
        set_description.set(String::new());
        submit_action.dispatch(NewCourse {
            title: new_title,
            description: if new_description.is_empty() {
                None
            } else {
                Some(new_description)
            },
        });
    };

    let error_signal = Signal::derive(move || error.get());

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-fg">"My Courses"</h1>
                <InlineErrorMessage error=error_signal />
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    {move || {
                        let (pending, approved, rejected) = course_counts_by_status(&courses.get());
                        view! {
                            <div class="grid grid-cols-3 gap-4">
                                <StatCard label="Pending" value=pending.to_string() />
                                <StatCard label="Approved" value=approved.to_string() />
                                <StatCard label="Rejected" value=rejected.to_string() />
                            </div>
                        }
                    }}
                    <section class="space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Submit a new course"</h2>
                        <form
                            class="rounded-lg bg-surface-elevated border border-border shadow-sm p-4 space-y-3"
                            on:submit=on_submit
                        >
                            <input
                                type="text"
                                class="w-full rounded-md border border-border bg-surface p-2 text-sm"
                                placeholder="Course title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                            <textarea
                                class="w-full rounded-md border border-border bg-surface p-2 text-sm"
                                rows=3
                                placeholder="Description (optional)"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                type="submit"
                                class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || submit_action.pending().get()
                            >
                                "Submit for review"
                            </button>
                        </form>
                    </section>
                    <section class="space-y-4">
                        <h2 class="text-lg font-semibold text-fg">"Courses"</h2>
                        <Show
                            when=move || !courses.get().is_empty()
                            fallback=|| view! {
                                <EmptyState
                                    title="No courses yet"
                                    description="Submit your first course above."
                                />
                            }
                        >
                            <div class="grid gap-4 lg:grid-cols-2">
                                <For
                                    each=move || courses.get()
                                    key=|course| course.id.clone()
                                    children=|course| view! { <CourseCard course=course /> }
                                />
                            </div>
                        </Show>
                    </section>
                </Show>
            </div>
        </Layout>
    }
}
