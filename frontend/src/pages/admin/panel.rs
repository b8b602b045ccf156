use crate::components::{
    cards::{CourseCard, StatCard},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::admin::repository::format_user_row;
use crate::pages::admin::view_model::{use_admin_view_model, AdminViewModel};
use leptos::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = use_admin_view_model();
    let error_signal = Signal::derive(move || vm.error.get());

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-fg">"Administration"</h1>
                <InlineErrorMessage error=error_signal />
                <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <AnalyticsRow vm=vm />
                    <PendingCourses vm=vm />
                    <UserList vm=vm />
                </Show>
            </div>
            <RejectDialog vm=vm />
        </Layout>
    }
}

#[component]
fn AnalyticsRow(vm: AdminViewModel) -> impl IntoView {
    view! {
        {move || vm.analytics.get().map(|summary| view! {
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                <StatCard label="Users" value=summary.total_users.to_string() />
                <StatCard label="Courses" value=summary.total_courses.to_string() />
                <StatCard label="Active enrollments" value=summary.active_enrollments.to_string() />
                <StatCard label="Pending review" value=summary.pending_courses.to_string() />
            </div>
        })}
    }
}

#[component]
fn PendingCourses(vm: AdminViewModel) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Courses awaiting review"</h2>
            <Show
                when=move || !vm.pending.get().is_empty()
                fallback=|| view! {
                    <EmptyState
                        title="Nothing to review"
                        description="New course submissions will appear here."
                    />
                }
            >
                <div class="grid gap-4 lg:grid-cols-2">
                    <For
                        each=move || vm.pending.get()
                        key=|course| course.id.clone()
                        children=move |course| {
                            let approve_id = course.id.clone();
                            let reject_course = course.clone();
                            let action = view! {
                                <div class="flex gap-2">
                                    <button
                                        type="button"
                                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                                        on:click=move |_| vm.approve(&approve_id)
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        type="button"
                                        class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                                        on:click=move |_| vm.rejecting.set(Some(reject_course.clone()))
                                    >
                                        "Reject"
                                    </button>
                                </div>
                            }.into_view();
                            view! { <CourseCard course=course action=action /> }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn UserList(vm: AdminViewModel) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Users"</h2>
            <div class="rounded-lg bg-surface-elevated border border-border shadow-sm">
                <ul class="divide-y divide-border">
                    <For
                        each=move || vm.users.get()
                        key=|user| user.id.clone()
                        children=|user| {
                            let row = format_user_row(&user);
                            view! {
                                <li class="px-4 py-3 flex items-center justify-between gap-2">
                                    <span class="font-medium text-fg">{user.name.clone()}</span>
                                    <span class="text-sm text-fg-muted">{row}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </section>
    }
}

#[component]
fn RejectDialog(vm: AdminViewModel) -> impl IntoView {
    let is_open = Signal::derive(move || vm.rejecting.get().is_some());
    let message = Signal::derive(move || {
        vm.rejecting
            .get()
            .map(|course| format!("Reject \"{}\"? The educator will see your reason.", course.title))
            .unwrap_or_default()
    });
    view! {
        <ConfirmDialog
            is_open=is_open
            title="Reject course"
            message=message
            confirm_label="Reject"
            require_reason=true
            destructive=true
            on_confirm=Callback::new(move |reason| vm.confirm_rejection(reason))
            on_cancel=Callback::new(move |_| vm.rejecting.set(None))
        />
    }
}
