use crate::api::types::{Conversation, DataOrigin, MeetingPlatform, NewMeeting};
use crate::components::{
    empty_state::EmptyState,
    layout::{DemoDataBanner, Layout, LoadingSpinner},
};
use crate::pages::messages::view_model::{use_messages_view_model, MessagesViewModel};
use crate::utils::time;
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let vm = use_messages_view_model();
    let is_demo = Signal::derive(move || vm.origin.get() == DataOrigin::Fallback);

    view! {
        <Layout>
            <DemoDataBanner visible=is_demo />
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="space-y-6">
                    <ConversationList vm=vm />
                    <MeetingList vm=vm />
                </div>
                <div class="lg:col-span-2">
                    <Thread vm=vm />
                </div>
            </div>
        </Layout>
    }
}

#[component]
fn ConversationList(vm: MessagesViewModel) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm">
            <div class="px-4 py-3 border-b border-border flex items-center justify-between">
                <h2 class="font-semibold text-fg">"Conversations"</h2>
                <Show when=move || { vm.unread_total() > 0 }>
                    <span class="text-xs font-medium px-2 py-0.5 rounded-full bg-action-primary-bg text-action-primary-text">
                        {move || vm.unread_total()}
                    </span>
                </Show>
            </div>
            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <ul class="divide-y divide-border">
                    <For
                        each=move || vm.conversations.get()
                        key=|conversation| conversation.id.clone()
                        children=move |conversation| conversation_row(vm, conversation)
                    />
                </ul>
                <div class="px-4 py-2 border-t border-border">
                    <h3 class="text-xs font-semibold uppercase tracking-wide text-fg-muted">
                        "Course discussions"
                    </h3>
                </div>
                <ul class="divide-y divide-border">
                    <For
                        each=move || vm.course_discussions.get()
                        key=|conversation| conversation.id.clone()
                        children=move |conversation| conversation_row(vm, conversation)
                    />
                </ul>
            </Show>
        </div>
    }
}

fn conversation_row(vm: MessagesViewModel, conversation: Conversation) -> impl IntoView {
    let id = conversation.id.clone();
    let selected = move || vm.selected.get().as_deref() == Some(id.as_str());
    let select_id = conversation.id.clone();
    view! {
        <li>
            <button
                type="button"
                class=move || format!(
                    "w-full text-left px-4 py-3 hover:bg-surface-muted {}",
                    if selected() { "bg-surface-muted" } else { "" }
                )
                on:click=move |_| vm.select(&select_id)
            >
                <div class="flex items-center justify-between gap-2">
                    <span class="font-medium text-fg">{conversation.title.clone()}</span>
                    <Show when=move || { conversation.unread_count > 0 }>
                        <span class="text-xs font-medium px-2 py-0.5 rounded-full bg-action-primary-bg text-action-primary-text">
                            {conversation.unread_count}
                        </span>
                    </Show>
                </div>
                <p class="text-xs text-fg-muted mt-0.5">
                    {time::format_timestamp(conversation.last_activity)}
                </p>
            </button>
        </li>
    }
}

#[component]
fn Thread(vm: MessagesViewModel) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm flex flex-col min-h-[24rem]">
            {move || match vm.selected_conversation() {
                None => view! {
                    <div class="p-6">
                        <EmptyState
                            title="No conversation selected"
                            description="Pick a conversation to read and reply."
                        />
                    </div>
                }.into_view(),
                Some(conversation) => view! {
                    <div class="px-4 py-3 border-b border-border">
                        <h2 class="font-semibold text-fg">{conversation.title.clone()}</h2>
                    </div>
                    <div class="flex-1 p-4 space-y-3 overflow-y-auto">
                        {conversation.messages.iter().map(|message| view! {
                            <div class="rounded-lg bg-surface-muted p-3">
                                <div class="flex items-center justify-between text-xs text-fg-muted">
                                    <span class="font-medium">{message.sender_name.clone()}</span>
                                    <span>{time::format_timestamp(message.timestamp)}</span>
                                </div>
                                <p class="text-sm text-fg mt-1">{message.text.clone()}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <Composer vm=vm />
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Composer(vm: MessagesViewModel) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.send_draft();
    };
    view! {
        <form class="border-t border-border p-3 flex gap-2" on:submit=on_submit>
            <input
                type="text"
                class="flex-1 rounded-md border border-border bg-surface p-2 text-sm"
                placeholder="Write a message"
                prop:value=move || vm.draft.get()
                on:input=move |ev| vm.draft.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || vm.send_action.pending().get()
            >
                "Send"
            </button>
        </form>
    }
}

#[component]
fn MeetingList(vm: MessagesViewModel) -> impl IntoView {
    let (show_form, set_show_form) = create_signal(false);
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm">
            <div class="px-4 py-3 border-b border-border flex items-center justify-between">
                <h2 class="font-semibold text-fg">"Meetings"</h2>
                <button
                    type="button"
                    class="text-sm font-medium text-action-primary-bg hover:underline"
                    on:click=move |_| set_show_form.update(|open| *open = !*open)
                >
                    "Schedule"
                </button>
            </div>
            <Show when=move || show_form.get()>
                <MeetingForm vm=vm on_done=Callback::new(move |_| set_show_form.set(false)) />
            </Show>
            <ul class="divide-y divide-border">
                <For
                    each=move || vm.meetings.get()
                    key=|meeting| meeting.id.clone()
                    children=|meeting| view! {
                        <li class="px-4 py-3">
                            <div class="flex items-center justify-between gap-2">
                                <span class="font-medium text-fg">{meeting.title.clone()}</span>
                                <span class="text-xs text-fg-muted">{meeting.platform.as_str()}</span>
                            </div>
                            <p class="text-xs text-fg-muted mt-0.5">
                                {format!("{} {} · {} min", meeting.date, meeting.time, meeting.duration_minutes)}
                            </p>
                            <a
                                href=meeting.link.clone()
                                target="_blank"
                                rel="noopener"
                                class="text-xs text-action-primary-bg hover:underline"
                            >
                                "Join"
                            </a>
                        </li>
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn MeetingForm(vm: MessagesViewModel, on_done: Callback<()>) -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (start, set_start) = create_signal(String::new());
    let (platform, set_platform) = create_signal(MeetingPlatform::Zoom);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(date) = NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d") else {
            return;
        };
        let title = title.get_untracked().trim().to_string();
        if title.is_empty() {
            return;
        }
        vm.schedule_action.dispatch(NewMeeting {
            title,
            participants: vec![],
            date,
            time: start.get_untracked(),
            duration_minutes: 30,
            platform: platform.get_untracked(),
        });
        on_done.call(());
    };

    view! {
        <form class="p-4 space-y-2 border-b border-border" on:submit=on_submit>
            <input
                type="text"
                class="w-full rounded-md border border-border bg-surface p-2 text-sm"
                placeholder="Meeting title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <div class="flex gap-2">
                <input
                    type="date"
                    class="flex-1 rounded-md border border-border bg-surface p-2 text-sm"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    class="flex-1 rounded-md border border-border bg-surface p-2 text-sm"
                    prop:value=move || start.get()
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
            </div>
            <select
                class="w-full rounded-md border border-border bg-surface p-2 text-sm"
                on:change=move |ev| {
                    set_platform.set(match event_target_value(&ev).as_str() {
                        "Google Meet" => MeetingPlatform::GoogleMeet,
                        "Teams" => MeetingPlatform::Teams,
                        _ => MeetingPlatform::Zoom,
                    })
                }
            >
                <option>"Zoom"</option>
                <option>"Google Meet"</option>
                <option>"Teams"</option>
            </select>
            <button
                type="submit"
                class="w-full rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "Schedule meeting"
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::api::token::Role;
    use crate::test_support::helpers::{provide_auth, user_with_role};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn messages_page_renders_its_shell() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://unused.invalid"));
            provide_auth(Some(user_with_role(Role::Student)));
            view! { <MessagesPage /> }
        });
        assert!(html.contains("Conversations"));
        assert!(html.contains("Meetings"));
        assert!(html.contains("No conversation selected"));
    }
}
