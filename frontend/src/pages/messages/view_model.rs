use crate::api::types::{
    Conversation, ConversationKind, DataOrigin, Meeting, NewMeeting, NewMessage,
};
use crate::api::ApiClient;
use crate::pages::messages::repository::MessagingRepository;
use crate::state::auth::use_auth;
use crate::state::messages as message_state;
use leptos::*;

#[cfg(target_arch = "wasm32")]
pub const POLL_INTERVAL_MS: u32 = 15_000;

#[derive(Clone, Copy)]
pub struct MessagesViewModel {
    pub conversations: RwSignal<Vec<Conversation>>,
    pub course_discussions: RwSignal<Vec<Conversation>>,
    pub meetings: RwSignal<Vec<Meeting>>,
    pub origin: RwSignal<DataOrigin>,
    pub selected: RwSignal<Option<String>>,
    pub draft: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub send_action: Action<NewMessage, ()>,
    pub schedule_action: Action<NewMeeting, ()>,
}

impl MessagesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repo = MessagingRepository::new(api);
        let (auth, _) = use_auth();

        let conversations = create_rw_signal(Vec::new());
        let course_discussions = create_rw_signal(Vec::new());
        let meetings = create_rw_signal(Vec::new());
        let origin = create_rw_signal(DataOrigin::Live);
        let selected = create_rw_signal(None::<String>);
        let draft = create_rw_signal(String::new());
        let loading = create_rw_signal(true);

        let load_repo = repo.clone();
        let load = create_action(move |_: &()| {
            let repo = load_repo.clone();
            async move {
                let payload = repo.load_messages().await;
                let fetched_meetings = repo.load_meetings().await;
                origin.set(if payload.is_fallback() || fetched_meetings.is_fallback() {
                    DataOrigin::Fallback
                } else {
                    DataOrigin::Live
                });
                let mut incoming = payload.data.conversations;
                message_state::sort_by_activity(&mut incoming);
                conversations.set(incoming);
                course_discussions.set(payload.data.course_discussions);
                meetings.set(fetched_meetings.data);
                loading.set(false);
            }
        });
        create_effect(move |_| {
            load.dispatch(());
        });

        let send_repo = repo.clone();
        let send_action = create_action(move |message: &NewMessage| {
            let repo = send_repo.clone();
            let message = message.clone();
            let sender = auth.get_untracked().user;
            async move {
                let sent = repo.send_message(&message, sender.as_ref()).await;
                if sent.is_fallback() {
                    origin.set(DataOrigin::Fallback);
                }
                let target = match message.kind {
                    ConversationKind::Individual => conversations,
                    ConversationKind::Course => course_discussions,
                };
                target.update(|threads| {
                    message_state::append_message(threads, &message.conversation_id, sent.data);
                    message_state::sort_by_activity(threads);
                });
            }
        });

        let schedule_repo = repo.clone();
        let schedule_action = create_action(move |meeting: &NewMeeting| {
            let repo = schedule_repo.clone();
            let meeting = meeting.clone();
            async move {
                let created = repo.schedule_meeting(&meeting).await;
                if created.is_fallback() {
                    origin.set(DataOrigin::Fallback);
                }
                meetings.update(|list| list.push(created.data));
            }
        });

        let vm = Self {
            conversations,
            course_discussions,
            meetings,
            origin,
            selected,
            draft,
            loading,
            send_action,
            schedule_action,
        };
        vm.start_polling(repo);
        vm
    }

    /// Opening a thread marks it read.
    pub fn select(&self, conversation_id: &str) {
        self.selected.set(Some(conversation_id.to_string()));
        let id = conversation_id.to_string();
        self.conversations
            .update(|threads| message_state::mark_read(threads, &id));
        self.course_discussions
            .update(|threads| message_state::mark_read(threads, &id));
    }

    pub fn selected_conversation(&self) -> Option<Conversation> {
        let id = self.selected.get()?;
        self.conversations
            .get()
            .into_iter()
            .chain(self.course_discussions.get())
            .find(|conversation| conversation.id == id)
    }

    pub fn send_draft(&self) {
        let text = self.draft.get_untracked().trim().to_string();
        if text.is_empty() || self.send_action.pending().get_untracked() {
            return;
        }
        let Some(conversation) = self.selected_conversation_untracked() else {
            return;
        };
        self.draft.set(String::new());
        self.send_action.dispatch(NewMessage {
            conversation_id: conversation.id,
            text,
            kind: conversation.kind,
        });
    }

    fn selected_conversation_untracked(&self) -> Option<Conversation> {
        let id = self.selected.get_untracked()?;
        self.conversations
            .get_untracked()
            .into_iter()
            .chain(self.course_discussions.get_untracked())
            .find(|conversation| conversation.id == id)
    }

    pub fn unread_total(&self) -> u32 {
        message_state::total_unread(&self.conversations.get())
            + message_state::total_unread(&self.course_discussions.get())
    }

    #[cfg(target_arch = "wasm32")]
    fn start_polling(&self, repo: MessagingRepository) {
        use gloo_timers::future::TimeoutFuture;

        let conversations = self.conversations;
        let course_discussions = self.course_discussions;
        let origin = self.origin;
        let selected = self.selected;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                let payload = repo.load_messages().await;
                // A demo snapshot never overwrites live data already on screen.
                if payload.is_fallback() && origin.get_untracked() == DataOrigin::Live {
                    continue;
                }
                let mut incoming = payload.data.conversations;
                crate::state::messages::sort_by_activity(&mut incoming);
                if let Some(open) = selected.get_untracked() {
                    crate::state::messages::mark_read(&mut incoming, &open);
                }
                conversations.set(incoming);
                course_discussions.set(payload.data.course_discussions);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_polling(&self, _repo: MessagingRepository) {}
}

pub fn use_messages_view_model() -> MessagesViewModel {
    match use_context::<MessagesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = MessagesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
