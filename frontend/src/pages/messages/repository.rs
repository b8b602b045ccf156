//! Data access for the messaging surface. Loads never fail: when the backend
//! cannot be reached the embedded demo fixtures are returned instead, tagged
//! with their origin so the page can say so.

use uuid::Uuid;

use crate::api::fixtures;
use crate::api::types::{
    Fetched, Meeting, MeetingStatus, Message, MessagesPayload, NewMeeting, NewMessage,
    UserProfile,
};
use crate::api::ApiClient;
use crate::utils::time;

#[derive(Clone)]
pub struct MessagingRepository {
    api: ApiClient,
}

impl MessagingRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_messages(&self) -> Fetched<MessagesPayload> {
        match self.api.get_messages().await {
            Ok(payload) => Fetched::live(payload),
            Err(err) => {
                log::warn!("messages unavailable, serving demo data: {}", err);
                Fetched::fallback(fixtures::demo_messages())
            }
        }
    }

    pub async fn load_meetings(&self) -> Fetched<Vec<Meeting>> {
        match self.api.get_meetings().await {
            Ok(meetings) => Fetched::live(meetings),
            Err(err) => {
                log::warn!("meetings unavailable, serving demo data: {}", err);
                Fetched::fallback(fixtures::demo_meetings())
            }
        }
    }

    /// Sends a message, falling back to a locally-built echo when the backend
    /// is unreachable so the thread still updates. The echo's timestamp is
    /// the send time, never the future.
    pub async fn send_message(
        &self,
        draft: &NewMessage,
        sender: Option<&UserProfile>,
    ) -> Fetched<Message> {
        match self.api.send_message(draft).await {
            Ok(message) => Fetched::live(message),
            Err(err) => {
                log::warn!("send failed, echoing locally: {}", err);
                Fetched::fallback(local_echo(draft, sender))
            }
        }
    }

    pub async fn schedule_meeting(&self, draft: &NewMeeting) -> Fetched<Meeting> {
        match self.api.schedule_meeting(draft).await {
            Ok(meeting) => Fetched::live(meeting),
            Err(err) => {
                log::warn!("scheduling failed, creating a local meeting: {}", err);
                Fetched::fallback(local_meeting(draft))
            }
        }
    }
}

pub fn local_echo(draft: &NewMessage, sender: Option<&UserProfile>) -> Message {
    let (sender_id, sender_name) = match sender {
        Some(profile) => (profile.id.clone(), profile.name.clone()),
        None => ("me".to_string(), "You".to_string()),
    };
    Message {
        id: Uuid::new_v4().to_string(),
        sender_id,
        sender_name,
        text: draft.text.clone(),
        timestamp: time::now(),
        is_read: true,
    }
}

pub fn local_meeting(draft: &NewMeeting) -> Meeting {
    Meeting {
        id: Uuid::new_v4().to_string(),
        title: draft.title.clone(),
        participants: draft.participants.clone(),
        date: draft.date,
        time: draft.time.clone(),
        duration_minutes: draft.duration_minutes,
        platform: draft.platform,
        link: fixtures::fallback_meeting_link(&draft.platform),
        status: MeetingStatus::Scheduled,
    }
}
