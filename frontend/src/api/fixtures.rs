//! Embedded demo data. When the backend is unreachable the messaging surface
//! falls back to these fixtures so the UI stays browsable; the origin is
//! tagged `Fallback` and surfaced as a banner rather than passed off as live.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::api::types::{
    Conversation, ConversationKind, Meeting, MeetingPlatform, MeetingStatus, Message,
    MessagesPayload,
};
use crate::utils::time;

pub fn demo_messages() -> MessagesPayload {
    let now = time::now();
    MessagesPayload {
        conversations: vec![
            Conversation {
                id: "demo-conv-1".to_string(),
                kind: ConversationKind::Individual,
                title: "Dr. Sarah Chen".to_string(),
                participant_id: Some("demo-user-2".to_string()),
                course_id: None,
                messages: vec![
                    Message {
                        id: "demo-msg-1".to_string(),
                        sender_id: "demo-user-2".to_string(),
                        sender_name: "Dr. Sarah Chen".to_string(),
                        text: "Hi! Your assignment 3 feedback is up.".to_string(),
                        timestamp: now - Duration::hours(5),
                        is_read: true,
                    },
                    Message {
                        id: "demo-msg-2".to_string(),
                        sender_id: "demo-user-2".to_string(),
                        sender_name: "Dr. Sarah Chen".to_string(),
                        text: "Let me know if the grading rubric is unclear.".to_string(),
                        timestamp: now - Duration::hours(2),
                        is_read: false,
                    },
                ],
                last_activity: now - Duration::hours(2),
                unread_count: 1,
            },
            Conversation {
                id: "demo-conv-2".to_string(),
                kind: ConversationKind::Individual,
                title: "Mark Rivera".to_string(),
                participant_id: Some("demo-user-3".to_string()),
                course_id: None,
                messages: vec![Message {
                    id: "demo-msg-3".to_string(),
                    sender_id: "demo-user-3".to_string(),
                    sender_name: "Mark Rivera".to_string(),
                    text: "Want to pair on the final project this week?".to_string(),
                    timestamp: now - Duration::days(1),
                    is_read: true,
                }],
                last_activity: now - Duration::days(1),
                unread_count: 0,
            },
        ],
        course_discussions: vec![Conversation {
            id: "demo-disc-1".to_string(),
            kind: ConversationKind::Course,
            title: "Intro to Data Science — Q&A".to_string(),
            participant_id: None,
            course_id: Some("demo-course-1".to_string()),
            messages: vec![Message {
                id: "demo-msg-4".to_string(),
                sender_id: "demo-user-4".to_string(),
                sender_name: "Priya Nair".to_string(),
                text: "Is the dataset for week 4 posted yet?".to_string(),
                timestamp: now - Duration::hours(8),
                is_read: true,
            }],
            last_activity: now - Duration::hours(8),
            unread_count: 0,
        }],
    }
}

pub fn demo_meetings() -> Vec<Meeting> {
    let today = time::now().date_naive();
    vec![
        Meeting {
            id: "demo-meet-1".to_string(),
            title: "Office hours".to_string(),
            participants: vec!["Dr. Sarah Chen".to_string()],
            date: today + Duration::days(1),
            time: "14:00".to_string(),
            duration_minutes: 30,
            platform: MeetingPlatform::Zoom,
            link: fallback_meeting_link(&MeetingPlatform::Zoom),
            status: MeetingStatus::Scheduled,
        },
        Meeting {
            id: "demo-meet-2".to_string(),
            title: "Project sync".to_string(),
            participants: vec!["Mark Rivera".to_string()],
            date: past_date(today, 3),
            time: "10:30".to_string(),
            duration_minutes: 45,
            platform: MeetingPlatform::GoogleMeet,
            link: fallback_meeting_link(&MeetingPlatform::GoogleMeet),
            status: MeetingStatus::Completed,
        },
    ]
}

fn past_date(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

/// Generates a plausible join link for a meeting created while offline.
/// Zoom links carry a ten-digit meeting id, Meet a `xxx-xxxx-xxx` code.
pub fn fallback_meeting_link(platform: &MeetingPlatform) -> String {
    let id = Uuid::new_v4();
    match platform {
        MeetingPlatform::Zoom => {
            let digits = 1_000_000_000u128 + id.as_u128() % 9_000_000_000u128;
            format!("https://zoom.us/j/{}", digits)
        }
        MeetingPlatform::GoogleMeet => {
            let letters: Vec<u8> = id.as_bytes().iter().map(|b| (b % 26) + b'a').collect();
            format!(
                "https://meet.google.com/{}-{}-{}",
                std::str::from_utf8(&letters[0..3]).unwrap_or("abc"),
                std::str::from_utf8(&letters[3..7]).unwrap_or("defg"),
                std::str::from_utf8(&letters[7..10]).unwrap_or("hij"),
            )
        }
        MeetingPlatform::Teams => {
            format!("https://teams.microsoft.com/l/meetup-join/{}", id)
        }
    }
}
