use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::types::{
    ApiError, Envelope, Meeting, Message, MessagesPayload, NewMeeting, NewMessage,
};

impl ApiClient {
    /// Full messaging payload: individual conversations plus course-wide
    /// discussion threads. The fallback-on-failure policy lives one layer up,
    /// in the messaging repository.
    pub async fn get_messages(&self) -> Result<MessagesPayload, ApiError> {
        let envelope: Envelope<MessagesPayload> =
            self.request(Method::GET, "/api/messages", None).await?;
        Ok(envelope.data)
    }

    pub async fn send_message(&self, message: &NewMessage) -> Result<Message, ApiError> {
        let body = serde_json::to_value(message)
            .map_err(|err| ApiError::unknown(err.to_string()))?;
        let envelope: Envelope<Message> = self
            .request(Method::POST, "/api/messages", Some(body))
            .await?;
        Ok(envelope.data)
    }

    pub async fn get_meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        let envelope: Envelope<Vec<Meeting>> =
            self.request(Method::GET, "/api/meetings", None).await?;
        Ok(envelope.data)
    }

    pub async fn schedule_meeting(&self, meeting: &NewMeeting) -> Result<Meeting, ApiError> {
        let body = serde_json::to_value(meeting)
            .map_err(|err| ApiError::unknown(err.to_string()))?;
        let envelope: Envelope<Meeting> = self
            .request(Method::POST, "/api/meetings", Some(body))
            .await?;
        Ok(envelope.data)
    }
}
