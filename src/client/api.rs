//! HTTP API wrapper for the room action endpoint.

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::infrastructure::dto::http::{
    ActionName, ActionRequest, ErrorBody, QuizConfigDto, RoomStateDto, SubmitAck,
};

use super::error::ClientError;

/// Client for the quiz room action endpoint.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given server base URL
    /// (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_action<T: DeserializeOwned>(
        &self,
        action: ActionName,
        params: serde_json::Value,
    ) -> Result<T, ClientError> {
        let request = ActionRequest { action, params };
        let response = self
            .http
            .post(format!("{}/api/multiplayer", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Create a room and return its initial projection
    pub async fn create_room(
        &self,
        config: QuizConfigDto,
        host: &str,
    ) -> Result<RoomStateDto, ClientError> {
        self.post_action(
            ActionName::CreateRoom,
            json!({"config": config, "host": host}),
        )
        .await
    }

    /// Join a room by code
    pub async fn join_room(
        &self,
        room_id: &str,
        username: &str,
    ) -> Result<RoomStateDto, ClientError> {
        self.post_action(
            ActionName::JoinRoom,
            json!({"roomId": room_id, "username": username}),
        )
        .await
    }

    /// Poll the current room state
    pub async fn get_room_state(&self, room_id: &str) -> Result<RoomStateDto, ClientError> {
        self.post_action(ActionName::GetRoomState, json!({"roomId": room_id}))
            .await
    }

    /// Start the game (host only)
    pub async fn start_game(
        &self,
        room_id: &str,
        username: &str,
    ) -> Result<RoomStateDto, ClientError> {
        self.post_action(
            ActionName::StartGame,
            json!({"roomId": room_id, "username": username}),
        )
        .await
    }

    /// Submit an answer for scoring
    pub async fn submit_answer(
        &self,
        room_id: &str,
        username: &str,
        question_index: usize,
        is_correct: bool,
        time_taken_seconds: f64,
    ) -> Result<(), ClientError> {
        let _ack: SubmitAck = self
            .post_action(
                ActionName::SubmitAnswer,
                json!({
                    "roomId": room_id,
                    "username": username,
                    "questionIndex": question_index,
                    "isCorrect": is_correct,
                    "timeTaken": time_taken_seconds,
                }),
            )
            .await?;
        Ok(())
    }

    /// Advance to the next question (host only)
    pub async fn next_question(
        &self,
        room_id: &str,
        username: &str,
    ) -> Result<RoomStateDto, ClientError> {
        self.post_action(
            ActionName::NextQuestion,
            json!({"roomId": room_id, "username": username}),
        )
        .await
    }
}
