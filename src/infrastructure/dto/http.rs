//! HTTP wire types for the room action endpoint.
//!
//! Field names are camelCase on the wire (the reference clients are
//! browser-side JavaScript); Rust code uses snake_case via serde renames.

use serde::{Deserialize, Serialize};

/// Action names accepted by the room action endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionName {
    CreateRoom,
    JoinRoom,
    GetRoomState,
    StartGame,
    SubmitAnswer,
    NextQuestion,
}

/// Request envelope: `{"action": ..., "params": {...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ActionName,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Quiz configuration as sent by the creating client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfigDto {
    pub topic: String,
    pub grade: String,
    pub difficulty: String,
    pub quiz_length: usize,
}

/// Params for `createRoom`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomParams {
    pub config: QuizConfigDto,
    pub host: String,
}

/// Params for `joinRoom`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomParams {
    pub room_id: String,
    pub username: String,
}

/// Params for `getRoomState`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRoomStateParams {
    pub room_id: String,
}

/// Params for `startGame` and `nextQuestion`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostActionParams {
    pub room_id: String,
    pub username: String,
}

/// Params for `submitAnswer`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerParams {
    pub room_id: String,
    pub username: String,
    pub question_index: usize,
    pub is_correct: bool,
    pub time_taken: f64,
}

/// A quiz question on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScoreDto {
    pub username: String,
    pub score: u32,
}

/// The full room projection returned by every successful action.
///
/// This is the canonical read used by all polling clients; the server
/// assembles it fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub room_id: String,
    pub host: String,
    pub status: String,
    pub topic: String,
    pub grade: String,
    pub difficulty: String,
    pub quiz_length: usize,
    pub current_question_index: i32,
    pub players: Vec<String>,
    /// Ranked descending by score; ties keep join order
    pub scores: Vec<PlayerScoreDto>,
    pub questions: Vec<QuestionDto>,
}

/// Success body for `submitAnswer` (no projection is returned)
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAck {
    pub ok: bool,
}

/// Uniform error body: `{"error": message}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
