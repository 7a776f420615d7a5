//! HTTP API endpoint handlers.
//!
//! The coordinator exposes a single POST endpoint accepting a JSON body
//! `{action, params}`. Every success returns the full room projection
//! (`submitAnswer` returns an ack instead); every failure is converted
//! into the uniform `{error: message}` shape with the matching HTTP
//! status.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::{
    infrastructure::dto::http::{
        ActionName, ActionRequest, CreateRoomParams, ErrorBody, GetRoomStateParams,
        HostActionParams, JoinRoomParams, RoomStateDto, SubmitAck, SubmitAnswerParams,
    },
    usecase::ActionError,
};

use super::state::AppState;

/// Map the action error taxonomy to HTTP statuses
fn status_for(err: &ActionError) -> StatusCode {
    match err {
        ActionError::RoomNotFound => StatusCode::NOT_FOUND,
        ActionError::Forbidden(_) => StatusCode::FORBIDDEN,
        ActionError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ActionError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ActionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Response-side wrapper so `?` works inside the handler
pub struct ApiError(ActionError);

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!("Action failed: {}", self.0);
        } else {
            tracing::warn!("Action rejected: {}", self.0);
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(params)
        .map_err(|e| ApiError(ActionError::BadRequest(format!("invalid params: {e}"))))
}

/// The room action endpoint: `POST /api/multiplayer`
pub async fn room_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActionRequest>,
) -> Result<Response, ApiError> {
    match request.action {
        ActionName::CreateRoom => {
            let params: CreateRoomParams = parse_params(request.params)?;
            let room = state
                .create_room_usecase
                .execute(params.config.into(), params.host)
                .await?;
            Ok(Json(RoomStateDto::from(&room)).into_response())
        }
        ActionName::JoinRoom => {
            let params: JoinRoomParams = parse_params(request.params)?;
            let room = state
                .join_room_usecase
                .execute(params.room_id, params.username)
                .await?;
            Ok(Json(RoomStateDto::from(&room)).into_response())
        }
        ActionName::GetRoomState => {
            let params: GetRoomStateParams = parse_params(request.params)?;
            let room = state.get_room_state_usecase.execute(params.room_id).await?;
            Ok(Json(RoomStateDto::from(&room)).into_response())
        }
        ActionName::StartGame => {
            let params: HostActionParams = parse_params(request.params)?;
            let room = state
                .start_game_usecase
                .execute(params.room_id, params.username)
                .await?;
            Ok(Json(RoomStateDto::from(&room)).into_response())
        }
        ActionName::SubmitAnswer => {
            let params: SubmitAnswerParams = parse_params(request.params)?;
            state
                .submit_answer_usecase
                .execute(
                    params.room_id,
                    params.username,
                    params.question_index,
                    params.is_correct,
                    params.time_taken,
                )
                .await?;
            Ok(Json(SubmitAck { ok: true }).into_response())
        }
        ActionName::NextQuestion => {
            let params: HostActionParams = parse_params(request.params)?;
            let room = state
                .next_question_usecase
                .execute(params.room_id, params.username)
                .await?;
            Ok(Json(RoomStateDto::from(&room)).into_response())
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
