//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{
    CreateRoomUseCase, GetRoomStateUseCase, JoinRoomUseCase, NextQuestionUseCase,
    StartGameUseCase, SubmitAnswerUseCase,
};

/// Shared application state
pub struct AppState {
    /// CreateRoomUseCase（ルーム作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
    /// StartGameUseCase（ゲーム開始のユースケース）
    pub start_game_usecase: Arc<StartGameUseCase>,
    /// SubmitAnswerUseCase（回答送信のユースケース）
    pub submit_answer_usecase: Arc<SubmitAnswerUseCase>,
    /// NextQuestionUseCase（問題進行のユースケース）
    pub next_question_usecase: Arc<NextQuestionUseCase>,
}
