//! UseCase 層
//!
//! コーディネーターの各操作を 1 ユースケース 1 構造体で実装します。
//! Repository と QuestionGenerator の trait にのみ依存し、Infrastructure
//! 層の具体的な実装には依存しません。

mod create_room;
mod error;
mod get_room_state;
mod join_room;
mod next_question;
mod start_game;
mod submit_answer;

pub use create_room::CreateRoomUseCase;
pub use error::ActionError;
pub use get_room_state::GetRoomStateUseCase;
pub use join_room::JoinRoomUseCase;
pub use next_question::NextQuestionUseCase;
pub use start_game::StartGameUseCase;
pub use submit_answer::SubmitAnswerUseCase;
