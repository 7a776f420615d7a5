//! ドメイン層
//!
//! クイズルームのドメインモデルと、データアクセス・外部コラボレーターの
//! インターフェース（trait）を定義します。具体的な実装は Infrastructure 層が
//! 提供します（依存性の逆転）。

mod error;
mod question_gen;
mod quiz;
mod repository;
mod room;
mod room_code;
mod scoring;
mod timestamp;
mod username;

pub use error::{DomainError, RepositoryError};
pub use question_gen::{QuestionGenError, QuestionGenerator};
#[cfg(test)]
pub use question_gen::MockQuestionGenerator;
#[cfg(test)]
pub use repository::MockRoomRepository;
pub use quiz::{Question, QuizConfig};
pub use repository::RoomRepository;
pub use room::{ROOM_TTL_MILLIS, Room, RoomStatus};
pub use room_code::{CODE_ALPHABET, CODE_LENGTH, RoomCode, RoomCodeFactory};
pub use scoring::{MAX_POINTS, MIN_POINTS, points_for_correct_answer};
pub use timestamp::Timestamp;
pub use username::Username;
