//! UseCase: ルーム作成
//!
//! コード生成 → 問題生成（外部コラボレーター、ブロッキング）→
//! レコード全体の原子的コミット、の順で実行します。問題生成が失敗した
//! 場合はルームが一切残りません（all-or-nothing）。

use std::sync::Arc;

use crate::{
    common::time::Clock,
    domain::{
        QuestionGenerator, QuizConfig, RepositoryError, Room, RoomCodeFactory, RoomRepository,
        Timestamp, Username,
    },
};

use super::error::ActionError;

/// Maximum quiz length accepted at creation
const MAX_QUIZ_LENGTH: usize = 50;

/// Collision retries before giving up on code allocation
const MAX_CODE_ATTEMPTS: usize = 5;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    question_generator: Arc<dyn QuestionGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        question_generator: Arc<dyn QuestionGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            question_generator,
            clock,
        }
    }

    /// ルームを作成し、作成直後の状態を返す
    ///
    /// # Errors
    ///
    /// * `BadRequest` - ホスト名または quiz_length が不正
    /// * `ServiceUnavailable` - 問題生成またはストアの失敗
    pub async fn execute(&self, config: QuizConfig, host: String) -> Result<Room, ActionError> {
        let host = Username::new(host)?;

        if config.quiz_length == 0 || config.quiz_length > MAX_QUIZ_LENGTH {
            return Err(ActionError::BadRequest(format!(
                "quizLength must be between 1 and {}",
                MAX_QUIZ_LENGTH
            )));
        }

        // Blocks until content is ready; failure aborts creation entirely
        let questions = self.question_generator.generate(&config).await?;

        let created_at = Timestamp::new(self.clock.now_jst_millis());

        // Codes are not cryptographically unique: verify non-existence at
        // commit time and retry on the (unlikely) collision.
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = RoomCodeFactory::generate();
            let room = Room::new(
                code,
                host.clone(),
                config.clone(),
                questions.clone(),
                created_at,
            )?;

            match self.repository.insert_room(room.clone()).await {
                Ok(()) => {
                    tracing::info!(
                        "Room {} created by '{}' ({} questions on '{}')",
                        room.code,
                        host,
                        room.questions.len(),
                        room.config.topic
                    );
                    return Ok(room);
                }
                Err(RepositoryError::RoomCodeTaken(code)) => {
                    tracing::warn!("Room code collision on {}, retrying", code);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ActionError::Internal(
            "could not allocate a unique room code".to_string(),
        ))
    }
}
