//! UseCase: 次の問題へ進行
//!
//! ホスト専用。index を正確に 1 進め、最終問題を越えるときは
//! finished（終端、index は最後の値のまま）に遷移します。

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository, RoomStatus, Username};

use super::error::ActionError;

/// 問題進行のユースケース
pub struct NextQuestionUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl NextQuestionUseCase {
    /// 新しい NextQuestionUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 次の問題へ進み、更新後の状態を返す
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - ルームが存在しない
    /// * `Forbidden` - 呼び出し元がホストではない、またはゲームが未開始
    pub async fn execute(&self, room_id: String, username: String) -> Result<Room, ActionError> {
        let code = RoomCode::parse(&room_id)?;
        let username = Username::new(username)?;

        let mut room = self.repository.get_room(&code).await?;
        room.advance(&username)?;
        self.repository.update_room(room.clone()).await?;

        if room.status == RoomStatus::Finished {
            tracing::info!("Room {} finished", code);
        } else {
            tracing::info!(
                "Room {} advanced to question {}",
                code,
                room.current_question_index
            );
        }
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::time::FixedClock,
        domain::{Question, QuizConfig, Room, RoomCodeFactory, Timestamp},
        infrastructure::repository::InMemoryRoomRepository,
        usecase::StartGameUseCase,
    };

    const T0: i64 = 1_700_000_000_000;

    async fn started_room(quiz_length: usize) -> (Arc<InMemoryRoomRepository>, RoomCode) {
        let repo = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(T0))));
        let config = QuizConfig {
            topic: "space".to_string(),
            grade: "7".to_string(),
            difficulty: "hard".to_string(),
            quiz_length,
        };
        let questions = (0..quiz_length)
            .map(|i| Question {
                kind: "mcq".to_string(),
                text: format!("Q{i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer: "a".to_string(),
                explanation: String::new(),
            })
            .collect();
        let room = Room::new(
            RoomCodeFactory::generate(),
            Username::new("alice".to_string()).unwrap(),
            config,
            questions,
            Timestamp::new(T0),
        )
        .unwrap();
        let code = room.code.clone();
        repo.insert_room(room).await.unwrap();
        StartGameUseCase::new(repo.clone())
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();
        (repo, code)
    }

    #[tokio::test]
    async fn test_advance_walks_the_quiz_to_finished() {
        // テスト項目: quizLength=3 のルームで 3 回の advance が finished に至る
        // given (前提条件):
        let (repo, code) = started_room(3).await;
        let usecase = NextQuestionUseCase::new(repo);

        // when (操作) / then (期待する結果):
        let room = usecase
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();
        assert_eq!(room.current_question_index, 1);

        let room = usecase
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();
        assert_eq!(room.current_question_index, 2);

        let room = usecase
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();
        assert_eq!(room.status, RoomStatus::Finished);
        assert_eq!(room.current_question_index, 2);
    }

    #[tokio::test]
    async fn test_advance_by_non_host_is_forbidden() {
        // テスト項目: ホスト以外の nextQuestion が Forbidden になる
        // given (前提条件):
        let (repo, code) = started_room(3).await;
        let usecase = NextQuestionUseCase::new(repo.clone());

        // when (操作):
        let result = usecase
            .execute(code.as_str().to_string(), "bob".to_string())
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(ActionError::Forbidden(_))));
        let stored = repo.get_room(&code).await.unwrap();
        assert_eq!(stored.current_question_index, 0);
    }
}
