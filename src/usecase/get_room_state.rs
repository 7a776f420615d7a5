//! UseCase: ルーム状態取得
//!
//! 全ポーリングクライアントが使用する正準の読み取り。スコアと
//! メンバーシップはポーリング間隔の間に変化しうるため、毎回ストアから
//! 新しく読み取ります（キャッシュなし）。

use std::sync::Arc;

use crate::domain::{Room, RoomCode, RoomRepository};

use super::error::ActionError;

/// ルーム状態取得のユースケース
pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    /// 新しい GetRoomStateUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームの現在状態を取得する
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - ルームが存在しない（または失効している）
    pub async fn execute(&self, room_id: String) -> Result<Room, ActionError> {
        let code = RoomCode::parse(&room_id)?;
        let room = self.repository.get_room(&code).await?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::time::FixedClock,
        domain::{Question, QuizConfig, Room, RoomCodeFactory, Timestamp, Username},
        infrastructure::repository::InMemoryRoomRepository,
    };

    const T0: i64 = 1_700_000_000_000;

    #[tokio::test]
    async fn test_get_room_state_reads_fresh_state() {
        // テスト項目: 取得のたびに最新のストア状態が返される
        // given (前提条件):
        let repo = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(T0))));
        let config = QuizConfig {
            topic: "magnets".to_string(),
            grade: "4".to_string(),
            difficulty: "easy".to_string(),
            quiz_length: 1,
        };
        let questions = vec![Question {
            kind: "mcq".to_string(),
            text: "Q0".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            answer: "a".to_string(),
            explanation: String::new(),
        }];
        let alice = Username::new("alice".to_string()).unwrap();
        let room = Room::new(
            RoomCodeFactory::generate(),
            alice.clone(),
            config,
            questions,
            Timestamp::new(T0),
        )
        .unwrap();
        let code = room.code.clone();
        repo.insert_room(room).await.unwrap();
        let usecase = GetRoomStateUseCase::new(repo.clone());

        // when (操作): 取得 → スコア変更 → 再取得
        let before = usecase.execute(code.as_str().to_string()).await.unwrap();
        repo.increment_score(&code, &alice, 500).await.unwrap();
        let after = usecase.execute(code.as_str().to_string()).await.unwrap();

        // then (期待する結果):
        assert_eq!(before.scores.get(&alice), Some(&0));
        assert_eq!(after.scores.get(&alice), Some(&500));
    }

    #[tokio::test]
    async fn test_get_unknown_room_state_is_not_found() {
        // テスト項目: 存在しないルームの取得が RoomNotFound になる
        // given (前提条件):
        let repo = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(T0))));
        let usecase = GetRoomStateUseCase::new(repo);

        // when (操作):
        let result = usecase.execute("ABCDEF".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Err(ActionError::RoomNotFound));
    }
}
