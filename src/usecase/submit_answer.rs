//! UseCase: 回答送信
//!
//! 誤答は成功として扱われるが何も変更しません。正答は
//! `max(10, 1000 - floor(timeTaken * 40))` ポイントを原子的に加算します。
//! 同じ (player, questionIndex) への二度目の採点は行われません
//! （at-most-once スコアリング）。

use std::sync::Arc;

use crate::domain::{RoomCode, RoomRepository, Username, points_for_correct_answer};

use super::error::ActionError;

/// 回答送信のユースケース
pub struct SubmitAnswerUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl SubmitAnswerUseCase {
    /// 新しい SubmitAnswerUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 回答を採点する
    ///
    /// # Errors
    ///
    /// * `RoomNotFound` - ルームが存在しない
    /// * `Forbidden` - ルームが in-progress ではない、送信者が非メンバー、
    ///   または index が範囲外
    pub async fn execute(
        &self,
        room_id: String,
        username: String,
        question_index: usize,
        is_correct: bool,
        time_taken_seconds: f64,
    ) -> Result<(), ActionError> {
        let code = RoomCode::parse(&room_id)?;
        let username = Username::new(username)?;

        let room = self.repository.get_room(&code).await?;
        room.check_answer_submission(&username, question_index)?;

        // Wrong answers never affect score
        if !is_correct {
            tracing::debug!(
                "Player '{}' answered question {} of room {} incorrectly",
                username,
                question_index,
                code
            );
            return Ok(());
        }

        // At-most-once: only the first correct submission per question scores
        let newly_marked = self
            .repository
            .mark_answered(&code, &username, question_index)
            .await?;
        if !newly_marked {
            tracing::debug!(
                "Duplicate submission from '{}' for question {} of room {}",
                username,
                question_index,
                code
            );
            return Ok(());
        }

        let points = points_for_correct_answer(time_taken_seconds);
        self.repository
            .increment_score(&code, &username, points)
            .await?;

        tracing::info!(
            "Player '{}' scored {} points on question {} of room {}",
            username,
            points,
            question_index,
            code
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::time::FixedClock,
        domain::{Question, QuizConfig, Room, RoomCodeFactory, Timestamp},
        infrastructure::repository::InMemoryRoomRepository,
        usecase::{JoinRoomUseCase, StartGameUseCase},
    };

    const T0: i64 = 1_700_000_000_000;

    async fn started_room_with_bob() -> (Arc<InMemoryRoomRepository>, RoomCode) {
        let repo = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(T0))));
        let config = QuizConfig {
            topic: "light".to_string(),
            grade: "6".to_string(),
            difficulty: "easy".to_string(),
            quiz_length: 3,
        };
        let questions = (0..3)
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
        JoinRoomUseCase::new(repo.clone())
            .execute(code.as_str().to_string(), "bob".to_string())
            .await
            .unwrap();
        StartGameUseCase::new(repo.clone())
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();
        (repo, code)
    }

    fn user(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_correct_answer_in_five_seconds_scores_800() {
        // テスト項目: 5 秒での正答が 1000 - 200 = 800 ポイントになる
        // given (前提条件):
        let (repo, code) = started_room_with_bob().await;
        let usecase = SubmitAnswerUseCase::new(repo.clone());

        // when (操作):
        usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 0, true, 5.0)
            .await
            .unwrap();

        // then (期待する結果):
        let room = repo.get_room(&code).await.unwrap();
        assert_eq!(room.scores.get(&user("bob")), Some(&800));
    }

    #[tokio::test]
    async fn test_wrong_answer_changes_nothing() {
        // テスト項目: 誤答が成功として扱われ、スコアが変化しない
        // given (前提条件):
        let (repo, code) = started_room_with_bob().await;
        let usecase = SubmitAnswerUseCase::new(repo.clone());

        // when (操作):
        let result = usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 0, false, 2.0)
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let room = repo.get_room(&code).await.unwrap();
        assert_eq!(room.scores.get(&user("bob")), Some(&0));
    }

    #[tokio::test]
    async fn test_duplicate_submission_scores_once() {
        // テスト項目: 同じ問題への二度目の正答送信が採点されない
        // given (前提条件):
        let (repo, code) = started_room_with_bob().await;
        let usecase = SubmitAnswerUseCase::new(repo.clone());

        // when (操作):
        usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 0, true, 0.0)
            .await
            .unwrap();
        usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 0, true, 0.0)
            .await
            .unwrap();

        // then (期待する結果):
        let room = repo.get_room(&code).await.unwrap();
        assert_eq!(room.scores.get(&user("bob")), Some(&1000));
    }

    #[tokio::test]
    async fn test_scores_accumulate_across_questions() {
        // テスト項目: 複数問題のスコアが上書きではなく累積される
        // given (前提条件):
        let (repo, code) = started_room_with_bob().await;
        let usecase = SubmitAnswerUseCase::new(repo.clone());

        // when (操作):
        usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 0, true, 0.0)
            .await
            .unwrap();
        usecase
            .execute(code.as_str().to_string(), "bob".to_string(), 1, true, 25.0)
            .await
            .unwrap();

        // then (期待する結果): 1000 + 10
        let room = repo.get_room(&code).await.unwrap();
        assert_eq!(room.scores.get(&user("bob")), Some(&1010));
    }

    #[tokio::test]
    async fn test_submission_outside_in_progress_is_forbidden() {
        // テスト項目: lobby 状態・範囲外 index・非メンバーの送信が拒否される
        // given (前提条件):
        let repo = Arc::new(InMemoryRoomRepository::new(Arc::new(FixedClock::new(T0))));
        let config = QuizConfig {
            topic: "light".to_string(),
            grade: "6".to_string(),
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
        let room = Room::new(
            RoomCodeFactory::generate(),
            user("alice"),
            config,
            questions,
            Timestamp::new(T0),
        )
        .unwrap();
        let code = room.code.clone();
        repo.insert_room(room).await.unwrap();
        let usecase = SubmitAnswerUseCase::new(repo.clone());

        // when (操作): lobby 中の送信
        let in_lobby = usecase
            .execute(code.as_str().to_string(), "alice".to_string(), 0, true, 1.0)
            .await;

        StartGameUseCase::new(repo.clone())
            .execute(code.as_str().to_string(), "alice".to_string())
            .await
            .unwrap();

        let out_of_range = usecase
            .execute(code.as_str().to_string(), "alice".to_string(), 1, true, 1.0)
            .await;
        let non_member = usecase
            .execute(code.as_str().to_string(), "mallory".to_string(), 0, true, 1.0)
            .await;

        // then (期待する結果):
        assert!(matches!(in_lobby, Err(ActionError::Forbidden(_))));
        assert!(matches!(out_of_range, Err(ActionError::Forbidden(_))));
        assert!(matches!(non_member, Err(ActionError::Forbidden(_))));
    }
}
