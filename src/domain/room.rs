//! Room エンティティ
//!
//! マルチプレイヤークイズセッションのドメインモデル。ライフサイクル
//! （lobby → in-progress → finished）はこのエンティティのメソッドだけが
//! 進めることができ、逆方向の遷移は存在しません。

use std::collections::{HashMap, HashSet};

use super::{
    error::DomainError,
    quiz::{Question, QuizConfig},
    room_code::RoomCode,
    timestamp::Timestamp,
    username::Username,
};

/// Room record lifetime: 2 hours from creation, not refreshed by activity.
/// A safety net against orphaned rooms, not a gameplay mechanic.
pub const ROOM_TTL_MILLIS: i64 = 2 * 60 * 60 * 1000;

/// Room lifecycle status. Progression is monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    /// Pre-game phase: players may join
    Lobby,
    /// Quiz is running: host advances the question index
    InProgress,
    /// Terminal: the quiz has ended
    Finished,
}

impl RoomStatus {
    /// Wire representation used by the action endpoint and stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Lobby => "lobby",
            RoomStatus::InProgress => "in-progress",
            RoomStatus::Finished => "finished",
        }
    }
}

/// A multiplayer quiz room.
///
/// Holds the fixed quiz configuration and question set, the live
/// membership and score state, and the lifecycle position. All state
/// transitions are validated here; the repository only stores and
/// retrieves the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Canonical 6-character room code
    pub code: RoomCode,
    /// Username of the creating player. Immutable for the room's lifetime.
    pub host: Username,
    /// Lifecycle status
    pub status: RoomStatus,
    /// Quiz configuration, fixed at creation
    pub config: QuizConfig,
    /// Question set, generated once at creation and never changed
    pub questions: Vec<Question>,
    /// -1 while in lobby, then 0..=quiz_length-1
    pub current_question_index: i32,
    /// Players in join order. Membership is a set: re-join is a no-op.
    pub players: Vec<Username>,
    /// Accumulated score per player. Same key set as `players`.
    pub scores: HashMap<Username, u32>,
    /// Question indices each player has already been scored for
    pub answered: HashMap<Username, HashSet<usize>>,
    /// Creation time; TTL expiry is `created_at + ROOM_TTL_MILLIS`
    pub created_at: Timestamp,
}

impl Room {
    /// Create a new room in lobby state with the host as its only player.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::QuestionCountMismatch`] if the generated
    /// question set does not match the configured quiz length.
    pub fn new(
        code: RoomCode,
        host: Username,
        config: QuizConfig,
        questions: Vec<Question>,
        created_at: Timestamp,
    ) -> Result<Self, DomainError> {
        if questions.len() != config.quiz_length {
            return Err(DomainError::QuestionCountMismatch {
                expected: config.quiz_length,
                actual: questions.len(),
            });
        }

        let mut scores = HashMap::new();
        scores.insert(host.clone(), 0);

        Ok(Self {
            code,
            host: host.clone(),
            status: RoomStatus::Lobby,
            config,
            questions,
            current_question_index: -1,
            players: vec![host],
            scores,
            answered: HashMap::new(),
            created_at,
        })
    }

    /// Whether the given player is the room's host
    pub fn is_host(&self, username: &Username) -> bool {
        &self.host == username
    }

    /// Whether the given player has joined the room
    pub fn has_player(&self, username: &Username) -> bool {
        self.players.contains(username)
    }

    /// Add a player while the room is in the lobby.
    ///
    /// Re-joining by an existing member is a no-op (set semantics).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::RoomNotJoinable`] once the game has started.
    pub fn add_player(&mut self, username: Username) -> Result<(), DomainError> {
        if self.status != RoomStatus::Lobby {
            return Err(DomainError::RoomNotJoinable);
        }
        if self.has_player(&username) {
            return Ok(());
        }
        self.scores.insert(username.clone(), 0);
        self.players.push(username);
        Ok(())
    }

    /// Start the game: lobby → in-progress, index to 0.
    ///
    /// A repeated call once the room has left the lobby is a no-op; the
    /// question index is never reset. A host-only room may start.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotHost`] if called by anyone but the host.
    pub fn start(&mut self, by: &Username) -> Result<(), DomainError> {
        if !self.is_host(by) {
            return Err(DomainError::NotHost(by.as_str().to_string()));
        }
        if self.status == RoomStatus::Lobby {
            self.status = RoomStatus::InProgress;
            self.current_question_index = 0;
        }
        Ok(())
    }

    /// Advance to the next question, or finish the quiz at the last one.
    ///
    /// The index increments by exactly 1; past the last question the room
    /// becomes `Finished` with the index unchanged. Calls on a finished
    /// room are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotHost`] for non-host callers and
    /// [`DomainError::RoomNotInProgress`] if the game has not started.
    pub fn advance(&mut self, by: &Username) -> Result<(), DomainError> {
        if !self.is_host(by) {
            return Err(DomainError::NotHost(by.as_str().to_string()));
        }
        match self.status {
            RoomStatus::Lobby => Err(DomainError::RoomNotInProgress),
            RoomStatus::Finished => Ok(()),
            RoomStatus::InProgress => {
                if self.current_question_index >= self.config.quiz_length as i32 - 1 {
                    self.status = RoomStatus::Finished;
                } else {
                    self.current_question_index += 1;
                }
                Ok(())
            }
        }
    }

    /// Validate an answer submission before any scoring side effect.
    ///
    /// # Errors
    ///
    /// * [`DomainError::RoomNotInProgress`] - room is in lobby or finished
    /// * [`DomainError::PlayerNotInRoom`] - submitter never joined
    /// * [`DomainError::QuestionIndexOutOfRange`] - index outside the quiz
    pub fn check_answer_submission(
        &self,
        username: &Username,
        question_index: usize,
    ) -> Result<(), DomainError> {
        if self.status != RoomStatus::InProgress {
            return Err(DomainError::RoomNotInProgress);
        }
        if !self.has_player(username) {
            return Err(DomainError::PlayerNotInRoom(username.as_str().to_string()));
        }
        if question_index >= self.config.quiz_length {
            return Err(DomainError::QuestionIndexOutOfRange {
                index: question_index,
                quiz_length: self.config.quiz_length,
            });
        }
        Ok(())
    }

    /// Whether the player has already been scored for the question
    pub fn has_answered(&self, username: &Username, question_index: usize) -> bool {
        self.answered
            .get(username)
            .is_some_and(|set| set.contains(&question_index))
    }

    /// Scores ranked descending. Ties keep join order (stable sort).
    pub fn ranked_scores(&self) -> Vec<(Username, u32)> {
        let mut ranked: Vec<(Username, u32)> = self
            .players
            .iter()
            .map(|p| (p.clone(), self.scores.get(p).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
