//! Client-side phase state machine.
//!
//! No push channel exists; every client observes the room purely through
//! polled projections and transitions its local view accordingly:
//! `lobby → question → leaderboard → (question | finished)`, cycling per
//! question. This module contains the pure transition logic; the session
//! loop owns the timers and I/O.

use crate::infrastructure::dto::http::RoomStateDto;

/// Lobby polling interval (milliseconds)
pub const LOBBY_POLL_MS: u64 = 3000;

/// Leaderboard polling interval (milliseconds)
pub const LEADERBOARD_POLL_MS: u64 = 2000;

/// Local countdown per question (seconds). Advisory only: the server
/// never enforces per-question timing.
pub const QUESTION_SECONDS: u64 = 20;

/// Local view of the game, per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the host to start
    Lobby,
    /// Answering the question at this index
    Question { index: usize },
    /// Between questions, watching scores come in
    Leaderboard { index: usize },
    /// The quiz has ended
    Finished,
}

/// Compute the next local phase from a freshly polled projection.
///
/// Returns `None` when the poll does not warrant a transition (the
/// client stays where it is until the next tick).
pub fn phase_after_poll(current: &Phase, state: &RoomStateDto) -> Option<Phase> {
    match current {
        Phase::Lobby => match state.status.as_str() {
            // Gate: the server has started the game
            "in-progress" => Some(Phase::Question {
                index: state.current_question_index.max(0) as usize,
            }),
            "finished" => Some(Phase::Finished),
            _ => None,
        },
        Phase::Question { .. } => {
            // The question phase runs on the local countdown, not polls;
            // only a finished room overrides it.
            if state.status == "finished" {
                Some(Phase::Finished)
            } else {
                None
            }
        }
        Phase::Leaderboard { index } => {
            if state.status == "finished" {
                return Some(Phase::Finished);
            }
            // Gate: host advanced the index
            let polled_index = state.current_question_index;
            if polled_index >= 0 && (polled_index as usize) > *index {
                return Some(Phase::Question {
                    index: polled_index as usize,
                });
            }
            None
        }
        Phase::Finished => None,
    }
}
