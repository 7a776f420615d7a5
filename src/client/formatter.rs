//! Terminal formatting for the quiz client display.

use crate::infrastructure::dto::http::{PlayerScoreDto, QuestionDto, RoomStateDto};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the banner shown after creating or joining a room
    pub fn format_room_banner(state: &RoomStateDto, username: &str) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str(&format!("Room code: {}\n", state.room_id));
        output.push_str(&format!(
            "Topic: {} (grade {}, {}) - {} questions\n",
            state.topic, state.grade, state.difficulty, state.quiz_length
        ));
        let role = if state.host == username {
            "host"
        } else {
            "player"
        };
        output.push_str(&format!("You are '{}' ({})\n", username, role));
        output.push_str("============================================================\n");
        output
    }

    /// Format the lobby player list
    pub fn format_lobby(state: &RoomStateDto) -> String {
        let mut output = String::new();
        output.push_str(&format!("Players in lobby ({}):\n", state.players.len()));
        for player in &state.players {
            let host_suffix = if *player == state.host { " (host)" } else { "" };
            output.push_str(&format!("  - {}{}\n", player, host_suffix));
        }
        output
    }

    /// Format a question with its numbered options
    pub fn format_question(index: usize, total: usize, question: &QuestionDto) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n--- Question {}/{} ---\n{}\n",
            index + 1,
            total,
            question.question
        ));
        for (i, option) in question.options.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, option));
        }
        output.push_str("Answer with 1-4 and press Enter:\n");
        output
    }

    /// Format the reveal after an answer (or a timeout)
    pub fn format_reveal(question: &QuestionDto, was_correct: Option<bool>) -> String {
        let verdict = match was_correct {
            Some(true) => "Correct!",
            Some(false) => "Wrong.",
            None => "Time's up.",
        };
        format!(
            "{} The answer is: {}\n{}\n",
            verdict, question.answer, question.explanation
        )
    }

    /// Format the round leaderboard
    pub fn format_leaderboard(scores: &[PlayerScoreDto], username: &str) -> String {
        let mut output = String::new();
        output.push_str("\nLeaderboard:\n");
        for (rank, entry) in scores.iter().enumerate() {
            let me_suffix = if entry.username == username { " (me)" } else { "" };
            output.push_str(&format!(
                "  {}. {}{} - {} pts\n",
                rank + 1,
                entry.username,
                me_suffix,
                entry.score
            ));
        }
        output
    }

    /// Format the final standings
    pub fn format_final(state: &RoomStateDto, username: &str) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str("Quiz finished! Final standings:\n");
        output.push_str(&Self::format_leaderboard(&state.scores, username));
        if let Some(winner) = state.scores.first() {
            output.push_str(&format!("Winner: {}\n", winner.username));
        }
        output.push_str("============================================================\n");
        output
    }
}
