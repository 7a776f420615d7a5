//! Domain Model と DTO の変換

use crate::domain::{Question, QuizConfig, Room};

use super::http::{PlayerScoreDto, QuestionDto, QuizConfigDto, RoomStateDto};

impl From<QuizConfigDto> for QuizConfig {
    fn from(dto: QuizConfigDto) -> Self {
        QuizConfig {
            topic: dto.topic,
            grade: dto.grade,
            difficulty: dto.difficulty,
            quiz_length: dto.quiz_length,
        }
    }
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Question {
            kind: dto.kind,
            text: dto.question,
            options: dto.options,
            answer: dto.answer,
            explanation: dto.explanation,
        }
    }
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            kind: question.kind.clone(),
            question: question.text.clone(),
            options: question.options.clone(),
            answer: question.answer.clone(),
            explanation: question.explanation.clone(),
        }
    }
}

impl From<&Room> for RoomStateDto {
    fn from(room: &Room) -> Self {
        RoomStateDto {
            room_id: room.code.as_str().to_string(),
            host: room.host.as_str().to_string(),
            status: room.status.as_str().to_string(),
            topic: room.config.topic.clone(),
            grade: room.config.grade.clone(),
            difficulty: room.config.difficulty.clone(),
            quiz_length: room.config.quiz_length,
            current_question_index: room.current_question_index,
            players: room.players.iter().map(|p| p.as_str().to_string()).collect(),
            scores: room
                .ranked_scores()
                .into_iter()
                .map(|(username, score)| PlayerScoreDto {
                    username: username.as_str().to_string(),
                    score,
                })
                .collect(),
            questions: room.questions.iter().map(QuestionDto::from).collect(),
        }
    }
}
