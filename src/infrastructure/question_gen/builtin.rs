//! Builtin QuestionBank 実装
//!
//! 外部 API なしで動作する決定論的な問題ソース。デモと統合テストで
//! 使用します。内蔵の理科問題を巡回し、設定された問題数を常に返します。

use async_trait::async_trait;

use crate::domain::{Question, QuestionGenError, QuestionGenerator, QuizConfig};

/// (question, options, correct option index, explanation)
const BANK: &[(&str, [&str; 4], usize, &str)] = &[
    (
        "Which gas do plants absorb from the air for photosynthesis?",
        ["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
        1,
        "Plants take in carbon dioxide and release oxygen.",
    ),
    (
        "What is the center of an atom called?",
        ["Electron", "Proton", "Nucleus", "Shell"],
        2,
        "The nucleus contains the protons and neutrons.",
    ),
    (
        "Which planet is known as the Red Planet?",
        ["Venus", "Mars", "Jupiter", "Mercury"],
        1,
        "Iron oxide on its surface gives Mars a reddish color.",
    ),
    (
        "What force pulls objects toward the center of the Earth?",
        ["Magnetism", "Friction", "Gravity", "Inertia"],
        2,
        "Gravity attracts every object toward the Earth's center.",
    ),
    (
        "Which organ pumps blood around the human body?",
        ["Lungs", "Heart", "Liver", "Kidneys"],
        1,
        "The heart is the muscular pump of the circulatory system.",
    ),
    (
        "What state of matter has a fixed volume but no fixed shape?",
        ["Solid", "Liquid", "Gas", "Plasma"],
        1,
        "Liquids keep their volume but take the shape of their container.",
    ),
];

/// Deterministic offline question source.
pub struct BuiltinQuestionBank;

impl BuiltinQuestionBank {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinQuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionGenerator for BuiltinQuestionBank {
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, QuestionGenError> {
        let questions = (0..config.quiz_length)
            .map(|i| {
                let (text, options, answer_index, explanation) = BANK[i % BANK.len()];
                // Past one full cycle, suffix a round marker to keep texts distinct
                let round = i / BANK.len();
                let text = if round == 0 {
                    text.to_string()
                } else {
                    format!("{} (round {})", text, round + 1)
                };
                Question {
                    kind: "mcq".to_string(),
                    text,
                    options: options.iter().map(|o| o.to_string()).collect(),
                    answer: options[answer_index].to_string(),
                    explanation: explanation.to_string(),
                }
            })
            .collect();
        Ok(questions)
    }
}
