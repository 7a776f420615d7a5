//! クイズ設定と問題のドメインモデル

/// Quiz configuration, fixed at room creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Quiz topic (e.g. "photosynthesis")
    pub topic: String,
    /// School grade the questions are aimed at (e.g. "6")
    pub grade: String,
    /// Difficulty label (e.g. "easy", "medium", "hard")
    pub difficulty: String,
    /// Number of questions in the quiz
    pub quiz_length: usize,
}

/// A single quiz question as returned by the content-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Question kind (currently always "mcq")
    pub kind: String,
    /// The question text
    pub text: String,
    /// Four answer options
    pub options: Vec<String>,
    /// The correct option, verbatim
    pub answer: String,
    /// Explanation shown after answering
    pub explanation: String,
}
