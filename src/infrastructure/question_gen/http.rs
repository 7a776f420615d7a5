//! HTTP QuestionGenerator 実装
//!
//! 外部のコンテンツ生成 API を呼び出す QuestionGenerator。リクエストは
//! `{topic, grade, difficulty, count}`、レスポンスは問題オブジェクトの
//! 配列を期待します。タイムアウトは reqwest のデフォルトに任せます。

use async_trait::async_trait;
use serde_json::json;

use crate::{
    domain::{Question, QuestionGenError, QuestionGenerator, QuizConfig},
    infrastructure::dto::http::QuestionDto,
};

/// Content-generation client for an external question API.
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuestionGenerator {
    /// Create a new generator targeting the given endpoint URL
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, QuestionGenError> {
        let body = json!({
            "topic": config.topic,
            "grade": config.grade,
            "difficulty": config.difficulty,
            "count": config.quiz_length,
        });

        tracing::debug!(
            "Requesting {} questions about '{}' from {}",
            config.quiz_length,
            config.topic,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| QuestionGenError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuestionGenError::RequestFailed(format!(
                "question API returned HTTP {}",
                response.status()
            )));
        }

        let questions: Vec<QuestionDto> = response
            .json()
            .await
            .map_err(|e| QuestionGenError::InvalidResponse(e.to_string()))?;

        Ok(questions.into_iter().map(Question::from).collect())
    }
}
