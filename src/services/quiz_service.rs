use serde_json::Value;

use crate::{
    errors::ApiResult,
    http::{require_id, ApiClient},
    models::QuizForm,
    services::success_or,
};

pub struct QuizService {
    api: ApiClient,
}

impl QuizService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every quiz, as listed on the admin home page.
    pub async fn all_quizzes(&self) -> ApiResult<Value> {
        self.api.get("/api/adminhome").await
    }

    /// Chapters a new quiz can be attached to.
    pub async fn chapters(&self) -> ApiResult<Value> {
        let body = self.api.get("/api/addquiz").await?;
        Ok(body.get("chapters").cloned().unwrap_or(Value::Null))
    }

    pub async fn quiz_details(&self, quiz_id: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api.get(format!("/api/edit_quiz/{}", quiz_id)).await
    }

    pub async fn add_quiz(&self, quiz: &QuizForm) -> ApiResult<Value> {
        self.api
            .post_form("/api/addcompletequiz", quiz.to_form())
            .await
    }

    pub async fn update_quiz(&self, quiz_id: &str, quiz: &QuizForm) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api
            .post_json(format!("/api/editcompletequiz/{}", quiz_id), quiz)
            .await
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        let body = self
            .api
            .delete(format!("/api/admin/quizzes/{}", quiz_id))
            .await?;
        Ok(success_or(body, "Quiz deleted successfully"))
    }
}
