use serde_json::Value;

use crate::{
    errors::ApiResult,
    http::{require_id, ApiClient},
    models::QuizForm,
};

/// Admin dashboard endpoints: student records, dashboard statistics and the
/// `/api/admin/*` quiz and file routes.
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn student_personal_details(&self) -> ApiResult<Value> {
        self.api.get("/api/student_personal_details").await
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResult<Value> {
        let user_id = require_id("User ID", user_id)?;
        self.api.delete(format!("/api/delete_user/{}", user_id)).await
    }

    pub async fn dashboard_stats(&self) -> ApiResult<Value> {
        self.api.get("/api/admin/dashboard/stats").await
    }

    pub async fn quizzes(&self) -> ApiResult<Value> {
        self.api.get("/api/admin/quizzes").await
    }

    pub async fn create_quiz(&self, quiz: &QuizForm) -> ApiResult<Value> {
        self.api.post_json("/api/admin/quizzes/create", quiz).await
    }

    pub async fn update_quiz(&self, quiz_id: &str, quiz: &QuizForm) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api
            .put_json(format!("/api/admin/quizzes/{}", quiz_id), quiz)
            .await
    }

    pub async fn delete_quiz(&self, quiz_id: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api
            .delete(format!("/api/admin/quizzes/{}", quiz_id))
            .await
    }

    pub async fn delete_file(&self, file_id: &str) -> ApiResult<Value> {
        let file_id = require_id("File ID", file_id)?;
        self.api
            .delete(format!("/api/admin/files/{}", file_id))
            .await
    }
}
