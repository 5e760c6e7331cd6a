use serde_json::Value;

use crate::{
    errors::ApiResult,
    http::{require_id, ApiClient},
    models::QuestionForm,
};

pub struct QuestionService {
    api: ApiClient,
}

impl QuestionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Chapters offered in the question form.
    pub async fn chapters(&self) -> ApiResult<Value> {
        self.api.get("/api/addquestion").await
    }

    pub async fn questions(&self) -> ApiResult<Value> {
        self.api.get("/api/questions").await
    }

    pub async fn question_details(&self, question_id: &str) -> ApiResult<Value> {
        let question_id = require_id("Question ID", question_id)?;
        self.api
            .get(format!("/api/edit_question/{}", question_id))
            .await
    }

    pub async fn add_question(&self, question: &QuestionForm) -> ApiResult<Value> {
        self.api
            .post_form("/api/addcompleteque", question.to_form())
            .await
    }

    pub async fn update_question(&self, question_id: &str, question: &QuestionForm) -> ApiResult<Value> {
        let question_id = require_id("Question ID", question_id)?;
        self.api
            .post_form(
                format!("/api/editcompleteque/{}", question_id),
                question.to_form(),
            )
            .await
    }

    pub async fn delete_question(&self, question_id: &str) -> ApiResult<Value> {
        let question_id = require_id("Question ID", question_id)?;
        self.api
            .post_empty(format!("/api/delete_question/{}", question_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::ErrorKind,
        http::{transport::MockTransport, ApiResponse, RequestBody},
        test_utils::fixtures::{api_client, session_with},
    };
    use serde_json::json;

    fn question() -> QuestionForm {
        QuestionForm {
            question_text: "Unit of force?".to_string(),
            chapter_id: "3".to_string(),
            options: ["Joule".into(), "Newton".into(), "Watt".into(), "Pascal".into()],
            correct_option: "2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_question_form_fields() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| match &req.body {
                RequestBody::Form(form) => {
                    req.path == "/api/addcompleteque"
                        && form.text_value("option2") == Some("Newton")
                        && form.text_value("correct_option") == Some("2")
                }
                _ => false,
            })
            .returning(|_| Ok(ApiResponse::new(201, json!({ "question_id": 14 }))));

        let service = QuestionService::new(api_client(transport, session_with(Some("a"), None)));
        assert_eq!(
            service.add_question(&question()).await.unwrap(),
            json!({ "question_id": 14 })
        );
    }

    #[tokio::test]
    async fn test_update_rejected_by_backend() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/api/editcompleteque/14")
            .returning(|_| {
                Ok(ApiResponse::new(
                    400,
                    json!({ "error": "Invalid chapter ID or correct option." }),
                ))
            });

        let service = QuestionService::new(api_client(transport, session_with(Some("a"), None)));
        let err = service.update_question("14", &question()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Backend);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "Invalid chapter ID or correct option.");
    }

    #[tokio::test]
    async fn test_delete_question_path() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/api/delete_question/14")
            .returning(|_| Ok(ApiResponse::new(200, json!({ "message": "Question deleted successfully" }))));

        let service = QuestionService::new(api_client(transport, session_with(Some("a"), None)));
        service.delete_question("14").await.unwrap();
    }
}
