use secrecy::SecretString;
use serde_json::Value;

use crate::{
    auth::Audience,
    errors::{ApiError, ApiResult},
    http::{require_id, ApiClient},
    models::{Complaint, ImageUpload, PersonalDetailsUpdate, ProfileUpdateResponse, QuizSubmission},
};

/// Endpoints a logged-in student uses: profile, live quizzes, attempts and
/// results.
pub struct StudentService {
    api: ApiClient,
}

impl StudentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn academic_details(&self) -> ApiResult<Value> {
        self.api.get("/api/academic_details").await
    }

    pub async fn personal_details(&self) -> ApiResult<Value> {
        self.api.get("/api/personal_details").await
    }

    pub async fn student_academic_details(&self) -> ApiResult<Value> {
        self.api.get("/api/student_academic_details").await
    }

    pub async fn live_quizzes(&self) -> ApiResult<Value> {
        self.api.get("/api/livequiz").await
    }

    pub async fn quiz_instructions(&self, quiz_id: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api.get(format!("/api/quizinstructions/{}", quiz_id)).await
    }

    pub async fn start_quiz(&self, quiz_id: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        self.api.get(format!("/api/startquiz/{}", quiz_id)).await
    }

    /// Sends the answers as multipart `question_<id>` fields plus `time_taken`.
    pub async fn submit_quiz(&self, quiz_id: &str, submission: &QuizSubmission) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        log::debug!(
            "Submitting {} answers for quiz {}",
            submission.answers.len(),
            quiz_id
        );
        self.api
            .post_form(format!("/api/submitquiz/{}", quiz_id), submission.to_form())
            .await
    }

    /// Edits the profile. When the backend issues a fresh token (username
    /// changed) it replaces the stored student token.
    pub async fn update_personal_details(
        &self,
        update: &PersonalDetailsUpdate,
    ) -> ApiResult<ProfileUpdateResponse> {
        let response: ProfileUpdateResponse =
            self.api.post_json_as("/api/editcomplete", update).await?;

        if let Some(token) = response.new_token.as_deref().filter(|t| !t.is_empty()) {
            self.api
                .session()
                .set_token(Audience::Student, &SecretString::from(token.to_string()))?;
            log::info!("Student token rotated after profile update");
        }
        Ok(response)
    }

    /// Current value of one profile field, for an edit form.
    pub async fn edit_form(&self, field: &str) -> ApiResult<Value> {
        let field = require_id("Field name", field)?;
        self.api.get(format!("/api/edit/{}", field)).await
    }

    pub async fn submit_complaint(&self, complaint: &Complaint) -> ApiResult<Value> {
        self.api.post_json("/api/complaint", complaint).await
    }

    pub async fn quiz_scores(&self, quiz_id: &str, uid: &str, time_taken: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        let uid = require_id("User ID", uid)?;
        let time_taken = require_id("Time taken", time_taken)?;
        self.api
            .get(format!("/api/scores/{}/{}/{}", quiz_id, uid, time_taken))
            .await
    }

    pub async fn quiz_transcript(&self, quiz_id: &str, uid: &str) -> ApiResult<Value> {
        let quiz_id = require_id("Quiz ID", quiz_id)?;
        let uid = require_id("User ID", uid)?;
        self.api
            .get(format!("/api/transcript/{}/{}", quiz_id, uid))
            .await
    }

    /// Uploads a profile image for the active user.
    pub async fn upload_image(&self, image: &ImageUpload) -> ApiResult<Value> {
        let uid = self.api.session().user_id().ok_or_else(|| {
            ApiError::construction("No active user id in session; log in first")
        })?;
        self.api
            .post_form(format!("/api/upload/{}", uid), image.to_form())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::ErrorKind,
        http::{transport::MockTransport, ApiResponse, FormPayload, RequestBody},
        test_utils::fixtures::{api_client, session_with},
    };
    use reqwest::Method;
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[tokio::test]
    async fn test_live_quizzes_with_student_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::GET
                    && req.path == "/api/livequiz"
                    && req.bearer_token() == Some("student-abc")
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!({ "quizzes": [] }))));

        let service = StudentService::new(api_client(transport, session_with(None, Some("student-abc"))));
        assert_eq!(service.live_quizzes().await.unwrap(), json!({ "quizzes": [] }));
    }

    #[tokio::test]
    async fn test_student_call_goes_out_as_admin_when_both_present() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.bearer_token() == Some("admin-abc"))
            .times(1)
            .returning(|_| Ok(ApiResponse::new(200, json!({}))));

        let service = StudentService::new(api_client(
            transport,
            session_with(Some("admin-abc"), Some("student-abc")),
        ));
        service.personal_details().await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_quiz_is_multipart() {
        let expected = FormPayload::new()
            .text("question_3", "9")
            .text("time_taken", "60");

        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(move |req| {
                req.method == Method::POST
                    && req.path == "/api/submitquiz/5"
                    && req.body == RequestBody::Form(expected.clone())
            })
            .returning(|_| Ok(ApiResponse::new(200, json!({ "message": "Quiz submitted successfully" }))));

        let service = StudentService::new(api_client(transport, session_with(None, Some("s"))));
        let submission = QuizSubmission {
            time_taken: "60".to_string(),
            ..Default::default()
        }
        .answer("3", "9");

        service.submit_quiz("5", &submission).await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_update_rotates_token() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_| {
            Ok(ApiResponse::new(
                200,
                json!({ "message": "Profile updated successfully", "new_token": "renamed-abc" }),
            ))
        });

        let session = session_with(None, Some("student-abc"));
        let service = StudentService::new(api_client(transport, session.clone()));
        let update = PersonalDetailsUpdate {
            username: Some("alice2".to_string()),
            current_password: "pw".to_string(),
            ..Default::default()
        };
        service.update_personal_details(&update).await.unwrap();

        assert_eq!(
            session.token(Audience::Student).unwrap().expose_secret(),
            "renamed-abc"
        );
    }

    #[tokio::test]
    async fn test_scores_path() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/api/scores/4/7/320")
            .returning(|_| Ok(ApiResponse::new(200, json!({ "score": 8 }))));

        let service = StudentService::new(api_client(transport, session_with(None, Some("s"))));
        assert_eq!(
            service.quiz_scores("4", "7", "320").await.unwrap(),
            json!({ "score": 8 })
        );
    }

    #[tokio::test]
    async fn test_upload_uses_session_uid() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.path == "/api/upload/7" && matches!(req.body, RequestBody::Form(_)))
            .returning(|_| Ok(ApiResponse::new(200, json!({ "file_url": "/static/upload/me.png" }))));

        let session = session_with(None, Some("s"));
        session.set_user_id("7").unwrap();
        let service = StudentService::new(api_client(transport, session));
        let image = ImageUpload {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };

        service.upload_image(&image).await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_without_uid_never_sends() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let service = StudentService::new(api_client(transport, session_with(None, Some("s"))));
        let image = ImageUpload {
            file_name: "me.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![],
        };
        let err = service.upload_image(&image).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Construction);
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_missing_quiz_id_is_construction_error() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let service = StudentService::new(api_client(transport, session_with(None, Some("s"))));
        let err = service.start_quiz("").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Construction);
    }
}
