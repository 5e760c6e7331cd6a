use serde_json::{json, Value};

use crate::{
    errors::ApiResult,
    http::{require_id, ApiClient},
    models::SubjectForm,
    services::success_or,
};

pub struct SubjectService {
    api: ApiClient,
}

impl SubjectService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn all_subjects(&self) -> ApiResult<Value> {
        self.api.get("/api/subjects").await
    }

    pub async fn subject_details(&self, subject_id: &str) -> ApiResult<Value> {
        let subject_id = require_id("Subject ID", subject_id)?;
        self.api.get(format!("/api/edit/{}", subject_id)).await
    }

    pub async fn add_subject(&self, subject: &SubjectForm) -> ApiResult<Value> {
        self.api
            .post_form("/api/addcomplete/", subject.to_form())
            .await
    }

    pub async fn update_subject(&self, subject_id: &str, subject: &SubjectForm) -> ApiResult<Value> {
        let subject_id = require_id("Subject ID", subject_id)?;
        self.api
            .post_form(
                format!("/api/editsubjectcomplete/{}", subject_id),
                subject.to_form(),
            )
            .await
    }

    pub async fn delete_subject(&self, subject_id: &str) -> ApiResult<Value> {
        let subject_id = require_id("Subject ID", subject_id)?;
        let body = self
            .api
            .post_json(format!("/api/deletesubject/{}", subject_id), &json!({}))
            .await?;
        Ok(success_or(body, "Subject deleted successfully"))
    }
}
