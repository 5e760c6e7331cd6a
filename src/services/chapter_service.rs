use serde_json::Value;

use crate::{
    errors::ApiResult,
    http::{require_id, ApiClient},
    models::ChapterForm,
};

pub struct ChapterService {
    api: ApiClient,
}

impl ChapterService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Subjects offered in the chapter form.
    pub async fn subjects(&self) -> ApiResult<Value> {
        self.api.get("/api/addchapter").await
    }

    pub async fn chapters(&self) -> ApiResult<Value> {
        self.api.get("/api/chapters").await
    }

    pub async fn chapter_details(&self, chapter_id: &str) -> ApiResult<Value> {
        let chapter_id = require_id("Chapter ID", chapter_id)?;
        self.api.get(format!("/api/editch/{}", chapter_id)).await
    }

    pub async fn add_chapter(&self, chapter: &ChapterForm) -> ApiResult<Value> {
        self.api
            .post_form("/api/addcompletech/", chapter.to_form())
            .await
    }

    /// The edit endpoint takes JSON, unlike the create endpoint.
    pub async fn update_chapter(&self, chapter_id: &str, chapter: &ChapterForm) -> ApiResult<Value> {
        let chapter_id = require_id("Chapter ID", chapter_id)?;
        self.api
            .post_json(format!("/api/editcompletech/{}", chapter_id), chapter)
            .await
    }

    pub async fn delete_chapter(&self, chapter_id: &str) -> ApiResult<Value> {
        let chapter_id = require_id("Chapter ID", chapter_id)?;
        self.api
            .post_empty(format!("/api/deletechapter/{}", chapter_id))
            .await
    }
}
