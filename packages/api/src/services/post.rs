use reqwest::multipart::Form;

use crate::models::{Page, Pageable, PostCreateRequest, PostDetail, PostSummary};
use crate::upload::{append_files, json_part, Upload};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Create a post with optional attachments; returns the new post id.
    pub async fn create_post(
        &self,
        req: &PostCreateRequest,
        files: Vec<Upload>,
    ) -> Result<i64, ApiError> {
        let form = Form::new().part("post", json_part(req)?);
        let form = append_files(form, "files", files)?;
        self.multipart_result(self.post("/api/post"), form).await
    }

    pub async fn get_post(&self, id: i64) -> Result<PostDetail, ApiError> {
        self.get_result(&format!("/api/post/{id}"), &[]).await
    }

    /// Most liked posts of the recent period.
    pub async fn get_top_posts(&self) -> Result<Vec<PostSummary>, ApiError> {
        self.get_result("/api/post/top", &[]).await
    }

    pub async fn get_posts(&self, pageable: &Pageable) -> Result<Page<PostSummary>, ApiError> {
        self.get_result("/api/post/list", &pageable.query()).await
    }

    pub async fn search_posts_by_title(
        &self,
        title: &str,
        pageable: &Pageable,
    ) -> Result<Page<PostSummary>, ApiError> {
        let mut query = vec![("title", title.to_string())];
        query.extend(pageable.query());
        self.get_result("/api/post/search", &query).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.delete(&format!("/api/post/{id}"))).await
    }
}
