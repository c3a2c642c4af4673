use reqwest::multipart::Form;

use crate::models::{ImageEvaluation, Page};
use crate::upload::{append_files, Upload};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Submit photos for evaluation, one evaluation per image.
    pub async fn create_image_evaluations(
        &self,
        images: Vec<Upload>,
    ) -> Result<Vec<ImageEvaluation>, ApiError> {
        let form = append_files(Form::new(), "images", images)?;
        self.multipart_result(self.post("/api/imageEvaluation"), form)
            .await
    }

    pub async fn get_image_evaluation(&self, id: i64) -> Result<ImageEvaluation, ApiError> {
        self.get_result(&format!("/api/imageEvaluation/{id}"), &[])
            .await
    }

    pub async fn get_today_image_evaluations(&self) -> Result<Vec<ImageEvaluation>, ApiError> {
        self.get_result("/api/imageEvaluation/list/today", &[]).await
    }

    /// The five most recent evaluations.
    pub async fn get_recent_image_evaluations(&self) -> Result<Vec<ImageEvaluation>, ApiError> {
        self.get_result("/api/imageEvaluation/list/recent", &[]).await
    }

    pub async fn get_all_image_evaluations(&self) -> Result<Vec<ImageEvaluation>, ApiError> {
        self.get_result("/api/imageEvaluation/list/all", &[]).await
    }

    /// The caller's uploads, paged on the server (`page` is zero-based).
    pub async fn get_uploaded_images(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<ImageEvaluation>, ApiError> {
        self.get_result(
            "/api/imageEvaluation/list",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }
}
