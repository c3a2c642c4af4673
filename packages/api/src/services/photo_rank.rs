use reqwest::multipart::Form;

use crate::models::{PhotoRank, PhotoRankCreateRequest, PhotoRankUpdateRequest};
use crate::upload::{append_files, json_part, Upload};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Admin only. Opens a weekly contest over `files`.
    pub async fn create_photo_rank(
        &self,
        req: &PhotoRankCreateRequest,
        files: Vec<Upload>,
    ) -> Result<(), ApiError> {
        let form = Form::new().part("photoRank", json_part(req)?);
        let form = append_files(form, "files", files)?;
        self.multipart_unit(self.post("/api/photoRank"), form).await
    }

    pub async fn update_photo_rank_counts(
        &self,
        req: &PhotoRankUpdateRequest,
    ) -> Result<(), ApiError> {
        self.json_unit(self.put("/api/photoRank/updateCounts"), req)
            .await
    }

    /// Photos of the contest running today.
    pub async fn get_photo_ranks(&self) -> Result<Vec<PhotoRank>, ApiError> {
        self.get_result("/api/photoRank", &[]).await
    }
}
