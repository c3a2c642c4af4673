use reqwest::multipart::Form;

use crate::models::{LearningMaterial, LearningMaterialCreateRequest, LearningMaterialSummary};
use crate::upload::{json_part, Upload};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Admin only. Images go out as indexed parts `images[0]`, `images[1]`, ...
    pub async fn create_learning_material(
        &self,
        req: &LearningMaterialCreateRequest,
        images: Vec<Upload>,
    ) -> Result<i64, ApiError> {
        let mut form = Form::new().part("learningMaterial", json_part(req)?);
        for (i, image) in images.into_iter().enumerate() {
            form = form.part(format!("images[{i}]"), image.into_part()?);
        }
        self.multipart_result(self.post("/api/learning-material"), form)
            .await
    }

    pub async fn delete_learning_material(&self, id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.delete(&format!("/api/learning-material/{id}")))
            .await
    }

    pub async fn restore_learning_material(&self, id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.put(&format!("/api/learning-material/restore/{id}")))
            .await
    }

    pub async fn get_learning_material(&self, id: i64) -> Result<LearningMaterial, ApiError> {
        self.get_result(&format!("/api/learning-material/{id}"), &[])
            .await
    }

    /// Materials that are not deleted.
    pub async fn get_learning_materials(&self) -> Result<Vec<LearningMaterialSummary>, ApiError> {
        self.get_result("/api/learning-material/list", &[]).await
    }
}
