use crate::models::{Comment, CommentCreateRequest};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn create_comment(&self, req: &CommentCreateRequest) -> Result<Comment, ApiError> {
        self.json_result(self.post("/api/comment"), req).await
    }

    pub async fn get_comment(&self, id: i64) -> Result<Comment, ApiError> {
        self.get_result(&format!("/api/comment/{id}"), &[]).await
    }

    /// Soft delete; the comment comes back with `is_deleted` set.
    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.delete(&format!("/api/comment/{id}")))
            .await
    }
}
