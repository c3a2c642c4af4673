use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn like_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.post(&format!("/api/like/post/{post_id}")))
            .await
    }

    pub async fn cancel_like_post(&self, post_id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.patch(&format!("/api/like/post/{post_id}")))
            .await
    }

    pub async fn like_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.post(&format!("/api/like/comment/{comment_id}")))
            .await
    }

    pub async fn cancel_like_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.empty_unit(self.patch(&format!("/api/like/comment/{comment_id}")))
            .await
    }
}
