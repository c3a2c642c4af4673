use crate::models::{Hashtag, HashtagCreateRequest};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn create_hashtag(&self, name: &str) -> Result<Hashtag, ApiError> {
        let body = HashtagCreateRequest {
            name: name.to_string(),
        };
        self.json_result(self.post("/api/hashtag"), &body).await
    }

    pub async fn get_all_hashtags(&self) -> Result<Vec<Hashtag>, ApiError> {
        self.get_result("/api/hashtag", &[]).await
    }

    pub async fn search_hashtags(&self, keyword: &str) -> Result<Vec<Hashtag>, ApiError> {
        self.get_result("/api/hashtag/search", &[("keyword", keyword.to_string())])
            .await
    }
}
