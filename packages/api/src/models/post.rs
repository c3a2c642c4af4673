use serde::{Deserialize, Serialize};

use super::Comment;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostCreateRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
}

/// Row of the community board.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub writer_nickname: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub has_file: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedFile {
    #[serde(alias = "name")]
    pub file_name: String,
    #[serde(alias = "url")]
    pub file_url: String,
}

impl AttachedFile {
    pub fn is_image(&self) -> bool {
        mime_guess::from_path(&self.file_name)
            .first()
            .is_some_and(|m| m.type_() == mime_guess::mime::IMAGE)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub writer_nickname: String,
    #[serde(default)]
    pub writer_profile_image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    /// Whether the current user already liked the post.
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub files: Vec<AttachedFile>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl PostDetail {
    pub fn image_files(&self) -> impl Iterator<Item = &AttachedFile> {
        self.files.iter().filter(|f| f.is_image())
    }

    pub fn other_files(&self) -> impl Iterator<Item = &AttachedFile> {
        self.files.iter().filter(|f| !f.is_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_detail_splits_attachments() {
        let body = r#"{
            "id": 1,
            "title": "Outdoor shooting tips",
            "content": "Use the golden hour.",
            "writerNickname": "naturallight",
            "createdAt": "2024-05-20T12:34:56",
            "likeCount": 15,
            "commentCount": 1,
            "files": [
                {"fileName": "guide.pdf", "fileUrl": "https://cdn/guide.pdf"},
                {"name": "sample.JPG", "url": "https://cdn/sample.JPG"}
            ],
            "comments": [
                {"id": 7, "writerNickname": "c1", "content": "Nice", "createdAt": "2024-05-20T13:00:00", "likeCount": 3, "isDeleted": false}
            ]
        }"#;
        let post: PostDetail = serde_json::from_str(body).unwrap();
        assert!(!post.liked);
        let images: Vec<_> = post.image_files().map(|f| f.file_name.as_str()).collect();
        let others: Vec<_> = post.other_files().map(|f| f.file_name.as_str()).collect();
        assert_eq!(images, vec!["sample.JPG"]);
        assert_eq!(others, vec!["guide.pdf"]);
        assert_eq!(post.comments[0].like_count, 3);
    }

    #[test]
    fn test_create_request_omits_empty_hashtags() {
        let req = PostCreateRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            hashtags: vec![],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("hashtags").is_none());
    }
}
