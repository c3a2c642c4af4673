//! Request and response models for the backend's REST contract.
//!
//! Field names follow the backend's camelCase JSON; every response body is wrapped
//! in an [`ApiResponse`] envelope.

mod comment;
mod hashtag;
mod image_evaluation;
mod learning_material;
mod page;
mod photo_rank;
mod post;
mod user;

pub use comment::{Comment, CommentCreateRequest};
pub use hashtag::{Hashtag, HashtagCreateRequest};
pub use image_evaluation::{EvaluationImage, ImageEvaluation};
pub use learning_material::{
    LearningMaterial, LearningMaterialCreateRequest, LearningMaterialImage,
    LearningMaterialSummary,
};
pub use page::{Page, Pageable};
pub use photo_rank::{PhotoRank, PhotoRankCreateRequest, PhotoRankUpdateRequest};
pub use post::{AttachedFile, PostCreateRequest, PostDetail, PostSummary};
pub use user::{
    Gender, LoginRequest, LoginResult, NicknameUpdateRequest, PasswordUpdateRequest,
    SignUpRequest, UserInfo,
};

use serde::Deserialize;

use crate::ApiError;

/// Envelope every endpoint wraps its payload in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// The payload, or the server's rejection.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.is_success {
            return Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            });
        }
        self.result.ok_or(ApiError::MissingResult)
    }

    /// Success flag only, for endpoints whose result carries nothing useful.
    pub fn into_unit(self) -> Result<(), ApiError> {
        if self.is_success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let body = r#"{"isSuccess":true,"code":"COMMON200","message":"OK","result":42}"#;
        let resp: ApiResponse<i64> = serde_json::from_str(body).unwrap();
        assert_eq!(resp.into_result().unwrap(), 42);
    }

    #[test]
    fn test_rejected_envelope() {
        let body = r#"{"isSuccess":false,"code":"USER4001","message":"Duplicate email","result":null}"#;
        let resp: ApiResponse<bool> = serde_json::from_str(body).unwrap();
        match resp.into_result() {
            Err(ApiError::Rejected { code, message }) => {
                assert_eq!(code, "USER4001");
                assert_eq!(message, "Duplicate email");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_result() {
        let body = r#"{"isSuccess":true,"code":"COMMON200","message":"OK"}"#;
        let resp: ApiResponse<String> = serde_json::from_str(body).unwrap();
        assert!(matches!(resp.clone().into_result(), Err(ApiError::MissingResult)));
        assert!(resp.into_unit().is_ok());
    }
}
