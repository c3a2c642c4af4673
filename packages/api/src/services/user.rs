use reqwest::{multipart::Form, StatusCode};
use store::Role;
use tracing::{info, warn};

use crate::models::{
    LoginRequest, LoginResult, NicknameUpdateRequest, PasswordUpdateRequest, SignUpRequest,
    UserInfo,
};
use crate::upload::Upload;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Register a new account. The backend answers `201 Created` on success.
    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<(), ApiError> {
        let status = self.send_status(self.post("/api/user/signUp").json(req)).await?;
        if status != StatusCode::CREATED {
            info!(%status, "sign-up accepted without 201");
        }
        Ok(())
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResult, ApiError> {
        self.json_result(self.post("/api/user/login"), req).await
    }

    /// `true` when the nickname is already taken.
    pub async fn check_nickname_duplicate(&self, nickname: &str) -> Result<bool, ApiError> {
        self.get_result(
            "/api/user/check-duplicate/nickname",
            &[("nickname", nickname.to_string())],
        )
        .await
    }

    /// `true` when the email is already registered.
    pub async fn check_email_duplicate(&self, email: &str) -> Result<bool, ApiError> {
        self.get_result(
            "/api/user/check-duplicate/email",
            &[("email", email.to_string())],
        )
        .await
    }

    pub async fn get_user_role(&self) -> Result<Role, ApiError> {
        let name: String = self.get_result("/api/user/role", &[]).await?;
        Ok(Role::parse(&name).unwrap_or_else(|| {
            warn!(role = %name, "unknown role, treating as user");
            Role::User
        }))
    }

    pub async fn update_nickname(&self, nickname: &str) -> Result<(), ApiError> {
        let body = NicknameUpdateRequest {
            nickname: nickname.to_string(),
        };
        self.json_unit(self.put("/api/user/nickname"), &body).await
    }

    pub async fn update_profile_image(&self, image: Upload) -> Result<(), ApiError> {
        let form = Form::new().part("profileImage", image.into_part()?);
        self.multipart_unit(self.put("/api/user/profile"), form).await
    }

    pub async fn set_default_profile_image(&self) -> Result<(), ApiError> {
        self.empty_unit(self.put("/api/user/profile/default")).await
    }

    pub async fn update_password(&self, req: &PasswordUpdateRequest) -> Result<(), ApiError> {
        self.json_unit(self.put("/api/user/password"), req).await
    }

    pub async fn get_user_info(&self) -> Result<UserInfo, ApiError> {
        self.get_result("/api/user/info", &[]).await
    }

    pub async fn get_profile_image_url(&self) -> Result<String, ApiError> {
        self.get_result("/api/user/profile/image", &[]).await
    }
}
