//! # User models
//!
//! Requests sent by the login, sign-up and profile views, and the [`UserInfo`]
//! projection returned by `/api/user/info`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub nickname: String,
    pub gender: Gender,
    /// `YYYY-MM-DD`
    pub birthday: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token pair issued by `/api/user/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NicknameUpdateRequest {
    pub nickname: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Profile returned by `/api/user/info`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_json() {
        let req = SignUpRequest {
            email: "a@b.co".to_string(),
            password: "password1".to_string(),
            name: "Kim".to_string(),
            nickname: "kim".to_string(),
            gender: Gender::Female,
            birthday: "1999-01-02".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["gender"], "FEMALE");
        assert_eq!(json["birthday"], "1999-01-02");
    }

    #[test]
    fn test_user_info_parse() {
        let body = r#"{"name":"Kim","email":"a@b.co","nickname":"kim","birthday":"1999-01-02","gender":"MALE","profileImageUrl":"https://cdn/p.jpg"}"#;
        let info: UserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.gender, Some(Gender::Male));
        assert_eq!(info.profile_image_url.as_deref(), Some("https://cdn/p.jpg"));
    }

    #[test]
    fn test_password_update_json() {
        let req = PasswordUpdateRequest {
            current_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["currentPassword"], "old");
        assert_eq!(json["newPassword"], "new");
    }
}
