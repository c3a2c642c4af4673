//! # Client-side form checks
//!
//! Each form struct holds the raw field values a view collects and turns them into
//! the matching request model, or a [`ValidationErrors`] keyed by field name so the
//! view can show the message under the right input.
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes, so Korean
//! nicknames get the same limit as Latin ones.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{
    Gender, LearningMaterialCreateRequest, LoginRequest, PhotoRankCreateRequest,
    PostCreateRequest, SignUpRequest,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email regex")
});

pub const LOGIN_PASSWORD_MIN: usize = 8;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 16;
pub const NAME_MAX: usize = 30;
pub const NICKNAME_MAX: usize = 15;
pub const RANK_PHOTOS_MAX: usize = 16;

/// Field-keyed validation messages, in the order the checks ran.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.errors.first().map(|(_, m)| m.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|(f, _)| *f)
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Message for an email field, or `None` when it is acceptable.
pub fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Please enter your email.")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address.")
    } else {
        None
    }
}

/// Whether a duplicate-check reply for `checked` still applies to the field,
/// which may have been edited while the request was in flight.
pub fn still_current(field: &str, checked: &str) -> bool {
    field.trim() == checked
}

/// `YYYY-MM-DD` for a real calendar date.
pub fn format_birthday(year: i32, month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format("%Y-%m-%d").to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(msg) = email_error(&self.email) {
            errors.add("email", msg);
        }
        if self.password.is_empty() {
            errors.add("password", "Please enter your password.");
        } else if char_len(&self.password) < LOGIN_PASSWORD_MIN {
            errors.add(
                "password",
                format!("Password must be at least {LOGIN_PASSWORD_MIN} characters."),
            );
        }
        errors.finish(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
    pub nickname: String,
    pub gender: Option<Gender>,
    pub birth_year: Option<i32>,
    pub birth_month: Option<u32>,
    pub birth_day: Option<u32>,
    /// Set once the server confirmed the email is free; cleared on edit.
    pub email_checked: bool,
    /// Set once the server confirmed the nickname is free; cleared on edit.
    pub nickname_checked: bool,
}

impl SignUpForm {
    pub fn passwords_match(&self) -> bool {
        !self.password_confirm.is_empty() && self.password == self.password_confirm
    }

    pub fn validate(&self) -> Result<SignUpRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if let Some(msg) = email_error(&self.email) {
            errors.add("email", msg);
        } else if !self.email_checked {
            errors.add("email", "Please check whether the email is available.");
        }

        let pw_len = char_len(&self.password);
        if self.password.is_empty() {
            errors.add("password", "Please enter a password.");
        } else if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&pw_len) {
            errors.add(
                "password",
                format!("Password must be {PASSWORD_MIN} to {PASSWORD_MAX} characters."),
            );
        }
        if !self.passwords_match() {
            errors.add("password_confirm", "Passwords do not match.");
        }

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Please enter your name.");
        } else if char_len(name) > NAME_MAX {
            errors.add("name", format!("Name can be at most {NAME_MAX} characters."));
        }

        let nickname = self.nickname.trim();
        if nickname.is_empty() {
            errors.add("nickname", "Please enter a nickname.");
        } else if char_len(nickname) > NICKNAME_MAX {
            errors.add(
                "nickname",
                format!("Nickname can be at most {NICKNAME_MAX} characters."),
            );
        } else if !self.nickname_checked {
            errors.add("nickname", "Please check whether the nickname is available.");
        }

        if self.gender.is_none() {
            errors.add("gender", "Please select your gender.");
        }

        let birthday = match (self.birth_year, self.birth_month, self.birth_day) {
            (Some(y), Some(m), Some(d)) => {
                let formatted = format_birthday(y, m, d);
                if formatted.is_none() {
                    errors.add("birthday", "Please select a valid date.");
                }
                formatted
            }
            _ => {
                errors.add("birthday", "Please select your birthday.");
                None
            }
        };

        match (self.gender, birthday) {
            (Some(gender), Some(birthday)) if errors.is_empty() => Ok(SignUpRequest {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
                name: name.to_string(),
                nickname: nickname.to_string(),
                gender,
                birthday,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
}

impl PostForm {
    pub fn validate(&self) -> Result<PostCreateRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.title.trim().is_empty() {
            errors.add("title", "Please enter a title.");
        }
        if self.content.trim().is_empty() {
            errors.add("content", "Please enter some content.");
        }
        errors.finish(|| PostCreateRequest {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            hashtags: self.hashtags.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LearningMaterialForm {
    pub title: String,
    pub reference_info: String,
    pub key_word: String,
    pub pretty_manner: String,
    pub tips: String,
}

impl LearningMaterialForm {
    pub fn validate(&self) -> Result<LearningMaterialCreateRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.title.trim().is_empty() {
            errors.add("title", "Please enter a title.");
        }
        errors.finish(|| LearningMaterialCreateRequest {
            title: self.title.trim().to_string(),
            reference_info: self.reference_info.trim().to_string(),
            key_word: self.key_word.trim().to_string(),
            pretty_manner: self.pretty_manner.trim().to_string(),
            tips: self.tips.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoRankForm {
    /// `YYYY-MM-DD`, as produced by a date input.
    pub start_date: String,
    pub end_date: String,
    pub photo_count: usize,
}

impl PhotoRankForm {
    pub fn validate(&self) -> Result<PhotoRankCreateRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.photo_count == 0 {
            errors.add("photos", "Please add at least one photo.");
        } else if self.photo_count > RANK_PHOTOS_MAX {
            errors.add(
                "photos",
                format!("At most {RANK_PHOTOS_MAX} photos can compete."),
            );
        }
        let start = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").ok();
        let end = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").ok();
        match (start, end) {
            (Some(start), Some(end)) if end < start => {
                errors.add("end_date", "The end date must not be before the start date.");
            }
            (None, _) => errors.add("start_date", "Please choose a start date."),
            (_, None) => errors.add("end_date", "Please choose an end date."),
            _ => {}
        }
        errors.finish(|| PhotoRankCreateRequest {
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sign_up() -> SignUpForm {
        SignUpForm {
            email: "user@example.com".to_string(),
            password: "password1".to_string(),
            password_confirm: "password1".to_string(),
            name: "Kim".to_string(),
            nickname: "찰칵러".to_string(),
            gender: Some(Gender::Male),
            birth_year: Some(2001),
            birth_month: Some(3),
            birth_day: Some(7),
            email_checked: true,
            nickname_checked: true,
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a.b+c@Example.CO"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@b.c"));
        assert_eq!(email_error(""), Some("Please enter your email."));
        assert_eq!(email_error("user@example.com"), None);
    }

    #[test]
    fn test_login_rejects_short_password() {
        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("email").is_none());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_login_trims_email() {
        let form = LoginForm {
            email: " user@example.com ".to_string(),
            password: "longenough".to_string(),
        };
        assert_eq!(form.validate().unwrap().email, "user@example.com");
    }

    #[test]
    fn test_sign_up_valid() {
        let req = valid_sign_up().validate().unwrap();
        assert_eq!(req.birthday, "2001-03-07");
        assert_eq!(req.gender, Gender::Male);
    }

    #[test]
    fn test_sign_up_requires_duplicate_checks() {
        let mut form = valid_sign_up();
        form.email_checked = false;
        form.nickname_checked = false;
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["email", "nickname"]);
    }

    #[test]
    fn test_sign_up_lengths_count_chars() {
        let mut form = valid_sign_up();
        form.nickname = "가".repeat(15);
        assert!(form.validate().is_ok());
        form.nickname = "가".repeat(16);
        assert!(form.validate().unwrap_err().get("nickname").is_some());

        let mut form = valid_sign_up();
        form.password = "a".repeat(17);
        form.password_confirm = form.password.clone();
        assert!(form.validate().unwrap_err().get("password").is_some());
    }

    #[test]
    fn test_sign_up_mismatch_and_bad_date() {
        let mut form = valid_sign_up();
        form.password_confirm = "different1".to_string();
        form.birth_month = Some(2);
        form.birth_day = Some(30);
        let errors = form.validate().unwrap_err();
        assert!(errors.get("password_confirm").is_some());
        assert_eq!(errors.get("birthday"), Some("Please select a valid date."));
    }

    #[test]
    fn test_post_requires_trimmed_fields() {
        let form = PostForm {
            title: "   ".to_string(),
            content: "body".to_string(),
            hashtags: vec![],
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first(), Some("Please enter a title."));
    }

    #[test]
    fn test_learning_material_title_required() {
        assert!(LearningMaterialForm::default().validate().is_err());
        let form = LearningMaterialForm {
            title: " Backlight ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap().title, "Backlight");
    }

    #[test]
    fn test_photo_rank_bounds() {
        let mut form = PhotoRankForm {
            start_date: "2024-11-04".to_string(),
            end_date: "2024-11-10".to_string(),
            photo_count: 16,
        };
        assert!(form.validate().is_ok());

        form.photo_count = 17;
        assert!(form.validate().unwrap_err().get("photos").is_some());

        form.photo_count = 4;
        form.end_date = "2024-11-01".to_string();
        assert!(form.validate().unwrap_err().get("end_date").is_some());

        form.start_date.clear();
        assert!(form.validate().unwrap_err().get("start_date").is_some());
    }

    #[test]
    fn test_still_current_after_edit() {
        assert!(still_current(" user@example.com ", "user@example.com"));
        assert!(!still_current("user@example.co", "user@example.com"));
        assert!(!still_current("", "snap"));
    }
}
