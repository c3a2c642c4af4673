use dioxus::prelude::*;

use crate::views::{
    AdminLearningMaterial, AdminWeeklyPhoto, AppLayout, CommunityCreate, CommunityList,
    CommunityPost, EditProfile, FeedbackDetail, Home, Learning, LearningMaterialDetail, Login,
    MyPhotos, NotFound, PhotoFeedback, PhotoUpload, Signup, Terms, UserProfile, WeeklyPhoto,
};

/// Every page of the app. Shared by the web and desktop launchers.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/user/terms")]
        Terms {},
        #[route("/user/signup")]
        Signup {},
        #[route("/user/profile")]
        UserProfile {},
        #[route("/user/profile/edit")]
        EditProfile {},
        #[route("/photo/upload")]
        PhotoUpload {},
        #[route("/photo/my")]
        MyPhotos {},
        #[route("/photo/feedback")]
        PhotoFeedback {},
        #[route("/photo/feedback/:id")]
        FeedbackDetail { id: i64 },
        #[route("/weekly-photo")]
        WeeklyPhoto {},
        #[route("/learning")]
        Learning {},
        #[route("/learning/:id")]
        LearningMaterialDetail { id: i64 },
        #[route("/community")]
        CommunityList {},
        #[route("/community/new")]
        CommunityCreate {},
        #[route("/community/:id")]
        CommunityPost { id: i64 },
        #[route("/admin/learning")]
        AdminLearningMaterial {},
        #[route("/admin/weekly-photo")]
        AdminWeeklyPhoto {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Top-level section the route belongs to, for the navbar highlight.
    pub fn section(&self) -> Section {
        match self {
            Route::WeeklyPhoto {} => Section::WeeklyPhoto,
            Route::PhotoFeedback {} | Route::FeedbackDetail { .. } => Section::Feedback,
            Route::PhotoUpload {} | Route::MyPhotos {} => Section::Upload,
            Route::Learning {} | Route::LearningMaterialDetail { .. } => Section::Learning,
            Route::CommunityList {} | Route::CommunityCreate {} | Route::CommunityPost { .. } => {
                Section::Community
            }
            Route::UserProfile {} | Route::EditProfile {} => Section::Profile,
            Route::AdminLearningMaterial {} | Route::AdminWeeklyPhoto {} => Section::Admin,
            Route::Login {} | Route::Terms {} | Route::Signup {} => Section::Account,
            Route::Home {} | Route::NotFound { .. } => Section::Home,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    WeeklyPhoto,
    Feedback,
    Upload,
    Learning,
    Community,
    Profile,
    Admin,
    Account,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_static_path_wins_over_id() {
        assert_eq!(Route::from_str("/community/new").unwrap(), Route::CommunityCreate {});
        assert_eq!(
            Route::from_str("/community/12").unwrap(),
            Route::CommunityPost { id: 12 }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/does/not/exist").unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.section(), Section::Home);
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::FeedbackDetail { id: 1 }.section(), Section::Feedback);
        assert_eq!(Route::MyPhotos {}.section(), Section::Upload);
        assert_eq!(Route::AdminWeeklyPhoto {}.section(), Section::Admin);
        assert_eq!(
            Route::CommunityPost { id: 3 }.to_string(),
            "/community/3"
        );
    }
}
