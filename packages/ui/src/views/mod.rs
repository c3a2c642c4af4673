mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod terms;
pub use terms::Terms;

mod signup;
pub use signup::Signup;

mod user_profile;
pub use user_profile::UserProfile;

mod edit_profile;
pub use edit_profile::EditProfile;

mod photo_upload;
pub use photo_upload::PhotoUpload;

mod my_photos;
pub use my_photos::MyPhotos;

mod photo_feedback;
pub use photo_feedback::PhotoFeedback;

mod feedback_detail;
pub use feedback_detail::FeedbackDetail;

mod weekly_photo;
pub use weekly_photo::WeeklyPhoto;

mod learning;
pub use learning::Learning;

mod learning_material;
pub use learning_material::LearningMaterialDetail;

mod community_list;
pub use community_list::CommunityList;

mod community_create;
pub use community_create::CommunityCreate;

mod community_post;
pub use community_post::CommunityPost;

mod admin_learning;
pub use admin_learning::AdminLearningMaterial;

mod admin_weekly_photo;
pub use admin_weekly_photo::AdminWeeklyPhoto;

mod not_found;
pub use not_found::NotFound;
