//! Keys under which the guide stores its records.

pub const QUIZ_PROGRESS: &str = "basel_quiz_progress_v1";
pub const SAVED_PLACES: &str = "basel_saved_places_v1";
pub const PROFILE_NAME: &str = "profile_name_v1";
pub const PROFILE_ABOUT: &str = "profile_about_v1";
pub const PROFILE_PHOTO_URI: &str = "profile_photo_uri_v1";

/// Every key belonging to the user profile.
pub const PROFILE_KEYS: [&str; 3] = [PROFILE_NAME, PROFILE_ABOUT, PROFILE_PHOTO_URI];
