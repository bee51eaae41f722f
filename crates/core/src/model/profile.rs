use thiserror::Error;
use url::Url;

/// Maximum length of the profile name, in characters.
pub const MAX_NAME_CHARS: usize = 24;
/// Maximum length of the "about" text, in characters.
pub const MAX_ABOUT_CHARS: usize = 100;
/// Shown wherever a profile has no name.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    name: String,
    about: String,
    photo_ref: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub about: String,
    pub photo_ref: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("name and about text are both required")]
    Incomplete,

    #[error("name is longer than 24 characters")]
    NameTooLong,

    #[error("about text is longer than 100 characters")]
    AboutTooLong,

    #[error("invalid photo reference")]
    InvalidPhotoRef,
}

impl ProfileDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
            photo_ref: None,
        }
    }

    #[must_use]
    pub fn with_photo_ref(mut self, photo_ref: impl Into<String>) -> Self {
        self.photo_ref = Some(photo_ref.into());
        self
    }

    /// True when both name and about contain something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.about.trim().is_empty()
    }

    /// Validate and normalize the draft for the first-run profile screen.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Incomplete` if name or about is blank, otherwise the
    /// same errors as [`ProfileDraft::validate`].
    pub fn validate_new(self) -> Result<Profile, ProfileError> {
        if !self.is_complete() {
            return Err(ProfileError::Incomplete);
        }
        self.validate()
    }

    /// Validate and normalize the draft for an edit. A blank name becomes
    /// [`UNKNOWN_NAME`]; about may be empty.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if a field exceeds its limit or the photo reference
    /// is not a valid URI.
    pub fn validate(self) -> Result<Profile, ProfileError> {
        let name = match self.name.trim() {
            "" => UNKNOWN_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        let about = self.about.trim().to_string();
        let photo_ref = normalize_optional(self.photo_ref);

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ProfileError::NameTooLong);
        }
        if about.chars().count() > MAX_ABOUT_CHARS {
            return Err(ProfileError::AboutTooLong);
        }
        if photo_ref
            .as_deref()
            .is_some_and(|uri| Url::parse(uri).is_err())
        {
            return Err(ProfileError::InvalidPhotoRef);
        }

        Ok(Profile {
            name,
            about,
            photo_ref,
        })
    }
}

impl Profile {
    /// Rehydrate a profile from persisted values without re-validating limits.
    #[must_use]
    pub fn from_persisted(
        name: Option<String>,
        about: Option<String>,
        photo_ref: Option<String>,
    ) -> Self {
        Self {
            name: name.map(|val| val.trim().to_string()).unwrap_or_default(),
            about: about.map(|val| val.trim().to_string()).unwrap_or_default(),
            photo_ref: normalize_optional(photo_ref),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name for display, falling back to [`UNKNOWN_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_NAME
        } else {
            &self.name
        }
    }

    #[must_use]
    pub fn about(&self) -> &str {
        &self.about
    }

    #[must_use]
    pub fn photo_ref(&self) -> Option<&str> {
        self.photo_ref.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.about.is_empty() && self.photo_ref.is_none()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_fields() {
        let profile = ProfileDraft::new("  Anna ", " likes bridges ")
            .with_photo_ref(" file:///photos/anna.jpg ")
            .validate()
            .unwrap();
        assert_eq!(profile.name(), "Anna");
        assert_eq!(profile.about(), "likes bridges");
        assert_eq!(profile.photo_ref(), Some("file:///photos/anna.jpg"));
    }

    #[test]
    fn blank_name_falls_back_to_unknown_on_edit() {
        let profile = ProfileDraft::new("   ", "").validate().unwrap();
        assert_eq!(profile.name(), UNKNOWN_NAME);
        assert_eq!(profile.about(), "");
    }

    #[test]
    fn new_profile_requires_name_and_about() {
        let err = ProfileDraft::new("Anna", "  ").validate_new().unwrap_err();
        assert_eq!(err, ProfileError::Incomplete);
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let name = "ü".repeat(MAX_NAME_CHARS);
        assert!(ProfileDraft::new(name, "x").validate().is_ok());

        let too_long = "a".repeat(MAX_ABOUT_CHARS + 1);
        let err = ProfileDraft::new("Anna", too_long).validate().unwrap_err();
        assert_eq!(err, ProfileError::AboutTooLong);
    }

    #[test]
    fn rejects_non_uri_photo_ref() {
        let err = ProfileDraft::new("Anna", "hi")
            .with_photo_ref("not a uri")
            .validate()
            .unwrap_err();
        assert_eq!(err, ProfileError::InvalidPhotoRef);
    }

    #[test]
    fn display_name_falls_back_for_empty_profile() {
        let profile = Profile::from_persisted(None, None, Some("  ".into()));
        assert_eq!(profile.display_name(), UNKNOWN_NAME);
        assert!(profile.is_empty());
    }
}
