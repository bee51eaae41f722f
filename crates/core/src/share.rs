//! Plain-text messages handed to the platform share sheet.

use crate::model::{Place, Profile, QuizResult};

pub const CERTIFICATE_TITLE: &str = "Basel Expert Certificate";
const CERTIFICATE_NAME_FALLBACK: &str = "Name";

#[must_use]
pub fn quiz_result_message(title: &str, result: &QuizResult) -> String {
    let headline = if result.perfect_pass {
        "Quiz completed!"
    } else {
        "Quiz result"
    };
    format!("{title}\n{headline}\n{}/{}", result.score, result.total)
}

#[must_use]
pub fn certificate_message(profile: &Profile) -> String {
    format!("{CERTIFICATE_TITLE}\n{}", certificate_holder(profile))
}

/// Name printed on the certificate.
#[must_use]
pub fn certificate_holder(profile: &Profile) -> &str {
    match profile.name() {
        "" => CERTIFICATE_NAME_FALLBACK,
        name => name,
    }
}

#[must_use]
pub fn place_message(place: &Place) -> String {
    format!(
        "{}\n{}\n\n{}",
        place.title(),
        place.coords_label(),
        place.description()
    )
}
