//! Compiled-in guide content: the three quiz packs and the Basel places.

mod places;
mod quizzes;

use crate::model::{Place, QuizId, QuizPack};

use places::PLACES;
use quizzes::QUIZ_PACKS;

/// All quiz packs in unlock order.
#[must_use]
pub fn quiz_packs() -> &'static [QuizPack] {
    &QUIZ_PACKS
}

#[must_use]
pub fn quiz_pack(id: QuizId) -> &'static QuizPack {
    &QUIZ_PACKS[id.index()]
}

/// Look up a pack by its string key, falling back to the first pack for unknown keys.
#[must_use]
pub fn quiz_pack_by_key(key: &str) -> &'static QuizPack {
    key.parse::<QuizId>()
        .map_or(&QUIZ_PACKS[0], quiz_pack)
}

#[must_use]
pub fn places() -> &'static [Place] {
    PLACES
}

#[must_use]
pub fn place(id: &str) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id() == id)
}

/// Look up a place, falling back to the first entry for unknown ids.
#[must_use]
pub fn place_or_first(id: &str) -> &'static Place {
    place(id).unwrap_or(&PLACES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OPTIONS_PER_QUESTION;
    use std::collections::HashSet;

    #[test]
    fn packs_are_in_unlock_order() {
        let ids: Vec<QuizId> = quiz_packs().iter().map(QuizPack::id).collect();
        assert_eq!(ids, QuizId::ALL.to_vec());
        for id in QuizId::ALL {
            assert_eq!(quiz_pack(id).id(), id);
        }
    }

    #[test]
    fn packs_have_expected_sizes() {
        assert_eq!(quiz_pack(QuizId::Quiz1).total(), 10);
        assert_eq!(quiz_pack(QuizId::Quiz2).total(), 15);
        assert_eq!(quiz_pack(QuizId::Quiz3).total(), 20);
    }

    #[test]
    fn every_question_has_exactly_one_correct_option() {
        for pack in quiz_packs() {
            for (idx, question) in pack.questions().iter().enumerate() {
                assert_eq!(question.options().len(), OPTIONS_PER_QUESTION);
                assert!(
                    question.correct_index().is_some(),
                    "{} question {idx} is malformed",
                    pack.id()
                );
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_first_pack() {
        assert_eq!(quiz_pack_by_key("quiz2").id(), QuizId::Quiz2);
        assert_eq!(quiz_pack_by_key("quiz9").id(), QuizId::Quiz1);
        assert_eq!(quiz_pack_by_key("").id(), QuizId::Quiz1);
    }

    #[test]
    fn place_ids_are_unique() {
        let ids: HashSet<&str> = places().iter().map(Place::id).collect();
        assert_eq!(ids.len(), places().len());
        assert_eq!(places().len(), 20);
    }

    #[test]
    fn place_lookup_and_fallback() {
        assert_eq!(place("spalentor").map(Place::title), Some("Spalentor (Spalen Gate)"));
        assert!(place("atlantis").is_none());
        assert_eq!(place_or_first("atlantis").id(), "basel-minster");
    }

    #[test]
    fn coordinate_labels_agree_with_markers() {
        for place in places() {
            let parsed = place.coordinates();
            let marker = place.marker();
            assert!((parsed.latitude - marker.latitude).abs() < 1e-6, "{}", place.id());
            assert!((parsed.longitude - marker.longitude).abs() < 1e-6, "{}", place.id());
        }
    }
}
