use crate::chat::rules::{ALIASES, SUBJECTS, Subject};
use itertools::Itertools;

/// Subjects mentioned in an already lowercased message, ordered by their first
/// alias hit in table order. Several aliases of the same subject count as one mention.
pub(crate) fn extract_subjects(message: &str) -> Vec<&'static Subject> {
    ALIASES
        .iter()
        .filter(|(alias, _)| message.contains(alias))
        .map(|(_, key)| *key)
        .unique()
        .filter_map(|key| SUBJECTS.iter().find(|subject| subject.key == key))
        .collect()
}
