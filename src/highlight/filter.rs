//! Annotation quality filter.
//!
//! Applied before offset translation: an annotation that fails any rule
//! contributes no highlight intervals. The rules are independent boolean
//! checks; order is not significant.

use crate::models::Annotation;

/// Entity categories eligible for highlighting, matched case-insensitively
pub const CORE_ENTITY_TYPES: [&str; 9] = [
    "Gene",
    "Disease",
    "Chemical",
    "Species",
    "Phenotype",
    "Mutation",
    "CellLine",
    "SequenceVariant",
    "Protein",
];

/// Whether an entity type is on the highlight allow-list
pub fn is_core_type(kind: &str) -> bool {
    CORE_ENTITY_TYPES
        .iter()
        .any(|core| core.eq_ignore_ascii_case(kind))
}

/// Decide whether an annotation participates in highlighting.
///
/// Rejects annotations whose entity type is missing or not allow-listed,
/// whose display text trims to 2 characters or fewer, that the upstream
/// explicitly marked invalid (absent flag means valid), or whose normalized
/// identifier is missing or the `"-"` placeholder.
pub fn accept(annotation: &Annotation) -> bool {
    let infons = annotation.infons.as_ref();

    let kind = infons.and_then(|i| i.kind.as_deref());
    if !kind.is_some_and(is_core_type) {
        return false;
    }

    let text_len = annotation
        .text
        .as_deref()
        .map(|t| t.trim().chars().count())
        .unwrap_or(0);
    if text_len <= 2 {
        return false;
    }

    if !infons.and_then(|i| i.valid).unwrap_or(true) {
        return false;
    }

    let identifier = infons.and_then(|i| i.identifier.as_deref());
    !matches!(identifier, None | Some("-"))
}
