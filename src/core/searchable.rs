use crate::models::CandidateRecord;

/// Build the lowercase blob used for substring matching
///
/// Space-joins `role`, `headline`, `bio`, `professional_summary`,
/// `university` and every skill. Missing fields contribute an empty string,
/// so the separator positions stay fixed regardless of which fields exist.
pub fn searchable_text(candidate: &CandidateRecord) -> String {
    let fields = [
        candidate.role.as_deref(),
        candidate.headline.as_deref(),
        candidate.bio.as_deref(),
        candidate.professional_summary.as_deref(),
        candidate.university.as_deref(),
    ];

    fields
        .into_iter()
        .map(|field| field.unwrap_or(""))
        .chain(candidate.skill_list().iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive substring containment
#[inline]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
