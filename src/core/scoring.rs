use crate::core::searchable::contains_ignore_case;
use crate::models::{CandidateRecord, ScoringWeights, SearchIntent};

/// Score a candidate against a search intent
///
/// Rules are evaluated in a fixed order and each one that fires appends a
/// reason:
///
/// | rule       | points | reason                       |
/// |------------|--------|------------------------------|
/// | role       | 30     | `Role: {role}`               |
/// | department | 25     | `Field: {department}`        |
/// | skill      | 15 ea. | `Skill: {skill}`             |
/// | experience | 20     | `{years}+ years experience`  |
/// | location   | 10     | `Location: {location}`       |
/// | term bonus | 5 ea.  | none                         |
///
/// `searchable` must be the output of [`super::searchable::searchable_text`]
/// for the same candidate. Weights come from configuration, so the total
/// saturates at `u32::MAX` instead of overflowing.
pub fn calculate_candidate_score(
    candidate: &CandidateRecord,
    searchable: &str,
    intent: &SearchIntent,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    if let Some(role) = intent.role() {
        if searchable.contains(&role.to_lowercase()) {
            score = score.saturating_add(weights.role);
            reasons.push(format!("Role: {}", role));
        }
    }

    if let Some(department) = intent.department() {
        if searchable.contains(&department.to_lowercase()) {
            score = score.saturating_add(weights.department);
            reasons.push(format!("Field: {}", department));
        }
    }

    for skill in intent.skills() {
        let needle = skill.to_lowercase();
        let in_skill_list = candidate
            .skill_list()
            .iter()
            .any(|own| own.to_lowercase().contains(&needle));

        if in_skill_list || searchable.contains(&needle) {
            score = score.saturating_add(weights.skill);
            reasons.push(format!("Skill: {}", skill));
        }
    }

    if let (Some(required), Some(years)) = (intent.min_experience(), candidate.years_experience) {
        if years >= required {
            score = score.saturating_add(weights.experience);
            reasons.push(format!("{}+ years experience", years));
        }
    }

    if let (Some(wanted), Some(location)) = (intent.location(), candidate.location.as_deref()) {
        if contains_ignore_case(location, wanted) {
            score = score.saturating_add(weights.location);
            reasons.push(format!("Location: {}", location));
        }
    }

    // Incidental matches not already named by a reason. Reasons are fixed
    // after this point, so a bonus never adds one.
    for term in search_terms(intent) {
        let already_credited = reasons.iter().any(|reason| contains_ignore_case(reason, &term));
        if !already_credited && searchable.contains(&term) {
            score = score.saturating_add(weights.term_bonus);
        }
    }

    (score, reasons)
}

/// Lowercase role, department and skill terms, de-duplicated in first-seen order
fn search_terms(intent: &SearchIntent) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    let candidates = intent
        .role()
        .into_iter()
        .chain(intent.department())
        .chain(intent.skills());

    for term in candidates {
        let term = term.to_lowercase();
        if !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::searchable::searchable_text;

    fn create_test_candidate() -> CandidateRecord {
        CandidateRecord {
            id: "c1".to_string(),
            full_name: Some("Test Candidate".to_string()),
            role: Some("Lecturer".to_string()),
            headline: Some("Lecturer in Computer Science".to_string()),
            university: Some("University of Leeds".to_string()),
            location: Some("Leeds, UK".to_string()),
            skills: Some(vec!["Python".to_string(), "Machine Learning".to_string()]),
            years_experience: Some(6.0),
            ..Default::default()
        }
    }

    fn score(candidate: &CandidateRecord, intent: &SearchIntent) -> (u32, Vec<String>) {
        let text = searchable_text(candidate);
        calculate_candidate_score(candidate, &text, intent, &ScoringWeights::default())
    }

    #[test]
    fn test_role_and_department() {
        let candidate = create_test_candidate();
        let intent = SearchIntent {
            role: Some("Lecturer".to_string()),
            department: Some("Computer Science".to_string()),
            ..Default::default()
        };

        let (total, reasons) = score(&candidate, &intent);

        assert_eq!(total, 55);
        assert_eq!(reasons, vec!["Role: Lecturer", "Field: Computer Science"]);
    }

    #[test]
    fn test_each_skill_scores_independently() {
        let candidate = create_test_candidate();
        let intent = SearchIntent {
            skills: Some(vec!["python".to_string(), "learning".to_string(), "Rust".to_string()]),
            ..Default::default()
        };

        let (total, reasons) = score(&candidate, &intent);

        assert_eq!(total, 30);
        assert_eq!(reasons, vec!["Skill: python", "Skill: learning"]);
    }

    #[test]
    fn test_experience_is_inclusive() {
        let mut candidate = create_test_candidate();
        candidate.years_experience = Some(5.0);
        let intent = SearchIntent {
            experience_years: Some(5.0),
            ..Default::default()
        };

        let (total, reasons) = score(&candidate, &intent);
        assert_eq!(total, 20);
        assert_eq!(reasons, vec!["5+ years experience"]);

        candidate.years_experience = Some(4.0);
        let (total, reasons) = score(&candidate, &intent);
        assert_eq!(total, 0);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_experience_requires_candidate_years() {
        let mut candidate = create_test_candidate();
        candidate.years_experience = None;
        let intent = SearchIntent {
            experience_years: Some(1.0),
            ..Default::default()
        };

        assert_eq!(score(&candidate, &intent).0, 0);
    }

    #[test]
    fn test_location_reports_candidate_location() {
        let candidate = create_test_candidate();
        let intent = SearchIntent {
            location: Some("leeds".to_string()),
            ..Default::default()
        };

        let (total, reasons) = score(&candidate, &intent);

        assert_eq!(total, 10);
        assert_eq!(reasons, vec!["Location: Leeds, UK"]);
    }

    #[test]
    fn test_location_is_not_part_of_searchable_text() {
        let candidate = create_test_candidate();
        let intent = SearchIntent {
            role: Some("Leeds, UK".to_string()),
            ..Default::default()
        };

        assert_eq!(score(&candidate, &intent).0, 0);
    }

    #[test]
    fn test_credited_terms_get_no_bonus() {
        let candidate = create_test_candidate();
        let intent = SearchIntent {
            role: Some("Lecturer".to_string()),
            skills: Some(vec!["Lecturer".to_string()]),
            ..Default::default()
        };

        let (total, reasons) = score(&candidate, &intent);

        assert_eq!(total, 45);
        assert_eq!(reasons, vec!["Role: Lecturer", "Skill: Lecturer"]);
    }

    #[test]
    fn test_search_terms_deduplicate_case_insensitively() {
        let intent = SearchIntent {
            role: Some("Data".to_string()),
            department: Some("data".to_string()),
            skills: Some(vec!["SQL".to_string(), "sql".to_string()]),
            ..Default::default()
        };

        assert_eq!(search_terms(&intent), vec!["data", "sql"]);
    }

    #[test]
    fn test_custom_weights() {
        let candidate = create_test_candidate();
        let text = searchable_text(&candidate);
        let intent = SearchIntent {
            role: Some("Lecturer".to_string()),
            ..Default::default()
        };
        let weights = ScoringWeights {
            role: 100,
            ..Default::default()
        };

        let (total, _) = calculate_candidate_score(&candidate, &text, &intent, &weights);
        assert_eq!(total, 100);
    }

    #[test]
    fn test_term_bonus_is_shadowed_by_its_own_rule() {
        // Every term found in the text already fired its rule and is named
        // by that rule's reason, so the bonus never adds to the total.
        let candidate = create_test_candidate();
        let text = searchable_text(&candidate);
        let weights = ScoringWeights {
            term_bonus: 1_000,
            ..Default::default()
        };

        for intent in [
            SearchIntent {
                role: Some("LECTURER".to_string()),
                department: Some("computer science".to_string()),
                skills: Some(vec!["Python".to_string(), "leeds".to_string()]),
                ..Default::default()
            },
            SearchIntent {
                skills: Some(vec!["machine".to_string(), "Rust".to_string()]),
                location: Some("Leeds".to_string()),
                ..Default::default()
            },
        ] {
            let (total, reasons) = calculate_candidate_score(&candidate, &text, &intent, &weights);
            assert!(total < 1_000, "bonus applied for {:?}", intent);
            assert!(!reasons.is_empty());
        }
    }

    #[test]
    fn test_large_weights_saturate() {
        let candidate = create_test_candidate();
        let text = searchable_text(&candidate);
        let intent = SearchIntent {
            role: Some("Lecturer".to_string()),
            department: Some("Computer Science".to_string()),
            ..Default::default()
        };
        let weights = ScoringWeights {
            role: u32::MAX,
            department: u32::MAX,
            ..Default::default()
        };

        let (total, reasons) = calculate_candidate_score(&candidate, &text, &intent, &weights);
        assert_eq!(total, u32::MAX);
        assert_eq!(reasons.len(), 2);
    }
}
