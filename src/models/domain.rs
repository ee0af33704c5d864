use serde::{Deserialize, Serialize};

/// Job seeker profile as read from the candidate directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub years_experience: Option<f64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl CandidateRecord {
    /// Helper to get the skill list, treating a missing list as empty
    pub fn skill_list(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }
}

/// Structured recruiter search, extracted upstream from free text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIntent {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience_years: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
}

impl SearchIntent {
    /// Role keyword, ignoring blank values
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    /// Department keyword, ignoring blank values
    pub fn department(&self) -> Option<&str> {
        non_blank(self.department.as_deref())
    }

    /// Location keyword, ignoring blank values
    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    /// Non-blank skill keywords in request order
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flatten()
            .filter_map(|s| non_blank(Some(s.as_str())))
    }

    /// Minimum experience; zero or negative minimums impose no requirement
    pub fn min_experience(&self) -> Option<f64> {
        self.experience_years.filter(|years| *years > 0.0)
    }

    /// True when no field would contribute to a score
    pub fn is_empty(&self) -> bool {
        self.role().is_none()
            && self.department().is_none()
            && self.location().is_none()
            && self.skills().next().is_none()
            && self.min_experience().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Candidate with its score and the reasons that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: CandidateRecord,
    pub score: u32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Points awarded by each matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub role: u32,
    pub department: u32,
    pub skill: u32,
    pub experience: u32,
    pub location: u32,
    pub term_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            role: 30,
            department: 25,
            skill: 15,
            experience: 20,
            location: 10,
            term_bonus: 5,
        }
    }
}

/// Kind of tracked email interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailEvent {
    Open,
    Click,
}

impl EmailEvent {
    /// Parse the `event` query value; only the exact lowercase kinds are
    /// accepted, anything else yields `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(EmailEvent::Open),
            "click" => Some(EmailEvent::Click),
            _ => None,
        }
    }
}

/// Open/click counters for one tracked message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTrackingStats {
    pub id: String,
    pub open_count: i32,
    pub opened_at: Option<chrono::DateTime<chrono::Utc>>,
    pub click_count: i32,
    pub last_clicked_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_with_null_skills() {
        let json = r#"{"id": "c1", "full_name": "Ada", "skills": null}"#;
        let candidate: CandidateRecord = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.id, "c1");
        assert!(candidate.skill_list().is_empty());
        assert!(candidate.years_experience.is_none());
    }

    #[test]
    fn test_blank_intent_fields_are_absent() {
        let intent = SearchIntent {
            role: Some("   ".to_string()),
            department: Some(String::new()),
            skills: Some(vec!["".to_string(), " ".to_string()]),
            experience_years: Some(0.0),
            location: None,
        };

        assert!(intent.is_empty());
    }

    #[test]
    fn test_scored_candidate_serializes_flat() {
        let scored = ScoredCandidate {
            candidate: CandidateRecord {
                id: "c1".to_string(),
                full_name: Some("Ada Lovelace".to_string()),
                ..Default::default()
            },
            score: 30,
            match_reasons: vec!["Role: Lecturer".to_string()],
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["full_name"], "Ada Lovelace");
        assert_eq!(value["score"], 30);
        assert_eq!(value["matchReasons"][0], "Role: Lecturer");
    }

    #[test]
    fn test_email_event_parse() {
        assert_eq!(EmailEvent::parse("open"), Some(EmailEvent::Open));
        assert_eq!(EmailEvent::parse("click"), Some(EmailEvent::Click));
        assert_eq!(EmailEvent::parse("CLICK"), None);
        assert_eq!(EmailEvent::parse(" click "), None);
        assert_eq!(EmailEvent::parse("bounce"), None);
    }
}
