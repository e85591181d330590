use crate::models::{ResumeEnhancement, ResumeRecord};

/// Field-independent merge: each validated AI field replaces the local one,
/// anything the AI omitted or mistyped keeps the local value. Contact fields
/// always come from the form.
pub fn merge_enhancement(base: ResumeRecord, ai: ResumeEnhancement) -> ResumeRecord {
    ResumeRecord {
        summary: ai.summary.unwrap_or(base.summary),
        skills: ai.skills.unwrap_or(base.skills),
        experience: ai.experience.unwrap_or(base.experience),
        education: ai.education.unwrap_or(base.education),
        projects: ai.projects.unwrap_or(base.projects),
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordBlock;
    use serde_json::json;

    fn base() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            summary: "Local summary".to_string(),
            skills: vec!["Rust".to_string()],
            experience: vec![RecordBlock {
                org: "Acme".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_enhancement_keeps_base() {
        assert_eq!(merge_enhancement(base(), ResumeEnhancement::default()), base());
    }

    #[test]
    fn test_mistyped_skills_keep_base_skills() {
        let ai = ResumeEnhancement::from_value(&json!({ "skills": "Rust, Kafka" }));
        let merged = merge_enhancement(base(), ai);
        assert_eq!(merged.skills, vec!["Rust"]);
    }

    #[test]
    fn test_valid_fields_replace_whole_sections() {
        let ai = ResumeEnhancement::from_value(&json!({
            "summary": "Rewritten",
            "experience": [
                {"org": "Acme", "role": "Staff Engineer", "dates": "2020-2024", "bullets": ["Cut costs 30%"]},
                {"org": "Beta", "role": "Engineer", "dates": "2017-2020", "bullets": []}
            ],
            "projects": []
        }));
        let merged = merge_enhancement(base(), ai);

        assert_eq!(merged.summary, "Rewritten");
        assert_eq!(merged.experience.len(), 2);
        assert_eq!(merged.experience[0].bullets, vec!["Cut costs 30%"]);
        assert!(merged.projects.is_empty());
        assert_eq!(merged.skills, vec!["Rust"]);
        assert_eq!(merged.name, "Jane Doe");
        assert_eq!(merged.email, "jane@example.com");
    }

    #[test]
    fn test_empty_summary_string_is_still_a_summary() {
        let ai = ResumeEnhancement::from_value(&json!({ "summary": "" }));
        assert_eq!(merge_enhancement(base(), ai).summary, "");
    }
}
