use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw candidate input exactly as typed into the form.
///
/// Every field is free text. `links` and `skills` are comma/newline separated,
/// `experience`, `education` and `projects` are blank-line separated blocks of
/// `Org | Role | Dates` headers followed by `- bullet` lines.
///
/// Deserialization is lenient: a field that is missing or not a JSON string
/// becomes an empty string, and a non-object value becomes an empty form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CandidateForm {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: String,
}

impl From<Value> for CandidateForm {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl CandidateForm {
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| -> String {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        CandidateForm {
            name: field("name"),
            title: field("title"),
            email: field("email"),
            phone: field("phone"),
            location: field("location"),
            links: field("links"),
            summary: field("summary"),
            skills: field("skills"),
            experience: field("experience"),
            education: field("education"),
            projects: field("projects"),
        }
    }
}
