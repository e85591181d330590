use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single experience, education or project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBlock {
    pub org: String,
    pub role: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

/// The structured resume shown to the user.
///
/// Built locally from a `CandidateForm`, or merged from an AI enhancement with
/// the local record as the per-field fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<String>,
    pub summary: String,
    pub skills: Vec<String>,
    #[serde(rename = "exp")]
    pub experience: Vec<RecordBlock>,
    #[serde(rename = "edu")]
    pub education: Vec<RecordBlock>,
    #[serde(rename = "projs")]
    pub projects: Vec<RecordBlock>,
}

/// The validated subset of a provider reply.
///
/// Each field is checked on its own; a field that is missing or has the wrong
/// shape is `None` and the merge keeps the local value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeEnhancement {
    pub summary: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<RecordBlock>>,
    pub education: Option<Vec<RecordBlock>>,
    pub projects: Option<Vec<RecordBlock>>,
}

impl ResumeEnhancement {
    /// Validates a loosely-typed reply field by field.
    pub fn from_value(value: &Value) -> Self {
        ResumeEnhancement {
            summary: value.get("summary").and_then(Value::as_str).map(str::to_string),
            skills: value.get("skills").and_then(string_list),
            experience: value.get("experience").and_then(block_list),
            education: value.get("education").and_then(block_list),
            projects: value.get("projects").and_then(block_list),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.skills.is_none()
            && self.experience.is_none()
            && self.education.is_none()
            && self.projects.is_none()
    }
}

/// An array of strings, trimmed with empty entries dropped.
/// Any non-string element rejects the whole field.
fn string_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let s = item.as_str()?.trim();
        if !s.is_empty() {
            out.push(s.to_string());
        }
    }
    Some(out)
}

fn block_list(value: &Value) -> Option<Vec<RecordBlock>> {
    value.as_array()?;
    let blocks: Vec<RecordBlock> = serde_json::from_value(value.clone()).ok()?;
    Some(
        blocks
            .into_iter()
            .map(|b| RecordBlock {
                org: b.org.trim().to_string(),
                role: b.role.trim().to_string(),
                dates: b.dates.trim().to_string(),
                bullets: b
                    .bullets
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            })
            .collect(),
    )
}
