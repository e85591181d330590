//! Local structuring: deterministic `CandidateForm` → `ResumeRecord`.
//! Always available; the remote enhancement only ever refines its output.

use crate::models::{CandidateForm, ResumeRecord};
use crate::parser::{parse_list, parse_sections};

/// Builds the resume record from raw form input. Total and pure.
pub fn build_resume_record(form: &CandidateForm) -> ResumeRecord {
    ResumeRecord {
        name: form.name.trim().to_string(),
        title: form.title.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        location: form.location.trim().to_string(),
        links: parse_list(&form.links),
        summary: form.summary.trim().to_string(),
        skills: parse_list(&form.skills),
        experience: parse_sections(&form.experience),
        education: parse_sections(&form.education),
        projects: parse_sections(&form.projects),
    }
}
