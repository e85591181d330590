// Prompt text for resume enhancement. Shared by the proxy and the direct
// provider path so both send byte-identical requests.

use crate::models::CandidateForm;

pub const ENHANCE_SYSTEM: &str =
    "You rewrite resumes for ATS with quantified, action-driven bullet points.";

/// Interpolates the raw (untrimmed) form fields into the enhancement prompt.
pub fn build_enhance_prompt(form: &CandidateForm) -> String {
    format!(
        "\
You are an expert ATS resume writer. Improve the following candidate data and return STRICT JSON only. Do not include markdown.

Return JSON with keys: summary (string), skills (string[]), experience (array of {{org, role, dates, bullets: string[]}}), education (same shape), projects (same shape).

Candidate Data:
Name: {name}
Title: {title}
Email: {email}
Phone: {phone}
Location: {location}
Links: {links}
Summary: {summary}
Skills: {skills}
Experience:
{experience}
Projects:
{projects}
Education:
{education}",
        name = form.name,
        title = form.title,
        email = form.email,
        phone = form.phone,
        location = form.location,
        links = form.links,
        summary = form.summary,
        skills = form.skills,
        experience = form.experience,
        projects = form.projects,
        education = form.education,
    )
}
