//! Résumé builder backend: free-text parsing, local structuring, and an
//! OpenAI-compatible enhancement proxy that keeps the provider key server-side.

pub mod config;
pub mod enhancement;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod parser;
pub mod routes;
pub mod state;
pub mod structuring;

#[cfg(test)]
mod test_support;

pub use enhancement::{generate_resume, EnhancementClient, EnhancementError, Enhancer, LocalOnly};
pub use models::{CandidateForm, RecordBlock, ResumeEnhancement, ResumeRecord};
pub use parser::{parse_list, parse_sections};
pub use routes::build_router;
pub use state::AppState;
pub use structuring::build_resume_record;
