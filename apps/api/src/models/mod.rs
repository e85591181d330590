pub mod form;
pub mod resume;

pub use form::CandidateForm;
pub use resume::{RecordBlock, ResumeEnhancement, ResumeRecord};
