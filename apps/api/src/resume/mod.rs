// Resume analysis: contact/skill extraction and the candidate profile an
// interview is prepared from. Role prediction itself lives in `prediction`.

pub mod handlers;
pub mod parser;
pub mod profile;
pub mod skills;

pub use parser::{parse_resume, ResumeInfo};
pub use profile::{CandidateProfile, ExperienceLevel};
