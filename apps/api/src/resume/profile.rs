use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "Entry-Level")]
    Entry,
    #[serde(rename = "Mid-Level")]
    Mid,
    #[serde(rename = "Senior-Level")]
    Senior,
}

impl ExperienceLevel {
    /// Parses the label used on the wire ("Entry-Level", "Mid-Level", "Senior-Level").
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Entry-Level" => Some(Self::Entry),
            "Mid-Level" => Some(Self::Mid),
            "Senior-Level" => Some(Self::Senior),
            _ => None,
        }
    }
}

/// The candidate an interview is prepared for, either entered by hand or
/// derived from an analyzed resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl CandidateProfile {
    /// Trims the free-text fields and rejects a profile missing its name or role.
    pub fn validated(self) -> Result<Self, AppError> {
        let name = self.name.trim().to_string();
        let job_role = self.job_role.trim().to_string();
        if name.is_empty() || job_role.is_empty() {
            return Err(AppError::Validation(
                "Please fill in all required details".to_string(),
            ));
        }
        let mut skills: Vec<String> = Vec::with_capacity(self.skills.len());
        for skill in self.skills {
            let skill = skill.trim().to_lowercase();
            if !skill.is_empty() && !skills.contains(&skill) {
                skills.push(skill);
            }
        }
        Ok(Self {
            name,
            job_role,
            experience: self.experience,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::Senior).unwrap(),
            r#""Senior-Level""#
        );
        let level: ExperienceLevel = serde_json::from_str(r#""Mid-Level""#).unwrap();
        assert_eq!(level, ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_label(" Entry-Level "), Some(ExperienceLevel::Entry));
        assert_eq!(ExperienceLevel::from_label("Intern"), None);
    }

    #[test]
    fn test_profile_defaults_experience_and_skills() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"name": "Ada", "job_role": "DevOps"}"#).unwrap();
        assert_eq!(profile.experience, ExperienceLevel::Entry);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_validated_trims_and_dedups() {
        let profile = CandidateProfile {
            name: "  Ada Lovelace ".to_string(),
            job_role: " Data Science".to_string(),
            experience: ExperienceLevel::Senior,
            skills: vec!["Python".into(), "python ".into(), "".into(), "SQL".into()],
        }
        .validated()
        .unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.job_role, "Data Science");
        assert_eq!(profile.skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_validated_requires_name_and_role() {
        let missing_role = CandidateProfile {
            name: "Ada".to_string(),
            job_role: "   ".to_string(),
            experience: ExperienceLevel::Entry,
            skills: vec![],
        };
        assert!(matches!(
            missing_role.validated(),
            Err(AppError::Validation(_))
        ));
    }
}
