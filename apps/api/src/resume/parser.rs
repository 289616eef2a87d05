//! Resume field extraction: contact details and skills pulled from resume text.
//!
//! Pure pattern matching over the cleaned text; every field is optional and
//! extraction never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::prediction::normalizer::clean_text;
use crate::resume::skills::TECH_SKILLS;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)*\b").expect("name pattern is valid")
});
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+").expect("email pattern is valid")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+91[\-\s]?)?[789]\d{9}").expect("phone pattern is valid"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("link pattern is valid"));

// Boundaries are non-word characters rather than `\b` so skills ending in a
// symbol ("c++", "node.js") still match before a space.
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TECH_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"(?:^|[^a-z0-9_]){}(?:[^a-z0-9_]|$)", regex::escape(skill));
            (*skill, Regex::new(&pattern).expect("escaped skill pattern is valid"))
        })
        .collect()
});

/// Profile fields extracted from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    /// Known skills found in the text, lowercase, in skill-list order.
    pub skills: Vec<String>,
}

pub fn parse_resume(raw_text: &str) -> ResumeInfo {
    let text = clean_text(raw_text);
    let (linkedin, github) = extract_links(&text);

    ResumeInfo {
        name: first_match(&NAME_RE, &text),
        email: first_match(&EMAIL_RE, &text),
        phone: first_match(&PHONE_RE, &text),
        linkedin,
        github,
        skills: extract_skills(&text),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

/// First LinkedIn and first GitHub URL in the text.
fn extract_links(text: &str) -> (Option<String>, Option<String>) {
    let links: Vec<&str> = LINK_RE.find_iter(text).map(|m| m.as_str()).collect();
    let find = |host: &str| {
        links
            .iter()
            .find(|url| url.to_lowercase().contains(host))
            .map(|url| url.to_string())
    };
    (find("linkedin"), find("github"))
}

fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&lower))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Priya Sharma\n  priya.sharma@example.com | +91 9876543210 | Backend Engineer\n\
        https://www.linkedin.com/in/priya-sharma https://github.com/psharma\n\
        Skills: Python, Django, REST API, PostgreSQL, Docker, C++ and Node.js.\n\
        Built data pipelines with Pandas and Apache Spark.";

    #[test]
    fn test_parse_contact_fields() {
        let info = parse_resume(RESUME);
        assert_eq!(info.name.as_deref(), Some("Priya Sharma"));
        assert_eq!(info.email.as_deref(), Some("priya.sharma@example.com"));
        assert_eq!(info.phone.as_deref(), Some("+91 9876543210"));
        assert_eq!(
            info.linkedin.as_deref(),
            Some("https://www.linkedin.com/in/priya-sharma")
        );
        assert_eq!(info.github.as_deref(), Some("https://github.com/psharma"));
    }

    #[test]
    fn test_skills_are_whole_words_in_list_order() {
        let info = parse_resume(RESUME);
        assert_eq!(
            info.skills,
            vec![
                "python",
                "c++",
                "postgresql",
                "node.js",
                "django",
                "github",
                "docker",
                "pandas",
                "spark",
                "rest api"
            ]
        );
    }

    #[test]
    fn test_skill_inside_longer_word_is_not_matched() {
        let info = parse_resume("Worked with JavaScript and Expressionist painters");
        assert!(info.skills.contains(&"javascript".to_string()));
        assert!(!info.skills.contains(&"java".to_string()));
        assert!(!info.skills.contains(&"express".to_string()));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let info = parse_resume("lowercase text with no contact details");
        assert_eq!(info, ResumeInfo::default());
    }

    #[test]
    fn test_non_ascii_is_stripped_before_matching() {
        let info = parse_resume("Jos\u{e9} Pe\u{f1}a \u{2022} jose@example.org");
        assert_eq!(info.name.as_deref(), Some("Jos Pea"));
        assert_eq!(info.email.as_deref(), Some("jose@example.org"));
    }
}
