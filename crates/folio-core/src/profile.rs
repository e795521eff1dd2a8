//! Portfolio data model
//!
//! The profile is immutable for the lifetime of a session. It is either the
//! embedded sample persona or loaded once from a TOML file at startup; no
//! view is allowed to mutate it.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A skill with a 0-100 proficiency level, rendered as a bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// One role in the work history, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// One credential in the academic history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The complete portfolio content backing every view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Profile {
    /// Parse a profile from TOML text.
    ///
    /// Skill levels above 100 are rejected here rather than clamped at
    /// render time.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ProfileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::profile_invalid("name must not be empty"));
        }
        for skill in &self.skills {
            if skill.level > 100 {
                return Err(Error::profile_invalid(format!(
                    "skill '{}' has level {} (max 100)",
                    skill.name, skill.level
                )));
            }
        }
        Ok(())
    }

    /// Built-in persona used when no profile file is given.
    pub fn sample() -> Self {
        Profile {
            name: "Jordan Reyes".to_string(),
            title: "Systems Engineer".to_string(),
            location: "Portland, OR".to_string(),
            email: "jordan.reyes@example.com".to_string(),
            phone: Some("+1 (503) 555-0142".to_string()),
            linkedin: Some("linkedin.com/in/jordanreyes".to_string()),
            summary: "Systems engineer focused on reliable network services and \
                      developer tooling. Comfortable owning a feature from design \
                      through rollout and the dashboards that prove it works."
                .to_string(),
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: 90,
                },
                Skill {
                    name: "Distributed Systems".to_string(),
                    level: 85,
                },
                Skill {
                    name: "PostgreSQL".to_string(),
                    level: 75,
                },
                Skill {
                    name: "Kubernetes".to_string(),
                    level: 70,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: 65,
                },
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Senior Systems Engineer".to_string(),
                    company: "Driftline Networks".to_string(),
                    period: "2022 - Present".to_string(),
                    points: vec![
                        "Lead the ingest pipeline team; cut p99 latency 40% by reworking batching".to_string(),
                        "Introduced structured tracing across services, halving incident triage time".to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Backend Engineer".to_string(),
                    company: "Cobble & Frame".to_string(),
                    period: "2019 - 2022".to_string(),
                    points: vec![
                        "Built the order-routing service handling 20k requests/minute".to_string(),
                        "Migrated billing from a nightly batch job to an event-driven flow".to_string(),
                    ],
                },
            ],
            education: vec![EducationEntry {
                degree: "B.S. Computer Science".to_string(),
                school: "Oregon State University".to_string(),
                period: "2015 - 2019".to_string(),
                detail: Some("Focus on operating systems and networks".to_string()),
            }],
            projects: vec![
                Project {
                    title: "tidewatch".to_string(),
                    description: "Terminal dashboard for tide and swell forecasts with offline caching"
                        .to_string(),
                    tech: vec!["Rust".to_string(), "ratatui".to_string()],
                    link: Some("github.com/jordanreyes/tidewatch".to_string()),
                },
                Project {
                    title: "relay-bench".to_string(),
                    description: "Load generator and latency profiler for message brokers".to_string(),
                    tech: vec!["Rust".to_string(), "tokio".to_string()],
                    link: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_profile_is_valid() {
        let profile = Profile::sample();
        assert!(profile.validate().is_ok());
        assert!(!profile.skills.is_empty());
        assert!(!profile.experience.is_empty());
    }

    #[test]
    fn test_parse_minimal_profile() {
        let text = r#"
            name = "Ann Example"
            title = "Engineer"
            location = "Nowhere"
            email = "ann@example.com"
            summary = "Short bio."
        "#;
        let profile = Profile::from_toml_str(text).unwrap();
        assert_eq!(profile.name, "Ann Example");
        assert!(profile.skills.is_empty());
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_parse_full_profile() {
        let text = r#"
            name = "Ann Example"
            title = "Engineer"
            location = "Nowhere"
            email = "ann@example.com"
            summary = "Short bio."

            [[skills]]
            name = "Rust"
            level = 88

            [[experience]]
            role = "Engineer"
            company = "Acme"
            period = "2020 - Present"
            points = ["Did things"]

            [[education]]
            degree = "B.S."
            school = "State"
            period = "2016 - 2020"

            [[projects]]
            title = "widget"
            description = "A widget"
            tech = ["Rust"]
        "#;
        let profile = Profile::from_toml_str(text).unwrap();
        assert_eq!(profile.skills[0].level, 88);
        assert_eq!(profile.experience[0].points.len(), 1);
        assert!(profile.education[0].detail.is_none());
        assert_eq!(profile.projects[0].tech, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_rejects_skill_level_over_100() {
        let text = r#"
            name = "Ann"
            title = "Engineer"
            location = "Nowhere"
            email = "ann@example.com"
            summary = "Bio"

            [[skills]]
            name = "Rust"
            level = 120
        "#;
        let err = Profile::from_toml_str(text).unwrap_err();
        assert!(matches!(err, Error::ProfileInvalid { .. }));
    }

    #[test]
    fn test_rejects_empty_name() {
        let text = r#"
            name = "  "
            title = "Engineer"
            location = "Nowhere"
            email = "ann@example.com"
            summary = "Bio"
        "#;
        let err = Profile::from_toml_str(text).unwrap_err();
        assert!(matches!(err, Error::ProfileInvalid { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Profile::load(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, Error::ProfileNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name = \"Ann\"").unwrap();
        writeln!(file, "title = \"Engineer\"").unwrap();
        writeln!(file, "location = \"Nowhere\"").unwrap();
        writeln!(file, "email = \"ann@example.com\"").unwrap();
        writeln!(file, "summary = \"Bio\"").unwrap();

        let profile = Profile::load(&path).unwrap();
        assert_eq!(profile.name, "Ann");
    }

    #[test]
    fn test_malformed_toml_is_a_toml_error() {
        let err = Profile::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
