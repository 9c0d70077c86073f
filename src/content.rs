//! Static portfolio content, embedded at compile time and validated once at
//! startup. Nothing here changes while the page is open.

use serde::Deserialize;
use url::Url;

use crate::navigation::Section;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");
const PLACEHOLDER_PHOTO_BASE: &str = "https://placehold.co/200x200/4f46e5/ffffff";
const GITHUB_BASE: &str = "https://github.com/";
const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("skill {name:?} has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("nav item {label:?} targets unknown section {target:?}")]
    UnknownNavTarget { label: String, target: String },

    #[error("{field} is not an http(s) URL: {value:?}")]
    InvalidLink { field: String, value: String },

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub about: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub photo_url: String,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn brand(&self) -> String {
        format!("{} Dev", self.first_name())
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn github_url(&self) -> String {
        format!("{GITHUB_BASE}{}", self.github)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn placeholder_photo_url(&self) -> String {
        Url::parse_with_params(PLACEHOLDER_PHOTO_BASE, &[("text", self.initials())])
            .map(String::from)
            .unwrap_or_else(|_| PLACEHOLDER_PHOTO_BASE.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillColor {
    Blue,
    Cyan,
    Green,
    Indigo,
    Sky,
}

impl SkillColor {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "tint-blue",
            Self::Cyan => "tint-cyan",
            Self::Green => "tint-green",
            Self::Indigo => "tint-indigo",
            Self::Sky => "tint-sky",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: SkillColor,
}

impl Skill {
    pub fn width(&self, revealed: bool) -> String {
        let percent = if revealed { self.level } else { 0 };
        format!("{percent}%")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub highlights: Vec<String>,
    pub projects: Vec<Project>,
    pub nav: Vec<NavItem>,
}

impl Portfolio {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        for (field, value) in [
            ("profile.name", &profile.name),
            ("profile.email", &profile.email),
            ("profile.github", &profile.github),
            ("profile.photo_url", &profile.photo_url),
        ] {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField(field));
            }
        }
        ensure_http_url("profile.linkedin".to_string(), &profile.linkedin)?;

        for skill in &self.skills {
            if skill.level > MAX_SKILL_LEVEL {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        for project in &self.projects {
            ensure_http_url(format!("project {:?} link", project.title), &project.link)?;
        }

        for item in &self.nav {
            if Section::from_id(&item.target).is_none() {
                return Err(ContentError::UnknownNavTarget {
                    label: item.label.clone(),
                    target: item.target.clone(),
                });
            }
        }

        Ok(())
    }
}

fn ensure_http_url(field: String, value: &str) -> Result<(), ContentError> {
    match Url::parse(value) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        _ => Err(ContentError::InvalidLink {
            field,
            value: value.to_string(),
        }),
    }
}

/// Where the hero photo currently comes from. A failed load moves to the
/// placeholder; a failed placeholder stays put instead of retrying forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoSource {
    #[default]
    Primary,
    Placeholder,
}

impl PhotoSource {
    pub fn src(self, profile: &Profile) -> String {
        match self {
            Self::Primary => profile.photo_url.clone(),
            Self::Placeholder => profile.placeholder_photo_url(),
        }
    }

    pub fn after_load_error(self) -> Self {
        Self::Placeholder
    }
}
