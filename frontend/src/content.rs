use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("section with empty id")]
    EmptyId,

    #[error("duplicate section id: {0}")]
    DuplicateId(String),

    #[error("more than one slide-in section: {0} and {1}")]
    MultipleSlideIn(String, String),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Item {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub slide_in: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub owner: String,
    #[serde(default)]
    pub tagline: String,
    pub sections: Vec<Section>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        let mut slide_in: Option<&str> = None;
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(ContentError::EmptyId);
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateId(section.id.clone()));
            }
            if section.slide_in {
                if let Some(first) = slide_in {
                    return Err(ContentError::MultipleSlideIn(first.to_string(), section.id.clone()));
                }
                slide_in = Some(section.id.as_str());
            }
        }
        Ok(())
    }

    pub fn slide_in_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.slide_in)
    }
}
