//! Portfolio fact store: the biographical and career records every
//! instruction is grounded on.
//!
//! Loaded once at startup (embedded JSON, or a file named by
//! `PORTFOLIO_DATA_PATH`) and read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../../data/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Named external links (portfolio, medium, youtube, ...).
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Any titled, linkable item: projects, blogs, videos, talks, award and
/// certification cards, gallery pictures, comic editions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixCell {
    pub id: String,
    pub phase: String,
    pub role: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub impact: String,
    pub color: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategicMatrix {
    pub title: String,
    #[serde(default)]
    pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioFacts {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Card>,
    /// Category -> skills. Ordered so snapshots are stable.
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub certification_cards: Vec<Card>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub award_cards: Vec<Card>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub blogs: Vec<Card>,
    #[serde(default)]
    pub videos: Vec<Card>,
    #[serde(default)]
    pub speaking: Vec<Card>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Vec<Card>,
    #[serde(default)]
    pub matrix: StrategicMatrix,
    #[serde(default)]
    pub comics: Vec<Card>,
}

/// Serialized view of the facts, interpolated verbatim into instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsSnapshot {
    owner: String,
    text: String,
}

impl FactsSnapshot {
    pub fn new(owner: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            text: text.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// First word of the owner's name, used in headings and task text.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FactsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PortfolioFacts {
    /// Loads from `path` when given, otherwise the data compiled into the binary.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read portfolio data from {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("Invalid portfolio data in {}", path.display()))
            }
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED).context("Embedded portfolio data is invalid")
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let facts: PortfolioFacts = serde_json::from_str(text)?;
        if facts.profile.name.trim().is_empty() {
            bail!("profile.name must not be empty");
        }
        Ok(facts)
    }

    /// Name interpolated as `{owner}` into every instruction.
    pub fn owner(&self) -> &str {
        &self.profile.name
    }

    pub fn link(&self, name: &str) -> Option<&str> {
        self.profile.links.get(name).map(String::as_str)
    }

    /// One labelled line per category, values as compact JSON.
    /// Contains no timestamps, so equal facts give byte-identical snapshots.
    pub fn snapshot(&self) -> Result<FactsSnapshot> {
        let sections: [(&str, String); 16] = [
            ("PROFILE", serde_json::to_string(&self.profile)?),
            ("EXPERIENCE", serde_json::to_string(&self.experience)?),
            ("PROJECTS", serde_json::to_string(&self.projects)?),
            ("SKILLS", serde_json::to_string(&self.skills)?),
            ("CERTIFICATIONS", serde_json::to_string(&self.certifications)?),
            ("RAW_CERTIFICATIONS", serde_json::to_string(&self.certification_cards)?),
            ("AWARDS", serde_json::to_string(&self.awards)?),
            ("RAW_AWARDS", serde_json::to_string(&self.award_cards)?),
            ("PUBLICATIONS", serde_json::to_string(&self.publications)?),
            ("BLOGS", serde_json::to_string(&self.blogs)?),
            ("VIDEOS", serde_json::to_string(&self.videos)?),
            ("SPEAKING", serde_json::to_string(&self.speaking)?),
            ("TESTIMONIALS", serde_json::to_string(&self.testimonials)?),
            ("GALLERY", serde_json::to_string(&self.gallery)?),
            ("MATRIX", serde_json::to_string(&self.matrix)?),
            ("COMICS", serde_json::to_string(&self.comics)?),
        ];

        let text = sections
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(FactsSnapshot::new(self.profile.name.clone(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let facts = PortfolioFacts::embedded().unwrap();
        assert_eq!(facts.owner(), "Enrique K Chan");
        assert_eq!(facts.link("youtube"), Some("https://www.youtube.com/@enriquekchan"));
        assert!(!facts.experience.is_empty());
        assert!(!facts.testimonials.is_empty());
        assert_eq!(facts.matrix.cells.len(), 4);
        assert_eq!(facts.comics.len(), 1);
    }

    #[test]
    fn test_first_name_of_single_word_owner() {
        assert_eq!(FactsSnapshot::new("Cher", "").first_name(), "Cher");
        assert_eq!(FactsSnapshot::new("  Ada  Lovelace ", "").first_name(), "Ada");
    }

    #[test]
    fn test_snapshot_has_every_section_in_order() {
        let snapshot = PortfolioFacts::embedded().unwrap().snapshot().unwrap();
        assert_eq!(snapshot.owner(), "Enrique K Chan");
        assert_eq!(snapshot.first_name(), "Enrique");
        let labels: Vec<&str> = snapshot
            .as_str()
            .lines()
            .filter_map(|line| line.split_once(": ").map(|(label, _)| label))
            .collect();
        assert_eq!(
            labels,
            vec![
                "PROFILE",
                "EXPERIENCE",
                "PROJECTS",
                "SKILLS",
                "CERTIFICATIONS",
                "RAW_CERTIFICATIONS",
                "AWARDS",
                "RAW_AWARDS",
                "PUBLICATIONS",
                "BLOGS",
                "VIDEOS",
                "SPEAKING",
                "TESTIMONIALS",
                "GALLERY",
                "MATRIX",
                "COMICS",
            ]
        );
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let facts = PortfolioFacts::embedded().unwrap();
        assert_eq!(facts.snapshot().unwrap(), facts.snapshot().unwrap());
        let reloaded = PortfolioFacts::embedded().unwrap();
        assert_eq!(facts.snapshot().unwrap(), reloaded.snapshot().unwrap());
    }

    #[test]
    fn test_blank_owner_is_rejected() {
        let text = r#"{"profile": {"name": "  ", "role": "r", "location": "l", "summary": "s"}}"#;
        assert!(PortfolioFacts::from_json(text).is_err());
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let text = r#"{"profile": {"name": "Ada", "role": "Engineer", "location": "London", "summary": "Analytical engines."}}"#;
        let facts = PortfolioFacts::from_json(text).unwrap();
        assert_eq!(facts.owner(), "Ada");
        assert!(facts.awards.is_empty());
        assert_eq!(facts.link("portfolio"), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facts.json");
        std::fs::write(
            &path,
            r#"{"profile": {"name": "Grace", "role": "Admiral", "location": "Arlington", "summary": "COBOL."}}"#,
        )
        .unwrap();
        let facts = PortfolioFacts::load(Some(&path)).unwrap();
        assert_eq!(facts.owner(), "Grace");

        let missing = PortfolioFacts::load(Some(&dir.path().join("nope.json")));
        assert!(missing.is_err());
    }
}
