//! Template registry: the catalogue of output formats the portfolio agent
//! can produce, each with an example A2UI skeleton and the instruction text
//! that tells the generation service how to fill it.
//!
//! The registry is built once at startup from static data and never mutated.

pub mod catalogue;
pub mod skeletons;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::a2ui::{self, A2uiError, ComponentKind};

/// Bumped whenever a skeleton or instruction text changes. Cached results
/// carry it so stale generations can be told apart.
pub const REGISTRY_VERSION: &str = "2025.12.1";

// ────────────────────────────────────────────────────────────────────────────
// Format identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatId {
    Flashcards,
    Quiz,
    Podcast,
    Video,
    Image,
    Timeline,
    VideoCards,
    BlogCards,
    Awards,
    Certs,
    Speaker,
    Testimonials,
    Gallery,
    Matrix,
    Charts,
    Comics,
    Creative,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown format '{0}'")]
pub struct UnknownFormat(pub String);

impl FormatId {
    pub const ALL: [FormatId; 17] = [
        FormatId::Flashcards,
        FormatId::Quiz,
        FormatId::Podcast,
        FormatId::Video,
        FormatId::Image,
        FormatId::Timeline,
        FormatId::VideoCards,
        FormatId::BlogCards,
        FormatId::Awards,
        FormatId::Certs,
        FormatId::Speaker,
        FormatId::Testimonials,
        FormatId::Gallery,
        FormatId::Matrix,
        FormatId::Charts,
        FormatId::Comics,
        FormatId::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatId::Flashcards => "flashcards",
            FormatId::Quiz => "quiz",
            FormatId::Podcast => "podcast",
            FormatId::Video => "video",
            FormatId::Image => "image",
            FormatId::Timeline => "timeline",
            FormatId::VideoCards => "video_cards",
            FormatId::BlogCards => "blog_cards",
            FormatId::Awards => "awards",
            FormatId::Certs => "certs",
            FormatId::Speaker => "speaker",
            FormatId::Testimonials => "testimonials",
            FormatId::Gallery => "gallery",
            FormatId::Matrix => "matrix",
            FormatId::Charts => "charts",
            FormatId::Comics => "comics",
            FormatId::Creative => "creative",
        }
    }
}

impl FromStr for FormatId {
    type Err = UnknownFormat;

    /// Case-insensitive; surrounding whitespace is ignored. `audio` and
    /// `radar` are accepted as aliases of `podcast` and `charts`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "audio" => return Ok(FormatId::Podcast),
            "radar" => return Ok(FormatId::Charts),
            _ => {}
        }
        FormatId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// A topic keyword set that swaps the default task for a focused one.
#[derive(Debug)]
pub struct FocusRule {
    pub keywords: &'static [&'static str],
    pub task: &'static str,
}

/// An extra labelled skeleton shown after the main example.
#[derive(Debug)]
pub struct Variant {
    pub heading: &'static str,
    pub skeleton: &'static str,
}

#[derive(Debug)]
pub struct FormatTemplate {
    pub format_id: FormatId,
    pub example_skeleton: &'static str,
    pub variant_skeletons: &'static [Variant],
    pub audience: &'static str,
    pub data_heading: &'static str,
    pub task: &'static str,
    pub instruction_rules: &'static [&'static str],
    /// Checked in order against the lowercased topic; first hit wins.
    pub focus_rules: &'static [FocusRule],
    pub example_heading: &'static str,
    /// A structured reply must contain at least one of these. Empty = any.
    pub required_components: &'static [ComponentKind],
}

impl FormatTemplate {
    /// Task text for a topic, after applying focus rules.
    pub fn task_for(&self, topic: &str) -> &'static str {
        let topic = topic.to_lowercase();
        self.focus_rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| topic.contains(kw)))
            .map(|rule| rule.task)
            .unwrap_or(self.task)
    }

    pub fn accepts(&self, kinds: &HashSet<ComponentKind>) -> bool {
        self.required_components.is_empty()
            || self.required_components.iter().any(|k| kinds.contains(k))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
#[error("{format} skeleton '{heading}' is not valid A2UI: {source}")]
pub struct SkeletonError {
    pub format: FormatId,
    pub heading: &'static str,
    #[source]
    pub source: A2uiError,
}

pub struct TemplateRegistry {
    templates: BTreeMap<FormatId, &'static FormatTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let templates = catalogue::TEMPLATES
            .iter()
            .map(|t| (t.format_id, t))
            .collect();
        Self { templates }
    }

    /// Lenient lookup by name. Unknown names get the flashcards template.
    pub fn get(&self, format_id: &str) -> &'static FormatTemplate {
        format_id
            .parse::<FormatId>()
            .ok()
            .and_then(|id| self.lookup(id))
            .unwrap_or(&catalogue::FLASHCARDS)
    }

    pub fn lookup(&self, format_id: FormatId) -> Option<&'static FormatTemplate> {
        self.templates.get(&format_id).copied()
    }

    pub fn supported_formats(&self) -> Vec<FormatId> {
        self.templates.keys().copied().collect()
    }

    pub fn version(&self) -> &'static str {
        REGISTRY_VERSION
    }

    /// Parses and validates every example and variant skeleton. Run at
    /// startup so a broken catalogue never reaches the model. Returns the
    /// number of skeletons checked.
    pub fn check_skeletons(&self) -> Result<usize, SkeletonError> {
        let mut checked = 0;
        for template in self.templates.values() {
            let examples = std::iter::once((template.example_heading, template.example_skeleton))
                .chain(template.variant_skeletons.iter().map(|v| (v.heading, v.skeleton)));
            for (heading, skeleton) in examples {
                a2ui::parse_messages(skeleton)
                    .and_then(|messages| a2ui::validate(&messages))
                    .map_err(|source| SkeletonError {
                        format: template.format_id,
                        heading,
                        source,
                    })?;
                checked += 1;
            }
        }
        Ok(checked)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
