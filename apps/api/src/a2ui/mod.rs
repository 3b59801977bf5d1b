//! A2UI: the closed UI-description protocol the front end renders.
//!
//! A reply is a JSON array of directives: one `beginRendering` naming the root
//! component of a surface, and one or more `surfaceUpdate` directives carrying
//! flat lists of components keyed by id. Containers (Column / Row) reference
//! children by id; every other component carries literal content.
//!
//! The component tag set is closed. An unknown tag is a parse error, which the
//! generation layer reports as a malformed reply.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Surface every portfolio template renders into.
pub const SURFACE_ID: &str = "portfolioContent";

#[derive(Debug, Error)]
pub enum A2uiError {
    #[error("invalid A2UI JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no beginRendering directive")]
    MissingBeginRendering,

    #[error("no surfaceUpdate directive")]
    MissingSurfaceUpdate,

    #[error("surfaceUpdate targets surface '{0}' which was never begun")]
    UnknownSurface(String),

    #[error("duplicate component id '{id}' in surface '{surface_id}'")]
    DuplicateId { surface_id: String, id: String },

    #[error("root component '{root}' not found in surface '{surface_id}'")]
    MissingRoot { surface_id: String, root: String },

    #[error("component '{parent}' references unknown child '{child}'")]
    DanglingChild { parent: String, child: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Directives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    #[serde(rename = "beginRendering")]
    BeginRendering(BeginRendering),
    #[serde(rename = "surfaceUpdate")]
    SurfaceUpdate(SurfaceUpdate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeginRendering {
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
    pub root: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceUpdate {
    #[serde(rename = "surfaceId")]
    pub surface_id: String,
    pub components: Vec<ComponentEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub component: Component,
    /// e.g. `weight`, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Components
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of component tags a consumer knows how to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Column(Container),
    Row(Container),
    Text(TextProps),
    Image(ImageProps),
    Video(MediaProps),
    Audio(MediaProps),
    Flashcard(FlashcardProps),
    QuizCard(QuizCardProps),
    PortfolioCard(PortfolioCardProps),
    ExperienceCard(ExperienceCardProps),
    ProfileBubble(ProfileBubbleProps),
    StrategicMatrix(StrategicMatrixProps),
    SkillRadar(SkillRadarProps),
}

/// Tag of a [`Component`], used where templates name the component kinds a
/// reply is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Column,
    Row,
    Text,
    Image,
    Video,
    Audio,
    Flashcard,
    QuizCard,
    PortfolioCard,
    ExperienceCard,
    ProfileBubble,
    StrategicMatrix,
    SkillRadar,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Column(_) => ComponentKind::Column,
            Component::Row(_) => ComponentKind::Row,
            Component::Text(_) => ComponentKind::Text,
            Component::Image(_) => ComponentKind::Image,
            Component::Video(_) => ComponentKind::Video,
            Component::Audio(_) => ComponentKind::Audio,
            Component::Flashcard(_) => ComponentKind::Flashcard,
            Component::QuizCard(_) => ComponentKind::QuizCard,
            Component::PortfolioCard(_) => ComponentKind::PortfolioCard,
            Component::ExperienceCard(_) => ComponentKind::ExperienceCard,
            Component::ProfileBubble(_) => ComponentKind::ProfileBubble,
            Component::StrategicMatrix(_) => ComponentKind::StrategicMatrix,
            Component::SkillRadar(_) => ComponentKind::SkillRadar,
        }
    }

    /// Child ids for containers; empty for leaf components.
    pub fn children(&self) -> &[String] {
        match self {
            Component::Column(c) | Component::Row(c) => &c.children.explicit_list,
            _ => &[],
        }
    }
}

/// Text content as the protocol binds it: a literal, a data-model path, or
/// (leniently) a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundText {
    Literal {
        #[serde(rename = "literalString")]
        literal_string: String,
    },
    Path {
        path: String,
    },
    Plain(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Children {
    #[serde(rename = "explicitList")]
    pub explicit_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub children: Children,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: BoundText,
    #[serde(rename = "usageHint", default, skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub url: BoundText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaProps {
    pub url: BoundText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardProps {
    pub front: BoundText,
    pub back: BoundText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BoundText>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: BoundText,
    pub value: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizCardProps {
    pub question: BoundText,
    pub options: Vec<QuizOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<BoundText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<BoundText>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCardProps {
    pub title: BoundText,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCardProps {
    pub company: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBubbleProps {
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicMatrixProps {
    pub title: String,
    pub cells: Vec<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSkill {
    pub subject: String,
    /// Kept as written: `95` stays an integer, `87.5` a float.
    pub value: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRadarProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub skills: Vec<RadarSkill>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing and validation
// ────────────────────────────────────────────────────────────────────────────

/// Parses a JSON array of directives. Unknown directive or component tags fail.
pub fn parse_messages(text: &str) -> Result<Vec<Directive>, A2uiError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses directives out of an already-decoded JSON value.
pub fn messages_from_value(value: Value) -> Result<Vec<Directive>, A2uiError> {
    Ok(serde_json::from_value(value)?)
}

/// Checks the structural invariants a renderer relies on: each begun surface
/// has its root, ids are unique per surface, and every container child exists.
pub fn validate(messages: &[Directive]) -> Result<(), A2uiError> {
    let mut roots: HashMap<&str, &str> = HashMap::new();
    let mut surfaces: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut has_update = false;

    for message in messages {
        if let Directive::BeginRendering(begin) = message {
            roots.insert(begin.surface_id.as_str(), begin.root.as_str());
        }
    }
    if roots.is_empty() {
        return Err(A2uiError::MissingBeginRendering);
    }

    for message in messages {
        let Directive::SurfaceUpdate(update) = message else {
            continue;
        };
        has_update = true;

        if !roots.contains_key(update.surface_id.as_str()) {
            return Err(A2uiError::UnknownSurface(update.surface_id.clone()));
        }

        let ids = surfaces.entry(update.surface_id.as_str()).or_default();
        for entry in &update.components {
            if !ids.insert(entry.id.as_str()) {
                return Err(A2uiError::DuplicateId {
                    surface_id: update.surface_id.clone(),
                    id: entry.id.clone(),
                });
            }
        }
    }
    if !has_update {
        return Err(A2uiError::MissingSurfaceUpdate);
    }

    for (surface_id, root) in &roots {
        let known = surfaces.get(surface_id);
        if !known.is_some_and(|ids| ids.contains(root)) {
            return Err(A2uiError::MissingRoot {
                surface_id: surface_id.to_string(),
                root: root.to_string(),
            });
        }
    }

    for message in messages {
        let Directive::SurfaceUpdate(update) = message else {
            continue;
        };
        let ids = &surfaces[update.surface_id.as_str()];
        for entry in &update.components {
            if let Some(child) = entry
                .component
                .children()
                .iter()
                .find(|child| !ids.contains(child.as_str()))
            {
                return Err(A2uiError::DanglingChild {
                    parent: entry.id.clone(),
                    child: child.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Every component kind that appears anywhere in the directives.
pub fn component_kinds(messages: &[Directive]) -> HashSet<ComponentKind> {
    messages
        .iter()
        .filter_map(|m| match m {
            Directive::SurfaceUpdate(update) => Some(update),
            Directive::BeginRendering(_) => None,
        })
        .flat_map(|update| update.components.iter().map(|e| e.component.kind()))
        .collect()
}
