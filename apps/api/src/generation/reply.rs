//! Post-reply processing: turn raw model output into validated A2UI
//! directives (or prose) and attach a provenance record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::a2ui::{self, A2uiError, ComponentKind, Directive};
use crate::portfolio::PortfolioFacts;
use crate::templates::{FormatId, FormatTemplate};

/// Envelopes nest at most this deep (`{"result": "{\"a2ui\": [...]}"}`).
const MAX_ENVELOPE_DEPTH: usize = 4;

const CREDENTIALS_URL: &str = "https://www.credential.net/profile/enriquekchan";
const CLOUD_NEXT_URL: &str = "https://cloud.withgoogle.com/next";
const HONORS_URL: &str = "https://www.linkedin.com/in/enriquechan/details/honors/";

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("reply is empty")]
    Empty,

    #[error("reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reply contains no A2UI directives")]
    NoDirectives,

    #[error(transparent)]
    Structure(#[from] A2uiError),

    #[error("reply has none of the expected components ({expected})")]
    MissingComponents { expected: String },
}

/// Attribution shown next to generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug)]
pub struct Extracted {
    pub messages: Vec<Directive>,
    /// Source supplied inside the reply envelope, if any.
    pub source: Option<Provenance>,
}

#[derive(Debug)]
pub enum ReplyOutcome {
    Structured {
        messages: Vec<Directive>,
        source: Option<Provenance>,
    },
    Prose(String),
    Malformed {
        error: ReplyError,
        raw: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Unwrapping
// ────────────────────────────────────────────────────────────────────────────

/// Returns the content of the first fenced code block (```json ... ``` or
/// ``` ... ```), or the trimmed text when there is no fence.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(start) = text.find("```") else {
        return text;
    };
    let after = &text[start + 3..];

    // Drop the language tag line, if any.
    let body = match after.find('\n') {
        Some(newline) if after[..newline].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
            &after[newline + 1..]
        }
        _ => after.strip_prefix("json").unwrap_or(after),
    };

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

/// Accepts a bare directive array, `{"a2ui": [...], "source": {...}}`,
/// `{"result": <string | array | envelope>}`, `{"messages": [...]}`, or a
/// single directive object.
pub fn extract_messages(text: &str) -> Result<Extracted, ReplyError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))?;
    let (directives, source) = unwrap_envelope(value, 0)?;
    let messages = a2ui::messages_from_value(directives)?;
    if messages.is_empty() {
        return Err(ReplyError::NoDirectives);
    }
    Ok(Extracted { messages, source })
}

fn unwrap_envelope(value: Value, depth: usize) -> Result<(Value, Option<Provenance>), ReplyError> {
    if depth > MAX_ENVELOPE_DEPTH {
        return Err(ReplyError::NoDirectives);
    }

    match value {
        Value::Array(_) => Ok((value, None)),
        Value::String(inner) => {
            let parsed: Value = serde_json::from_str(strip_code_fences(&inner))?;
            unwrap_envelope(parsed, depth + 1)
        }
        Value::Object(mut map) => {
            if let Some(a2ui) = map.remove("a2ui") {
                let source = map
                    .remove("source")
                    .and_then(|s| serde_json::from_value::<Provenance>(s).ok());
                let (directives, nested) = unwrap_envelope(a2ui, depth + 1)?;
                return Ok((directives, source.or(nested)));
            }
            if let Some(result) = map.remove("result") {
                return unwrap_envelope(result, depth + 1);
            }
            if let Some(messages) = map.remove("messages") {
                return unwrap_envelope(messages, depth + 1);
            }
            if map.contains_key("beginRendering") || map.contains_key("surfaceUpdate") {
                return Ok((Value::Array(vec![Value::Object(map)]), None));
            }
            Err(ReplyError::NoDirectives)
        }
        _ => Err(ReplyError::NoDirectives),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Processing
// ────────────────────────────────────────────────────────────────────────────

/// Never fails: anything that cannot be used comes back as `Malformed`
/// with the raw reply attached.
pub fn process_reply(template: &FormatTemplate, expects_structured: bool, raw: &str) -> ReplyOutcome {
    if raw.trim().is_empty() {
        return ReplyOutcome::Malformed {
            error: ReplyError::Empty,
            raw: raw.to_string(),
        };
    }

    if !expects_structured {
        return ReplyOutcome::Prose(raw.trim().to_string());
    }

    match structured(template, raw) {
        Ok(Extracted { messages, source }) => ReplyOutcome::Structured { messages, source },
        Err(error) => ReplyOutcome::Malformed {
            error,
            raw: raw.to_string(),
        },
    }
}

fn structured(template: &FormatTemplate, raw: &str) -> Result<Extracted, ReplyError> {
    let extracted = extract_messages(raw)?;
    a2ui::validate(&extracted.messages)?;

    let kinds = a2ui::component_kinds(&extracted.messages);
    if !template.accepts(&kinds) {
        return Err(ReplyError::MissingComponents {
            expected: describe(template.required_components),
        });
    }
    Ok(extracted)
}

fn describe(kinds: &[ComponentKind]) -> String {
    kinds
        .iter()
        .map(|k| format!("{k:?}"))
        .collect::<Vec<_>>()
        .join(" or ")
}

// ────────────────────────────────────────────────────────────────────────────
// Provenance
// ────────────────────────────────────────────────────────────────────────────

pub fn provenance_for(format: FormatId, facts: &PortfolioFacts) -> Provenance {
    let link = |name: &str| facts.link(name).map(str::to_string);
    let fixed = |provider: &str, url: &str, title: &str| Provenance {
        provider: provider.to_string(),
        url: Some(url.to_string()),
        title: Some(title.to_string()),
    };

    match format {
        FormatId::VideoCards => Provenance {
            provider: "YouTube".to_string(),
            url: link("youtube"),
            title: facts.link("youtube").and_then(channel_handle),
        },
        FormatId::BlogCards => Provenance {
            provider: "Medium".to_string(),
            url: link("medium"),
            title: Some("Insight Stream".to_string()),
        },
        FormatId::Certs => fixed("Credly / Google", CREDENTIALS_URL, "Cloud Certifications"),
        FormatId::Speaker => fixed("Google Cloud Next", CLOUD_NEXT_URL, "Speaking Engagements"),
        FormatId::Awards => fixed("LinkedIn", HONORS_URL, "Trophy Room"),
        FormatId::Timeline => Provenance {
            provider: "Portfolio".to_string(),
            url: link("portfolio"),
            title: Some("Career History".to_string()),
        },
        _ => Provenance {
            provider: facts.owner().to_string(),
            url: link("portfolio"),
            title: None,
        },
    }
}

/// `https://www.youtube.com/@handle` -> `@handle`.
fn channel_handle(url: &str) -> Option<String> {
    let last = url.trim_end_matches('/').rsplit('/').next()?;
    if last.is_empty() || last.contains('.') {
        return None;
    }
    Some(if last.starts_with('@') {
        last.to_string()
    } else {
        format!("@{last}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;

    const QUIZ_REPLY: &str = r#"[
      {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
      {"surfaceUpdate": {"surfaceId": "portfolioContent", "components": [
        {"id": "mainColumn", "component": {"Column": {"children": {"explicitList": ["q1"]}}}},
        {"id": "q1", "component": {"QuizCard": {
          "question": {"literalString": "Where is he based?"},
          "options": [
            {"label": {"literalString": "Seattle"}, "value": "sea", "isCorrect": true},
            {"label": {"literalString": "Austin"}, "value": "aus", "isCorrect": false}
          ],
          "explanation": {"literalString": "Seattle, WA."}
        }}}
      ]}}
    ]"#;

    const FLASHCARD_REPLY: &str = r#"[
      {"beginRendering": {"surfaceId": "portfolioContent", "root": "c"}},
      {"surfaceUpdate": {"surfaceId": "portfolioContent", "components": [
        {"id": "c", "component": {"Flashcard": {"front": "Q", "back": "A"}}}
      ]}}
    ]"#;

    fn template(name: &str) -> &'static FormatTemplate {
        TemplateRegistry::new().get(name)
    }

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n[{\"key\": \"value\"}]\n```";
        assert_eq!(strip_code_fences(input), "[{\"key\": \"value\"}]");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_with_preamble_and_single_line() {
        let input = "Here you go:\n```json\n[1, 2]\n```\nEnjoy!";
        assert_eq!(strip_code_fences(input), "[1, 2]");
        assert_eq!(strip_code_fences("```json[3]```"), "[3]");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn test_extract_bare_array() {
        let extracted = extract_messages(QUIZ_REPLY).unwrap();
        assert_eq!(extracted.messages.len(), 2);
        assert!(extracted.source.is_none());
    }

    #[test]
    fn test_extract_envelope_with_source() {
        let text = format!(
            r#"{{"a2ui": {QUIZ_REPLY}, "source": {{"provider": "Kaggle", "url": "https://kaggle.com"}}}}"#
        );
        let extracted = extract_messages(&text).unwrap();
        assert_eq!(extracted.messages.len(), 2);
        assert_eq!(extracted.source.unwrap().provider, "Kaggle");
    }

    #[test]
    fn test_extract_result_string_envelope() {
        let inner = serde_json::to_string(&serde_json::json!({ "a2ui": serde_json::from_str::<Value>(QUIZ_REPLY).unwrap() })).unwrap();
        let text = serde_json::to_string(&serde_json::json!({ "result": inner })).unwrap();
        let extracted = extract_messages(&text).unwrap();
        assert_eq!(extracted.messages.len(), 2);
    }

    #[test]
    fn test_extract_messages_envelope() {
        let text = format!(r#"{{"messages": {QUIZ_REPLY}}}"#);
        assert_eq!(extract_messages(&text).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_extract_rejects_unrelated_object() {
        assert!(matches!(
            extract_messages(r#"{"answer": 42}"#),
            Err(ReplyError::NoDirectives)
        ));
        assert!(matches!(extract_messages("not json"), Err(ReplyError::Json(_))));
    }

    #[test]
    fn test_process_structured_reply() {
        let fenced = format!("```json\n{QUIZ_REPLY}\n```");
        match process_reply(template("quiz"), true, &fenced) {
            ReplyOutcome::Structured { messages, .. } => assert_eq!(messages.len(), 2),
            other => panic!("expected structured, got {other:?}"),
        }
    }

    #[test]
    fn test_quiz_reply_with_only_flashcards_is_malformed() {
        match process_reply(template("quiz"), true, FLASHCARD_REPLY) {
            ReplyOutcome::Malformed { error, raw } => {
                assert!(matches!(error, ReplyError::MissingComponents { .. }));
                assert_eq!(raw, FLASHCARD_REPLY);
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_component_is_malformed() {
        let reply = r#"[
          {"beginRendering": {"surfaceId": "portfolioContent", "root": "x"}},
          {"surfaceUpdate": {"surfaceId": "portfolioContent", "components": [
            {"id": "x", "component": {"Hologram": {}}}
          ]}}
        ]"#;
        assert!(matches!(
            process_reply(template("creative"), true, reply),
            ReplyOutcome::Malformed { error: ReplyError::Structure(_), .. }
        ));
    }

    #[test]
    fn test_prose_and_empty_replies() {
        match process_reply(template("podcast"), false, "  Meet Enrique.  ") {
            ReplyOutcome::Prose(text) => assert_eq!(text, "Meet Enrique."),
            other => panic!("expected prose, got {other:?}"),
        }
        assert!(matches!(
            process_reply(template("podcast"), false, "   "),
            ReplyOutcome::Malformed { error: ReplyError::Empty, .. }
        ));
    }

    #[test]
    fn test_provenance_table() {
        let facts = PortfolioFacts::embedded().unwrap();

        let videos = provenance_for(FormatId::VideoCards, &facts);
        assert_eq!(videos.provider, "YouTube");
        assert_eq!(videos.url.as_deref(), Some("https://www.youtube.com/@enriquekchan"));
        assert_eq!(videos.title.as_deref(), Some("@enriquekchan"));

        let blogs = provenance_for(FormatId::BlogCards, &facts);
        assert_eq!(blogs.url.as_deref(), Some("https://medium.com/@enriq"));
        assert_eq!(blogs.title.as_deref(), Some("Insight Stream"));

        let certs = provenance_for(FormatId::Certs, &facts);
        assert_eq!(certs.provider, "Credly / Google");
        assert_eq!(certs.title.as_deref(), Some("Cloud Certifications"));

        assert_eq!(provenance_for(FormatId::Speaker, &facts).provider, "Google Cloud Next");
        assert_eq!(
            provenance_for(FormatId::Awards, &facts).title.as_deref(),
            Some("Trophy Room")
        );
        assert_eq!(
            provenance_for(FormatId::Timeline, &facts).title.as_deref(),
            Some("Career History")
        );

        let quiz = provenance_for(FormatId::Quiz, &facts);
        assert_eq!(quiz.provider, "Enrique K Chan");
        assert_eq!(quiz.url.as_deref(), Some("https://enriquekchan-concierge.web.app"));
        assert_eq!(quiz.title, None);
    }

    #[test]
    fn test_channel_handle() {
        assert_eq!(channel_handle("https://www.youtube.com/@someone/").as_deref(), Some("@someone"));
        assert_eq!(channel_handle("https://www.youtube.com/c/someone").as_deref(), Some("@someone"));
        assert_eq!(channel_handle("https://youtube.com"), None);
    }
}
