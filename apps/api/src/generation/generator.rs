//! Content generation: orchestrates one request end to end.
//!
//! Flow: cache lookup → render instruction → single completion call →
//!       post-process reply → attach provenance → cache store.
//!
//! A reply that cannot be used never becomes an HTTP error: it comes back
//! as `GenerationResult::Degraded` with the raw text attached.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::a2ui::{Directive, SURFACE_ID};
use crate::dispatch::Classification;
use crate::errors::AppError;
use crate::generation::reply::{process_reply, provenance_for, Provenance, ReplyOutcome};
use crate::llm_client::CompletionRequest;
use crate::state::AppState;
use crate::templates::FormatId;

/// User turn sent with every format instruction.
const GENERATE_TURN: &str = "Generate";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    /// Validated A2UI directives ready for the renderer.
    Content {
        format: FormatId,
        #[serde(rename = "surfaceId")]
        surface_id: String,
        a2ui: Vec<Directive>,
        source: Provenance,
    },
    /// Spoken-word script (podcast).
    Narration {
        format: FormatId,
        text: String,
        source: Provenance,
    },
    /// The model answered but the reply was unusable.
    Degraded {
        format: FormatId,
        error: String,
        raw: String,
    },
    /// Free-text answer from the general chat path.
    Chat { text: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_content(
    state: &AppState,
    format: FormatId,
    topic: &str,
) -> Result<GenerationResult, AppError> {
    let topic = topic.trim();

    if let Some(cache) = &state.cache {
        if let Some(hit) = cache.get(format, topic, &state.snapshot).await {
            info!(%format, topic, "Serving cached result");
            return Ok(hit);
        }
    }

    let rendered = state
        .dispatcher
        .render(format.as_str(), topic, &state.snapshot)?;
    // Rendering succeeded, so the format is registered and `get` cannot fall back.
    let template = state.dispatcher.registry().get(rendered.format.as_str());

    info!(
        %format,
        topic,
        instruction_chars = rendered.text.len(),
        "Requesting completion"
    );

    let completion = state
        .llm
        .complete(&CompletionRequest {
            system: rendered.text,
            user: GENERATE_TURN.to_string(),
            structured: rendered.expects_structured_reply,
        })
        .await?;

    let result = match process_reply(template, rendered.expects_structured_reply, &completion.text) {
        ReplyOutcome::Structured { messages, source } => GenerationResult::Content {
            format,
            surface_id: SURFACE_ID.to_string(),
            a2ui: messages,
            source: source.unwrap_or_else(|| provenance_for(format, &state.facts)),
        },
        ReplyOutcome::Prose(text) => GenerationResult::Narration {
            format,
            text,
            source: provenance_for(format, &state.facts),
        },
        ReplyOutcome::Malformed { error, raw } => {
            warn!(%format, "Degraded reply: {error}");
            GenerationResult::Degraded {
                format,
                error: error.to_string(),
                raw,
            }
        }
    };

    if let (Some(cache), GenerationResult::Content { .. }) = (&state.cache, &result) {
        if let Err(e) = cache.put(format, topic, &state.snapshot, &result).await {
            warn!("Failed to cache result: {e}");
        }
    }

    Ok(result)
}

/// Free-text path for messages that name no format.
pub async fn general_chat(state: &AppState, message: &str) -> Result<GenerationResult, AppError> {
    let instruction = state.dispatcher.general_chat_instruction(&state.snapshot);
    let completion = state
        .llm
        .complete(&CompletionRequest {
            system: instruction,
            user: message.to_string(),
            structured: false,
        })
        .await?;

    Ok(GenerationResult::Chat {
        text: completion.text.trim().to_string(),
    })
}

/// Agent-style entry point: canned answers first, then classification;
/// a classification miss falls through to general chat.
pub async fn answer_query(state: &AppState, message: &str) -> Result<GenerationResult, AppError> {
    if let Some(text) = state.dispatcher.canned_answer(message, &state.snapshot) {
        info!("Serving canned answer");
        return Ok(GenerationResult::Chat { text });
    }

    match state.dispatcher.classify(message) {
        Classification::Format { format, topic } => {
            info!(%format, topic = %topic, "Message classified");
            generate_content(state, format, &topic).await
        }
        Classification::Miss => {
            info!("No format matched; using general chat");
            general_chat(state, message).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResultCache;
    use crate::state::test_support::{test_state, StubLlm};
    use crate::templates::skeletons;

    #[tokio::test]
    async fn test_structured_reply_becomes_content() {
        let llm = StubLlm::replying(&format!("```json\n{}\n```", skeletons::AWARDS));
        let state = test_state(llm.clone(), None);

        let result = generate_content(&state, FormatId::Awards, "2024").await.unwrap();
        match result {
            GenerationResult::Content {
                format,
                surface_id,
                a2ui,
                source,
            } => {
                assert_eq!(format, FormatId::Awards);
                assert_eq!(surface_id, "portfolioContent");
                assert_eq!(a2ui.len(), 2);
                assert_eq!(source.provider, "LinkedIn");
            }
            other => panic!("expected content, got {other:?}"),
        }

        let request = llm.last_request().unwrap();
        assert_eq!(request.user, "Generate");
        assert!(request.structured);
        assert!(request.system.contains("FOCUS TOPIC: 2024"));
        assert!(request.system.starts_with("You are Enrique K Chan's Portfolio Agent."));
        assert!(request.system.contains("## Enrique's Award Data"));
    }

    #[tokio::test]
    async fn test_envelope_source_overrides_table() {
        let reply = format!(
            r#"{{"a2ui": {}, "source": {{"provider": "Kaggle", "title": "Whitepaper"}}}}"#,
            skeletons::BLOG_CARDS
        );
        let state = test_state(StubLlm::replying(&reply), None);
        match generate_content(&state, FormatId::BlogCards, "").await.unwrap() {
            GenerationResult::Content { source, .. } => {
                assert_eq!(source.provider, "Kaggle");
                assert_eq!(source.title.as_deref(), Some("Whitepaper"));
            }
            other => panic!("expected content, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_reply_degrades() {
        let state = test_state(StubLlm::replying("Sorry, I can't do that."), None);
        match generate_content(&state, FormatId::Quiz, "").await.unwrap() {
            GenerationResult::Degraded { format, raw, .. } => {
                assert_eq!(format, FormatId::Quiz);
                assert_eq!(raw, "Sorry, I can't do that.");
            }
            other => panic!("expected degraded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_podcast_is_narration() {
        let llm = StubLlm::replying("Enrique builds agents at scale.");
        let state = test_state(llm.clone(), None);
        match generate_content(&state, FormatId::Podcast, "").await.unwrap() {
            GenerationResult::Narration { text, source, .. } => {
                assert_eq!(text, "Enrique builds agents at scale.");
                assert_eq!(source.provider, "Enrique K Chan");
            }
            other => panic!("expected narration, got {other:?}"),
        }
        assert!(!llm.last_request().unwrap().structured);
    }

    #[tokio::test]
    async fn test_llm_failure_is_an_error() {
        let state = test_state(StubLlm::failing(), None);
        assert!(matches!(
            generate_content(&state, FormatId::Timeline, "").await,
            Err(AppError::Llm(_))
        ));
    }

    #[tokio::test]
    async fn test_cache_serves_second_request() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path(), 3600).unwrap();
        let llm = StubLlm::replying(skeletons::TIMELINE);
        let state = test_state(llm.clone(), Some(cache));

        let first = generate_content(&state, FormatId::Timeline, "google").await.unwrap();
        let second = generate_content(&state, FormatId::Timeline, " google ").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_degraded_results_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path(), 3600).unwrap();
        let llm = StubLlm::replying("not json");
        let state = test_state(llm.clone(), Some(cache));

        generate_content(&state, FormatId::Quiz, "").await.unwrap();
        generate_content(&state, FormatId::Quiz, "").await.unwrap();
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_query_miss_goes_to_general_chat() {
        let llm = StubLlm::replying("  He is based in Seattle.  ");
        let state = test_state(llm.clone(), None);

        let result = answer_query(&state, "tell me a random fact").await.unwrap();
        assert_eq!(
            result,
            GenerationResult::Chat {
                text: "He is based in Seattle.".to_string()
            }
        );
        let request = llm.last_request().unwrap();
        assert_eq!(request.user, "tell me a random fact");
        assert!(!request.structured);
        assert!(request.system.starts_with("You are Enrique K Chan's Portfolio Agent."));
    }

    #[tokio::test]
    async fn test_query_classified_message_generates() {
        let llm = StubLlm::replying(skeletons::TESTIMONIALS);
        let state = test_state(llm.clone(), None);
        let result = answer_query(&state, "Show me what people say about him").await.unwrap();
        assert!(matches!(
            result,
            GenerationResult::Content {
                format: FormatId::Testimonials,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_canned_answer_skips_the_model() {
        let llm = StubLlm::replying("unused");
        let state = test_state(llm.clone(), None);
        let result = answer_query(&state, "What is Advent of Agents?").await.unwrap();
        assert!(matches!(result, GenerationResult::Chat { ref text } if text.contains("adventofagents.com")));
        assert_eq!(llm.calls(), 0);
    }

    #[test]
    fn test_result_wire_shape() {
        let result = GenerationResult::Degraded {
            format: FormatId::VideoCards,
            error: "bad".to_string(),
            raw: "x".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "degraded");
        assert_eq!(json["format"], "video_cards");
        assert_eq!(json["raw"], "x");
    }
}
