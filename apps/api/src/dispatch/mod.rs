//! Prompt dispatcher: turns a request (explicit format or free-text message)
//! into one finished instruction document for the generation service.
//!
//! `Dispatcher` is the context object built once in `main` and shared by
//! reference; it owns the template registry and applies the ordered keyword
//! rules in [`classify`].

pub mod classify;
pub mod prompts;
pub mod render;

use thiserror::Error;

use crate::portfolio::FactsSnapshot;
use crate::templates::{FormatId, TemplateRegistry};

pub use classify::Classification;
pub use render::{RenderRequest, RenderedInstruction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub struct Dispatcher {
    registry: TemplateRegistry,
}

impl Dispatcher {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn classify(&self, message: &str) -> Classification {
        classify::classify(message)
    }

    /// A registered format name is used as-is with the given topic; anything
    /// else is classified as a message. A topic given explicitly wins over
    /// one parsed out of the message.
    pub fn resolve(&self, format_or_message: &str, topic: &str) -> Classification {
        if let Ok(format) = format_or_message.parse::<FormatId>() {
            return Classification::Format {
                format,
                topic: topic.trim().to_string(),
            };
        }
        match self.classify(format_or_message) {
            Classification::Format {
                format,
                topic: parsed,
            } => Classification::Format {
                format,
                topic: if topic.trim().is_empty() {
                    parsed
                } else {
                    topic.trim().to_string()
                },
            },
            Classification::Miss => Classification::Miss,
        }
    }

    /// Strict name lookup: the format must parse and be registered.
    pub fn format_for(&self, format_id: &str) -> Result<FormatId, DispatchError> {
        format_id
            .parse::<FormatId>()
            .ok()
            .filter(|format| self.registry.lookup(*format).is_some())
            .ok_or_else(|| DispatchError::UnsupportedFormat(format_id.to_string()))
    }

    /// Strict render: `format_id` must name a registered format. No default
    /// template is substituted.
    pub fn render(
        &self,
        format_id: &str,
        topic: &str,
        facts: &FactsSnapshot,
    ) -> Result<RenderedInstruction, DispatchError> {
        let format = self.format_for(format_id)?;
        self.render_request(
            &RenderRequest {
                format,
                topic: topic.to_string(),
            },
            facts,
        )
    }

    pub fn render_request(
        &self,
        request: &RenderRequest,
        facts: &FactsSnapshot,
    ) -> Result<RenderedInstruction, DispatchError> {
        let template = self
            .registry
            .lookup(request.format)
            .ok_or_else(|| DispatchError::UnsupportedFormat(request.format.to_string()))?;
        Ok(render::render(template, request, facts))
    }

    /// Inbound entry point: resolve a format or message, then render it.
    /// A message that matches no rule is reported as unsupported here; the
    /// query endpoint routes such messages to general chat instead.
    pub fn dispatch(
        &self,
        format_or_message: &str,
        topic: &str,
        facts: &FactsSnapshot,
    ) -> Result<RenderedInstruction, DispatchError> {
        match self.resolve(format_or_message, topic) {
            Classification::Format { format, topic } => {
                self.render_request(&RenderRequest { format, topic }, facts)
            }
            Classification::Miss => Err(DispatchError::UnsupportedFormat(
                format_or_message.to_string(),
            )),
        }
    }

    pub fn expects_structured_reply(&self, format: FormatId) -> bool {
        render::expects_structured_reply(format)
    }

    pub fn general_chat_instruction(&self, facts: &FactsSnapshot) -> String {
        render::general_chat_instruction(facts)
    }

    /// Fixed answer for messages that must not reach the model.
    pub fn canned_answer(&self, message: &str, facts: &FactsSnapshot) -> Option<String> {
        let lowered = message.to_lowercase();
        prompts::CANNED_ANSWERS
            .iter()
            .find(|(trigger, _)| lowered.contains(trigger))
            .map(|(_, answer)| answer.replace("{owner_first}", facts.first_name()))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(TemplateRegistry::new())
    }
}
