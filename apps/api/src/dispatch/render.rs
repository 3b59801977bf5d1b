use serde::Serialize;

use crate::a2ui::SURFACE_ID;
use crate::portfolio::FactsSnapshot;
use crate::templates::{FormatId, FormatTemplate};

use super::prompts::{GENERAL_CHAT_INSTRUCTION, INSTRUCTION_LAYOUT, UNSPECIFIED_TOPIC};

/// Formats whose reply is prose rather than A2UI JSON.
pub const PROSE_FORMATS: &[FormatId] = &[FormatId::Podcast];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub format: FormatId,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedInstruction {
    pub format: FormatId,
    pub text: String,
    pub expects_structured_reply: bool,
}

pub fn expects_structured_reply(format: FormatId) -> bool {
    !PROSE_FORMATS.contains(&format)
}

/// Fills the instruction layout for one template. Pure: the same inputs
/// always give the same bytes.
pub fn render(
    template: &FormatTemplate,
    request: &RenderRequest,
    facts: &FactsSnapshot,
) -> RenderedInstruction {
    let topic = request.topic.trim();

    let rules = template
        .instruction_rules
        .iter()
        .map(|rule| format!("- {rule}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut examples = format!("{}\n{}", template.example_heading, template.example_skeleton);
    for variant in template.variant_skeletons {
        examples.push_str(&format!("\n\n{}\n{}", variant.heading, variant.skeleton));
    }

    let mut portfolio_data = facts.as_str().to_string();
    if !topic.is_empty() {
        portfolio_data.push_str(&format!("\n\nFOCUS TOPIC: {topic}"));
    }

    let topic_label = if topic.is_empty() { UNSPECIFIED_TOPIC } else { topic };

    let text = INSTRUCTION_LAYOUT
        .replace("{audience}", template.audience)
        .replace("{data_heading}", template.data_heading)
        .replace("{task}", template.task_for(topic))
        .replace("{rules}", &rules)
        .replace("{examples}", &examples)
        .replace("{owner_first}", facts.first_name())
        .replace("{owner}", facts.owner())
        .replace("{surface_id}", SURFACE_ID)
        .replace("{topic}", topic_label)
        .replace("{portfolio_data}", &portfolio_data);

    RenderedInstruction {
        format: request.format,
        text,
        expects_structured_reply: expects_structured_reply(request.format),
    }
}

pub fn general_chat_instruction(facts: &FactsSnapshot) -> String {
    GENERAL_CHAT_INSTRUCTION
        .replace("{owner}", facts.owner())
        .replace("{portfolio_data}", facts.as_str())
}
