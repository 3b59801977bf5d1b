// Instruction document layouts for the dispatcher.
// Placeholders are filled with chained `.replace` calls in render.rs;
// `{portfolio_data}` always goes last so fact text is never re-scanned.

/// Layout shared by every format. `{rules}` is a block of `- rule` lines and
/// `{examples}` holds the main skeleton plus any labelled variants.
pub const INSTRUCTION_LAYOUT: &str = r#"You are {owner}'s Portfolio Agent.
{audience}

## {data_heading}
{portfolio_data}

## Your Task
{task}
{rules}

{examples}
"#;

/// Free-text persona used when a message names no format.
pub const GENERAL_CHAT_INSTRUCTION: &str = r#"You are {owner}'s Portfolio Agent.
Answer the visitor's question conversationally in a few short paragraphs, using only the facts below.
If the facts do not cover the question, say so instead of guessing.

## Portfolio Data
{portfolio_data}
"#;

/// Stands in for `{topic}` in creative-mode rules when the caller gave none.
pub const UNSPECIFIED_TOPIC: &str = "portfolio showcase";

/// Fixed answers for questions the agent should never hand to the model.
/// Matched case-insensitively against the whole message.
pub const CANNED_ANSWERS: &[(&str, &str)] = &[(
    "advent of agents",
    "{owner_first} played a key role developing [adventofagents.com](https://adventofagents.com) and served as the primary content moderator for the campaign.",
)];
