use serde::Serialize;

use crate::templates::FormatId;

/// Splits an explicit `format: topic` message.
pub const SEPARATOR: char = ':';

/// One keyword rule: a keyword that starts a word in the lowercased message
/// selects `format`. Keywords may end mid-word ("cert" hits "certifications").
#[derive(Debug)]
pub struct Rule {
    pub format: FormatId,
    pub keywords: &'static [&'static str],
}

/// Checked top to bottom; first hit wins. Comics phrases are the narrowest
/// and go first. Rules that name an output format (quiz, flashcards, podcast,
/// video) come before the topical ones, so "flashcards about his awards" is
/// flashcards. "videos" sits above "video".
pub const CLASSIFICATION_RULES: &[Rule] = &[
    Rule {
        format: FormatId::Comics,
        keywords: &["comic", "secret file", "unlock", "agentic adventures"],
    },
    Rule {
        format: FormatId::Quiz,
        keywords: &["quiz"],
    },
    Rule {
        format: FormatId::Flashcards,
        keywords: &["flashcard", "flash card", "study card", "skill matcher", "fit analyzer"],
    },
    Rule {
        format: FormatId::Podcast,
        keywords: &["podcast", "audio", "listen"],
    },
    Rule {
        format: FormatId::VideoCards,
        keywords: &["youtube", "videos", "talks"],
    },
    Rule {
        format: FormatId::Video,
        keywords: &["video", "watch"],
    },
    Rule {
        format: FormatId::Awards,
        keywords: &["award", "honor", "trophy", "hackathon", "recogni"],
    },
    Rule {
        format: FormatId::Certs,
        keywords: &["cert", "credential", "badge"],
    },
    Rule {
        format: FormatId::Speaker,
        keywords: &["speak", "keynote", "cloud next"],
    },
    Rule {
        format: FormatId::Testimonials,
        keywords: &["testimonial", "what people say", "people say", "feedback", "googlers say"],
    },
    Rule {
        format: FormatId::Timeline,
        keywords: &["timeline", "career journey", "career history", "history", "journey"],
    },
    Rule {
        format: FormatId::BlogCards,
        keywords: &["blog", "article", "medium"],
    },
    Rule {
        format: FormatId::Gallery,
        keywords: &["gallery"],
    },
    Rule {
        format: FormatId::Image,
        keywords: &["bubble", "avatar", "image", "photo", "picture", "headshot"],
    },
    Rule {
        format: FormatId::Matrix,
        keywords: &["matrix", "framework", "strategic"],
    },
    Rule {
        format: FormatId::Charts,
        keywords: &["radar", "chart"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Format { format: FormatId, topic: String },
    /// No format named and no rule matched: general chat.
    Miss,
}

impl Classification {
    pub fn format(&self) -> Option<FormatId> {
        match self {
            Classification::Format { format, .. } => Some(*format),
            Classification::Miss => None,
        }
    }

    /// Topic text, empty for a miss.
    pub fn into_topic(self) -> String {
        match self {
            Classification::Format { topic, .. } => topic,
            Classification::Miss => String::new(),
        }
    }
}

/// `"awards: 2024 trophy"` -> awards / "2024 trophy". Without an explicit
/// format prefix the keyword rules run over the whole message; the topic is
/// still whatever follows the separator, or empty.
pub fn classify(message: &str) -> Classification {
    let (head, topic) = match message.split_once(SEPARATOR) {
        Some((head, rest)) => (head, rest.trim()),
        None => (message, ""),
    };

    if let Ok(format) = head.parse::<FormatId>() {
        return Classification::Format {
            format,
            topic: topic.to_string(),
        };
    }

    let lowered = message.to_lowercase();
    match matching_rule(&lowered) {
        Some(rule) => Classification::Format {
            format: rule.format,
            topic: topic.to_string(),
        },
        None => Classification::Miss,
    }
}

fn matching_rule(lowered: &str) -> Option<&'static Rule> {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| starts_word(lowered, kw)))
}

/// `keyword` occurs at a word start: "cert" hits "certs" but not "concert".
fn starts_word(haystack: &str, keyword: &str) -> bool {
    haystack.match_indices(keyword).any(|(at, _)| {
        haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_of(message: &str) -> Option<FormatId> {
        classify(message).format()
    }

    #[test]
    fn test_explicit_prefix() {
        assert_eq!(
            classify("awards: 2024 trophy"),
            Classification::Format {
                format: FormatId::Awards,
                topic: "2024 trophy".to_string()
            }
        );
        assert_eq!(
            classify("Video_Cards:  agents  "),
            Classification::Format {
                format: FormatId::VideoCards,
                topic: "agents".to_string()
            }
        );
    }

    #[test]
    fn test_bare_format_name_has_empty_topic() {
        assert_eq!(
            classify("timeline"),
            Classification::Format {
                format: FormatId::Timeline,
                topic: String::new()
            }
        );
    }

    #[test]
    fn test_testimonials_phrase_is_reachable() {
        assert_eq!(
            classify("Show me what people say about him"),
            Classification::Format {
                format: FormatId::Testimonials,
                topic: String::new()
            }
        );
    }

    #[test]
    fn test_unmatched_message_is_a_miss() {
        assert_eq!(classify("tell me a random fact"), Classification::Miss);
        assert_eq!(classify("nonexistent_format"), Classification::Miss);
        assert_eq!(classify(""), Classification::Miss);
    }

    #[test]
    fn test_keyword_match_keeps_topic_after_separator() {
        assert_eq!(
            classify("Show his honors: cloud"),
            Classification::Format {
                format: FormatId::Awards,
                topic: "cloud".to_string()
            }
        );
    }

    #[test]
    fn test_secret_files_beat_broader_rules() {
        // "unlock" and "comic" outrank the framework / history rules.
        assert_eq!(format_of("Unlock the secret files"), Some(FormatId::Comics));
        assert_eq!(format_of("comic history of agents"), Some(FormatId::Comics));
    }

    #[test]
    fn test_videos_before_video() {
        assert_eq!(format_of("show me his youtube videos"), Some(FormatId::VideoCards));
        assert_eq!(format_of("let me watch something"), Some(FormatId::Video));
    }

    #[test]
    fn test_topic_does_not_trigger_picture_rule() {
        // "pic" is deliberately not a keyword; it would hit "topic".
        assert_eq!(format_of("pick any topic"), None);
    }

    #[test]
    fn test_named_format_beats_topic_word() {
        let cases = [
            ("Quiz me on his career history", FormatId::Quiz),
            ("Make flashcards about his awards", FormatId::Flashcards),
            ("Play a podcast about his certifications", FormatId::Podcast),
            ("A video about his testimonials", FormatId::Video),
            ("Watch his keynote", FormatId::Video),
            ("youtube videos of his speaking", FormatId::VideoCards),
        ];
        for (message, expected) in cases {
            assert_eq!(format_of(message), Some(expected), "message: {message}");
        }
    }

    #[test]
    fn test_keywords_match_at_word_start_only() {
        assert_eq!(format_of("What are his latest metrics?"), None);
        assert_eq!(format_of("Did he go to a concert?"), None);
        assert_eq!(format_of("Show his certifications"), Some(FormatId::Certs));
    }

    #[test]
    fn test_starts_word() {
        assert!(starts_word("awards", "award"));
        assert!(starts_word("his (awards)", "award"));
        assert!(!starts_word("rewards", "award"));
        assert!(starts_word("rewards and awards", "award"));
    }

    #[test]
    fn test_each_rule_is_reachable_by_its_first_keyword() {
        for (index, rule) in CLASSIFICATION_RULES.iter().enumerate() {
            let keyword = rule.keywords[0];
            let winner = matching_rule(keyword).map(|r| r.format);
            assert_eq!(
                winner,
                Some(rule.format),
                "rule #{index} ({}) is shadowed for keyword '{keyword}'",
                rule.format
            );
        }
    }

    #[test]
    fn test_assorted_intents() {
        let cases = [
            ("Which certifications does he hold?", FormatId::Certs),
            ("Where has he spoken at Cloud Next?", FormatId::Speaker),
            ("Quiz me", FormatId::Quiz),
            ("Give me study cards", FormatId::Flashcards),
            ("Any Medium articles?", FormatId::BlogCards),
            ("Play the podcast", FormatId::Podcast),
            ("Show the gallery", FormatId::Gallery),
            ("Show me his avatar", FormatId::Image),
            ("Draw a strategic matrix", FormatId::Matrix),
            ("skill radar please", FormatId::Charts),
        ];
        for (message, expected) in cases {
            assert_eq!(format_of(message), Some(expected), "message: {message}");
        }
    }
}
