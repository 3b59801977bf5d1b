// Example output skeletons, one per format (plus labelled variants).
// Each is a complete, valid A2UI message list on the `portfolioContent` surface:
// every container child resolves, ids are unique, and only known tags appear.
// They are few-shot illustrations for the generation service, not output.

pub const FLASHCARDS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["card1", "card2", "card3"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "card1",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[SPECIFIC_DATA_QUESTION_ABOUT_EXPERIENCE]"},
              "back": {"literalString": "[HIGH_IMPACT_ANSWER_FROM_EXPERIENCE_DATA]"},
              "category": {"literalString": "[RELEVANT_CATEGORY]"}
            }
          }
        },
        {
          "id": "card2",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[SPECIFIC_DATA_QUESTION_ABOUT_EXPERIENCE]"},
              "back": {"literalString": "[HIGH_IMPACT_ANSWER_FROM_EXPERIENCE_DATA]"},
              "category": {"literalString": "[RELEVANT_CATEGORY]"}
            }
          }
        },
        {
          "id": "card3",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[SPECIFIC_DATA_QUESTION_ABOUT_EXPERIENCE]"},
              "back": {"literalString": "[HIGH_IMPACT_ANSWER_FROM_EXPERIENCE_DATA]"},
              "category": {"literalString": "[RELEVANT_CATEGORY]"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const QUIZ: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["q1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "q1",
          "component": {
            "QuizCard": {
              "question": {"literalString": "Which company did Enrique NOT work for?"},
              "options": [
                {"label": {"literalString": "Google"}, "value": "google", "isCorrect": false},
                {"label": {"literalString": "Netflix"}, "value": "netflix", "isCorrect": true},
                {"label": {"literalString": "AWS"}, "value": "aws", "isCorrect": false}
              ],
              "explanation": {"literalString": "Enrique has worked at Google, AWS, and Accenture, but never Netflix."},
              "category": {"literalString": "Career Trivia"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const IMAGE: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {"Image": {"url": "/assets/hero.png", "alt": "Enrique K Chan"}}
        }
      ]
    }
  }
]"#;

pub const PROFILE_BUBBLE: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {"ProfileBubble": {"image": "/assets/hero.png", "size": "240px"}}
        }
      ]
    }
  }
]"#;

pub const VIDEO: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {"Video": {"url": "https://www.youtube.com/watch?v=nZa5-WyN-rE"}}
        }
      ]
    }
  }
]"#;

pub const AUDIO: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {"Audio": {"url": "/assets/podcast.m4a", "title": "Enrique's AI Vision"}}
        }
      ]
    }
  }
]"#;

pub const TIMELINE: &str = r##"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "exp1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Career Historian 📜"}, "usageHint": "h2"}}
        },
        {
          "id": "exp1",
          "component": {
            "ExperienceCard": {
              "company": "Google Cloud",
              "role": "Outbound Product Manager, Cloud AI",
              "period": "Nov 2025 – Present",
              "logo": "google",
              "color": "#4285F4",
              "highlights": ["Highlight 1", "Highlight 2"],
              "impact": "Multi-million dollar impact..."
            }
          }
        }
      ]
    }
  }
]"##;

pub const VIDEO_CARDS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "videoGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Cinema Hub 🎬"}, "usageHint": "h2"}}
        },
        {
          "id": "videoGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["v1", "v2"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "v1",
          "component": {
            "PortfolioCard": {
              "type": "video",
              "title": {"literalString": "Rise of Agentic AI"},
              "description": {"literalString": "Enrique's keynote on the transition to autonomous AI agents."},
              "image": {"literalString": "https://img.youtube.com/vi/nZa5-WyN-rE/maxresdefault.jpg"},
              "url": {"literalString": "https://www.youtube.com/watch?v=nZa5-WyN-rE"}
            }
          }
        },
        {
          "id": "v2",
          "component": {
            "PortfolioCard": {
              "type": "video",
              "title": {"literalString": "A2UI & Agentic Interfaces"},
              "description": {"literalString": "A deep dive into high-fidelity Agentic User Interfaces."},
              "image": {"literalString": "https://img.youtube.com/vi/ZMIAlxx-Jx4/maxresdefault.jpg"},
              "url": {"literalString": "https://www.youtube.com/watch?v=ZMIAlxx-Jx4"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const BLOG_CARDS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "blogRow1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Insight Stream ✍️"}, "usageHint": "h2"}}
        },
        {
          "id": "blogRow1",
          "component": {
            "Row": {
              "children": {"explicitList": ["b1", "b2"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "b1",
          "component": {
            "PortfolioCard": {
              "type": "blog",
              "title": {"literalString": "Intro to Agents Whitepaper"},
              "description": {"literalString": "The definitive Kaggle guide to the future of AI agents."},
              "image": {"literalString": "/assets/blog-a2ui.png"},
              "url": {"literalString": "https://www.kaggle.com/whitepaper-introduction-to-agents"}
            }
          }
        },
        {
          "id": "b2",
          "component": {
            "PortfolioCard": {
              "type": "blog",
              "title": {"literalString": "Advent of Agents"},
              "description": {"literalString": "A 25-day journey into building and deploying agentic workflows."},
              "image": {"literalString": "/assets/blog-optimizer.png"},
              "url": {"literalString": "https://adventofagents.com/"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const AWARDS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "awardGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Trophy Room 🏆"}, "usageHint": "h2"}}
        },
        {
          "id": "awardGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["a1", "a2"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "a1",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "GTM Cloud Tech Impact Award"},
              "description": {"literalString": "Recognized for the massive scale impact of the Olympic 'Oli' chatbot."},
              "image": {"literalString": "/assets/award_gtm_2024.jpg"},
              "url": {"literalString": "https://www.google.com/search?q=nbc+olympics+oli+ai"}
            }
          }
        },
        {
          "id": "a2",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "AIS Offsite Hackathon Winner"},
              "description": {"literalString": "Won 1st place for the 'Cards Against Humanity Agent' at the 2025 Google AIS Offsite."},
              "image": {"literalString": "/assets/awards.png"},
              "url": {"literalString": "https://www.linkedin.com/feed/update/urn:li:activity:7265882565578702848/"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const GALLERY: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "galleryGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Hall of Mastery 🖼️"}, "usageHint": "h2"}}
        },
        {
          "id": "galleryGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["g1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "g1",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "[IMAGE_TITLE]"},
              "description": {"literalString": "[IMAGE_DESCRIPTION]"},
              "image": {"literalString": "[IMAGE_PATH]"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const CERTS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "certGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Cloud Badge Wall ☁️"}, "usageHint": "h2"}}
        },
        {
          "id": "certGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["c1", "c2"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "c1",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "Google Cloud Professional ML Engineer"},
              "description": {"literalString": "10x Google Cloud Certified, specializing in enterprise ML and AI architecture."},
              "image": {"literalString": "/assets/certs.png"},
              "url": {"literalString": "https://www.credential.net/profile/enriquekchan"}
            }
          }
        },
        {
          "id": "c2",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "AWS Solutions Architect Professional"},
              "description": {"literalString": "7x AWS Certified with deep expertise in high-scale cloud systems."},
              "image": {"literalString": "/assets/certs.png"},
              "url": {"literalString": "https://www.credly.com/users/enrique-chan"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const COMICS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "comicGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "The Agentic Adventures 📂"}, "usageHint": "h2"}}
        },
        {
          "id": "comicGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["c1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "c1",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "Business Leaders Edition"},
              "description": {"literalString": "The Architect's Secret Files: Unlocking the future of AI for leaders."},
              "image": {"literalString": "/assets/agent_comic.png"},
              "url": {"literalString": "https://enriquekchan.web.app/agent_adventures_business_leaders.pdf"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const SPEAKER: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "speakerGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Stage Presence 🎤"}, "usageHint": "h2"}}
        },
        {
          "id": "speakerGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["s1", "s2"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "s1",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[EVENT_NAME_AND_DATE]"},
              "back": {"literalString": "[TALK_TITLE_AND_IMPACT_HINT]"},
              "category": {"literalString": "[SESSION_TYPE]"}
            }
          }
        },
        {
          "id": "s2",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[EVENT_NAME_AND_DATE]"},
              "back": {"literalString": "[TALK_TITLE_AND_IMPACT_HINT]"},
              "category": {"literalString": "[SESSION_TYPE]"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const TESTIMONIALS: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "Column": {
              "children": {"explicitList": ["header", "tGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "header",
          "component": {"Text": {"text": {"literalString": "Googler Vibes ✨"}, "usageHint": "h2"}}
        },
        {
          "id": "tGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["t1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "t1",
          "component": {
            "Flashcard": {
              "front": {"literalString": "[LEADER_NAME_AND_TITLE]"},
              "back": {"literalString": "[SPECIFIC_DATA_DRIVEN_QUOTE]"},
              "category": {"literalString": "[IMPACT_CATEGORY]"}
            }
          }
        }
      ]
    }
  }
]"#;

pub const STRATEGIC_MATRIX: &str = r##"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "StrategicMatrix": {
              "title": "Strategic Integration Matrix: Agentic workflows",
              "cells": [
                {
                  "id": "cell1",
                  "phase": "Discovery Phase",
                  "role": "Context Injection",
                  "highlights": ["LLM Grounding", "Retrieval Augmented Generation (RAG)"],
                  "impact": "Foundational baseline for all enterprise agents.",
                  "color": "#4285F4",
                  "logo": "search"
                }
              ]
            }
          }
        }
      ]
    }
  }
]"##;

pub const SKILL_RADAR: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "mainColumn"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "mainColumn",
          "component": {
            "SkillRadar": {
              "title": "Technical Proficiency",
              "skills": [
                {"subject": "AI/ML", "value": 95},
                {"subject": "Cloud", "value": 98},
                {"subject": "Data", "value": 90},
                {"subject": "Strategy", "value": 85},
                {"subject": "Engineering", "value": 92}
              ]
            }
          }
        }
      ]
    }
  }
]"#;

pub const CREATIVE: &str = r#"[
  {"beginRendering": {"surfaceId": "portfolioContent", "root": "creativeRoot"}},
  {
    "surfaceUpdate": {
      "surfaceId": "portfolioContent",
      "components": [
        {
          "id": "creativeRoot",
          "component": {
            "Column": {
              "children": {"explicitList": ["headerRow", "contentGrid"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "headerRow",
          "component": {
            "Row": {
              "children": {"explicitList": ["avatar", "headline"]},
              "distribution": "start",
              "alignment": "center"
            }
          }
        },
        {
          "id": "avatar",
          "component": {"ProfileBubble": {"image": "/assets/hero.png", "size": "96px"}}
        },
        {
          "id": "headline",
          "component": {"Text": {"text": {"literalString": "[HEADLINE_FOR_TOPIC]"}, "usageHint": "h1"}}
        },
        {
          "id": "contentGrid",
          "component": {
            "Row": {
              "children": {"explicitList": ["item1"]},
              "distribution": "start",
              "alignment": "stretch"
            }
          }
        },
        {
          "id": "item1",
          "component": {
            "PortfolioCard": {
              "type": "project",
              "title": {"literalString": "[ITEM_TITLE]"},
              "description": {"literalString": "[ITEM_DESCRIPTION]"},
              "image": {"literalString": "[ITEM_IMAGE]"},
              "url": {"literalString": "[ITEM_URL]"}
            }
          }
        }
      ]
    }
  }
]"#;
