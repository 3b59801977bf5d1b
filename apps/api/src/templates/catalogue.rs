// Per-format instruction data. These strings are product content: wording
// changes change what the generation service produces, so edit with care.
//
// `{owner_first}` (the owner's first name) and `{surface_id}` are filled in
// at render time; `{topic}` is the caller's focus topic (creative mode only).
// The full name only appears in the shared persona line of the layout.

use crate::a2ui::ComponentKind;

use super::skeletons;
use super::{FocusRule, FormatId, FormatTemplate, Variant};

const EXAMPLE: &str = "A2UI JSON Template Example:";

pub const FLASHCARDS: FormatTemplate = FormatTemplate {
    format_id: FormatId::Flashcards,
    example_skeleton: skeletons::FLASHCARDS,
    variant_skeletons: &[],
    audience: "You are helping recruiters/hiring managers learn about {owner_first}'s unique value proposition.",
    data_heading: "{owner_first}'s Professional Profile",
    task: "Create 3-4 high-quality flashcards about {owner_first}'s professional journey.",
    instruction_rules: &[
        "**VARIETY RULE**: Generate a UNIQUE set of cards every time. Do not repeat the same cards from previous sessions. Use different categories and angles (e.g., 'Leadership', 'Scale', 'Governance', 'Architecture').",
        "Output ONLY valid JSON - no markdown, no explanation",
        "Use surfaceId: \"{surface_id}\"",
        "Category: Use logical, high-signal categories.",
    ],
    focus_rules: &[
        FocusRule {
            keywords: &["fit", "analyzer"],
            task: "FOCUS: Fit Analyzer. Create 3-4 cards comparing {owner_first}'s specific experience (Google Cloud, AWS, Scale) to typical Senior AI/Product Lead requirements. Focus on why he's the right choice for high-stakes AI.",
        },
        FocusRule {
            keywords: &["skill", "match"],
            task: "FOCUS: Skill Matcher. Create 3-4 cards illustrating how his deep skills (MLOps, Vertex AI, Agent Governance) apply to specific enterprise problems. Focus on technical depth and impact.",
        },
        FocusRule {
            keywords: &["timeline", "historian", "career"],
            task: "FOCUS: Career Historian. Create 3-4 cards showing the narrative progression from Disney's MagicBands to AWS to Google Cloud's Agentic AI transition.",
        },
        FocusRule {
            keywords: &["project", "work"],
            task: "FOCUS: Project Spotlight. Create 3-4 cards exploring the technical complexity and impact of his projects (Oli AI, Disney+ rollout, Advent of Agents).",
        },
    ],
    example_heading: "A2UI JSON Template:",
    required_components: &[ComponentKind::Flashcard],
};

pub const TEMPLATES: &[FormatTemplate] = &[
    FLASHCARDS,
    FormatTemplate {
        format_id: FormatId::Quiz,
        example_skeleton: skeletons::QUIZ,
        variant_skeletons: &[],
        audience: "Create a HIGH-QUALITY, DYNAMIC quiz about {owner_first}'s background based on the data provided.",
        data_heading: "{owner_first}'s Data",
        task: "Return A2UI JSON using the 'QuizCard' component.",
        instruction_rules: &[
            "**VARIETY RULE**: DO NOT repeat the same questions. Generate a DIFFERENT set of questions every time (e.g., about his certifications, his specific Olympic metrics, his tenure at Accenture, or his Seattle location).",
            "Provide 3-4 options per question with 1 correct answer.",
            "Include a technical explanation for the answer.",
            "Tone: Engaging and professional.",
        ],
        focus_rules: &[],
        example_heading: "A2UI JSON Template (Blueprint):",
        required_components: &[ComponentKind::QuizCard],
    },
    // Podcast is the one template with no upstream wording: the agent used to
    // send it through the generic fallback prompt. This text is authored here.
    FormatTemplate {
        format_id: FormatId::Podcast,
        example_skeleton: skeletons::AUDIO,
        variant_skeletons: &[],
        audience: "The user wants to listen to a short spoken overview of {owner_first}'s career.",
        data_heading: "{owner_first}'s Professional Profile",
        task: "Write the narration script for a 60-90 second audio segment. Reply with plain prose only; the audio player is attached separately.",
        instruction_rules: &[
            "Speak in the third person, in a warm, executive podcast-host voice.",
            "Open with who {owner_first} is today, then walk through two or three defining career moments with concrete numbers from the data.",
            "Close with what he is building next.",
            "Do NOT output JSON, markdown, headings, or stage directions.",
        ],
        focus_rules: &[],
        example_heading: "A2UI Audio surface the narration is played in (for reference only, do not output it):",
        required_components: &[],
    },
    FormatTemplate {
        format_id: FormatId::Video,
        example_skeleton: skeletons::VIDEO,
        variant_skeletons: &[],
        audience: "The user wants to see a video or presentation.",
        data_heading: "Portfolio Data",
        task: "Return A2UI JSON containing a 'Video' component with a YouTube URL.",
        instruction_rules: &["If no specific video is found, use a placeholder or related AI talk."],
        focus_rules: &[],
        example_heading: "A2UI JSON Template:",
        required_components: &[ComponentKind::Video],
    },
    FormatTemplate {
        format_id: FormatId::Image,
        example_skeleton: skeletons::IMAGE,
        variant_skeletons: &[Variant {
            heading: "A2UI JSON Template for ProfileBubble:",
            skeleton: skeletons::PROFILE_BUBBLE,
        }],
        audience: "The user wants to see a picture, avatar, or visual achievement.",
        data_heading: "Portfolio Data",
        task: "Return A2UI JSON containing an 'Image' component OR a 'ProfileBubble' component.",
        instruction_rules: &[
            "**VARIANT RULE**: If the user mentions \"bubble\" or \"avatar\", you MUST use the **'ProfileBubble'** custom component.",
            "If they ask for his profile pic, use \"/assets/hero.png\".",
            "If they ask for the Olympics project architecture, use \"/assets/architecture.jpg\".",
        ],
        focus_rules: &[],
        example_heading: "A2UI JSON Template for Image:",
        required_components: &[ComponentKind::Image, ComponentKind::ProfileBubble],
    },
    FormatTemplate {
        format_id: FormatId::Timeline,
        example_skeleton: skeletons::TIMELINE,
        variant_skeletons: &[],
        audience: "The user wants to see professional career history as a sequential downward timeline.",
        data_heading: "{owner_first}'s Professional Data",
        task: "Return A2UI JSON using the 'ExperienceCard' custom component.",
        instruction_rules: &[
            "Display all major relevant roles from the EXPERIENCE data.",
            "Use sequential IDs (exp1, exp2, etc).",
            "For 'logo', use 'google' if company is Google, 'aws' if Amazon, 'accenture' if Accenture.",
            "Ensure 'impact' is included for each role to demonstrate high-level value.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::ExperienceCard],
    },
    FormatTemplate {
        format_id: FormatId::VideoCards,
        example_skeleton: skeletons::VIDEO_CARDS,
        variant_skeletons: &[],
        audience: "Represent {owner_first}'s YouTube videos as high-quality cards.",
        data_heading: "{owner_first}'s Video Data",
        task: "Return A2UI JSON with a Row of exactly 4 PortfolioCards.",
        instruction_rules: &[
            "Use type 'video' for these cards.",
            "Provide a clear title and description.",
            "Pull details from the VIDEOS section of the profile.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::BlogCards,
        example_skeleton: skeletons::BLOG_CARDS,
        variant_skeletons: &[],
        audience: "Represent {owner_first}'s technical blogs and whitepapers as a nice grid of cards.",
        data_heading: "{owner_first}'s Portfolio Data",
        task: "Return A2UI JSON with 6 cards split across two Rows (3 cards per row).",
        instruction_rules: &[
            "**TOP PRIORITY (Indices 1 & 2)**: 1. The \"Intro to Agents Whitepaper\" (Kaggle). 2. The \"Advent of Agents\" project.",
            "**Remaining 4 Cards**: Choose the most relevant technical blogs from the BLOGS data.",
            "Use two Rows: 'blogRow1' (b1, b2, b3) and 'blogRow2' (b4, b5, b6).",
            "Each Card should have an 'onAction' link to the medium/kaggle URL.",
            "Use 'PortfolioCard' component with type 'blog'.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::Awards,
        example_skeleton: skeletons::AWARDS,
        variant_skeletons: &[],
        audience: "The user wants to see {owner_first}'s major awards, honors, and trophies.",
        data_heading: "{owner_first}'s Award Data",
        task: "Return A2UI JSON with a Row of PortfolioCards.",
        instruction_rules: &[
            "Use type 'project' for these cards.",
            "**MANDATORY**: For any award mentioning 'Cloud Tech Impact' or 'Trophy', you MUST use the image '/assets/award_gtm_2024.jpg'. This is the high-fidelity trophy photo from {owner_first}'s website.",
            "For other awards (like 'AIS Hackathon' or 'GTM Excellence'), use '/assets/awards.png'.",
            "Descriptions should highlight the massive scale and business impact (e.g., 'NBCU Olympic Chatbot serving 40M viewers').",
            "Ensure titles are clean and professional (e.g. 'Cloud Tech Impact Award 2024').",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::Certs,
        example_skeleton: skeletons::CERTS,
        variant_skeletons: &[],
        audience: "The user wants to see {owner_first}'s cloud certifications.",
        data_heading: "{owner_first}'s Certification Data",
        task: "Return A2UI JSON with a grid of PortfolioCards.",
        instruction_rules: &[
            "**CRITICAL**: You MUST name EACH certification individually (e.g., 'Professional ML Engineer', 'Professional Cloud Architect', 'AWS Solutions Architect Pro').",
            "**DO NOT SUMMARIZE**: If the data says \"10x Google Cloud Certified\", you must still attempt to list the individual titles based on the context.",
            "Provide a card for EVERY certification found in the data.",
            "Use type 'project' for these cards and '/assets/certs.png' for the image.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::Speaker,
        example_skeleton: skeletons::SPEAKER,
        variant_skeletons: &[],
        audience: "The user wants to see {owner_first}'s top speaking events and keynotes.",
        data_heading: "{owner_first}'s Speaking Data",
        task: "Return A2UI JSON using 'Flashcard' components in a Row.",
        instruction_rules: &[
            "**CRITICAL**: Prioritize the 'Google Cloud Next' events (Las Vegas/San Francisco).",
            "Use high-fidelity naming (e.g., 'Solutions Talk: Architecting GenAI Agents').",
            "The front: Event Name, Location, and Date.",
            "The back: Talk Title, Key Takeaways, and Audience Impact.",
            "Maintain a premium, executive tone.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::Flashcard],
    },
    FormatTemplate {
        format_id: FormatId::Testimonials,
        example_skeleton: skeletons::TESTIMONIALS,
        variant_skeletons: &[],
        audience: "The user wants to see \"What Googlers Say\" about {owner_first}.",
        data_heading: "{owner_first}'s Testimonial Data",
        task: "Return A2UI JSON with a Row of Flashcards.",
        instruction_rules: &[
            "Each flashcard should feature a quote from a Googler or Google leader.",
            "The front: Persona/Author (e.g., 'CEO, Google Cloud').",
            "The back: The specific quote or piece of feedback.",
            "Use categories like 'Technical Rigor', 'Leadership', 'Innovation'.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::Flashcard],
    },
    FormatTemplate {
        format_id: FormatId::Gallery,
        example_skeleton: skeletons::GALLERY,
        variant_skeletons: &[],
        audience: "The user wants to see a visual gallery of {owner_first}'s work, achievements, and events.",
        data_heading: "{owner_first}'s Gallery Data",
        task: "Return A2UI JSON with a Row of PortfolioCards.",
        instruction_rules: &[
            "Use type 'project' for these cards.",
            "Each card should feature a title and a descriptive caption from the data.",
            "Ensure you include high-signal visuals like the 'NBC Olympic Architecture' and 'Cloud Tech Impact Award'.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::Matrix,
        example_skeleton: skeletons::STRATEGIC_MATRIX,
        variant_skeletons: &[],
        audience: "The user wants to see a strategic breakdown, framework, or \"wow\" innovative display.",
        data_heading: "Strategic Matrix Data",
        task: "Return A2UI JSON using the 'StrategicMatrix' component.",
        instruction_rules: &[
            "Map the MATRIX data from the profile to the component properties.",
            "Ensure the 'title' and all 'cells' are included.",
            "For each cell, include 'phase', 'role', 'highlights', 'impact', 'color', and a relevant Material Symbol name for 'logo'.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::StrategicMatrix],
    },
    FormatTemplate {
        format_id: FormatId::Charts,
        example_skeleton: skeletons::SKILL_RADAR,
        variant_skeletons: &[],
        audience: "The user wants to see a data visualization, chart, or skill radar to \"wow\" them.",
        data_heading: "{owner_first}'s Skill Data",
        task: "Return A2UI JSON using the 'SkillRadar' component.",
        instruction_rules: &[
            "Map the SKILLS categories from the profile to 'subject' and assign a 'value' (0-100) based on his seniority.",
            "Focus on the main categories: AI/ML, Data, Cloud, Strategy, and Engineering.",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::SkillRadar],
    },
    FormatTemplate {
        format_id: FormatId::Comics,
        example_skeleton: skeletons::COMICS,
        variant_skeletons: &[],
        audience: "The user has unlocked the ARCHITECT'S SECRET FILES (The Agent Adventures Comics).",
        data_heading: "Comic Data",
        task: "Return A2UI JSON featuring the comics as interactive PortfolioCards.",
        instruction_rules: &[
            "List all available comic issues/editions from the COMICS data.",
            "Use 'PortfolioCard' component with type 'project'.",
            "Use the provided URLs for the PDF assets.",
            "Ensure the header is \"The Agentic Adventures 📂\".",
        ],
        focus_rules: &[],
        example_heading: EXAMPLE,
        required_components: &[ComponentKind::PortfolioCard],
    },
    FormatTemplate {
        format_id: FormatId::Creative,
        example_skeleton: skeletons::CREATIVE,
        variant_skeletons: &[],
        audience: "The user wants a UNIQUE, HIGH-FIDELITY visual experience that doesn't fit existing templates.",
        data_heading: "Portfolio Data",
        task: "You are in **CREATIVE MODE**. You must construct a novel rich UI experience from scratch using the base components Column (vertical layout), Row (horizontal grids), Text (headings with usageHint h1, h2, h3 and bodies), Image (url, alt), PortfolioCard (title, description, image, url, type) and ProfileBubble (image, size).",
        instruction_rules: &[
            "Design a layout that perfectly answers the user's specific request for a \"{topic}\".",
            "Use a mix of Rows and Columns to create a \"Dashboard\" or \"Matrix\" feel.",
            "Keep it premium, executive, and high-signal.",
            "Output ONLY valid A2UI JSON.",
        ],
        focus_rules: &[],
        example_heading: "A2UI JSON Template (Start here and build a custom structure):",
        required_components: &[],
    },
];
