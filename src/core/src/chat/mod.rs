mod mentions;
mod rules;

use crate::utils::StringUtils;
use log::debug;
use mentions::extract_subjects;
use rules::{
    CAREER_KEYWORDS, CURRENT_KEYWORDS, Canned, GENERAL_TOPIC, GENERIC_PLAYER, MULTI_PLAYER_MANY, MULTI_PLAYER_PAIR,
    MULTI_PLAYER_SUGGESTIONS, PLAYER_RULES, PlayerRule, RIVALRIES, STATS_KEYWORDS, STYLE_KEYWORDS,
    Subject, TOPIC_RULES,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl ChatTurn {
    fn new(response: String, context: Option<String>, suggestions: &[&str]) -> Self {
        ChatTurn {
            response,
            context,
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn canned(canned: &Canned) -> Self {
        Self::new(canned.response.to_string(), None, &canned.suggestions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Stats,
    Career,
    Style,
    Current,
    General,
}

const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Stats, STATS_KEYWORDS),
    (Intent::Career, CAREER_KEYWORDS),
    (Intent::Style, STYLE_KEYWORDS),
    (Intent::Current, CURRENT_KEYWORDS),
];

impl Intent {
    /// First matching intent in priority order: stats, career, style, current.
    pub fn detect(message: &str) -> Intent {
        INTENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| StringUtils::contains_any(message, keywords))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }
}

impl PlayerRule {
    fn paragraph(&self, intent: Intent) -> &'static str {
        match intent {
            Intent::Stats => self.stats,
            Intent::Career => self.career,
            Intent::Style => self.style,
            Intent::Current => self.current,
            Intent::General => self.general,
        }
    }
}

/// Keyword and mention driven selection of pre-written answers. Stateless.
pub struct ResponseSelector;

impl ResponseSelector {
    pub fn respond(message: &str) -> ChatTurn {
        let message = message.trim().to_lowercase();
        let subjects = extract_subjects(&message);

        match subjects.as_slice() {
            [] => Self::respond_to_topic(&message),
            [subject] => Self::respond_to_player(subject, &message),
            _ => Self::respond_to_players(&subjects),
        }
    }

    /// A non-blank prior context is prepended to the message before selection.
    pub fn respond_with_context(message: &str, prior_context: Option<&str>) -> ChatTurn {
        match prior_context.map(str::trim).filter(|context| !context.is_empty()) {
            Some(context) => Self::respond(&format!("{}\n\nUser question: {}", context, message)),
            None => Self::respond(message),
        }
    }

    fn respond_to_players(subjects: &[&Subject]) -> ChatTurn {
        let context = Some(Self::discussing(subjects));

        if let [first, second] = subjects {
            if let Some(rivalry) = RIVALRIES
                .iter()
                .find(|rule| rule.matches(first.key, second.key))
            {
                debug!("chat: rivalry {} / {}", first.key, second.key);
                return ChatTurn::new(
                    rivalry.canned.response.to_string(),
                    context,
                    &rivalry.canned.suggestions,
                );
            }

            debug!("chat: generic pair {} / {}", first.key, second.key);
            let response = MULTI_PLAYER_PAIR
                .replace("{first}", first.display_name)
                .replace("{second}", second.display_name);

            return ChatTurn::new(response, context, &MULTI_PLAYER_SUGGESTIONS);
        }

        debug!("chat: {} players", subjects.len());
        let response = MULTI_PLAYER_MANY.replace("{count}", &subjects.len().to_string());

        ChatTurn::new(response, context, &MULTI_PLAYER_SUGGESTIONS)
    }

    fn respond_to_player(subject: &Subject, message: &str) -> ChatTurn {
        let intent = Intent::detect(message);

        let rule = PLAYER_RULES
            .iter()
            .find(|rule| rule.subject == subject.key)
            .unwrap_or(&GENERIC_PLAYER);

        debug!("chat: player {} with intent {:?}", subject.key, intent);

        let response = rule
            .paragraph(intent)
            .replace("{name}", subject.display_name);

        ChatTurn::new(response, Some(Self::discussing(&[subject])), &rule.suggestions)
    }

    fn respond_to_topic(message: &str) -> ChatTurn {
        let topic = TOPIC_RULES
            .iter()
            .find(|topic| StringUtils::contains_any(message, topic.triggers))
            .unwrap_or(&GENERAL_TOPIC);

        let canned = topic
            .variants
            .iter()
            .find(|variant| StringUtils::contains_any(message, variant.keywords))
            .map(|variant| &variant.canned)
            .unwrap_or(&topic.fallback);

        debug!("chat: topic {}", topic.label);

        ChatTurn::canned(canned)
    }

    fn discussing(subjects: &[&Subject]) -> String {
        let names: Vec<&str> = subjects.iter().map(|s| s.display_name).collect();
        format!("Discussing: {}", names.join(", "))
    }
}
