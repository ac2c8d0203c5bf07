use serde::{Deserialize, Serialize};

/// Sección del tutorial, en el orden en que se muestra.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TutorialSection {
    pub id: String, // estable, se usa como ancla de scroll
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Code { code: String },
    List { items: Vec<String> },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String, // debe coincidir con una de `options`
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

/// Vista visible en el panel central.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Tutorial,
    Quiz,
    Assistant,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Tutorial => "📖 Tutorial",
            View::Quiz => "🧠 Quiz",
            View::Assistant => "🤖 AuraBot AI",
        }
    }
}
