// src/assistant/prompt.rs

use crate::model::{ChatMessage, Sender};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl From<Sender> for Role {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::User => Role::User,
            Sender::Assistant => Role::Model,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    fn new(role: Role, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: text.to_owned(),
            }],
        }
    }

    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Cuerpo de `models/{model}:generateContent`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub system_instruction: SystemInstruction,
}

pub fn system_instruction(documentation: &str) -> String {
    format!(
        "You are AuraBot, an expert on the Aura programming language. Your knowledge is based exclusively on the following documentation. \
Answer the user's questions about Aura clearly and concisely using only the provided information. \
If the question is outside the scope of the documentation, politely state that you can only answer questions based on the official guide. \
Do not invent features or syntax. Format your answers with markdown for code blocks and lists where appropriate.\n\n\
Aura Language Documentation:\n---\n{documentation}\n---\n"
    )
}

/// Historial completo (roles traducidos) más el mensaje nuevo, siempre como `user`.
pub fn build_request(history: &[ChatMessage], new_message: &str, instruction: &str) -> GenerateRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|msg| Content::new(msg.sender.into(), &msg.text))
        .collect();
    contents.push(Content::new(Role::User, new_message));

    GenerateRequest {
        contents,
        system_instruction: SystemInstruction {
            parts: vec![Part {
                text: instruction.to_owned(),
            }],
        },
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Texto del primer candidato; `None` si viene vacío.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}
