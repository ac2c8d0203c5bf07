// src/data.rs

use crate::model::{QuizQuestion, TutorialSection};
use thiserror::Error;

const TUTORIAL_YAML: &str = include_str!("data/tutorial.yaml");
const QUIZ_YAML: &str = include_str!("data/quiz_questions.yaml");
const AURA_DOCUMENTATION: &str = include_str!("data/aura_documentation.md");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no se pudo parsear {file}: {source}")]
    Yaml {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Contenido embebido en el binario: tutorial, quiz y documentación del asistente.
/// Se carga una vez al arrancar y nunca se modifica.
#[derive(Debug, Clone)]
pub struct ContentStore {
    sections: Vec<TutorialSection>,
    questions: Vec<QuizQuestion>,
    documentation: &'static str,
}

impl ContentStore {
    pub fn load() -> Result<Self, ContentError> {
        let sections = serde_yaml::from_str(TUTORIAL_YAML).map_err(|source| ContentError::Yaml {
            file: "tutorial.yaml",
            source,
        })?;
        let questions = serde_yaml::from_str(QUIZ_YAML).map_err(|source| ContentError::Yaml {
            file: "quiz_questions.yaml",
            source,
        })?;

        Ok(Self {
            sections,
            questions,
            documentation: AURA_DOCUMENTATION,
        })
    }

    pub fn sections(&self) -> &[TutorialSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&TutorialSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn first_section_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn documentation(&self) -> &'static str {
        self.documentation
    }
}
