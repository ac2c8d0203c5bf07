use crate::assistant::{AssistantSession, GeminiClient, TextGenerator};
use crate::config::AssistantConfig;
use crate::data::ContentStore;
use crate::model::View;
use crate::quiz::QuizState;
use crate::shell::{ObservableViewport, SectionViewport, ShellState, ViewportMargins};
use egui_commonmark::CommonMarkCache;

// Submódulos
pub mod actions;
pub mod navigation;

/// Estado completo de la aplicación. Cada componente es independiente; la UI
/// sólo lee de aquí y llama a los métodos de `actions` y `navigation`.
pub struct AuraApp {
    pub content: ContentStore,
    pub shell: ShellState,
    pub quiz: QuizState,
    pub assistant: AssistantSession,
    pub viewport: SectionViewport,
    pub chat_input: String,
    pub cm_cache: CommonMarkCache,
}

impl AuraApp {
    pub fn new(content: ContentStore, config: AssistantConfig) -> Self {
        let client = GeminiClient::new(config);
        Self::with_generator(content, Box::new(client), ViewportMargins::default())
    }

    pub fn with_generator(
        content: ContentStore,
        generator: Box<dyn TextGenerator>,
        margins: ViewportMargins,
    ) -> Self {
        let assistant = AssistantSession::new(generator, content.documentation());
        let shell = ShellState::new(content.first_section_id());

        let mut viewport = SectionViewport::new(margins);
        for section in content.sections() {
            viewport.subscribe(&section.id);
        }

        Self {
            content,
            shell,
            quiz: QuizState::new(),
            assistant,
            viewport,
            chat_input: String::new(),
            cm_cache: CommonMarkCache::default(),
        }
    }

    pub fn current_view(&self) -> View {
        self.shell.current_view()
    }
}
