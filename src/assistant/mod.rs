use crate::model::ChatMessage;
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub mod client;
pub mod prompt;

pub use client::{AssistantError, GeminiClient, GenerateResult, Reply, TextGenerator};
pub use prompt::GenerateRequest;

pub const GREETING: &str =
    "Hello! I am AuraBot. Ask me any questions you have about the Aura programming language.";
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't generate a response. Please try again.";
pub const ERROR_FALLBACK: &str =
    "An error occurred while contacting AuraBot. Please check the logs for details.";

struct PendingRequest {
    message: String,
    rx: Receiver<GenerateResult>,
}

/// Conversación con AuraBot. El historial sólo crece; como mucho hay una
/// petición en vuelo.
pub struct AssistantSession {
    transcript: Vec<ChatMessage>,
    pending: Option<PendingRequest>,
    generator: Box<dyn TextGenerator>,
    system_instruction: String,
}

impl AssistantSession {
    /// Sesión nueva con el saludo inicial de AuraBot.
    pub fn new(generator: Box<dyn TextGenerator>, documentation: &str) -> Self {
        Self::from_transcript(generator, documentation, vec![ChatMessage::assistant(GREETING)])
    }

    pub fn from_transcript(
        generator: Box<dyn TextGenerator>,
        documentation: &str,
        transcript: Vec<ChatMessage>,
    ) -> Self {
        Self {
            transcript,
            pending: None,
            generator,
            system_instruction: prompt::system_instruction(documentation),
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Mensaje del usuario que espera respuesta (todavía fuera del historial).
    pub fn pending_message(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.message.as_str())
    }

    /// Envía `message` junto con todo el historial. Devuelve `false` si se ignora
    /// (mensaje vacío o petición ya en curso).
    pub fn ask(&mut self, message: &str) -> bool {
        if message.trim().is_empty() || self.pending.is_some() {
            return false;
        }

        let request = prompt::build_request(&self.transcript, message, &self.system_instruction);
        let (tx, rx) = mpsc::channel();

        log::info!(
            "enviando pregunta a AuraBot ({} mensajes de contexto)",
            request.contents.len()
        );

        self.pending = Some(PendingRequest {
            message: message.to_owned(),
            rx,
        });
        self.generator.generate(
            request,
            Box::new(move |result| {
                // Si la sesión ya no existe no hay nadie a quien avisar
                let _ = tx.send(result);
            }),
        );
        true
    }

    /// Aplica la respuesta si ya llegó. Devuelve `true` si el historial cambió.
    pub fn poll(&mut self) -> bool {
        let result = match &self.pending {
            None => return false,
            Some(pending) => match pending.rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => Err(AssistantError::Http(
                    "la petición terminó sin respuesta".into(),
                )),
            },
        };

        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.complete(pending.message, result);
        true
    }

    fn complete(&mut self, message: String, result: GenerateResult) {
        let reply = match result {
            Ok(text) => text,
            Err(err) => {
                log::error!("Error llamando a Gemini: {err}");
                err.fallback_message().to_string()
            }
        };

        self.transcript.push(ChatMessage::user(message));
        self.transcript.push(ChatMessage::assistant(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sender;
    use super::prompt::Role;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Contesta en el acto con una respuesta fija y guarda las peticiones.
    struct FakeGenerator {
        answer: fn() -> GenerateResult,
        requests: Rc<RefCell<Vec<GenerateRequest>>>,
    }

    impl TextGenerator for FakeGenerator {
        fn generate(&self, request: GenerateRequest, reply: Reply) {
            self.requests.borrow_mut().push(request);
            reply((self.answer)());
        }
    }

    /// Se queda con el callback para contestar más tarde.
    struct DeferredGenerator {
        held: Rc<RefCell<Vec<Reply>>>,
    }

    impl TextGenerator for DeferredGenerator {
        fn generate(&self, _request: GenerateRequest, reply: Reply) {
            self.held.borrow_mut().push(reply);
        }
    }

    fn fake(answer: fn() -> GenerateResult) -> (Box<FakeGenerator>, Rc<RefCell<Vec<GenerateRequest>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        (
            Box::new(FakeGenerator {
                answer,
                requests: requests.clone(),
            }),
            requests,
        )
    }

    #[test]
    fn new_session_starts_with_greeting() {
        let (generator, _) = fake(|| Ok("x".into()));
        let session = AssistantSession::new(generator, "doc");
        assert_eq!(session.transcript(), &[ChatMessage::assistant(GREETING)]);
        assert!(!session.is_pending());
    }

    #[test]
    fn blank_message_is_ignored() {
        let (generator, requests) = fake(|| Ok("x".into()));
        let mut session = AssistantSession::from_transcript(generator, "doc", vec![]);
        assert!(!session.ask(""));
        assert!(!session.ask("   \n\t"));
        assert!(!session.poll());
        assert!(session.transcript().is_empty());
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn successful_reply_appends_user_then_assistant() {
        let (generator, requests) = fake(|| Ok("Use `{for} i(0)++ < n`.".into()));
        let mut session =
            AssistantSession::from_transcript(generator, "doc", vec![ChatMessage::user("hi")]);

        assert!(session.ask("how do loops work?"));
        {
            let sent = requests.borrow();
            assert_eq!(sent.len(), 1);
            let conversation: Vec<(Role, String)> =
                sent[0].contents.iter().map(|c| (c.role, c.text())).collect();
            assert_eq!(
                conversation,
                vec![
                    (Role::User, "hi".to_string()),
                    (Role::User, "how do loops work?".to_string()),
                ]
            );
            assert!(sent[0].system_instruction.parts[0].text.contains("doc"));
        }

        assert!(session.poll());
        assert_eq!(
            session.transcript(),
            &[
                ChatMessage::user("hi"),
                ChatMessage::user("how do loops work?"),
                ChatMessage::assistant("Use `{for} i(0)++ < n`."),
            ]
        );
        assert!(!session.is_pending());
    }

    #[test]
    fn failure_appends_exactly_message_and_fallback() {
        let (generator, _) = fake(|| Err(AssistantError::Http("connection refused".into())));
        let mut session = AssistantSession::new(generator, "doc");
        let before = session.transcript().len();

        assert!(session.ask("what is {fun}?"));
        assert!(session.poll());

        let added = &session.transcript()[before..];
        assert_eq!(added.len(), 2);
        assert_eq!(added[0], ChatMessage::user("what is {fun}?"));
        assert_eq!(added[1].sender, Sender::Assistant);
        assert_eq!(added[1].text, ERROR_FALLBACK);
    }

    #[test]
    fn empty_reply_uses_its_own_fallback() {
        let (generator, _) = fake(|| Err(AssistantError::EmptyResponse));
        let mut session = AssistantSession::from_transcript(generator, "doc", vec![]);
        session.ask("hola");
        session.poll();
        assert_eq!(session.transcript()[1].text, EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn only_one_request_in_flight() {
        let held = Rc::new(RefCell::new(Vec::new()));
        let generator = Box::new(DeferredGenerator { held: held.clone() });
        let mut session = AssistantSession::from_transcript(generator, "doc", vec![]);

        assert!(session.ask("primera"));
        assert!(!session.ask("segunda"));
        assert_eq!(held.borrow().len(), 1);
        assert_eq!(session.pending_message(), Some("primera"));
        assert!(!session.poll());
        assert!(session.transcript().is_empty());

        let reply = held.borrow_mut().pop().unwrap();
        reply(Ok("respuesta".into()));
        assert!(session.poll());
        assert_eq!(session.transcript().len(), 2);

        // La sesión sigue usable después
        assert!(session.ask("segunda"));
    }

    #[test]
    fn dropped_reply_counts_as_failure() {
        let held = Rc::new(RefCell::new(Vec::new()));
        let generator = Box::new(DeferredGenerator { held: held.clone() });
        let mut session = AssistantSession::from_transcript(generator, "doc", vec![]);

        session.ask("¿hola?");
        held.borrow_mut().clear();
        assert!(session.poll());
        assert_eq!(session.transcript()[1].text, ERROR_FALLBACK);
        assert!(!session.is_pending());
    }

    #[test]
    fn missing_credential_degrades_to_fallback() {
        let client = GeminiClient::new(crate::config::AssistantConfig::default());
        let mut session = AssistantSession::from_transcript(Box::new(client), "doc", vec![]);
        assert!(session.ask("hola"));

        // El cliente real contesta desde otro hilo
        let mut applied = false;
        for _ in 0..200 {
            if session.poll() {
                applied = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(applied);
        assert_eq!(session.transcript()[1].text, ERROR_FALLBACK);
    }
}
