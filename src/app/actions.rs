use super::*;

impl AuraApp {
    pub fn select_option(&mut self, option: &str) {
        self.quiz.select_answer(option);
    }

    pub fn submit_answer(&mut self) {
        self.quiz.submit(self.content.questions());
    }

    pub fn next_question(&mut self) {
        self.quiz.next(self.content.questions());
    }

    pub fn restart_quiz(&mut self) {
        self.quiz.restart();
    }

    /// Envía lo escrito en el chat. Si se rechaza, el texto se queda en la caja.
    pub fn send_chat_message(&mut self) {
        if self.assistant.ask(&self.chat_input) {
            self.chat_input.clear();
        }
    }

    pub fn poll_assistant(&mut self) -> bool {
        self.assistant.poll()
    }
}
