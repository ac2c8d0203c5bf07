use super::*;

impl AuraApp {
    pub fn show_view(&mut self, view: View) {
        let previous = self.shell.current_view();
        if previous == view {
            return;
        }

        match view {
            // El quiz empieza de cero cada vez que se entra en su vista
            View::Quiz => self.quiz.restart(),
            // Al volver al tutorial se vuelve a medir desde cero
            View::Tutorial => self.viewport.reset(),
            View::Assistant => {}
        }
        self.shell.show(view);
    }

    /// Click en una sección de la barra lateral.
    pub fn go_to_section(&mut self, id: &str) {
        if self.content.section(id).is_none() {
            log::warn!("sección desconocida: {id}");
            return;
        }
        if self.shell.current_view() != View::Tutorial {
            self.viewport.reset();
        }
        self.shell.go_to_section(id);
    }

    /// Vuelca los eventos de visibilidad del frame en la sección activa.
    pub fn sync_active_section(&mut self) {
        self.shell.sync_from(&mut self.viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;
    use crate::shell::ElementRect;

    #[test]
    fn entering_quiz_restarts_it() {
        let mut app = test_app();
        app.show_view(View::Quiz);
        let first = app.content.questions()[0].correct_answer.clone();
        app.select_option(&first);
        app.submit_answer();
        assert_eq!(app.quiz.score, 1);

        // Repetir la vista actual no reinicia
        app.show_view(View::Quiz);
        assert_eq!(app.quiz.score, 1);

        app.show_view(View::Assistant);
        app.show_view(View::Quiz);
        assert_eq!(app.quiz, QuizState::new());
    }

    #[test]
    fn transcript_survives_view_switches() {
        let mut app = test_app();
        app.show_view(View::Assistant);
        app.chat_input = "hola".into();
        app.send_chat_message();
        app.poll_assistant();
        app.show_view(View::Tutorial);
        app.show_view(View::Assistant);
        assert_eq!(app.assistant.transcript().len(), 3);
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut app = test_app();
        app.show_view(View::Quiz);
        app.go_to_section("no-existe");
        assert_eq!(app.current_view(), View::Quiz);
        assert_eq!(app.shell.scroll_target(), None);
    }

    #[test]
    fn scrolling_updates_active_section() {
        let mut app = test_app();
        app.go_to_section("structure");
        assert_eq!(app.shell.take_scroll_target().as_deref(), Some("structure"));

        let rects = vec![
            ElementRect {
                id: "structure".into(),
                top: -900.0,
                bottom: 50.0,
            },
            ElementRect {
                id: "control-flow".into(),
                top: 50.0,
                bottom: 700.0,
            },
        ];
        app.viewport.measure(0.0, 800.0, &rects);
        app.sync_active_section();
        assert_eq!(app.shell.active_section_id(), Some("control-flow"));
    }
}
