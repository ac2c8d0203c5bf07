// src/quiz.rs

use crate::model::QuizQuestion;

/// Estado del quiz de opción múltiple. Se crea al entrar en la vista o al reiniciar
/// y sólo cambia con las acciones del usuario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub selected: Option<String>,
    pub feedback_shown: bool,
    pub score: usize,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Cómo pintar cada botón de opción.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current<'a>(&self, questions: &'a [QuizQuestion]) -> Option<&'a QuizQuestion> {
        questions.get(self.current_index)
    }

    pub fn is_last_question(&self, questions: &[QuizQuestion]) -> bool {
        self.current_index + 1 >= questions.len()
    }

    pub fn select_answer(&mut self, option: &str) {
        // Una vez enviada, la respuesta ya no se puede cambiar
        if self.feedback_shown || self.finished {
            return;
        }
        self.selected = Some(option.to_owned());
    }

    pub fn submit(&mut self, questions: &[QuizQuestion]) {
        if self.feedback_shown || self.finished {
            return;
        }
        let (Some(selected), Some(question)) = (&self.selected, self.current(questions)) else {
            return;
        };

        if *selected == question.correct_answer {
            self.score += 1;
        }
        self.feedback_shown = true;
    }

    pub fn next(&mut self, questions: &[QuizQuestion]) {
        if !self.feedback_shown {
            return;
        }

        if self.current_index + 1 < questions.len() {
            self.current_index += 1;
            self.selected = None;
            self.feedback_shown = false;
        } else {
            self.finished = true;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn feedback(&self, questions: &[QuizQuestion]) -> Option<Feedback> {
        if !self.feedback_shown {
            return None;
        }
        let question = self.current(questions)?;
        match &self.selected {
            Some(sel) if *sel == question.correct_answer => Some(Feedback::Correct),
            _ => Some(Feedback::Incorrect),
        }
    }

    pub fn option_style(&self, questions: &[QuizQuestion], option: &str) -> OptionStyle {
        let is_selected = self.selected.as_deref() == Some(option);

        if !self.feedback_shown {
            return if is_selected {
                OptionStyle::Selected
            } else {
                OptionStyle::Idle
            };
        }

        match self.current(questions) {
            Some(q) if q.correct_answer == option => OptionStyle::Correct,
            Some(_) if is_selected => OptionStyle::Wrong,
            _ => OptionStyle::Dimmed,
        }
    }

    pub fn percentage(&self, total: usize) -> u32 {
        percentage(self.score, total)
    }
}

/// Puntuación final en porcentaje redondeado; 0 si no hay preguntas.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}
