use crate::app::AuraApp;
use crate::quiz::{Feedback, OptionStyle};
use crate::ui::helpers::markdown;
use crate::ui::layout::{centered_panel, content_column};
use egui::{Button, CentralPanel, Color32, Context, CornerRadius, Frame, Margin, RichText, Vec2};

const GREEN: Color32 = Color32::from_rgb(34, 139, 84);
const RED: Color32 = Color32::from_rgb(190, 52, 60);
const ACCENT: Color32 = Color32::from_rgb(59, 110, 220);

enum QuizAction {
    Select(String),
    Submit,
    Next,
}

pub fn ui_quiz(app: &mut AuraApp, ctx: &Context) {
    let total = app.content.questions().len();

    if app.quiz.finished {
        let pct = app.quiz.percentage(total);
        let score = app.quiz.score;
        let mut restart = false;

        centered_panel(ctx, 200.0, 500.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Quiz Complete!").size(30.0).strong());
                ui.add_space(12.0);
                ui.label(RichText::new(format!("You scored {score} out of {total} ({pct}%)")).size(20.0));
                ui.add_space(20.0);
                restart = ui
                    .add_sized([200.0, 40.0], Button::new("Restart Quiz"))
                    .clicked();
            });
        });

        if restart {
            app.restart_quiz();
        }
        return;
    }

    let mut action = None;

    CentralPanel::default().show(ctx, |ui| {
        content_column(ui, 720.0, |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Aura Knowledge Quiz").size(30.0).strong());
            ui.label("Test your understanding of the Aura language.");
            ui.add_space(16.0);

            let questions = app.content.questions();
            let Some(question) = app.quiz.current(questions) else {
                ui.label("No hay preguntas.");
                return;
            };

            Frame::default()
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("Question {} of {}", app.quiz.current_index + 1, total)).weak(),
                    );
                    ui.add_space(8.0);
                    ui.scope(|ui| {
                        ui.style_mut().override_text_style = Some(egui::TextStyle::Heading);
                        markdown(ui, &mut app.cm_cache, &question.question);
                    });
                    ui.add_space(12.0);

                    let width = ui.available_width();
                    for option in &question.options {
                        let style = app.quiz.option_style(questions, option);
                        let mut text = RichText::new(option);
                        if matches!(style, OptionStyle::Selected | OptionStyle::Correct | OptionStyle::Wrong) {
                            text = text.color(Color32::WHITE);
                        }
                        let mut button = Button::new(text).min_size(Vec2::new(width, 40.0));
                        button = match style {
                            OptionStyle::Selected => button.fill(ACCENT),
                            OptionStyle::Correct => button.fill(GREEN),
                            OptionStyle::Wrong => button.fill(RED),
                            OptionStyle::Idle | OptionStyle::Dimmed => button,
                        };

                        if ui.add_enabled(!app.quiz.feedback_shown, button).clicked() {
                            action = Some(QuizAction::Select(option.clone()));
                        }
                        ui.add_space(6.0);
                    }

                    if let Some(feedback) = app.quiz.feedback(questions) {
                        let (title, fill) = match feedback {
                            Feedback::Correct => ("Correct!", GREEN.gamma_multiply(0.35)),
                            Feedback::Incorrect => ("Incorrect", RED.gamma_multiply(0.35)),
                        };
                        ui.add_space(10.0);
                        Frame::default()
                            .fill(fill)
                            .corner_radius(CornerRadius::same(8))
                            .inner_margin(Margin::same(12))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(RichText::new(title).strong().size(18.0));
                                markdown(ui, &mut app.cm_cache, &question.explanation);
                            });
                    }

                    ui.add_space(12.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if app.quiz.feedback_shown {
                            let label = if app.quiz.is_last_question(questions) {
                                "Finish Quiz"
                            } else {
                                "Next Question"
                            };
                            if ui.add_sized([160.0, 40.0], Button::new(label)).clicked() {
                                action = Some(QuizAction::Next);
                            }
                        } else {
                            let can_submit = app.quiz.selected.is_some();
                            let submit = Button::new("Submit").min_size(Vec2::new(160.0, 40.0));
                            if ui.add_enabled(can_submit, submit).clicked() {
                                action = Some(QuizAction::Submit);
                            }
                        }
                    });
                });
        });
    });

    match action {
        Some(QuizAction::Select(option)) => app.select_option(&option),
        Some(QuizAction::Submit) => app.submit_answer(),
        Some(QuizAction::Next) => app.next_question(),
        None => {}
    }
}
