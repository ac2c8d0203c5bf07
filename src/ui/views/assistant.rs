use crate::app::AuraApp;
use crate::model::{ChatMessage, Sender};
use crate::ui::helpers::{bubble, markdown};
use crate::ui::layout::content_column;
use egui::{Align, Button, CentralPanel, Color32, Context, Key, Layout, RichText, ScrollArea, TextEdit, Ui, Vec2};
use egui_commonmark::CommonMarkCache;

const BOT_FILL: Color32 = Color32::from_rgb(38, 44, 64);
const USER_FILL: Color32 = Color32::from_rgb(52, 92, 180);
const AVATAR_FILL: Color32 = Color32::from_rgb(200, 70, 80);
const INPUT_HEIGHT: f32 = 56.0;

pub fn ui_assistant(app: &mut AuraApp, ctx: &Context) {
    let mut send = false;

    CentralPanel::default().show(ctx, |ui| {
        content_column(ui, 860.0, |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("AuraBot AI Assistant").size(30.0).strong());
            ui.label("Your personal guide to the Aura language, powered by Gemini.");
            ui.add_space(12.0);

            let history_height = (ui.available_height() - INPUT_HEIGHT).max(120.0);
            ScrollArea::vertical()
                .id_salt("chat_scroll")
                .max_height(history_height)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in app.assistant.transcript() {
                        message_row(ui, &mut app.cm_cache, msg);
                    }
                    if let Some(pending) = app.assistant.pending_message() {
                        message_row(ui, &mut app.cm_cache, &ChatMessage::user(pending));
                        typing_row(ui);
                    }
                });

            ui.separator();

            let pending = app.assistant.is_pending();
            ui.horizontal(|ui| {
                let button_w = 90.0;
                let input = ui.add_enabled(
                    !pending,
                    TextEdit::singleline(&mut app.chat_input)
                        .hint_text("Ask about Aura syntax, e.g., 'how do for loops work?'")
                        .desired_width(ui.available_width() - button_w - 8.0),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let can_send = !pending && !app.chat_input.trim().is_empty();
                let clicked = ui
                    .add_enabled(can_send, Button::new("Send").min_size(Vec2::new(button_w, 32.0)))
                    .clicked();

                if clicked || (enter && can_send) {
                    send = true;
                    input.request_focus();
                }
            });
        });
    });

    if send {
        app.send_chat_message();
    }
}

fn message_row(ui: &mut Ui, cache: &mut CommonMarkCache, msg: &ChatMessage) {
    match msg.sender {
        Sender::User => {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                bubble(ui, USER_FILL, |ui| {
                    ui.with_layout(Layout::top_down(Align::Min), |ui| {
                        markdown(ui, cache, &msg.text);
                    });
                });
            });
        }
        Sender::Assistant => {
            ui.horizontal_top(|ui| {
                avatar(ui);
                bubble(ui, BOT_FILL, |ui| {
                    ui.vertical(|ui| markdown(ui, cache, &msg.text));
                });
            });
        }
    }
    ui.add_space(10.0);
}

fn typing_row(ui: &mut Ui) {
    ui.horizontal_top(|ui| {
        avatar(ui);
        bubble(ui, BOT_FILL, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("AuraBot is thinking…").weak());
            });
        });
    });
}

fn avatar(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 16.0, AVATAR_FILL);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "A",
        egui::FontId::proportional(16.0),
        Color32::WHITE,
    );
}
