mod helpers;
pub mod layout;
pub mod views;

use crate::app::AuraApp;
use crate::model::View;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, sidebar};
use std::time::Duration;

impl App for AuraApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Respuesta de AuraBot que llega desde el hilo/futuro de la petición
        if self.poll_assistant() {
            ctx.request_repaint();
        }
        if self.assistant.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // NAVEGACIÓN LATERAL
        sidebar(self, ctx);

        // Dispatch por vista
        match self.current_view() {
            View::Tutorial => views::tutorial::ui_tutorial(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::Assistant => views::assistant::ui_assistant(self, ctx),
        }
    }
}
