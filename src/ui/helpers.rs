// src/ui/helpers.rs
use crate::code_utils::{aura_syntax, code_rows};
use crate::markup;
use egui::{Color32, CornerRadius, Frame, Id, Margin, Ui};
use egui_code_editor::{CodeEditor, ColorTheme};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

const COPIED_SECS: f64 = 2.0;

/// Texto con marcado (`código`, **negrita**, bloques ```) pintado como CommonMark.
pub fn markdown(ui: &mut Ui, cache: &mut CommonMarkCache, text: &str) {
    CommonMarkViewer::new().show(ui, cache, &markup::to_commonmark(text));
}

/// Editor de sólo lectura con botón de copiar.
pub fn code_block(ui: &mut Ui, id_salt: &str, code: &str) {
    let copied_id = Id::new(id_salt).with("copied_at");
    let now = ui.input(|i| i.time);
    let copied = ui
        .data_mut(|d| d.get_temp::<f64>(copied_id))
        .is_some_and(|t| now - t < COPIED_SECS);

    Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(6))
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let label = if copied { "Copied!" } else { "Copy" };
                if ui.small_button(label).clicked() {
                    ui.ctx().copy_text(code.to_owned());
                    ui.data_mut(|d| d.insert_temp(copied_id, now));
                }
            });

            let mut buf = code.to_owned();
            CodeEditor::default()
                .id_source(id_salt)
                .with_rows(code_rows(code))
                .with_fontsize(14.0)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(aura_syntax())
                .with_numlines(false)
                .vscroll(false)
                .show(ui, &mut buf);
        });

    // Repintar para que "Copied!" desaparezca solo
    if copied {
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(250));
    }
    ui.add_space(6.0);
}

pub fn bubble(ui: &mut Ui, fill: Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_max_width(520.0);
            inner(ui);
        });
}
