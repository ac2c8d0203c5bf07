use crate::app::AuraApp;
use crate::model::View;
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};

const SIDEBAR_WIDTH: f32 = 260.0;

pub fn sidebar(app: &mut AuraApp, ctx: &Context) {
    let mut view_clicked = None;
    let mut section_clicked = None;

    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading(RichText::new("AuraBook").strong());
            ui.label("Interactive Tutorial");
            ui.separator();

            let current = app.current_view();
            let item_w = ui.available_width();

            if nav_item(ui, View::Tutorial.label(), current == View::Tutorial, item_w) {
                view_clicked = Some(View::Tutorial);
            }

            // Índice de secciones sólo dentro del tutorial
            if current == View::Tutorial {
                ScrollArea::vertical()
                    .id_salt("sidebar_sections")
                    .max_height(ui.available_height() - 90.0)
                    .show(ui, |ui| {
                        ui.indent("sidebar_sections_indent", |ui| {
                            let sub_w = ui.available_width();
                            for section in app.content.sections() {
                                let active = app.shell.active_section_id() == Some(section.id.as_str());
                                if nav_item(ui, &section.title, active, sub_w) {
                                    section_clicked = Some(section.id.clone());
                                }
                            }
                        });
                    });
            }

            if nav_item(ui, View::Quiz.label(), current == View::Quiz, item_w) {
                view_clicked = Some(View::Quiz);
            }
            if nav_item(ui, View::Assistant.label(), current == View::Assistant, item_w) {
                view_clicked = Some(View::Assistant);
            }
        });

    if let Some(id) = section_clicked {
        app.go_to_section(&id);
    } else if let Some(view) = view_clicked {
        app.show_view(view);
    }
}

fn nav_item(ui: &mut Ui, label: &str, active: bool, width: f32) -> bool {
    ui.add_sized([width, 32.0], Button::new(label).selected(active))
        .clicked()
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Columna de contenido con ancho máximo, alineada arriba.
pub fn content_column(ui: &mut Ui, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    let w = ui.available_width().min(max_width);
    ui.vertical_centered(|ui| {
        ui.set_max_width(w);
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
    });
}
