use crate::app::AuraApp;
use crate::model::ContentItem;
use crate::shell::ElementRect;
use crate::ui::helpers::{code_block, markdown};
use crate::ui::layout::content_column;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea, Ui};
use egui_commonmark::CommonMarkCache;

pub fn ui_tutorial(app: &mut AuraApp, ctx: &Context) {
    // Se consume al final del frame: hasta entonces la visibilidad no cuenta
    let scroll_target = app.shell.scroll_target().map(str::to_owned);

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt("tutorial_scroll")
            .auto_shrink([false; 2])
            .animated(false)
            .show(ui, |ui| {
                let visible = ui.clip_rect();

                content_column(ui, 820.0, |ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Aura Language Tutorial").size(30.0).strong());
                    ui.label("An interactive guide to the features and syntax of Aura.");
                    ui.add_space(16.0);

                    let mut rects = Vec::with_capacity(app.content.sections().len());
                    for section in app.content.sections() {
                        let top = ui.cursor().top();

                        ui.add_space(24.0);
                        let title = ui.label(RichText::new(&section.title).size(24.0).strong());
                        if scroll_target.as_deref() == Some(section.id.as_str()) {
                            title.scroll_to_me(Some(Align::TOP));
                        }
                        ui.add_space(8.0);

                        for (i, item) in section.content.iter().enumerate() {
                            content_item(ui, &mut app.cm_cache, &format!("{}_{i}", section.id), item);
                        }

                        rects.push(ElementRect {
                            id: section.id.clone(),
                            top,
                            bottom: ui.cursor().top(),
                        });
                    }
                    ui.add_space(visible.height() * 0.5);

                    app.viewport.measure(visible.top(), visible.bottom(), &rects);
                });
            });
    });

    app.sync_active_section();

    if scroll_target.is_some() {
        app.shell.take_scroll_target();
        ctx.request_repaint();
    }
}

fn content_item(ui: &mut Ui, cache: &mut CommonMarkCache, id_salt: &str, item: &ContentItem) {
    match item {
        ContentItem::Heading { level, text } => {
            let size = if *level <= 2 { 20.0 } else { 17.0 };
            ui.add_space(12.0);
            ui.label(RichText::new(text).size(size).strong());
            if *level <= 2 {
                ui.separator();
            }
            ui.add_space(4.0);
        }
        ContentItem::Paragraph { text } => {
            markdown(ui, cache, text);
            ui.add_space(8.0);
        }
        ContentItem::Code { code } => code_block(ui, id_salt, code),
        ContentItem::List { items } => {
            let list: String = items.iter().map(|entry| format!("- {entry}\n")).collect();
            markdown(ui, cache, &list);
            ui.add_space(8.0);
        }
    }
}
