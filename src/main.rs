use aura_book::AuraApp;
use aura_book::config::AssistantConfig;
use aura_book::data::ContentStore;
use eframe::egui;

type CreateResult = Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>>;

fn create_app(cc: &eframe::CreationContext<'_>, config: AssistantConfig) -> CreateResult {
    cc.egui_ctx.set_visuals(egui::Visuals::dark());
    let content = ContentStore::load()?;
    log::info!(
        "contenido cargado: {} secciones, {} preguntas",
        content.sections().len(),
        content.questions().len()
    );
    Ok(Box::new(AuraApp::new(content, config)))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AssistantConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AuraBook - Interactive Tutorial",
        options,
        Box::new(move |cc| create_app(cc, config)),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let config = AssistantConfig::from_env();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("aura_book_canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            log::error!("no se encontró el canvas 'aura_book_canvas'");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| create_app(cc, config)),
            )
            .await;

        if let Err(err) = result {
            log::error!("no se pudo arrancar la app web: {err:?}");
        }
    });
}
