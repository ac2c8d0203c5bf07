// src/shell.rs

use crate::model::View;
use std::collections::HashSet;

// Franja de activación: se recorta un 20% arriba y un 80% abajo del área visible
pub const DEFAULT_TOP_MARGIN: f32 = 0.20;
pub const DEFAULT_BOTTOM_MARGIN: f32 = 0.80;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    pub element_id: String,
    pub visible: bool,
}

/// Fuente de eventos de visibilidad de elementos con id.
pub trait ObservableViewport {
    fn subscribe(&mut self, element_id: &str);
    fn drain_events(&mut self) -> Vec<VisibilityChange>;
}

/// Recorte de la zona visible, en fracciones de su altura.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMargins {
    pub top: f32,
    pub bottom: f32,
}

impl Default for ViewportMargins {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP_MARGIN,
            bottom: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl ViewportMargins {
    /// Devuelve (arriba, abajo) de la franja que cuenta como "en vista".
    pub fn band(&self, top: f32, bottom: f32) -> (f32, f32) {
        let height = (bottom - top).max(0.0);
        (top + height * self.top, bottom - height * self.bottom)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementRect {
    pub id: String,
    pub top: f32,
    pub bottom: f32,
}

/// Viewport calculado a partir de los rectángulos que la vista del tutorial mide
/// en cada frame.
#[derive(Debug, Default)]
pub struct SectionViewport {
    margins: ViewportMargins,
    subscribed: Vec<String>,
    visible: HashSet<String>,
    events: Vec<VisibilityChange>,
}

impl SectionViewport {
    pub fn new(margins: ViewportMargins) -> Self {
        Self {
            margins,
            ..Self::default()
        }
    }

    pub fn is_subscribed(&self, element_id: &str) -> bool {
        self.subscribed.iter().any(|id| id == element_id)
    }

    /// Compara cada elemento suscrito con la franja y genera eventos sólo al cambiar.
    pub fn measure(&mut self, viewport_top: f32, viewport_bottom: f32, rects: &[ElementRect]) {
        let (band_top, band_bottom) = self.margins.band(viewport_top, viewport_bottom);

        for rect in rects {
            if !self.is_subscribed(&rect.id) {
                continue;
            }
            let intersecting = rect.top <= band_bottom && rect.bottom >= band_top;
            let was_visible = self.visible.contains(&rect.id);
            if intersecting == was_visible {
                continue;
            }

            if intersecting {
                self.visible.insert(rect.id.clone());
            } else {
                self.visible.remove(&rect.id);
            }
            self.events.push(VisibilityChange {
                element_id: rect.id.clone(),
                visible: intersecting,
            });
        }
    }

    /// Olvida lo visto, p. ej. al salir de la vista del tutorial.
    pub fn reset(&mut self) {
        self.visible.clear();
        self.events.clear();
    }
}

impl ObservableViewport for SectionViewport {
    fn subscribe(&mut self, element_id: &str) {
        if !self.is_subscribed(element_id) {
            self.subscribed.push(element_id.to_owned());
        }
    }

    fn drain_events(&mut self) -> Vec<VisibilityChange> {
        std::mem::take(&mut self.events)
    }
}

/// Qué vista se muestra y qué sección del tutorial está activa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    current_view: View,
    active_section_id: Option<String>,
    scroll_target: Option<String>,
}

impl ShellState {
    pub fn new(first_section: Option<&str>) -> Self {
        Self {
            current_view: View::default(),
            active_section_id: first_section.map(str::to_owned),
            scroll_target: None,
        }
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn active_section_id(&self) -> Option<&str> {
        self.active_section_id.as_deref()
    }

    pub fn show(&mut self, view: View) {
        if self.current_view != view {
            log::debug!("vista {:?} -> {:?}", self.current_view, view);
        }
        self.current_view = view;
    }

    /// Navegación explícita desde la barra lateral: activa la sección y pide scroll.
    pub fn go_to_section(&mut self, id: &str) {
        self.show(View::Tutorial);
        self.active_section_id = Some(id.to_owned());
        self.scroll_target = Some(id.to_owned());
    }

    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    pub fn take_scroll_target(&mut self) -> Option<String> {
        self.scroll_target.take()
    }

    pub fn apply_visibility(&mut self, events: Vec<VisibilityChange>) {
        // Fuera del tutorial, o con un scroll pedido aún sin aplicar, no se toca nada
        if self.current_view != View::Tutorial || self.scroll_target.is_some() {
            return;
        }
        for event in events.into_iter().filter(|e| e.visible) {
            self.active_section_id = Some(event.element_id);
        }
    }

    pub fn sync_from(&mut self, viewport: &mut dyn ObservableViewport) {
        let events = viewport.drain_events();
        self.apply_visibility(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewport de prueba: devuelve los eventos que se le programen.
    #[derive(Default)]
    struct ScriptedViewport {
        subscribed: Vec<String>,
        queued: Vec<VisibilityChange>,
    }

    impl ObservableViewport for ScriptedViewport {
        fn subscribe(&mut self, element_id: &str) {
            self.subscribed.push(element_id.to_owned());
        }

        fn drain_events(&mut self) -> Vec<VisibilityChange> {
            std::mem::take(&mut self.queued)
        }
    }

    fn change(id: &str, visible: bool) -> VisibilityChange {
        VisibilityChange {
            element_id: id.into(),
            visible,
        }
    }

    fn rect(id: &str, top: f32, bottom: f32) -> ElementRect {
        ElementRect {
            id: id.into(),
            top,
            bottom,
        }
    }

    #[test]
    fn starts_on_tutorial_with_first_section() {
        let shell = ShellState::new(Some("introduction"));
        assert_eq!(shell.current_view(), View::Tutorial);
        assert_eq!(shell.active_section_id(), Some("introduction"));
        assert_eq!(shell.scroll_target(), None);
    }

    #[test]
    fn visible_section_becomes_active() {
        let mut shell = ShellState::new(Some("introduction"));
        let mut viewport = ScriptedViewport::default();
        viewport.subscribe("basics");
        viewport.queued = vec![change("introduction", false), change("basics", true)];
        shell.sync_from(&mut viewport);
        assert_eq!(shell.active_section_id(), Some("basics"));
        assert!(viewport.drain_events().is_empty());
    }

    #[test]
    fn visibility_ignored_outside_tutorial() {
        let mut shell = ShellState::new(Some("introduction"));
        shell.show(View::Quiz);
        shell.apply_visibility(vec![change("classes", true)]);
        assert_eq!(shell.active_section_id(), Some("introduction"));
    }

    #[test]
    fn go_to_section_switches_view_and_requests_scroll() {
        let mut shell = ShellState::new(Some("introduction"));
        shell.show(View::Assistant);
        shell.go_to_section("classes");
        assert_eq!(shell.current_view(), View::Tutorial);
        assert_eq!(shell.active_section_id(), Some("classes"));

        // Mientras el scroll no se aplica, la visibilidad no pisa la selección
        shell.apply_visibility(vec![change("introduction", true)]);
        assert_eq!(shell.active_section_id(), Some("classes"));

        assert_eq!(shell.take_scroll_target().as_deref(), Some("classes"));
        assert_eq!(shell.take_scroll_target(), None);
        shell.apply_visibility(vec![change("advanced-example", true)]);
        assert_eq!(shell.active_section_id(), Some("advanced-example"));
    }

    #[test]
    fn band_uses_margins() {
        let margins = ViewportMargins::default();
        let (top, bottom) = margins.band(0.0, 1000.0);
        assert!((top - 200.0).abs() < 1e-3);
        assert!((bottom - 200.0).abs() < 1e-3);

        let wide = ViewportMargins { top: 0.0, bottom: 0.0 };
        assert_eq!(wide.band(100.0, 600.0), (100.0, 600.0));
    }

    #[test]
    fn section_viewport_emits_only_changes() {
        let mut viewport = SectionViewport::new(ViewportMargins::default());
        viewport.subscribe("a");
        viewport.subscribe("b");
        viewport.subscribe("a");

        // Franja en y = 200
        viewport.measure(0.0, 1000.0, &[rect("a", 0.0, 500.0), rect("b", 500.0, 1200.0)]);
        assert_eq!(viewport.drain_events(), vec![change("a", true)]);

        viewport.measure(0.0, 1000.0, &[rect("a", -10.0, 490.0), rect("b", 490.0, 1190.0)]);
        assert!(viewport.drain_events().is_empty());

        // Tras hacer scroll, "b" cruza la franja
        viewport.measure(0.0, 1000.0, &[rect("a", -400.0, 100.0), rect("b", 100.0, 800.0)]);
        assert_eq!(viewport.drain_events(), vec![change("a", false), change("b", true)]);
    }

    #[test]
    fn unsubscribed_elements_are_ignored() {
        let mut viewport = SectionViewport::new(ViewportMargins::default());
        viewport.subscribe("a");
        viewport.measure(0.0, 100.0, &[rect("otro", 0.0, 100.0)]);
        assert!(viewport.drain_events().is_empty());
    }
}
