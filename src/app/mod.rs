use crate::config::SourceConfig;
use crate::model::{Dataset, Difficulty, Question};
use crate::source::FetchError;
use eframe::egui;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod fetching;
pub mod picker;
pub mod queries;
pub mod resets;

pub use picker::{CategoryPicker, PickerEvent, PickerMode, Selection};
pub use crate::view_models::{CategoryAggregate, ChartState, DifficultyAggregate};

pub type FetchOutcome = Result<Vec<Question>, FetchError>;

/// Clave de hover compartida entre cada gráfico y su leyenda.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug)]
pub enum DashboardEvent {
    Picker(PickerEvent),
    FetchCompleted(FetchOutcome),
    HoverCategory(Option<String>),
    HoverDifficulty(Option<Difficulty>),
    Reload,
}

/// Estado de primer nivel del dashboard. Solo cambia a través de
/// [`DashboardApp::dispatch`]; las vistas lo leen y devuelven eventos.
pub struct DashboardApp {
    pub config: SourceConfig,
    pub dataset: Dataset,
    pub selected: Selection,
    pub loading: bool,
    pub picker: CategoryPicker,
    pub hover: HoverState,
    fetch_requested: bool,
    fetch_rx: Option<Receiver<FetchOutcome>>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_config(SourceConfig::resolve())
    }

    /// Estado inicial: cargando, con la primera petición pendiente de lanzar
    /// en el siguiente frame.
    pub fn with_config(config: SourceConfig) -> Self {
        log::info!("trivia source: {}", config.request_url());
        Self {
            config,
            dataset: Dataset::default(),
            selected: Selection::new(),
            loading: true,
            picker: CategoryPicker::default(),
            hover: HoverState::default(),
            fetch_requested: true,
            fetch_rx: None,
        }
    }

    pub fn is_fetch_requested(&self) -> bool {
        self.fetch_requested
    }
}
