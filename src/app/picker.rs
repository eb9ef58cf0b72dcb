use crate::model::{Category, CategoryId};
use std::collections::BTreeSet;

pub type Selection = BTreeSet<CategoryId>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PickerMode {
    #[default]
    Closed,
    Open {
        search: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    ToggleOpen,
    ClickOutside,
    ToggleSelectAll,
    ToggleCategory(CategoryId),
    SearchChanged(String),
}

/// Desplegable multi-selección de categorías.
///
/// La selección vive aquí; el dueño se entera de cada cambio por el callback
/// de [`CategoryPicker::handle`], que siempre recibe el conjunto completo.
#[derive(Clone, Debug, Default)]
pub struct CategoryPicker {
    mode: PickerMode,
    selected: Selection,
    focus_search: bool,
}

impl CategoryPicker {
    pub fn handle(
        &mut self,
        event: PickerEvent,
        categories: &[Category],
        mut on_change: impl FnMut(&Selection),
    ) {
        match event {
            PickerEvent::ToggleOpen => {
                self.mode = match self.mode {
                    PickerMode::Closed => {
                        self.focus_search = true;
                        PickerMode::Open {
                            search: String::new(),
                        }
                    }
                    PickerMode::Open { .. } => PickerMode::Closed,
                };
            }
            PickerEvent::ClickOutside => {
                if self.is_open() {
                    self.mode = PickerMode::Closed;
                }
            }
            PickerEvent::SearchChanged(text) => {
                if let PickerMode::Open { search } = &mut self.mode {
                    *search = text;
                }
            }
            PickerEvent::ToggleSelectAll => {
                self.selected = if self.is_all_selected(categories) {
                    Selection::new()
                } else {
                    categories.iter().map(|c| c.id).collect()
                };
                on_change(&self.selected);
            }
            PickerEvent::ToggleCategory(id) => {
                let mut updated = self.selected.clone();
                if !updated.remove(&id) {
                    updated.insert(id);
                }
                self.selected = updated;
                on_change(&self.selected);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.mode, PickerMode::Open { .. })
    }

    pub fn mode(&self) -> &PickerMode {
        &self.mode
    }

    pub fn search_text(&self) -> &str {
        match &self.mode {
            PickerMode::Open { search } => search,
            PickerMode::Closed => "",
        }
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// La selección cubre todas las categorías (y hay alguna).
    pub fn is_all_selected(&self, categories: &[Category]) -> bool {
        !categories.is_empty()
            && self.selected.len() == categories.len()
            && categories.iter().all(|c| self.selected.contains(&c.id))
    }

    /// Opciones visibles con la búsqueda actual. "Seleccionar todas" no
    /// depende de esto: siempre actúa sobre el conjunto completo.
    pub fn visible_options<'a>(&self, categories: &'a [Category]) -> Vec<&'a Category> {
        let needle = self.search_text().to_lowercase();
        categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn summary(&self, categories: &[Category], loading: bool) -> String {
        if loading {
            return "Loading...".to_string();
        }
        if self.is_all_selected(categories) {
            return "All Categories".to_string();
        }
        match self.selected.len() {
            0 => "Select Categories".to_string(),
            1 => self
                .selected
                .iter()
                .next()
                .and_then(|id| categories.iter().find(|c| c.id == *id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Select Categories".to_string()),
            n => format!("{n} selected"),
        }
    }

    /// El buscador pide foco una sola vez al abrir.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_search)
    }
}
