use super::*;
use crate::data::derive_categories;

impl DashboardApp {
    /// Único punto de entrada para mutar el estado. Cada evento deja un
    /// estado completo nuevo; no hay cambios a medias.
    pub fn dispatch(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Picker(picker_event) => {
                let mut emitted = None;
                self.picker
                    .handle(picker_event, &self.dataset.categories, |selection| {
                        emitted = Some(selection.clone())
                    });
                if let Some(selection) = emitted {
                    self.on_selection_changed(selection);
                }
            }
            DashboardEvent::FetchCompleted(outcome) => self.apply_fetch_outcome(outcome),
            DashboardEvent::HoverCategory(key) => self.hover.category = key,
            DashboardEvent::HoverDifficulty(key) => self.hover.difficulty = key,
            DashboardEvent::Reload => self.request_reload(),
        }
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = DashboardEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn on_selection_changed(&mut self, selection: Selection) {
        log::debug!("selected categories: {selection:?}");
        self.selected = selection;
    }

    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(questions) => {
                let categories = derive_categories(&questions);
                log::info!(
                    "loaded {} questions in {} categories",
                    questions.len(),
                    categories.len()
                );
                self.dataset = Dataset {
                    questions,
                    categories,
                };
            }
            Err(err) => {
                // Sin mensaje en pantalla: el dashboard se queda vacío
                log::error!("Failed to load trivia data: {err}");
                self.dataset = Dataset::default();
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn loaded_app() -> DashboardApp {
        let mut app = DashboardApp::with_config(SourceConfig::default());
        app.dispatch(DashboardEvent::FetchCompleted(Ok(vec![
            Question::new("Sports", "easy"),
            Question::new("Art", "hard"),
            Question::new("Sports", "medium"),
        ])));
        app
    }

    #[test]
    fn successful_fetch_derives_categories() {
        let app = loaded_app();
        assert!(!app.loading);
        assert_eq!(app.dataset.questions.len(), 3);
        let names: Vec<(u32, &str)> = app
            .dataset
            .categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "Sports"), (2, "Art")]);
    }

    #[test]
    fn failed_fetch_clears_loading_and_stays_empty() {
        let mut app = DashboardApp::with_config(SourceConfig::default());
        app.dispatch(DashboardEvent::FetchCompleted(Err(FetchError::MissingResults)));
        assert!(!app.loading);
        assert!(app.dataset.is_empty());
        assert!(app.dataset.categories.is_empty());
    }

    #[test]
    fn picker_emissions_replace_selection() {
        let mut app = loaded_app();
        app.dispatch(DashboardEvent::Picker(PickerEvent::ToggleCategory(2)));
        assert_eq!(app.selected, Selection::from([2]));
        app.dispatch(DashboardEvent::Picker(PickerEvent::ToggleSelectAll));
        assert_eq!(app.selected, Selection::from([1, 2]));
        app.dispatch(DashboardEvent::Picker(PickerEvent::ToggleSelectAll));
        assert!(app.selected.is_empty());
    }

    #[test]
    fn ui_only_events_keep_selection() {
        let mut app = loaded_app();
        app.dispatch(DashboardEvent::Picker(PickerEvent::ToggleCategory(1)));
        app.dispatch_all([
            DashboardEvent::Picker(PickerEvent::ToggleOpen),
            DashboardEvent::Picker(PickerEvent::SearchChanged("a".into())),
            DashboardEvent::HoverCategory(Some("Sports".into())),
            DashboardEvent::Picker(PickerEvent::ClickOutside),
        ]);
        assert_eq!(app.selected, Selection::from([1]));
        assert_eq!(app.hover.category.as_deref(), Some("Sports"));
        assert!(!app.picker.is_open());
    }
}
