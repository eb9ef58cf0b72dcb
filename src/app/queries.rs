use super::*;
use crate::pipeline::{aggregate_by_category, aggregate_by_difficulty, filter_questions};

impl DashboardApp {
    pub fn filtered_questions(&self) -> Vec<&Question> {
        filter_questions(
            &self.dataset.questions,
            &self.dataset.categories,
            &self.selected,
        )
    }

    pub fn category_data(&self) -> Vec<CategoryAggregate> {
        aggregate_by_category(&self.filtered_questions())
    }

    pub fn difficulty_data(&self) -> [DifficultyAggregate; 3] {
        aggregate_by_difficulty(&self.filtered_questions())
    }

    pub fn chart_state(&self) -> ChartState {
        ChartState::from_flags(self.loading, self.selected.is_empty())
    }

    pub fn picker_summary(&self) -> String {
        self.picker.summary(&self.dataset.categories, self.loading)
    }
}
