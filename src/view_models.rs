// src/view_models.rs

use crate::model::Difficulty;
use egui::Color32;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAggregate {
    pub name: String,
    pub count: usize,
    pub percentage: u32, // 0..=100, redondeado por separado
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyAggregate {
    pub difficulty: Difficulty,
    pub count: usize,
    pub color: Color32,
}

impl CategoryAggregate {
    pub fn tooltip(&self) -> String {
        format!(
            "{}\n{} questions ({}%)",
            self.name, self.count, self.percentage
        )
    }
}

impl DifficultyAggregate {
    pub fn label(&self) -> String {
        format!("{}: {} questions", self.difficulty.label(), self.count)
    }
}

/// Qué pinta cada panel de gráfico. El placeholder vacío depende de la
/// selección, no de cuántas preguntas queden tras filtrar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    Loading,
    NothingSelected,
    Ready,
}

impl ChartState {
    pub fn from_flags(loading: bool, nothing_selected: bool) -> Self {
        if loading {
            ChartState::Loading
        } else if nothing_selected {
            ChartState::NothingSelected
        } else {
            ChartState::Ready
        }
    }
}
