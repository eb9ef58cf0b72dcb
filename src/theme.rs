use crate::model::Difficulty;
use egui::Color32;

/// Paleta cíclica para las categorías (se asigna por orden de aparición).
pub const CHART_COLORS: [Color32; 12] = [
    Color32::from_rgb(0x8d, 0xd3, 0xc7), // teal claro
    Color32::from_rgb(0xff, 0xff, 0xb3), // amarillo claro
    Color32::from_rgb(0xbe, 0xba, 0xda),
    Color32::from_rgb(0xfb, 0x80, 0x72),
    Color32::from_rgb(0x80, 0xb1, 0xd3),
    Color32::from_rgb(0xfd, 0xb4, 0x62),
    Color32::from_rgb(0xb3, 0xb3, 0xb3),
    Color32::from_rgb(0xfc, 0xcd, 0xe5),
    Color32::from_rgb(0xd9, 0xd9, 0xd9),
    Color32::from_rgb(0xbc, 0x80, 0xbd),
    Color32::from_rgb(0xcc, 0xeb, 0xc5),
    Color32::from_rgb(0xff, 0xed, 0x6f),
];

pub fn category_color(index: usize) -> Color32 {
    CHART_COLORS[index % CHART_COLORS.len()]
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(0xa1, 0xe8, 0x87),
        Difficulty::Medium => Color32::from_rgb(0xff, 0xd9, 0x66),
        Difficulty::Hard => Color32::from_rgb(0xff, 0x6f, 0x69),
    }
}

/// Opacidad de los segmentos que no están resaltados.
pub const DIMMED_ALPHA: f32 = 0.5;

/// Con algo en hover, todo lo que no sea `key` se atenúa.
pub fn highlight<K: PartialEq + ?Sized>(color: Color32, hovered: Option<&K>, key: &K) -> Color32 {
    match hovered {
        Some(h) if h != key => color.gamma_multiply(DIMMED_ALPHA),
        _ => color,
    }
}
