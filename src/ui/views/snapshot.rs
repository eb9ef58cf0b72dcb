use crate::app::{ChartState, DashboardApp, DashboardEvent};
use crate::theme::highlight;
use crate::ui::charts::{PADDING_ANGLE, donut_segments, paint_donut_segment, segment_at};
use crate::ui::helpers::{empty_placeholder, legend_row, loading_placeholder};
use crate::ui::layout::section_frame;
use egui::{Align2, FontId, RichText, Sense, Ui, vec2};

const OUTER_RADIUS: f32 = 90.0;
const INNER_RADIUS: f32 = 60.0;

pub fn ui_snapshot(app: &DashboardApp, ui: &mut Ui, events: &mut Vec<DashboardEvent>) {
    section_frame(ui, "Overall Trivia Snapshot", |ui| match app.chart_state() {
        ChartState::Loading => loading_placeholder(ui),
        ChartState::NothingSelected => empty_placeholder(
            ui,
            "🕘",
            "Select categories from the dropdown to view the distribution",
        ),
        ChartState::Ready => ui_donut_with_legend(app, ui, events),
    });
}

fn ui_donut_with_legend(app: &DashboardApp, ui: &mut Ui, events: &mut Vec<DashboardEvent>) {
    let data = app.category_data();
    let hovered = app.hover.category.as_deref();
    let mut hover_now: Option<String> = None;

    ui.horizontal_top(|ui| {
        let side = OUTER_RADIUS * 2.0 + 20.0;
        let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::hover());
        let center = rect.center();
        let painter = ui.painter_at(rect);

        let counts: Vec<usize> = data.iter().map(|c| c.count).collect();
        let segments = donut_segments(&counts, PADDING_ANGLE);
        for (segment, category) in segments.iter().zip(&data) {
            let color = highlight(category.color, hovered, category.name.as_str());
            paint_donut_segment(&painter, center, INNER_RADIUS, OUTER_RADIUS, *segment, color);
        }

        if let Some(pos) = response.hover_pos() {
            if let Some(idx) = segment_at(&segments, center, pos, INNER_RADIUS, OUTER_RADIUS) {
                hover_now = Some(data[idx].name.clone());
            }
        }

        // Tooltip dentro del hueco del donut
        if let Some(category) = hovered.and_then(|h| data.iter().find(|c| c.name == h)) {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                category.tooltip(),
                FontId::proportional(12.0),
                ui.visuals().strong_text_color(),
            );
        }

        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.label(RichText::new("Distribution of Questions by Category").strong());
            ui.add_space(6.0);
            for category in &data {
                let is_hovered = hovered == Some(category.name.as_str());
                if legend_row(ui, category.color, &category.name, is_hovered) {
                    hover_now = Some(category.name.clone());
                }
            }
        });
    });

    if hover_now.as_deref() != hovered {
        events.push(DashboardEvent::HoverCategory(hover_now));
    }
}
