use crate::app::{ChartState, DashboardApp, DashboardEvent};
use crate::theme::highlight;
use crate::ui::charts::nice_axis;
use crate::ui::helpers::{empty_placeholder, legend_row, loading_placeholder};
use crate::ui::layout::section_frame;
use egui::{Align2, CornerRadius, FontId, Rect, Sense, Stroke, Ui, pos2, vec2};

const CHART_HEIGHT: f32 = 260.0;
const AXIS_GUTTER: f32 = 36.0;
const LABEL_GUTTER: f32 = 24.0;

pub fn ui_difficulty(app: &DashboardApp, ui: &mut Ui, events: &mut Vec<DashboardEvent>) {
    section_frame(
        ui,
        "Distribution of Questions by Difficulty",
        |ui| match app.chart_state() {
            ChartState::Loading => loading_placeholder(ui),
            ChartState::NothingSelected => empty_placeholder(
                ui,
                "➚",
                "Select categories to view difficulty distribution",
            ),
            ChartState::Ready => ui_bars_with_legend(app, ui, events),
        },
    );
}

fn ui_bars_with_legend(app: &DashboardApp, ui: &mut Ui, events: &mut Vec<DashboardEvent>) {
    let data = app.difficulty_data();
    let hovered = app.hover.difficulty;
    let mut hover_now = None;

    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let grid_stroke = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
    let text_color = visuals.text_color();

    let plot = Rect::from_min_max(
        pos2(rect.left() + AXIS_GUTTER, rect.top() + 10.0),
        pos2(rect.right() - 10.0, rect.bottom() - LABEL_GUTTER),
    );

    // Eje Y: enteros, de 0 a un máximo redondo
    let max_count = data.iter().map(|d| d.count).max().unwrap_or(0);
    let (axis_max, step) = nice_axis(max_count);
    let y_for = |value: usize| plot.bottom() - plot.height() * value as f32 / axis_max as f32;
    for tick in (0..=axis_max).step_by(step) {
        let y = y_for(tick);
        painter.hline(plot.x_range(), y, grid_stroke);
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            FontId::proportional(12.0),
            text_color,
        );
    }

    let slot = plot.width() / data.len() as f32;
    let bar_width = (slot * 0.6).min(120.0);
    for (i, bucket) in data.iter().enumerate() {
        let center_x = plot.left() + slot * (i as f32 + 0.5);
        let bar = Rect::from_min_max(
            pos2(center_x - bar_width / 2.0, y_for(bucket.count)),
            pos2(center_x + bar_width / 2.0, plot.bottom()),
        );
        let color = highlight(bucket.color, hovered.as_ref(), &bucket.difficulty);
        painter.rect_filled(
            bar,
            CornerRadius {
                nw: 8,
                ne: 8,
                sw: 0,
                se: 0,
            },
            color,
        );
        painter.text(
            pos2(center_x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            bucket.difficulty.label(),
            FontId::proportional(14.0),
            text_color,
        );

        // Toda la columna cuenta como hover, no solo la barra
        let column = Rect::from_x_y_ranges(
            (center_x - slot / 2.0)..=(center_x + slot / 2.0),
            plot.y_range(),
        );
        if response.hover_pos().is_some_and(|pos| column.contains(pos)) {
            hover_now = Some(bucket.difficulty);
            painter.rect_filled(column, 0.0, visuals.widgets.hovered.weak_bg_fill.gamma_multiply(0.2));
            painter.text(
                pos2(center_x, bar.top() - 4.0),
                Align2::CENTER_BOTTOM,
                format!("{} questions", bucket.count),
                FontId::proportional(12.0),
                visuals.strong_text_color(),
            );
        }
    }

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for bucket in &data {
            let is_hovered = hovered == Some(bucket.difficulty);
            if legend_row(ui, bucket.color, &bucket.label(), is_hovered) {
                hover_now = Some(bucket.difficulty);
            }
        }
    });

    if hover_now != hovered {
        events.push(DashboardEvent::HoverDifficulty(hover_now));
    }
}
