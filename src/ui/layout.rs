use crate::app::{DashboardApp, DashboardEvent};
use egui::{Align, Context, Frame, Layout, RichText, Ui, Visuals};

pub fn top_panel(app: &DashboardApp, ctx: &Context, events: &mut Vec<DashboardEvent>) {
    egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("Trivia Data Insights").strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let reload = ui
                    .add_enabled(!app.loading, egui::Button::new("⟲ Reload"))
                    .on_hover_text("Fetch a new batch of questions");
                if reload.clicked() {
                    events.push(DashboardEvent::Reload);
                }
            });
        });
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Tarjeta con título para cada gráfico.
pub fn section_frame(ui: &mut Ui, title: &str, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(16, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(10.0);
            inner(ui);
        });
}
