mod charts;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::DashboardApp;
use eframe::{App, Frame};
use egui::{CentralPanel, Context, ScrollArea, SidePanel};
use layout::{bottom_panel, top_panel};

impl App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // La petición inicial (o una recarga) se lanza desde el bucle de frames
        self.launch_pending_fetch(ctx);
        self.poll_fetch();

        let mut events = Vec::new();
        let focus_search = self.picker.take_focus_request();
        let app = &*self;

        top_panel(app, ctx, &mut events);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        SidePanel::left("categories_panel")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                views::category_select::ui_category_select(app, ui, focus_search, &mut events);
            });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                views::snapshot::ui_snapshot(app, ui, &mut events);
                ui.add_space(16.0);
                views::difficulty::ui_difficulty(app, ui, &mut events);
            });
        });

        self.dispatch_all(events);
    }
}
