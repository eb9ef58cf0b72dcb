// src/ui/helpers.rs
use egui::{Color32, Frame, Margin, RichText, Sense, Spinner, Ui, vec2};

pub fn loading_placeholder(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label("Loading chart data...");
        ui.add_space(40.0);
    });
}

/// Placeholder de "nada seleccionado", con el texto de ayuda de cada panel.
pub fn empty_placeholder(ui: &mut Ui, icon: &str, subtext: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(RichText::new(icon).size(32.0).weak());
        ui.add_space(8.0);
        ui.label(RichText::new("No categories selected").strong());
        ui.label(RichText::new(subtext).weak());
        ui.add_space(32.0);
    });
}

/// Fila de leyenda (muestra de color + texto). Devuelve si el puntero está
/// encima, para sincronizar el hover con el gráfico.
pub fn legend_row(ui: &mut Ui, color: Color32, text: &str, highlighted: bool) -> bool {
    let fill = if highlighted {
        ui.visuals().widgets.hovered.weak_bg_fill
    } else {
        Color32::TRANSPARENT
    };

    let row = Frame::default()
        .fill(fill)
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(6, 3))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(swatch, 3.0, color);
                let label = RichText::new(text);
                ui.label(if highlighted { label.strong() } else { label });
            });
        });

    row.response.contains_pointer()
}
