use crate::app::{DashboardApp, DashboardEvent, PickerEvent};
use egui::{Area, Button, Frame, Id, Order, RichText, ScrollArea, TextEdit, Ui, vec2};

/// Botón + desplegable de categorías. No muta nada: todo sale como eventos.
pub fn ui_category_select(
    app: &DashboardApp,
    ui: &mut Ui,
    focus_search: bool,
    events: &mut Vec<DashboardEvent>,
) {
    let mut emit = |event: PickerEvent| events.push(DashboardEvent::Picker(event));

    let width = ui.available_width();
    let button = ui.add_enabled(
        !app.loading,
        Button::new(format!("{}  ⏷", app.picker_summary())).min_size(vec2(width, 36.0)),
    );
    if button.clicked() {
        emit(PickerEvent::ToggleOpen);
    }

    if !app.picker.is_open() {
        return;
    }

    let categories = &app.dataset.categories;
    let dropdown = Area::new(Id::new("category_dropdown"))
        .order(Order::Foreground)
        .fixed_pos(button.rect.left_bottom() + vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(width);

                let mut search = app.picker.search_text().to_owned();
                let search_resp = ui.add(
                    TextEdit::singleline(&mut search)
                        .hint_text("🔍 Search categories...")
                        .desired_width(f32::INFINITY),
                );
                if focus_search {
                    search_resp.request_focus();
                }
                if search_resp.changed() {
                    emit(PickerEvent::SearchChanged(search));
                }

                ui.separator();
                let mut all = app.picker.is_all_selected(categories);
                if ui.checkbox(&mut all, "All Categories").clicked() {
                    emit(PickerEvent::ToggleSelectAll);
                }
                ui.separator();

                let options = app.picker.visible_options(categories);
                if options.is_empty() {
                    ui.label(RichText::new("No categories found").weak());
                    return;
                }
                ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for category in options {
                        let mut checked = app.picker.selected().contains(&category.id);
                        if ui.checkbox(&mut checked, category.name.as_str()).clicked() {
                            emit(PickerEvent::ToggleCategory(category.id));
                        }
                    }
                });
            });
        });

    // Un click fuera del botón y del desplegable lo cierra
    let dropdown_rect = dropdown.response.rect;
    let pressed_outside = ui.input(|i| {
        i.pointer.any_pressed()
            && i.pointer
                .press_origin()
                .is_some_and(|pos| !dropdown_rect.contains(pos) && !button.rect.contains(pos))
    });
    if pressed_outside {
        emit(PickerEvent::ClickOutside);
    }
}
