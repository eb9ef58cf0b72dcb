use super::*;

impl DashboardApp {
    /// Pide una recarga. Los ids de categoría del ciclo anterior dejan de
    /// valer, así que se descarta todo lo que dependa de ellos.
    pub fn request_reload(&mut self) {
        if self.loading || self.is_fetch_in_flight() {
            log::warn!("reload ignored: a fetch is already in flight");
            return;
        }

        self.dataset = Dataset::default();
        self.selected = Selection::new();
        self.picker = CategoryPicker::default();
        self.hover = HoverState::default();
        self.loading = true;
        self.fetch_requested = true;
    }
}
