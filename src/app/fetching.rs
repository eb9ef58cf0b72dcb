use super::*;
use crate::source::fetch_questions;
use std::sync::mpsc::{self, TryRecvError};

impl DashboardApp {
    /// Lanza la petición pendiente, si la hay. Nunca hay dos en vuelo.
    pub fn launch_pending_fetch(&mut self, ctx: &egui::Context) {
        if !self.fetch_requested || self.fetch_rx.is_some() {
            return;
        }
        self.fetch_requested = false;

        let (tx, rx) = mpsc::channel::<FetchOutcome>();
        self.fetch_rx = Some(rx);
        let config = self.config.clone();
        let ctx = ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let outcome = fetch_questions(&config);
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_questions(&config).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Recoge el resultado (si ya llegó) y lo convierte en `FetchCompleted`.
    pub fn poll_fetch(&mut self) {
        let outcome = match self.fetch_rx.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(outcome)) => outcome,
            Some(Err(TryRecvError::Disconnected)) => Err(FetchError::Transport(
                "fetch worker ended without a result".into(),
            )),
        };
        self.fetch_rx = None;
        self.dispatch(DashboardEvent::FetchCompleted(outcome));
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        self.fetch_rx.is_some()
    }
}
