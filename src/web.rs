use crate::DashboardApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

const CANVAS_ID: &str = "trivia_insights_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #{CANVAS_ID} not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
            )
            .await;

        if let Err(err) = result {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
