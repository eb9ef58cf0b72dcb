#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use trivia_insights::DashboardApp;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting Trivia Data Insights");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trivia Data Insights",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}

// En WASM el punto de entrada es `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
