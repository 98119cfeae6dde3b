use eframe::egui;
use request_tester::app::fonts;
use request_tester::utils::logger;
use request_tester::{AppConfig, HttpQueryClient, RequestTesterApp};

fn main() -> eframe::Result {
    logger::init_gui_logger();

    let config = AppConfig::default();
    tracing::info!("Starting request-tester GUI");

    let client = match HttpQueryClient::with_timeout(config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ HTTP client init failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            fonts::install_cjk_fallback(&cc.egui_ctx);
            Ok(Box::new(RequestTesterApp::new(&config, client)))
        }),
    )
}
