use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use chat_core::Config;
use recommender::RecommendationService;

use crate::controllers::{chat_controller, system_controller};

pub struct AppState {
    pub service: Arc<RecommendationService>,
}

const DEFAULT_WORKER_COUNT: usize = 10;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(chat_controller::config)
        .configure(system_controller::config);
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

pub async fn run(config: Config) -> Result<(), String> {
    info!("Starting web service...");

    let service = RecommendationService::from_config(&config)
        .map_err(|e| format!("Failed to initialize recommendation service: {e}"))?;
    let app_state = web::Data::new(AppState {
        service: Arc::new(service),
    });

    let allowed_origins = config.allowed_origins.clone();
    let port = config.port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&allowed_origins))
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
