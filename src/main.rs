use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use techtales_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::RequestIdMiddleware,
    services::{image_retention::ImageRetention, image_service::STATIC_URL_PREFIX},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate().map_err(std::io::Error::other)?;

    std::fs::create_dir_all(&config.static_dir)?;

    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;
    if let Err(e) = state.warm_up().await {
        log::warn!("Model warm-up failed, requests will fail until the backend is up: {}", e);
    }

    let retention = config.image_retention().map(|max_age| {
        ImageRetention::new(
            config.static_dir.clone(),
            max_age,
            std::time::Duration::from_secs(config.retention_sweep_interval_secs),
        )
        .spawn()
    });

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    let data = web::Data::new(state.clone());
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .configure(handlers::configure)
            .service(actix_files::Files::new(STATIC_URL_PREFIX, &static_dir))
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await?;

    if let Some(handle) = retention {
        handle.abort();
    }
    state.shutdown().await;
    log::info!("Server stopped");

    Ok(())
}
