use actix_web::{App, HttpServer, middleware::Logger, web};
use caiyu::generator::http_client;
use caiyu::{AppState, Config, GeminiGenerator, GenerationClient, handlers};
use log::info;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let config = Config::from_env();

    let http = http_client(&config).map_err(std::io::Error::other)?;

    let generator = Arc::new(GeminiGenerator::new(http, &config));
    let client = GenerationClient::new(generator, &config);
    let state = web::Data::new(AppState::new(config.clone(), client));

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│        财语魔方 - 小红书理财文案助手        │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Server running at http://localhost:{port}");
    info!("Generation endpoint: {}", config.api_base_url);
    info!("Model: {}", config.model);
    info!(
        "API key: {}",
        if config.api_key.is_some() {
            "configured"
        } else {
            "MISSING (set CAIYU_API_KEY)"
        }
    );
    info!("Temperature: {}", config.temperature);
    info!("Top P: {}", config.top_p);
    match config.request_timeout_secs {
        Some(secs) => info!("Request timeout: {secs}s"),
        None => info!("Request timeout: none"),
    }
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(handlers::json_config())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
