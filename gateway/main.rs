//! MediSense gateway – HTTP surface over the simulated logistics
//! collaborators and the risk/explanation pipeline.

mod config;
mod handlers;
mod state;
mod telemetry;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use serde_json::json;

use crate::{config::GatewayConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = GatewayConfig::from_env();

    let state = web::Data::new(
        AppState::from_config(&config).context("wiring gateway application state")?,
    );
    if let Some(telemetry) = &state.telemetry {
        let _ = telemetry.event(
            "gateway.started",
            json!({
                "bind": config.bind,
                "externalGeneration": config.llm_api_key.is_some(),
            }),
        );
    }
    println!("MediSense gateway listening on http://{}", config.bind);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .route(
                "/api/logistics/status",
                web::get().to(handlers::status_handler),
            )
            .route(
                "/api/logistics/routes",
                web::get().to(handlers::routes_handler),
            )
            .route(
                "/api/logistics/fleet",
                web::get().to(handlers::fleet_handler),
            )
            .route(
                "/api/logistics/dispatch",
                web::post().to(handlers::dispatch_handler),
            )
            .route(
                "/api/logistics/analyze",
                web::post().to(handlers::analyze_handler),
            )
    })
    .bind(&config.bind)
    .with_context(|| format!("binding {}", config.bind))?
    .run()
    .await?;
    Ok(())
}
