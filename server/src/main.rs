// server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use justo_server::config::AppConfig;
use justo_server::state::AppState;
use justo_server::{repositories, storage, web};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting Justo backend...");

  let app_config = AppConfig::from_env().context("loading configuration")?;
  let store = storage::connect(&app_config.database_url)
    .await
    .context("opening the document store")?;

  if app_config.seed_db {
    if let Err(e) = repositories::seed_catalog(store.as_ref()).await {
      tracing::error!(error = %e, "Failed to seed the catalog.");
    }
  }

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  let app_state = actix_data::Data::new(AppState::new(app_config, store));
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app(app_state.clone()))
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await?;

  tracing::info!("Server stopped.");
  Ok(())
}
