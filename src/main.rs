use beberagua::{events, resolve_data_dir, router, AppState, LedgerStore, SettingsStore};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir()?;
    fs::create_dir_all(&data_dir).await?;

    let ledger_store = LedgerStore::new(&data_dir);
    let settings_store = SettingsStore::new(&data_dir);
    let ledger = ledger_store.load().await;
    let settings = settings_store.load().await.unwrap_or_default();

    let state = AppState::new(ledger_store, settings_store, ledger, settings.clone());
    state.scheduler.setup().await;
    state.scheduler.refresh(&settings).await;
    events::spawn_audio_listener(state.events.subscribe());

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
