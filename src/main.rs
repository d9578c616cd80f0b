use assetkeeper::{app, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "assetkeeper=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();
    tracing::info!(store = ?config.store, "opening asset store");
    let state = AppState::init(config)?;

    let session = state.inventory()?.current_user()?;
    match session {
        Some(user) => tracing::info!(user_id = user.id, username = %user.username, "session restored"),
        None => tracing::info!("no active session"),
    }

    app::serve(app::build_app(state), &addr).await
}
