mod config;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if let Some(dev) = &config.dev_session {
        tracing::warn!(user = %dev.user_name, project = %dev.project_id, "development session enabled");
    }

    let addr = config.addr();
    let app = routes::app(config).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "tabshell listening");
    axum::serve(listener, app).await.expect("server failed");
}
