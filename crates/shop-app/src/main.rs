use shop_hex::application::product_service::ProductService;
use shop_hex::application::user_service::UserService;
use shop_hex::config::Config;
use shop_hex::inbound::http::{HttpServer, HttpServerConfig};
use shop_repo::{build_repo, Repo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / PORT when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    let repo: Repo = build_repo(config.database_url.as_deref()).await?;
    tracing::debug!(database_url = ?config.database_url, "repository ready");

    let server_cfg = HttpServerConfig {
        port: config.server_port,
    };

    let http = HttpServer::new(
        UserService::new(repo.clone()),
        ProductService::new(repo),
        server_cfg,
    )
    .await?;
    http.run().await
}
