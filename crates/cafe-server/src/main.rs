//! Точка входа сервиса кафе.

use cafe_server::config::{ServerConfig, DEFAULT_API_KEY};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cafe-server", about = "Cafe & Wifi API — каталог кафе для работы")]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:5000")]
    listen: String,

    /// URL базы данных
    #[arg(long, default_value = "sqlite:./cafes.db?mode=rwc", env = "DATABASE_URL")]
    db_url: String,

    /// Секрет для удаления кафе
    #[arg(long, env = "CAFE_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let api_key = cli.api_key.unwrap_or_else(|| {
        tracing::warn!("api-key не задан, используется значение по умолчанию (небезопасно!)");
        DEFAULT_API_KEY.to_string()
    });

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        api_key,
    };

    cafe_server::run(config).await
}
