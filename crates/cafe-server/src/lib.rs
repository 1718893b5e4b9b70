//! Ядро HTTP-сервиса кафе.

pub mod api;
pub mod config;
pub mod error;
pub mod services;


use api::AppState;
use cafe_migration::{Migrator, MigratorTrait};
use config::ServerConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Подключиться к БД и создать схему, если её ещё нет.
/// Повторный запуск на существующей БД данные не трогает.
pub async fn connect_database(
    options: impl Into<ConnectOptions>,
) -> anyhow::Result<DatabaseConnection> {
    let options = options.into();
    info!("Подключение к базе данных: {}", options.get_url());
    let db = Database::connect(options).await?;

    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Запустить сервис кафе.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 1. БД и схема
    let db = connect_database(config.db_url.as_str()).await?;

    // 2. Состояние приложения
    let state = AppState {
        db,
        api_key: config.api_key.clone(),
    };

    // 3. Маршрутизатор
    let app = api::build_router(state);

    // 4. Graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 5. Запуск сервера
    let addr: SocketAddr = config.listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Сервис кафе запущен на {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    info!("Сервис кафе остановлен");
    Ok(())
}
