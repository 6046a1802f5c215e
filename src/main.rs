use rusty_reading_log::{
    adapters::postgres::{
        PostgresCalendarStampRepository, PostgresCatalogRepository, PostgresMemberRepository,
        PostgresReadingRecordRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::reading_record::ServiceDependencies,
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // .envがあれば読み込む（なくてもよい）
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_reading_log=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    tracing::info!("Database URL: {}", config.database_url);

    // Initialize database connection pool
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Initialize adapters
    let service_deps = ServiceDependencies {
        member_repository: Arc::new(PostgresMemberRepository::new(pool.clone())),
        catalog_repository: Arc::new(PostgresCatalogRepository::new(pool.clone())),
        record_repository: Arc::new(PostgresReadingRecordRepository::new(pool.clone())),
        calendar_stamp_repository: Arc::new(PostgresCalendarStampRepository::new(pool)),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
