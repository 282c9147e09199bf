use std::net::TcpListener;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use matchday_backend::config::settings::{get_config, get_jwt_settings};
use matchday_backend::run;
use matchday_backend::services::SchedulerService;
use matchday_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "matchday-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let jwt_settings = get_jwt_settings(&config);

    // Only try to establish a connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;

    let scheduler = match SchedulerService::new(connection_pool.clone()).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create scheduler: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start scheduler: {}", e);
        std::process::exit(1);
    }

    run(listener, connection_pool, jwt_settings)?.await
}
