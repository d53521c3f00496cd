use qrap_devserver::config::DevServerConfig;
use qrap_devserver::error::{DevServerError, DevServerResult};
use qrap_devserver::{proxy, telemetry};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("qrap-devserver failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> DevServerResult<()> {
    let config = DevServerConfig::from_env()?;
    telemetry::init_tracing(&config.log_level);

    let app = proxy::dashboard_router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| DevServerError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        addr = %config.addr,
        upstream = %config.api_url,
        dist = %config.dist_dir.display(),
        "qrap-devserver listening"
    );
    axum::serve(listener, app)
        .await
        .map_err(DevServerError::Serve)
}
