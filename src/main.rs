use noor_interiors::config::AppConfig;
use noor_interiors::init_tracing;
use noor_interiors::server::start_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    start_server(config).await?;
    Ok(())
}
