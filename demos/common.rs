use std::io;

use caih_sms::GatewayClient;
use tracing_subscriber::EnvFilter;

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// Install logging and build a client from `CAIH_TOKEN`, `CAIH_CHANNEL_KEY`
/// and the optional `CAIH_BASE_URL`.
pub fn client_from_env() -> Result<GatewayClient, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = GatewayClient::builder()
        .token(required_env("CAIH_TOKEN")?)
        .channel_key(required_env("CAIH_CHANNEL_KEY")?);
    if let Ok(base_url) = std::env::var("CAIH_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    Ok(builder.build()?)
}
