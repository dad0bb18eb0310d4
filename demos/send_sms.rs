use std::io;
use std::sync::Arc;

use msmaz::{SendConfig, SmsSender, SqliteSmsLog};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SendConfig::from_env()?;
    let phone = std::env::var("MSMAZ_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSMAZ_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("MSMAZ_MESSAGE")
        .unwrap_or_else(|_| "Hello from the msmaz demo.".to_owned());

    let mut builder = SmsSender::builder(config.clone());
    if config.logging {
        let url = std::env::var("MSMAZ_LOG_DATABASE")
            .unwrap_or_else(|_| "sqlite://msmaz-log.db?mode=rwc".to_owned());
        let log = SqliteSmsLog::connect(&url).await?;
        log.migrate().await?;
        builder = builder.log_store(Arc::new(log));
    }
    let sender = builder.build()?;

    match sender.send(phone, message).await {
        Ok(()) => println!("sent"),
        Err(err) if err.is_not_sent() => println!("not sent: {err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
