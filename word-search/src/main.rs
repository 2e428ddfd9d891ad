//! Binary entry point for the word search reporter.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use word_search::{Dependencies, ReportingError};

/// Default result-size cap when none is given on the command line.
const DEFAULT_SIZE: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), ReportingError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let (key, value, size) = parse_args(&args)?;

    let deps = Dependencies::new().await?;

    info!(key = %key, value = %value, size = size, "Running query");
    deps.reporter.run(&key, value, size).await?;

    Ok(())
}

/// Parse `<key> <value> [size]` from the command line.
fn parse_args(args: &[String]) -> Result<(String, String, u32), ReportingError> {
    match args {
        [_, key, value] => Ok((key.clone(), value.clone(), DEFAULT_SIZE)),
        [_, key, value, size] => {
            let size = size
                .parse::<u32>()
                .map_err(|e| ReportingError::config(format!("Invalid size '{}': {}", size, e)))?;
            Ok((key.clone(), value.clone(), size))
        }
        _ => Err(ReportingError::config(
            "Usage: word-search <key> <value> [size]",
        )),
    }
}
