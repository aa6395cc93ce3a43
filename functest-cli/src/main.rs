use anyhow::{Context, Result};
use functest_cli::{report, runner};
use functest_config::ConfigLoader;
use functest_http::ApiClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

/// Run the full registry; returns whether every case passed.
async fn run() -> Result<bool> {
    // no CLI arguments: the optional config file path comes from the
    // environment, everything else from FUNCTEST_* overrides or defaults
    let config_path = std::env::var("FUNCTEST_CONFIG").ok().map(PathBuf::from);
    let config = ConfigLoader::new()
        .load(config_path.as_ref())
        .context("failed to load configuration")?;
    info!("targeting API at {}", config.api_root);

    let client = ApiClient::new(&config.http).context("failed to build HTTP client")?;
    let cases = functest_cases::registry();

    println!("Testing ({} total):", cases.len());
    let run_report = runner::run(&client, &config, cases).await?;

    println!();
    print!("{}", report::summary(&run_report));
    if run_report.any_failed() {
        print!("{}", report::failures(&run_report));
        return Ok(false);
    }
    Ok(true)
}
