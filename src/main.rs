use ac_completeness_runner::{config::Config, pipeline};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ac_completeness_runner=info".parse()?),
        )
        .init();

    let config = Config::load()?;
    tracing::info!(url = %config.base_url, "Starting completeness run");

    let summary = pipeline::run(&config)?;
    tracing::info!(
        documents = summary.documents,
        bytes = summary.response_bytes,
        output = %summary.output_path.display(),
        "Run finished"
    );

    Ok(())
}
