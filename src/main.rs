use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod error;
mod model;
mod services;

use model::settings::Settings;
use services::pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let settings = Settings::default();

    match pipeline::run(&settings) {
        Ok(report) => {
            info!(
                input = %report.input.display(),
                output = %report.output.display(),
                rows = report.rows,
                records = report.records,
                "generated wordroot json"
            );
            info!(
                "remember to upload '{}' to the asset repository and make sure every audio/image file exists at {}",
                settings.output_file, settings.assets.base_url
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
