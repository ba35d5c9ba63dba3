//! gridfill - fill missing values in CSV tables by averaging neighbors
//!
//! This is the main entry point for the gridfill application.

use tracing::info;

use gridfill::{log_error, Config, Result};

fn main() -> Result<()> {
    // Load configuration (clap reports argument errors on its own)
    let (config, input_file, output_file) = Config::load()?;

    // Validate configuration before doing any work
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    gridfill::init_tracing(&config.log_level);

    info!("Starting gridfill v{}", env!("CARGO_PKG_VERSION"));
    info!(
        input = %input_file.display(),
        output = %output_file.display(),
        "Running interpolation pipeline"
    );

    gridfill::pipeline::run(&config, &input_file, &output_file).map_err(|e| {
        log_error(&e, "pipeline");
        e
    })?;

    info!("Pipeline completed successfully");
    Ok(())
}
