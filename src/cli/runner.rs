use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use docproc::{CommandFactory, ExtractionRequest, ExtractorConfig, run_extraction};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // Logs go to stderr so stdout stays clean for --print-request.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the folder and output paths given on the command line.
pub fn build_request(args: &CliArgs) -> docproc::Result<ExtractionRequest> {
    ExtractionRequest::resolve(
        &args.folder_path,
        &args.output_paths(),
        args.apply_pipeline(),
        args.valid_tasks.clone(),
    )
}

/// Config file (if any) with command-line overrides applied on top.
pub fn extractor_config(args: &CliArgs) -> docproc::Result<ExtractorConfig> {
    let mut config = match &args.extractor_config {
        Some(path) => {
            debug!("Loading extractor config from {:?}", path);
            ExtractorConfig::from_json_file(path)?
        }
        None => ExtractorConfig::default(),
    };

    if let Some(program) = &args.extractor {
        config.program = program.clone();
    }
    if !args.extractor_args.is_empty() {
        config.args = args.extractor_args.clone();
    }
    config.env.extend(args.extractor_env.iter().cloned());

    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let request = build_request(&args)?;

    if args.print_request {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let factory = CommandFactory::new(extractor_config(&args)?);
    run_extraction(&factory, request)?;
    info!("Extraction completed");

    Ok(())
}
