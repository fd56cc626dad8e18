//! `hotpixels`: dither an image and print it on an ESC/POS thermal printer.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotpixels_lib::args::Args;
use hotpixels_lib::config::AppConfig;
use hotpixels_lib::services::pipeline;
use hotpixels_lib::services::printer::{self, FileTransport, LprTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    hotpixels_lib::load_dotenv();
    let args = Args::parse();

    let mut config = AppConfig::from_env();
    config.apply_args(&args);

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.json {
        let printers = printer::list_system_printers().await?;
        println!("{}", serde_json::to_string_pretty(&printers)?);
        return Ok(());
    }

    let image = match &args.image {
        Some(image) if config.output.is_some() || !config.printer.is_empty() => image,
        _ => {
            let printers = printer::list_system_printers().await.unwrap_or_else(|e| {
                tracing::warn!("Could not list printers: {e}");
                Vec::new()
            });
            print!("{}", hotpixels_lib::usage(&printers, config.dither_mode));
            return Ok(());
        }
    };

    match config.output.clone() {
        Some(path) => pipeline::print_image(image, &config, &FileTransport { path }).await?,
        None => pipeline::print_image(image, &config, &LprTransport::default()).await?,
    }

    tracing::info!("Done");
    Ok(())
}
