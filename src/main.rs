use agent_manager::agents::schema::{example_payload, update_payload_schema};
use agent_manager::agents::PayloadCodec;
use agent_manager::cli::{Cli, Command};
use agent_manager::config::Settings;
use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_max_level(settings.logging.max_level().unwrap_or(tracing::Level::INFO))
        .with_writer(std::io::stderr)
        .init();

    let codec = PayloadCodec::new(settings.decoder.clone());

    match &cli.command {
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&update_payload_schema())?);
        }
        Command::Example => {
            println!("{}", codec.encode(&example_payload())?);
        }
        Command::Check { file } => {
            let body = read_body(file)?;
            match codec.decode(&body) {
                Ok(payload) if payload.is_empty() => {
                    info!("{}: valid, no fields set", file.display());
                }
                Ok(payload) => {
                    info!(
                        "{}: valid, sets {}",
                        file.display(),
                        payload.present_fields().join(", ")
                    );
                }
                Err(e) => {
                    error!("{}: {}", file.display(), e);
                    anyhow::bail!("payload rejected");
                }
            }
        }
        Command::Normalize { file } => {
            let body = read_body(file)?;
            let payload = codec
                .decode(&body)
                .with_context(|| format!("Failed to decode {}", file.display()))?;
            println!("{}", codec.encode(&payload)?);
        }
    }

    Ok(())
}

fn read_body(file: &Path) -> anyhow::Result<Vec<u8>> {
    if file == Path::new("-") {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("Failed to read payload from stdin")?;
        Ok(body)
    } else {
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
    }
}
