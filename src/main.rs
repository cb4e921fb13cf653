mod cli;

use encodeflow::{conductor, config};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use encodeflow_core::TranscodeProfile;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "encodeflow=trace,encodeflow_core=debug".to_string()
        } else {
            "encodeflow=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Assemble {
            request,
            job_id,
            pretty,
        } => assemble(&request, &job_id, pretty, cli.config.as_deref()),
        Commands::Capabilities => {
            let json = serde_json::to_string_pretty(&conductor::capabilities())?;
            println!("{}", json);
            Ok(())
        }
        Commands::Status { status } => {
            println!("{}", conductor::status_map(&status));
            Ok(())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate(path.as_deref())
        }
        Commands::Version => {
            println!("encodeflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_conductor_config(
    config_path: Option<&Path>,
) -> Result<config::ElementalConductorConfig> {
    let config = config::load_config_or_default(config_path)?;
    let section = config
        .elementalconductor
        .context("No [elementalconductor] section configured")?;
    conductor::validate_config(&section)?;
    Ok(section)
}

fn assemble(request: &Path, job_id: &str, pretty: bool, config_path: Option<&Path>) -> Result<()> {
    let section = load_conductor_config(config_path)?;

    let content = std::fs::read_to_string(request)
        .with_context(|| format!("Failed to read request file: {:?}", request))?;
    let profile: TranscodeProfile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file: {:?}", request))?;

    tracing::info!(
        "Assembling job {} from {} presets",
        job_id,
        profile.presets.len()
    );
    let job = conductor::assemble_job(job_id, &profile, &section)?;

    let json = if pretty {
        serde_json::to_string_pretty(&job)?
    } else {
        serde_json::to_string(&job)?
    };
    println!("{}", json);
    Ok(())
}

fn validate(config_path: Option<&Path>) -> Result<()> {
    let section = load_conductor_config(config_path)?;

    println!("Configuration is valid!");
    println!("  Host: {}", section.host);
    println!("  User: {}", section.user_login);
    println!("  Destination: {}", section.destination);
    Ok(())
}
