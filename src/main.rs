// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Renders the Deployment for a Designate role resource.
//!
//! Usage:
//!   designate-render --role producer --file producer.yaml [--config-hash abc123] [--output json]
//!
//! Image defaults come from `DESIGNATE_<ROLE>_IMAGE_URL_DEFAULT`.

use anyhow::{Context, Result};
use clap::Parser;
use designate_operator::defaults::DesignateDefaults;
use designate_operator::render::{render_file, to_output, OutputFormat};
use designate_operator::role::Role;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "designate-render", version, about = "Render Designate role Deployments")]
struct Cli {
    /// Designate role: api, central, mdns, producer or worker
    #[arg(long)]
    role: Role,

    /// YAML file containing the role resource
    #[arg(long)]
    file: PathBuf,

    /// Config hash to embed; computed from the spec when omitted
    #[arg(long)]
    config_hash: Option<String>,

    /// Output format: yaml or json
    #[arg(long, default_value = "yaml")]
    output: OutputFormat,
}

fn init_logging() {
    // Respects RUST_LOG, defaulting to INFO. RUST_LOG_FORMAT=json switches to JSON lines.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Resolved once; everything downstream borrows it.
    let defaults = Arc::new(DesignateDefaults::from_env());
    debug!(?defaults, "Resolved Designate image defaults");

    info!(role = %cli.role, file = %cli.file.display(), "Rendering Designate Deployment");

    let deployment = render_file(cli.role, &cli.file, cli.config_hash.as_deref(), &defaults)
        .with_context(|| format!("rendering {} from {}", cli.role, cli.file.display()))?;

    println!("{}", to_output(&deployment, cli.output)?);
    Ok(())
}
