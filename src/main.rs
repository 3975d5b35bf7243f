//! helpbin - post text to a pastebin from the command line.
//!
//! This binary exposes the pastebin backends used by the help plugin, which is
//! handy to check a configuration or a backend from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Post a file with the backend configured in `help.output`
//! helpbin --config config.yaml notes.txt
//!
//! # Post stdin to termbin
//! echo "hello" | helpbin --config config.yaml --backend termbin
//!
//! # List the available backends
//! helpbin --config config.yaml --list-backends
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `HELPBIN_*` - Configuration overrides, e.g. `HELPBIN_PASTE__TIMEOUT=5`

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use helpbin::{
    config::{Config, configure_prompt},
    paste::{BackendRegistry, Poster},
};
use log::{error, info};
use tokio::io::AsyncReadExt;

/// Command-line arguments of helpbin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Every section is optional, see the [`helpbin::config`] module for the
    /// expected format.
    #[arg(short, long)]
    config: String,

    /// Pastebin backend to use instead of `help.output`.
    #[arg(short, long)]
    backend: Option<String>,

    /// Print the available backends and exit.
    #[arg(short, long)]
    list_backends: bool,

    /// File to post. Reads stdin when omitted.
    file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("starting helpbin {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config file {}", &args.config))?;

    let registry = BackendRegistry::with_defaults(&config.paste)?;

    if args.list_backends {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let backend = args.backend.unwrap_or(config.help.output);
    if !registry.contains(&backend) {
        anyhow::bail!(
            "unknown pastebin backend `{}`. {}",
            backend,
            configure_prompt(&registry.names())
        );
    }

    let text = read_text(args.file.as_deref()).await?;

    let poster = Poster::new(registry);
    let url = poster.post(&backend, &text).await?;
    println!("{}", url.trim_end());

    Ok(())
}

async fn read_text(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path)),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
