//! Plugin Manager - discover installable plugins for a running host.
//!
//! Merges the plugins bundled with the host distribution and the builds
//! published by a CI server into one catalog and prints it.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use plugin_manager::core::{branch_for, view_name, Config};
use plugin_manager::{App, APP_NAME};

/// Discover installable plugins for a running host
#[derive(Parser)]
#[command(name = "plugin-manager")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Version of the running host
    #[arg(long, global = true, env = "PLUGIN_MANAGER_HOST_VERSION")]
    host_version: Option<String>,

    /// Distribution archive bundling the core plugins
    #[arg(long, global = true, value_name = "PATH")]
    archive: Option<PathBuf>,

    /// Base URL of the CI server
    #[arg(long, global = true, env = "PLUGIN_MANAGER_CI_URL")]
    ci_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the plugins available for the host
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the CI branch and view a host version maps to
    Branch {
        /// Host version, e.g. 3.5.1
        #[arg(value_name = "VERSION")]
        release: String,
    },

    /// Show the effective configuration
    Config {
        /// Show the config file path only
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::List { format } => {
            let config = load_config(cli.config.as_deref(), cli.host_version, cli.archive, cli.ci_url)?;
            cmd_list(config, format)?;
        }
        Commands::Branch { ref release } => {
            cmd_branch(release);
        }
        Commands::Config { path } => {
            let config = load_config(cli.config.as_deref(), cli.host_version, cli.archive, cli.ci_url)?;
            cmd_config(&config, cli.config.as_deref(), path)?;
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Load the configuration file and apply command line overrides.
fn load_config(
    path: Option<&Path>,
    host_version: Option<String>,
    archive: Option<PathBuf>,
    ci_url: Option<String>,
) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(version) = host_version {
        config.host.version = version;
    }
    if let Some(archive) = archive {
        config.host.archive = Some(archive);
    }
    if let Some(url) = ci_url {
        config.ci.url = url;
    }

    Ok(config)
}

/// List the merged plugin catalog.
fn cmd_list(config: Config, format: OutputFormat) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let app = App::new(config)?;
        app.start();

        let catalog = app.catalog().await?;

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(catalog.as_ref())?;
                println!("{json}");
            }
            OutputFormat::Text => {
                for plugin in catalog.iter() {
                    let version = if plugin.version.is_empty() { "-" } else { plugin.version.as_str() };
                    println!("{} {} - {}", plugin.name, version, plugin.description);
                }
                println!("\nTotal: {} plugins", catalog.len());
            }
        }

        Ok::<(), anyhow::Error>(())
    })
}

/// Show how a host version maps onto the CI server.
fn cmd_branch(version: &str) {
    println!("branch: {}", branch_for(version));
    println!("view:   {}", view_name(version));
}

/// Show configuration.
fn cmd_config(config: &Config, explicit: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        match explicit.map(Path::to_path_buf).or_else(Config::active_path) {
            Some(path) => println!("{}", path.display()),
            None => {
                if let Some(dir) = Config::config_dir() {
                    println!("{} (not present, using defaults)", dir.join("config.toml").display());
                }
            }
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, &mut io::stdout());
}
