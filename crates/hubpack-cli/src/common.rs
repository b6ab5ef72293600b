//! Common types and utilities shared across commands

use clap::Parser;
use hubpack_config::BuildConfig;
use hubpack_logger as logger;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Decrease verbosity")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug, -vv for trace)")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Build config file (default: $HUBPACK_CONFIG or ./hubpack.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_name = "DIR", help = "Override the build directory")]
    pub build_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Treat the artifact as a pipeline")]
    pub pipeline: bool,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    /// - 2: trace (-vv)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Load the build config and apply command-line overrides
    pub fn load_config(&self) -> anyhow::Result<BuildConfig> {
        let path = BuildConfig::path(self.config.as_deref());
        logger::debug(&format!("Reading config from: {}", path.display()));

        let mut config = BuildConfig::load(&path)?;
        if let Some(ref build_dir) = self.build_dir {
            config.build_directory = build_dir.clone();
        }
        if self.pipeline {
            config.is_pipeline = true;
        }
        Ok(config)
    }
}

/// Route library `tracing` events to stderr
///
/// `RUST_LOG` wins; otherwise the level follows the CLI verbosity.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing_level(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Default `tracing` level for a CLI verbosity, matching the logger levels
pub fn tracing_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
