use clap::{Parser, Subcommand};
use hubpack::{
    commands::{build, package, pipeline_json, plugin_json, show_config, spec_json},
    common::init_tracing,
    GlobalOpts,
};
use hubpack_logger as logger;

#[derive(Parser)]
#[command(name = "hubpack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plugin hub descriptor compiler",
    long_about = "hubpack compiles plugin widgets, docs and icons into hub descriptors and stages hub packages."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate docs, widgets and icons into <artifactId>-<version>.json
    PluginJson,
    /// Write spec.json describing the installable action
    SpecJson,
    /// Extract the config of an exported pipeline into <artifactId>-<version>.json
    PipelineJson,
    /// Stage built artifacts and icons for the hub
    Package,
    /// Run the manifest, spec and package goals in order
    Build,
    /// Print the resolved build configuration
    ShowConfig,
}

fn main() {
    let cli = Cli::parse();
    let verbosity = cli.global.verbosity_level();

    if let Err(e) = logger::init_with_verbosity(verbosity) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing(verbosity);

    let config = match cli.global.load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::error(&format!("Failed to load config: {}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::PluginJson => plugin_json::handle_plugin_json(&config).map(|_| ()),
        Commands::SpecJson => spec_json::handle_spec_json(&config).map(|_| ()),
        Commands::PipelineJson => pipeline_json::handle_pipeline_json(&config).map(|_| ()),
        Commands::Package => package::handle_package(&config).map(|_| ()),
        Commands::Build => build::handle_build(&config),
        Commands::ShowConfig => {
            show_config::handle_show_config(&config);
            Ok(())
        }
    };

    if let Err(e) = result {
        logger::error(&format!("{:#}", e));
        if verbosity > 0 {
            logger::show_log_path();
        }
        std::process::exit(1);
    }
}
