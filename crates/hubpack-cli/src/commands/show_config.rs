use colored::Colorize;
use hubpack_config::BuildConfig;

/// Print the resolved build configuration
pub fn handle_show_config(config: &BuildConfig) {
    println!("{}", "Configuration:".bold().green());
    for (key, value) in config.values_iter() {
        println!("  {}: {}", key.cyan(), value);
    }
}
