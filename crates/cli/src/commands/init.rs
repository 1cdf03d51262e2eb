//! `parley init` — Write a default configuration file.

use std::path::Path;

use parley_config::AppConfig;

pub fn run(config_path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    AppConfig::write_default(config_path, force)?;

    println!("Created config at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Add your api_key to the file (or export OPENAI_API_KEY)");
    println!("  2. Run: parley chat");

    Ok(())
}
