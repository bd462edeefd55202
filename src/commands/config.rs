use crate::core::{
    config::WatchConfig, dirs::get_config_file, error::Result, print_info, print_section_header,
    print_success,
};
use std::path::Path;

/// Show the effective configuration; with `init`, write the defaults first
pub fn execute_config(init: bool) -> Result<()> {
    let config_file = get_config_file()?;
    show_config(&config_file, init)
}

fn show_config(config_file: &Path, init: bool) -> Result<()> {
    if init {
        if config_file.exists() {
            print_info(&format!(
                "Config already exists at {}",
                config_file.display()
            ));
        } else {
            WatchConfig::default().save_to(config_file)?;
            log::info!("Wrote default config to {}", config_file.display());
            print_success(&format!("Created {}", config_file.display()));
        }
    }

    let config = WatchConfig::load_from(config_file)?;
    let source = if config_file.exists() {
        config_file.display().to_string()
    } else {
        format!("{} (not created, using defaults)", config_file.display())
    };

    print_section_header("Configuration");
    println!("  file: {source}");
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();
    Ok(())
}
