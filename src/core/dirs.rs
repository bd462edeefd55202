use crate::core::error::SeqMonError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, SeqMonError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(SeqMonError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .map(|home| home.join("Library/Application Support"))
            .ok_or(SeqMonError::ConfigDirectoryNotFound)?,
        _ => dirs::config_dir().ok_or(SeqMonError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("seqmon"))
}

pub fn get_config_file() -> Result<PathBuf, SeqMonError> {
    Ok(get_config_directory()?.join("config.json"))
}
