use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, directory::*};

#[cfg(test)]
mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_shows_defaults_without_file() -> anyhow::Result<()> {
        let dir = setup_test_dir()?;

        dir.command()?
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("using defaults"))
            .stdout(predicate::str::contains("\"poll_interval_ms\": 1000"));

        assert!(!dir.config_file().exists());
        Ok(())
    }

    #[test]
    fn test_config_init_writes_file() -> anyhow::Result<()> {
        let dir = setup_test_dir()?;

        dir.command()?
            .args(["config", "--init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let content = std::fs::read_to_string(dir.config_file())?;
        let config: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(config["poll_interval_ms"], 1000);
        assert_eq!(config["recursive"], false);
        Ok(())
    }

    #[test]
    fn test_config_init_keeps_existing_file() -> anyhow::Result<()> {
        let dir = setup_test_dir()?;
        dir.write_config(r#"{ "poll_interval_ms": 250 }"#)?;

        dir.command()?
            .args(["config", "--init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"))
            .stdout(predicate::str::contains("\"poll_interval_ms\": 250"));

        Ok(())
    }

    #[test]
    fn test_config_reports_invalid_interval() -> anyhow::Result<()> {
        let dir = setup_test_dir()?;
        dir.write_config(r#"{ "poll_interval_ms": 0 }"#)?;

        dir.command()?
            .arg("config")
            .assert()
            .failure()
            .code(1)
            .stdout(assertions::has_error("Invalid poll interval"));

        Ok(())
    }
}
