use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};

const EXPECTED_KEYS: [&str; 4] = ["database", "operator", "administrator", "chart_width"];

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg)
                    .map_err(|e| AppError::Config(format!("cannot render config: {e}")))?
            );
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }

            let content = std::fs::read_to_string(&path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("cannot parse config: {e}")))?;

            let mut missing = Vec::new();
            for key in EXPECTED_KEYS {
                if value.get(key).is_none() {
                    missing.push(key);
                }
            }

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing field: {}", key));
                }
                warning("Defaults will be used for missing fields.");
            }
        }
    }

    Ok(())
}
