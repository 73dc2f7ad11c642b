use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use)",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
                let missing = Config::missing_keys(&content)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for key in &missing {
                        warning(format!("Missing field: {key} (default used)"));
                    }
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{editor_to_use}'"));
                }
                _ => {
                    info(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited using fallback '{default_editor}'"
                            ));
                        }
                        _ => {
                            error(format!(
                                "Failed to edit configuration file using fallback '{default_editor}'"
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
