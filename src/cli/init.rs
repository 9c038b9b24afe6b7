//! Init command implementation.
//!
//! Writes a `discs.yaml` holding the default scene configuration.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{SceneConfig, CONFIG_FILENAME};
use crate::error::{ThemeError, Result};
use crate::output::{display_path, Printer};

/// Write a discs.yaml with the default theme
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing discs.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ThemeError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = serde_yaml::to_string(&SceneConfig::default()).map_err(|e| ThemeError::Config {
        message: format!("Failed to serialize config: {}", e),
        help: None,
    })?;

    fs::write(&config_path, yaml).map_err(|e| ThemeError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let printer = Printer::new();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &printer,
        )
        .unwrap();

        let loaded = SceneConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(loaded, SceneConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "num: 3\n").unwrap();
        let printer = Printer::new();

        let args = |force| InitArgs {
            path: dir.path().to_path_buf(),
            force,
        };

        assert!(matches!(run(args(false), &printer), Err(ThemeError::Config { .. })));
        run(args(true), &printer).unwrap();

        let loaded = SceneConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(loaded.num, 200);
    }
}
