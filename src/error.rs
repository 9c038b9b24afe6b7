use miette::Diagnostic;
use thiserror::Error;

/// Main error type for theme and cluster operations
#[derive(Error, Diagnostic, Debug)]
pub enum ThemeError {
    #[error("Unknown colour name: {name}")]
    #[diagnostic(
        code(discs::unknown_colour),
        help("Run `discs colours` to list the known colour names")
    )]
    UnknownColourName { name: String },

    #[error("Unknown colour range: {name}")]
    #[diagnostic(
        code(discs::unknown_range),
        help("Available ranges: light, dark, bright, weak, neutral, fresh, soft, hot, warm, cool, intense")
    )]
    UnknownRangeName { name: String },

    #[error("Unknown sorting criterion: {name}")]
    #[diagnostic(
        code(discs::unknown_criterion),
        help("Run `discs criteria` to list the known criteria")
    )]
    UnknownCriterion { name: String },

    #[error("Theme '{name}' has no entries with a positive weight")]
    #[diagnostic(code(discs::empty_theme))]
    EmptyTheme { name: String },

    #[error("Cannot average an empty colour list")]
    #[diagnostic(code(discs::empty_list))]
    EmptyList,

    #[error("Invalid cluster count: {count}")]
    #[diagnostic(code(discs::cluster_count), help("Use at least one cluster"))]
    InvalidClusterCount { count: usize },

    #[error("Invalid weight {weight} for '{descriptor}'")]
    #[diagnostic(
        code(discs::weight),
        help("Weights must be finite and not negative")
    )]
    InvalidWeight { descriptor: String, weight: f64 },

    #[error("Parse error: {message}")]
    #[diagnostic(code(discs::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(discs::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(discs::json))]
    Json(#[from] serde_json::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(discs::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
