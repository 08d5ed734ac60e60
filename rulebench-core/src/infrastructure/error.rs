// rulebench-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(rulebench::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(rulebench::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(rulebench::infra::config))]
    ConfigError(String),

    #[error("Invalid base URL '{url}': {reason}")]
    #[diagnostic(
        code(rulebench::infra::base_url),
        help("Use an absolute http(s) URL, e.g. http://localhost:8080/api")
    )]
    InvalidBaseUrl { url: String, reason: String },

    // --- HTTP CLIENT ---
    #[error("HTTP client setup failed: {0}")]
    #[diagnostic(code(rulebench::infra::http))]
    HttpClient(#[from] reqwest::Error),
}
