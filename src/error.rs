use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ditchgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum DitchError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ditchgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(ditchgen::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(ditchgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} sprite(s) failed to generate: {}", names.join(", "))]
    #[diagnostic(
        code(ditchgen::batch),
        help("Earlier sprites were written; fix the errors above and re-run")
    )]
    Batch { failed: usize, names: Vec<String> },
}

pub type Result<T> = std::result::Result<T, DitchError>;
