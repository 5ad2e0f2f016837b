//! Rich diagnostic error types for the icon catalog.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so users know exactly what
//! went wrong and how to fix it.
//!
//! Only configuration, transport, and output failures are errors. Missing theme
//! directories and unreadable asset files are logged and skipped, and icons
//! without a matching local asset are reported in the run summary.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for a catalog run.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),
}

/// Convenience alias for pipeline results.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("access token not set: ${var} is missing or empty")]
    #[diagnostic(
        code(icat::config::missing_token),
        help(
            "Export a personal access token before running, e.g. \
             `export {var}='figd_...'`. The variable name can be changed \
             with `token_env` in the config file."
        )
    )]
    MissingToken { var: String },

    #[error("no design file key configured")]
    #[diagnostic(
        code(icat::config::missing_file_key),
        help(
            "Set `file_key` in the config file or pass `--file-key`. \
             The key is the path segment after `/file/` or `/design/` in the file URL."
        )
    )]
    MissingFileKey,

    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(icat::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    #[diagnostic(
        code(icat::config::parse),
        help("Check the TOML syntax and field names in the config file.")
    )]
    Parse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Remote API errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RemoteError {
    #[error("remote API returned HTTP {code} for {endpoint}: {body}")]
    #[diagnostic(
        code(icat::remote::status),
        help(
            "A 403 usually means the token is invalid or lacks access to the file; \
             a 404 means the file key is wrong or the file is not published as a library."
        )
    )]
    Status {
        code: u16,
        endpoint: String,
        body: String,
    },

    #[error("request to {endpoint} failed: {message}")]
    #[diagnostic(
        code(icat::remote::transport),
        help("Check network connectivity and the configured `api_base` URL.")
    )]
    Transport { endpoint: String, message: String },

    #[error("unexpected response from {endpoint}: {message}")]
    #[diagnostic(
        code(icat::remote::decode),
        help("The response body was not the expected JSON shape. Has the API changed?")
    )]
    Decode { endpoint: String, message: String },
}

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OutputError {
    #[error("failed to create output directory: {path}")]
    #[diagnostic(
        code(icat::output::create_dir),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write artifact: {path}")]
    #[diagnostic(
        code(icat::output::write),
        help("Check available disk space and write permissions on the output directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {artifact}: {message}")]
    #[diagnostic(code(icat::output::serialize))]
    Serialize { artifact: String, message: String },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;
