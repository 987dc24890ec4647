use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skinshop operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkinError {
    #[error("IO error: {0}")]
    #[diagnostic(code(skinshop::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(skinshop::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Expected {expected}, got '{input}'")]
    #[diagnostic(code(skinshop::input::parse))]
    InputParse { input: String, expected: String },

    #[error("Selection {index} is out of range (1-{count})")]
    #[diagnostic(code(skinshop::input::range))]
    IndexRange { index: i64, count: usize },

    #[error("Layer {index} ({file}) has already been selected")]
    #[diagnostic(
        code(skinshop::input::reselect),
        help("Pick one of the numbers still listed")
    )]
    AlreadySelected { index: usize, file: String },

    #[error("Input ended before the entry was complete")]
    #[diagnostic(code(skinshop::input::closed))]
    InputClosed,

    #[error("Session error: {message}")]
    #[diagnostic(code(skinshop::session))]
    Session { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(skinshop::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Archive error with {path}: {message}")]
    #[diagnostic(code(skinshop::archive))]
    Archive {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(skinshop::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SkinError>;

impl SkinError {
    /// Wrap an IO error with the path it happened on.
    pub(crate) fn io(path: &std::path::Path, action: &str, err: std::io::Error) -> Self {
        SkinError::Io {
            path: path.to_path_buf(),
            message: format!("{}: {}", action, err),
        }
    }
}
