use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Panel(#[from] scrollpanel::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// An explicitly requested settings file could not be read.
    #[error("cannot read settings {}: {source}", path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings {}: {source}", path.display())]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{key}` in {}: {reason}", path.display())]
    InvalidSetting {
        path: PathBuf,
        key: &'static str,
        reason: String,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
