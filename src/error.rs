use thiserror::Error;

#[derive(Error, Debug)]
pub enum StlError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Cannot read source {name}: {source}")]
    Read { name: String, source: std::io::Error },
    #[error("Invalid source name: {0}")]
    InvalidSourceName(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, StlError>;

// Helper conversions
impl From<config::ConfigError> for StlError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for StlError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}

impl StlError {
    /// True when the named source unit does not exist in the content directory.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
