use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoftbarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed button group '{group}': expected {expected} fields, found {found}")]
    Parse {
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SoftbarError>;
