use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorniceError {
    #[error("Could not determine terminal size: {0}")]
    TerminalSize(#[source] std::io::Error),

    #[error("Standard output is not a terminal")]
    NotATerminal,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid size '{0}': expected WIDTHxHEIGHT, e.g. 80x24")]
    InvalidSize(String),

    #[error("Log file error: {0}")]
    Log(String),
}

pub type Result<T> = std::result::Result<T, CorniceError>;
