pub mod bio;
pub mod cli;
pub mod core;
pub mod tools;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsvcleanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Table error: {0}")]
    Table(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AsvcleanError>;
