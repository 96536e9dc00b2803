use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("JSON serialization error")]
    JsonError(#[from] serde_json::Error),
}
