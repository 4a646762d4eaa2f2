use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while analyzing, slicing or verifying a sheet.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Card id {0} is outside the range 1..=52")]
    InvalidCardId(u8),
    #[error("Unknown card name: {0:?}")]
    UnknownCardName(String),
    #[error("Sample point ({x}, {y}) is outside the {width}x{height} image")]
    SampleOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
