/// Find the card boundaries by sampling pixel colors
pub mod analyze;
/// Card faces and the numeric card ids used by the frontend
pub mod card;
/// Pixel classification and background removal
pub mod color;
mod error;
/// Position of every card in the sprite sheet
pub mod layout;
/// Cut the sprite sheet into one transparent png per card
pub mod slice;
/// Check that every card id has an image
pub mod verify;

pub use error::{Error, Result};

/// Sprite sheet with all the cards, relative to the working directory
pub const DEFAULT_SHEET_PATH: &str = "playing_cards_full_set.jpg";
/// Directory served by the frontend
pub const DEFAULT_OUTPUT_DIR: &str = "../public/cards";

/// Log to stderr, using the `RUST_LOG` filter if set and showing only warnings otherwise. The
/// reports printed by the tools go to stdout.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub mod deps {
    pub use image;
    pub use imageproc;
}
