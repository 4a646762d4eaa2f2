//! Cut the sprite sheet into one png per card, with the green background made transparent.
//!
//! Usage: slice_cards [sheet] [out_dir]
use card_sprites::layout::{SheetGeometry, CARD_GRID};
use card_sprites::slice::{save_cards, slice_cells};
use card_sprites::{DEFAULT_OUTPUT_DIR, DEFAULT_SHEET_PATH};
use image::GenericImageView;
use std::path::PathBuf;

fn main() -> Result<(), card_sprites::Error> {
    card_sprites::init_logging();
    let mut args = std::env::args().skip(1);
    let sheet_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_SHEET_PATH.to_owned());
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("Opening {}...", sheet_path);
    let sheet = image::open(&sheet_path)?;

    let g = SheetGeometry::DEFAULT;
    let (w, h) = sheet.dimensions();
    println!("Image size: {}x{}", w, h);
    println!("Card size: {}x{}", g.card_size.0, g.card_size.1);
    println!("First card position: ({}, {})", g.origin.0, g.origin.1);
    println!("Gaps: H={}px, V={}px", g.gap.0, g.gap.1);
    println!("Grid: {} rows x {} columns", g.rows, g.cols);
    println!("{}", "-".repeat(50));

    // Each cell is printed as soon as it is written or skipped
    let summary = save_cards(&out_dir, slice_cells(&sheet, &g, &CARD_GRID), |report| {
        println!("{}", report)
    })?;

    println!("{}", "-".repeat(50));
    println!("Successfully sliced {} unique cards!", summary.saved().len());
    println!("Skipped {} duplicates", summary.skipped().len());
    println!("Cards saved to: {}", out_dir.display());

    Ok(())
}
