//! Print the color of the pixels along a row and a column of the sprite sheet, to find where the
//! cards start and end.
//!
//! Usage: analyze_cards [sheet]
use card_sprites::analyze::{HORIZONTAL_SCAN, VERTICAL_SCAN};
use card_sprites::DEFAULT_SHEET_PATH;

fn main() -> Result<(), card_sprites::Error> {
    card_sprites::init_logging();
    let sheet_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SHEET_PATH.to_owned());

    let img = image::open(&sheet_path)?.to_rgb8();
    println!("Image size: {:?}", img.dimensions());
    println!("\nSampling pixels to find card boundaries...");

    println!(
        "\nHorizontal scan (row at y={}, middle of first card):",
        HORIZONTAL_SCAN.fixed
    );
    for sample in HORIZONTAL_SCAN.samples(&img)? {
        println!("{}", sample);
    }

    println!(
        "\nVertical scan (col at x={}, middle of first column):",
        VERTICAL_SCAN.fixed
    );
    for sample in VERTICAL_SCAN.samples(&img)? {
        println!("{}", sample);
    }

    Ok(())
}
