//! Check that the sliced card images match the numeric card ids used by the frontend.
//!
//! Usage: verify_cards [cards_dir]
use card_sprites::verify::{check_pair, missing_cards, spot_check};
use card_sprites::verify::{BUG_SCENARIO, SPOT_CHECK_IDS};
use card_sprites::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

fn main() -> Result<(), card_sprites::Error> {
    card_sprites::init_logging();
    let cards_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let rule = "=".repeat(60);

    println!("{}", rule);
    println!("Card Image Verification");
    println!("{}", rule);

    println!("\nTesting the bug scenario:");
    println!("{}", "-".repeat(60));
    let pair = check_pair(&cards_dir, BUG_SCENARIO)?;
    for (i, pair_check) in pair.iter().enumerate() {
        let (expected, check) = (pair_check.expected, &pair_check.check);
        println!("Dealer Card {} (ID {}):", i + 1, check.id);
        println!(
            "  Expected: {} of {}",
            expected.rank.token(),
            expected.suit.token()
        );
        println!("  Filename: {}", check.filename);
        println!("  Matches expected: {}", pair_check.is_match());
        println!("  File exists: {}", check.exists);
    }

    println!("\n{}", rule);
    println!("Verifying all 52 playing cards...");
    println!("{}", rule);
    let missing = missing_cards(&cards_dir);
    if missing.is_empty() {
        println!("\n✅ All 52 cards are present!");
    } else {
        println!("\n❌ Missing {} cards:", missing.len());
        for check in &missing {
            println!("  Card ID {}: {}", check.id, check.filename);
        }
    }

    println!("\n{}", rule);
    println!("Sample Card ID to Filename Mappings:");
    println!("{}", rule);
    for check in spot_check(&cards_dir, &SPOT_CHECK_IDS)? {
        println!(
            "{} Card ID {:2} → {}",
            check.marker(),
            check.id.get(),
            check.filename
        );
    }

    Ok(())
}
