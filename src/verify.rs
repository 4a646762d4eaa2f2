use crate::card::Card;
use crate::card::CardId;
use crate::card::Rank::Seven;
use crate::card::Suit::{Diamonds, Spades};
use crate::error::Result;
use std::path::Path;

/// The two dealer cards of the "dealer shows 23" bug, with the card each id is known to be.
pub const BUG_SCENARIO: [(u8, Card); 2] = [
    (7, Card::new(Seven, Spades)),
    (33, Card::new(Seven, Diamonds)),
];

/// First and last id of every suit boundary, plus the two bug scenario cards
pub const SPOT_CHECK_IDS: [u8; 8] = [1, 7, 13, 14, 27, 33, 40, 52];

/// Where the image of one card id should be, and whether it is there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCheck {
    pub id: CardId,
    pub card: Card,
    pub filename: &'static str,
    pub exists: bool,
}

impl CardCheck {
    pub fn marker(&self) -> &'static str {
        if self.exists {
            "✅"
        } else {
            "❌"
        }
    }
}

pub fn check_card(cards_dir: &Path, id: CardId) -> CardCheck {
    let filename = id.filename();
    let exists = cards_dir.join(filename).exists();
    tracing::debug!("card {} -> {} (exists: {})", id, filename, exists);

    CardCheck {
        id,
        card: id.card(),
        filename,
        exists,
    }
}

/// A card check together with the card the id is expected to map to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedCheck {
    pub expected: Card,
    pub check: CardCheck,
}

impl ExpectedCheck {
    /// The id maps to the expected card
    pub fn is_match(&self) -> bool {
        self.check.card == self.expected
    }
}

fn check_expected(cards_dir: &Path, (id, expected): (u8, Card)) -> Result<ExpectedCheck> {
    let check = check_card(cards_dir, CardId::new(id)?);
    if check.card != expected {
        tracing::warn!("card {} is {}, expected {}", id, check.card, expected);
    }

    Ok(ExpectedCheck { expected, check })
}

/// Check the two cards of a known bug scenario against their expected cards
pub fn check_pair(cards_dir: &Path, pair: [(u8, Card); 2]) -> Result<[ExpectedCheck; 2]> {
    let [a, b] = pair;

    Ok([
        check_expected(cards_dir, a)?,
        check_expected(cards_dir, b)?,
    ])
}

/// Check all 52 ids and return the ones without an image, in id order
pub fn missing_cards(cards_dir: &Path) -> Vec<CardCheck> {
    CardId::all()
        .map(|id| check_card(cards_dir, id))
        .filter(|check| !check.exists)
        .collect()
}

/// Check a list of ids, keeping their order. Fails if any id is not a valid card id.
pub fn spot_check(cards_dir: &Path, ids: &[u8]) -> Result<Vec<CardCheck>> {
    ids.iter()
        .map(|&id| Ok(check_card(cards_dir, CardId::new(id)?)))
        .collect()
}
