use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All the ranks in numeric card id order: A, 2, ..., 10, J, Q, K
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The token used in filenames
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All the suits in numeric card id order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn token(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.rank.token(), self.suit.token())
    }
}

/// Anything that can appear in a cell of the sprite sheet. The joker and the card back are drawn
/// on the sheet but have no numeric card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    Playing(Card),
    Joker,
    Back,
}

impl CardFace {
    /// Name of the png file where this face is stored
    pub fn filename(&self) -> String {
        format!("{}.png", self)
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Playing(card) => fmt::Display::fmt(card, f),
            CardFace::Joker => f.write_str("joker"),
            CardFace::Back => f.write_str("back"),
        }
    }
}

impl FromStr for CardFace {
    type Err = Error;

    /// Parse a file stem such as "10_hearts", "joker" or "back"
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "joker" => return Ok(CardFace::Joker),
            "back" => return Ok(CardFace::Back),
            _ => {}
        }

        let unknown = || Error::UnknownCardName(s.to_owned());
        let (rank, suit) = s.split_once('_').ok_or_else(unknown)?;
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.token() == rank)
            .ok_or_else(unknown)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|x| x.token() == suit)
            .ok_or_else(unknown)?;

        Ok(CardFace::Playing(Card::new(rank, suit)))
    }
}

/// Numeric card id used by the game frontend: 1-13 are spades A..K, 14-26 hearts, 27-39
/// diamonds, 40-52 clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u8);

lazy_static::lazy_static! {
    static ref CARD_ID_FILENAMES: Vec<String> = generate_card_id_filenames();
}

fn generate_card_id_filenames() -> Vec<String> {
    (CardId::MIN..=CardId::MAX)
        .map(|id| CardFace::Playing(CardId(id).card()).filename())
        .collect()
}

impl CardId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 52;

    pub fn new(id: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id))
        } else {
            Err(Error::InvalidCardId(id))
        }
    }

    /// All 52 ids in increasing order
    pub fn all() -> impl Iterator<Item = CardId> {
        (Self::MIN..=Self::MAX).map(CardId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn card(self) -> Card {
        let index = usize::from(self.0 - 1);
        let rank = Rank::ALL[index % 13];
        let suit = Suit::ALL[index / 13];

        Card::new(rank, suit)
    }

    pub fn filename(self) -> &'static str {
        &CARD_ID_FILENAMES[usize::from(self.0 - 1)]
    }

    /// Inverse of `filename`. Returns None for joker.png, back.png and any unrelated name.
    pub fn from_filename(filename: &str) -> Option<CardId> {
        CARD_ID_FILENAMES
            .iter()
            .position(|f| f == filename)
            .map(|index| CardId(index as u8 + 1))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Convert a numeric card id (1-52) to the name of its png file.
pub fn card_id_to_filename(id: u8) -> Result<&'static str> {
    Ok(CardId::new(id)?.filename())
}
