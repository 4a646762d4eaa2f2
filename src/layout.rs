use crate::card::Card;
use crate::card::CardFace;
use crate::card::CardFace::{Back, Joker};
use crate::card::Rank::{self, *};
use crate::card::Suit::{self, *};
use imageproc::rect::Rect;

/// Position and size of the card grid inside the sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGeometry {
    /// Top left corner of the first card
    pub origin: (u32, u32),
    /// (width, height) of every card, including its white rounded border
    pub card_size: (u32, u32),
    /// (horizontal, vertical) space between two cards
    pub gap: (u32, u32),
    pub rows: u32,
    pub cols: u32,
}

impl SheetGeometry {
    /// Measured by hand on playing_cards_full_set.jpg with the analyzer
    pub const DEFAULT: SheetGeometry = SheetGeometry {
        origin: (72, 544),
        card_size: (428, 576),
        gap: (62, 84),
        rows: GRID_ROWS as u32,
        cols: GRID_COLS as u32,
    };

    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let (x0, y0) = self.origin;
        let (w, h) = self.card_size;
        let (h_gap, v_gap) = self.gap;
        let left = x0 + col * (w + h_gap);
        let top = y0 + row * (h + v_gap);

        Rect::at(left as i32, top as i32).of_size(w, h)
    }

    /// All the cells in reading order: left to right, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Rect)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (row, col, self.cell_rect(row, col)))
        })
    }
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 9;

const fn p(rank: Rank, suit: Suit) -> CardFace {
    CardFace::Playing(Card::new(rank, suit))
}

/// Card drawn at each cell of the sprite sheet. The columns are grouped by suit (diamonds,
/// spades, hearts, clubs), the aces, joker and back share the middle column.
#[rustfmt::skip]
pub const CARD_GRID: [[CardFace; GRID_COLS]; GRID_ROWS] = [
    [p(King, Diamonds), p(King, Spades), p(King, Hearts), p(King, Clubs), p(Ace, Clubs), p(Seven, Diamonds), p(Seven, Spades), p(Seven, Hearts), p(Seven, Clubs)],
    [p(Queen, Diamonds), p(Queen, Spades), p(Queen, Hearts), p(Queen, Clubs), p(Ace, Hearts), p(Six, Diamonds), p(Six, Spades), p(Six, Hearts), p(Six, Clubs)],
    [p(Jack, Diamonds), p(Jack, Spades), p(Jack, Hearts), p(Jack, Clubs), p(Ace, Spades), p(Five, Diamonds), p(Five, Spades), p(Five, Hearts), p(Five, Clubs)],
    [p(Ten, Diamonds), p(Ten, Spades), p(Ten, Hearts), p(Ten, Clubs), p(Ace, Diamonds), p(Four, Diamonds), p(Four, Spades), p(Four, Hearts), p(Four, Clubs)],
    [p(Nine, Diamonds), p(Nine, Spades), p(Nine, Hearts), p(Nine, Clubs), Joker, p(Three, Diamonds), p(Three, Spades), p(Three, Hearts), p(Three, Clubs)],
    [p(Eight, Diamonds), p(Eight, Spades), p(Eight, Hearts), p(Eight, Clubs), Back, p(Two, Diamonds), p(Two, Spades), p(Two, Hearts), p(Two, Clubs)],
];
