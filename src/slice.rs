use crate::card::CardFace;
use crate::color::remove_background;
use crate::color::trim_transparent;
use crate::error::{Error, Result};
use crate::layout::SheetGeometry;
use image::DynamicImage;
use image::GenericImageView;
use image::Rgba;
use image::RgbaImage;
use imageproc::rect::Rect;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Result of processing one cell of the sprite sheet.
#[derive(Debug, Clone)]
pub enum SlicedCell {
    /// First cell with this face: this image will be saved
    Unique { face: CardFace, img: RgbaImage },
    /// The face was already sliced from an earlier cell
    Duplicate { face: CardFace, row: u32, col: u32 },
}

impl SlicedCell {
    pub fn face(&self) -> CardFace {
        match self {
            SlicedCell::Unique { face, .. } | SlicedCell::Duplicate { face, .. } => *face,
        }
    }
}

/// What `save_cards` did with one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellReport {
    /// Written to `<face>.png`, with the dimensions of the trimmed image
    Saved { face: CardFace, size: (u32, u32) },
    Skipped { face: CardFace, row: u32, col: u32 },
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellReport::Saved { face, size: (w, h) } => {
                write!(f, "✓ Saved: {} ({}x{})", face.filename(), w, h)
            }
            CellReport::Skipped { face, .. } => write!(f, "⊘ Skipped duplicate: {}", face),
        }
    }
}

/// Every cell handled by `save_cards`, in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceSummary {
    pub cells: Vec<CellReport>,
}

impl SliceSummary {
    /// Saved faces and the dimensions of the written image
    pub fn saved(&self) -> Vec<(CardFace, (u32, u32))> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                CellReport::Saved { face, size } => Some((*face, *size)),
                CellReport::Skipped { .. } => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> Vec<CardFace> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                CellReport::Skipped { face, .. } => Some(*face),
                CellReport::Saved { .. } => None,
            })
            .collect()
    }
}

/// Cut one card out of the sheet, remove the green background and crop the transparent padding.
///
/// The crop always has the size of `rect`: the part of a cell that lies past the edge of the
/// sheet is filled with opaque black, which is not background and survives the trim.
pub fn slice_cell(sheet: &DynamicImage, rect: Rect) -> RgbaImage {
    let (w, h) = sheet.dimensions();
    let left = (rect.left() as u32).min(w);
    let top = (rect.top() as u32).min(h);
    let width = rect.width().min(w - left);
    let height = rect.height().min(h - top);

    let card = if (width, height) == (rect.width(), rect.height()) {
        sheet.crop_imm(left, top, width, height).to_rgba8()
    } else {
        tracing::warn!(
            "cell {:?} does not fit in the {}x{} sheet, padding it with black",
            rect,
            w,
            h
        );
        let mut padded = RgbaImage::from_pixel(rect.width(), rect.height(), Rgba([0, 0, 0, 255]));
        if width > 0 && height > 0 {
            let inside = sheet.crop_imm(left, top, width, height).to_rgba8();
            image::imageops::replace(&mut padded, &inside, 0, 0);
        }
        padded
    };
    let card = remove_background(&card);

    trim_transparent(card)
}

/// Lazily slice every cell of the sheet in reading order. `grid[row][col]` names the card at
/// each cell; only the first cell with a given face is cut out, later ones are `Duplicate`.
pub fn slice_cells<'a, const N: usize>(
    sheet: &'a DynamicImage,
    geometry: &'a SheetGeometry,
    grid: &'a [[CardFace; N]],
) -> impl Iterator<Item = SlicedCell> + 'a {
    let mut seen = HashSet::new();

    geometry.cells().filter_map(move |(row, col, rect)| {
        let face = match grid
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
        {
            Some(face) => *face,
            None => {
                tracing::warn!("no card name for cell ({}, {}), ignoring it", row, col);
                return None;
            }
        };

        if !seen.insert(face) {
            tracing::debug!("cell ({}, {}) repeats {}", row, col, face);
            return Some(SlicedCell::Duplicate { face, row, col });
        }

        tracing::debug!("slicing {} from cell ({}, {}) at {:?}", face, row, col, rect);
        Some(SlicedCell::Unique {
            face,
            img: slice_cell(sheet, rect),
        })
    })
}

/// Same as `slice_cells`, collected. This does not touch the filesystem, see `save_cards`.
pub fn slice_sheet<const N: usize>(
    sheet: &DynamicImage,
    geometry: &SheetGeometry,
    grid: &[[CardFace; N]],
) -> Vec<SlicedCell> {
    slice_cells(sheet, geometry, grid).collect()
}

/// Write every unique card as `<name>.png` into `out_dir`, creating the directory if needed.
/// Existing files are overwritten.
///
/// `on_cell` is called after each cell is handled, so a caller can report progress. Files written
/// before an error are left in place.
pub fn save_cards<I, F>(out_dir: &Path, cells: I, mut on_cell: F) -> Result<SliceSummary>
where
    I: IntoIterator<Item = SlicedCell>,
    F: FnMut(&CellReport),
{
    std::fs::create_dir_all(out_dir).map_err(|source| Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut summary = SliceSummary::default();
    for cell in cells {
        let report = match cell {
            SlicedCell::Unique { face, img } => {
                let out_path = out_dir.join(face.filename());
                img.save(&out_path)?;
                tracing::info!("saved {}", out_path.display());
                CellReport::Saved {
                    face,
                    size: img.dimensions(),
                }
            }
            SlicedCell::Duplicate { face, row, col } => CellReport::Skipped { face, row, col },
        };
        on_cell(&report);
        summary.cells.push(report);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use image::Rgba;

    const GREEN: Rgba<u8> = Rgba([17, 94, 63, 255]);
    const WHITE: Rgba<u8> = Rgba([250, 250, 250, 255]);

    fn face(rank: Rank, suit: Suit) -> CardFace {
        CardFace::Playing(Card::new(rank, suit))
    }

    // 2x2 grid of 20x30 cells starting at (5, 5) with 10px gaps. Each card is a white rectangle
    // inset by 2px, with a red mark whose position depends on the cell so that cards differ.
    fn small_geometry() -> SheetGeometry {
        SheetGeometry {
            origin: (5, 5),
            card_size: (20, 30),
            gap: (10, 10),
            rows: 2,
            cols: 2,
        }
    }

    fn small_sheet() -> DynamicImage {
        let g = small_geometry();
        let mut img = RgbaImage::from_pixel(60, 80, GREEN);
        for (row, col, rect) in g.cells() {
            let (x0, y0) = (rect.left() as u32, rect.top() as u32);
            for x in x0 + 2..x0 + 18 {
                for y in y0 + 2..y0 + 28 {
                    img.put_pixel(x, y, WHITE);
                }
            }
            img.put_pixel(x0 + 5 + col, y0 + 5 + row, Rgba([200, 0, 0, 255]));
        }

        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn slice_single_cell() {
        let sheet = small_sheet();
        let card = slice_cell(&sheet, small_geometry().cell_rect(1, 1));

        assert_eq!(card.dimensions(), (16, 26));
        assert_eq!(*card.get_pixel(0, 0), WHITE);
        assert_eq!(*card.get_pixel(4, 4), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn slice_cell_past_the_edge() {
        let sheet = small_sheet();
        // Only 10 columns of this cell are inside the sheet, the other 10 are padding
        let card = slice_cell(&sheet, Rect::at(50, 5).of_size(20, 30));

        assert_eq!(card.dimensions(), (20, 30));
        // Green gap between the cards, then the padding
        assert_eq!(*card.get_pixel(5, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*card.get_pixel(19, 0), Rgba([0, 0, 0, 255]));
        // Right border of card (0, 1)
        assert_eq!(*card.get_pixel(0, 2), WHITE);
    }

    #[test]
    fn slice_cell_outside_the_sheet() {
        let sheet = small_sheet();
        let card = slice_cell(&sheet, Rect::at(100, 100).of_size(8, 6));

        assert_eq!(card.dimensions(), (8, 6));
        assert!(card.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn slice_empty_cell() {
        let sheet = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, GREEN));
        let card = slice_cell(&sheet, Rect::at(5, 5).of_size(20, 30));

        // Nothing to trim
        assert_eq!(card.dimensions(), (20, 30));
        assert!(card.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn duplicates_are_skipped() {
        let ace = face(Rank::Ace, Suit::Spades);
        let seven = face(Rank::Seven, Suit::Clubs);
        let grid = [[ace, seven], [seven, CardFace::Joker]];

        let cells = slice_sheet(&small_sheet(), &small_geometry(), &grid);

        assert_eq!(cells.len(), 4);
        assert!(matches!(cells[1], SlicedCell::Unique { face, .. } if face == seven));
        assert!(matches!(
            cells[2],
            SlicedCell::Duplicate { face, row: 1, col: 0 } if face == seven
        ));

        // The kept seven is the one from the first row: red mark at (5 + 1, 5 + 0) - 2px inset
        match &cells[1] {
            SlicedCell::Unique { img, .. } => {
                assert_eq!(*img.get_pixel(4, 3), Rgba([200, 0, 0, 255]))
            }
            x => panic!("expected unique cell, got {:?}", x),
        }
    }

    #[test]
    fn small_grid_is_ignored_outside() {
        // Geometry has 2x2 cells but the grid only names the first row
        let grid = [[CardFace::Joker, CardFace::Back]];

        let cells = slice_sheet(&small_sheet(), &small_geometry(), &grid);
        let faces: Vec<_> = cells.iter().map(|c| c.face()).collect();

        assert_eq!(faces, vec![CardFace::Joker, CardFace::Back]);
    }

    #[test]
    fn save_writes_unique_cards_only() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("public").join("cards");
        let seven = face(Rank::Seven, Suit::Clubs);
        let grid = [[seven, CardFace::Back], [seven, CardFace::Joker]];

        let cells = slice_sheet(&small_sheet(), &small_geometry(), &grid);
        let summary = save_cards(&out_dir, cells, |_| {}).unwrap();

        assert_eq!(summary.saved().len(), 3);
        assert_eq!(summary.skipped(), vec![seven]);
        assert!(out_dir.join("7_clubs.png").exists());
        assert!(out_dir.join("back.png").exists());
        assert!(out_dir.join("joker.png").exists());
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 3);

        let saved = image::open(out_dir.join("7_clubs.png")).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (16, 26));
        assert_eq!(*saved.get_pixel(3, 3), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn slicing_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = small_sheet();
        let grid = [
            [face(Rank::Two, Suit::Hearts), face(Rank::Three, Suit::Hearts)],
            [face(Rank::Four, Suit::Hearts), face(Rank::Five, Suit::Hearts)],
        ];

        let first = dir.path().join("a");
        let second = dir.path().join("b");
        save_cards(&first, slice_cells(&sheet, &small_geometry(), &grid), |_| {}).unwrap();
        save_cards(&second, slice_cells(&sheet, &small_geometry(), &grid), |_| {}).unwrap();

        for name in ["2_hearts.png", "3_hearts.png", "4_hearts.png", "5_hearts.png"] {
            let a = std::fs::read(first.join(name)).unwrap();
            let b = std::fs::read(second.join(name)).unwrap();
            assert_eq!(a, b, "{} differs between runs", name);
        }
    }

    #[test]
    fn cells_are_reported_in_reading_order() {
        let dir = tempfile::tempdir().unwrap();
        let g = SheetGeometry {
            rows: 1,
            cols: 3,
            ..small_geometry()
        };
        let sheet = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 40, WHITE));
        let grid = [[CardFace::Joker, CardFace::Joker, CardFace::Back]];

        let mut reported = vec![];
        let summary = save_cards(dir.path(), slice_cells(&sheet, &g, &grid), |report| {
            // The file of a saved cell is already on disk when it is reported
            if let CellReport::Saved { face, .. } = report {
                assert!(dir.path().join(face.filename()).exists());
            }
            reported.push(report.to_string());
        })
        .unwrap();

        assert_eq!(
            reported,
            vec![
                "✓ Saved: joker.png (20x30)",
                "⊘ Skipped duplicate: joker",
                "✓ Saved: back.png (20x30)",
            ]
        );
        assert_eq!(
            summary.cells[1],
            CellReport::Skipped {
                face: CardFace::Joker,
                row: 0,
                col: 1
            }
        );
        assert_eq!(summary.cells.len(), 3);
    }
}
