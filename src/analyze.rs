use crate::color::classify;
use crate::color::ColorClass;
use crate::error::{Error, Result};
use image::Rgb;
use image::RgbImage;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Scan along a row: `fixed` is y, x moves
    Horizontal,
    /// Scan along a column: `fixed` is x, y moves
    Vertical,
}

/// A straight line of sample points with a fixed step between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub axis: Axis,
    pub fixed: u32,
    /// Half open range of the moving coordinate
    pub range: (u32, u32),
    pub step: u32,
}

/// Row y=700 crosses the middle of the first row of cards
pub const HORIZONTAL_SCAN: Scan = Scan {
    axis: Axis::Horizontal,
    fixed: 700,
    range: (0, 900),
    step: 10,
};

/// Column x=225 crosses the middle of the first column of cards
pub const VERTICAL_SCAN: Scan = Scan {
    axis: Axis::Vertical,
    fixed: 225,
    range: (0, 1300),
    step: 20,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub axis: Axis,
    pub x: u32,
    pub y: u32,
    pub color: Rgb<u8>,
    pub class: ColorClass,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb([r, g, b]) = self.color;
        let (label, pos) = match self.axis {
            Axis::Horizontal => ("x", self.x),
            Axis::Vertical => ("y", self.y),
        };

        write!(
            f,
            "  {}={:3}: RGB({:3},{:3},{:3}) - {}",
            label, pos, r, g, b, self.class
        )
    }
}

impl Scan {
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (start, end) = self.range;
        (start..end)
            .step_by(self.step as usize)
            .map(move |pos| match self.axis {
                Axis::Horizontal => (pos, self.fixed),
                Axis::Vertical => (self.fixed, pos),
            })
    }

    /// Read and classify the color at every point of the scan. Fails on the first point that
    /// lies outside the image.
    pub fn samples(&self, img: &RgbImage) -> Result<Vec<Sample>> {
        let (width, height) = img.dimensions();

        self.points()
            .map(|(x, y)| {
                let color = *img.get_pixel_checked(x, y).ok_or(Error::SampleOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })?;

                Ok(Sample {
                    axis: self.axis,
                    x,
                    y,
                    color,
                    class: classify(color),
                })
            })
            .collect()
    }
}
