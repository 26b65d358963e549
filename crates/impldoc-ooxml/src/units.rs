//! Measurement and color units used by WordprocessingML
//!
//! Word measures indentation and paragraph spacing in twentieths of a
//! point (twips) and font sizes in half-points.

use std::fmt;

/// Twentieths of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Twips(pub u32);

impl Twips {
    /// Zero length
    pub const ZERO: Twips = Twips(0);

    /// Largest indent or spacing Word accepts (22 inches)
    pub const MAX: Twips = Twips(31_680);

    /// Length in whole points
    pub const fn pt(points: u32) -> Self {
        Twips(points * 20)
    }

    /// Length in tenths of an inch
    pub const fn inch_tenths(tenths: u32) -> Self {
        Twips(tenths * 144)
    }

    /// Raw twips value
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Font size in whole points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(pub u16);

impl FontSize {
    /// Largest font size Word accepts
    pub const MAX_POINTS: u16 = 1638;

    /// Size in half-points, as written to `w:sz`
    pub const fn half_points(self) -> u32 {
        self.0 as u32 * 2
    }
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Hex form used by `w:color`, e.g. `003366`
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Paragraph justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
}

impl Alignment {
    /// Value of the `w:jc` element
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
        }
    }
}
