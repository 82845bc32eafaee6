use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::common::data::Error;

// Perceived brightness weights. The eye is most sensitive to green and
// least to blue, so green dominates the score.
const RED_WEIGHT: f64 = 0.241;
const GREEN_WEIGHT: f64 = 0.691;
const BLUE_WEIGHT: f64 = 0.068;

/// An 8-bit RGB color. The canonical hex form is derived from the channels,
/// so it always round-trips.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Parse a strict `#RRGGBB` (or `RRGGBB`) code, any casing.
    pub fn from_hex(input: &str) -> Result<Color, Error> {
        parse_hex(input, false)
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical `#RRGGBB`, uppercase.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn brightness(&self) -> f64 {
        get_brightness(self.r, self.g, self.b)
    }
}

/// Perceived brightness in `[0.0, 255.0]`:
/// `sqrt(0.241 r^2 + 0.691 g^2 + 0.068 b^2)`.
pub fn get_brightness(red: u8, green: u8, blue: u8) -> f64 {
    let r = red as f64;
    let g = green as f64;
    let b = blue as f64;

    (RED_WEIGHT * r * r + GREEN_WEIGHT * g * g + BLUE_WEIGHT * b * b).sqrt()
}

/// Parse a hex color code.
///
/// Surrounding whitespace and one leading `#` are ignored, casing is not
/// significant. With `allow_shorthand`, `RGB` is read as `RRGGBB`.
pub fn parse_hex(input: &str, allow_shorthand: bool) -> Result<Color, Error> {
    let invalid = || Error::InvalidColorFormat(input.to_owned());

    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digits = match digits.len() {
        6 => digits.to_owned(),
        3 if allow_shorthand => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(invalid()),
    };

    get_rgb_from_hex(&digits).map_err(|_| invalid())
}

// Expects exactly six ASCII hex digits.
fn get_rgb_from_hex(color: &str) -> Result<Color, std::num::ParseIntError> {
    let red = u8::from_str_radix(&color[0..2], 16)?;
    let green = u8::from_str_radix(&color[2..4], 16)?;
    let blue = u8::from_str_radix(&color[4..6], 16)?;

    Ok(Color::new(red, green, blue))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s, true)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (R={}, G={}, B={})", self.hex(), self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Color", 5)?;
        s.serialize_field("hex", &self.hex())?;
        s.serialize_field("r", &self.r)?;
        s.serialize_field("g", &self.g)?;
        s.serialize_field("b", &self.b)?;
        s.serialize_field("brightness", &self.brightness())?;
        s.end()
    }
}
