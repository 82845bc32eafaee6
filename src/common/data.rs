use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::color::Color;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    #[error("no valid colors found")]
    NoValidColors,
    #[error("failed to fetch color names: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("failed to decode color names: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("{0}")]
    ParseError(String),
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::ParseError(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::ParseError(s)
    }
}

/// An input that could not be decoded, and why.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rejected {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub brightest: Color,
    /// Valid colors in input order.
    pub colors: Vec<Color>,
    pub rejected: Vec<Rejected>,
    pub total: usize,
}

impl Analysis {
    pub fn valid_count(&self) -> usize {
        self.colors.len()
    }

    /// Valid colors, brightest first. Equal brightness keeps input order.
    pub fn sorted_by_brightness(&self) -> Vec<Color> {
        self.colors
            .iter()
            .copied()
            .sorted_by(|a, b| b.brightness().total_cmp(&a.brightness()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub brightness: f64,
    pub name: String,
}

impl ColorReport {
    pub fn new(color: &Color, name: String) -> ColorReport {
        ColorReport {
            hex: color.hex(),
            r: color.r(),
            g: color.g(),
            b: color.b(),
            brightness: color.brightness(),
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub analyzed_at: DateTime<Utc>,
    pub total: usize,
    pub valid: usize,
    pub brightest: ColorReport,
    /// Sorted by brightness, descending.
    pub colors: Vec<ColorReport>,
    pub rejected: Vec<Rejected>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_of(colors: Vec<Color>) -> Analysis {
        Analysis {
            brightest: colors[0],
            total: colors.len(),
            colors,
            rejected: vec![],
        }
    }

    #[test]
    fn test_sorted_by_brightness_is_descending_and_stable() -> Result<(), Error> {
        // #01557B and #005A4F have exactly the same brightness.
        let analysis = analysis_of(vec![
            Color::from_hex("#000000")?,
            Color::from_hex("#01557B")?,
            Color::from_hex("#FFFFFF")?,
            Color::from_hex("#005A4F")?,
        ]);
        let hexes: Vec<String> = analysis.sorted_by_brightness().iter().map(Color::hex).collect();
        assert_eq!(hexes, ["#FFFFFF", "#01557B", "#005A4F", "#000000"]);
        assert_eq!(analysis.valid_count(), 4);

        let reversed = analysis_of(vec![
            Color::from_hex("#005A4F")?,
            Color::from_hex("#01557B")?,
        ]);
        let hexes: Vec<String> = reversed.sorted_by_brightness().iter().map(Color::hex).collect();
        assert_eq!(hexes, ["#005A4F", "#01557B"]);
        Ok(())
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidColorFormat("nope".to_owned()).to_string(),
            "invalid color format: \"nope\""
        );
        assert_eq!(Error::NoValidColors.to_string(), "no valid colors found");
        assert!(matches!(Error::from("missing hex"), Error::ParseError(_)));
    }
}
