//! Find the brightest of a list of hex color codes, and optionally name it.
//!
//! ```
//! let analysis = brightest_color::analyze_colors(&["#FF0000", "invalid", "#00FF00"]).unwrap();
//! assert_eq!(analysis.brightest.hex(), "#00FF00");
//! assert_eq!(analysis.valid_count(), 2);
//! ```

pub mod analyzer;
pub mod common;
pub mod config;

pub use analyzer::{analyze_colors, ColorAnalyzer};
pub use common::color::Color;
pub use common::data::{Analysis, AnalysisReport, ColorReport, Error, Rejected};
pub use common::names::{BasicColorNames, ColorNameService, Fallback, NameCache, NameLookup, UNKNOWN};
pub use config::AnalyzerConfig;
