use chrono::Utc;

use crate::common::color::{parse_hex, Color};
use crate::common::data::{Analysis, AnalysisReport, ColorReport, Error, Rejected};
use crate::common::names::{NameCache, NameLookup};
use crate::config::AnalyzerConfig;

#[derive(Debug, Clone, Copy)]
pub struct ColorAnalyzer {
    allow_shorthand: bool,
}

impl Default for ColorAnalyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl ColorAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            allow_shorthand: config.allow_shorthand,
        }
    }

    pub fn parse(&self, input: &str) -> Result<Color, Error> {
        parse_hex(input, self.allow_shorthand)
    }

    /// Decode every input and pick the brightest color.
    ///
    /// Inputs that fail to decode are skipped and listed in
    /// [`Analysis::rejected`]. Fails with [`Error::NoValidColors`] when
    /// nothing decodes.
    pub fn analyze<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Analysis, Error> {
        let mut colors = Vec::with_capacity(inputs.len());
        let mut rejected = Vec::new();

        for input in inputs {
            let input: &str = input.as_ref();
            match self.parse(input) {
                Ok(color) => colors.push(color),
                Err(e) => {
                    tracing::warn!("Skipping invalid color {input:?}: {e}");
                    rejected.push(Rejected {
                        input: input.to_owned(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let brightest = get_brightest(&colors).ok_or(Error::NoValidColors)?;
        Ok(Analysis {
            brightest,
            colors,
            rejected,
            total: inputs.len(),
        })
    }

    /// Attach names to an analysis. Lookups go through `cache`.
    pub fn report(
        &self,
        analysis: &Analysis,
        lookup: &dyn NameLookup,
        cache: &mut NameCache,
    ) -> AnalysisReport {
        let mut describe = |color: &Color| {
            let name = cache.get_or_lookup(&color.hex(), lookup);
            ColorReport::new(color, name)
        };

        let brightest = describe(&analysis.brightest);
        let colors = analysis
            .sorted_by_brightness()
            .iter()
            .map(&mut describe)
            .collect();

        AnalysisReport {
            analyzed_at: Utc::now(),
            total: analysis.total,
            valid: analysis.valid_count(),
            brightest,
            colors,
            rejected: analysis.rejected.clone(),
        }
    }
}

/// First color with the highest brightness.
pub fn get_brightest(colors: &[Color]) -> Option<Color> {
    colors.iter().copied().fold(None, |best, color| match best {
        Some(best) if best.brightness() >= color.brightness() => Some(best),
        _ => Some(color),
    })
}

/// [`ColorAnalyzer::analyze`] with the default configuration.
pub fn analyze_colors<S: AsRef<str>>(inputs: &[S]) -> Result<Analysis, Error> {
    ColorAnalyzer::default().analyze(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::names::{BasicColorNames, UNKNOWN};

    #[test]
    fn test_sample_colors() -> Result<(), Error> {
        let analysis = analyze_colors(&["#AABBCC", "#154331", "#A0B1C2", "#000000", "#FFFFFF"])?;

        assert_eq!(analysis.brightest.hex(), "#FFFFFF");
        assert_eq!(analysis.valid_count(), 5);
        assert_eq!(analysis.total, 5);
        assert!(analysis.rejected.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_inputs_are_reported() -> Result<(), Error> {
        let analysis = analyze_colors(&["#FF0000", "invalid", "#00FF00"])?;

        assert_eq!(analysis.brightest.hex(), "#00FF00");
        assert_eq!((analysis.valid_count(), analysis.total), (2, 3));
        assert_eq!(analysis.rejected.len(), 1);
        assert_eq!(analysis.rejected[0].input, "invalid");
        assert!(analysis.rejected[0].reason.contains("invalid"));
        Ok(())
    }

    #[test]
    fn test_no_valid_colors() {
        let empty: [&str; 0] = [];
        assert!(matches!(analyze_colors(&empty), Err(Error::NoValidColors)));
        assert!(matches!(
            analyze_colors(&["nope", "#12345", ""]),
            Err(Error::NoValidColors)
        ));
    }

    #[test]
    fn test_ties_keep_first_occurrence() -> Result<(), Error> {
        // Different colors with exactly the same brightness.
        let teal = Color::from_hex("#01557B")?;
        let green = Color::from_hex("#005A4F")?;
        assert_ne!(teal, green);
        assert_eq!(teal.brightness(), green.brightness());

        let analysis = analyze_colors(&["#000000", "#01557B", "#005A4F"])?;
        assert_eq!(analysis.brightest, teal);

        let analysis = analyze_colors(&["#005A4F", "#01557B", "#000000"])?;
        assert_eq!(analysis.brightest, green);

        assert_eq!(get_brightest(&[green, teal]), Some(green));
        assert_eq!(get_brightest(&[]), None);
        Ok(())
    }

    #[test]
    fn test_strict_analyzer_rejects_shorthand() -> Result<(), Error> {
        let strict = ColorAnalyzer::new(&AnalyzerConfig {
            allow_shorthand: false,
            ..AnalyzerConfig::default()
        });
        let analysis = strict.analyze(&["#fff", "#808080"])?;

        assert_eq!(analysis.brightest.hex(), "#808080");
        assert_eq!(analysis.rejected[0].input, "#fff");

        let relaxed = ColorAnalyzer::default().analyze(&["#fff", "#808080"])?;
        assert_eq!(relaxed.brightest.hex(), "#FFFFFF");
        Ok(())
    }

    #[test]
    fn test_analysis_is_repeatable() -> Result<(), Error> {
        let inputs = vec!["#FF5733".to_owned(), "#33FF57".to_owned(), "INVALID".to_owned()];
        let analyzer = ColorAnalyzer::default();
        assert_eq!(analyzer.analyze(inputs.as_slice())?, analyzer.analyze(inputs.as_slice())?);
        Ok(())
    }

    #[test]
    fn test_report_names_and_order() -> Result<(), Error> {
        let analyzer = ColorAnalyzer::default();
        let analysis = analyzer.analyze(&["#000000", "#123456", "bad", "#FFFFFF", "#000000"])?;
        let mut cache = NameCache::with_capacity(8);

        let report = analyzer.report(&analysis, &BasicColorNames, &mut cache);

        assert_eq!(report.brightest.hex, "#FFFFFF");
        assert_eq!(report.brightest.name, "White");
        assert_eq!((report.valid, report.total), (4, 5));
        let names: Vec<&str> = report.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["White", UNKNOWN, "Black", "Black"]);
        assert_eq!(report.rejected[0].input, "bad");
        assert_eq!(cache.len(), 3);

        let json = serde_json::to_value(&report)?;
        assert_eq!(json["brightest"]["name"], "White");
        assert_eq!(json["colors"].as_array().map(Vec::len), Some(4));
        assert!(json["analyzed_at"].is_string());
        Ok(())
    }
}
