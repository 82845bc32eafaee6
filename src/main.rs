use brightest_color::{
    AnalysisReport, AnalyzerConfig, BasicColorNames, ColorAnalyzer, ColorNameService, Fallback,
    NameCache,
};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

const SAMPLE_COLORS: [&str; 5] = ["#AABBCC", "#154331", "#A0B1C2", "#000000", "#FFFFFF"];

/// Find the brightest of a list of hex colors
#[derive(Parser)]
#[command(name = "brightest_color", about, version)]
struct Cli {
    /// Hex codes such as "#AABBCC", "aabbcc" or "#abc". Defaults to a sample list.
    colors: Vec<String>,

    /// Only accept 6-digit codes
    #[arg(long)]
    strict: bool,

    /// Skip the remote name table and use built-in names only
    #[arg(long)]
    offline: bool,

    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    #[arg(long)]
    lookup_url: Option<String>,

    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long)]
    cache_capacity: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> Result<AnalyzerConfig, brightest_color::Error> {
        let mut config = AnalyzerConfig::from_env()?;
        if self.strict {
            config.allow_shorthand = false;
        }
        if let Some(url) = &self.lookup_url {
            config.lookup_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.lookup_timeout_secs = secs;
        }
        if let Some(capacity) = self.cache_capacity {
            config.cache_capacity = capacity;
        }
        config.validate()?;
        Ok(config)
    }
}

fn print_text(report: &AnalysisReport) {
    println!("Color Analysis Results:");
    for color in &report.colors {
        println!(
            "{} - {} - Brightness: {:.2}",
            color.hex, color.name, color.brightness
        );
    }
    if !report.rejected.is_empty() {
        println!(
            "Skipped: {}",
            report.rejected.iter().map(|r| &r.input).join(", ")
        );
    }
    let brightest = &report.brightest;
    println!();
    println!("Valid colors     : {}/{}", report.valid, report.total);
    println!(
        "Brightest color  : {} (R={}, G={}, B={})",
        brightest.hex, brightest.r, brightest.g, brightest.b
    );
    println!("Color name       : {}", brightest.name);
    println!("Brightness value : {:.2}", brightest.brightness);
}

#[tokio::main]
async fn main() -> Result<(), brightest_color::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let colors: Vec<String> = if cli.colors.is_empty() {
        SAMPLE_COLORS.iter().map(|c| c.to_string()).collect()
    } else {
        cli.colors.clone()
    };

    let analyzer = ColorAnalyzer::new(&config);
    let analysis = analyzer.analyze(colors.as_slice())?;

    let remote = if cli.offline {
        ColorNameService::empty()
    } else {
        ColorNameService::fetch(&config).await
    };
    if !cli.offline && remote.is_empty() {
        tracing::warn!("No remote color names available, using built-in names only");
    }
    let names = Fallback::new(BasicColorNames, remote);
    let mut cache = NameCache::with_capacity(config.cache_capacity);
    let report = analyzer.report(&analysis, &names, &mut cache);

    match cli.output {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
