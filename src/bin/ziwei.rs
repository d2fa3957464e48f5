// Command-line entry point
//
// Usage:
//   ziwei --charts charts/ palace 命宫 --subject alice --birth 1990-05-17,12:30,female,Taipei
//   ziwei --charts charts/ patterns --subject alice --birth 1990-05-17,12:30,female,Taipei --scope yearly --year 2025
//   ziwei --charts charts/ synastry --a alice --a-birth ... --b bob --b-birth ... --format markdown

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ziwei_analyzer::chart::{Palace, Scope};
use ziwei_analyzer::data::{BirthInfo, Gender};
use ziwei_analyzer::explanation::RenderOptions;
use ziwei_analyzer::{
    AnalysisError, Analyzer, AnalyzerConfig, ChartRequest, JsonChartProvider, JsonFormatter, MarkdownFormatter,
    Outcome, ScopeQuery, SynastryRequest,
};

#[derive(Parser, Debug)]
#[command(name = "ziwei")]
#[command(version)]
#[command(about = "Zi Wei Dou Shu chart analysis: palaces, patterns and synastry")]
struct Cli {
    /// Directory holding `<subject>.json` chart documents
    #[arg(long = "charts", value_name = "DIR", default_value = "charts", global = true)]
    charts: PathBuf,

    /// Config file (overrides ZIWEI_CONFIG)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "json", global = true)]
    format: OutputFormat,

    /// Compact JSON (no whitespace)
    #[arg(long = "compact", global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a palace with its opposite and trines
    Palace {
        /// Palace name, Chinese or English (命宫, 财帛, career, ...)
        palace: String,
        #[arg(long = "subject")]
        subject: String,
        /// date,time,gender,city[,lunar[,leap]]
        #[arg(long = "birth", value_parser = parse_birth)]
        birth: BirthInfo,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Detect named patterns in one chart
    Patterns {
        #[arg(long = "subject")]
        subject: String,
        #[arg(long = "birth", value_parser = parse_birth)]
        birth: BirthInfo,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Score chart B projected onto chart A
    Synastry {
        #[arg(long = "a")]
        a: String,
        #[arg(long = "a-birth", value_parser = parse_birth)]
        a_birth: BirthInfo,
        #[arg(long = "b")]
        b: String,
        #[arg(long = "b-birth", value_parser = parse_birth)]
        b_birth: BirthInfo,
        #[command(flatten)]
        scope: ScopeArgs,
        /// Hide contribution lines weaker than this
        #[arg(long = "min-effect", value_name = "ABS")]
        min_effect: Option<f64>,
        /// Keep at most N highlights and N risks per palace
        #[arg(long = "max-items", value_name = "N")]
        max_items: Option<usize>,
        /// Include raw per-palace sums and every contribution line
        #[arg(long = "include-raw")]
        include_raw: bool,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct ScopeArgs {
    /// Time layer [origin, decadal, yearly, monthly, daily]
    #[arg(long = "scope", default_value = "origin", value_parser = parse_scope)]
    scope: Scope,
    #[arg(long = "year")]
    year: Option<i32>,
    #[arg(long = "month")]
    month: Option<u32>,
    #[arg(long = "day")]
    day: Option<u32>,
}

impl From<ScopeArgs> for ScopeQuery {
    fn from(args: ScopeArgs) -> Self {
        ScopeQuery::new(args.scope, args.year, args.month, args.day)
    }
}

fn parse_scope(s: &str) -> std::result::Result<Scope, String> {
    s.parse().map_err(|e: AnalysisError| e.to_string())
}

fn parse_birth(s: &str) -> std::result::Result<BirthInfo, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() < 4 {
        return Err("expected date,time,gender,city[,lunar[,leap]]".to_string());
    }
    let gender: Gender = parts[2].parse().map_err(|e: AnalysisError| e.to_string())?;
    let flags = &parts[4..];
    let birth = BirthInfo {
        date: parts[0].to_string(),
        time: parts[1].to_string(),
        gender,
        city: parts[3].to_string(),
        lunar: flags.contains(&"lunar"),
        leap: flags.contains(&"leap"),
    };
    birth.validate().map_err(|e| e.to_string())?;
    Ok(birth)
}

/// Envelope written to stdout in JSON mode
#[derive(Serialize)]
struct Envelope<T> {
    #[serde(flatten)]
    outcome: Outcome<T>,
    generated_at: DateTime<Utc>,
}

fn emit<T: Serialize>(
    cli: &Cli,
    result: ziwei_analyzer::Result<T>,
    markdown: impl FnOnce(&T) -> String,
) -> Result<bool> {
    let success = result.is_ok();
    let output = match (cli.format, result) {
        (OutputFormat::Markdown, Ok(data)) => markdown(&data),
        (_, result) => {
            let envelope = Envelope { outcome: Outcome::from_result(result), generated_at: Utc::now() };
            if cli.compact {
                JsonFormatter::format_compact(&envelope)?
            } else {
                JsonFormatter::format(&envelope)?
            }
        }
    };
    println!("{}", output);
    Ok(success)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ziwei_analyzer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::from_env().context("Failed to load configuration")?,
    };
    tracing::info!(charts = ?cli.charts, "using chart directory");
    let analyzer = Analyzer::new(JsonChartProvider::new(cli.charts.clone()), config);

    let success = match &cli.command {
        Command::Palace { palace, subject, birth, scope } => {
            let result = palace.parse::<Palace>().and_then(|palace| {
                let request = ChartRequest { subject: subject.clone(), birth: birth.clone(), query: (*scope).into() };
                analyzer.palace(&request, palace)
            });
            emit(&cli, result, MarkdownFormatter::format_palace)?
        }
        Command::Patterns { subject, birth, scope } => {
            let request = ChartRequest { subject: subject.clone(), birth: birth.clone(), query: (*scope).into() };
            emit(&cli, analyzer.patterns(&request), MarkdownFormatter::format_patterns)?
        }
        Command::Synastry { a, a_birth, b, b_birth, scope, min_effect, max_items, include_raw } => {
            let defaults = &analyzer.config().render.options;
            let render = (min_effect.is_some() || max_items.is_some()).then(|| RenderOptions {
                min_abs_effect: min_effect.unwrap_or(defaults.min_abs_effect),
                max_items_per_polarity: max_items.or(defaults.max_items_per_polarity),
            });
            let request = SynastryRequest {
                a: ChartRequest { subject: a.clone(), birth: a_birth.clone(), query: (*scope).into() },
                b: ChartRequest { subject: b.clone(), birth: b_birth.clone(), query: (*scope).into() },
                render,
                include_raw_data: *include_raw,
            };
            emit(&cli, analyzer.synastry(&request), MarkdownFormatter::format_synastry)?
        }
    };

    if !success {
        std::process::exit(1);
    }
    Ok(())
}
