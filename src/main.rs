//! Beacon CLI
//!
//! Command-line interface for Beacon operations:
//! - Test significance between two variants
//! - Analyze a whole A/B test from JSON
//! - Generate content variations and creatives
//! - Run compliance checks

use anyhow::{bail, Context};
use beacon::config::{generate_default_config, Config, LoggingConfig};
use beacon::creative::{ContentGenerator, CreativeRequest};
use beacon::experiment::{analyze_test, compute_significance, AbTest, TestReport, Variant};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "beacon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Marketing experiment analytics and content tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two variants given as VISITORS/CONVERSIONS
    Significance {
        /// Control counters, e.g. 1000/50
        #[arg(long)]
        control: String,
        /// Treatment counters, e.g. 1000/80
        #[arg(long)]
        treatment: String,
    },

    /// Analyze every variant of an A/B test stored as JSON
    Analyze {
        /// Path to the test JSON
        path: PathBuf,
    },

    /// Generate content variations
    Generate {
        #[arg(short, long)]
        brief: String,
        /// Content type (ad_copy, social_post, email, landing_page, blog_post, banner_ad)
        #[arg(short = 't', long = "type")]
        content_type: String,
        /// Tone (professional, casual, urgent, inspirational, humorous, luxury)
        #[arg(long, default_value = "professional")]
        tone: String,
        /// Seed for illustrative metrics
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a creative with imagery and a compliance verdict
    Creative {
        #[arg(short, long)]
        brief: String,
        #[arg(short = 't', long = "type")]
        content_type: String,
        #[arg(short, long, default_value = "facebook")]
        platform: String,
        #[arg(long, default_value = "professional")]
        tone: String,
        #[arg(long)]
        image_style: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check copy against platform rules
    Compliance {
        /// Copy to check (or use --file)
        text: Option<String>,
        /// Read copy from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(short, long)]
        platform: String,
        #[arg(short = 't', long = "type")]
        content_type: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let json = cli.format == "json";

    match cli.command {
        Commands::Significance { control, treatment } => {
            let a = parse_counts("control", &control)?;
            let b = parse_counts("variant_1", &treatment)?;
            let result = compute_significance(&a, &b)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Control rate:   {:.2}%", result.control_rate * 100.0);
                println!("Treatment rate: {:.2}%", result.treatment_rate * 100.0);
                println!("Lift:           {:+.2}%", result.lift);
                println!("z-score:        {:.3}", result.z_score);
                println!("Confidence:     {}", result.significance);
            }
        }

        Commands::Analyze { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let test: AbTest = serde_json::from_str(&content)
                .with_context(|| format!("Invalid test JSON in {:?}", path))?;

            let report = analyze_test(&test, &config.experiment)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Commands::Generate {
            brief,
            content_type,
            tone,
            seed,
        } => {
            let mut config = config;
            if seed.is_some() {
                config.generator.seed = seed;
            }
            let mut generator = ContentGenerator::from_config(&config);
            let draft = generator.generate_draft(&brief, &content_type, &tone)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&draft)?);
            } else {
                for (i, variation) in draft.variations.iter().enumerate() {
                    println!("--- Variation {} ---", i + 1);
                    println!("{}", variation.content);
                    println!(
                        "(illustrative) {}",
                        serde_json::to_string(&variation.metrics)?
                    );
                    println!();
                }
            }
        }

        Commands::Creative {
            brief,
            content_type,
            platform,
            tone,
            image_style,
            seed,
        } => {
            let mut config = config;
            if seed.is_some() {
                config.generator.seed = seed;
            }
            let mut generator = ContentGenerator::from_config(&config);
            let asset = generator.generate_creative(&CreativeRequest {
                brief,
                content_type,
                platform,
                tone,
                image_style,
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&asset)?);
            } else {
                println!("{}", asset.content);
                println!();
                println!("Images:");
                for (url, desc) in asset.image_urls.iter().zip(asset.image_descriptions.iter()) {
                    println!("  {:<28} {}", url, desc);
                }
                println!();
                println!("Compliance: {}", asset.compliance_status);
                for issue in &asset.compliance_issues {
                    println!("  [{}] {}: {}", issue.kind, issue.message, issue.suggestion);
                }
            }
        }

        Commands::Compliance {
            text,
            file,
            platform,
            content_type,
        } => {
            let content = match (text, file) {
                (Some(t), _) => t,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?,
                (None, None) => bail!("Provide copy as an argument or with --file"),
            };

            let checker = beacon::creative::ComplianceChecker::new(config.compliance.clone());
            let report = checker.check(&content, &platform, &content_type);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Status: {}", report.status);
                for issue in &report.issues {
                    println!("  [{}] {}", issue.kind, issue.message);
                    println!("      {}", issue.suggestion);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("beacon={}", logging.level)));

    // Logs go to stderr so JSON output on stdout stays parseable
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Parse "VISITORS/CONVERSIONS" into a variant
fn parse_counts(id: &str, s: &str) -> anyhow::Result<Variant> {
    let (visitors, conversions) = s
        .split_once('/')
        .with_context(|| format!("Expected VISITORS/CONVERSIONS, got '{}'", s))?;

    let visitors: u64 = visitors
        .trim()
        .parse()
        .with_context(|| format!("Invalid visitor count in '{}'", s))?;
    let conversions: u64 = conversions
        .trim()
        .parse()
        .with_context(|| format!("Invalid conversion count in '{}'", s))?;

    Ok(Variant::new(id, id).counts(visitors, conversions))
}

fn print_report(report: &TestReport) {
    println!("{} (#{}, {})", report.test_name, report.test_id, report.status);
    println!();
    println!(
        "{:<12} {:<20} {:>9} {:>11} {:>9} {:>9}",
        "ID", "Name", "Visitors", "Conversions", "Rate", "Rev/Vis"
    );
    println!("{}", "-".repeat(75));

    for v in std::iter::once(&report.control).chain(report.variants.iter()) {
        println!(
            "{:<12} {:<20} {:>9} {:>11} {:>9} {:>9}",
            v.id,
            v.name,
            v.visitors,
            v.conversions,
            v.conversion_rate
                .map(|r| format!("{:.2}%", r))
                .unwrap_or_else(|| "-".to_string()),
            v.revenue_per_visitor
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    println!();
    for c in &report.comparisons {
        match c.result() {
            Some(r) => println!(
                "{:<12} lift {:+.2}%  confidence {}{}",
                c.variant_id,
                r.lift,
                r.significance,
                if c.underpowered { "  (underpowered)" } else { "" }
            ),
            None => println!("{:<12} insufficient data", c.variant_id),
        }
    }

    println!();
    println!("{}", report.recommendation);
}
