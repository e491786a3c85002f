use clap::{Parser, Subcommand};
use codesniff::config::resolve_settings;
use codesniff::demo;
use codesniff::{ClassifierSettings, LanguageClassifier, SniffResult};
use std::path::{Path, PathBuf};

/// Guess the programming language of a code snippet
#[derive(Parser)]
#[command(name = "codesniff")]
#[command(version)]
#[command(about = "Guess the programming language of a code snippet")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/codesniff/codesniff.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a snippet and report language, confidence and matched keywords
    Classify {
        /// File to read (default: stdin)
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the detected language id
    Detect {
        /// File to read (default: stdin)
        file: Option<PathBuf>,
    },
    /// Show the per-language score breakdown
    Scores {
        /// File to read (default: stdin)
        file: Option<PathBuf>,

        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known languages in tie-break order
    Languages,
    /// Run the built-in sample battery and report pass/fail
    Demo,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns Ok(false) when the command ran but reported failures.
fn run(cli: Cli) -> SniffResult<bool> {
    let settings = resolve_settings(cli.config.as_deref())?;
    let classifier = LanguageClassifier::from_settings(&settings)?;

    match cli.command {
        Commands::Classify { file, json } => {
            let text = read_input(file.as_deref(), &settings)?;
            let result = classifier.classify(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{} ({}% confidence)", result.language, result.confidence);
                if !result.matched_keywords.is_empty() {
                    println!("keywords: {}", result.matched_keywords.join(", "));
                }
                if !result.matched_extensions.is_empty() {
                    println!("extensions: {}", result.matched_extensions.join(", "));
                }
            }
        }
        Commands::Detect { file } => {
            let text = read_input(file.as_deref(), &settings)?;
            println!("{}", classifier.detect_language(&text));
        }
        Commands::Scores { file, json } => {
            let text = read_input(file.as_deref(), &settings)?;
            let mut scores = classifier.scores(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                // Stable sort keeps table order among equal scores
                scores.sort_by(|a, b| b.score.cmp(&a.score));
                for score in scores.iter().filter(|s| s.score > 0) {
                    let b = score.breakdown;
                    println!(
                        "{:<11} {:>4}  ext={} shebang={} keywords={} patterns={} syntax={}",
                        score.language,
                        score.score,
                        b.extension,
                        b.shebang,
                        b.keywords,
                        b.patterns,
                        b.syntax
                    );
                }
            }
        }
        Commands::Languages => {
            for signature in classifier.table().iter() {
                println!("{:<11} {}", signature.id(), signature.extensions().join(", "));
            }
        }
        Commands::Demo => {
            let report = demo::run(&classifier, demo::SAMPLES);
            println!("{}", report);
            return Ok(report.all_passed());
        }
    }
    Ok(true)
}

fn read_input(file: Option<&Path>, settings: &ClassifierSettings) -> SniffResult<String> {
    // Binary input is classified too; invalid UTF-8 becomes U+FFFD
    match file {
        Some(path) => settings.read_input(std::fs::File::open(path)?),
        None => settings.read_input(std::io::stdin().lock()),
    }
}
