//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use env_logger::Builder;
use log::{LevelFilter, info};

use chatlens::AnalyzerError;
use chatlens::cli::{Args, ReportFormat, TextReport};
use chatlens::config::{AnalysisConfig, WhatsAppConfig};
use chatlens::core::{apply_selection, to_csv, to_json, user_list};
use chatlens::parsers::{ChatParser, WhatsAppParser};
use chatlens::report::Report;

fn main() {
    let args = <Args as ClapParser>::parse();

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("chatlens"), args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AnalyzerError> {
    let total_start = Instant::now();
    info!("chatlens v{}", env!("CARGO_PKG_VERSION"));

    let parser = WhatsAppParser::with_config(WhatsAppConfig::new().with_strict(args.strict));
    info!("Parsing {} export {}", parser.name(), args.input);
    let records = parser.parse(Path::new(&args.input))?;
    info!("Found {} messages", records.len());

    if args.list_users {
        return emit(args, &user_list(&records).join("\n"));
    }

    let selection = args.selection();
    selection.validate(&records)?;

    let mut config = AnalysisConfig::new()
        .with_top_words(args.top)
        .with_top_users(args.top_users);
    if let Some(path) = &args.stop_words {
        config = config.with_stop_words_file(path)?;
    }

    let output = match args.format {
        ReportFormat::Text => {
            TextReport(&Report::build(selection, &records, &config)).to_string()
        }
        ReportFormat::Json => to_json(&Report::build(selection, &records, &config))?,
        ReportFormat::Csv => {
            let selected: Vec<_> = apply_selection(&records, &selection)
                .into_iter()
                .cloned()
                .collect();
            to_csv(&selected)?
        }
    };
    emit(args, &output)?;

    info!("Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Writes to `--output` when given, stdout otherwise.
fn emit(args: &Args, content: &str) -> Result<(), AnalyzerError> {
    match &args.output {
        Some(path) => {
            fs::write(path, content)?;
            info!("✅ Output saved to {}", path);
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
