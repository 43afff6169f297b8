//! unhwp CLI - HWP text and table extraction tool

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use unhwp::{JsonFormat, Unhwp};

#[derive(Parser)]
#[command(name = "unhwp")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract text and tables from HWP files", long_about = None)]
struct Cli {
    /// Path to the .hwp file
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output file path (for json/tables mode)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output mode
    #[arg(long, value_enum, default_value = "text")]
    mode: Mode,

    /// Normalize text output (remove NBSP, trim trailing whitespace)
    #[arg(long)]
    normalize: bool,

    /// Compose text to Unicode NFC when normalizing
    #[arg(long)]
    nfc: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// hwp5txt program used to decode HWP files
    #[arg(long, env = "UNHWP_HWP5TXT", value_name = "PROGRAM")]
    decoder: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print text to stdout
    Text,
    /// Export normalized text to a JSON file
    Json,
    /// Extract pipe tables as JSON
    Tables,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Processing {} in {:?} mode", cli.input.display(), cli.mode);

    let result = match cli.mode {
        Mode::Text => cmd_text(&cli),
        Mode::Json => cmd_json(&cli),
        Mode::Tables => cmd_tables(&cli),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn pipeline(cli: &Cli) -> Unhwp {
    let mut unhwp = Unhwp::new();
    if let Some(ref program) = cli.decoder {
        unhwp = unhwp.with_hwp5txt(program);
    }
    if cli.normalize {
        unhwp = unhwp.normalized();
    }
    if cli.nfc {
        unhwp = unhwp.with_nfc();
    }
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    unhwp.with_json_format(format)
}

fn cmd_text(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let result = pipeline(cli).open(&cli.input)?;
    println!("{}", result.to_text());
    Ok(())
}

fn cmd_json(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = cli
        .output
        .as_deref()
        .ok_or("--output is required for json mode")?;

    let result = pipeline(cli).open(&cli.input)?;
    result.export_json(output)?;
    println!("{} {}", "Exported to:".green(), output.display());

    Ok(())
}

fn cmd_tables(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let result = pipeline(cli).open(&cli.input)?;
    let doc = result.tables_document();

    if let Some(ref path) = cli.output {
        result.write_json(&doc, path)?;
        println!(
            "{} {} tables, exported to: {}",
            "Found".green(),
            doc.metric(),
            path.display()
        );
    } else {
        println!("{}", result.to_json(&doc)?);
    }

    Ok(())
}
