use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;

use style_linter::config::{Args, Command, Config, OutputFormat};
use style_linter::pack::{StylePack, resolve_style_pack};
use style_linter::report::{format_report, lint, score, violations};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(compliant) => {
            if compliant {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new().filter_level(filter).init();
}

/// Run the selected subcommand; Ok(false) means a lint failure exit
fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Check {
            file,
            content,
            format,
            pack,
        } => {
            let config = Config::new(pack, &args.log_level)?;
            let style_pack = resolve_style_pack(&config)?;

            let label = file
                .as_ref()
                .filter(|p| p.as_os_str() != "-")
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned());
            let text = read_content(file.as_deref(), content.as_deref())?;

            run_check(&text, &style_pack, format, label.as_deref())
        }
        Command::Rules { pack } => {
            let config = Config::new(pack, &args.log_level)?;
            let style_pack = resolve_style_pack(&config)?;
            print_rules(&style_pack);
            Ok(true)
        }
        Command::Grade { file } => {
            let text = read_content(file.as_deref(), None)?;
            println!("{:.1}", style_linter::grade_level(&text));
            Ok(true)
        }
    }
}

/// Read the text to analyze from a file, inline argument, or stdin
fn read_content(file: Option<&Path>, inline: Option<&str>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }

    match file {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read from stdin")?;
            Ok(text)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read content file: {}", path.display())),
        None => bail!("provide content via a file argument, --content, or '-' for stdin"),
    }
}

fn run_check(
    text: &str,
    pack: &StylePack,
    format: OutputFormat,
    label: Option<&str>,
) -> Result<bool> {
    log::info!("linting {} bytes of content", text.len());

    let report = lint(text, pack);
    let compliance_score = score(&report);
    let compliant = report.is_compliant();

    match format {
        OutputFormat::Json => {
            let envelope = json!({
                "violations": violations(&report, pack),
                "compliant": compliant,
                "score": compliance_score,
                "report": report,
            });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Console => {
            println!("{}", format_report(&report, pack, label));
            if compliant {
                println!("\n✓ Content is style compliant (score: {:.2}/1.00)", compliance_score);
            } else {
                println!("\nStyle compliance score: {:.2}/1.00", compliance_score);
            }
        }
    }

    Ok(compliant)
}

fn print_rules(pack: &StylePack) {
    println!("Style Pack Rules");
    println!("{}", "=".repeat(50));
    println!(
        "Brand Voice: {}",
        pack.brand_voice.as_deref().unwrap_or("Not specified")
    );
    println!("Reading Level: {}", pack.reading_level);

    if pack.must_use.is_empty() {
        println!("Required Terms: None");
    } else {
        println!("Required Terms: {}", pack.must_use.join(", "));
    }

    if pack.must_avoid.is_empty() {
        println!("Banned Terms: None");
    } else {
        println!("Banned Terms: {}", pack.must_avoid.join(", "));
    }
}
