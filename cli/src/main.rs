//! abacus CLI - prepares Word documents for word counting

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use abacus::options::{default_config_path, ConfigLoader, ConfigSource, ResolvedConfig};
use abacus::{JsonFormat, ParseOptions, Processor, WordCounter};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(version)]
#[command(
    about = "Strip headings, captions, citations and ignored sections from a .docx before counting words",
    long_about = None
)]
struct Cli {
    /// The file path to the document
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// The config file with the exclusion rules (default: ~/.abbacus/config.ini)
    #[arg(short, long, value_name = "PATH", env = "ABACUS_CONFIG")]
    config: Option<PathBuf>,

    /// Overwrite the previous output; when false the output name carries a timestamp
    #[arg(short, long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    overwrite: bool,

    /// Print the processing report as JSON
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the words in a document without changing it
    Count {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Include words in tables
        #[arg(long)]
        tables: bool,
    },

    /// Show the resolved configuration
    Config {
        /// Config file (default: ~/.abbacus/config.ini)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Count { input, tables }) => cmd_count(&input, tables),
        Some(Commands::Config { path }) => cmd_config(path.or(cli.config)),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_process(&input, cli.config, cli.overwrite, cli.json, cli.compact)
            } else {
                println!("{}", "Usage: abacus --input <FILE>".yellow());
                println!("       abacus --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), describe(e.as_ref()));
        std::process::exit(1);
    }
}

/// Error text shown to the user, distinguishing bad input from internal faults.
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    match error.downcast_ref::<abacus::Error>() {
        Some(abacus::Error::Io(io)) if io.kind() == std::io::ErrorKind::PermissionDenied => {
            format!("{} (close the output file before trying again)", io)
        }
        Some(e) if e.is_input_error() => {
            format!("An error occurred relating to a bad input: {}", e)
        }
        Some(e) => format!("Internal error: {}", e),
        None => error.to_string(),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<(ResolvedConfig, ConfigSource), abacus::Error> {
    let loader = match path {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::from_default_path()?,
    };
    loader.load()
}

fn cmd_process(
    input: &Path,
    config: Option<PathBuf>,
    overwrite: bool,
    json: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (resolved, source) = load_config(config)?;
    log::debug!("Config source: {:?}", source);
    if let ConfigSource::CreatedDefault(path) = &source {
        eprintln!("{} {}", "Created default config at".yellow(), path.display());
    }
    for warning in &resolved.warnings {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Processing {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = Processor::new(resolved.options)
        .with_overwrite(overwrite)
        .with_parse_options(ParseOptions::new().lenient())
        .process_file(input);
    let outcome = match outcome {
        Ok(outcome) => {
            pb.finish_with_message("Done!");
            outcome
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", abacus::render::to_json(&outcome, format)?);
        return Ok(());
    }

    println!("\n{}", "Output file:".green().bold());
    println!("  {} {}", "└─".dimmed(), outcome.output.display());
    println!();
    println!("{}", "Word Count".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Before".bold(), outcome.words_before);
    println!("{}: {}", "After".bold(), outcome.words_after.to_string().green());
    println!("{}: {}", "Removed".bold(), outcome.words_removed());
    println!();
    println!("{}", outcome.report.to_string().dimmed());

    Ok(())
}

fn cmd_count(input: &Path, tables: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = abacus::parse_file_with_options(input, ParseOptions::new().lenient())?;
    let count = WordCounter::new().with_tables(tables).count_document(&doc);

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Words".bold(), count.body);
    if tables {
        println!("{}: {}", "Words in tables".bold(), count.tables);
        println!("{}: {}", "Total".bold(), count.total().to_string().green());
    }
    Ok(())
}

fn cmd_config(path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let (resolved, source) = load_config(path)?;
    let path = match &source {
        ConfigSource::File(path) => path.clone(),
        ConfigSource::CreatedDefault(path) => {
            println!("{} {}", "Created default config at".yellow(), path.display());
            path.clone()
        }
    };

    println!("{}", "Configuration".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), path.display());
    for line in resolved.options.to_string().lines() {
        println!("  {}", line);
    }
    for warning in &resolved.warnings {
        println!("{}: {}", "Warning".yellow().bold(), warning);
    }
    for key in &resolved.unrecognized {
        println!("{}: {} is not an implemented option", "Warning".yellow().bold(), key);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "abacus".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Prepares Word documents for word counting");
    println!();
    if let Some(path) = default_config_path() {
        println!("Default config: {}", path.display().to_string().dimmed());
    }
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overwrite_defaults_to_true() {
        let cli = Cli::try_parse_from(["abacus", "--input", "a.docx"]).unwrap();
        assert!(cli.overwrite);
        assert_eq!(cli.input, Some(PathBuf::from("a.docx")));
    }

    #[test]
    fn test_overwrite_takes_a_value() {
        let cli = Cli::try_parse_from(["abacus", "-i", "a.docx", "-o", "false"]).unwrap();
        assert!(!cli.overwrite);
    }

    #[test]
    fn test_compact_requires_json() {
        assert!(Cli::try_parse_from(["abacus", "-i", "a.docx", "--compact"]).is_err());
        assert!(Cli::try_parse_from(["abacus", "-i", "a.docx", "--json", "--compact"]).is_ok());
    }

    #[test]
    fn test_config_command_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[DEFAULT]\nheadings = True\nfigures = True\n").unwrap();
        assert!(cmd_config(Some(path)).is_ok());
    }

    #[test]
    fn test_config_command_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(cmd_config(Some(dir.path().join("missing.ini"))).is_err());
    }

    #[test]
    fn test_describe_input_errors() {
        let err: Box<dyn std::error::Error> =
            Box::new(abacus::Error::InvalidInput("notes.txt".to_string()));
        assert_eq!(
            describe(err.as_ref()),
            "An error occurred relating to a bad input: notes.txt is not a .docx file"
        );
    }
}
