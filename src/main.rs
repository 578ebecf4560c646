use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use flate2::read::GzDecoder;
use log::{debug, error};
use passage_sniffer::report::{write_report, ReportFormat};
use passage_sniffer::{Error, PassageSniffer, PassageSnifferConfig, DEFAULT_PASSAGE_SNIFFER_CONFIG};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_INPUT_TOO_SHORT: u8 = 2;

/// Scan two text files and report the similar sections of text between them.
#[derive(Debug, Parser)]
#[command(name = "passage-sniffer", version, about)]
struct Cli {
    /// First document (anchors are taken from this one). Use `-` for stdin.
    #[arg(value_name = "FILE_A")]
    file_a: PathBuf,

    /// Second document. Use `-` for stdin.
    #[arg(value_name = "FILE_B")]
    file_b: PathBuf,

    /// How many words to search to the left and right of a shared word
    #[arg(
        short = 'r',
        long,
        env = "PASSAGE_SNIFFER_WINDOW_RADIUS",
        default_value_t = DEFAULT_PASSAGE_SNIFFER_CONFIG.window_radius
    )]
    window_radius: usize,

    /// Minimum ratio of common words to the full window size
    #[arg(
        short = 'c',
        long,
        env = "PASSAGE_SNIFFER_SIMILARITY_CUTOFF",
        default_value_t = DEFAULT_PASSAGE_SNIFFER_CONFIG.similarity_cutoff
    )]
    similarity_cutoff: f64,

    /// Treat tabs and other Unicode whitespace as word separators
    #[arg(long, env = "PASSAGE_SNIFFER_SPLIT_ON_ALL_WHITESPACE")]
    split_on_all_whitespace: bool,

    /// Disable parallel neighborhood and candidate computation
    #[arg(long, env = "PASSAGE_SNIFFER_SEQUENTIAL")]
    sequential: bool,

    /// Maximum neighborhood comparisons before giving up (0 disables the limit)
    #[arg(
        long,
        env = "PASSAGE_SNIFFER_MAX_COMPARISONS",
        default_value_t = DEFAULT_PASSAGE_SNIFFER_CONFIG.max_comparisons.unwrap_or(0)
    )]
    max_comparisons: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the report to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON array of passage pairs
    Json,
    /// CSV with one row per passage pair
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

impl Cli {
    fn config(&self) -> PassageSnifferConfig {
        PassageSnifferConfig {
            window_radius: self.window_radius,
            similarity_cutoff: self.similarity_cutoff,
            split_on_all_whitespace: self.split_on_all_whitespace,
            parallel: !self.sequential,
            max_comparisons: (self.max_comparisons > 0).then_some(self.max_comparisons),
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(Error::InputTooShort { document, .. }) => {
                println!("The length of file {} is too short.", document.ordinal());
                debug!("{}", err);
                ExitCode::from(EXIT_INPUT_TOO_SHORT)
            }
            _ => {
                error!("{:#}", err);
                ExitCode::from(EXIT_FAILURE)
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    if is_stdin(&cli.file_a) && is_stdin(&cli.file_b) {
        bail!("Only one of the documents can be read from stdin");
    }

    let text_a = read_document(&cli.file_a)?;
    let text_b = read_document(&cli.file_b)?;

    let sniffer = PassageSniffer::new(cli.config())?;
    debug!("Configuration: {:?}", sniffer.config());

    let passages = sniffer.sniff(&text_a, &text_b)?;

    let mut report = Vec::new();
    write_report(&mut report, &passages, cli.format.into())?;

    if let Some(output) = &cli.output {
        std::fs::write(output, &report)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&report)?;
    stdout.flush()?;

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads a document, transparently decompressing `.gz` files. Line breaks become spaces.
fn read_document(path: &Path) -> Result<String> {
    let mut text = String::new();

    if is_stdin(path) {
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
    } else {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

        let is_gzip = path.extension().is_some_and(|extension| extension == "gz");
        let result = if is_gzip {
            GzDecoder::new(file).read_to_string(&mut text)
        } else {
            io::BufReader::new(file).read_to_string(&mut text)
        };

        result.with_context(|| format!("Failed to read {}", path.display()))?;
    }

    Ok(text.replace(['\n', '\r'], " "))
}
