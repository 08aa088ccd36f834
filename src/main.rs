use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use policylens::catalog::Catalog;
use policylens::core::model::AnalysisReport;
use policylens::export::{render_text_report, ReportFormat};
use policylens::parser::{FragmentDump, FragmentSource, PageRange};
use policylens::pipeline::{analyze_source_with_progress, analyze_text, export_report, AnalysisConfig};

#[derive(Parser, Debug)]
#[command(name = "policylens")]
#[command(version, about = "Insurance proposal coverage extraction and analysis", long_about = None)]
struct Cli {
    /// Log pipeline decisions (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a page fragment dump (JSON)
    Analyze {
        /// Fragment dump produced by the PDF text layer
        input: PathBuf,

        /// First page to read (1-based, default 3)
        #[arg(long, requires = "last_page")]
        first_page: Option<usize>,

        /// Last page to read (inclusive, default 6)
        #[arg(long, requires = "first_page")]
        last_page: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze already reconstructed proposal text
    Text {
        /// Plain text file, one table row per line
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show information about a fragment dump
    Info {
        input: PathBuf,
    },

    /// Print the built-in coverage catalog as JSON
    Catalog,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output directory (default: ./<input_name>_report)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format(s) to write
    #[arg(short, long, value_enum, default_values_t = vec![Format::Json, Format::Text])]
    format: Vec<Format>,

    /// Print only the output location
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Json,
    Text,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ReportFormat::Json,
            Format::Text => ReportFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            first_page,
            last_page,
            output,
        } => {
            let range = first_page.zip(last_page).map(|(first, last)| PageRange::new(first, last));
            analyze_dump(input, range, output)
        }
        Commands::Text { input, output } => analyze_plain_text(input, output),
        Commands::Info { input } => show_info(input),
        Commands::Catalog => print_catalog(),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_input(input: &Path) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }
    Ok(())
}

fn output_dir_for(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "proposal".to_string());
        PathBuf::from(format!("{stem}_report"))
    })
}

fn analyze_dump(input: PathBuf, range: Option<PageRange>, args: OutputArgs) -> Result<()> {
    check_input(&input)?;
    let dump = FragmentDump::load(&input)
        .with_context(|| format!("Failed to load fragment dump: {}", input.display()))?;

    if !args.quiet {
        println!("[*] Processing: {}", input.display());
    }

    let config = AnalysisConfig::new(range);
    let report = analyze_source_with_progress(&dump, &config, |percent, message| {
        info!(percent, "{message}");
    });

    finish(&input, &report, args)
}

fn analyze_plain_text(input: PathBuf, args: OutputArgs) -> Result<()> {
    check_input(&input)?;
    let text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read text: {}", input.display()))?;

    if !args.quiet {
        println!("[*] Processing: {}", input.display());
    }

    let report = analyze_text(&text);
    finish(&input, &report, args)
}

fn finish(input: &Path, report: &AnalysisReport, args: OutputArgs) -> Result<()> {
    let output_dir = output_dir_for(input, args.output);
    let formats: Vec<ReportFormat> = args.format.iter().copied().map(Into::into).collect();

    export_report(report, Catalog::builtin(), &output_dir, &formats)
        .with_context(|| format!("Failed to export to: {}", output_dir.display()))?;

    if args.quiet {
        println!("{}", output_dir.display());
    } else {
        println!();
        print!("{}", render_text_report(report, Catalog::builtin()));
        println!("\n[✓] Done! Results saved to: {}", output_dir.display());
    }
    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    check_input(&input)?;
    let dump = FragmentDump::load(&input)
        .with_context(|| format!("Failed to load fragment dump: {}", input.display()))?;

    let page_count = dump.page_count();
    let range = PageRange::default_for(page_count);
    let fragments: usize = dump.pages.iter().map(Vec::len).sum();

    println!("Fragment Dump Information");
    println!("=========================");
    println!("File: {}", input.display());
    println!("Pages: {}", page_count);
    println!("Fragments: {}", fragments);
    println!("Default pages: {}-{}", range.first, range.last);

    Ok(())
}

fn print_catalog() -> Result<()> {
    let catalog = Catalog::builtin();
    let mut entries = serde_json::Map::new();
    for key in catalog.keys() {
        if let Some(resolved) = catalog.get(key) {
            entries.insert(key.to_string(), serde_json::to_value(resolved.entry)?);
        }
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
