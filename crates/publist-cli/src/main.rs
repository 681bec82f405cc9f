use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use publist_core::config_file::{self, ConfigFile};
use publist_emit::Emitter;
use publist_parsing::{EntryExtractor, ParsingConfigBuilder};

mod output;

use output::ColorMode;

const DEFAULT_INPUT: &str = "new.txt";

/// Publication list converter - Turn a numbered plain-text bibliography into per-entry index.md files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the list and write one <number>/index.md per entry
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Directory receiving the entry directories (default: the input file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Parse the list and print the entries without writing anything
    DryRun {
        #[command(flatten)]
        source: SourceArgs,

        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Path to the publication list (default: new.txt)
    input: Option<PathBuf>,

    /// Path to a TOML config file (default: .publist.toml over the platform config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Year used when an entry's venue line has none
    #[arg(long)]
    fallback_year: Option<String>,

    /// Number of lines after a title line searched for authors and venue
    #[arg(long)]
    body_window: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert { source, output_dir } => convert(source, output_dir),
        Command::DryRun { source, json } => dry_run(source, json),
    }
}

/// Settings shared by both subcommands after CLI, env and config file are merged.
struct Resolved {
    input: PathBuf,
    config: ConfigFile,
    extractor: EntryExtractor,
    color: ColorMode,
}

fn resolve(source: SourceArgs) -> anyhow::Result<Resolved> {
    let config = match source.config {
        Some(ref path) => config_file::load_from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Failed to load config file {}", path.display())
        })?,
        None => config_file::load_config(),
    };

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let input = source
        .input
        .or_else(|| std::env::var("PUBLIST_INPUT").ok().map(PathBuf::from))
        .or_else(|| config.input().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let mut builder = ParsingConfigBuilder::new();
    if let Some(year) = source
        .fallback_year
        .as_deref()
        .or_else(|| config.fallback_year())
    {
        builder = builder.fallback_year(year);
    }
    if let Some(window) = source.body_window.or_else(|| config.body_window()) {
        builder = builder.body_window(window);
    }
    let extractor = EntryExtractor::with_config(builder.build()?);

    Ok(Resolved {
        input,
        config,
        extractor,
        color: ColorMode(!source.no_color),
    })
}

/// Directory the entry directories go into when none is configured: next to the input.
fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn convert(source: SourceArgs, output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let Resolved {
        input,
        config,
        extractor,
        color,
    } = resolve(source)?;

    let mut writer = std::io::stdout();

    if !input.exists() {
        output::print_missing_input(&mut writer, &input, color)?;
        return Ok(());
    }

    let output_dir = output_dir
        .or_else(|| std::env::var("PUBLIST_OUTPUT_DIR").ok().map(PathBuf::from))
        .or_else(|| config.output_dir().map(PathBuf::from))
        .unwrap_or_else(|| default_output_dir(&input));
    tracing::info!(input = %input.display(), output_dir = %output_dir.display(), "converting");

    let extraction = extractor.extract_from_path(&input)?;
    output::print_file_summary(&mut writer, &input, &extraction.summary, color)?;

    let mut emitter = Emitter::new(&output_dir);
    for entry in &extraction.entries {
        let doc_path = emitter.emit(entry)?;
        output::print_created(&mut writer, &doc_path, color)?;
    }

    output::print_completion(
        &mut writer,
        emitter.written_count(),
        &extraction.skip_stats,
        color,
    )?;
    writer.flush()?;

    Ok(())
}

fn dry_run(source: SourceArgs, json: bool) -> anyhow::Result<()> {
    let Resolved {
        input,
        extractor,
        color,
        ..
    } = resolve(source)?;

    let mut writer = std::io::stdout();

    if !input.exists() {
        output::print_missing_input(&mut writer, &input, color)?;
        return Ok(());
    }

    let extraction = extractor.extract_from_path(&input)?;

    if json {
        serde_json::to_writer_pretty(&mut writer, &extraction.entries)?;
        writeln!(writer)?;
        return Ok(());
    }

    output::print_file_summary(&mut writer, &input, &extraction.summary, color)?;
    writeln!(writer)?;
    for entry in &extraction.entries {
        output::print_dry_run_entry(&mut writer, entry, color)?;
    }
    output::print_dry_run_total(&mut writer, extraction.entries.len(), &extraction.skip_stats)?;

    Ok(())
}
