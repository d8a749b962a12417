//! s1-patches: CLI tool for decoding and comparing S-1 patch files
//!
//! The S-1 exports each patch as a `KEY=VALUE` text file. This tool decodes
//! those files into readable values:
//!
//! - `report`: Decode a directory of patches, print them, and write a CSV
//! - `show`: Decode and print a single patch
//! - `schema`: List the known parameters and their defaults
//! - `encode`: Turn a readable value back into the raw number

mod library;
mod report;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

use s1patch_core::{
    DEFAULTS_FILE, DecodeOptions, DecodedPatch, DisplayValue, ParameterDefinition, PatchDecoder,
    Registry, TypeTag, codec,
};

use library::PatchLibrary;
use report::{PatchReport, PatchTable, ReportOptions};

/// CLI tool for decoding S-1 patch files
#[derive(Parser)]
#[command(name = "s1-patches")]
#[command(about = "Decode and compare Roland S-1 patch files")]
#[command(version)]
struct Cli {
    /// Write log output to this file instead of stderr
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,

    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(clap::Args, Clone, Copy, Debug)]
struct ReportFlags {
    /// Include parameters of unknown type
    #[arg(short, long)]
    unknown: bool,

    /// Include values that match the default
    #[arg(short, long)]
    default: bool,
}

impl From<ReportFlags> for ReportOptions {
    fn from(flags: ReportFlags) -> Self {
        ReportOptions {
            include_unknown: flags.unknown,
            include_defaults: flags.default,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every patch in a directory, print them, and write a CSV table
    Report {
        /// Patch directory (default: $S1_PATCH_DIR or <audio dir>/s1_patch_analysis)
        dir: Option<PathBuf>,

        #[command(flatten)]
        flags: ReportFlags,

        /// CSV output path
        #[arg(short, long, default_value = "patches.csv")]
        csvname: PathBuf,

        /// Skip writing the CSV
        #[arg(long)]
        no_csv: bool,

        /// File whose parameters are always reported
        #[arg(long, default_value = DEFAULTS_FILE)]
        defaults_file: String,
    },

    /// Decode and print a single patch file
    Show {
        file: PathBuf,

        #[command(flatten)]
        flags: ReportFlags,
    },

    /// List known parameters with their decoded defaults
    Schema {
        /// Only show parameters of this type (INT, DICT, DIV100, SPLIT_TC, CHOP, COMB, UNK)
        #[arg(long = "type")]
        type_tag: Option<TypeTag>,
    },

    /// Convert a readable value back to the raw number stored in a patch
    Encode {
        key: String,

        /// Value components, e.g. two numbers for a SPLIT_TC pair
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        value: Vec<String>,
    },
}

fn init_logging(log_file: Option<&Path>, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn print_patches(
    table: &PatchTable,
    patches: &[&DecodedPatch],
    format: OutputFormat,
    options: ReportOptions,
) -> Result<()> {
    match format {
        OutputFormat::Table => table
            .write_dump(io::stdout().lock())
            .context("Failed to write patch listing")?,
        OutputFormat::Json => {
            for patch in patches {
                println!("{}", serde_json::to_string(&PatchReport::new(patch, options))?);
            }
        }
    }
    Ok(())
}

fn cmd_report(
    registry: &Registry,
    dir: &Path,
    options: ReportOptions,
    csv_path: Option<&Path>,
    defaults_file: String,
    format: OutputFormat,
) -> Result<()> {
    let decoder = PatchDecoder::with_options(registry, DecodeOptions { defaults_file });
    let library = PatchLibrary::load(&decoder, dir)?;

    for failure in &library.failures {
        eprintln!(
            "{} {}: {:#}",
            "skipped".red(),
            failure.path.display(),
            failure.error
        );
    }

    let table = PatchTable::build(registry, &library.patches, options);
    let mut sorted: Vec<_> = library.patches.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    print_patches(&table, &sorted, format, options)?;

    if let Some(path) = csv_path {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
        table
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("Failed to write CSV file {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = table.rows.len(), "wrote CSV");
    }

    if !library.failures.is_empty() {
        bail!(
            "{} of {} patch files could not be decoded",
            library.failures.len(),
            library.failures.len() + library.patches.len()
        );
    }
    Ok(())
}

fn cmd_show(
    registry: &Registry,
    file: &Path,
    options: ReportOptions,
    format: OutputFormat,
) -> Result<()> {
    let decoder = PatchDecoder::new(registry);
    let patch = library::load_patch(&decoder, file)?;
    let table = PatchTable::build(registry, std::slice::from_ref(&patch), options);
    print_patches(&table, &[&patch], format, options)
}

fn cmd_schema(registry: &Registry, type_tag: Option<TypeTag>, format: OutputFormat) {
    let mut definitions: Vec<_> = registry
        .iter()
        .filter(|def| type_tag.is_none_or(|tag| def.type_tag() == tag))
        .collect();
    definitions.sort_by_key(|def| def.key);

    if format == OutputFormat::Table {
        println!(
            "{:<24} {:<40} {:<20} {:<8} {}",
            "KEY", "NAME", "LOCATION", "TYPE", "DEFAULT"
        );
        println!("{}", "-".repeat(110));
    }

    for def in &definitions {
        let default = codec::decode(def, &def.default_raw())
            .map(|decoded| decoded.value)
            .unwrap_or_else(|_| DisplayValue::Raw(def.default_raw()));

        match format {
            OutputFormat::Table => {
                println!(
                    "{:<24} {:<40} {:<20} {:<8} {}",
                    def.key.cyan(),
                    def.name,
                    def.location.dimmed(),
                    def.type_tag().as_str().yellow(),
                    default
                );
            }
            OutputFormat::Json => {
                let obj = serde_json::json!({
                    "key": def.key,
                    "name": def.name,
                    "location": def.location,
                    "type_tag": def.type_tag(),
                    "default_raw": def.default,
                    "default": default,
                    "range": def.range().map(|r| [*r.start(), *r.end()]),
                });
                println!("{}", obj);
            }
        }
    }

    if format == OutputFormat::Table {
        println!("{}", "-".repeat(110));
        println!("Total: {} parameters", definitions.len());
    }
}

fn single_value<'a>(def: &ParameterDefinition, parts: &'a [String]) -> Result<&'a str> {
    match parts {
        [one] => Ok(one.as_str()),
        _ => bail!("{} ({}) takes a single value", def.key, def.type_tag()),
    }
}

/// Build the display value an `encode` invocation describes.
fn parse_display_value(def: &ParameterDefinition, parts: &[String]) -> Result<DisplayValue> {
    let joined = parts.join(" ");

    let value = match def.type_tag() {
        TypeTag::SplitTc => match parts {
            [first, second] => {
                let parse = |s: &str| {
                    s.trim_matches(|c: char| c == '(' || c == ')' || c == ',')
                        .parse::<i8>()
                        .with_context(|| format!("'{}' is not a value from -128 to 127", s))
                };
                DisplayValue::Pair(parse(first.as_str())?, parse(second.as_str())?)
            }
            _ => bail!("{} (SPLIT_TC) takes two values, e.g. -100 -75", def.key),
        },
        TypeTag::Chop => DisplayValue::Pattern(joined),
        TypeTag::Int => DisplayValue::Int(
            single_value(def, parts)?
                .parse()
                .with_context(|| format!("'{}' is not an integer", joined))?,
        ),
        TypeTag::Div100 | TypeTag::Comb => DisplayValue::Scaled(
            single_value(def, parts)?
                .parse()
                .with_context(|| format!("'{}' is not a number", joined))?,
        ),
        TypeTag::Dict => match (def.code_for(&joined), joined.parse::<i64>()) {
            (None, Ok(code)) => DisplayValue::Int(code),
            _ => DisplayValue::Label(joined),
        },
        TypeTag::Unk => DisplayValue::Raw(joined),
    };
    Ok(value)
}

fn cmd_encode(
    registry: &Registry,
    key: &str,
    parts: &[String],
    format: OutputFormat,
) -> Result<()> {
    let def = registry.lookup(key)?;
    let value = parse_display_value(def, parts)?;
    let raw = codec::encode(def, &value)?;

    match format {
        OutputFormat::Table => println!("{}={}", def.key, raw),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "key": def.key, "value": value, "raw": raw })
        ),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let registry = Registry::s1().context("Built-in parameter table is invalid")?;
    tracing::debug!(parameters = registry.len(), "loaded parameter registry");

    match cli.command {
        Commands::Report {
            dir,
            flags,
            csvname,
            no_csv,
            defaults_file,
        } => {
            let dir = dir.unwrap_or_else(library::default_patch_dir);
            if !dir.is_dir() {
                eprintln!("Patch directory not found: {}", dir.display());
                eprintln!(
                    "Default location: {}",
                    library::default_patch_dir().display()
                );
                eprintln!(
                    "Override with: s1-patches report <dir> or {} env var",
                    library::PATCH_DIR_ENV
                );
                std::process::exit(1);
            }
            let csv_path = (!no_csv).then_some(csvname.as_path());
            cmd_report(&registry, &dir, flags.into(), csv_path, defaults_file, cli.format)
        }
        Commands::Show { file, flags } => cmd_show(&registry, &file, flags.into(), cli.format),
        Commands::Schema { type_tag } => {
            cmd_schema(&registry, type_tag, cli.format);
            Ok(())
        }
        Commands::Encode { key, value } => cmd_encode(&registry, &key, &value, cli.format),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref(), cli.verbose) {
        eprintln!("{} {:#}", "error:".red(), err);
        std::process::exit(1);
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red(), err);
        std::process::exit(1);
    }
}
