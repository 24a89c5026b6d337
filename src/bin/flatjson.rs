//! flatjson: Flatten a nested JSON object into dotted path keys
//!
//! Usage:
//!   # Read ./input.json, pretty-print the flat object to stdout
//!   flatjson
//!
//!   # Another file, custom separator
//!   flatjson messages/it.json --separator /
//!
//!   # Wrap every leaf as {"value": ...} and write to a file
//!   flatjson messages/it.json --wrap-values -o messages/it-new.json
//!
//! Set FLATJSON_LOG (e.g. `FLATJSON_LOG=debug`) to log to stderr.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use flatjson::{flatten_file, FlatWriter, FlattenConfig};

#[derive(Parser, Debug)]
#[command(name = "flatjson")]
#[command(about = "Flatten nested JSON objects into dotted path keys", long_about = None)]
struct Args {
    /// Input file
    #[arg(value_name = "FILE", default_value = "input.json")]
    input: String,

    /// Separator placed between path segments (default: ".")
    #[arg(long, short = 's')]
    separator: Option<String>,

    /// Prefix for every generated key
    #[arg(long)]
    prefix: Option<String>,

    /// Wrap every leaf as {"value": <leaf>}
    #[arg(long, conflicts_with = "wrap_key")]
    wrap_values: bool,

    /// Wrap every leaf as {"<KEY>": <leaf>}
    #[arg(long, value_name = "KEY")]
    wrap_key: Option<String>,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<String>,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("FLATJSON_LOG"))
        .with_writer(std::io::stderr)
        .init();

    // Build config
    let mut config = FlattenConfig::default();
    if let Some(sep) = args.separator {
        config.separator = sep;
    }
    if let Some(prefix) = args.prefix {
        config.prefix = prefix;
    }
    if args.wrap_values {
        config.wrap_key = Some(String::from("value"));
    }
    if let Some(key) = args.wrap_key {
        config.wrap_key = Some(key);
    }

    let flat = flatten_file(&args.input, config)
        .with_context(|| format!("Failed to flatten {}", args.input))?;

    if let Some(path) = args.output {
        let mut writer = FlatWriter::create(&path)?;
        if args.compact {
            writer = writer.compact();
        }
        writer.write_document(&flat)?;
        tracing::info!(path = %path, keys = flat.len(), "wrote flattened document");
    } else {
        let mut writer = FlatWriter::stdout();
        if args.compact {
            writer = writer.compact();
        }
        writer.write_document(&flat)?;
    }

    Ok(())
}
