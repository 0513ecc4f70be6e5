use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use loadout_tools::{
    decode_wire, encode_selections, format_decode_pretty, format_inspect_pretty, inspect_wire,
    load_schemas, parse_selections,
};
use schema::SpecId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loadout-tools",
    version,
    about = "Talent loadout string encoding, decoding, and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a selection file into a loadout string.
    Encode {
        /// Schema JSON (one tree, or an array of trees).
        #[arg(long)]
        schema: PathBuf,
        /// Selection JSON: an array of { node, ranks, choice? }.
        #[arg(long)]
        selections: PathBuf,
        /// Spec id to encode for, when the schema file holds several trees.
        #[arg(long)]
        spec: Option<u16>,
    },
    /// Decode a loadout string into selections.
    Decode {
        /// The loadout string.
        wire: String,
        /// Schema JSON; the tree is picked by the string's spec id.
        #[arg(long)]
        schema: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the header and size of a loadout string.
    Inspect {
        /// The loadout string.
        wire: String,
        /// Optional schema JSON for a tree summary.
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            schema,
            selections,
            spec,
        } => {
            let schemas = load_schemas(&schema)?;
            let contents = fs::read_to_string(&selections)
                .with_context(|| format!("read selections {}", selections.display()))?;
            let selections = parse_selections(&contents)?;
            let wire = encode_selections(&schemas, spec.map(SpecId::new), &selections)?;
            println!("{wire}");
        }
        Command::Decode {
            wire,
            schema,
            format,
        } => {
            let schemas = load_schemas(&schema)?;
            let decoded = decode_wire(&schemas, &wire)?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&decoded).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_decode_pretty(&decoded, &schemas));
                }
            }
        }
        Command::Inspect {
            wire,
            schema,
            format,
        } => {
            let schemas = schema
                .as_deref()
                .map(load_schemas)
                .transpose()
                .context("load schema")?;
            let report = inspect_wire(&wire, schemas.as_ref())?;
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => {
                    print!("{}", format_inspect_pretty(&report));
                }
            }
        }
    }
    Ok(())
}
