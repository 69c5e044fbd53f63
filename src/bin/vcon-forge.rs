//! vcon-forge CLI: convert conversation data into conversation records.
//!
//! Usage:
//!   vcon-forge generate [INPUT] [--analysis FILE] [-o OUT] [--config FILE]
//!   vcon-forge filename [INPUT]
//!   vcon-forge schema

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use vcon_forge::{
    record_filename, AssemblerConfig, ConversationRecord, EnrichmentInput, RecordAssembler,
    StructuralInput,
};

#[derive(Parser)]
#[command(
    name = "vcon-forge",
    version,
    about = "Convert email threads and transcripts into conversation records"
)]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a record from input JSON, optionally merging analysis
    Generate {
        /// Input JSON file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Analysis JSON file to merge (enrichment phase)
        #[arg(long)]
        analysis: Option<PathBuf>,
        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Assembler config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the standardized filename for an input
    Filename {
        /// Input JSON file (reads stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Print the JSON Schema of the record format
    Schema,
}

/// Default config location (~/.config/vcon-forge/config.yaml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vcon-forge").join("config.yaml"))
}

fn load_config(explicit: Option<PathBuf>) -> Result<AssemblerConfig, String> {
    let path = match explicit {
        Some(path) => path,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => return Ok(AssemblerConfig::default()),
        },
    };
    AssemblerConfig::load(&path).map_err(|e| e.to_string())
}

fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };
    serde_json::from_str(&text).map_err(|e| format!("invalid JSON: {}", e))
}

fn write_record(record: &ConversationRecord, output: Option<&Path>) -> Result<(), String> {
    let json = record
        .to_json_pretty()
        .map_err(|e| format!("failed to serialize record: {}", e))?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_generate(
    input: Option<PathBuf>,
    analysis: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> i32 {
    let config = match load_config(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let data: StructuralInput = match read_json(input.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut assembler = RecordAssembler::with_config(config);
    if let Err(e) = assembler.build(&data) {
        eprintln!("Validation error: {}", e);
        return 1;
    }

    if let Some(path) = analysis {
        let analysis: EnrichmentInput = match read_json(Some(path.as_path())) {
            Ok(analysis) => analysis,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        if let Err(e) = assembler.enrich(&analysis) {
            eprintln!("Validation error: {}", e);
            return 1;
        }
    }

    let Some(record) = assembler.record() else {
        eprintln!("Error: no record was built");
        return 1;
    };
    match write_record(record, output.as_deref()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_filename(input: Option<PathBuf>) -> i32 {
    match read_json::<StructuralInput>(input.as_deref()) {
        Ok(data) => {
            println!("{}", record_filename(&data));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_schema() -> i32 {
    let schema = schemars::schema_for!(ConversationRecord);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let code = match cli.command {
        Commands::Generate {
            input,
            analysis,
            output,
            config,
        } => cmd_generate(input, analysis, output, config),
        Commands::Filename { input } => cmd_filename(input),
        Commands::Schema => cmd_schema(),
    };
    std::process::exit(code);
}
