//! Policy Templater CLI
//!
//! Usage:
//!   policy-templater --definitions policies.json [OPTIONS]
//!
//! Options:
//!   -d, --definitions <FILE>  Policy definition file (JSON)
//!   -m, --messages <FILE>     Message catalog file (JSON)
//!   -f, --format <FORMAT>     Output format: admx or plain
//!   -p, --platform <NAME>     Target platform, may be repeated
//!       --admx-config <FILE>  ADMX writer configuration (TOML)
//!       --debug               Dump a generation summary to stderr

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use policy_templater::{
    generate_template_text, load_messages, load_policy_definitions, AdmxConfig, AdmxWriter,
    MessageCatalog, PlainWriter, PlatformFilter, TemplateWriter,
};

#[derive(Parser)]
#[command(name = "policy-templater")]
#[command(about = "Generate platform policy template documents")]
struct Cli {
    /// Policy definition file (JSON)
    #[arg(short, long)]
    definitions: PathBuf,

    /// Message catalog file (JSON); an empty catalog when omitted
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "admx")]
    format: Format,

    /// Target platform; may be repeated. All platforms when omitted.
    #[arg(short, long = "platform")]
    platforms: Vec<String>,

    /// ADMX writer configuration (TOML)
    #[arg(long)]
    admx_config: Option<PathBuf>,

    /// Debug mode: dump a generation summary to stderr
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Windows group policy ADMX document
    Admx,
    /// Indented key-value listing
    Plain,
}

fn main() {
    let cli = Cli::parse();

    let definitions = match load_policy_definitions(&cli.definitions) {
        Ok(definitions) => definitions,
        Err(e) => {
            eprintln!(
                "Error reading definitions '{}': {}",
                cli.definitions.display(),
                e
            );
            process::exit(1);
        }
    };

    let messages = match &cli.messages {
        Some(path) => match load_messages(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error reading messages '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => MessageCatalog::new(),
    };

    let platforms = if cli.platforms.is_empty() {
        PlatformFilter::All
    } else {
        PlatformFilter::only(cli.platforms.clone())
    };

    if cli.debug {
        eprintln!("definitions: {} top-level entries", definitions.len());
        eprintln!("messages: {} entries", messages.len());
        eprintln!("platforms: {:?}", platforms);
    }

    let mut writer: Box<dyn TemplateWriter> = match cli.format {
        Format::Admx => {
            let config = match &cli.admx_config {
                Some(path) => match AdmxConfig::from_file(path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Error loading ADMX config '{}': {}", path.display(), e);
                        process::exit(1);
                    }
                },
                None => AdmxConfig::default(),
            };
            Box::new(AdmxWriter::new(config))
        }
        Format::Plain => Box::new(PlainWriter::new()),
    };

    match generate_template_text(&messages, &definitions, &mut *writer, &platforms) {
        Ok(text) => {
            print!("{}", text);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
