use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use graph_beta_models::catalog::{self, ENUMS, HIERARCHIES, ModelKind};
use graph_beta_models::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Decode, normalize and inspect Microsoft Graph beta model payloads.
///
/// Documents are decoded through the typed models and encoded again, so
/// the output shows exactly what a Graph client would send back: concrete
/// subtypes carry their `@odata.type`, undeclared fields are preserved.
#[derive(Parser)]
#[command(name = "graph-beta-models", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress non-error output.
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Log filter, e.g. "debug" or "graph_beta_models=trace".
    #[arg(long, global = true, default_value = "warn", env = "GRAPH_MODELS_LOG")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON document as a model and re-encode it.
    Decode {
        /// Model to decode, e.g. "windows-kiosk-app". See `list-types`.
        #[arg(long)]
        model: ModelKind,

        /// Input file. Reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file. Writes stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of indented.
        #[arg(long)]
        compact: bool,
    },

    /// Parse wire strings of an enumeration and print their ordinals.
    ParseEnum {
        /// Enumeration type name, e.g. "androidKeyguardFeature".
        #[arg(long = "enum")]
        enum_name: String,

        /// Wire strings to parse.
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// List every enumeration and its wire values.
    ListEnums {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the decodable models and polymorphic hierarchies.
    ListTypes,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;

    match cli.command {
        Commands::Decode {
            model,
            input,
            output,
            compact,
        } => {
            let value = match &input {
                Some(path) => {
                    if !quiet {
                        eprintln!("Loading {} from {}", model, path.display());
                    }
                    catalog::load_document(path)?
                }
                None => read_stdin()?,
            };

            let doc = catalog::normalize(model, &value)?;
            let mut rendered = if compact {
                serde_json::to_string(&doc.value)?
            } else {
                serde_json::to_string_pretty(&doc.value)?
            };
            rendered.push('\n');

            match &output {
                Some(path) => write_file(path, &rendered)?,
                None => write_stdout(&rendered)?,
            }

            if !quiet {
                eprintln!(
                    "Decoded {} as {}",
                    doc.model,
                    doc.discriminator.as_deref().unwrap_or(model.type_name())
                );
                if !doc.additional_keys.is_empty() {
                    eprintln!(
                        "Preserved {} undeclared field(s): {}",
                        doc.additional_keys.len(),
                        doc.additional_keys.join(", ")
                    );
                }
            }
        }

        Commands::ParseEnum { enum_name, values } => {
            let descriptor = catalog::find_enum(&enum_name)?;
            let mut out = String::new();
            for value in &values {
                let ordinal = descriptor.parse(value)?;
                out.push_str(&format!("{ordinal}\t{}\n", descriptor.values[ordinal]));
            }
            write_stdout(&out)?;
        }

        Commands::ListEnums { json } => {
            let out = if json {
                let mut s = serde_json::to_string_pretty(ENUMS)?;
                s.push('\n');
                s
            } else {
                ENUMS
                    .iter()
                    .map(|e| format!("{}: {}\n", e.name, e.values.join(", ")))
                    .collect()
            };
            write_stdout(&out)?;
        }

        Commands::ListTypes => {
            let mut out = String::from("Models:\n");
            for kind in ModelKind::ALL {
                out.push_str(&format!("  {:<36} {}\n", kind.name(), kind.type_name()));
            }
            out.push_str("\nHierarchies:\n");
            for hierarchy in HIERARCHIES {
                out.push_str(&format!("  {}\n", hierarchy.name));
                for discriminator in hierarchy.discriminators() {
                    out.push_str(&format!("    {discriminator}\n"));
                }
            }
            write_stdout(&out)?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<serde_json::Value> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| Error::Read {
            path: PathBuf::from("<stdin>"),
            source: e,
        })?;
    Ok(serde_json::from_str(&content)?)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_stdout(content: &str) -> Result<()> {
    std::io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| Error::Write {
            path: PathBuf::from("<stdout>"),
            source: e,
        })
}
