use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extractors::ContactInfoExtractor;
use shared_types::{ContactField, ContactInfo, ExtractionInput, Extractor};
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

mod config;
mod input;

#[derive(Parser, Debug)]
#[command(name = "chatlead", author, version, about = "Extract contact details from chat messages", long_about = None)]
struct Cli {
    /// Path to the extractor config (defaults to <config dir>/chatlead/extractor.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract contact details from one message
    Extract {
        /// Message text (read from --file or stdin when omitted)
        text: Option<String>,

        /// Read the message from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print only this field (name, company, email, phone)
        #[arg(long)]
        field: Option<ContactField>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract from many messages: a JSON array, or one message per line
    Batch {
        /// Read messages from a file instead of stdin
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// List the patterns tried for each field, in order
    Patterns,
    /// Write a commented default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file_path.as_deref());

    let config_path = cli.config.clone().unwrap_or_else(config::get_config_path);

    match cli.command {
        Command::Extract {
            text,
            file,
            field,
            pretty,
        } => {
            let extractor = load_extractor(&config_path)?;
            let text = input::read_text(text, file.as_deref())?;
            let info = extractor.extract(&ExtractionInput::from(text));

            match field {
                Some(field) => {
                    if let Some(value) = info.get(field) {
                        println!("{}", value);
                    }
                }
                None => println!("{}", render(&info, pretty)?),
            }
        }
        Command::Batch { file } => {
            let extractor = load_extractor(&config_path)?;
            let content = input::read_source(file.as_deref())?;
            let messages = input::parse_batch(&content);
            tracing::info!("Extracting from {} messages", messages.len());

            let mut found = 0;
            for message in &messages {
                let info = extractor.extract(&ExtractionInput::from_value(message));
                if !info.is_empty() {
                    found += 1;
                }
                println!("{}", render(&info, false)?);
            }
            tracing::info!("{} of {} messages had contact details", found, messages.len());
        }
        Command::Patterns => {
            let extractor = load_extractor(&config_path)?;
            for field in ContactField::ALL {
                println!("{}:", field);
                for pattern in extractor.patterns_for(field) {
                    println!("  {:<18} {}", pattern.name, pattern.regex.as_str());
                }
            }
        }
        Command::InitConfig { force } => {
            config::write_default_config(&config_path, force)
                .with_context(|| format!("Failed to write config to {:?}", config_path))?;
            println!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}

fn load_extractor(config_path: &Path) -> Result<ContactInfoExtractor> {
    let extractor_config = config::load_config(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    ContactInfoExtractor::from_config(extractor_config).context("Invalid extractor configuration")
}

fn render(info: &ContactInfo, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(info)?
    } else {
        serde_json::to_string(info)?
    };
    Ok(json)
}

// Logs go to stderr so stdout stays clean JSON
fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("chatlead.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_command() {
        let cli = Cli::parse_from(["chatlead", "extract", "My name is Ann", "--field", "name"]);
        match cli.command {
            Command::Extract { text, field, .. } => {
                assert_eq!(text.as_deref(), Some("My name is Ann"));
                assert_eq!(field, Some(ContactField::Name));
            }
            other => panic!("Expected Extract, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Cli::try_parse_from(["chatlead", "extract", "hi", "--field", "fax"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["chatlead", "batch", "--config", "/tmp/x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert!(matches!(cli.command, Command::Batch { file: None }));
    }

    #[test]
    fn test_render_omits_absent_fields() {
        let info = ContactInfo {
            email: Some("a@b.io".to_string()),
            ..ContactInfo::default()
        };
        assert_eq!(render(&info, false).unwrap(), r#"{"email":"a@b.io"}"#);
    }
}
