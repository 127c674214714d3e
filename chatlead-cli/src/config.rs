use config::{Config, ConfigError, File};
use extractors::ExtractorConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# chatlead extractor configuration

[limits]
# Longest name accepted, in characters
max_name_len = 50
# Most words a name may have
max_name_tokens = 5
# Longest company accepted, in characters
max_company_len = 100
# Fewest digits a phone number may have
min_phone_digits = 10
company_stopwords = ["the", "a", "an", "and", "or", "for", "with", "at"]

# Extra patterns are tried after the built-in ones for the same field.
# [[custom_patterns]]
# name = "signed_off_by"
# field = "name"
# regex = "(?i)regards,\\s+([A-Z][a-z]+)"
# group = 1
"#;

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("chatlead").join("extractor.toml")
    } else {
        PathBuf::from("extractor.toml")
    }
}

/// Load the extractor config. A missing file means built-in defaults.
pub fn load_config(config_path: &Path) -> Result<ExtractorConfig, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("No config at {:?}, using defaults", config_path);
        return Ok(ExtractorConfig::default());
    }

    let builder = Config::builder()
        .add_source(File::from(config_path.to_path_buf()))
        .build()?;

    let config: ExtractorConfig = builder.try_deserialize()?;
    tracing::info!(
        "Loaded config from {:?} ({} custom patterns)",
        config_path,
        config.custom_patterns.len()
    );

    Ok(config)
}

/// Write the commented default config. Refuses to overwrite unless `force`.
pub fn write_default_config(config_path: &Path, force: bool) -> Result<(), ConfigError> {
    if config_path.exists() && !force {
        return Err(ConfigError::Message(format!(
            "Config already exists at {:?}, pass --force to overwrite",
            config_path
        )));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))?;

    Ok(())
}
