use loanform_extraction::{FieldDef, LibraryError, PatternLibrary, default_fields};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "loanform";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "StorageConfig::default_json_dir")]
    pub json_dir: PathBuf,
    #[serde(default = "StorageConfig::default_summary_dir")]
    pub summary_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            json_dir: Self::default_json_dir(),
            summary_dir: Self::default_summary_dir(),
        }
    }
}

impl StorageConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_json_dir() -> PathBuf {
        Config::base_dir().join("json_files")
    }

    fn default_summary_dir() -> PathBuf {
        Config::base_dir().join("summaries")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Field definitions, in report order.
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldDef>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
        }
    }
}

impl ExtractionConfig {
    /// Compile the configured fields.
    pub fn build_library(&self) -> Result<PatternLibrary, LibraryError> {
        PatternLibrary::build(&self.fields)
    }
}

impl Config {
    /// `~/loanform`, or `./loanform` when no home directory is known.
    fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(APP_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, or fall back to built-in defaults when none exists.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_or_default_from(&Self::config_path()?)
    }

    pub fn load_or_default_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            Self::load_from(path)
        } else {
            info!("No config at {}, using built-in defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Write the default configuration; never overwrites an existing file.
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_path = Self::config_path()?;
        Self::write_default(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.enabled: Save JSON records and summaries after extraction");
        println!("   - storage.json_dir / storage.summary_dir: Output directories");
        println!("   - extraction.fields: Field name, regex (group 1 = value), default, normalize");
        println!();
        Ok(())
    }
}
