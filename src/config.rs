use crate::format::{ByteFormatter, HexCase, Radix};
use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration structure for byte-lens
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ByteLensConfig {
    /// Output formatting defaults
    pub format: FormatConfig,
}

/// Which dumps to print for each value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DumpMode {
    Bin,
    Hex,
    #[default]
    Both,
}

impl DumpMode {
    #[must_use]
    pub fn radixes(self) -> &'static [Radix] {
        match self {
            Self::Bin => &[Radix::Binary],
            Self::Hex => &[Radix::Hex],
            Self::Both => &[Radix::Binary, Radix::Hex],
        }
    }
}

impl fmt::Display for DumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bin => write!(f, "bin"),
            Self::Hex => write!(f, "hex"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for DumpMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" => Ok(Self::Both),
            other => other.parse::<Radix>().map(|radix| match radix {
                Radix::Binary => Self::Bin,
                Radix::Hex => Self::Hex,
            }),
        }
    }
}

/// Formatting defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Text placed between byte groups (default: a single space)
    pub separator: String,
    /// Uppercase hex digits (default: false)
    pub uppercase: bool,
    /// Dumps printed by `dump` when `--radix` is not given (default: both)
    pub radix: DumpMode,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            uppercase: false,
            radix: DumpMode::Both,
        }
    }
}

impl FormatConfig {
    #[must_use]
    pub fn formatter(&self) -> ByteFormatter {
        let case = if self.uppercase {
            HexCase::Upper
        } else {
            HexCase::Lower
        };
        ByteFormatter::new()
            .with_separator(self.separator.clone())
            .with_case(case)
    }
}

impl ByteLensConfig {
    /// Load configuration from various sources in order of priority:
    /// 1. Command line arguments (handled elsewhere)
    /// 2. Environment variables
    /// 3. User config file (~/.config/byte-lens/config.toml)
    /// 4. System config file (/etc/byte-lens/config.toml)
    /// 5. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let mut config_builder = Config::builder();

        config_builder = config_builder.add_source(Config::try_from(&Self::default())?);

        if let Some(system_config_path) = Self::get_system_config_path()
            && system_config_path.exists()
        {
            config_builder =
                config_builder.add_source(File::from(system_config_path).required(false));
        }

        if let Some(user_config_path) = Self::get_user_config_path()
            && user_config_path.exists()
        {
            config_builder =
                config_builder.add_source(File::from(user_config_path).required(false));
        }

        // BYTE_LENS_FORMAT__SEPARATOR, BYTE_LENS_FORMAT__UPPERCASE, ...
        config_builder = config_builder.add_source(
            config::Environment::with_prefix("BYTE_LENS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        config.try_deserialize()
    }

    /// Load the defaults overlaid with a single, required config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Get the path to the user configuration file
    /// Returns: ~/.config/byte-lens/config.toml (on Linux/macOS)
    ///          %APPDATA%/byte-lens/config.toml (on Windows)
    #[must_use]
    pub fn get_user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byte-lens")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the path to the system configuration file
    #[must_use]
    pub fn get_system_config_path() -> Option<PathBuf> {
        #[cfg(unix)]
        {
            Some(PathBuf::from("/etc/byte-lens/config.toml"))
        }

        #[cfg(windows)]
        {
            std::env::var("PROGRAMDATA").ok().map(|program_data| {
                PathBuf::from(program_data)
                    .join("byte-lens")
                    .join("config.toml")
            })
        }

        #[cfg(not(any(unix, windows)))]
        {
            None
        }
    }

    /// Write the default configuration as TOML to `path`, creating parent directories
    pub fn write_default_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Create a default configuration file at the user config location
    pub fn create_default_config_file() -> Result<PathBuf, Box<dyn std::error::Error>> {
        if let Some(config_path) = Self::get_user_config_path() {
            Self::write_default_config(&config_path)?;
            Ok(config_path)
        } else {
            Err("Could not determine user config directory".into())
        }
    }

    /// Print information about config file locations
    pub fn print_config_info() {
        println!("byte-lens configuration");
        println!("=======================");

        if let Some(user_path) = Self::get_user_config_path() {
            println!("User config file: {}", user_path.display());
            if user_path.exists() {
                println!("  Status: ✓ Found");
            } else {
                println!("  Status: ✗ Not found (will use defaults)");
            }
        }

        if let Some(system_path) = Self::get_system_config_path() {
            println!("System config file: {}", system_path.display());
            if system_path.exists() {
                println!("  Status: ✓ Found");
            } else {
                println!("  Status: ✗ Not found");
            }
        }

        println!("\nEnvironment variables:");
        println!("  BYTE_LENS_FORMAT__SEPARATOR");
        println!("  BYTE_LENS_FORMAT__UPPERCASE");
        println!("  BYTE_LENS_FORMAT__RADIX");
    }
}
