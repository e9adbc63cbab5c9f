pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Rewrite the first detail line's origin code
    Remap,
    /// Print sum/product calculations over the mapping table
    Summary,
}

pub const DEFAULT_REQUEST_PATH: &str = "data/request.json";
pub const DEFAULT_MAPPING_PATH: &str = "data/mapping.json";
pub const DEFAULT_BASE_PATH: &str = ".";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "origin-remap")]
#[command(about = "Rewrites a shipment request's origin code using a location mapping table")]
pub struct CliConfig {
    #[arg(long, help = "Request JSON file, or - for stdin [default: data/request.json]")]
    pub request: Option<String>,

    #[arg(long, help = "Mapping JSON file, or - for stdin [default: data/mapping.json]")]
    pub mapping: Option<String>,

    #[arg(long, help = "Directory input paths are resolved against [default: .]")]
    pub base_path: Option<String>,

    #[arg(short, long, help = "TOML configuration file; flags given on the command line win")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = Mode::Remap)]
    pub mode: Mode,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills in whatever was not given on the command line from a TOML file.
    pub fn merge_toml(&mut self, file: &toml_config::TomlConfig) {
        self.request
            .get_or_insert_with(|| file.request_path().to_string());
        self.mapping
            .get_or_insert_with(|| file.mapping_path().to_string());
        self.base_path
            .get_or_insert_with(|| file.base_path().to_string());
        self.verbose |= file.verbose();
        self.json_logs |= file.json_logs();
    }

    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn request_path(&self) -> &str {
        self.request.as_deref().unwrap_or(DEFAULT_REQUEST_PATH)
    }

    fn mapping_path(&self) -> &str {
        self.mapping.as_deref().unwrap_or(DEFAULT_MAPPING_PATH)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("base_path", self.base_path())?;
        validation::validate_path("request", self.request_path())?;
        validation::validate_path("mapping", self.mapping_path())?;
        validation::validate_single_stdin(self.request_path(), self.mapping_path())
    }
}
