pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Mode};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::transformer::{format_output, remap_origin, RESULT_HEADER};
pub use core::{etl::RemapEngine, pipeline::RemapPipeline};
pub use domain::model::{DetailLine, MappingEntry, RemapOutcome, ShipmentRequest};
pub use utils::error::{RemapError, Result};
