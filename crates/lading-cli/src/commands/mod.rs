//! Stage implementations, one module per subcommand.

mod chunk;
mod extract;
mod ingest;
mod run;
mod split;
mod status;

pub use chunk::execute_chunk;
pub use extract::execute_extract;
pub use ingest::execute_ingest;
pub use run::execute_run;
pub use split::execute_split;
pub use status::execute_status;

use crate::error::{CliError, Result};
use lading_extractor::ExtractorConfig;
use std::path::Path;

/// Load the extractor configuration, falling back to defaults
pub(crate) fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            ExtractorConfig::from_toml(&raw).map_err(CliError::Config)?
        }
        None => ExtractorConfig::default(),
    };
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}
