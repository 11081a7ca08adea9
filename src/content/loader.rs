//! Loader for the stage RON file at startup.

use ron::Options;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::{STAGE_SCHEMA_VERSION, StageConfig};

/// Environment variable overriding the stage file location.
pub const STAGE_PATH_ENV: &str = "STROLL_STAGE";

const DEFAULT_STAGE_PATH: &str = "assets/data/stage.ron";

/// Error type for stage loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{file} has schema_version {found}, expected {expected}")]
    Schema {
        file: String,
        found: u32,
        expected: u32,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Location of the stage file, honouring `STROLL_STAGE`.
pub fn stage_config_path() -> PathBuf {
    std::env::var_os(STAGE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGE_PATH))
}

/// Parse stage RON text. `file` is only used for error messages.
pub fn parse_stage_config(contents: &str, file: &str) -> Result<StageConfig, ConfigError> {
    let config: StageConfig = ron_options()
        .from_str(contents)
        .map_err(|source| ConfigError::Parse {
            file: file.to_string(),
            source,
        })?;

    if config.schema_version != STAGE_SCHEMA_VERSION {
        return Err(ConfigError::Schema {
            file: file.to_string(),
            found: config.schema_version,
            expected: STAGE_SCHEMA_VERSION,
        });
    }

    Ok(config)
}

/// Load and parse the stage file at `path`.
pub fn load_stage_config(path: &Path) -> Result<StageConfig, ConfigError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: file.clone(),
        source,
    })?;

    parse_stage_config(&contents, &file)
}
