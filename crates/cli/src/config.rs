//! Runtime configuration.
//!
//! Settings come from command-line flags first, then the environment
//! (optionally populated from a `.env` file), then built-in defaults.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the default position snapshot file.
pub const POSITIONS_FILE_ENV: &str = "CLMM_HEDGE_POSITIONS_FILE";

/// Snapshot file used when neither the flag nor the environment names one.
pub const DEFAULT_POSITIONS_FILE: &str = "positions.json";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolves the snapshot path for the `position` command.
pub fn positions_file(flag: Option<PathBuf>) -> PathBuf {
    resolve_positions_file(flag, std::env::var_os(POSITIONS_FILE_ENV))
}

fn resolve_positions_file(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_POSITIONS_FILE))
}
