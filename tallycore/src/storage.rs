//! Where tally keeps its files

use std::path::PathBuf;

/// Per-user configuration directory for `app`, e.g. `~/.config/tally` on Linux.
pub fn config_dir(app: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app)
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(app))
}
