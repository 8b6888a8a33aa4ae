// Cache path utilities.
// Resolves the on-disk locations for the key-value store and the log file.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/folio-stats on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio-stats").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding one file per stored key.
pub fn store_dir(base: &Path) -> PathBuf {
    base.join("store")
}

/// Path to the log file used while the terminal UI owns stdout.
pub fn log_path(base: &Path) -> PathBuf {
    base.join("folio-stats.log")
}

/// Path of the file backing a store key.
pub fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(key)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '.' => '_',
            _ => c,
        })
        .collect()
}
