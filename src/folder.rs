// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Export folder provisioning

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every export folder created by this crate
pub const EXPORT_FOLDER_PREFIX: &str = "Fusion_STL_Export_";

/// Folder name for a run started at `timestamp`
///
/// Two runs within the same second map to the same name.
pub fn export_folder_name(timestamp: DateTime<Local>) -> String {
    format!("{}{}", EXPORT_FOLDER_PREFIX, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Create a fresh timestamped export folder under `base` and return its path
pub fn provision_export_folder(base: &Path) -> Result<PathBuf> {
    let path = base.join(export_folder_name(Local::now()));

    fs::create_dir_all(&path)
        .context(format!("Failed to create export folder: {}", path.display()))?;

    Ok(path)
}

/// Default export base: the `Desktop` folder under the user's home directory
pub fn default_export_base() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("Desktop"))
        .context("Could not resolve the user home directory")
}
