// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Summary report writers (text and JSON)

use crate::export::ExportReport;
use crate::model::Design;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Human-readable summary written into every export folder
pub const SUMMARY_FILE_NAME: &str = "EXPORT_SUMMARY.txt";

/// Structured sibling of the text summary
pub const REPORT_FILE_NAME: &str = "export_report.json";

/// Sorted names of all `.stl` files physically present in `folder`
///
/// The summary listing reflects the folder contents at write time, not the
/// in-memory outcome list; unrelated `.stl` files already in the folder are
/// listed too.
pub fn list_stl_files(folder: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "stl") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Write `EXPORT_SUMMARY.txt` for a finished batch run
pub fn write_summary(design: &Design, folder: &Path, report: &ExportReport) -> Result<()> {
    let mut text = String::new();

    text.push_str("STL EXPORT SUMMARY\n");
    text.push_str(&"=".repeat(50));
    text.push('\n');
    text.push_str(&format!(
        "Export Date: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    text.push_str(&format!("Design Name: {}\n", design.name()));
    text.push_str(&format!("Total Files Exported: {}\n", report.success_count()));
    text.push_str(&format!("Export Location: {}\n", folder.display()));
    text.push('\n');

    text.push_str("EXPORTED FILES:\n");
    text.push_str(&"-".repeat(30));
    text.push('\n');
    for file in list_stl_files(folder)? {
        text.push_str(&file);
        text.push('\n');
    }

    if report.failed > 0 {
        text.push('\n');
        text.push_str("FAILED EXPORTS:\n");
        text.push_str(&"-".repeat(30));
        text.push('\n');
        for failure in report.failures() {
            let reason = failure.error.as_deref().unwrap_or("unknown");
            text.push_str(&format!("{}: {}\n", failure.target, reason));
        }
    }

    text.push('\n');
    text.push_str("NOTES:\n");
    text.push_str("- Files are exported in binary STL format\n");
    text.push_str("- High mesh refinement used for quality\n");
    text.push_str("- Invalid characters in names replaced with '_'\n");

    let summary_path = folder.join(SUMMARY_FILE_NAME);
    fs::write(&summary_path, text)
        .context(format!("Failed to write summary: {}", summary_path.display()))?;

    Ok(())
}

/// Write the structured report as pretty JSON
pub fn write_json_report(report: &ExportReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).context(format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
