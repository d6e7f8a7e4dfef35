// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Stlbatch
//!
//! Batch STL exporter for CAD assembly designs. Walks the components and
//! occurrences of the active design exposed by a host application, asks the
//! host to export each one as binary STL into a timestamped folder, and writes
//! a summary report. Tessellation and STL encoding stay in the host; this
//! crate selects targets and issues requests through the [`CadHost`] seam.

pub mod export;
pub mod folder;
pub mod host;
pub mod model;
pub mod reporter;
pub mod summary;
pub mod utils;

pub use export::{export_design, export_target, ExportOutcome, ExportReport, ExportStrategy};
pub use folder::{default_export_base, provision_export_folder};
pub use host::{
    CadHost, ExportTarget, HostError, MeshRefinement, StlExportOptions, StlExportRequest,
};
pub use model::{Body, Component, ComponentId, Design, DesignBuilder, Occurrence};
pub use utils::sanitize_filename;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Main entry point for a host-embedded run
///
/// Exports the active design into a fresh folder on the user's desktop and
/// reports the outcome through the host's notification surface. Any error
/// outside the per-item tier surfaces here as a single failure message with
/// the full error chain; files already written are left in place.
pub fn run(host: &dyn CadHost) {
    let result = default_export_base()
        .and_then(|base| run_with_base(host, &base, ExportStrategy::Full));

    match result {
        Ok((report, folder)) => {
            host.message_box(&format!(
                "STL Export Complete!\n\nExported {} files to:\n{}",
                report.success_count(),
                folder.display()
            ));
        }
        Err(err) => {
            host.message_box(&format!("Failed:\n{err:?}"));
        }
    }
}

/// Run a batch export with an explicit base folder and strategy
///
/// Returns the report together with the provisioned export folder.
pub fn run_with_base(
    host: &dyn CadHost,
    base: &Path,
    strategy: ExportStrategy,
) -> Result<(ExportReport, PathBuf)> {
    let design = host.active_design().context("No active design found")?;

    let export_folder = provision_export_folder(base)?;
    let report = export_design(host, design, &export_folder, strategy)?;

    Ok((report, export_folder))
}
