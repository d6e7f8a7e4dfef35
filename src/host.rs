// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Host application seam
//!
//! The CAD host owns the geometry and performs the actual tessellation and STL
//! encoding. Everything this crate needs from it goes through [`CadHost`], so
//! no ambient application singleton is consulted anywhere.

use crate::model::{Component, Design, Occurrence};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Failure surfaced by the host while servicing one export request
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused or could not complete the export
    #[error("host rejected export: {0}")]
    Rejected(String),

    /// The host failed while writing the target file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Mesh quality requested from the host's tessellator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshRefinement {
    Low,
    Medium,
    High,
}

/// Options attached to a single STL export request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StlExportOptions {
    pub mesh_refinement: MeshRefinement,
    pub binary_format: bool,
}

impl StlExportOptions {
    /// Binary STL at high refinement, the quality every batch export requests
    pub fn high_quality_binary() -> Self {
        Self {
            mesh_refinement: MeshRefinement::High,
            binary_format: true,
        }
    }
}

impl Default for StlExportOptions {
    fn default() -> Self {
        Self::high_quality_binary()
    }
}

/// What a single export request points at
#[derive(Debug, Clone, Copy)]
pub enum ExportTarget<'a> {
    Component(&'a Component),
    Occurrence(&'a Occurrence),
}

impl ExportTarget<'_> {
    /// Display name the output filename is derived from
    pub fn name(&self) -> &str {
        match self {
            ExportTarget::Component(component) => &component.name,
            ExportTarget::Occurrence(occurrence) => &occurrence.name,
        }
    }
}

/// One export request handed to the host's export subsystem
#[derive(Debug)]
pub struct StlExportRequest<'a> {
    pub target: ExportTarget<'a>,
    pub output: PathBuf,
    pub options: StlExportOptions,
}

/// The host CAD application, injected by the embedding
///
/// All calls are blocking; a request either completes or raises before the
/// next one is issued.
pub trait CadHost {
    /// The design currently open in the host, if any
    fn active_design(&self) -> Option<&Design>;

    /// Tessellate the target and write it as STL to `request.output`
    fn export_stl(&self, request: &StlExportRequest<'_>) -> Result<(), HostError>;

    /// Show a modal notification to the user
    fn message_box(&self, message: &str);
}
