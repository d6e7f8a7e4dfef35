// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Batch export orchestration
//!
//! Two passes over the design: every component definition, then every
//! occurrence with geometry. A component referenced by occurrences is exported
//! once as a definition and once per occurrence; occurrences may carry
//! instance-specific transforms, so the duplication is intentional.

use crate::host::{CadHost, ExportTarget, StlExportOptions, StlExportRequest};
use crate::model::Design;
use crate::reporter::Reporter;
use crate::summary;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which slice of the design a batch run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStrategy {
    /// All component definitions plus all occurrences, recursively
    Full,
    /// Only the root component and its direct child occurrences
    Shallow,
}

/// Result of one export attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub target: String,
    pub file_name: String,
    /// Failure reason reported by the host, `None` on success
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Accumulated outcomes of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub timestamp: String,
    pub design_name: String,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    pub fn new(design_name: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            design_name: design_name.to_string(),
            succeeded: 0,
            failed: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn add(&mut self, outcome: ExportOutcome) {
        if outcome.succeeded() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn success_count(&self) -> usize {
        self.succeeded
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Export a single component or occurrence as binary STL
///
/// Host failures are captured in the outcome, never propagated; one failed
/// target must not halt the batch.
pub fn export_target(host: &dyn CadHost, target: ExportTarget<'_>, folder: &Path) -> ExportOutcome {
    let name = target.name().to_string();
    let file_name = format!("{}.stl", crate::utils::sanitize_filename(&name));

    let request = StlExportRequest {
        target,
        output: folder.join(&file_name),
        options: StlExportOptions::high_quality_binary(),
    };

    match host.export_stl(&request) {
        Ok(()) => {
            Reporter::success(&format!("Exported: {file_name}"));
            ExportOutcome {
                target: name,
                file_name,
                error: None,
            }
        }
        Err(err) => {
            Reporter::report_error(&format!("Failed to export {name}: {err}"));
            ExportOutcome {
                target: name,
                file_name,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Run a batch export over `design` into `folder`, then write the summary
///
/// Returns the accumulated report; only summary/report write failures
/// propagate.
pub fn export_design(
    host: &dyn CadHost,
    design: &Design,
    folder: &Path,
    strategy: ExportStrategy,
) -> Result<ExportReport> {
    let mut report = ExportReport::new(design.name());

    match strategy {
        ExportStrategy::Full => {
            Reporter::progress("Exporting components as STL");
            for (index, component) in design.components().iter().enumerate() {
                // The root component is skipped only when it carries no geometry
                if index == design.root_id().0 && !component.has_bodies() {
                    continue;
                }
                report.add(export_target(host, ExportTarget::Component(component), folder));
            }

            Reporter::progress("Exporting occurrences as STL");
            for occurrence in design.all_occurrences() {
                if design
                    .component(occurrence.component)
                    .is_some_and(|c| c.has_bodies())
                {
                    report.add(export_target(host, ExportTarget::Occurrence(occurrence), folder));
                }
            }
        }
        ExportStrategy::Shallow => {
            Reporter::progress("Exporting root component and direct occurrences as STL");
            let root = design.root_component();
            if root.has_bodies() {
                report.add(export_target(host, ExportTarget::Component(root), folder));
            }

            for occurrence in design.occurrences() {
                if design
                    .component(occurrence.component)
                    .is_some_and(|c| c.has_bodies())
                {
                    report.add(export_target(host, ExportTarget::Occurrence(occurrence), folder));
                }
            }
        }
    }

    summary::write_summary(design, folder, &report)?;
    summary::write_json_report(&report, &folder.join(summary::REPORT_FILE_NAME))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use crate::model::{DesignBuilder, Occurrence};
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    /// Host double: writes placeholder STL bytes, refuses configured targets
    struct FakeHost {
        design: Design,
        refuse: HashSet<String>,
    }

    impl FakeHost {
        fn new(design: Design) -> Self {
            Self {
                design,
                refuse: HashSet::new(),
            }
        }

        fn refusing(mut self, target: &str) -> Self {
            self.refuse.insert(target.to_string());
            self
        }
    }

    impl CadHost for FakeHost {
        fn active_design(&self) -> Option<&Design> {
            Some(&self.design)
        }

        fn export_stl(&self, request: &StlExportRequest<'_>) -> Result<(), HostError> {
            if self.refuse.contains(request.target.name()) {
                return Err(HostError::Rejected(format!(
                    "simulated failure for {}",
                    request.target.name()
                )));
            }
            fs::write(&request.output, b"binary stl placeholder")?;
            Ok(())
        }

        fn message_box(&self, _message: &str) {}
    }

    fn assembly_with_geometry() -> Design {
        let mut builder = DesignBuilder::new("Gearbox");
        let housing = builder.add_component("Housing");
        let shaft = builder.add_component("Shaft");
        builder.add_body(builder.root(), "Frame");
        builder.add_body(housing, "Shell");
        builder.add_body(shaft, "Axle");
        builder.add_occurrence(
            Occurrence::new("Housing:1", housing).with_child(Occurrence::new("Shaft:1", shaft)),
        );
        builder.build()
    }

    #[test]
    fn test_export_target_sanitizes_filename() -> Result<()> {
        let folder = TempDir::new()?;
        let mut builder = DesignBuilder::new("Cover: A/B");
        builder.add_body(builder.root(), "Lid");
        let host = FakeHost::new(builder.build());

        let outcome = export_target(
            &host,
            ExportTarget::Component(host.design.root_component()),
            folder.path(),
        );

        assert!(outcome.succeeded());
        assert_eq!(outcome.file_name, "Cover_ A_B.stl");
        assert!(folder.path().join("Cover_ A_B.stl").exists());
        Ok(())
    }

    #[test]
    fn test_failed_export_captures_reason() -> Result<()> {
        let folder = TempDir::new()?;
        let host = FakeHost::new(assembly_with_geometry()).refusing("Shaft");

        let shaft = &host.design.components()[2];
        let outcome = export_target(&host, ExportTarget::Component(shaft), folder.path());

        assert!(!outcome.succeeded());
        assert!(outcome.error.as_deref().is_some_and(|e| e.contains("Shaft")));
        Ok(())
    }

    #[test]
    fn test_full_export_covers_components_and_occurrences() -> Result<()> {
        let folder = TempDir::new()?;
        let host = FakeHost::new(assembly_with_geometry());

        let report = export_design(
            &host,
            host.active_design().unwrap(),
            folder.path(),
            ExportStrategy::Full,
        )?;

        // 3 components + 2 occurrences
        assert_eq!(report.success_count(), 5);
        assert_eq!(report.attempted(), 5);
        for file in [
            "Gearbox.stl",
            "Housing.stl",
            "Shaft.stl",
            "Housing_1.stl",
            "Shaft_1.stl",
        ] {
            assert!(folder.path().join(file).exists(), "missing {file}");
        }
        Ok(())
    }

    #[test]
    fn test_root_without_geometry_is_skipped() -> Result<()> {
        let folder = TempDir::new()?;
        let mut builder = DesignBuilder::new("EmptyRoot");
        let part = builder.add_component("Part");
        builder.add_body(part, "Solid");
        builder.add_occurrence(Occurrence::new("Part:1", part));
        let host = FakeHost::new(builder.build());

        let report = export_design(
            &host,
            host.active_design().unwrap(),
            folder.path(),
            ExportStrategy::Full,
        )?;

        assert_eq!(report.success_count(), 2); // Part + Part:1, no EmptyRoot
        assert!(!folder.path().join("EmptyRoot.stl").exists());
        Ok(())
    }

    #[test]
    fn test_one_failure_does_not_halt_the_batch() -> Result<()> {
        let folder = TempDir::new()?;
        let host = FakeHost::new(assembly_with_geometry()).refusing("Housing");

        let report = export_design(
            &host,
            host.active_design().unwrap(),
            folder.path(),
            ExportStrategy::Full,
        )?;

        assert_eq!(report.attempted(), 5);
        assert_eq!(report.failed, 1);
        assert_eq!(report.success_count(), report.attempted() - report.failed);
        // Targets after the failing one were still attempted
        assert!(folder.path().join("Shaft.stl").exists());
        assert!(folder.path().join("Housing_1.stl").exists());
        Ok(())
    }

    #[test]
    fn test_shallow_export_is_non_recursive() -> Result<()> {
        let folder = TempDir::new()?;
        let host = FakeHost::new(assembly_with_geometry());

        let report = export_design(
            &host,
            host.active_design().unwrap(),
            folder.path(),
            ExportStrategy::Shallow,
        )?;

        // Root + Housing:1, but not the nested Shaft:1
        assert_eq!(report.success_count(), 2);
        assert!(folder.path().join("Gearbox.stl").exists());
        assert!(folder.path().join("Housing_1.stl").exists());
        assert!(!folder.path().join("Shaft_1.stl").exists());
        Ok(())
    }

    #[test]
    fn test_empty_design_exports_nothing() -> Result<()> {
        let folder = TempDir::new()?;
        let host = FakeHost::new(DesignBuilder::new("Blank").build());

        let report = export_design(
            &host,
            host.active_design().unwrap(),
            folder.path(),
            ExportStrategy::Full,
        )?;

        assert_eq!(report.success_count(), 0);
        assert_eq!(report.attempted(), 0);
        Ok(())
    }
}
