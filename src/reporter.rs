// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Console reporter with colored formatting

use colored::*;

/// Formatted console output for batch progress
pub struct Reporter;

impl Reporter {
    /// Announce a batch pass
    pub fn progress(message: &str) {
        println!("{} {}...", "⏳".bright_blue(), message.bright_black());
    }

    /// Report a completed export
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Report a per-item failure
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }
}
