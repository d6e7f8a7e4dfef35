// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Small shared helpers

mod filename;

pub use filename::sanitize_filename;
