// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Stlbatch Contributors

//! Filename sanitization

/// Characters that are invalid in filenames on at least one supported platform
const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every invalid filename character in `name` with `_`
///
/// Length-preserving; resulting collisions between distinct names are not
/// deduplicated, later writes overwrite earlier ones.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
