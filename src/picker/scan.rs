// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `.http` file discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extension of request files, without the dot
pub const HTTP_EXTENSION: &str = "http";

/// Check if a path names a `.http` file by extension
pub fn is_http_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == HTTP_EXTENSION)
}

/// List the `.http` files directly inside `dir`, sorted by file name
///
/// Subdirectories are not descended into.
pub fn find_http_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            continue;
        }
        if is_http_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(dir = %dir.display(), count = files.len(), "Scanned for .http files");

    Ok(files)
}
