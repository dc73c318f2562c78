// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Terminal file picker
//!
//! Discovers `.http` files in a directory and lets the user choose one.

mod menu;
mod scan;

pub use menu::{select_file, Menu, MenuAction};
pub use scan::{find_http_files, is_http_file, HTTP_EXTENSION};
