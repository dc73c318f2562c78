// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Colored console output

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::http::ResponseDescriptor;

/// Progress line, e.g. `Executing file: ...`
pub const PROGRESS: Color = Color::Green;
/// Response status line
pub const STATUS: Color = Color::Yellow;
/// `Response:` heading
pub const HEADING: Color = Color::Blue;
/// Error messages
pub const ERROR: Color = Color::Red;

/// Print one colored line to stdout
pub fn message(text: impl Display, color: Color) {
    println!("{}", text.to_string().with(color));
}

/// Print one red line to stderr
pub fn error(text: impl Display) {
    eprintln!("{}", text.to_string().with(ERROR));
}

/// Print the status line and the raw response body
pub fn write_response(out: &mut impl Write, response: &ResponseDescriptor) -> io::Result<()> {
    writeln!(out, "{}", format!("Status: {}", response.status_line()).with(STATUS))?;
    writeln!(out, "{}", "Response:".with(HEADING))?;
    writeln!(out, "{}", response.body)?;
    out.flush()
}
